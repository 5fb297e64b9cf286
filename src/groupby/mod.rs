//! Level selection over a grouping column
//!
//! Rows whose label is not one of the requested levels are dropped silently;
//! a requested level that selects no rows is an error.

use std::fmt::Debug;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::series::Series;

/// Splits the rows of a DataFrame by the labels of one grouping column
#[derive(Debug)]
pub struct GroupSplitter<'a, L>
where
    L: Debug + Clone + PartialEq,
{
    /// Grouping column name
    column: &'a str,
    /// Grouping labels, one per row
    labels: &'a Series<L>,
}

/// Two requested levels laid out over the restricted rows
///
/// `rows` are dataset positions in their original order; `first` and `second`
/// are positions *within* `rows` that carry the first and second level.
#[derive(Debug, Clone)]
pub struct TwoGroupLayout<L> {
    pub rows: Vec<usize>,
    pub labels: Vec<L>,
    pub first: Vec<usize>,
    pub second: Vec<usize>,
}

impl<'a, L> GroupSplitter<'a, L>
where
    L: 'static + Debug + Clone + PartialEq + Send + Sync,
{
    /// Create a splitter over `group_column` of `df`
    pub fn new(df: &'a DataFrame, group_column: &'a str) -> Result<Self> {
        let labels = df.get_column::<L>(group_column)?;
        Ok(GroupSplitter {
            column: group_column,
            labels,
        })
    }

    /// Get the grouping column name
    pub fn column(&self) -> &str {
        self.column
    }

    /// Row positions whose label equals `level`
    pub fn filter_one_group(&self, level: &L) -> Result<Vec<usize>> {
        let rows: Vec<usize> = self
            .labels
            .values()
            .iter()
            .enumerate()
            .filter(|(_, label)| *label == level)
            .map(|(i, _)| i)
            .collect();

        if rows.is_empty() {
            return Err(Error::EmptyGroup {
                column: self.column.to_string(),
                label: format!("{:?}", level),
            });
        }

        Ok(rows)
    }

    /// Row positions for each of the two levels
    pub fn filter_two_groups(&self, level1: &L, level2: &L) -> Result<(Vec<usize>, Vec<usize>)> {
        let first = self.filter_one_group(level1)?;
        let second = self.filter_one_group(level2)?;
        Ok((first, second))
    }

    /// Restrict to rows labelled `level1` or `level2`, keeping dataset order
    pub fn two_group_layout(&self, level1: &L, level2: &L) -> Result<TwoGroupLayout<L>> {
        // Validates that both levels are present
        self.filter_two_groups(level1, level2)?;

        let mut layout = TwoGroupLayout {
            rows: Vec::new(),
            labels: Vec::new(),
            first: Vec::new(),
            second: Vec::new(),
        };

        for (row, label) in self.labels.values().iter().enumerate() {
            let in_first = label == level1;
            let in_second = label == level2;
            if !in_first && !in_second {
                continue;
            }

            let pos = layout.rows.len();
            if in_first {
                layout.first.push(pos);
            }
            if in_second {
                layout.second.push(pos);
            }
            layout.rows.push(row);
            layout.labels.push(label.clone());
        }

        Ok(layout)
    }
}

/// Row positions of `df` labelled `level1` and `level2` in `group_column`
pub fn filter_two_groups<L>(
    df: &DataFrame,
    group_column: &str,
    level1: &L,
    level2: &L,
) -> Result<(Vec<usize>, Vec<usize>)>
where
    L: 'static + Debug + Clone + PartialEq + Send + Sync,
{
    GroupSplitter::new(df, group_column)?.filter_two_groups(level1, level2)
}

/// Row positions of `df` labelled `level` in `group_column`
pub fn filter_one_group<L>(df: &DataFrame, group_column: &str, level: &L) -> Result<Vec<usize>>
where
    L: 'static + Debug + Clone + PartialEq + Send + Sync,
{
    GroupSplitter::new(df, group_column)?.filter_one_group(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column(
            "value".to_string(),
            Series::new(vec![4.0, 3.0, 9.0, 7.0, 5.0], None).unwrap(),
        )
        .unwrap();
        df.add_column(
            "level".to_string(),
            Series::new(
                vec!["A", "A", "C", "B", "B"]
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>(),
                None,
            )
            .unwrap(),
        )
        .unwrap();
        df
    }

    #[test]
    fn test_filter_groups() {
        let df = frame();
        let (a, b) =
            filter_two_groups(&df, "level", &"A".to_string(), &"B".to_string()).unwrap();
        assert_eq!(a, vec![0, 1]);
        assert_eq!(b, vec![3, 4]);

        let c = filter_one_group(&df, "level", &"C".to_string()).unwrap();
        assert_eq!(c, vec![2]);
    }

    #[test]
    fn test_missing_level() {
        let df = frame();
        let err = filter_two_groups(&df, "level", &"A".to_string(), &"Z".to_string()).unwrap_err();
        match err {
            Error::EmptyGroup { column, label } => {
                assert_eq!(column, "level");
                assert_eq!(label, "\"Z\"");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_layout_drops_other_levels() {
        let df = frame();
        let splitter = GroupSplitter::<String>::new(&df, "level").unwrap();
        let layout = splitter
            .two_group_layout(&"A".to_string(), &"B".to_string())
            .unwrap();

        assert_eq!(layout.rows, vec![0, 1, 3, 4]);
        assert_eq!(layout.first, vec![0, 1]);
        assert_eq!(layout.second, vec![2, 3]);
        assert_eq!(layout.labels, vec!["A", "A", "B", "B"]);
    }

    #[test]
    fn test_wrong_label_type() {
        let df = frame();
        assert!(matches!(
            GroupSplitter::<i64>::new(&df, "level"),
            Err(Error::Type(_))
        ));
        assert!(matches!(
            GroupSplitter::<String>::new(&df, "dose"),
            Err(Error::ColumnNotFound(_))
        ));
    }
}
