use std::fmt::Debug;

use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::series::Series;

/// Every resample of a hypothesis run, column by column
///
/// The first column is the grouping label of each restricted row and each
/// following column is one resample of the target values. Handy for showing
/// how the resampling redistributes values across the two levels.
#[derive(Debug, Clone)]
pub struct ResampledTable<L> {
    group_column: String,
    labels: Vec<L>,
    columns: Vec<Vec<f64>>,
}

impl<L> ResampledTable<L>
where
    L: 'static + Debug + Clone + Send + Sync,
{
    pub(crate) fn new(group_column: String, labels: Vec<L>, capacity: usize) -> Self {
        ResampledTable {
            group_column,
            labels,
            columns: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, resample: Vec<f64>) {
        self.columns.push(resample);
    }

    /// Name of the grouping column
    pub fn group_column(&self) -> &str {
        &self.group_column
    }

    /// Grouping label per row
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// The resampled columns, in draw order
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Number of resamples held
    pub fn resample_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows per resample
    pub fn row_count(&self) -> usize {
        self.labels.len()
    }

    /// Lay the table out as a DataFrame: the grouping column, then `1..=R`
    ///
    /// Fails with `DuplicateColumnName` when the grouping column itself is
    /// named like one of the resample columns (`"1"` up to `"R"`).
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut df = DataFrame::new();
        df.add_column(
            self.group_column.clone(),
            Series::new(self.labels.clone(), Some(self.group_column.clone()))?,
        )?;

        for (i, column) in self.columns.iter().enumerate() {
            let name = (i + 1).to_string();
            df.add_column(name.clone(), Series::new(column.clone(), Some(name))?)?;
        }

        Ok(df)
    }
}
