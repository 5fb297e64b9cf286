use resamplrs::error::Error;
use resamplrs::groupby::{filter_one_group, filter_two_groups, GroupSplitter};
use resamplrs::{DataFrame, Series};

fn labelled_frame() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_column(
        "value".to_string(),
        Series::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], None).unwrap(),
    )
    .unwrap();
    df.add_column(
        "group".to_string(),
        Series::new(
            vec![
                "x".to_string(),
                "y".to_string(),
                "z".to_string(),
                "x".to_string(),
                "z".to_string(),
                "y".to_string(),
            ],
            None,
        )
        .unwrap(),
    )
    .unwrap();
    df
}

#[test]
fn test_filter_groups() {
    let df = labelled_frame();

    let rows = filter_one_group(&df, "group", &"z".to_string()).unwrap();
    assert_eq!(rows, vec![2, 4]);

    let (x, y) = filter_two_groups(&df, "group", &"x".to_string(), &"y".to_string()).unwrap();
    assert_eq!(x, vec![0, 3]);
    assert_eq!(y, vec![1, 5]);
}

#[test]
fn test_two_group_layout_drops_other_levels() {
    let df = labelled_frame();
    let splitter = GroupSplitter::<String>::new(&df, "group").unwrap();
    assert_eq!(splitter.column(), "group");

    let layout = splitter
        .two_group_layout(&"y".to_string(), &"x".to_string())
        .unwrap();
    assert_eq!(layout.rows, vec![0, 1, 3, 5]);
    assert_eq!(layout.labels, vec!["x", "y", "x", "y"]);
    assert_eq!(layout.first, vec![1, 3]);
    assert_eq!(layout.second, vec![0, 2]);
}

#[test]
fn test_empty_group() {
    let df = labelled_frame();
    let err = filter_one_group(&df, "group", &"w".to_string()).unwrap_err();
    match err {
        Error::EmptyGroup { column, label } => {
            assert_eq!(column, "group");
            assert_eq!(label, "\"w\"");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_group_column_errors() {
    let df = labelled_frame();
    assert!(matches!(
        GroupSplitter::<String>::new(&df, "missing"),
        Err(Error::ColumnNotFound(_))
    ));
    assert!(matches!(
        GroupSplitter::<i64>::new(&df, "group"),
        Err(Error::Type(_))
    ));
}
