use super::*;

#[test]
fn example_query_runs() {
    let result = execute(EXAMPLE_QUERY).unwrap();
    assert_eq!(result.columns, vec!["name", "country"]);
    assert_eq!(row_summary(&result), "4 rows");
}

#[test]
fn row_summary_is_singular_for_one_row() {
    let result = execute("SELECT name FROM users WHERE id = 1").unwrap();
    assert_eq!(row_summary(&result), "1 row");
}
