// tests/parser.rs
//
// Tabular parser behavior: quoting, row shaping, header lookups.
//
use lookbook::csv::{parse_rows, rows_to_string, Delim, Table};

#[test]
fn quoted_cells_keep_delimiters_and_line_breaks() {
    let text = "id,description\n07,\"long, pleated\nskirt\"\n";
    let rows = parse_rows(text, Delim::Csv);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["07".to_string(), "long, pleated\nskirt".to_string()]);
}

#[test]
fn doubled_quotes_are_literal() {
    let rows = parse_rows("a\n\"say \"\"hi\"\"\"\n", Delim::Csv);
    assert_eq!(rows[1][0], "say \"hi\"");
}

#[test]
fn round_trip_preserves_awkward_fields() {
    let original = vec![
        vec!["07".to_string(), "a, b".to_string(), "two\nlines".to_string()],
        vec!["08".to_string(), "\"quoted\"".to_string(), "plain".to_string()],
    ];
    let text = rows_to_string(&original, &None, Delim::Csv);
    let parsed = parse_rows(&text, Delim::Csv);
    assert_eq!(parsed, original);
}

#[test]
fn unterminated_quote_never_panics() {
    // Malformed quoting degrades, it does not error.
    let rows = parse_rows("id,name\n07,\"no closing quote", Delim::Csv);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], "no closing quote");
}

#[test]
fn crlf_and_bare_lf_both_terminate_rows() {
    let rows = parse_rows("a,b\r\n1,2\n3,4", Delim::Csv);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], vec!["3".to_string(), "4".to_string()]);
}

#[test]
fn table_pads_short_rows_and_drops_extras() {
    let table = Table::from_text("id,name,size\n07,Skirt\n08,Coat,M,extra,cells\n", Delim::Csv);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["07", "Skirt", ""]);
    assert_eq!(table.rows[1], vec!["08", "Coat", "M"]);
}

#[test]
fn blank_rows_are_skipped() {
    let table = Table::from_text("id,name\n,,\n  , \n07,Skirt\n", Delim::Csv);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.field(&table.rows[0], "name"), "Skirt");
}

#[test]
fn header_lookup_is_case_insensitive_and_trimmed() {
    let table = Table::from_text(" ID , Name \n07,Skirt\n", Delim::Csv);
    assert_eq!(table.field(&table.rows[0], "id"), "07");
    assert_eq!(table.field(&table.rows[0], "NAME"), "Skirt");
    // Absent header yields empty string, not an error.
    assert_eq!(table.field(&table.rows[0], "missing"), "");
}

#[test]
fn image_column_detection_first_match_wins() {
    let table = Table::from_text("id,product image,img alt,name\n07,a.jpg,alt,Skirt\n", Delim::Csv);
    // Both columns match; declaration order breaks the tie.
    assert_eq!(table.col_containing(&["thumbnail", "image", "img", "pic"]), Some(1));
}

#[test]
fn row_order_is_input_order() {
    let table = Table::from_text("id\n3\n1\n2\n", Delim::Csv);
    let ids: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}
