use data_profiler::ingestion::{ingest_upload, IngestOptions};
use data_profiler::types::{ColumnType, Value};
use data_profiler::ProfileError;

const PEOPLE: &[u8] = b"id,name,score,active\n1,Ada,98.5,true\n2,Grace,87.25,false\n";

#[test]
fn ingest_csv_happy_path() {
    let table = ingest_upload(PEOPLE, "people.csv", &IngestOptions::default()).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 4);
    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        vec!["id", "name", "score", "active"]
    );
    assert_eq!(table.columns[0].cells[0], Value::Int64(1));
    assert_eq!(table.columns[1].cells[0], Value::Utf8("Ada".to_string()));
    assert_eq!(table.columns[2].cells[1], Value::Float64(87.25));
    assert_eq!(table.columns[3].cells[1], Value::Bool(false));
}

#[test]
fn ingest_csv_preserves_row_order() {
    let input = b"v\n3\n1\n2\n";
    let table = ingest_upload(input, "v.csv", &IngestOptions::default()).unwrap();
    assert_eq!(
        table.columns[0].cells,
        vec![Value::Int64(3), Value::Int64(1), Value::Int64(2)]
    );
}

#[test]
fn ingest_csv_missing_cells_become_null_markers() {
    let input = b"a,b\n1,\n,mark\n";
    let table = ingest_upload(input, "gaps.csv", &IngestOptions::default()).unwrap();

    assert_eq!(table.columns[0].cells[1], Value::Null);
    assert_eq!(table.columns[1].cells[0], Value::Null);
    // The marker is not a string.
    assert_ne!(table.columns[1].cells[0], Value::Utf8(String::new()));
    assert_ne!(table.columns[1].cells[0], Value::Utf8("null".to_string()));
}

#[test]
fn ingest_csv_normalizes_comma_decimal_columns() {
    let input = b"price,label\n\"1,5\",a\n\"2,0\",b\n\"3,5\",c\n";
    let table = ingest_upload(input, "prices.csv", &IngestOptions::default()).unwrap();

    assert_eq!(table.columns[0].column_type, ColumnType::Float64);
    assert_eq!(
        table.columns[0].cells,
        vec![
            Value::Float64(1.5),
            Value::Float64(2.0),
            Value::Float64(3.5)
        ]
    );
    assert_eq!(table.columns[1].column_type, ColumnType::Utf8);
}

#[test]
fn ingest_csv_leaves_mixed_text_column_unchanged() {
    let input = b"v\n\"1,5\"\nabc\n";
    let table = ingest_upload(input, "mixed.csv", &IngestOptions::default()).unwrap();

    assert_eq!(table.columns[0].column_type, ColumnType::Utf8);
    assert_eq!(table.columns[0].cells[0], Value::Utf8("1,5".to_string()));
    assert_eq!(table.columns[0].cells[1], Value::Utf8("abc".to_string()));
}

#[test]
fn ingest_csv_normalization_can_be_disabled() {
    let input = b"price\n\"1,5\"\n\"2,0\"\n";
    let opts = IngestOptions {
        normalize_decimals: false,
        ..Default::default()
    };
    let table = ingest_upload(input, "prices.csv", &opts).unwrap();
    assert_eq!(table.columns[0].column_type, ColumnType::Utf8);
    assert_eq!(table.columns[0].cells[0], Value::Utf8("1,5".to_string()));
}

#[test]
fn ingest_csv_empty_upload_is_empty_input() {
    let err = ingest_upload(b"", "empty.csv", &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, ProfileError::EmptyInput));
}

#[test]
fn ingest_csv_ragged_row_is_malformed() {
    let input = b"a,b\n1,2\n1,2,3\n";
    let err = ingest_upload(input, "ragged.csv", &IngestOptions::default()).unwrap_err();
    match err {
        ProfileError::MalformedInput { message } => assert!(!message.is_empty()),
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}
