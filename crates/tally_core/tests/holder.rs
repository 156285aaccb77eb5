use pretty_assertions::assert_eq;
use tally_core::{
    parse_record_line, render_record_line, RecordData, RecordHolder, RecordLineError, RecordValue,
};

#[test]
fn missing_data_defaults_to_empty_mapping() {
    let holder = RecordHolder::new("test", None);
    assert_eq!(holder.name, "test");
    assert!(holder.data.is_empty());
    assert_eq!(holder.to_records(), "");
    assert_eq!(holder.tally(["a", "a"])["a"], 2);
}

#[test]
fn supplied_data_is_kept_in_insertion_order() {
    let mut data = RecordData::new();
    data.insert("status".to_string(), RecordValue::from("active"));
    data.insert("count".to_string(), RecordValue::from(42));
    let holder = RecordHolder::new("test", Some(data));

    assert_eq!(holder.to_records(), "status: active\ncount: 42\n");
}

#[test]
fn records_have_one_line_per_entry() {
    let holder = RecordHolder::with_entries(
        "test",
        [
            ("count", RecordValue::from(42)),
            ("status", RecordValue::from("active")),
            ("ratio", RecordValue::from(0.5)),
            ("enabled", RecordValue::from(true)),
        ],
    );

    let records = holder.to_records();
    assert_eq!(records.lines().count(), holder.data.len());
    assert_eq!(
        records,
        "count: 42\nstatus: active\nratio: 0.5\nenabled: true\n"
    );
}

#[test]
fn record_lines_are_not_escaped() {
    let line = render_record_line("a: b", &RecordValue::from("c\td"));
    assert_eq!(line, "a: b: c\td");
}

#[test]
fn parse_splits_at_first_separator() {
    let (key, value) = parse_record_line("time: 12: 30").unwrap();
    assert_eq!(key, "time");
    assert_eq!(value, RecordValue::Text("12: 30".into()));

    let (key, value) = parse_record_line("count: 42\r").unwrap();
    assert_eq!(key, "count");
    assert_eq!(value, RecordValue::Int(42));
}

#[test]
fn parse_keeps_empty_values_as_text() {
    let (key, value) = parse_record_line("note: ").unwrap();
    assert_eq!(key, "note");
    assert_eq!(value.as_text(), Some(""));
}

#[test]
fn parse_rejects_lines_without_separator() {
    assert_eq!(
        parse_record_line("no separator"),
        Err(RecordLineError::MissingSeparator("no separator".into()))
    );
}
