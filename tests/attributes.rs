use common::{MemoryTransport, config};
use topn::prelude::*;
use topn::{FieldDef, Schema, Value, ValueKind};

mod common;

#[derive(Record, Default, Debug)]
struct TwoKeys {
    plain: i32,
    #[column(primary, name = "first_key")]
    first: i32,
    #[column(primary)]
    second: i32,
}

#[derive(Record, Default, Debug, PartialEq)]
struct Gapped {
    #[column(pk)]
    id: i64,
    #[column(unmapped)]
    blob: Vec<u8>,
    label: String,
}

#[derive(Record, Default, Debug)]
struct NoKey {
    #[column(primary = false)]
    a: String,
    #[column(name = "")]
    b: String,
}

#[derive(Record, Default, Debug)]
struct Raw {
    #[column(pk, name = "type")]
    r#type: u8,
}

#[test]
fn derived_fields_follow_declaration_order() {
    assert_eq!(
        TwoKeys::FIELDS,
        &[
            FieldDef::new("plain", "", ValueKind::Integer, false),
            FieldDef::new("first", "first_key", ValueKind::Integer, true),
            FieldDef::new("second", "", ValueKind::Integer, true),
        ]
    );
}

#[test]
fn first_primary_key_wins() {
    let schema = Schema::of::<TwoKeys>();
    assert_eq!(schema.primary_key(), "first_key");
    assert_eq!(schema.columns(), &["plain", "first_key", "second"]);
    assert_eq!(schema.fields(), &["plain", "first", "second"]);
}

#[test]
fn empty_column_name_falls_back_to_field_name() {
    let schema = Schema::of::<NoKey>();
    assert_eq!(schema.columns(), &["a", "b"]);
    assert_eq!(schema.primary_key(), "");
}

#[test]
fn missing_primary_key_degrades_order_and_count() {
    let mut store: DataStore<NoKey, _> =
        DataStore::new("Loose", config(), MemoryTransport::default());

    store.by_page_condition_order(1, 3, &[], &[]);
    assert_eq!(store.last_sql(), "SELECT TOP 3 a,b FROM Loose  ORDER BY ");

    store.count_by_condition(&[]);
    assert_eq!(store.last_sql(), "SELECT COUNT() FROM Loose ");
}

#[test]
fn raw_identifiers_use_the_bare_name() {
    assert_eq!(Raw::FIELDS[0].name, "type");
    assert_eq!(Raw::FIELDS[0].kind, ValueKind::Unsigned);
    assert_eq!(Schema::of::<Raw>().primary_key(), "type");
}

#[test]
fn field_indexes_stay_aligned_around_unmapped() {
    assert_eq!(Gapped::FIELDS[1].kind, ValueKind::Unmapped);
    assert_eq!(Gapped::FIELDS[2].name, "label");

    let mut record = Gapped::default();
    record.set_field(0, Value::Integer(4)).unwrap();
    record.set_field(1, Value::Text("dropped".into())).unwrap();
    record.set_field(2, Value::Text("kept".into())).unwrap();
    assert_eq!(
        record,
        Gapped { id: 4, blob: Vec::new(), label: "kept".into() }
    );
}
