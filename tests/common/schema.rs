use chrono::NaiveDateTime;
use topn::Record;

#[derive(Record, Default, Clone, Debug, PartialEq)]
pub struct Catalog {
    #[column(primary, name = "ID")]
    pub id: i32,
    #[column(name = "Title")]
    pub title: String,
    #[column(name = "Description")]
    pub description: String,
}

/// Covers every value kind plus an unmapped field.
#[derive(Record, Default, Clone, Debug, PartialEq)]
pub struct Reading {
    #[column(primary)]
    pub id: i64,
    pub sensor: String,
    pub samples: u32,
    pub ratio: f64,
    pub active: bool,
    pub taken_at: NaiveDateTime,
    pub note: Option<String>,
    #[column(unmapped)]
    pub raw: Vec<u8>,
}
