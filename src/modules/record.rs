use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// a single typed csv cell, serialized as the bare json scalar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    // whole numbers above i64::MAX
    Unsigned(u64),
    Float(f64),
    Text(String),
}

// one csv row, keyed by column name
// fields keep the column order of the csv header and serialize in that order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    // column names are unique by the time rows are built (see parser)
    pub fn push(&mut self, column: String, value: FieldValue) {
        self.fields.push((column, value));
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(fields: Vec<(&str, FieldValue)>) -> Record {
        let mut record = Record::new();
        for (name, value) in fields {
            record.push(name.to_string(), value);
        }
        record
    }

    #[test]
    fn serializes_in_column_order() {
        let row = record(vec![
            ("zeta", FieldValue::Integer(1)),
            ("alpha", FieldValue::Text("a".to_string())),
            ("middle", FieldValue::Null),
        ]);

        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"zeta":1,"alpha":"a","middle":null}"#
        );
    }

    #[test]
    fn array_reads_back_with_same_rows_and_types() {
        let rows = vec![
            record(vec![
                ("name", FieldValue::Text("Alice".to_string())),
                ("age", FieldValue::Integer(34)),
                ("score", FieldValue::Float(9.5)),
                ("active", FieldValue::Bool(true)),
                ("notes", FieldValue::Null),
            ]),
            record(vec![
                ("name", FieldValue::Text("Bob".to_string())),
                ("age", FieldValue::Unsigned(u64::MAX)),
                ("score", FieldValue::Float(0.25)),
                ("active", FieldValue::Bool(false)),
                ("notes", FieldValue::Text("".to_string())),
            ]),
        ];

        let text = serde_json::to_string(&rows).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            parsed,
            json!([
                {"name": "Alice", "age": 34, "score": 9.5, "active": true, "notes": null},
                {"name": "Bob", "age": u64::MAX, "score": 0.25, "active": false, "notes": ""},
            ])
        );
    }
}
