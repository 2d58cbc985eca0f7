use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use super::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnType {
    Integer,
    Float,
    Bool,
    Text,
}

pub struct Parser {
    columns: Vec<String>,
}

impl Parser {

    pub fn new(header: Vec<String>) -> Parser {
        Parser {
            columns: unique_columns(header),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    // turn raw rows into records, keeping row order and column order
    // rows must have the same length as the header (parse_csv guarantees it)
    pub fn build_records(&self, rows: Vec<Vec<String>>) -> Vec<Record> {
        let column_types: Vec<ColumnType> = (0..self.columns.len())
            .map(|i| infer_column_type(rows.iter().map(|row| row[i].as_str())))
            .collect();

        tracing::debug!(
            columns = %self.columns.iter().zip(&column_types).map(|(c, t)| format!("{}:{:?}", c, t)).join(", "),
            "inferred column types"
        );

        rows.into_iter()
            .map(|row| {
                let mut record = Record::new();
                for ((column, column_type), text) in self.columns.iter().zip(&column_types).zip(row) {
                    record.push(column.to_owned(), build_value(*column_type, text));
                }
                record
            })
            .collect()
    }
}

// a json object cannot hold the same key twice, so repeated or blank header
// names are renamed instead of letting one column overwrite another
// order: name, name.1, name.2 ... blank names become "Unnamed: <index>"
fn unique_columns(header: Vec<String>) -> Vec<String> {
    let has_blank = header.iter().any(|name| name.is_empty());
    if !has_blank && header.iter().unique().count() == header.len() {
        return header;
    }

    let mut taken: HashSet<String> = header.iter().cloned().collect();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(header.len());

    for (index, name) in header.into_iter().enumerate() {
        let name = if name.is_empty() { format!("Unnamed: {}", index) } else { name };
        let count = seen.entry(name.clone()).or_insert(0);
        let column = if *count == 0 {
            name.clone()
        } else {
            let mut suffix = *count;
            while taken.contains(&format!("{}.{}", name, suffix)) {
                suffix += 1;
            }
            format!("{}.{}", name, suffix)
        };
        *count += 1;

        if column != name {
            tracing::warn!(original = %name, renamed = %column, "duplicate csv header renamed");
        }
        taken.insert(column.clone());
        columns.push(column);
    }

    columns
}

// cells that mean "no value", same list a dataframe reader uses by default
// compared verbatim, so "  " or "Null" stay ordinary cells
const NULL_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_null_marker(cell: &str) -> bool {
    NULL_MARKERS.iter().any(|marker| *marker == cell)
}

// a column takes the narrowest type every non-null cell fits
// order: integer (i64 or u64), float, bool, text
// an integer literal too large for u64 makes the column text, it never goes through f64
fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> ColumnType {
    let mut present = cells.filter(|cell| !is_null_marker(cell)).map(str::trim);

    if present.clone().all(|cell| parse_integer(cell).is_some()) {
        ColumnType::Integer
    } else if present
        .clone()
        .all(|cell| parse_integer(cell).is_some() || (!is_integer_literal(cell) && parse_finite(cell).is_some()))
    {
        ColumnType::Float
    } else if present.all(|cell| parse_bool(cell).is_some()) {
        ColumnType::Bool
    } else {
        ColumnType::Text
    }
}

fn build_value(column_type: ColumnType, text: String) -> FieldValue {
    if is_null_marker(&text) {
        return FieldValue::Null;
    }
    let trimmed = text.trim();

    // the column type was chosen so every non-null cell parses, fall back to text regardless
    let typed = match column_type {
        ColumnType::Integer => parse_integer(trimmed),
        ColumnType::Float => parse_finite(trimmed).map(FieldValue::Float),
        ColumnType::Bool => parse_bool(trimmed).map(FieldValue::Bool),
        ColumnType::Text => None,
    };

    typed.unwrap_or(FieldValue::Text(text))
}

fn parse_integer(text: &str) -> Option<FieldValue> {
    text.parse::<i64>()
        .map(FieldValue::Integer)
        .or_else(|_| text.parse::<u64>().map(FieldValue::Unsigned))
        .ok()
}

// optional sign followed by digits only
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|x| x.is_finite())
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
