use csv::{ReaderBuilder, Trim};
use std::{fs::File, io, path::Path};
use super::error::FileError;

pub const START_BANNER: &str = "--- Ministry Platform Bulk Importer ---";
pub const END_BANNER: &str = "--- Process Complete ---";

// read csv, return header and content (in two different vecs)
// every row has exactly as many columns as the header, otherwise the whole file is rejected
pub fn parse_csv(filename: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), FileError> {
    let file = File::open(filename).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(filename.to_owned()),
        _ => FileError::Io { path: filename.to_owned(), source },
    })?;

    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(file);
    let parse_error = |source| FileError::Parse { path: filename.to_owned(), source };

    let header_vec: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|header| header.to_owned())
        .collect();

    if header_vec.is_empty() {
        return Err(FileError::EmptyHeader(filename.to_owned()));
    }

    let mut rows_vec: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let row = record.map_err(parse_error)?;
        rows_vec.push(row.iter().map(|column| column.to_owned()).collect());
    }

    Ok((header_vec, rows_vec))
}

// pretty print a json response the way the api returned it, 2 space indent
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn splits_header_and_rows() {
        let file = csv_file("name, email\nAlice,a@x.com\nBob,b@x.com\n");
        let (header, rows) = parse_csv(file.path()).unwrap();

        assert_eq!(header, vec!["name", "email"]);
        assert_eq!(rows, vec![vec!["Alice", "a@x.com"], vec!["Bob", "b@x.com"]]);
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let file = csv_file("name,email\n");
        let (header, rows) = parse_csv(file.path()).unwrap();

        assert_eq!(header.len(), 2);
        assert!(rows.is_empty());
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let file = csv_file("name,notes\n\"Smith, Jane\",\"said \"\"hi\"\"\"\n");
        let (_, rows) = parse_csv(file.path()).unwrap();

        assert_eq!(rows, vec![vec!["Smith, Jane", "said \"hi\""]]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample-data.csv");

        match parse_csv(&path) {
            Err(FileError::NotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn ragged_row_rejects_the_file() {
        let file = csv_file("name,email\nAlice,a@x.com\nBob\n");
        assert!(matches!(parse_csv(file.path()), Err(FileError::Parse { .. })));
    }

    #[test]
    fn empty_file_has_no_header() {
        let file = csv_file("");
        assert!(matches!(parse_csv(file.path()), Err(FileError::EmptyHeader(_))));
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let value = serde_json::json!([{"Contact_ID": 7}]);
        assert_eq!(pretty_json(&value), "[\n  {\n    \"Contact_ID\": 7\n  }\n]");
    }
}
