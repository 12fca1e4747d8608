//! Delimited-file loading with per-column type inference

use crate::Result;
use lifestyle_core::Error as CoreError;
use polars::prelude::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, instrument};

/// Load a CSV file with a header row into a DataFrame
///
/// Fails with `NotFound` if `path` does not exist and with `Parse` when a
/// row's field count differs from the header.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_table(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CoreError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CoreError::Io(err),
    })?;

    let df = read_table(file, path)?;
    debug!(rows = df.height(), columns = df.width(), "loaded table");
    Ok(df)
}

/// Read CSV text from any reader; `origin` names the source in errors
///
/// Each field is trimmed. A column whose every field parses as `i64` becomes
/// `Int64`, else `Float64` if every field parses as a float, else `String`.
pub fn read_table<R: Read>(reader: R, origin: &Path) -> Result<DataFrame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|err| parse_error(origin, err.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in rdr.records() {
        let record = record.map_err(|err| parse_error(origin, err.to_string()))?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, raw)| infer_column(name, raw))
        .collect();

    DataFrame::new(columns).map_err(|err| parse_error(origin, err.to_string()).into())
}

fn parse_error(origin: &Path, message: String) -> CoreError {
    CoreError::Parse {
        path: origin.to_path_buf(),
        message,
    }
}

fn infer_column(name: &str, raw: Vec<String>) -> Column {
    let name = PlSmallStr::from(name);

    let ints: Option<Vec<i64>> = raw.iter().map(|s| s.parse().ok()).collect();
    if let Some(ints) = ints {
        return Series::new(name, ints).into();
    }

    let floats: Option<Vec<f64>> = raw.iter().map(|s| s.parse().ok()).collect();
    if let Some(floats) = floats {
        return Series::new(name, floats).into();
    }

    Series::new(name, raw).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<DataFrame> {
        read_table(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn test_type_inference() {
        let df = read("id,score,name\n1,1.5,a\n2,2,b\n").unwrap();
        assert_eq!(df.shape(), (2, 3));
        assert_eq!(df.column("id").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("score").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("name").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let df = read("Heart Rate , Gender\n 70 , Male\n").unwrap();
        let column = df.column("Heart Rate").unwrap();
        assert_eq!(column.dtype(), &DataType::Int64);
        assert_eq!(column.i64().unwrap().get(0), Some(70));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let err = read("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err.core(), Some(CoreError::Parse { .. })));
    }

    #[test]
    fn test_header_only() {
        let df = read("a,b\n").unwrap();
        assert_eq!(df.shape(), (0, 2));
    }

    #[test]
    fn test_duplicate_header_is_parse_error() {
        let err = read("a,a\n1,2\n").unwrap_err();
        assert!(matches!(err.core(), Some(CoreError::Parse { .. })));
    }
}
