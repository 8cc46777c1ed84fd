//! Reads an adoption series from a tabular data file.
//!
//! The format follows the file extension: `.csv` is comma separated,
//! `.txt`/`.tsv`/`.dat` are tab or whitespace delimited, `.xlsx`/`.xls` are
//! read from their first worksheet.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use calamine::{open_workbook_auto, Reader};

use crate::common::{
    bass_error::{BassError, Result},
    enums::DataFormat,
    utils::parse_number,
};
use crate::config::bass_config::LoaderConfig;
use crate::data::data_series::DataSeries;

/// Infer the data format from the file extension
pub fn detect_format(path: &Path) -> Result<DataFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            BassError::UnsupportedFormat(format!("{} has no file extension", path.display()))
        })?;
    DataFormat::from_str(ext)
        .map_err(|_| BassError::UnsupportedFormat(format!("unknown extension .{}", ext)))
}

/// Load the adoption column of a data file into a [`DataSeries`]
pub fn load_series(path: &Path, config: &LoaderConfig) -> Result<DataSeries> {
    let format = detect_format(path)?;
    let rows = match format {
        DataFormat::Csv => read_csv_rows(open(path)?)?,
        DataFormat::Delimited => read_delimited_rows(open(path)?)?,
        DataFormat::Spreadsheet => read_spreadsheet_rows(path)?,
    };

    let values = extract_column(rows, config)?;
    tracing::debug!(
        path = %path.display(),
        %format,
        observations = values.len(),
        "loaded adoption series"
    );
    DataSeries::new(values)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BassError::FileNotFound(path.to_path_buf()),
        _ => BassError::Io(e),
    })
}

fn read_csv_rows(file: File) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn read_delimited_rows(file: File) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = if line.contains('\t') {
            line.split('\t').map(|f| f.trim().to_string()).collect()
        } else {
            line.split_whitespace().map(str::to_string).collect()
        };
        rows.push(fields);
    }
    Ok(rows)
}

fn read_spreadsheet_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    if !path.exists() {
        return Err(BassError::FileNotFound(path.to_path_buf()));
    }
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        BassError::MalformedData(format!("{} has no worksheets", path.display()))
    })??;

    // Empty cells render as "", so blank rows are dropped by extract_column
    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
        .collect())
}

fn extract_column(rows: Vec<Vec<String>>, config: &LoaderConfig) -> Result<Vec<f64>> {
    let col = config.value_column;
    let mut values = Vec::with_capacity(rows.len());

    for (row_idx, row) in rows.iter().enumerate() {
        if row.iter().all(|f| f.is_empty()) {
            continue;
        }
        let field = row.get(col).ok_or_else(|| {
            BassError::MalformedData(format!(
                "row {} has {} columns, value column {} is missing",
                row_idx + 1,
                row.len(),
                col
            ))
        })?;

        match parse_number(field) {
            Some(v) => values.push(v),
            None if row_idx == 0 && config.skip_header => {
                tracing::debug!(header = %field, "skipping header row");
            }
            None => {
                return Err(BassError::MalformedData(format!(
                    "row {} column {}: {:?} is not a number",
                    row_idx + 1,
                    col,
                    field
                )))
            }
        }
    }

    if values.is_empty() {
        return Err(BassError::MalformedData("no numeric rows found".to_string()));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(Path::new("a.csv")).unwrap(), DataFormat::Csv);
        assert_eq!(detect_format(Path::new("a.TXT")).unwrap(), DataFormat::Delimited);
        assert_eq!(
            detect_format(Path::new("a.xlsx")).unwrap(),
            DataFormat::Spreadsheet
        );
        assert!(matches!(
            detect_format(Path::new("a.json")),
            Err(BassError::UnsupportedFormat(_))
        ));
        assert!(detect_format(Path::new("noext")).is_err());
    }

    #[test]
    fn test_load_csv_with_header() {
        let file = temp_file(".csv", "Time,Sales\n1,10\n2,15\n3,20\n");
        let series = load_series(file.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(series.adoptions(), &[10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_load_tab_delimited() {
        let file = temp_file(".txt", "1\t10\n2\t15\n\n3\t20\n");
        let series = load_series(file.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(series.cumulative(), &[10.0, 25.0, 45.0]);
    }

    #[test]
    fn test_load_whitespace_delimited() {
        let file = temp_file(".dat", "period  sales\n1   4.5\n2   5.5\n");
        let series = load_series(file.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(series.adoptions(), &[4.5, 5.5]);
    }

    #[test]
    fn test_custom_column() {
        let file = temp_file(".csv", "7,1\n8,2\n");
        let config = LoaderConfig {
            value_column: 0,
            skip_header: false,
        };
        let series = load_series(file.path(), &config).unwrap();
        assert_eq!(series.adoptions(), &[7.0, 8.0]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_series(Path::new("/nonexistent/sales.csv"), &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, BassError::FileNotFound(_)));
    }

    #[test]
    fn test_single_column_is_malformed() {
        let file = temp_file(".csv", "10\n15\n");
        let err = load_series(file.path(), &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, BassError::MalformedData(_)));
    }

    #[test]
    fn test_non_numeric_body_is_malformed() {
        let file = temp_file(".csv", "1,10\n2,abc\n");
        let err = load_series(file.path(), &LoaderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join(name)
    }

    #[test]
    fn test_load_xlsx_with_header() {
        let series = load_series(&fixture("adoption.xlsx"), &LoaderConfig::default()).unwrap();
        assert_eq!(series.adoptions(), &[10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(series.total(), 100.0);
    }

    #[test]
    fn test_load_xlsx_period_column() {
        let config = LoaderConfig {
            value_column: 0,
            skip_header: true,
        };
        let series = load_series(&fixture("adoption.xlsx"), &config).unwrap();
        assert_eq!(series.adoptions(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_missing_xlsx() {
        let err = load_series(Path::new("/nonexistent/sales.xlsx"), &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, BassError::FileNotFound(_)));
    }

    #[test]
    fn test_corrupt_spreadsheet() {
        let file = temp_file(".xlsx", "not a zip archive");
        let err = load_series(file.path(), &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, BassError::Spreadsheet(_)));
        assert!(err.is_data_err());
    }
}
