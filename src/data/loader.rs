use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::clean::{RawPaper, clean};
use super::model::{PaperDataset, SOURCE_COLUMN};

/// File loaded from the working directory at startup when present.
pub const DEFAULT_DATA_FILE: &str = "metadata.csv";

/// Columns every input file must carry. `source_x` is optional.
pub const REQUIRED_COLUMNS: &[&str] = &["title", "abstract", "journal", "publish_time"];

/// Raised when an input file lacks one of the required columns.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a paper-metadata dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the metadata columns (the usual dump)
/// * `.json`    – `[{ "title": "...", "abstract": "...", ... }, ...]`
/// * `.parquet` – flat Utf8 columns with the same names
pub fn load_file(path: &Path) -> Result<PaperDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PaperDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// CSV layout: header row with column names; empty cells are missing values.
fn read_csv<R: Read>(input: R) -> Result<PaperDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &'static str| headers.iter().position(|h| h == name);
    let title_idx = column("title").ok_or(SchemaError::MissingColumn("title"))?;
    let abstract_idx = column("abstract").ok_or(SchemaError::MissingColumn("abstract"))?;
    let journal_idx = column("journal").ok_or(SchemaError::MissingColumn("journal"))?;
    let publish_idx = column("publish_time").ok_or(SchemaError::MissingColumn("publish_time"))?;
    let source_idx = headers.iter().position(|h| h == SOURCE_COLUMN);

    let mut papers = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let raw = RawPaper {
            title: cell(&record, title_idx),
            abstract_text: cell(&record, abstract_idx),
            journal: cell(&record, journal_idx),
            publish_time: cell(&record, publish_idx),
            source: source_idx.and_then(|i| cell(&record, i)),
        };
        papers.push(clean(raw));
    }

    Ok(PaperDataset::new(papers, headers))
}

fn cell(record: &csv::StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "title": "Viral load dynamics",
///     "abstract": "We measured ...",
///     "journal": "The Lancet",
///     "publish_time": "2021-06-01",
///     "source_x": "PMC"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<PaperDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    read_json(&text)
}

fn read_json(text: &str) -> Result<PaperDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    // The raw "schema" of a records file is the union of keys, in first
    // appearance order.
    let mut column_names: Vec<String> = Vec::new();
    for record in records {
        if let Some(obj) = record.as_object() {
            for key in obj.keys() {
                if !column_names.iter().any(|c| c == key) {
                    column_names.push(key.clone());
                }
            }
        }
    }
    for &required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|c| c == required) {
            return Err(SchemaError::MissingColumn(required).into());
        }
    }

    let mut papers = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        record
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        let raw: RawPaper = serde_json::from_value(record.clone())
            .with_context(|| format!("Row {i}: invalid record"))?;
        papers.push(clean(raw));
    }

    Ok(PaperDataset::new(papers, column_names))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat Utf8 metadata columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<PaperDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut papers = Vec::new();
    let mut column_names: Vec<String> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if column_names.is_empty() {
            column_names = schema.fields().iter().map(|f| f.name().clone()).collect();
        }

        let column = |name: &'static str| {
            schema
                .index_of(name)
                .map(|i| batch.column(i).clone())
                .map_err(|_| SchemaError::MissingColumn(name))
        };
        let title_col = column("title")?;
        let abstract_col = column("abstract")?;
        let journal_col = column("journal")?;
        let publish_col = column("publish_time")?;
        let source_col = schema
            .index_of(SOURCE_COLUMN)
            .ok()
            .map(|i| batch.column(i).clone());

        for row in 0..batch.num_rows() {
            let raw = RawPaper {
                title: opt_string(&title_col, row),
                abstract_text: opt_string(&abstract_col, row),
                journal: opt_string(&journal_col, row),
                publish_time: opt_string(&publish_col, row),
                source: source_col.as_ref().and_then(|c| opt_string(c, row)),
            };
            papers.push(clean(raw));
        }
    }

    Ok(PaperDataset::new(papers, column_names))
}

/// Extract a non-empty string cell from an Arrow column at a given row.
fn opt_string(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row).to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        _ => return None,
    };
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_FIXTURE: &str = "\
title,abstract,journal,publish_time,source_x
Viral load dynamics,We measured viral load.,The Lancet,2020-03-14,PMC
,,,n.d.,
Mask effectiveness,Masks reduce transmission.,BMJ,2021-01-05,Elsevier
";

    #[test]
    fn csv_rows_are_cleaned_on_load() {
        let ds = read_csv(CSV_FIXTURE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(ds.has_source);
        assert_eq!(ds.year_bounds, Some((2020, 2021)));

        let blank = &ds.papers[1];
        assert_eq!(blank.title, "No Title");
        assert_eq!(blank.journal, "Unknown Journal");
        assert_eq!(blank.abstract_word_count, 0);
        assert_eq!(blank.year, None);
    }

    #[test]
    fn loading_the_same_input_twice_is_identical() {
        let first = read_csv(CSV_FIXTURE.as_bytes()).unwrap();
        let second = read_csv(CSV_FIXTURE.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn csv_missing_required_column_is_an_error() {
        let err = read_csv("title,journal\nA,B\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("abstract"));
    }

    #[test]
    fn csv_without_source_column_disables_sources() {
        let ds = read_csv(
            "title,abstract,journal,publish_time\nA,,J,2020-01-01\n".as_bytes(),
        )
        .unwrap();
        assert!(!ds.has_source);
        assert_eq!(ds.papers[0].source, None);
    }

    #[test]
    fn json_records_load_and_clean() {
        let text = r#"[
            {"title": "Hello World", "abstract": "a b c", "journal": "Nature",
             "publish_time": "2020-05-01", "source_x": "PMC"},
            {"title": null, "abstract": null, "journal": null, "publish_time": null}
        ]"#;
        let ds = read_json(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.has_source);
        assert_eq!(ds.papers[0].abstract_word_count, 3);
        assert_eq!(ds.papers[1].title, "No Title");
    }

    #[test]
    fn json_missing_required_column_is_an_error() {
        let err = read_json(r#"[{"title": "A"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing required column"));
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        assert!(load_file(Path::new("metadata.xlsx")).is_err());
    }
}
