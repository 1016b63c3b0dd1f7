use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
};
use arrow::datatypes::DataType;
use calamine::{open_workbook_auto, Data, Range, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an indicator table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xls` – first worksheet, header in its first row
/// * `.csv`     – header row, one row per state/area
/// * `.json`    – `[{ "column": value, ... }, ...]`
/// * `.parquet` – flat columns of strings, integers, floats or booleans
///
/// Header names are whitespace-trimmed.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        "xlsx" | "xls" => load_spreadsheet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.n_columns(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// Read the first worksheet of an Excel workbook.
fn load_spreadsheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .context("reading first worksheet")?;
    Ok(dataset_from_range(&range))
}

/// First row of the used range is the header; the rest are records.
fn dataset_from_range(range: &Range<Data>) -> Dataset {
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    let records = rows
        .map(|row| row.iter().map(spreadsheet_cell).collect())
        .collect();
    Dataset::from_records(headers, records)
}

fn spreadsheet_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Float(v) => CellValue::from_f64(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::String(s) => CellValue::parse(s),
        Data::Empty | Data::Error(_) => CellValue::Missing,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per row.
/// Cells go through [`CellValue::parse`], so survey markers like `*` and
/// parenthesised estimates are understood. Ragged rows are accepted.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record.iter().map(CellValue::parse).collect());
    }

    Ok(Dataset::from_records(headers, records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "States/UTs": "Kerala", "Infant mortality rate (per 1000 live births)": 4.4 },
///   ...
/// ]
/// ```
///
/// Column order follows first appearance across the records.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut headers: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_to_cell).unwrap_or(CellValue::Missing))
                .collect()
        })
        .collect();

    Ok(Dataset::from_records(headers, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::Number(n) => n
            .as_f64()
            .map(CellValue::from_f64)
            .unwrap_or(CellValue::Missing),
        JsonValue::String(s) => CellValue::parse(s),
        JsonValue::Null => CellValue::Missing,
        JsonValue::Bool(b) => CellValue::Text(b.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per indicator.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). String columns are parsed like CSV
/// cells so a text-typed indicator column still yields numbers.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows: Vec<Vec<CellValue>> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let n_rows = batch.num_rows();
        let columns = batch.columns();

        for row in 0..n_rows {
            let cells = columns
                .iter()
                .enumerate()
                .map(|(col_idx, col)| {
                    extract_cell(col, row).with_context(|| {
                        format!("Row {row}: failed to read column '{}'", headers[col_idx])
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(cells);
        }
    }

    Ok(Dataset::from_records(headers, rows))
}

// -- Parquet / Arrow helpers --

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Missing);
    }
    let cell = match col.data_type() {
        DataType::Utf8 => CellValue::parse(col.as_string::<i32>().value(row)),
        DataType::LargeUtf8 => CellValue::parse(col.as_string::<i64>().value(row)),
        DataType::Int32 => {
            let arr = downcast::<Int32Array>(col)?;
            CellValue::Number(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = downcast::<Int64Array>(col)?;
            CellValue::Number(arr.value(row) as f64)
        }
        DataType::Float32 => {
            let arr = downcast::<Float32Array>(col)?;
            CellValue::from_f64(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = downcast::<Float64Array>(col)?;
            CellValue::from_f64(arr.value(row))
        }
        DataType::Boolean => {
            let arr = downcast::<BooleanArray>(col)?;
            CellValue::Text(arr.value(row).to_string())
        }
        other => bail!("unsupported column type {other:?}"),
    };
    Ok(cell)
}

fn downcast<T: 'static>(col: &Arc<dyn Array>) -> Result<&T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array layout for {:?}", col.data_type()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "nfhs-explorer-loader-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_trims_headers_and_reads_markers() {
        let path = temp_file(
            "markers.csv",
            " States/UTs ,Area, Rate \nKerala,Urban,(12.5)\nGoa,Rural,*\nBihar,Total,30\n",
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.column_names(),
            &["States/UTs".to_string(), "Area".to_string(), "Rate".to_string()]
        );
        assert_eq!(
            ds.numeric_column("Rate"),
            Some(vec![Some(12.5), None, Some(30.0)])
        );
        assert_eq!(ds.cell(0, "States/UTs"), Some(&CellValue::Text("Kerala".into())));
    }

    #[test]
    fn json_records_collect_all_keys() {
        let path = temp_file(
            "records.json",
            r#"[{"a": 1.5, "b": "x"}, {"a": null, "c": 2}]"#,
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.n_columns(), 3);
        assert_eq!(ds.numeric_column("a"), Some(vec![Some(1.5), None]));
        assert_eq!(ds.numeric_column("c"), Some(vec![None, Some(2.0)]));
    }

    #[test]
    fn unsupported_extensions_fail() {
        assert!(load_file(Path::new("data.txt")).is_err());
        assert!(load_file(Path::new("data")).is_err());
    }

    #[test]
    fn worksheet_rows_become_records() {
        let mut range: Range<Data> = Range::new((0, 0), (3, 2));
        range.set_value((0, 0), Data::String(" States/UTs ".into()));
        range.set_value((0, 1), Data::String("Area".into()));
        range.set_value((0, 2), Data::String("Rate ".into()));
        range.set_value((1, 0), Data::String("Kerala".into()));
        range.set_value((1, 1), Data::String("Urban".into()));
        range.set_value((1, 2), Data::Float(12.5));
        range.set_value((2, 0), Data::String("Goa".into()));
        range.set_value((2, 1), Data::String("Rural".into()));
        range.set_value((2, 2), Data::String("(7.25)".into()));
        range.set_value((3, 0), Data::String("Bihar".into()));
        range.set_value((3, 1), Data::String("Total".into()));
        range.set_value((3, 2), Data::String("*".into()));

        let ds = dataset_from_range(&range);
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.column_names(),
            &["States/UTs".to_string(), "Area".to_string(), "Rate".to_string()]
        );
        assert_eq!(
            ds.numeric_column("Rate"),
            Some(vec![Some(12.5), Some(7.25), None])
        );
        assert_eq!(ds.cell(1, "States/UTs"), Some(&CellValue::Text("Goa".into())));
    }

    #[test]
    fn spreadsheet_cells_map_to_values() {
        assert_eq!(spreadsheet_cell(&Data::Int(30)), CellValue::Number(30.0));
        assert_eq!(spreadsheet_cell(&Data::Float(f64::NAN)), CellValue::Missing);
        assert_eq!(spreadsheet_cell(&Data::Empty), CellValue::Missing);
        assert_eq!(spreadsheet_cell(&Data::String("NA".into())), CellValue::Missing);
        assert_eq!(
            spreadsheet_cell(&Data::Bool(true)),
            CellValue::Text("true".into())
        );
    }

    #[test]
    fn corrupt_workbook_reports_the_path() {
        let path = temp_file("broken.xlsx", "not a zip archive");
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(format!("{err:#}").contains("broken.xlsx"));
    }
}
