use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

/// Write the dataset as CSV, columns in source order, missing cells empty.
pub fn write_csv_to<W: Write>(dataset: &Dataset, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(dataset.column_names())
        .context("writing CSV header")?;

    for row in 0..dataset.len() {
        let record: Vec<String> = dataset
            .column_names()
            .iter()
            .map(|name| {
                dataset
                    .cell(row, name)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Save the dataset to `path` as CSV.
pub fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv_to(dataset, std::io::BufWriter::new(file))?;
    log::info!("Saved {} rows to {}", dataset.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    #[test]
    fn writes_header_and_blank_missing_cells() {
        let ds = Dataset::from_columns(vec![
            (
                "State".into(),
                vec![CellValue::Text("Goa".into()), CellValue::Text("Delhi, NCT".into())],
            ),
            ("Rate".into(), vec![CellValue::Number(1.5), CellValue::Missing]),
        ]);
        let mut buf = Vec::new();
        write_csv_to(&ds, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "State,Rate\nGoa,1.5\n\"Delhi, NCT\",\n");
    }
}
