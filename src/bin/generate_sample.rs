//! Write a synthetic state-level indicator table with the recognised columns.
//!
//! Produces `sample_data.csv` and `sample_data.parquet` in the working
//! directory. Values are invented but keep plausible directions (more
//! schooling, fewer child deaths) so the regression view has something to show.

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use nfhs_explorer::data::schema::recognised_columns;
use parquet::arrow::ArrowWriter;

const STATES: [&str; 12] = [
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Gujarat",
    "Karnataka",
    "Kerala",
    "Ladakh",
    "Maharashtra",
    "Odisha",
    "Tamil Nadu",
    "Telangana",
    "West Bengal",
];
const AREAS: [&str; 3] = ["Urban", "Rural", "Total"];

/// Share of cells blanked out to exercise missing-value handling.
const MISSING_RATE: f64 = 0.04;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One generated row: regressors then responses, in schema order.
struct Row {
    state: &'static str,
    area: &'static str,
    regressors: [f64; 4],
    responses: [f64; 8],
}

fn generate_row(state: &'static str, area: &'static str, rng: &mut SimpleRng) -> Row {
    let urban_boost = match area {
        "Urban" => 12.0,
        "Rural" => -6.0,
        _ => 0.0,
    };
    let literacy = (rng.uniform(55.0, 92.0) + urban_boost).clamp(30.0, 99.0);
    let schooling = (literacy * 0.6 + rng.gauss(-8.0, 6.0)).clamp(5.0, 90.0);
    let clean_fuel = (literacy * 0.9 + rng.gauss(-15.0, 10.0)).clamp(5.0, 99.0);
    let teen_mothers = (22.0 - literacy * 0.18 + rng.gauss(0.0, 2.5)).clamp(0.5, 25.0);

    let deprivation = (100.0 - literacy) / 100.0;
    let neonatal = (8.0 + 40.0 * deprivation + rng.gauss(0.0, 3.0)).max(1.0);
    let infant = neonatal * 1.45 + rng.gauss(0.0, 2.0);
    let under_five = infant * 1.15 + rng.gauss(0.0, 2.0);
    let stunted = 20.0 + 35.0 * deprivation + rng.gauss(0.0, 4.0);
    let wasted = 12.0 + 18.0 * deprivation + rng.gauss(0.0, 3.0);
    let severely_wasted = wasted * 0.38 + rng.gauss(0.0, 1.0);
    let underweight = 15.0 + 40.0 * deprivation + rng.gauss(0.0, 4.0);
    let overweight = 5.0 - 4.0 * deprivation + rng.gauss(0.0, 0.8);

    Row {
        state,
        area,
        regressors: [clean_fuel, literacy, schooling, teen_mothers],
        responses: [
            neonatal,
            infant,
            under_five,
            stunted,
            wasted,
            severely_wasted.max(0.1),
            underweight,
            overweight.max(0.1),
        ],
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut rows = Vec::new();
    for &state in &STATES {
        for &area in &AREAS {
            rows.push(generate_row(state, area, &mut rng));
        }
    }

    let indicator_names: Vec<&str> = recognised_columns().collect();

    // Rounded values with a sprinkling of gaps, one vector per indicator.
    let mut indicator_values: Vec<Vec<Option<f64>>> = vec![Vec::new(); indicator_names.len()];
    for row in &rows {
        for (col, &v) in row.regressors.iter().chain(row.responses.iter()).enumerate() {
            let cell = (rng.next_f64() >= MISSING_RATE).then(|| round1(v));
            indicator_values[col].push(cell);
        }
    }

    // ---- CSV ----
    let csv_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV")?;
    let mut header = vec!["States/UTs", "Area"];
    header.extend(indicator_names.iter().copied());
    writer.write_record(&header).context("writing CSV header")?;
    for (i, row) in rows.iter().enumerate() {
        let mut record = vec![row.state.to_string(), row.area.to_string()];
        record.extend(indicator_values.iter().map(|col| match col[i] {
            Some(v) => v.to_string(),
            None => "*".to_string(),
        }));
        writer.write_record(&record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    // ---- Parquet ----
    let mut fields = vec![
        Field::new("States/UTs", DataType::Utf8, false),
        Field::new("Area", DataType::Utf8, false),
    ];
    fields.extend(
        indicator_names
            .iter()
            .map(|name| Field::new(*name, DataType::Float64, true)),
    );
    let schema = Arc::new(Schema::new(fields));

    let mut columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(rows.iter().map(|r| r.state).collect::<Vec<_>>())),
        Arc::new(StringArray::from(rows.iter().map(|r| r.area).collect::<Vec<_>>())),
    ];
    columns.extend(
        indicator_values
            .iter()
            .map(|col| Arc::new(Float64Array::from(col.clone())) as ArrayRef),
    );

    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let parquet_path = "sample_data.parquet";
    let file = std::fs::File::create(parquet_path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;

    println!(
        "{}",
        arrow::util::pretty::pretty_format_batches(&[batch.slice(0, 3)])
            .context("formatting preview")?
    );
    println!(
        "Wrote {} rows ({} indicators) to {csv_path} and {parquet_path}",
        rows.len(),
        indicator_names.len()
    );
    Ok(())
}
