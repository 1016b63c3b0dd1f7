//! Descriptive statistics for the overview table.
//!
//! Per numeric column: count, mean, sample standard deviation, min,
//! quartiles (linear interpolation between order statistics) and max.
//! Missing cells are skipped, so `count` varies between columns.

use super::model::Dataset;

/// Summary of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1); `None` with a single value.
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Rows and columns of the loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

pub fn dimensions(dataset: &Dataset) -> Dimensions {
    Dimensions {
        rows: dataset.len(),
        columns: dataset.n_columns(),
    }
}

/// Summaries for every numeric column, in source column order.
pub fn describe(dataset: &Dataset) -> Vec<ColumnSummary> {
    dataset
        .column_names()
        .iter()
        .filter(|name| dataset.is_numeric_column(name))
        .filter_map(|name| {
            let values: Vec<f64> = dataset
                .numeric_column(name)?
                .into_iter()
                .flatten()
                .collect();
            summarize(name, values)
        })
        .collect()
}

/// Summarize raw values; `None` when there are none.
pub fn summarize(column: &str, mut values: Vec<f64>) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = (n > 1).then(|| {
        let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    Some(ColumnSummary {
        column: column.to_string(),
        count: n,
        mean,
        std,
        min: values[0],
        q1: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.5),
        q3: quantile_sorted(&values, 0.75),
        max: values[n - 1],
    })
}

/// Linear-interpolated quantile of non-empty sorted data.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    #[test]
    fn quartiles_interpolate() {
        let s = summarize("v", vec![4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!((s.mean - 2.5).abs() < 1e-12);
        assert!((s.q1 - 1.75).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.q3 - 3.25).abs() < 1e-12);
        assert!((s.std.unwrap() - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_no_std() {
        let s = summarize("v", vec![7.0]).unwrap();
        assert_eq!(s.std, None);
        assert_eq!(s.median, 7.0);
        assert!(summarize("v", Vec::new()).is_none());
    }

    #[test]
    fn describe_skips_text_columns_and_missing_cells() {
        let ds = Dataset::from_columns(vec![
            (
                "State".into(),
                vec![CellValue::Text("Goa".into()), CellValue::Text("Assam".into())],
            ),
            ("Rate".into(), vec![CellValue::Number(3.0), CellValue::Missing]),
        ]);
        let summaries = describe(&ds);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].column, "Rate");
        assert_eq!(summaries[0].count, 1);
        assert_eq!(dimensions(&ds), Dimensions { rows: 2, columns: 2 });
    }
}
