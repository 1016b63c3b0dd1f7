use super::model::Dataset;

// ---------------------------------------------------------------------------
// Complete-case filtering: which rows have a number in every named column
// ---------------------------------------------------------------------------

/// Return indices of rows holding a number in every one of `columns`.
///
/// A row fails when any named column is missing or text at that row. A
/// column name absent from the dataset fails every row. An empty `columns`
/// slice keeps every row.
pub fn complete_case_indices(dataset: &Dataset, columns: &[&str]) -> Vec<usize> {
    let cells: Option<Vec<_>> = columns.iter().map(|c| dataset.column(c)).collect();
    let Some(cells) = cells else {
        return Vec::new();
    };

    (0..dataset.len())
        .filter(|&row| cells.iter().all(|col| col[row].as_f64().is_some()))
        .collect()
}

/// Extract `(x, y)` pairs for the rows where both columns are numeric.
///
/// Order follows the dataset rows, so repeated calls see the same sequence.
pub fn complete_pairs(dataset: &Dataset, x: &str, y: &str) -> Vec<(f64, f64)> {
    let (Some(xs), Some(ys)) = (dataset.column(x), dataset.column(y)) else {
        return Vec::new();
    };

    xs.iter()
        .zip(ys.iter())
        .filter_map(|(xc, yc)| Some((xc.as_f64()?, yc.as_f64()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn table() -> Dataset {
        let n = |v: f64| CellValue::Number(v);
        Dataset::from_columns(vec![
            ("x".into(), vec![n(1.0), CellValue::Missing, n(3.0), n(4.0)]),
            ("y1".into(), vec![n(2.0), n(4.0), CellValue::Missing, n(8.0)]),
            ("y2".into(), vec![n(1.0), n(1.0), n(1.0), CellValue::Text("x".into())]),
        ])
    }

    #[test]
    fn complete_cases_are_pairwise() {
        let ds = table();
        assert_eq!(complete_case_indices(&ds, &["x", "y1"]), vec![0, 3]);
        assert_eq!(complete_case_indices(&ds, &["x", "y2"]), vec![0, 2]);
        assert_eq!(complete_case_indices(&ds, &["x", "y1", "y2"]), vec![0]);
    }

    #[test]
    fn unknown_column_keeps_nothing() {
        let ds = table();
        assert!(complete_case_indices(&ds, &["x", "nope"]).is_empty());
        assert!(complete_pairs(&ds, "nope", "y1").is_empty());
    }

    #[test]
    fn pairs_follow_row_order() {
        let ds = table();
        assert_eq!(complete_pairs(&ds, "x", "y1"), vec![(1.0, 2.0), (4.0, 8.0)]);
    }
}
