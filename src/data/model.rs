use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the indicator table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell. Indicator columns are numeric with gaps;
/// identifier columns (state, area) are text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

/// Tokens the survey factsheets use for "no estimate".
const MISSING_MARKERS: [&str; 5] = ["NA", "NaN", "nan", "*", "-"];

impl CellValue {
    /// Parse a raw text cell.
    ///
    /// Empty cells and the usual missing markers become [`CellValue::Missing`].
    /// Estimates published in parentheses, e.g. `(23.4)`, are small-sample
    /// flags and load as plain numbers.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() || MISSING_MARKERS.contains(&s) {
            return CellValue::Missing;
        }
        let unwrapped = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        match unwrapped.trim().parse::<f64>() {
            Ok(v) => CellValue::from_f64(v),
            Err(_) => CellValue::Text(s.to_string()),
        }
    }

    /// Wrap a float, mapping NaN and infinities to `Missing`.
    pub fn from_f64(v: f64) -> Self {
        if v.is_finite() {
            CellValue::Number(v)
        } else {
            CellValue::Missing
        }
    }

    /// Numeric view of the cell; text and missing cells yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, stored column-major.
///
/// A `Dataset` is never modified after loading; analysis code takes `&Dataset`
/// and the application shares it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in source order, whitespace-trimmed.
    column_names: Vec<String>,
    /// column_name → cells, every vector `n_rows` long.
    columns: BTreeMap<String, Vec<CellValue>>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset from a header and row-major records.
    ///
    /// Short records are padded with `Missing`; cells beyond the header are
    /// dropped. Duplicate header names keep the first occurrence.
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<CellValue>>) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let n_rows = records.len();

        let mut column_names = Vec::with_capacity(headers.len());
        let mut positions = Vec::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            if column_names.contains(name) {
                log::warn!("Duplicate column {name:?} ignored");
                continue;
            }
            column_names.push(name.clone());
            positions.push(idx);
        }

        let mut columns: BTreeMap<String, Vec<CellValue>> = column_names
            .iter()
            .map(|name| (name.clone(), Vec::with_capacity(n_rows)))
            .collect();

        for record in records {
            for (name, &idx) in column_names.iter().zip(positions.iter()) {
                let cell = record.get(idx).cloned().unwrap_or(CellValue::Missing);
                if let Some(col) = columns.get_mut(name) {
                    col.push(cell);
                }
            }
        }

        Dataset {
            column_names,
            columns,
            n_rows,
        }
    }

    /// Build a dataset from named columns of equal length.
    pub fn from_columns(named: Vec<(String, Vec<CellValue>)>) -> Self {
        let n_rows = named.first().map(|(_, c)| c.len()).unwrap_or(0);
        let mut column_names = Vec::with_capacity(named.len());
        let mut columns = BTreeMap::new();
        for (name, mut cells) in named {
            let name = name.trim().to_string();
            if columns.contains_key(&name) {
                log::warn!("Duplicate column {name:?} ignored");
                continue;
            }
            cells.resize(n_rows, CellValue::Missing);
            column_names.push(name.clone());
            columns.insert(name, cells);
        }
        Dataset {
            column_names,
            columns,
            n_rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Column names in source order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// All cells of a column.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// A single cell.
    pub fn cell(&self, row: usize, name: &str) -> Option<&CellValue> {
        self.columns.get(name).and_then(|c| c.get(row))
    }

    /// Numeric view of a column: `None` where the cell is missing or text.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name)
            .map(|cells| cells.iter().map(CellValue::as_f64).collect())
    }

    /// Whether a column holds at least one number and no text.
    pub fn is_numeric_column(&self, name: &str) -> bool {
        self.column(name).is_some_and(|cells| {
            cells.iter().any(|c| c.as_f64().is_some())
                && !cells.iter().any(|c| matches!(c, CellValue::Text(_)))
        })
    }

    /// Count of text cells in a column that is expected to be numeric.
    pub fn text_cells(&self, name: &str) -> usize {
        self.column(name)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|c| matches!(c, CellValue::Text(_)))
                    .count()
            })
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_handles_survey_markers() {
        assert_eq!(CellValue::parse("12.5"), CellValue::Number(12.5));
        assert_eq!(CellValue::parse(" (23.4) "), CellValue::Number(23.4));
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("*"), CellValue::Missing);
        assert_eq!(CellValue::parse("NA"), CellValue::Missing);
        assert_eq!(CellValue::parse("inf"), CellValue::Missing);
        assert_eq!(
            CellValue::parse("Kerala"),
            CellValue::Text("Kerala".to_string())
        );
    }

    #[test]
    fn from_records_trims_headers_and_pads_rows() {
        let ds = Dataset::from_records(
            vec![" State ".into(), "Value  ".into()],
            vec![
                vec![CellValue::parse("Goa"), CellValue::parse("1")],
                vec![CellValue::parse("Bihar")],
            ],
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_names(), &["State".to_string(), "Value".to_string()]);
        assert_eq!(ds.numeric_column("Value"), Some(vec![Some(1.0), None]));
        assert!(ds.is_numeric_column("Value"));
        assert!(!ds.is_numeric_column("State"));
    }

    #[test]
    fn duplicate_headers_keep_first() {
        let ds = Dataset::from_records(
            vec!["a".into(), "a".into()],
            vec![vec![CellValue::Number(1.0), CellValue::Number(2.0)]],
        );
        assert_eq!(ds.n_columns(), 1);
        assert_eq!(ds.cell(0, "a"), Some(&CellValue::Number(1.0)));
    }
}
