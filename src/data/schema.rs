//! Recognised indicator columns.
//!
//! The regression view offers a fixed menu of survey indicators. Each one is
//! an enum variant here, so the rest of the code never handles raw column
//! strings. [`Schema::bind`] checks the whole menu against a freshly loaded
//! dataset and refuses it up front if any name is absent.

use std::fmt;

use crate::data::model::Dataset;
use crate::error::SchemaError;

/// Household and maternal circumstances offered as the regressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndependentVar {
    CleanCookingFuel,
    WomenLiterate,
    WomenTenYearsSchooling,
    TeenageMotherhood,
}

impl IndependentVar {
    pub const ALL: [IndependentVar; 4] = [
        IndependentVar::CleanCookingFuel,
        IndependentVar::WomenLiterate,
        IndependentVar::WomenTenYearsSchooling,
        IndependentVar::TeenageMotherhood,
    ];

    /// Column header as published in the NFHS-5 factsheet export.
    pub fn column_name(self) -> &'static str {
        match self {
            IndependentVar::CleanCookingFuel => "Households using clean fuel for cooking3 (%)",
            IndependentVar::WomenLiterate => "Women (age 15-49) who are literate4 (%)",
            IndependentVar::WomenTenYearsSchooling => {
                "Women (age 15-49)  with 10 or more years of schooling (%)"
            }
            IndependentVar::TeenageMotherhood => {
                "Women age 15-19 years who were already mothers or pregnant at the time of the survey (%)"
            }
        }
    }
}

impl fmt::Display for IndependentVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Child health outcomes offered as responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DependentVar {
    NeonatalMortality,
    InfantMortality,
    UnderFiveMortality,
    Stunted,
    Wasted,
    SeverelyWasted,
    Underweight,
    Overweight,
}

impl DependentVar {
    pub const ALL: [DependentVar; 8] = [
        DependentVar::NeonatalMortality,
        DependentVar::InfantMortality,
        DependentVar::UnderFiveMortality,
        DependentVar::Stunted,
        DependentVar::Wasted,
        DependentVar::SeverelyWasted,
        DependentVar::Underweight,
        DependentVar::Overweight,
    ];

    /// Column header as published in the NFHS-5 factsheet export.
    pub fn column_name(self) -> &'static str {
        match self {
            DependentVar::NeonatalMortality => "Neonatal mortality rate (per 1000 live births)",
            DependentVar::InfantMortality => "Infant mortality rate (per 1000 live births)",
            DependentVar::UnderFiveMortality => "Under-five mortality rate (per 1000 live births)",
            DependentVar::Stunted => "Children under 5 years who are stunted (height-for-age)18 (%)",
            DependentVar::Wasted => "Children under 5 years who are wasted (weight-for-height)18 (%)",
            DependentVar::SeverelyWasted => {
                "Children under 5 years who are severely wasted (weight-for-height)19 (%)"
            }
            DependentVar::Underweight => {
                "Children under 5 years who are underweight (weight-for-age)18 (%)"
            }
            DependentVar::Overweight => {
                "Children under 5 years who are overweight (weight-for-height)20 (%)"
            }
        }
    }
}

impl fmt::Display for DependentVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Every recognised column name, regressors first.
pub fn recognised_columns() -> impl Iterator<Item = &'static str> {
    IndependentVar::ALL
        .iter()
        .map(|v| v.column_name())
        .chain(DependentVar::ALL.iter().map(|v| v.column_name()))
}

/// Proof that a dataset carries every recognised column.
///
/// Only [`Schema::bind`] constructs it, so holding a `Schema` means typed
/// lookups by [`IndependentVar`] / [`DependentVar`] cannot miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    _bound: (),
}

impl Schema {
    /// Check the dataset against the recognised columns.
    ///
    /// Reports every absent name at once. Text cells inside a recognised
    /// column are tolerated (they read as missing) but logged.
    pub fn bind(dataset: &Dataset) -> Result<Schema, SchemaError> {
        let missing: Vec<String> = recognised_columns()
            .filter(|name| !dataset.has_column(name))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            return Err(SchemaError::Mismatch { missing });
        }

        for name in recognised_columns() {
            let text = dataset.text_cells(name);
            if text > 0 {
                log::warn!("Column {name:?} has {text} non-numeric cells, treated as missing");
            }
        }

        log::info!(
            "Schema bound: {} regressors, {} responses",
            IndependentVar::ALL.len(),
            DependentVar::ALL.len()
        );
        Ok(Schema { _bound: () })
    }

    /// Dataset column holding `var`.
    pub fn regressor_column(&self, var: IndependentVar) -> &'static str {
        var.column_name()
    }

    /// Dataset column holding `var`.
    pub fn response_column(&self, var: DependentVar) -> &'static str {
        var.column_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn dataset_with(names: &[&str]) -> Dataset {
        Dataset::from_columns(
            names
                .iter()
                .map(|n| (n.to_string(), vec![CellValue::Number(1.0)]))
                .collect(),
        )
    }

    #[test]
    fn binds_when_all_columns_present() {
        let names: Vec<&str> = recognised_columns().collect();
        assert_eq!(names.len(), 12);
        assert!(Schema::bind(&dataset_with(&names)).is_ok());
    }

    #[test]
    fn bound_columns_resolve_in_the_dataset() {
        let names: Vec<&str> = recognised_columns().collect();
        let ds = dataset_with(&names);
        let schema = Schema::bind(&ds).unwrap();
        for var in IndependentVar::ALL {
            assert!(ds.has_column(schema.regressor_column(var)));
        }
        for var in DependentVar::ALL {
            assert!(ds.has_column(schema.response_column(var)));
        }
    }

    #[test]
    fn mismatch_lists_every_absent_column() {
        let names: Vec<&str> = recognised_columns()
            .filter(|n| {
                *n != IndependentVar::WomenLiterate.column_name()
                    && *n != DependentVar::Overweight.column_name()
            })
            .collect();
        match Schema::bind(&dataset_with(&names)) {
            Err(SchemaError::Mismatch { missing }) => {
                assert_eq!(
                    missing,
                    vec![
                        IndependentVar::WomenLiterate.column_name().to_string(),
                        DependentVar::Overweight.column_name().to_string(),
                    ]
                );
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn schooling_header_keeps_inner_double_space() {
        assert!(IndependentVar::WomenTenYearsSchooling
            .column_name()
            .contains("15-49)  with"));
    }
}
