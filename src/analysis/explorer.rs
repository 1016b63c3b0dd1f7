//! One regression run per selection.

use crate::data::model::Dataset;
use crate::data::schema::{DependentVar, IndependentVar, Schema};
use crate::error::FitError;

use super::regression::{fit_pair, FittedModel};

/// The variables currently chosen in the regression view.
///
/// Dependents keep the order they were picked in and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub independent: Option<IndependentVar>,
    dependents: Vec<DependentVar>,
}

impl Selection {
    pub fn new(independent: IndependentVar, dependents: &[DependentVar]) -> Self {
        let mut selection = Selection {
            independent: Some(independent),
            dependents: Vec::new(),
        };
        for &dep in dependents {
            selection.add_dependent(dep);
        }
        selection
    }

    pub fn dependents(&self) -> &[DependentVar] {
        &self.dependents
    }

    pub fn contains(&self, dep: DependentVar) -> bool {
        self.dependents.contains(&dep)
    }

    /// Append `dep` unless it is already selected.
    pub fn add_dependent(&mut self, dep: DependentVar) {
        if !self.contains(dep) {
            self.dependents.push(dep);
        }
    }

    pub fn remove_dependent(&mut self, dep: DependentVar) {
        self.dependents.retain(|&d| d != dep);
    }

    /// Add or remove `dep`; returns whether it is selected afterwards.
    pub fn toggle_dependent(&mut self, dep: DependentVar) -> bool {
        if self.contains(dep) {
            self.remove_dependent(dep);
            false
        } else {
            self.add_dependent(dep);
            true
        }
    }

    /// Both a regressor and at least one response are chosen.
    pub fn is_ready(&self) -> bool {
        self.independent.is_some() && !self.dependents.is_empty()
    }
}

/// Result of fitting one response against the chosen regressor.
#[derive(Debug, Clone, PartialEq)]
pub struct PairOutcome {
    pub dependent: DependentVar,
    pub result: Result<FittedModel, FitError>,
}

/// What the regression view shows for a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRun {
    /// Nothing to fit yet: no regressor or no responses selected.
    Idle,
    /// One outcome per selected response, in selection order.
    Ran {
        independent: IndependentVar,
        outcomes: Vec<PairOutcome>,
    },
}

impl AnalysisRun {
    pub fn outcomes(&self) -> &[PairOutcome] {
        match self {
            AnalysisRun::Idle => &[],
            AnalysisRun::Ran { outcomes, .. } => outcomes,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = (DependentVar, &FitError)> {
        self.outcomes()
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.dependent, e)))
    }
}

/// Fit every selected response against the selected regressor.
///
/// Each pair uses its own complete rows. A failed pair does not stop the
/// others. Column names come from the bound [`Schema`], so only validated
/// datasets reach here.
pub fn analyze(dataset: &Dataset, schema: &Schema, selection: &Selection) -> AnalysisRun {
    let Some(independent) = selection.independent else {
        return AnalysisRun::Idle;
    };
    if selection.dependents.is_empty() {
        return AnalysisRun::Idle;
    }

    let x = schema.regressor_column(independent);
    let outcomes = selection
        .dependents
        .iter()
        .map(|&dependent| PairOutcome {
            dependent,
            result: fit_pair(dataset, x, schema.response_column(dependent)),
        })
        .collect();

    AnalysisRun::Ran {
        independent,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use crate::data::schema::recognised_columns;

    /// Every recognised column, with literacy/stunting/wasting filled in.
    fn dataset() -> Dataset {
        let n = CellValue::Number;
        let m = CellValue::Missing;
        let literacy = IndependentVar::WomenLiterate.column_name();
        let stunted = DependentVar::Stunted.column_name();
        let wasted = DependentVar::Wasted.column_name();
        let columns = recognised_columns()
            .map(|name| {
                let cells = if name == literacy {
                    vec![n(60.0), n(70.0), n(80.0), n(90.0)]
                } else if name == stunted {
                    vec![n(40.0), n(35.0), m.clone(), n(25.0)]
                } else if name == wasted {
                    vec![m.clone(), m.clone(), n(10.0), m.clone()]
                } else {
                    vec![m.clone(); 4]
                };
                (name.to_string(), cells)
            })
            .collect();
        Dataset::from_columns(columns)
    }

    #[test]
    fn selection_keeps_order_without_duplicates() {
        let mut sel = Selection::new(
            IndependentVar::WomenLiterate,
            &[DependentVar::Wasted, DependentVar::Stunted, DependentVar::Wasted],
        );
        assert_eq!(sel.dependents(), &[DependentVar::Wasted, DependentVar::Stunted]);
        assert!(!sel.toggle_dependent(DependentVar::Wasted));
        assert!(sel.toggle_dependent(DependentVar::Overweight));
        assert_eq!(
            sel.dependents(),
            &[DependentVar::Stunted, DependentVar::Overweight]
        );
    }

    #[test]
    fn empty_selection_is_idle() {
        let ds = dataset();
        let schema = Schema::bind(&ds).unwrap();
        assert_eq!(analyze(&ds, &schema, &Selection::default()), AnalysisRun::Idle);

        let no_deps = Selection::new(IndependentVar::WomenLiterate, &[]);
        assert!(!no_deps.is_ready());
        assert_eq!(analyze(&ds, &schema, &no_deps), AnalysisRun::Idle);
    }

    #[test]
    fn failures_sit_beside_successes() {
        let ds = dataset();
        let schema = Schema::bind(&ds).unwrap();
        let sel = Selection::new(
            IndependentVar::WomenLiterate,
            &[DependentVar::Wasted, DependentVar::Stunted],
        );
        let run = analyze(&ds, &schema, &sel);
        let outcomes = run.outcomes();
        assert_eq!(outcomes.len(), 2);

        assert_eq!(outcomes[0].dependent, DependentVar::Wasted);
        assert!(matches!(
            outcomes[0].result,
            Err(FitError::InsufficientData { rows: 1, .. })
        ));

        assert_eq!(outcomes[1].dependent, DependentVar::Stunted);
        let model = outcomes[1].result.as_ref().unwrap();
        assert_eq!(model.n_observations, 3);
        assert!((model.slope + 0.5).abs() < 1e-12);

        assert_eq!(run.failures().count(), 1);
    }
}
