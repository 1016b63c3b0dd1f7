use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nfhs_explorer::data::describe::{self, ColumnSummary};
use nfhs_explorer::data::{export, loader};
use nfhs_explorer::{
    analyze, AnalysisRun, Dataset, DependentVar, ExplorerConfig, IndependentVar, Schema, Selection,
};

use crate::color::SeriesColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Regression,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ExplorerConfig,

    /// Loaded dataset (None until a file is loaded and its schema binds).
    pub dataset: Option<Arc<Dataset>>,

    /// Schema binding for the loaded dataset.
    pub schema: Option<Schema>,

    /// File the dataset came from.
    pub source_path: Option<PathBuf>,

    /// Describe table for the overview (cached per dataset).
    pub summaries: Vec<ColumnSummary>,

    /// Chosen regressor and responses.
    pub selection: Selection,

    /// Fits for the current selection; rebuilt on every selection change.
    pub analysis: AnalysisRun,

    /// What-if inputs, keyed by pair so each response keeps its own value.
    pub prediction_inputs: BTreeMap<(IndependentVar, DependentVar), f64>,

    pub colors: SeriesColors,

    pub tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            dataset: None,
            schema: None,
            source_path: None,
            summaries: Vec::new(),
            selection: Selection::new(IndependentVar::ALL[0], &[]),
            analysis: AnalysisRun::Idle,
            prediction_inputs: BTreeMap::new(),
            colors: SeriesColors::default(),
            tab: Tab::Overview,
            status_message: None,
        }
    }

    /// Load a file, bind its schema and make it the active dataset.
    ///
    /// On failure the previous dataset stays active and the error is logged
    /// and kept for the status line.
    pub fn load_path(&mut self, path: &Path) {
        let result = loader::load_file(path).and_then(|dataset| {
            let schema = Schema::bind(&dataset)?;
            Ok((dataset, schema))
        });

        match result {
            Ok((dataset, schema)) => {
                self.set_dataset(dataset, schema);
                self.source_path = Some(path.to_path_buf());
                self.status_message = Some(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and rerun the current selection on it.
    pub fn set_dataset(&mut self, dataset: Dataset, schema: Schema) {
        self.summaries = describe::describe(&dataset);
        self.dataset = Some(Arc::new(dataset));
        self.schema = Some(schema);
        self.prediction_inputs.clear();
        self.status_message = None;
        self.rerun();
    }

    /// Write the active dataset to `path` as CSV.
    pub fn save_csv(&mut self, path: &Path) {
        let Some(ds) = &self.dataset else {
            return;
        };
        match export::save_csv(ds, path) {
            Ok(()) => self.status_message = Some(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("Failed to save {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn set_independent(&mut self, independent: IndependentVar) {
        if self.selection.independent != Some(independent) {
            self.selection.independent = Some(independent);
            self.rerun();
        }
    }

    pub fn toggle_dependent(&mut self, dep: DependentVar) {
        self.selection.toggle_dependent(dep);
        self.rerun();
    }

    /// Refit every selected pair and seed missing prediction inputs with the
    /// fitted x mean.
    pub fn rerun(&mut self) {
        let (Some(ds), Some(schema)) = (&self.dataset, &self.schema) else {
            self.analysis = AnalysisRun::Idle;
            return;
        };

        self.analysis = analyze(ds, schema, &self.selection);

        for (dep, err) in self.analysis.failures() {
            log::warn!("Regression for {dep} not fitted: {err}");
        }

        if let AnalysisRun::Ran {
            independent,
            outcomes,
        } = &self.analysis
        {
            for outcome in outcomes {
                if let Ok(model) = &outcome.result {
                    self.prediction_inputs
                        .entry((*independent, outcome.dependent))
                        .or_insert(model.x_mean);
                }
            }
        }
    }

    /// Mutable what-if input for a pair, if one has been seeded.
    pub fn prediction_input(
        &mut self,
        independent: IndependentVar,
        dep: DependentVar,
    ) -> Option<&mut f64> {
        self.prediction_inputs.get_mut(&(independent, dep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfhs_explorer::data::schema::recognised_columns;
    use nfhs_explorer::CellValue;

    fn bound_dataset() -> (Dataset, Schema) {
        let literacy = IndependentVar::WomenLiterate.column_name();
        let fuel = IndependentVar::CleanCookingFuel.column_name();
        let columns = recognised_columns()
            .map(|name| {
                let cells = if name == literacy {
                    [50.0, 60.0, 70.0, 80.0].map(CellValue::Number).to_vec()
                } else if name == fuel {
                    [10.0, 30.0, 20.0, 40.0].map(CellValue::Number).to_vec()
                } else {
                    [9.0, 7.0, 6.0, 3.0].map(CellValue::Number).to_vec()
                };
                (name.to_string(), cells)
            })
            .collect();
        let ds = Dataset::from_columns(columns);
        let schema = Schema::bind(&ds).unwrap();
        (ds, schema)
    }

    #[test]
    fn selection_changes_refit_and_seed_inputs() {
        let (ds, schema) = bound_dataset();
        let mut state = AppState::new(ExplorerConfig::default());
        state.set_dataset(ds, schema);
        assert_eq!(state.analysis, AnalysisRun::Idle);

        state.set_independent(IndependentVar::WomenLiterate);
        state.toggle_dependent(DependentVar::Stunted);
        assert_eq!(state.analysis.outcomes().len(), 1);
        let seeded = *state
            .prediction_input(IndependentVar::WomenLiterate, DependentVar::Stunted)
            .unwrap();
        assert!((seeded - 65.0).abs() < 1e-12);

        state.set_independent(IndependentVar::CleanCookingFuel);
        let seeded = *state
            .prediction_input(IndependentVar::CleanCookingFuel, DependentVar::Stunted)
            .unwrap();
        assert!((seeded - 25.0).abs() < 1e-12);

        state.toggle_dependent(DependentVar::Stunted);
        assert_eq!(state.analysis, AnalysisRun::Idle);
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let (ds, schema) = bound_dataset();
        let mut state = AppState::new(ExplorerConfig::default());
        state.set_dataset(ds, schema);

        let path = std::env::temp_dir().join(format!("nfhs-explorer-state-{}.csv", std::process::id()));
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        state.load_path(&path);
        std::fs::remove_file(&path).ok();

        let status = state.status_message.as_deref().unwrap_or("");
        assert!(status.starts_with("Error"));
        assert!(status.contains("missing"));
        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(4));
    }
}
