//! Survey indicator explorer.
//!
//! Loads a state-level NFHS-5 indicator table, summarizes it, and fits
//! simple linear regressions of child health outcomes on women's life
//! circumstances. The egui front-end lives in the binary; everything here
//! is plain synchronous computation over an immutable [`data::model::Dataset`].

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod stats;

pub use analysis::{analyze, AnalysisRun, FittedModel, Selection};
pub use config::ExplorerConfig;
pub use data::model::{CellValue, Dataset};
pub use data::schema::{DependentVar, IndependentVar, Schema};
pub use error::{FitError, SchemaError};
