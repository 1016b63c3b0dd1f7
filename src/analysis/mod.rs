//! Regression analysis: fitting, interpretation, and per-selection runs.
//!
//! ```text
//!   Selection (x, [y…])
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ explorer │  one complete-case subset per (x, y)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ regression │  closed-form OLS → FittedModel | FitError
//!   └────────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ interpret │  direction, significance, summary report
//!   └───────────┘
//! ```

pub mod explorer;
pub mod interpret;
pub mod regression;

pub use explorer::{analyze, AnalysisRun, PairOutcome, Selection};
pub use interpret::{Direction, Interpretation, RegressionSummary, Significance};
pub use regression::{fit_pair, fit_points, Extrapolation, FittedModel, Prediction};
