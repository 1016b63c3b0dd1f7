//! Distribution helpers for regression inference.
//!
//! Only what the slope t-test and the coefficient confidence intervals need:
//! Student's t, backed by `statrs`.

mod student_t;

pub use student_t::StudentT;
