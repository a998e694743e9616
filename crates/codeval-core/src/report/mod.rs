//! Per-file markdown reports.
//!
//! [`ReportModel`] aggregates a [`ViolationSet`](crate::ViolationSet) into the
//! flags and checkbox lists a template expects; [`ReportRenderer`] fills the
//! template and writes `<script>_validation_output.md`.

mod model;
mod renderer;

pub use model::{Checkbox, CheckboxList, ReportModel, EMPTY_LIST};
pub use renderer::{ReportError, ReportRenderer, DEFAULT_TEMPLATE};
