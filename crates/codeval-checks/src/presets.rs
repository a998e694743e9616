//! The default check set.

use crate::{
    ClassHeaders, FileHeader, FileSize, FunctionHeaders, FunctionLength, LineLength,
    VariableLength, WildcardImports,
};
use codeval_core::CheckBox;

/// Returns every built-in check, in report order.
#[must_use]
pub fn default_checks() -> Vec<CheckBox> {
    vec![
        Box::new(FileHeader::new()),
        Box::new(ClassHeaders::new()),
        Box::new(FunctionHeaders::new()),
        Box::new(FunctionLength::new()),
        Box::new(FileSize::new()),
        Box::new(LineLength::new()),
        Box::new(VariableLength::new()),
        Box::new(WildcardImports::new()),
    ]
}
