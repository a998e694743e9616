//! Aggregation of a file's violations into template fields.

use serde::{Serialize, Serializer};
use std::fmt::Display;

use crate::config::Thresholds;
use crate::types::ViolationSet;

/// Text rendered for a category with no violations.
pub const EMPTY_LIST: &str = "None :)";

/// A single-character markdown checkbox mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkbox(pub bool);

impl Checkbox {
    /// `X` when checked, a space otherwise.
    #[must_use]
    pub fn mark(self) -> &'static str {
        if self.0 {
            "X"
        } else {
            " "
        }
    }
}

impl Serialize for Checkbox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.mark())
    }
}

/// A list of unchecked markdown checkboxes, one per violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxList(String);

impl CheckboxList {
    /// Builds the list with one ` - [ ] <item>` line per item.
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        Self(
            items
                .into_iter()
                .map(|item| format!(" - [ ] {item}\n"))
                .collect(),
        )
    }

    /// Builds the list for line-number violations (`Line Number - <n>`).
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a usize>,
    {
        Self::from_items(lines.into_iter().map(|n| format!("Line Number - {n}")))
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw checkbox lines.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for CheckboxList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_str(EMPTY_LIST)
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

/// Every value the report template can reference, keyed by placeholder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReportModel {
    /// Base name of the analyzed file.
    pub script_name: String,
    /// The file parsed; structural sections are empty otherwise.
    pub source_parsed: Checkbox,
    /// A file header exists.
    pub file_header_exists: Checkbox,
    /// The file is within the line limit.
    pub acceptable_file_size: Checkbox,
    /// Same mark as `acceptable_file_size`, under the spelling older
    /// templates use.
    pub exceptable_file_size: Checkbox,
    /// No wildcard imports.
    pub valid_imports: Checkbox,
    /// No long lines.
    pub valid_line_lengths: Checkbox,
    /// Every class has a header.
    pub classes_have_headers: Checkbox,
    /// Every function has a header.
    pub functions_have_headers: Checkbox,
    /// No long functions.
    pub valid_function_lengths: Checkbox,
    /// No long identifiers.
    pub valid_variable_lengths: Checkbox,
    /// Modules imported with `*`.
    pub invalid_import_checkboxes: CheckboxList,
    /// Long lines.
    pub invalid_line_length_checkboxes: CheckboxList,
    /// Classes without headers.
    pub classes_without_headers_checkboxes: CheckboxList,
    /// Functions without headers.
    pub functions_without_headers_checkboxes: CheckboxList,
    /// Long functions.
    pub invalid_function_length_checkboxes: CheckboxList,
    /// Lines assigning long identifiers.
    pub invalid_variable_length_checkboxes: CheckboxList,
    /// File line limit.
    pub max_file_lines: usize,
    /// Line length limit.
    pub max_line_characters: usize,
    /// Identifier length limit.
    pub max_variable_name_length: usize,
    /// Function body limit.
    pub max_lines_per_method: usize,
}

impl ReportModel {
    /// Aggregates one file's violations.
    #[must_use]
    pub fn new(
        script_name: impl Into<String>,
        source_parsed: bool,
        violations: &ViolationSet,
        thresholds: &Thresholds,
    ) -> Self {
        Self {
            script_name: script_name.into(),
            source_parsed: Checkbox(source_parsed),
            file_header_exists: Checkbox(violations.file_header_exists),
            acceptable_file_size: Checkbox(violations.acceptable_file_size),
            exceptable_file_size: Checkbox(violations.acceptable_file_size),
            valid_imports: Checkbox(violations.invalid_imports.is_empty()),
            valid_line_lengths: Checkbox(violations.lengthy_lines.is_empty()),
            classes_have_headers: Checkbox(violations.headless_classes.is_empty()),
            functions_have_headers: Checkbox(violations.headless_functions.is_empty()),
            valid_function_lengths: Checkbox(violations.lengthy_functions.is_empty()),
            valid_variable_lengths: Checkbox(violations.lengthy_variables.is_empty()),
            invalid_import_checkboxes: CheckboxList::from_items(&violations.invalid_imports),
            invalid_line_length_checkboxes: CheckboxList::from_lines(&violations.lengthy_lines),
            classes_without_headers_checkboxes: CheckboxList::from_items(
                &violations.headless_classes,
            ),
            functions_without_headers_checkboxes: CheckboxList::from_items(
                &violations.headless_functions,
            ),
            invalid_function_length_checkboxes: CheckboxList::from_items(
                &violations.lengthy_functions,
            ),
            invalid_variable_length_checkboxes: CheckboxList::from_lines(
                &violations.lengthy_variables,
            ),
            max_file_lines: thresholds.max_file_lines,
            max_line_characters: thresholds.max_line_length,
            max_variable_name_length: thresholds.max_variable_length,
            max_lines_per_method: thresholds.max_function_lines,
        }
    }

    /// File name of the rendered report (`<script>_validation_output.md`).
    #[must_use]
    pub fn output_file_name(&self) -> String {
        format!("{}_validation_output.md", self.script_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Finding;

    #[test]
    fn checkbox_marks() {
        assert_eq!(Checkbox(true).mark(), "X");
        assert_eq!(Checkbox(false).mark(), " ");
    }

    #[test]
    fn checkbox_list_lines() {
        let list = CheckboxList::from_items(["os", "sys"]);
        assert_eq!(list.as_str(), " - [ ] os\n - [ ] sys\n");

        let lines = CheckboxList::from_lines(&[3, 17]);
        assert_eq!(
            lines.as_str(),
            " - [ ] Line Number - 3\n - [ ] Line Number - 17\n"
        );
    }

    #[test]
    fn clean_file_checks_every_box() {
        let model = ReportModel::new("ok.py", true, &ViolationSet::new(), &Thresholds::default());
        for checkbox in [
            model.source_parsed,
            model.file_header_exists,
            model.acceptable_file_size,
            model.valid_imports,
            model.valid_line_lengths,
            model.classes_have_headers,
            model.functions_have_headers,
            model.valid_function_lengths,
            model.valid_variable_lengths,
        ] {
            assert_eq!(checkbox, Checkbox(true));
        }
        assert!(model.invalid_import_checkboxes.is_empty());
        assert!(model.invalid_variable_length_checkboxes.is_empty());
    }

    #[test]
    fn categories_fail_independently() {
        let violations = ViolationSet::from_findings([Finding::HeadlessFunction {
            name: "helper".into(),
        }]);
        let model = ReportModel::new("mod.py", true, &violations, &Thresholds::default());
        assert_eq!(model.functions_have_headers, Checkbox(false));
        assert_eq!(model.classes_have_headers, Checkbox(true));
        assert_eq!(
            model.functions_without_headers_checkboxes.as_str(),
            " - [ ] helper\n"
        );
    }

    #[test]
    fn serializes_with_placeholder_names() {
        let violations = ViolationSet::from_findings([Finding::WildcardImport {
            module: "os".into(),
        }]);
        let model = ReportModel::new("mod.py", false, &violations, &Thresholds::default());
        let value = toml::Value::try_from(&model).expect("model serializes");

        assert_eq!(value["SCRIPT_NAME"].as_str(), Some("mod.py"));
        assert_eq!(value["SOURCE_PARSED"].as_str(), Some(" "));
        assert_eq!(value["VALID_IMPORTS"].as_str(), Some(" "));
        assert_eq!(value["EXCEPTABLE_FILE_SIZE"].as_str(), Some("X"));
        assert_eq!(value["VALID_LINE_LENGTHS"].as_str(), Some("X"));
        assert_eq!(value["INVALID_IMPORT_CHECKBOXES"].as_str(), Some(" - [ ] os\n"));
        assert_eq!(value["INVALID_LINE_LENGTH_CHECKBOXES"].as_str(), Some(EMPTY_LIST));
        assert_eq!(value["MAX_VARIABLE_NAME_LENGTH"].as_integer(), Some(25));
    }

    #[test]
    fn output_name_keeps_extension() {
        let model = ReportModel::new("tool.py", true, &ViolationSet::new(), &Thresholds::default());
        assert_eq!(model.output_file_name(), "tool.py_validation_output.md");
    }
}
