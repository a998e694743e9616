//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// File name written by `init`.
pub const CONFIG_FILE_NAME: &str = "code-validation.toml";

const DEFAULT_CONFIG: &str = r#"# code-validation configuration

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/__pycache__/**",
    "**/.venv/**",
]

[thresholds]
max_file_lines = 2000
max_line_length = 150
max_variable_length = 25
max_function_lines = 40

[report]
# Directory for the markdown reports
# (default: code_validation_output/ next to the executable)
# output_dir = "code_validation_output"

# Custom Handlebars template using the {{PLACEHOLDER}} names
# template = "validation_template.md"

# Each check can be disabled by name

[checks.file-header]
enabled = true

[checks.wildcard-imports]
enabled = true

# [checks.variable-length]
# enabled = false
"#;

/// Writes the default configuration into `dir`, returning its path.
fn write_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {CONFIG_FILE_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to adjust thresholds and checks");
    println!("  2. Run: code-validation <PATH>");

    Ok(())
}
