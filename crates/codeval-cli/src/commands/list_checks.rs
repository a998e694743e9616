//! List checks command implementation.

use codeval_checks::default_checks;
use codeval_core::Thresholds;

/// Runs the list-checks command.
pub fn run() {
    println!("Available checks:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for check in default_checks() {
        println!(
            "{:<10} {:<20} {}",
            check.code(),
            check.name(),
            check.description()
        );
    }

    let defaults = Thresholds::default();
    println!("\nDefault thresholds:");
    println!("  max_file_lines       = {}", defaults.max_file_lines);
    println!("  max_line_length      = {}", defaults.max_line_length);
    println!("  max_variable_length  = {}", defaults.max_variable_length);
    println!("  max_function_lines   = {}", defaults.max_function_lines);

    println!("\nDisable a check in code-validation.toml, e.g.:");
    println!("  [checks.wildcard-imports]");
    println!("  enabled = false");
}
