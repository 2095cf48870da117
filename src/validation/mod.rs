//! Validation system for palette store files.
//!
//! Runs a suite of checks against the raw JSON of a store file and reports
//! errors and warnings. Working on the raw document rather than the loaded
//! tree means a hand-edited file that would not even load can still be
//! linted. Used by `swatch validate`.

mod checks;
mod warning;

pub use checks::well_formed_hex;
pub use warning::{Diagnostic, Severity, ValidationResult};

use serde_json::Value;

/// Run all validation checks against a store document.
pub fn validate_store(value: &Value) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(roots) = value.as_array() else {
        result.push(
            Diagnostic::error(
                "swatch::validate::not-an-array",
                "Store root is not a JSON array",
            )
            .with_help("The store file holds a JSON array of palettes"),
        );
        return result;
    };

    result.merge(checks::check_duplicate_roots(roots));

    for (index, root) in roots.iter().enumerate() {
        let path = root
            .get("paletteName")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("store[{}]", index));
        result.merge(checks::check_palette(root, &path));
    }

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.diagnostics() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}
