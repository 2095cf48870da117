//! Validate command implementation.
//!
//! Lints a store file without loading it into a registry, so problems that
//! would block loading are all reported in one pass.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_store};

/// Validate a store file without loading it
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Store file to validate instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());

    printer.status("Checking", &display_path(&store));

    let raw = fs::read_to_string(&store).map_err(|e| SwatchError::Io {
        path: store.clone(),
        message: format!("Failed to read store: {}", e),
    })?;
    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| SwatchError::Parse {
        message: format!("Store is not valid JSON: {}", e),
        help: Some("Fix the JSON syntax before validating".to_string()),
    })?;

    let result = validate_store(&value);
    print_diagnostics(&result);

    if result.has_errors() {
        return Err(SwatchError::Validation {
            message: format!(
                "{} has {}",
                display_path(&store),
                plural(result.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_clean_store() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("palettes.json");
        fs::write(
            &store,
            r##"[{"paletteName":"Sunset Colours","listOfColours":[{"name":"Red","hex":"#FF0000"}],"listOfSubColourPalettes":[]}]"##,
        )
        .unwrap();

        let args = ValidateArgs { store: Some(store) };
        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_validate_fails_on_errors() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("palettes.json");
        fs::write(&store, r#"[{"paletteName":"Sunset Colours"}]"#).unwrap();

        let args = ValidateArgs { store: Some(store) };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(SwatchError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_warnings_still_pass() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("palettes.json");
        fs::write(
            &store,
            r#"[{"paletteName":"Sunset Colours","listOfColours":[{"name":"Red","hex":"red"}],"listOfSubColourPalettes":[]}]"#,
        )
        .unwrap();

        let args = ValidateArgs { store: Some(store) };
        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_validate_rejects_broken_json() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("palettes.json");
        fs::write(&store, "[{").unwrap();

        let args = ValidateArgs { store: Some(store) };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(SwatchError::Parse { .. })
        ));
    }

    #[test]
    fn test_validate_missing_store_is_an_error() {
        let dir = tempdir().unwrap();

        let args = ValidateArgs {
            store: Some(dir.path().join("missing.json")),
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(SwatchError::Io { .. })
        ));
    }
}
