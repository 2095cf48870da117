//! Individual validation checks for store documents.
//!
//! Each check takes raw `serde_json::Value` data and returns a
//! `ValidationResult`, so a file too broken to load can still be linted.

use std::collections::HashSet;

use serde_json::Value;

use super::warning::{Diagnostic, ValidationResult};

/// Check that a hex string has the `#RRGGBB` shape.
///
/// Digits may be upper or lower case. Shorthand forms like `#RGB` are
/// understood by [`Colour::rgb`](crate::Colour::rgb) but flagged here, since
/// the store convention is the six-digit form.
pub fn well_formed_hex(hex: &str) -> bool {
    match hex.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Check root palette names for duplicates.
///
/// Duplicate roots are an error rather than a warning: the registry refuses
/// the second one on load, so the store would silently lose a palette.
pub fn check_duplicate_roots(roots: &[Value]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for root in roots {
        let Some(name) = root.get("paletteName").and_then(Value::as_str) else {
            continue;
        };
        if !seen.insert(name) {
            result.push(
                Diagnostic::error(
                    "swatch::validate::duplicate-root",
                    format!("Two root palettes are named '{}'", name),
                )
                .with_help("Root palette names must be unique"),
            );
        }
    }

    result
}

/// Check a single palette object, recursing into its sub-palettes.
///
/// `path` locates the palette in messages: the root name for top-level
/// palettes, slash-joined names below that ("Sunset Colours/Warm Colours").
pub fn check_palette(value: &Value, path: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(object) = value.as_object() else {
        result.push(Diagnostic::error(
            "swatch::validate::not-an-object",
            format!("Entry '{}' is not a palette object", path),
        ));
        return result;
    };

    match object.get("paletteName") {
        None => result.push(missing_field(path, "paletteName")),
        Some(Value::String(name)) => {
            if name.is_empty() {
                result.push(Diagnostic::warning(
                    "swatch::validate::empty-name",
                    format!("Palette '{}' has an empty name", path),
                ));
            }
        }
        Some(_) => result.push(wrong_type(path, "paletteName", "a string")),
    }

    match object.get("listOfColours") {
        None => result.push(missing_field(path, "listOfColours")),
        Some(Value::Array(colours)) => result.merge(check_colours(colours, path)),
        Some(_) => result.push(wrong_type(path, "listOfColours", "an array")),
    }

    match object.get("listOfSubColourPalettes") {
        None => result.push(missing_field(path, "listOfSubColourPalettes")),
        Some(Value::Array(subs)) => {
            result.merge(check_sibling_names(subs, path));
            for (index, sub) in subs.iter().enumerate() {
                let sub_path = match sub.get("paletteName").and_then(Value::as_str) {
                    Some(name) => format!("{}/{}", path, name),
                    None => format!("{}/[{}]", path, index),
                };
                result.merge(check_palette(sub, &sub_path));
            }
        }
        Some(_) => result.push(wrong_type(path, "listOfSubColourPalettes", "an array")),
    }

    result
}

/// Check the colour entries of one palette.
fn check_colours(colours: &[Value], path: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for colour in colours {
        let Some(object) = colour.as_object() else {
            result.push(Diagnostic::error(
                "swatch::validate::not-an-object",
                format!("Palette '{}' has a colour entry that is not an object", path),
            ));
            continue;
        };

        let name = match object.get("name") {
            None => {
                result.push(missing_field(path, "name"));
                continue;
            }
            Some(Value::String(name)) => name,
            Some(_) => {
                result.push(wrong_type(path, "name", "a string"));
                continue;
            }
        };
        let hex = match object.get("hex") {
            None => {
                result.push(missing_field(path, "hex"));
                continue;
            }
            Some(Value::String(hex)) => hex,
            Some(_) => {
                result.push(wrong_type(path, "hex", "a string"));
                continue;
            }
        };

        if name.is_empty() {
            result.push(Diagnostic::warning(
                "swatch::validate::empty-name",
                format!("Palette '{}' has a colour with an empty name", path),
            ));
        }
        if !well_formed_hex(hex) {
            result.push(
                Diagnostic::warning(
                    "swatch::validate::bad-hex",
                    format!(
                        "Palette '{}': colour '{}' has hex '{}', expected #RRGGBB",
                        path, name, hex
                    ),
                )
                .with_help("Use a # followed by six hex digits"),
            );
        }
        if !seen.insert((name, hex)) {
            result.push(Diagnostic::error(
                "swatch::validate::duplicate-colour",
                format!("Palette '{}' lists colour '{}' more than once", path, name),
            ));
        }
    }

    result
}

/// Warn when sibling sub-palettes share a name.
///
/// Lookups by path always take the first match, so later siblings with the
/// same name are unreachable that way.
fn check_sibling_names(subs: &[Value], path: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for sub in subs {
        let Some(name) = sub.get("paletteName").and_then(Value::as_str) else {
            continue;
        };
        if !seen.insert(name) {
            result.push(
                Diagnostic::warning(
                    "swatch::validate::ambiguous-name",
                    format!(
                        "Palette '{}' has more than one sub-palette named '{}'",
                        path, name
                    ),
                )
                .with_help("Path lookups will always take the first one"),
            );
        }
    }

    result
}

fn missing_field(path: &str, field: &str) -> Diagnostic {
    Diagnostic::error(
        "swatch::validate::missing-field",
        format!("Palette '{}' is missing '{}'", path, field),
    )
    .with_help("Palettes need paletteName, listOfColours, and listOfSubColourPalettes")
}

fn wrong_type(path: &str, field: &str, expected: &str) -> Diagnostic {
    Diagnostic::error(
        "swatch::validate::wrong-type",
        format!("Palette '{}': '{}' should be {}", path, field, expected),
    )
}
