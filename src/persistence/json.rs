//! The palette JSON wire format.
//!
//! [`ToJson`] produces the store shape as a [`serde_json::Value`];
//! [`from_json`] is its structural inverse. Reconstruction is deliberately
//! strict: a file whose palettes hold value-equal duplicate colours could
//! not have been produced by the palette API, so it is rejected rather
//! than silently repaired.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::types::{Colour, ColourPalette};

/// Types that serialize themselves into the store's JSON shape.
pub trait ToJson {
    /// Return this value as a JSON tree.
    fn to_json(&self) -> Value;
}

impl ToJson for Colour {
    fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "hex": self.hex(),
        })
    }
}

impl ToJson for ColourPalette {
    fn to_json(&self) -> Value {
        let colours: Vec<Value> = self.colours().iter().map(ToJson::to_json).collect();
        let subs: Vec<Value> = self
            .sub_colour_palettes()
            .iter()
            .map(ToJson::to_json)
            .collect();
        json!({
            "paletteName": self.name(),
            "listOfColours": colours,
            "listOfSubColourPalettes": subs,
        })
    }
}

/// Rebuild a palette from its JSON form.
///
/// Construction is direct: no events are logged and every palette in the
/// tree receives a fresh identity. Missing fields, mistyped fields, and
/// duplicate colours are parse errors; unknown extra fields are ignored.
pub fn from_json(value: Value, log: &EventLog) -> Result<ColourPalette> {
    let saved: SavedPalette = serde_json::from_value(value).map_err(|e| SwatchError::Parse {
        message: format!("Invalid palette JSON: {}", e),
        help: Some(
            "Expected an object with paletteName, listOfColours, and listOfSubColourPalettes"
                .to_string(),
        ),
    })?;
    saved.into_palette(log)
}

// --- Wire structs ---

#[derive(Serialize, Deserialize)]
pub(crate) struct SavedColour {
    name: String,
    hex: String,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct SavedPalette {
    #[serde(rename = "paletteName")]
    palette_name: String,
    #[serde(rename = "listOfColours")]
    list_of_colours: Vec<SavedColour>,
    #[serde(rename = "listOfSubColourPalettes")]
    list_of_sub_colour_palettes: Vec<SavedPalette>,
}

impl SavedColour {
    fn from_colour(colour: &Colour) -> Self {
        Self {
            name: colour.name().to_string(),
            hex: colour.hex().to_string(),
        }
    }
}

impl SavedPalette {
    pub(crate) fn from_palette(palette: &ColourPalette) -> Self {
        Self {
            palette_name: palette.name().to_string(),
            list_of_colours: palette.colours().iter().map(SavedColour::from_colour).collect(),
            list_of_sub_colour_palettes: palette
                .sub_colour_palettes()
                .iter()
                .map(Self::from_palette)
                .collect(),
        }
    }

    pub(crate) fn into_palette(self, log: &EventLog) -> Result<ColourPalette> {
        let Self {
            palette_name,
            list_of_colours,
            list_of_sub_colour_palettes,
        } = self;

        let mut colours: Vec<Colour> = Vec::with_capacity(list_of_colours.len());
        for saved in list_of_colours {
            let colour = Colour::new(saved.name, saved.hex);
            if colours.contains(&colour) {
                return Err(SwatchError::Parse {
                    message: format!(
                        "Palette '{}' contains colour '{}' more than once",
                        palette_name,
                        colour.name()
                    ),
                    help: Some("Remove the duplicate entry from the store file".to_string()),
                });
            }
            colours.push(colour);
        }

        let mut subs = Vec::with_capacity(list_of_sub_colour_palettes.len());
        for saved in list_of_sub_colour_palettes {
            subs.push(saved.into_palette(log)?);
        }

        Ok(ColourPalette::assemble(palette_name, colours, subs, log.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_tree(log: &EventLog) -> ColourPalette {
        let mut sunset = ColourPalette::with_log("Sunset Colours", log.clone());
        sunset.add_colour(Colour::new("Red", "#FF0000"));
        sunset.add_colour(Colour::new("Green", "#00FF00"));

        let mut warm = ColourPalette::with_log("Warm Colours", log.clone());
        warm.add_colour(Colour::new("Amber", "#FFBF00"));
        sunset.add_sub_colour_palette(warm).unwrap();

        sunset
    }

    #[test]
    fn test_colour_to_json() {
        let json = Colour::new("Red", "#FF0000").to_json();
        assert_eq!(json, json!({ "name": "Red", "hex": "#FF0000" }));
    }

    #[test]
    fn test_colour_to_json_compact_string() {
        let json = Colour::new("Red", "#FF0000").to_json();
        insta::assert_snapshot!(json.to_string(), @r###"{"hex":"#FF0000","name":"Red"}"###);
    }

    #[test]
    fn test_empty_palette_to_json() {
        let log = EventLog::new();
        let sunset = ColourPalette::with_log("Sunset Colours", log);

        assert_eq!(
            sunset.to_json(),
            json!({
                "paletteName": "Sunset Colours",
                "listOfColours": [],
                "listOfSubColourPalettes": [],
            })
        );
    }

    #[test]
    fn test_palette_to_json_keeps_colour_order() {
        let log = EventLog::new();
        let mut sunset = ColourPalette::with_log("Sunset Colours", log);
        sunset.add_colour(Colour::new("Red", "#FF0000"));
        sunset.add_colour(Colour::new("Green", "#00FF00"));

        assert_eq!(
            sunset.to_json(),
            json!({
                "paletteName": "Sunset Colours",
                "listOfColours": [
                    { "name": "Red", "hex": "#FF0000" },
                    { "name": "Green", "hex": "#00FF00" },
                ],
                "listOfSubColourPalettes": [],
            })
        );
    }

    #[test]
    fn test_nested_palette_to_json() {
        let log = EventLog::new();
        let tree = sample_tree(&log);
        let json = tree.to_json();

        assert_eq!(json["paletteName"], "Sunset Colours");
        let subs = json["listOfSubColourPalettes"].as_array().unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0]["paletteName"], "Warm Colours");
        assert_eq!(
            subs[0]["listOfColours"],
            json!([{ "name": "Amber", "hex": "#FFBF00" }])
        );
    }

    #[test]
    fn test_from_json_round_trips() {
        let build_log = EventLog::new();
        let tree = sample_tree(&build_log);

        let load_log = EventLog::new();
        let rebuilt = from_json(tree.to_json(), &load_log).unwrap();

        assert_eq!(rebuilt.to_json(), tree.to_json());
    }

    #[test]
    fn test_from_json_logs_no_events() {
        let build_log = EventLog::new();
        let tree = sample_tree(&build_log);

        let load_log = EventLog::new();
        from_json(tree.to_json(), &load_log).unwrap();

        assert!(load_log.is_empty());
    }

    #[test]
    fn test_from_json_assigns_fresh_identity() {
        let log = EventLog::new();
        let value = json!({
            "paletteName": "Warm Colours",
            "listOfColours": [],
            "listOfSubColourPalettes": [],
        });

        let a = from_json(value.clone(), &log).unwrap();
        let b = from_json(value, &log).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_from_json_missing_field_is_error() {
        let log = EventLog::new();
        let value = json!({
            "paletteName": "Sunset Colours",
            "listOfColours": [],
        });

        let err = from_json(value, &log).unwrap_err();
        assert!(matches!(err, SwatchError::Parse { .. }));
    }

    #[test]
    fn test_from_json_wrong_type_is_error() {
        let log = EventLog::new();
        let value = json!({
            "paletteName": "Sunset Colours",
            "listOfColours": 5,
            "listOfSubColourPalettes": [],
        });

        assert!(from_json(value, &log).is_err());
    }

    #[test]
    fn test_from_json_duplicate_colours_rejected() {
        let log = EventLog::new();
        let value = json!({
            "paletteName": "Sunset Colours",
            "listOfColours": [
                { "name": "Red", "hex": "#FF0000" },
                { "name": "Red", "hex": "#FF0000" },
            ],
            "listOfSubColourPalettes": [],
        });

        let err = from_json(value, &log).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let log = EventLog::new();
        let value = json!({
            "paletteName": "Sunset Colours",
            "listOfColours": [],
            "listOfSubColourPalettes": [],
            "note": "scratch",
        });

        let palette = from_json(value, &log).unwrap();
        assert_eq!(palette.name(), "Sunset Colours");
    }

    #[test]
    fn test_from_json_rebuilds_mutable_palette() {
        // A loaded palette logs future mutations to the injected handle.
        let log = EventLog::new();
        let value = json!({
            "paletteName": "Warm Colours",
            "listOfColours": [],
            "listOfSubColourPalettes": [],
        });

        let mut warm = from_json(value, &log).unwrap();
        warm.add_colour(Colour::new("Amber", "#FFBF00"));

        assert_eq!(log.len(), 1);
        assert_eq!(
            log.events()[0].description(),
            "Added colour Amber to palette: Warm Colours"
        );
    }
}
