//! Outlook categories and the preset colour tables.
//!
//! # Invariants
//! - The remote API only knows the keys `none` and `preset0`..`preset24`.
//! - Every key maps to exactly one human colour name and one hex code, and
//!   every colour name maps back to its key.
//! - The tables are built once per process and never change.

use crate::model::error::ModelError;
use crate::model::mail::first_non_empty;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Colour preset key as stored by the remote API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    #[default]
    None,
    Preset0,
    Preset1,
    Preset2,
    Preset3,
    Preset4,
    Preset5,
    Preset6,
    Preset7,
    Preset8,
    Preset9,
    Preset10,
    Preset11,
    Preset12,
    Preset13,
    Preset14,
    Preset15,
    Preset16,
    Preset17,
    Preset18,
    Preset19,
    Preset20,
    Preset21,
    Preset22,
    Preset23,
    Preset24,
}

/// Human colour name shown by Outlook clients for each preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorName {
    NoColorMapped,
    Red,
    Orange,
    Brown,
    Yellow,
    Green,
    Teal,
    Olive,
    Blue,
    Purple,
    Cranberry,
    Steel,
    DarkSteel,
    Gray,
    DarkGray,
    Black,
    DarkRed,
    DarkOrange,
    DarkBrown,
    DarkYellow,
    DarkGreen,
    DarkTeal,
    DarkOlive,
    DarkBlue,
    DarkPurple,
    DarkCranberry,
}

/// One row of the preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub key: ColorKey,
    pub key_token: &'static str,
    pub name: ColorName,
    pub name_token: &'static str,
    /// RGB hex without `#`; empty for `none`.
    pub code: &'static str,
}

const fn preset(
    key: ColorKey,
    key_token: &'static str,
    name: ColorName,
    name_token: &'static str,
    code: &'static str,
) -> ColorPreset {
    ColorPreset {
        key,
        key_token,
        name,
        name_token,
        code,
    }
}

// Row order matches the declaration order of both enums.
const COLOR_PRESETS: [ColorPreset; 26] = [
    preset(ColorKey::None, "none", ColorName::NoColorMapped, "NoColorMapped", ""),
    preset(ColorKey::Preset0, "preset0", ColorName::Red, "Red", "E7A1A2"),
    preset(ColorKey::Preset1, "preset1", ColorName::Orange, "Orange", "F9BA89"),
    preset(ColorKey::Preset2, "preset2", ColorName::Brown, "Brown", "F7DD8F"),
    preset(ColorKey::Preset3, "preset3", ColorName::Yellow, "Yellow", "FCFA90"),
    preset(ColorKey::Preset4, "preset4", ColorName::Green, "Green", "78D168"),
    preset(ColorKey::Preset5, "preset5", ColorName::Teal, "Teal", "9FDCC9"),
    preset(ColorKey::Preset6, "preset6", ColorName::Olive, "Olive", "C6D2B0"),
    preset(ColorKey::Preset7, "preset7", ColorName::Blue, "Blue", "9DB7E8"),
    preset(ColorKey::Preset8, "preset8", ColorName::Purple, "Purple", "B5A1E2"),
    preset(ColorKey::Preset9, "preset9", ColorName::Cranberry, "Cranberry", "DAAEC2"),
    preset(ColorKey::Preset10, "preset10", ColorName::Steel, "Steel", "DAD9DC"),
    preset(ColorKey::Preset11, "preset11", ColorName::DarkSteel, "DarkSteel", "6B7994"),
    preset(ColorKey::Preset12, "preset12", ColorName::Gray, "Gray", "BFBFBF"),
    preset(ColorKey::Preset13, "preset13", ColorName::DarkGray, "DarkGray", "6F6F6F"),
    preset(ColorKey::Preset14, "preset14", ColorName::Black, "Black", "4F4F4F"),
    preset(ColorKey::Preset15, "preset15", ColorName::DarkRed, "DarkRed", "C11A25"),
    preset(ColorKey::Preset16, "preset16", ColorName::DarkOrange, "DarkOrange", "E2620D"),
    preset(ColorKey::Preset17, "preset17", ColorName::DarkBrown, "DarkBrown", "C79930"),
    preset(ColorKey::Preset18, "preset18", ColorName::DarkYellow, "DarkYellow", "B9B300"),
    preset(ColorKey::Preset19, "preset19", ColorName::DarkGreen, "DarkGreen", "368F2B"),
    preset(ColorKey::Preset20, "preset20", ColorName::DarkTeal, "DarkTeal", "329B7A"),
    preset(ColorKey::Preset21, "preset21", ColorName::DarkOlive, "DarkOlive", "778B45"),
    preset(ColorKey::Preset22, "preset22", ColorName::DarkBlue, "DarkBlue", "2858A5"),
    preset(ColorKey::Preset23, "preset23", ColorName::DarkPurple, "DarkPurple", "5C3FA3"),
    preset(ColorKey::Preset24, "preset24", ColorName::DarkCranberry, "DarkCranberry", "93446B"),
];

static PRESETS_BY_KEY_TOKEN: Lazy<HashMap<&'static str, &'static ColorPreset>> =
    Lazy::new(|| COLOR_PRESETS.iter().map(|row| (row.key_token, row)).collect());

static PRESETS_BY_NAME_TOKEN: Lazy<HashMap<String, &'static ColorPreset>> = Lazy::new(|| {
    COLOR_PRESETS
        .iter()
        .map(|row| (row.name_token.to_ascii_lowercase(), row))
        .collect()
});

/// The full read-only preset table.
pub fn color_presets() -> &'static [ColorPreset] {
    &COLOR_PRESETS
}

impl ColorKey {
    pub fn preset(self) -> &'static ColorPreset {
        &COLOR_PRESETS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.preset().key_token
    }

    pub fn color_name(self) -> ColorName {
        self.preset().name
    }

    pub fn color_code(self) -> &'static str {
        self.preset().code
    }
}

impl FromStr for ColorKey {
    type Err = ModelError;

    /// Accepts `preset7`, `Preset7`, `NONE`, ...
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PRESETS_BY_KEY_TOKEN
            .get(value.trim().to_ascii_lowercase().as_str())
            .map(|row| row.key)
            .ok_or_else(|| ModelError::UnknownColorKey(value.to_string()))
    }
}

impl Display for ColorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ColorName {
    pub fn preset(self) -> &'static ColorPreset {
        &COLOR_PRESETS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.preset().name_token
    }

    pub fn color_key(self) -> ColorKey {
        self.preset().key
    }
}

impl FromStr for ColorName {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PRESETS_BY_NAME_TOKEN
            .get(&value.trim().to_ascii_lowercase())
            .map(|row| row.name)
            .ok_or_else(|| ModelError::UnknownColorName(value.to_string()))
    }
}

impl Display for ColorName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category from a user's master category list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlookCategory {
    pub id: Option<Uuid>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub color: ColorKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl OutlookCategory {
    pub fn new(display_name: impl Into<String>, color: ColorKey) -> Self {
        Self {
            display_name: Some(display_name.into()),
            color,
            ..Self::default()
        }
    }

    pub fn with_id(id: Uuid, display_name: impl Into<String>, color: ColorKey) -> Self {
        Self {
            id: Some(id),
            ..Self::new(display_name, color)
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn color_name(&self) -> ColorName {
        self.color.color_name()
    }

    pub fn color_code(&self) -> &'static str {
        self.color.color_code()
    }
}

impl Display for OutlookCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(first_non_empty(&[self.display_name.as_deref()]).unwrap_or("OutlookCategory"))
    }
}

#[cfg(test)]
mod tests {
    use super::{color_presets, ColorKey, ColorName, OutlookCategory};

    #[test]
    fn preset_rows_line_up_with_enum_order() {
        for (index, row) in color_presets().iter().enumerate() {
            assert_eq!(row.key as usize, index);
            assert_eq!(row.name as usize, index);
            assert_eq!(row.key.color_name(), row.name);
            assert_eq!(row.name.color_key(), row.key);
        }
    }

    #[test]
    fn parses_keys_and_names_ignoring_case() {
        assert_eq!("Preset15".parse::<ColorKey>(), Ok(ColorKey::Preset15));
        assert_eq!("NONE".parse::<ColorKey>(), Ok(ColorKey::None));
        assert_eq!("darkred".parse::<ColorName>(), Ok(ColorName::DarkRed));
        assert!("preset25".parse::<ColorKey>().is_err());
        assert!("Magenta".parse::<ColorName>().is_err());
    }

    #[test]
    fn category_derives_colour_from_key() {
        let category = OutlookCategory::new("Customers", ColorKey::Preset4);
        assert_eq!(category.color_name(), ColorName::Green);
        assert_eq!(category.color_code(), "78D168");
        assert_eq!(category.to_string(), "Customers");
        assert_eq!(OutlookCategory::default().color_code(), "");
    }
}
