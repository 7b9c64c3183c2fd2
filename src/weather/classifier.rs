//! Weather code classification into the three page icons

use serde::{Deserialize, Serialize};

/// WMO codes drawn with the rain icon. Drizzle, freezing drizzle, rain,
/// freezing rain, showers and thunderstorms (with or without hail).
pub const RAIN_CODES: [i32; 16] = [
    51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82, 95, 96, 99,
];

/// Icon family for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconCategory {
    Sun,
    Cloud,
    Rain,
}

/// Icon asset plus the label shown under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub file: String,
    pub label: String,
}

/// Whether `code` belongs to the rain family
#[must_use]
pub fn is_rain_code(code: i32) -> bool {
    RAIN_CODES.contains(&code)
}

/// Map an Open-Meteo weather code to its icon category.
///
/// Clear and partly cloudy skies are sun; every precipitation code except snow
/// is rain. Overcast, fog, snow and any unknown code fall back to cloud.
#[must_use]
pub fn classify(code: i32) -> IconCategory {
    match code {
        0..=2 => IconCategory::Sun,
        c if is_rain_code(c) => IconCategory::Rain,
        _ => IconCategory::Cloud,
    }
}

/// Fixed icon file and label for a category
#[must_use]
pub fn describe(category: IconCategory) -> IconDescriptor {
    let (file, label) = match category {
        IconCategory::Sun => ("sun.svg", "たいよう"),
        IconCategory::Rain => ("rain.svg", "あめ"),
        IconCategory::Cloud => ("cloud.svg", "くも"),
    };
    IconDescriptor {
        file: file.to_string(),
        label: label.to_string(),
    }
}

/// Shorthand for `describe(classify(code))`
#[must_use]
pub fn icon_for(code: i32) -> IconDescriptor {
    describe(classify(code))
}
