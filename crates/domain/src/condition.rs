//! Weather condition code translator
//!
//! Maps the WMO condition codes reported by the forecast service to a short
//! description and a display icon. Only a fixed set of codes is known; any
//! other code falls back to a description that embeds the raw value.

use serde::Serialize;

/// Icon used for codes missing from the table
pub const FALLBACK_ICON: &str = "❓";

/// Known codes, in ascending order. Extend by editing this table.
const CONDITIONS: &[(i32, &str, &str)] = &[
    (0, "Clear sky", "☀️"),
    (1, "Mainly clear", "🌤️"),
    (2, "Partly cloudy", "⛅"),
    (3, "Overcast", "☁️"),
    (45, "Fog", "🌫️"),
    (51, "Light drizzle", "🌦️"),
    (61, "Light rain", "🌧️"),
    (80, "Rain showers", "🌧️"),
    (95, "Thunderstorm", "⛈️"),
];

/// Human-readable rendering of a condition code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionInfo {
    /// The raw code as reported
    pub code: i32,
    /// Description, or the fallback text for unmapped codes
    pub description: String,
    /// Display icon
    pub icon: &'static str,
    /// Whether the code was found in the table
    pub known: bool,
}

/// Translate a condition code into description and icon
///
/// ```
/// use domain::describe_condition;
///
/// assert_eq!(describe_condition(0).description, "Clear sky");
/// assert!(describe_condition(999).description.contains("999"));
/// ```
#[must_use]
pub fn describe_condition(code: i32) -> ConditionInfo {
    CONDITIONS
        .binary_search_by_key(&code, |&(known, _, _)| known)
        .map_or_else(
            |_| ConditionInfo {
                code,
                description: format!("Unknown condition ({code})"),
                icon: FALLBACK_ICON,
                known: false,
            },
            |idx| {
                let (_, description, icon) = CONDITIONS[idx];
                ConditionInfo {
                    code,
                    description: description.to_string(),
                    icon,
                    known: true,
                }
            },
        )
}
