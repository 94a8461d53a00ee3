//! Sorter configuration

use serde::{Deserialize, Serialize};

use crate::constants::NO_EXPIRY_MARKER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SorterConfig {
    /// BCP-47 locale used to collate text columns
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Expiry cell texts meaning "never expires" (empty text always does)
    #[serde(default = "default_no_expiry_markers")]
    pub no_expiry_markers: Vec<String>,

    /// chrono formats tried, in order, for cells carrying a time of day
    #[serde(default = "default_datetime_formats")]
    pub datetime_formats: Vec<String>,

    /// chrono formats tried for date-only cells (read as midnight)
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

fn default_locale() -> String {
    "ru".to_string()
}

fn default_no_expiry_markers() -> Vec<String> {
    vec![NO_EXPIRY_MARKER.to_string()]
}

fn default_datetime_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y %H:%M",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

fn default_date_formats() -> Vec<String> {
    ["%Y-%m-%d", "%d.%m.%Y"].iter().map(|f| f.to_string()).collect()
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            no_expiry_markers: default_no_expiry_markers(),
            datetime_formats: default_datetime_formats(),
            date_formats: default_date_formats(),
        }
    }
}

impl SorterConfig {
    /// Whether trimmed expiry text means the row never expires
    pub fn is_no_expiry(&self, text: &str) -> bool {
        let text = text.trim();
        text.is_empty() || self.no_expiry_markers.iter().any(|m| m.trim() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: SorterConfig = serde_json::from_str(r#"{"locale": "en"}"#).unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.no_expiry_markers, vec!["Без окончания".to_string()]);
        assert_eq!(config.date_formats, SorterConfig::default().date_formats);
    }

    #[test]
    fn test_no_expiry_markers() {
        let config = SorterConfig::default();
        assert!(config.is_no_expiry(""));
        assert!(config.is_no_expiry("   "));
        assert!(config.is_no_expiry(" Без окончания "));
        assert!(!config.is_no_expiry("2024-01-01"));
    }
}
