//! Error code catalog and lookup.
//!
//! Maps error codes (like "M-2-1") to their metadata. Codes are grouped by
//! subsystem: `1` configuration, `2` meta and attribute parsing.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog entry for one `M-<subsystem>-<number>` code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCodeInfo {
    /// `config` or `meta`
    pub subsystem: String,
    pub title: String,
    /// Default problem statement when the error site has nothing more specific.
    pub message_template: String,
    /// First release that can emit this code.
    pub since_version: String,
}

/// All known codes, parsed from `error_catalog.json` on first use.
///
/// # Panics
///
/// Panics on first access if the embedded JSON does not parse, which can
/// only happen when the catalog file itself is broken.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../error_catalog.json"))
        .expect("error_catalog.json is not a valid catalog")
});

pub fn get_error_info(code: &str) -> Option<&'static ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

/// Subsystem of a known code.
///
/// ```
/// use mdx_error_reporting::catalog::get_subsystem;
///
/// assert_eq!(get_subsystem("M-2-1"), Some("meta"));
/// assert_eq!(get_subsystem("M-7-7"), None);
/// ```
pub fn get_subsystem(code: &str) -> Option<&'static str> {
    get_error_info(code).map(|info| info.subsystem.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_has_a_title() {
        assert_eq!(ERROR_CATALOG.len(), 4);
        assert!(ERROR_CATALOG.values().all(|info| !info.title.is_empty()));
    }

    #[test]
    fn test_codes_match_subsystem_numbers() {
        for (code, info) in ERROR_CATALOG.iter() {
            let subsystem_number = code.split('-').nth(1).unwrap();
            let expected = match subsystem_number {
                "1" => "config",
                "2" => "meta",
                other => panic!("unknown subsystem number {other} in {code}"),
            };
            assert_eq!(info.subsystem, expected, "{code}");
        }
    }

    #[test]
    fn test_config_codes() {
        let info = get_error_info("M-1-1").unwrap();
        assert_eq!(info.subsystem, "config");
        assert!(info.message_template.contains("'code' or 'pre'"));
        assert!(get_error_info("M-9-9").is_none());
        assert!(get_error_info("M-0-1").is_none());
    }
}
