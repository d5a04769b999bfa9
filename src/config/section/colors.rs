//! `[indicator]`, `[head]` and `[mouth]` color sections.
//!
//! # Example
//!
//! ```toml
//! [indicator]
//! base = "#f4ac24"      # resting eye color
//! flash = "#ffffff"     # brief flash color
//!
//! [head]
//! base = "#c74418"
//! signal = "#f4ac24"
//!
//! [mouth]
//! primary = "#c64217"   # mouse1, mouse4 start here
//! secondary = "#f4ac24" # mouse2, mouse3 start here
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Characters that would break out of an attribute or a `values` list.
const FORBIDDEN: &[char] = &['"', '<', '>', '&', ';'];

/// Eye indicator colors (flash animation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorColors {
    pub base: String,
    pub flash: String,
}

impl Default for IndicatorColors {
    fn default() -> Self {
        Self {
            base: "#f4ac24".to_string(),
            flash: "#ffffff".to_string(),
        }
    }
}

impl IndicatorColors {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_color(FieldPath::new("indicator.base"), &self.base, diag);
        validate_color(FieldPath::new("indicator.flash"), &self.flash, diag);
    }
}

/// Head indicator colors (fade animation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadColors {
    pub base: String,
    pub signal: String,
}

impl Default for HeadColors {
    fn default() -> Self {
        Self {
            base: "#c74418".to_string(),
            signal: "#f4ac24".to_string(),
        }
    }
}

impl HeadColors {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_color(FieldPath::new("head.base"), &self.base, diag);
        validate_color(FieldPath::new("head.signal"), &self.signal, diag);
    }
}

/// Mouth segment colors (alternating cycle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouthColors {
    pub primary: String,
    pub secondary: String,
}

impl Default for MouthColors {
    fn default() -> Self {
        Self {
            primary: "#c64217".to_string(),
            secondary: "#f4ac24".to_string(),
        }
    }
}

impl MouthColors {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_color(FieldPath::new("mouth.primary"), &self.primary, diag);
        validate_color(FieldPath::new("mouth.secondary"), &self.secondary, diag);
    }
}

fn validate_color(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    if value.trim().is_empty() {
        diag.error_with_hint(field, "color must not be empty", "e.g. \"#f4ac24\"");
    } else if let Some(c) = value.chars().find(|c| FORBIDDEN.contains(c)) {
        diag.error_with_hint(
            field,
            format!("color `{value}` contains `{c}`"),
            "use a plain color value like \"#ffffff\" or \"white\"",
        );
    }
}
