//! `[durations]` and `[label]` sections.
//!
//! # Example
//!
//! ```toml
//! [durations]           # animation periods in seconds
//! indicator = 2.0
//! head = 3.0
//! mouth = 2.0
//! label = 1.5
//!
//! [label]
//! amplitude = 5.0       # vertical travel of the label, in user units
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Animation periods, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Durations {
    pub indicator: f32,
    pub head: f32,
    pub mouth: f32,
    pub label: f32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            indicator: 2.0,
            head: 3.0,
            mouth: 2.0,
            label: 1.5,
        }
    }
}

impl Durations {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, secs) in [
            (FieldPath::new("durations.indicator"), self.indicator),
            (FieldPath::new("durations.head"), self.head),
            (FieldPath::new("durations.mouth"), self.mouth),
            (FieldPath::new("durations.label"), self.label),
        ] {
            validate_positive(field, secs, "use seconds, e.g. 1.5", diag);
        }
    }
}

/// Label oscillation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Vertical travel in each direction, in user units.
    pub amplitude: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { amplitude: 5.0 }
    }
}

impl LabelConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_positive(
            FieldPath::new("label.amplitude"),
            self.amplitude,
            "e.g. 5.0",
            diag,
        );
    }
}

fn validate_positive(field: FieldPath, value: f32, hint: &str, diag: &mut ConfigDiagnostics) {
    if !value.is_finite() || value <= 0.0 {
        diag.error_with_hint(field, format!("must be a positive number, got {value}"), hint);
    }
}
