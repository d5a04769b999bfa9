//! Recoverable injection warnings, collected for grouped display.

use crate::log;
use owo_colors::OwoColorize;
use std::fmt;

/// A recoverable problem met while injecting directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// One or more target ids of an animation group were not found.
    MissingTargets {
        group: &'static str,
        ids: Vec<String>,
    },
    /// The parent for a multi-target injection was not found.
    MissingParent,
    /// A directive fragment failed to parse.
    MalformedDirective { markup: String, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTargets { group, ids } => {
                let ids: Vec<_> = ids.iter().map(|id| format!("`{id}`")).collect();
                write!(f, "{group}: no element with id {}", ids.join(", "))?;
                write!(
                    f,
                    "\n  {} check the element ids in your SVG editor",
                    "hint:".yellow()
                )
            }
            Self::MissingParent => write!(f, "parent element for child animations not found"),
            Self::MalformedDirective { markup, reason } => {
                write!(f, "animation markup does not parse: {reason}")?;
                write!(f, "\n  {} {}", "markup:".dimmed(), markup.trim())
            }
        }
    }
}

/// Collected warnings of one pipeline run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        crate::debug!("inject"; "{}", warning);
        self.warnings.push(warning);
    }

    #[cfg(test)]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Print every collected warning.
    pub fn print(&self) {
        for warning in &self.warnings {
            log!("warning"; "{}", warning);
        }
    }
}
