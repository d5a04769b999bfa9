//! Animation directive injection.
//!
//! A directive is parsed once into an immutable [`Directive`] template;
//! every target receives its own clone, so injected copies never share
//! state.
//!
//! | Function                      | Target                         | Missing target     |
//! |-------------------------------|--------------------------------|--------------------|
//! | [`add_animation`]             | the element itself             | silent no-op       |
//! | [`add_animation_to_children`] | every direct child element     | `MissingParent`    |
//!
//! Malformed markup is never fatal: it is recorded as a warning and the
//! target is left untouched.

mod diagnostics;

pub use diagnostics::{Diagnostics, Warning};

use crate::svg::{Element, XmlError, parse_fragment};

/// A parsed animation directive, used as a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    template: Element,
}

impl Directive {
    /// Parse a directive from a markup fragment.
    pub fn parse(markup: &str) -> Result<Self, XmlError> {
        parse_fragment(markup).map(|template| Self { template })
    }

    #[cfg(test)]
    pub fn template(&self) -> &Element {
        &self.template
    }

    /// A structurally independent copy for one target.
    #[inline]
    pub fn instantiate(&self) -> Element {
        self.template.clone()
    }

    /// Append a fresh copy as the last child of `target`.
    #[inline]
    pub fn apply(&self, target: &mut Element) {
        target.append(self.instantiate());
    }
}

/// Parse `markup`, recording a warning on failure.
fn parse_or_warn(markup: &str, diag: &mut Diagnostics) -> Option<Directive> {
    match Directive::parse(markup) {
        Ok(directive) => Some(directive),
        Err(err) => {
            diag.warn(Warning::MalformedDirective {
                markup: markup.to_string(),
                reason: err.to_string(),
            });
            None
        }
    }
}

/// Append the directive in `markup` to `target`.
///
/// An absent target is a no-op; the caller reports it. Returns the number
/// of directives appended (0 or 1).
pub fn add_animation(target: Option<&mut Element>, markup: &str, diag: &mut Diagnostics) -> usize {
    let Some(target) = target else {
        return 0;
    };
    let Some(directive) = parse_or_warn(markup, diag) else {
        return 0;
    };
    directive.apply(target);
    1
}

/// Append an independent copy of the directive in `markup` to every direct
/// child element of `parent` (not to `parent` itself).
///
/// Returns the number of directives appended.
pub fn add_animation_to_children(
    parent: Option<&mut Element>,
    markup: &str,
    diag: &mut Diagnostics,
) -> usize {
    let Some(parent) = parent else {
        diag.warn(Warning::MissingParent);
        return 0;
    };
    let Some(directive) = parse_or_warn(markup, diag) else {
        return 0;
    };

    let mut applied = 0;
    for child in parent.child_elements_mut() {
        directive.apply(child);
        applied += 1;
    }
    applied
}

// ============================================================================
// Tests
// ============================================================================
