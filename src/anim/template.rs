//! Directive markup templates.
//!
//! Each function renders one SMIL directive as a standalone fragment that
//! declares the SVG namespace, ready for [`crate::inject::Directive::parse`].

use crate::config::{HeadColors, IndicatorColors};
use crate::svg::SVG_NAMESPACE;

/// Key times of the indicator flash: a short spike right after the start.
const FLASH_KEY_TIMES: &str = "0; 0.05; 0.1; 1";

/// Key times of the mouth cycle: switch, hold, switch back, hold.
const CYCLE_KEY_TIMES: &str = "0; 0.25; 0.5; 0.75; 1";

/// `dur` attribute value for a period in seconds (`2.0` -> `2s`).
#[inline]
fn dur(secs: f32) -> String {
    format!("{secs}s")
}

/// Brief flash: base, flash, back to base, hold.
pub fn indicator_flash(colors: &IndicatorColors, secs: f32) -> String {
    let IndicatorColors { base, flash } = colors;
    format!(
        r#"<animate attributeName="fill"
         values="{base}; {flash}; {base}; {base}"
         keyTimes="{FLASH_KEY_TIMES}"
         dur="{dur}" repeatCount="indefinite" xmlns="{SVG_NAMESPACE}" />"#,
        dur = dur(secs),
    )
}

/// Smooth fade to the signal color and back, evenly spaced.
pub fn head_fade(colors: &HeadColors, secs: f32) -> String {
    let HeadColors { base, signal } = colors;
    format!(
        r#"<animate attributeName="fill"
         values="{base};{signal};{base}"
         dur="{dur}"
         repeatCount="indefinite" xmlns="{SVG_NAMESPACE}" />"#,
        dur = dur(secs),
    )
}

/// One phase of the two-color cycle: `from`, `to`, hold, `from`, hold.
///
/// Swapping `from` and `to` yields the complementary phase.
pub fn color_cycle(from: &str, to: &str, secs: f32) -> String {
    format!(
        r#"<animate attributeName="fill"
         values="{from};{to};{to};{from};{from}"
         keyTimes="{CYCLE_KEY_TIMES}"
         dur="{dur}" repeatCount="indefinite" xmlns="{SVG_NAMESPACE}" />"#,
        dur = dur(secs),
    )
}

/// Vertical bounce: up by `amplitude`, back, down, back.
pub fn oscillation(amplitude: f32, secs: f32) -> String {
    format!(
        r#"<animateTransform attributeName="transform" attributeType="XML" type="translate"
                 values="0,0; 0,-{amplitude}; 0,0; 0,{amplitude}; 0,0" dur="{dur}" repeatCount="indefinite" xmlns="{SVG_NAMESPACE}" />"#,
        dur = dur(secs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inject::Directive;

    fn attr(markup: &str, name: &str) -> String {
        let directive = Directive::parse(markup).unwrap();
        directive.template().attr(name).unwrap_or_default().to_string()
    }

    #[test]
    fn test_dur_formatting() {
        assert_eq!(dur(2.0), "2s");
        assert_eq!(dur(1.5), "1.5s");
    }

    #[test]
    fn test_indicator_flash() {
        let markup = indicator_flash(&IndicatorColors::default(), 2.0);
        assert_eq!(attr(&markup, "attributeName"), "fill");
        assert_eq!(attr(&markup, "values"), "#f4ac24; #ffffff; #f4ac24; #f4ac24");
        assert_eq!(attr(&markup, "keyTimes"), "0; 0.05; 0.1; 1");
        assert_eq!(attr(&markup, "dur"), "2s");
        assert_eq!(attr(&markup, "repeatCount"), "indefinite");
        assert_eq!(attr(&markup, "xmlns"), SVG_NAMESPACE);
    }

    #[test]
    fn test_head_fade_has_no_key_times() {
        let markup = head_fade(&HeadColors::default(), 3.0);
        let directive = Directive::parse(&markup).unwrap();
        assert_eq!(directive.template().name(), "animate");
        assert_eq!(directive.template().attr("values"), Some("#c74418;#f4ac24;#c74418"));
        assert_eq!(directive.template().attr("keyTimes"), None);
        assert_eq!(directive.template().attr("dur"), Some("3s"));
    }

    #[test]
    fn test_color_cycle_phases_are_complementary() {
        let a = color_cycle("#c64217", "#f4ac24", 2.0);
        let b = color_cycle("#f4ac24", "#c64217", 2.0);
        assert_eq!(attr(&a, "values"), "#c64217;#f4ac24;#f4ac24;#c64217;#c64217");
        assert_eq!(attr(&b, "values"), "#f4ac24;#c64217;#c64217;#f4ac24;#f4ac24");
        assert_eq!(attr(&a, "keyTimes"), "0; 0.25; 0.5; 0.75; 1");
    }

    #[test]
    fn test_oscillation() {
        let markup = oscillation(5.0, 1.5);
        let directive = Directive::parse(&markup).unwrap();
        let elem = directive.template();
        assert_eq!(elem.name(), "animateTransform");
        assert_eq!(elem.attr("type"), Some("translate"));
        assert_eq!(elem.attr("attributeType"), Some("XML"));
        assert_eq!(elem.attr("values"), Some("0,0; 0,-5; 0,0; 0,5; 0,0"));
        assert_eq!(elem.attr("dur"), Some("1.5s"));
    }
}
