//! Load → clone → inject → write.
//!
//! ```text
//! input.svg ──► svg::load ──► Document ──► clone ──► apply_group × 4 ──► svg::save
//!                   │                                     │                  │
//!                 fatal                          warnings (Diagnostics)   reported
//! ```
//!
//! Only loading can abort a run. Missing ids and malformed directives are
//! recorded per group, and a failed write is reported in the [`Report`].

mod report;

pub use report::{Output, Report};

use crate::anim::{self, AnimationGroup};
use crate::config::AnimConfig;
use crate::inject::{Diagnostics, Warning, add_animation};
use crate::svg::{self, Document, Element, SvgError, find_by_id, find_by_id_mut};
use crate::{debug, log};

/// Inject every target of `group` below `root`.
///
/// Ids are looked up in `source`, the untouched input; ids missing there
/// are reported as one warning. Returns the number of directives appended.
pub fn apply_group(
    source: &Element,
    root: &mut Element,
    group: &AnimationGroup,
    diag: &mut Diagnostics,
) -> usize {
    let mut applied = 0;
    let mut missing = Vec::new();

    for target in &group.targets {
        if find_by_id(source, target.id).is_none() {
            missing.push(target.id.to_string());
            continue;
        }
        let added = add_animation(find_by_id_mut(root, target.id), &target.markup, diag);
        if added > 0 {
            debug!("inject"; "{} -> #{}", group.name, target.id);
        }
        applied += added;
    }

    if !missing.is_empty() {
        diag.warn(Warning::MissingTargets {
            group: group.name,
            ids: missing,
        });
    }
    applied
}

/// Apply all groups to a deep copy of `source`.
///
/// Returns the animated copy and the number of directives appended;
/// `source` is left as loaded.
pub fn animate(source: &Document, config: &AnimConfig, diag: &mut Diagnostics) -> (Document, usize) {
    let mut animated = source.clone();
    let mut injected = 0;

    for group in anim::groups(config) {
        log!("animate"; "{}", group.name);
        injected += apply_group(source.root(), animated.root_mut(), &group, diag);
    }

    (animated, injected)
}

/// Run the whole pipeline.
///
/// Fails only if the input cannot be loaded; a write failure ends up in
/// [`Report::output`].
pub fn run(config: &AnimConfig, dry: bool) -> Result<Report, SvgError> {
    let source = svg::load(&config.input)?;
    log!("animate"; "loaded {}", config.input.display());

    let mut diagnostics = Diagnostics::new();
    let (animated, injected) = animate(&source, config, &mut diagnostics);

    let output = if dry {
        Output::Skipped
    } else {
        match svg::save(&animated, &config.output) {
            Ok(()) => Output::Written(config.output.clone()),
            Err(err) => Output::Failed(err),
        }
    };

    Ok(Report {
        injected,
        elements_before: source.root().element_count(),
        elements_after: animated.root().element_count(),
        diagnostics,
        output,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{HEAD_LED, LABEL, LEFT_LED, MOUTH, RIGHT_LED};
    use crate::svg::{Node, parse_document};
    use std::fs;
    use tempfile::TempDir;

    const ALL_IDS: [&str; 8] = [
        RIGHT_LED, LEFT_LED, HEAD_LED, MOUTH[0], MOUTH[1], MOUTH[2], MOUTH[3], LABEL,
    ];

    const LOGO: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <g id="robot">
    <circle id="rightLED" cx="30" cy="40" r="5" fill="#f4ac24"/>
    <circle id="leftLED" cx="70" cy="40" r="5" fill="#f4ac24"/>
    <rect id="headLED" x="45" y="5" width="10" height="5" fill="#c74418"/>
    <g id="mouth">
      <rect id="mouse1" x="30" y="60" width="10" height="5" fill="#c64217"/>
      <rect id="mouse2" x="40" y="60" width="10" height="5" fill="#f4ac24"/>
      <rect id="mouse3" x="50" y="60" width="10" height="5" fill="#f4ac24"/>
      <rect id="mouse4" x="60" y="60" width="10" height="5" fill="#c64217"/>
    </g>
  </g>
  <g id="LyricsSync"><text x="50" y="90">LyricsSync</text></g>
</svg>"##;

    /// Elements appended below `id`, compared with `source`.
    fn new_children<'a>(source: &Document, animated: &'a Document, id: &str) -> Vec<&'a Element> {
        let before = find_by_id(source.root(), id).unwrap().children().len();
        let after = find_by_id(animated.root(), id).unwrap();
        after.children()[before..]
            .iter()
            .filter_map(Node::as_element)
            .collect()
    }

    fn config_in(dir: &TempDir) -> AnimConfig {
        AnimConfig {
            input: dir.path().join("original.svg"),
            output: dir.path().join("animated_result.svg"),
            ..AnimConfig::default()
        }
    }

    #[test]
    fn test_every_target_gets_one_directive() {
        let source = parse_document(LOGO).unwrap();
        let mut diag = Diagnostics::new();
        let (animated, injected) = animate(&source, &AnimConfig::default(), &mut diag);

        assert_eq!(injected, 8);
        assert!(diag.is_empty());
        for id in ALL_IDS {
            assert_eq!(new_children(&source, &animated, id).len(), 1, "#{id}");
        }
    }

    #[test]
    fn test_directive_values() {
        let source = parse_document(LOGO).unwrap();
        let mut diag = Diagnostics::new();
        let (animated, _) = animate(&source, &AnimConfig::default(), &mut diag);

        let values = |id: &str| {
            let added = new_children(&source, &animated, id);
            added[0].attr("values").unwrap().to_string()
        };

        assert_eq!(values(RIGHT_LED), "#f4ac24; #ffffff; #f4ac24; #f4ac24");
        assert_eq!(values(LEFT_LED), "#f4ac24; #ffffff; #f4ac24; #f4ac24");
        assert_eq!(values(HEAD_LED), "#c74418;#f4ac24;#c74418");
        assert_eq!(values("mouse1"), "#c64217;#f4ac24;#f4ac24;#c64217;#c64217");
        assert_eq!(values("mouse4"), "#c64217;#f4ac24;#f4ac24;#c64217;#c64217");
        assert_eq!(values("mouse2"), "#f4ac24;#c64217;#c64217;#f4ac24;#f4ac24");
        assert_eq!(values("mouse3"), "#f4ac24;#c64217;#c64217;#f4ac24;#f4ac24");
        assert_eq!(values(LABEL), "0,0; 0,-5; 0,0; 0,5; 0,0");

        let label = new_children(&source, &animated, LABEL);
        assert_eq!(label[0].name(), "animateTransform");
        assert_eq!(label[0].attr("dur"), Some("1.5s"));
        let head = new_children(&source, &animated, HEAD_LED);
        assert_eq!(head[0].attr("keyTimes"), None);
        assert_eq!(head[0].attr("dur"), Some("3s"));
    }

    #[test]
    fn test_source_is_untouched_and_originals_preserved() {
        let source = parse_document(LOGO).unwrap();
        let pristine = source.clone();
        let mut diag = Diagnostics::new();
        let (animated, _) = animate(&source, &AnimConfig::default(), &mut diag);

        assert_eq!(source, pristine);
        assert_eq!(animated.root().element_count(), source.root().element_count() + 8);

        // every original child and attribute is still in place
        for id in ALL_IDS {
            let before = find_by_id(source.root(), id).unwrap();
            let after = find_by_id(animated.root(), id).unwrap();
            assert_eq!(before.attrs().collect::<Vec<_>>(), after.attrs().collect::<Vec<_>>());
            assert_eq!(before.children(), &after.children()[..before.children().len()]);
        }
    }

    #[test]
    fn test_missing_head_led_warns_once() {
        let logo = LOGO.replace("id=\"headLED\"", "id=\"hat\"");
        let source = parse_document(&logo).unwrap();
        let mut diag = Diagnostics::new();
        let (animated, injected) = animate(&source, &AnimConfig::default(), &mut diag);

        assert_eq!(injected, 7);
        assert_eq!(
            diag.warnings(),
            &[Warning::MissingTargets {
                group: "head indicator fade",
                ids: vec!["headLED".to_string()],
            }]
        );
        assert!(find_by_id(animated.root(), "hat").unwrap().children().is_empty());
        for id in ALL_IDS.iter().copied().filter(|id| *id != HEAD_LED) {
            assert_eq!(new_children(&source, &animated, id).len(), 1, "#{id}");
        }
    }

    #[test]
    fn test_missing_indicators_report_one_warning_per_group() {
        let logo = LOGO
            .replace("id=\"rightLED\"", "id=\"r\"")
            .replace("id=\"leftLED\"", "id=\"l\"");
        let source = parse_document(&logo).unwrap();
        let mut diag = Diagnostics::new();
        let (_, injected) = animate(&source, &AnimConfig::default(), &mut diag);

        assert_eq!(injected, 6);
        assert!(matches!(
            diag.warnings(),
            [Warning::MissingTargets { group: "indicator flash", ids }] if ids.len() == 2
        ));
    }

    #[test]
    fn test_duplicate_id_animates_first_match_only() {
        let logo = LOGO.replace(
            "<g id=\"LyricsSync\">",
            "<g id=\"LyricsSync\" class=\"first\"><g id=\"LyricsSync\" class=\"second\"/>",
        );
        let source = parse_document(&logo).unwrap();
        let mut diag = Diagnostics::new();
        let (animated, injected) = animate(&source, &AnimConfig::default(), &mut diag);

        assert_eq!(injected, 8);
        let first = find_by_id(animated.root(), LABEL).unwrap();
        assert_eq!(first.attr("class"), Some("first"));
        assert_eq!(
            first.child_elements().last().map(Element::name),
            Some("animateTransform")
        );
        let second = first.child_elements().next().unwrap();
        assert_eq!(second.attr("class"), Some("second"));
        assert!(second.children().is_empty());
    }

    #[test]
    fn test_run_writes_output() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, LOGO).unwrap();

        let report = run(&config, false).unwrap();
        assert!(matches!(&report.output, Output::Written(path) if *path == config.output));
        assert_eq!(report.injected, 8);
        assert_eq!(report.warning_count(), 0);
        assert_eq!(report.elements_after, report.elements_before + 8);

        let written = fs::read_to_string(&config.output).unwrap();
        assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(written.contains(r##"values="#f4ac24; #ffffff; #f4ac24; #f4ac24""##));
        // directives inherit the root namespace instead of redeclaring it
        assert_eq!(written.matches("xmlns=").count(), 1);

        // input is never modified
        assert_eq!(fs::read_to_string(&config.input).unwrap(), LOGO);
    }

    #[test]
    fn test_rerun_appends_second_set() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, LOGO).unwrap();
        run(&config, false).unwrap();

        let second = AnimConfig {
            input: config.output.clone(),
            output: dir.path().join("twice.svg"),
            ..AnimConfig::default()
        };
        let report = run(&second, false).unwrap();
        assert_eq!(report.injected, 8);

        let twice = svg::load(&second.output).unwrap();
        let led = find_by_id(twice.root(), RIGHT_LED).unwrap();
        let animations: Vec<_> = led
            .child_elements()
            .filter(|e| e.name() == "animate")
            .collect();
        assert_eq!(animations.len(), 2);
        assert_eq!(animations[0], animations[1]);
    }

    #[test]
    fn test_run_dry_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, LOGO).unwrap();

        let report = run(&config, true).unwrap();
        assert!(matches!(report.output, Output::Skipped));
        assert_eq!(report.injected, 8);
        assert!(!config.output.exists());
    }

    #[test]
    fn test_run_missing_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        assert!(matches!(run(&config, false), Err(SvgError::NotFound(_))));
    }

    #[test]
    fn test_run_malformed_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, "<svg><g id=\"rightLED\"></svg>").unwrap();
        assert!(matches!(run(&config, false), Err(SvgError::Malformed(..))));
    }

    #[test]
    fn test_run_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = AnimConfig {
            output: dir.path().join("missing/dir/out.svg"),
            ..config_in(&dir)
        };
        fs::write(&config.input, LOGO).unwrap();

        let report = run(&config, false).unwrap();
        assert!(matches!(report.output, Output::Failed(SvgError::Write(..))));
        assert_eq!(report.injected, 8);
    }
}
