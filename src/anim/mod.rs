//! Animation definitions: which directive goes to which element.
//!
//! | Group                 | Targets                        | Directive                 |
//! |-----------------------|--------------------------------|---------------------------|
//! | indicator flash       | `rightLED`, `leftLED`          | fill flash, 2s            |
//! | head indicator fade   | `headLED`                      | fill fade, 3s             |
//! | mouth color cycle     | `mouse1`..`mouse4`             | two-phase fill cycle, 2s  |
//! | label oscillation     | `LyricsSync`                   | translate bounce, 1.5s    |
//!
//! Groups are applied in this order. Ids are fixed; colors and periods come
//! from [`AnimConfig`].

mod template;

pub use template::{color_cycle, head_fade, indicator_flash, oscillation};

use crate::config::AnimConfig;

pub const RIGHT_LED: &str = "rightLED";
pub const LEFT_LED: &str = "leftLED";
pub const HEAD_LED: &str = "headLED";
pub const MOUTH: [&str; 4] = ["mouse1", "mouse2", "mouse3", "mouse4"];
pub const LABEL: &str = "LyricsSync";

/// One element id and the directive markup it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: &'static str,
    pub markup: String,
}

impl Target {
    fn new(id: &'static str, markup: impl Into<String>) -> Self {
        Self {
            id,
            markup: markup.into(),
        }
    }
}

/// A named set of targets, reported together when ids are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationGroup {
    pub name: &'static str,
    pub targets: Vec<Target>,
}

/// All groups, in application order.
pub fn groups(config: &AnimConfig) -> Vec<AnimationGroup> {
    let durations = &config.durations;

    let flash = indicator_flash(&config.indicator, durations.indicator);

    let mouth = &config.mouth;
    let phase_a = color_cycle(&mouth.primary, &mouth.secondary, durations.mouth);
    let phase_b = color_cycle(&mouth.secondary, &mouth.primary, durations.mouth);

    vec![
        AnimationGroup {
            name: "indicator flash",
            targets: vec![
                Target::new(RIGHT_LED, flash.clone()),
                Target::new(LEFT_LED, flash),
            ],
        },
        AnimationGroup {
            name: "head indicator fade",
            targets: vec![Target::new(
                HEAD_LED,
                head_fade(&config.head, durations.head),
            )],
        },
        AnimationGroup {
            name: "mouth color cycle",
            targets: vec![
                Target::new(MOUTH[0], phase_a.clone()),
                Target::new(MOUTH[3], phase_a),
                Target::new(MOUTH[1], phase_b.clone()),
                Target::new(MOUTH[2], phase_b),
            ],
        },
        AnimationGroup {
            name: "label oscillation",
            targets: vec![Target::new(
                LABEL,
                oscillation(config.label.amplitude, durations.label),
            )],
        },
    ]
}
