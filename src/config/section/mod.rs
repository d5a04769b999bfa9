//! Configuration section definitions.
//!
//! Each struct corresponds to a section in `animate.toml`:
//!
//! | Struct            | TOML Section    | Purpose                        |
//! |-------------------|-----------------|--------------------------------|
//! | `IndicatorColors` | `[indicator]`   | Eye flash colors               |
//! | `HeadColors`      | `[head]`        | Head indicator fade colors     |
//! | `MouthColors`     | `[mouth]`       | Mouth segment cycle colors     |
//! | `Durations`       | `[durations]`   | Animation periods (seconds)    |
//! | `LabelConfig`     | `[label]`       | Label oscillation amplitude    |

mod colors;
mod timing;

pub use colors::{HeadColors, IndicatorColors, MouthColors};
pub use timing::{Durations, LabelConfig};
