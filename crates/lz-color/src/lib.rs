//! lz-color: per-step display colors for Lorenz curves.
//!
//! Contains:
//! - rgb (8-bit RGB triple, named palette, parsing)
//! - hsb (hue/saturation/brightness conversion, AWT-compatible rounding)
//! - policy (Rainbow / GreenOscillation / Flat sequencing by step index)

pub mod hsb;
pub mod policy;
pub mod rgb;

pub use hsb::{Hsb, hsb_to_rgb, rgb_to_hsb};
pub use policy::{ColorPolicy, ColorSequencer};
pub use rgb::{ColorError, Rgb};
