//! Bones Animation System
//!
//! Everything a skeleton needs to turn a clock into motion.
//!
//! # Features
//!
//! - **Interpolation**: `Interpolate` for floats and colors
//! - **Output Ranges**: progress in `[0, 1]` mapped onto a start/end pair
//! - **Easing**: linear and cubic easing curves
//! - **Progress Driver**: a tick-driven looping clock with optional boomerang
//!
//! The driver owns no thread and reads no wall time. The host advances it with
//! frame deltas and hands the resulting progress to the pure layout functions.

pub mod driver;
pub mod easing;
pub mod values;

pub use driver::ProgressDriver;
pub use easing::Easing;
pub use values::{Interpolate, OutputRange};
