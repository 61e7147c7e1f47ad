//! Animatable value types
//!
//! Provides the interpolation trait and the output ranges that map a
//! normalized progress value onto concrete start/end values.

use bones_core::Color;
use serde::{Deserialize, Serialize};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// Scalar implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Color Implementation
// ============================================================================

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

// ============================================================================
// Output ranges
// ============================================================================

/// Output side of a `[0, 1] -> [start, end]` interpolation
///
/// Progress outside `[0, 1]` is clamped, so sampling never extrapolates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputRange<T> {
    pub start: T,
    pub end: T,
}

impl<T: Interpolate> OutputRange<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// The same range travelled the other way
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Value at `progress`
    pub fn sample(&self, progress: f32) -> T {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.start.lerp(&self.end, t)
    }
}

impl OutputRange<f32> {
    /// Symmetric range `[-extent, +extent]`
    pub fn symmetric(extent: f32) -> Self {
        Self::new(-extent, extent)
    }

    /// Distance between the endpoints
    pub fn span(&self) -> f32 {
        (self.end - self.start).abs()
    }
}
