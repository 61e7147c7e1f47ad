//! Geometry resolution
//!
//! Turns a bone's declared dimensions into concrete numbers using the
//! measured container size. Resolution never fails: anything missing or
//! unusable becomes 0.
//!
//! The height field alone decides whether a bone fills the container. When
//! `height` is [`Dimension::FillContainer`] both sides come from the
//! container, even if a fixed width is declared. This matches the layout
//! format skeleton layouts are written in and is kept as-is, surprising as it
//! is.

use bones_core::Size;

use crate::bone::{BoneSpec, Dimension};

/// Resolve the concrete size of a bone inside `container`
pub fn resolve(bone: &BoneSpec, container: Size) -> Size {
    if matches!(bone.height, Some(Dimension::FillContainer)) {
        return Size::new(
            non_negative(container.width),
            non_negative(container.height),
        );
    }

    let width = match bone.width {
        Some(Dimension::Fixed(width)) => width,
        // A fill width without a fill height still means "as wide as the container"
        Some(Dimension::FillContainer) => container.width,
        None => 0.0,
    };
    let height = match bone.height {
        Some(Dimension::Fixed(height)) => height,
        Some(Dimension::FillContainer) => container.height,
        None => 0.0,
    };

    Size::new(non_negative(width), non_negative(height))
}

/// Zero for negative, NaN and infinite lengths
fn non_negative(length: f32) -> f32 {
    if length.is_finite() && length > 0.0 {
        length
    } else {
        0.0
    }
}
