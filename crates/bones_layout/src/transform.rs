//! Shiver gradient transforms
//!
//! A shiver bone is a fixed clipping rectangle with a gradient overlay inside
//! it. The overlay is translated (and for diagonal directions rotated) as
//! progress runs from 0 to 1 so the highlight sweeps across the bone.
//!
//! # Cardinal directions
//!
//! The overlay travels from `-extent` to `+extent` (or back), where the extent
//! is the bone's width for horizontal directions and its height for vertical
//! ones.
//!
//! # Diagonal directions
//!
//! The overlay is rotated so its gradient bands lie across the bone's
//! diagonal, then moved along that diagonal:
//!
//! ```text
//! diagonal = sqrt(w² + h²)          main = max(w, h)
//! angle    = acos(main / diagonal)  (between the diagonal and the long side)
//! distance = (diagonal + opposite) / 2
//! ```
//!
//! The base rotation assumes height is the long side. Wide bones get an extra
//! `±2·angle` of rotation and have their translation axes swapped after
//! interpolation. Anti-diagonal sweeps on tall bones run their ranges in
//! reverse so the highlight still travels in the named direction.

use std::f32::consts::FRAC_PI_2;

use bones_animation::OutputRange;
use bones_core::{Affine2D, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::meta::{Direction, DIAGONAL_GRADIENT_SCALE};

/// Translation and rotation of a gradient overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiverTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Rotation in radians, clockwise on screen
    pub rotate: f32,
}

impl ShiverTransform {
    /// No movement and no rotation
    pub const NEUTRAL: ShiverTransform = ShiverTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    pub fn is_finite(&self) -> bool {
        self.translate_x.is_finite() && self.translate_y.is_finite() && self.rotate.is_finite()
    }

    /// Matrix form: rotate about the overlay origin, then translate
    pub fn to_affine(&self) -> Affine2D {
        Affine2D::translation(self.translate_x, self.translate_y)
            .then(&Affine2D::rotation(self.rotate))
    }
}

/// End point of the overlay's linear gradient (the start is always the origin)
///
/// Diagonal sweeps run the gradient along the bone's shorter side.
pub fn gradient_end_direction(size: Size, direction: Direction) -> Vec2 {
    if direction.is_horizontal() {
        return Vec2::X;
    }
    if direction.is_vertical() {
        return Vec2::Y;
    }
    if size.width > 0.0 && size.height > 0.0 && size.width > size.height {
        Vec2::Y
    } else {
        Vec2::X
    }
}

/// Size of the gradient overlay
///
/// Diagonal overlays are stretched along the bone's longer side (height on
/// ties) so the rotated gradient still covers the whole bone.
pub fn gradient_size(size: Size, direction: Direction) -> Size {
    if direction.is_cardinal() {
        return size;
    }
    if size.height >= size.width {
        Size::new(size.width, size.height * DIAGONAL_GRADIENT_SCALE)
    } else {
        Size::new(size.width * DIAGONAL_GRADIENT_SCALE, size.height)
    }
}

/// Travel range of a cardinal sweep along its own axis
///
/// Returns `None` for diagonal directions.
pub fn position_range(size: Size, direction: Direction) -> Option<OutputRange<f32>> {
    let range = match direction {
        Direction::HorizontalRight => OutputRange::symmetric(size.width),
        Direction::HorizontalLeft => OutputRange::symmetric(size.width).reversed(),
        Direction::VerticalDown => OutputRange::symmetric(size.height),
        Direction::VerticalTop => OutputRange::symmetric(size.height).reversed(),
        _ => return None,
    };
    Some(range)
}

/// Rotation and travel ranges of a diagonal sweep
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagonalSweep {
    /// Angle between the bone's diagonal and its longer side
    pub diagonal_angle: f32,
    /// Overlay rotation in radians
    pub rotate: f32,
    pub x_range: OutputRange<f32>,
    pub y_range: OutputRange<f32>,
    /// Width is the main dimension; translations swap axes after sampling
    pub swap_axes: bool,
}

impl DiagonalSweep {
    /// Compute the sweep for a bone
    ///
    /// Returns `None` for cardinal directions and for bones without a usable
    /// area, where the trigonometry is undefined.
    pub fn new(size: Size, direction: Direction) -> Option<Self> {
        if direction.is_cardinal() {
            return None;
        }
        if size.is_degenerate() {
            tracing::trace!(
                width = size.width,
                height = size.height,
                "degenerate bone, diagonal sweep skipped"
            );
            return None;
        }

        let Size { width, height } = size;
        let diagonal = size.diagonal();
        let main = size.max_side();
        let width_is_main = main == width;
        let opposite = if width_is_main { height } else { width };
        let is_square = width == height;

        // Clamp guards acos against rounding just above 1
        let diagonal_angle = (main / diagonal).clamp(-1.0, 1.0).acos();
        let leading = direction.follows_leading_diagonal();

        let mut rotate = if leading {
            FRAC_PI_2 - diagonal_angle
        } else {
            FRAC_PI_2 + diagonal_angle
        };
        if width_is_main && !is_square {
            rotate += if leading {
                2.0 * diagonal_angle
            } else {
                -2.0 * diagonal_angle
            };
        }

        let distance = (diagonal + opposite) / 2.0;
        let sin_component = diagonal_angle.sin() * distance;
        let cos_component = diagonal_angle.cos() * distance;

        let sin_range = OutputRange::symmetric(sin_component);
        let cos_range = OutputRange::symmetric(cos_component);

        let (mut x_range, mut y_range) = match direction {
            Direction::DiagonalDownRight => (sin_range, cos_range),
            Direction::DiagonalTopLeft => (sin_range.reversed(), cos_range.reversed()),
            Direction::DiagonalDownLeft => (sin_range, cos_range.reversed()),
            Direction::DiagonalTopRight => (sin_range.reversed(), cos_range),
            _ => return None,
        };
        if !leading && !width_is_main && !is_square {
            x_range = x_range.reversed();
            y_range = y_range.reversed();
        }

        Some(Self {
            diagonal_angle,
            rotate,
            x_range,
            y_range,
            swap_axes: width_is_main,
        })
    }

    /// Overlay transform at `progress`
    pub fn sample(&self, progress: f32) -> ShiverTransform {
        let x = self.x_range.sample(progress);
        let y = self.y_range.sample(progress);
        let (translate_x, translate_y) = if self.swap_axes { (y, x) } else { (x, y) };

        ShiverTransform {
            translate_x,
            translate_y,
            rotate: self.rotate,
        }
    }
}

/// Overlay transform for a bone of `size` at `progress`
///
/// Bones without a usable area get [`ShiverTransform::NEUTRAL`] for diagonal
/// directions, so no NaN reaches a renderer.
pub fn gradient_transform(size: Size, direction: Direction, progress: f32) -> ShiverTransform {
    if let Some(range) = position_range(size, direction) {
        let position = range.sample(progress);
        return if direction.is_vertical() {
            ShiverTransform {
                translate_y: position,
                ..ShiverTransform::NEUTRAL
            }
        } else {
            ShiverTransform {
                translate_x: position,
                ..ShiverTransform::NEUTRAL
            }
        };
    }

    DiagonalSweep::new(size, direction)
        .map(|sweep| sweep.sample(progress))
        .unwrap_or(ShiverTransform::NEUTRAL)
}
