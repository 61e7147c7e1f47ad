//! Animation configuration shared by every bone of a skeleton

use bones_core::{Color, Size};
use serde::{Deserialize, Serialize};

/// Default cycle length in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 1200;
/// Border radius used when a bone declares none
pub const DEFAULT_BORDER_RADIUS: f32 = 4.0;
/// Default bone fill (`#E1E9EE`)
pub const DEFAULT_BONE_COLOR: Color = Color::rgb(225.0 / 255.0, 233.0 / 255.0, 238.0 / 255.0);
/// Default highlight (`#F2F8FC`)
pub const DEFAULT_HIGHLIGHT_COLOR: Color =
    Color::rgb(242.0 / 255.0, 248.0 / 255.0, 252.0 / 255.0);
/// Scale applied to the longer side of a diagonal gradient overlay
pub const DIAGONAL_GRADIENT_SCALE: f32 = 1.5;

/// How bones are animated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    /// Fill color oscillates between bone and highlight colors
    Pulse,
    /// A gradient highlight sweeps across each bone
    #[default]
    Shiver,
    /// Flat bone color, no motion
    None,
}

impl AnimationType {
    /// Whether this type needs a running progress clock
    pub fn is_animated(&self) -> bool {
        !matches!(self, AnimationType::None)
    }
}

/// Sweep direction of the shiver highlight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    HorizontalLeft,
    #[default]
    HorizontalRight,
    VerticalTop,
    VerticalDown,
    DiagonalTopLeft,
    DiagonalTopRight,
    DiagonalDownLeft,
    DiagonalDownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::HorizontalLeft,
        Direction::HorizontalRight,
        Direction::VerticalTop,
        Direction::VerticalDown,
        Direction::DiagonalTopLeft,
        Direction::DiagonalTopRight,
        Direction::DiagonalDownLeft,
        Direction::DiagonalDownRight,
    ];

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::HorizontalLeft | Direction::HorizontalRight)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::VerticalTop | Direction::VerticalDown)
    }

    pub fn is_cardinal(&self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }

    pub fn is_diagonal(&self) -> bool {
        !self.is_cardinal()
    }

    /// Diagonals running along the top-left to bottom-right axis
    pub fn follows_leading_diagonal(&self) -> bool {
        matches!(self, Direction::DiagonalDownRight | Direction::DiagonalTopLeft)
    }
}

/// Everything about the skeleton a single bone's style depends on
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationMeta {
    /// Measured size of the host region, zero until known
    pub container_size: Size,
    pub animation_type: AnimationType,
    pub animation_direction: Direction,
    pub bone_color: Color,
    pub highlight_color: Color,
}

impl AnimationMeta {
    pub fn new(animation_type: AnimationType, animation_direction: Direction) -> Self {
        Self {
            animation_type,
            animation_direction,
            ..Self::default()
        }
    }

    /// Set the container size (builder pattern)
    pub fn container(mut self, size: Size) -> Self {
        self.container_size = size;
        self
    }

    /// Set bone and highlight colors (builder pattern)
    pub fn colors(mut self, bone: Color, highlight: Color) -> Self {
        self.bone_color = bone;
        self.highlight_color = highlight;
        self
    }
}

impl Default for AnimationMeta {
    fn default() -> Self {
        Self {
            container_size: Size::ZERO,
            animation_type: AnimationType::default(),
            animation_direction: Direction::default(),
            bone_color: DEFAULT_BONE_COLOR,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
        }
    }
}
