//! Per-bone style computation
//!
//! [`compute_style`] is the pure function from a bone, its resolved size, the
//! skeleton's animation settings and the current progress to what a renderer
//! draws for that bone:
//!
//! - **pulse**: a flat rectangle whose color is interpolated between the bone
//!   and highlight colors
//! - **none**: a flat rectangle in the bone color
//! - **shiver**: a clipped rectangle holding a moving gradient overlay

use std::collections::BTreeMap;

use bones_core::{Color, Size, Vec2};
use serde::Serialize;
use serde_json::Value;

use crate::bone::{BoneSpec, Dimension};
use crate::meta::{AnimationMeta, AnimationType, DEFAULT_BORDER_RADIUS};
use crate::transform::{gradient_end_direction, gradient_size, gradient_transform, ShiverTransform};

/// Box style shared by every leaf bone
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoneStyle {
    pub width: f32,
    pub height: f32,
    pub border_radius: f32,
    pub background_color: Color,
    /// Clip children to the bone's box
    pub overflow_hidden: bool,
    /// Center children on both axes (diagonal overlays rotate about the center)
    pub center_content: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BoneStyle {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Style of a pulse or unanimated bone
pub type StaticStyle = BoneStyle;

/// The moving gradient inside a shiver bone
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientOverlay {
    pub size: Size,
    pub transform: ShiverTransform,
    /// Gradient end point; the gradient starts at the origin
    pub direction: Vec2,
    /// Bone, highlight, bone
    pub colors: [Color; 3],
}

/// Style of a shiver bone
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiverStyle {
    #[serde(flatten)]
    pub bone: BoneStyle,
    pub gradient: GradientOverlay,
}

/// Layout-only style of a container bone
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ContainerStyle {
    /// Everything a container entry declares except its children
    pub fn from_spec(spec: &BoneSpec) -> Self {
        Self {
            width: spec.width,
            height: spec.height,
            border_radius: spec.border_radius,
            background_color: spec.background_color,
            extra: spec.extra.clone(),
        }
    }
}

/// Output of [`compute_style`]
#[derive(Clone, Debug, PartialEq)]
pub enum BoneStyleOutput {
    Static(StaticStyle),
    Shiver(ShiverStyle),
}

impl BoneStyleOutput {
    pub fn bone(&self) -> &BoneStyle {
        match self {
            BoneStyleOutput::Static(style) => style,
            BoneStyleOutput::Shiver(style) => &style.bone,
        }
    }
}

fn base_style(bone: &BoneSpec, size: Size, meta: &AnimationMeta) -> BoneStyle {
    let animated_fill = meta.animation_type == AnimationType::Pulse;
    BoneStyle {
        width: size.width,
        height: size.height,
        border_radius: bone.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
        background_color: bone.background_color.unwrap_or(meta.bone_color),
        overflow_hidden: !animated_fill,
        center_content: meta.animation_direction.is_diagonal(),
        extra: bone.extra.clone(),
    }
}

/// Compute the style of a leaf bone at `progress`
///
/// Progress is clamped to `[0, 1]` (NaN reads as 0). The result depends only
/// on the arguments, so repeated calls return identical output.
pub fn compute_style(
    bone: &BoneSpec,
    size: Size,
    meta: &AnimationMeta,
    progress: f32,
) -> BoneStyleOutput {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let mut style = base_style(bone, size, meta);

    match meta.animation_type {
        AnimationType::Pulse => {
            style.background_color =
                Color::lerp(&meta.bone_color, &meta.highlight_color, progress);
            BoneStyleOutput::Static(style)
        }
        AnimationType::None => BoneStyleOutput::Static(style),
        AnimationType::Shiver => {
            let direction = meta.animation_direction;
            let gradient = GradientOverlay {
                size: gradient_size(size, direction),
                transform: gradient_transform(size, direction, progress),
                direction: gradient_end_direction(size, direction),
                colors: [meta.bone_color, meta.highlight_color, meta.bone_color],
            };
            BoneStyleOutput::Shiver(ShiverStyle {
                bone: style,
                gradient,
            })
        }
    }
}
