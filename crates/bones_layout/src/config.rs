//! Skeleton configuration
//!
//! Every setting a skeleton accepts, with the documented defaults for any
//! field left out. Configurations deserialize from TOML or JSON using the
//! camelCase field names skeleton layouts are written with:
//!
//! ```toml
//! duration = 1600
//! animationType = "shiver"
//! animationDirection = "diagonalDownRight"
//! boneColor = "#E1E9EE"
//!
//! [[layout]]
//! width = "100%"
//! height = 160
//!
//! [[layout]]
//! width = 220
//! height = 20
//! marginTop = 12
//! ```

use std::collections::BTreeMap;

use bones_core::{Color, Size};
use bones_animation::Easing;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::bone::BoneSpec;
use crate::error::Result;
use crate::meta::{
    AnimationMeta, AnimationType, Direction, DEFAULT_BONE_COLOR, DEFAULT_DURATION_MS,
    DEFAULT_HIGHLIGHT_COLOR,
};

/// Full skeleton configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkeletonConfig {
    /// Cycle length in milliseconds
    pub duration: u32,
    pub animation_type: AnimationType,
    pub animation_direction: Direction,
    pub bone_color: Color,
    pub highlight_color: Color,
    pub easing: Easing,
    /// Reverse instead of restarting at the end of each cycle; unset picks
    /// the animation type's usual behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boomerang: Option<bool>,
    /// Passthrough style for the host region
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub container_style: BTreeMap<String, Value>,
    /// Explicit bone layout; empty means mirror the rendered children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layout: Vec<BoneSpec>,
    pub is_loading: bool,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION_MS,
            animation_type: AnimationType::default(),
            animation_direction: Direction::default(),
            bone_color: DEFAULT_BONE_COLOR,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            easing: Easing::default(),
            boomerang: None,
            container_style: BTreeMap::new(),
            layout: Vec::new(),
            is_loading: true,
        }
    }
}

impl SkeletonConfig {
    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        debug!(bones = config.layout.len(), "loaded skeleton config from TOML");
        Ok(config)
    }

    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        debug!(bones = config.layout.len(), "loaded skeleton config from JSON");
        Ok(config)
    }

    /// Explicit layout, if one was given
    pub fn layout(&self) -> Option<&[BoneSpec]> {
        if self.layout.is_empty() {
            None
        } else {
            Some(&self.layout)
        }
    }

    /// Animation settings for a container of the given size
    pub fn meta(&self, container: Size) -> AnimationMeta {
        AnimationMeta::new(self.animation_type, self.animation_direction)
            .container(container)
            .colors(self.bone_color, self.highlight_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bone::Dimension;
    use crate::error::ConfigError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SkeletonConfig::from_toml_str("").unwrap();
        assert_eq!(config, SkeletonConfig::default());
        assert_eq!(config.duration, 1200);
        assert_eq!(config.animation_type, AnimationType::Shiver);
        assert_eq!(config.animation_direction, Direction::HorizontalRight);
        assert!(config.is_loading);
        assert!(config.layout().is_none());
    }

    #[test]
    fn test_toml_layout() {
        let config = SkeletonConfig::from_toml_str(
            r##"
            duration = 800
            animationType = "pulse"
            boneColor = "#101010"
            highlightColor = "rgb(255, 255, 255)"
            boomerang = false

            [containerStyle]
            padding = 16

            [[layout]]
            width = "100%"
            height = 120

            [[layout]]
            key = "row"
            flexDirection = "row"

            [[layout.children]]
            width = 40
            height = 40
            borderRadius = 20
            "##,
        )
        .unwrap();

        assert_eq!(config.duration, 800);
        assert_eq!(config.animation_type, AnimationType::Pulse);
        assert_eq!(config.bone_color, Color::from_rgba8(16, 16, 16, 255));
        assert_eq!(config.highlight_color, Color::WHITE);
        assert_eq!(config.boomerang, Some(false));
        assert_eq!(config.container_style.get("padding"), Some(&serde_json::json!(16)));

        let layout = config.layout().unwrap();
        assert_eq!(layout.len(), 2);
        assert_eq!(layout[0].width, Some(Dimension::FillContainer));
        assert!(layout[1].is_container());
        assert_eq!(layout[1].children[0].border_radius, Some(20.0));
    }

    #[test]
    fn test_json_layout() {
        let config = SkeletonConfig::from_json_str(
            r#"{
                "animationDirection": "verticalTop",
                "easing": "easeInOut",
                "isLoading": false,
                "layout": [{ "width": 10, "height": 10 }]
            }"#,
        )
        .unwrap();
        assert_eq!(config.animation_direction, Direction::VerticalTop);
        assert_eq!(config.easing, Easing::EaseInOut);
        assert!(!config.is_loading);
        assert_eq!(config.layout.len(), 1);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            SkeletonConfig::from_toml_str("duration = \"slow\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            SkeletonConfig::from_json_str("{ \"boneColor\": \"not a color\" }"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SkeletonConfig::from_json_str("{ \"animationType\": \"wobble\" }"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_bad_bone_values_do_not_reject_the_layout() {
        let config = SkeletonConfig::from_json_str(
            r#"{
                "layout": [
                    { "width": 10, "height": 10 },
                    { "width": 20, "height": 10, "backgroundColor": "hsl(0,0%,90%)" },
                    { "width": 30, "height": 10, "children": null }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.layout.len(), 3);
        assert_eq!(config.layout[1].background_color, None);
        assert!(!config.layout[2].is_container());

        let meta = config.meta(Size::new(100.0, 100.0));
        let bones = crate::tree::build(config.layout(), &[], 0.0, &meta);
        assert_eq!(bones.len(), 3);
        assert_eq!(bones[1].size, Size::new(20.0, 10.0));
    }

    #[test]
    fn test_meta() {
        let config = SkeletonConfig {
            animation_type: AnimationType::None,
            bone_color: Color::RED,
            ..Default::default()
        };
        let meta = config.meta(Size::new(20.0, 10.0));
        assert_eq!(meta.container_size, Size::new(20.0, 10.0));
        assert_eq!(meta.animation_type, AnimationType::None);
        assert_eq!(meta.bone_color, Color::RED);
        assert_eq!(meta.highlight_color, DEFAULT_HIGHLIGHT_COLOR);
    }
}
