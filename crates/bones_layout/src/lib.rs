//! Bones Layout Engine
//!
//! Skeleton placeholders described as bone layouts and resolved to pure,
//! renderer-agnostic bone trees once per frame.
//!
//! # Example
//!
//! ```rust
//! use bones_core::Size;
//! use bones_layout::prelude::*;
//!
//! let layout = vec![
//!     bone()
//!         .style("flexDirection", "row")
//!         .child(bone().square(48.0).rounded(24.0))
//!         .child(bone().w(180.0).h(16.0)),
//!     bone().w_full().h(120.0),
//! ];
//!
//! let meta = AnimationMeta::new(AnimationType::Shiver, Direction::DiagonalDownRight)
//!     .container(Size::new(360.0, 240.0));
//! let bones = build(Some(&layout), &[], 0.5, &meta);
//!
//! assert!(bones[0].is_container());
//! assert_eq!(bones[1].size, Size::new(360.0, 120.0));
//! ```

pub mod bone;
pub mod config;
pub mod error;
pub mod geometry;
pub mod meta;
pub mod skeleton;
pub mod style;
pub mod transform;
pub mod tree;

pub use config::SkeletonConfig;
pub use error::{ConfigError, Result};
pub use skeleton::Skeleton;
pub use tree::{build, BoneKind, ResolvedBone};

/// Prelude module - import everything commonly needed
pub mod prelude {
    // Layout descriptions
    pub use crate::bone::{bone, BoneKey, BoneSpec, Dimension, RenderableChild};
    // Animation settings
    pub use crate::meta::{AnimationMeta, AnimationType, Direction};
    // Per-bone computation
    pub use crate::geometry::resolve;
    pub use crate::style::{
        compute_style, BoneStyle, BoneStyleOutput, ContainerStyle, GradientOverlay, ShiverStyle,
        StaticStyle,
    };
    pub use crate::transform::{gradient_transform, ShiverTransform};
    // Trees and the controller
    pub use crate::config::SkeletonConfig;
    pub use crate::skeleton::{driver_for, Skeleton};
    pub use crate::tree::{build, BoneKind, LayoutSource, ResolvedBone};

    pub use bones_animation::{Easing, ProgressDriver};
    pub use bones_core::Color;
}
