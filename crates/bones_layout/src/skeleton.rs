//! Skeleton controller
//!
//! [`Skeleton`] ties a [`SkeletonConfig`] to a [`ProgressDriver`] and the
//! measured container. The host feeds it frame deltas and size changes and
//! reads back the resolved bone tree for the current frame.
//!
//! While loading, the driver runs and [`Skeleton::bones`] yields bones. Once
//! loading ends the driver stops (progress resets to 0) and the host renders
//! its real children instead.
//!
//! # Example
//!
//! ```rust
//! use bones_core::Size;
//! use bones_layout::prelude::*;
//!
//! let config = SkeletonConfig {
//!     layout: vec![bone().w_full().h(24.0), bone().w(120.0).h(12.0)],
//!     ..Default::default()
//! };
//! let mut skeleton = Skeleton::new(config);
//! skeleton.set_container_size(Size::new(320.0, 200.0));
//! skeleton.tick(16.0);
//!
//! let bones = skeleton.bones().unwrap();
//! assert_eq!(bones.len(), 2);
//! assert_eq!(bones[0].size, Size::new(320.0, 24.0));
//! ```

use bones_animation::ProgressDriver;
use bones_core::{Color, Size};
use tracing::debug;

use crate::bone::{BoneSpec, RenderableChild};
use crate::config::SkeletonConfig;
use crate::meta::{AnimationMeta, AnimationType, Direction};
use crate::style::ContainerStyle;
use crate::tree::{build, ResolvedBone};

/// Driver matching a configuration's animation type
///
/// Shiver sweeps once per duration and restarts; pulse fades out and back
/// within one duration. An explicit `boomerang` setting overrides either.
/// Unanimated skeletons get a paused driver.
pub fn driver_for(config: &SkeletonConfig) -> ProgressDriver {
    let driver = match config.animation_type {
        AnimationType::Shiver | AnimationType::None => ProgressDriver::new(config.duration)
            .boomerang(config.boomerang.unwrap_or(false)),
        AnimationType::Pulse => ProgressDriver::new(config.duration / 2)
            .boomerang(config.boomerang.unwrap_or(true)),
    }
    .easing(config.easing);

    if config.animation_type.is_animated() && config.is_loading {
        driver
    } else {
        driver.paused()
    }
}

#[derive(Debug)]
struct FrameCache {
    generation: u64,
    progress_bits: u32,
    bones: Vec<ResolvedBone>,
}

/// A loading skeleton: configuration, clock and measured container
#[derive(Debug)]
pub struct Skeleton {
    config: SkeletonConfig,
    container_size: Size,
    children: Vec<RenderableChild>,
    driver: ProgressDriver,
    /// Bumped whenever anything other than progress changes
    generation: u64,
    cache: Option<FrameCache>,
}

impl Skeleton {
    pub fn new(config: SkeletonConfig) -> Self {
        let driver = driver_for(&config);
        Self {
            config,
            container_size: Size::ZERO,
            children: Vec::new(),
            driver,
            generation: 0,
            cache: None,
        }
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    fn rebuild_driver(&mut self) {
        self.driver = driver_for(&self.config);
        self.invalidate();
    }

    /// Record a new measured container size
    ///
    /// Returns true when the size actually changed.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        if size == self.container_size {
            return false;
        }
        debug!(width = size.width, height = size.height, "skeleton container measured");
        self.container_size = size;
        self.invalidate();
        true
    }

    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Replace the rendered children bones are inferred from
    pub fn set_children(&mut self, children: Vec<RenderableChild>) {
        self.children = children;
        self.invalidate();
    }

    /// Replace the explicit layout; an empty layout mirrors the children
    pub fn set_layout(&mut self, layout: Vec<BoneSpec>) {
        self.config.layout = layout;
        self.invalidate();
    }

    /// Change animation type and direction, restarting the clock
    pub fn set_animation(&mut self, animation_type: AnimationType, direction: Direction) {
        self.config.animation_type = animation_type;
        self.config.animation_direction = direction;
        self.rebuild_driver();
    }

    pub fn set_colors(&mut self, bone: Color, highlight: Color) {
        self.config.bone_color = bone;
        self.config.highlight_color = highlight;
        self.invalidate();
    }

    /// Start or stop loading
    ///
    /// Stopping resets progress to 0; starting again begins a fresh cycle.
    pub fn set_loading(&mut self, loading: bool) {
        if loading == self.config.is_loading {
            return;
        }
        debug!(loading, "skeleton loading changed");
        self.config.is_loading = loading;
        self.driver
            .set_active(loading && self.config.animation_type.is_animated());
        self.invalidate();
    }

    pub fn is_loading(&self) -> bool {
        self.config.is_loading
    }

    /// Advance the clock by `dt_ms` milliseconds and return the new progress
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        self.driver.tick(dt_ms)
    }

    pub fn progress(&self) -> f32 {
        self.driver.progress()
    }

    pub fn driver(&self) -> &ProgressDriver {
        &self.driver
    }

    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    pub fn meta(&self) -> AnimationMeta {
        self.config.meta(self.container_size)
    }

    /// Host region style, passed through from the configuration
    pub fn container_style(&self) -> ContainerStyle {
        ContainerStyle {
            extra: self.config.container_style.clone(),
            ..ContainerStyle::default()
        }
    }

    /// Bones for the current frame, or `None` when not loading
    ///
    /// The tree is rebuilt only when progress or an input changed since the
    /// previous call.
    pub fn bones(&mut self) -> Option<&[ResolvedBone]> {
        if !self.config.is_loading {
            return None;
        }

        let progress = self.driver.progress();
        let fresh = matches!(
            &self.cache,
            Some(cache) if cache.generation == self.generation
                && cache.progress_bits == progress.to_bits()
        );
        if !fresh {
            let bones = self.resolve_at(progress);
            self.cache = Some(FrameCache {
                generation: self.generation,
                progress_bits: progress.to_bits(),
                bones,
            });
        }

        self.cache.as_ref().map(|cache| cache.bones.as_slice())
    }

    /// Resolve the bone tree at an arbitrary progress, ignoring the clock
    pub fn resolve_at(&self, progress: f32) -> Vec<ResolvedBone> {
        build(self.config.layout(), &self.children, progress, &self.meta())
    }
}
