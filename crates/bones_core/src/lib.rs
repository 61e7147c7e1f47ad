//! Bones Core
//!
//! Foundational primitives for skeleton placeholders:
//!
//! - **Geometry**: points, sizes, vectors and 2D affine transforms
//! - **Color**: RGBA colors with CSS parsing and exact-endpoint interpolation
//!
//! # Example
//!
//! ```rust
//! use bones_core::{Color, Size};
//!
//! let bone = Color::parse("#E1E9EE").unwrap();
//! let highlight = Color::parse("#F2F8FC").unwrap();
//!
//! assert_eq!(Color::lerp(&bone, &highlight, 1.0), highlight);
//! assert!(Size::new(0.0, 20.0).is_degenerate());
//! ```

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::ColorError;
pub use geometry::{Affine2D, Point, Size, Vec2};
