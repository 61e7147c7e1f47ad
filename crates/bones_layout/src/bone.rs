//! Bone layout descriptions
//!
//! A [`BoneSpec`] is one entry of a skeleton layout: a rectangle with optional
//! size, radius, color, key and nested children. Unknown style fields are kept
//! verbatim in [`BoneSpec::extra`] so renderers can apply them.
//!
//! # Example
//!
//! ```rust
//! use bones_layout::bone::bone;
//!
//! // Avatar next to two text lines
//! let row = bone()
//!     .key("row")
//!     .style("flexDirection", "row")
//!     .child(bone().w(48.0).h(48.0).rounded(24.0))
//!     .child(bone().w(180.0).h(16.0))
//!     .child(bone().w(120.0).h(16.0));
//!
//! assert_eq!(row.children.len(), 3);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use bones_core::Color;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

/// A declared width or height
///
/// Numbers are fixed lengths. Any string (conventionally a percentage such as
/// `"100%"`) means "take the measured container's size"; the percentage value
/// itself is not interpreted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Fixed(f32),
    FillContainer,
}

impl Dimension {
    pub fn is_fill(&self) -> bool {
        matches!(self, Dimension::FillContainer)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Fixed(v) => serializer.serialize_f32(*v),
            Dimension::FillContainer => serializer.serialize_str("100%"),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DimensionVisitor;

        impl<'de> de::Visitor<'de> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a percentage string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dimension, E> {
                Ok(Dimension::Fixed(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dimension, E> {
                Ok(Dimension::Fixed(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dimension, E> {
                Ok(Dimension::Fixed(v as f32))
            }

            fn visit_str<E: de::Error>(self, _v: &str) -> Result<Dimension, E> {
                Ok(Dimension::FillContainer)
            }
        }

        deserializer.deserialize_any(DimensionVisitor)
    }
}

/// Stable identity of a bone, either an index or a name
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoneKey {
    Index(usize),
    Named(String),
}

impl fmt::Display for BoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoneKey::Index(i) => write!(f, "{}", i),
            BoneKey::Named(name) => f.write_str(name),
        }
    }
}

impl From<usize> for BoneKey {
    fn from(index: usize) -> Self {
        BoneKey::Index(index)
    }
}

impl From<&str> for BoneKey {
    fn from(name: &str) -> Self {
        BoneKey::Named(name.to_string())
    }
}

impl From<String> for BoneKey {
    fn from(name: String) -> Self {
        BoneKey::Named(name)
    }
}

/// One entry of a skeleton layout
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoneSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<BoneKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Unparseable values are dropped so the bone falls back to the bone color
    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<Color>,
    /// Nested bones; a non-empty list turns this entry into a container
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<BoneSpec>,
    /// Passthrough style fields (margins, flex settings, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BoneSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed width
    pub fn w(mut self, width: f32) -> Self {
        self.width = Some(Dimension::Fixed(width));
        self
    }

    /// Set a fixed height
    pub fn h(mut self, height: f32) -> Self {
        self.height = Some(Dimension::Fixed(height));
        self
    }

    /// Set both dimensions to the same fixed length
    pub fn square(self, size: f32) -> Self {
        self.w(size).h(size)
    }

    /// Fill the container horizontally
    pub fn w_full(mut self) -> Self {
        self.width = Some(Dimension::FillContainer);
        self
    }

    /// Fill the container vertically
    ///
    /// A fill height makes the bone take the container's width as well,
    /// whatever width is declared.
    pub fn h_full(mut self) -> Self {
        self.height = Some(Dimension::FillContainer);
        self
    }

    /// Fill the container in both directions
    pub fn fill(self) -> Self {
        self.w_full().h_full()
    }

    /// Set border radius
    pub fn rounded(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Override the fill color for this bone
    pub fn bg(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set an explicit key
    pub fn key(mut self, key: impl Into<BoneKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add a nested bone
    pub fn child(mut self, child: BoneSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Add several nested bones
    pub fn children(mut self, children: impl IntoIterator<Item = BoneSpec>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set a passthrough style field
    pub fn style(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// True when this entry wraps nested bones
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }
}

fn lenient_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Color>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => match Color::parse(&text) {
            Ok(color) => Some(color),
            Err(err) => {
                debug!(value = %text, error = %err, "Ignoring bone backgroundColor");
                None
            }
        },
        Some(other) => {
            debug!(value = %other, "Ignoring non-string bone backgroundColor");
            None
        }
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BoneSpec>, D::Error> {
    Ok(Option::<Vec<BoneSpec>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Create an empty bone spec
pub fn bone() -> BoneSpec {
    BoneSpec::new()
}

/// A piece of already-rendered content whose style a bone can mirror
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderableChild {
    pub style: BoneSpec,
}

impl RenderableChild {
    pub fn new(style: BoneSpec) -> Self {
        Self { style }
    }
}

impl From<BoneSpec> for RenderableChild {
    fn from(style: BoneSpec) -> Self {
        Self::new(style)
    }
}
