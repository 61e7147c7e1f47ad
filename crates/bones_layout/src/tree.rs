//! Bone tree building
//!
//! Walks a skeleton layout and produces a tree of [`ResolvedBone`]s: pure
//! data carrying each bone's key, resolved size and computed style. Entries
//! with nested children become containers that carry layout style only and
//! wrap their resolved children; every other entry becomes a leaf.
//!
//! Without an explicit layout, one leaf is produced per rendered child,
//! mirroring that child's own style.
//!
//! # Keys
//!
//! Explicit keys always win. Otherwise:
//!
//! | node | top level | inside container `p` |
//! |------|-----------|----------------------|
//! | leaf `i` | `i` | `p_i` |
//! | container `i` | `bone_container_i` | `p_bone_container_i` |
//!
//! Keys depend only on position, so rebuilding the same layout yields the
//! same keys on every frame.

use bones_core::Size;
use serde::Serialize;
use tracing::trace;

use crate::bone::{BoneKey, BoneSpec, RenderableChild};
use crate::geometry::resolve;
use crate::meta::AnimationMeta;
use crate::style::{compute_style, BoneStyleOutput, ContainerStyle, ShiverStyle, StaticStyle};

/// Where bone shapes come from
#[derive(Clone, Copy, Debug)]
pub enum LayoutSource<'a> {
    /// An explicit, possibly nested layout description
    Explicit(&'a [BoneSpec]),
    /// One bone per rendered child, mirroring the child's style
    InferredFromChildren(&'a [RenderableChild]),
}

impl<'a> LayoutSource<'a> {
    /// An absent or empty layout falls back to the rendered children
    pub fn select(layout: Option<&'a [BoneSpec]>, children: &'a [RenderableChild]) -> Self {
        match layout {
            Some(specs) if !specs.is_empty() => LayoutSource::Explicit(specs),
            _ => LayoutSource::InferredFromChildren(children),
        }
    }
}

/// What a resolved node draws
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BoneKind {
    /// Pulse or unanimated leaf
    Static { style: StaticStyle },
    /// Leaf with a moving gradient overlay
    Shiver { style: ShiverStyle },
    /// Positioning wrapper around nested bones
    Container {
        style: ContainerStyle,
        children: Vec<ResolvedBone>,
    },
}

/// One node of a resolved skeleton
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedBone {
    pub key: BoneKey,
    pub size: Size,
    #[serde(flatten)]
    pub kind: BoneKind,
}

impl ResolvedBone {
    pub fn is_container(&self) -> bool {
        matches!(self.kind, BoneKind::Container { .. })
    }

    /// Nested bones of a container, empty for leaves
    pub fn children(&self) -> &[ResolvedBone] {
        match &self.kind {
            BoneKind::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Levels of nesting below and including this node
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// All leaves under this node in layout order (the node itself if a leaf)
    pub fn leaves(&self) -> Vec<&ResolvedBone> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a ResolvedBone>) {
        if self.is_container() {
            for child in self.children() {
                child.collect_leaves(out);
            }
        } else {
            out.push(self);
        }
    }
}

/// Count all nodes (containers and leaves) in a forest
pub fn node_count(bones: &[ResolvedBone]) -> usize {
    bones.iter().map(|b| 1 + node_count(b.children())).sum()
}

/// Build the resolved bone forest for one frame
pub fn build(
    layout: Option<&[BoneSpec]>,
    children: &[RenderableChild],
    progress: f32,
    meta: &AnimationMeta,
) -> Vec<ResolvedBone> {
    build_from(LayoutSource::select(layout, children), progress, meta)
}

/// Build from an already selected layout source
pub fn build_from(source: LayoutSource<'_>, progress: f32, meta: &AnimationMeta) -> Vec<ResolvedBone> {
    trace!(?source, progress, "building bone tree");
    match source {
        LayoutSource::Explicit(specs) => build_explicit(specs, None, progress, meta),
        LayoutSource::InferredFromChildren(children) => children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let key = child.style.key.clone().unwrap_or(BoneKey::Index(i));
                leaf(&child.style, key, progress, meta)
            })
            .collect(),
    }
}

fn build_explicit(
    specs: &[BoneSpec],
    prefix: Option<&str>,
    progress: f32,
    meta: &AnimationMeta,
) -> Vec<ResolvedBone> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            if spec.is_container() {
                let key = spec.key.clone().unwrap_or_else(|| match prefix {
                    Some(p) => BoneKey::Named(format!("{}_bone_container_{}", p, i)),
                    None => BoneKey::Named(format!("bone_container_{}", i)),
                });
                let child_prefix = key.to_string();
                let children = build_explicit(&spec.children, Some(&child_prefix), progress, meta);
                ResolvedBone {
                    size: resolve(spec, meta.container_size),
                    key,
                    kind: BoneKind::Container {
                        style: ContainerStyle::from_spec(spec),
                        children,
                    },
                }
            } else {
                let key = spec.key.clone().unwrap_or_else(|| match prefix {
                    Some(p) => BoneKey::Named(format!("{}_{}", p, i)),
                    None => BoneKey::Index(i),
                });
                leaf(spec, key, progress, meta)
            }
        })
        .collect()
}

fn leaf(spec: &BoneSpec, key: BoneKey, progress: f32, meta: &AnimationMeta) -> ResolvedBone {
    let size = resolve(spec, meta.container_size);
    let kind = match compute_style(spec, size, meta, progress) {
        BoneStyleOutput::Static(style) => BoneKind::Static { style },
        BoneStyleOutput::Shiver(style) => BoneKind::Shiver { style },
    };
    ResolvedBone { key, size, kind }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bone::bone;
    use crate::meta::{AnimationType, Direction};

    fn meta(animation_type: AnimationType) -> AnimationMeta {
        AnimationMeta::new(animation_type, Direction::HorizontalRight).container(Size::new(300.0, 200.0))
    }

    fn keys(bones: &[ResolvedBone]) -> Vec<String> {
        bones.iter().map(|b| b.key.to_string()).collect()
    }

    #[test]
    fn test_one_bone_per_leaf_spec() {
        let layout = vec![bone().w(10.0).h(10.0), bone().w(20.0).h(5.0), bone()];
        let bones = build(Some(&layout), &[], 0.0, &meta(AnimationType::Pulse));
        assert_eq!(bones.len(), 3);
        assert!(bones.iter().all(|b| !b.is_container()));
        assert_eq!(bones[1].size, Size::new(20.0, 5.0));
        assert_eq!(keys(&bones), ["0", "1", "2"]);
    }

    #[test]
    fn test_animation_type_selects_leaf_kind() {
        let layout = vec![bone().w(10.0).h(10.0)];
        for (animation_type, shiver) in [
            (AnimationType::Pulse, false),
            (AnimationType::None, false),
            (AnimationType::Shiver, true),
        ] {
            let bones = build(Some(&layout), &[], 0.2, &meta(animation_type));
            assert_eq!(
                matches!(bones[0].kind, BoneKind::Shiver { .. }),
                shiver,
                "{:?}",
                animation_type
            );
        }
    }

    #[test]
    fn test_nested_layout_mirrors_input() {
        let layout = vec![
            bone()
                .style("flexDirection", "row")
                .child(bone().square(40.0))
                .child(
                    bone()
                        .child(bone().w(100.0).h(12.0))
                        .child(bone().w(60.0).h(12.0)),
                ),
            bone().w_full().h(80.0),
        ];
        let bones = build(Some(&layout), &[], 0.0, &meta(AnimationType::Shiver));

        assert_eq!(bones.len(), 2);
        assert_eq!(bones[0].depth(), 3);
        assert_eq!(bones[1].depth(), 1);
        assert_eq!(bones[0].children().len(), 2);
        assert_eq!(bones[0].children()[1].children().len(), 2);
        assert_eq!(node_count(&bones), 6);
        assert_eq!(bones[0].leaves().len(), 3);

        let BoneKind::Container { style, .. } = &bones[0].kind else {
            panic!("expected container");
        };
        assert_eq!(style.extra.get("flexDirection"), Some(&serde_json::json!("row")));
    }

    #[test]
    fn test_synthetic_keys() {
        let layout = vec![
            bone().w(1.0),
            bone()
                .child(bone().w(1.0))
                .child(bone().child(bone().w(1.0))),
        ];
        let bones = build(Some(&layout), &[], 0.0, &meta(AnimationType::Pulse));

        assert_eq!(keys(&bones), ["0", "bone_container_1"]);
        let inner = bones[1].children();
        assert_eq!(keys(inner), ["bone_container_1_0", "bone_container_1_bone_container_1"]);
        assert_eq!(keys(inner[1].children()), ["bone_container_1_bone_container_1_0"]);
    }

    #[test]
    fn test_explicit_keys_win_and_prefix_children() {
        let layout = vec![bone()
            .key("card")
            .child(bone().key("avatar").square(32.0))
            .child(bone().w(50.0))];
        let bones = build(Some(&layout), &[], 0.0, &meta(AnimationType::Pulse));
        assert_eq!(bones[0].key, BoneKey::Named("card".into()));
        assert_eq!(keys(bones[0].children()), ["avatar", "card_1"]);
    }

    #[test]
    fn test_keys_are_stable_across_frames() {
        let layout = vec![bone().child(bone().w(3.0)), bone().w(2.0)];
        let meta = meta(AnimationType::Shiver);
        let a = build(Some(&layout), &[], 0.1, &meta);
        let b = build(Some(&layout), &[], 0.9, &meta);
        assert_eq!(keys(&a), keys(&b));
        assert_eq!(keys(a[0].children()), keys(b[0].children()));
    }

    #[test]
    fn test_empty_children_list_is_a_leaf() {
        let spec: BoneSpec =
            serde_json::from_value(serde_json::json!({ "width": 5, "height": 5, "children": [] }))
                .unwrap();
        let bones = build(Some(&[spec]), &[], 0.0, &meta(AnimationType::Pulse));
        assert!(!bones[0].is_container());
    }

    #[test]
    fn test_inferred_from_children() {
        let children = vec![
            RenderableChild::new(bone().w(120.0).h(16.0)),
            RenderableChild::new(bone().key("pic").square(48.0)),
        ];
        let meta = meta(AnimationType::Pulse);

        let bones = build(None, &children, 0.0, &meta);
        assert_eq!(bones.len(), 2);
        assert_eq!(bones[0].size, Size::new(120.0, 16.0));
        assert_eq!(keys(&bones), ["0", "pic"]);

        // An empty explicit layout also falls back to the children
        let empty: Vec<BoneSpec> = Vec::new();
        assert_eq!(build(Some(&empty), &children, 0.0, &meta), bones);
    }

    #[test]
    fn test_no_layout_and_no_children() {
        assert!(build(None, &[], 0.5, &meta(AnimationType::Shiver)).is_empty());
    }

    #[test]
    fn test_container_size_is_resolved() {
        let layout = vec![bone().fill().child(bone().w(1.0).h(1.0))];
        let bones = build(Some(&layout), &[], 0.0, &meta(AnimationType::Pulse));
        assert_eq!(bones[0].size, Size::new(300.0, 200.0));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let layout = vec![bone().key("a").w(10.0).h(4.0)];
        let bones = build(Some(&layout), &[], 0.0, &meta(AnimationType::None));
        let json = serde_json::to_value(&bones).unwrap();
        assert_eq!(json[0]["kind"], "static");
        assert_eq!(json[0]["key"], "a");
        assert_eq!(json[0]["style"]["width"], 10.0);
        assert_eq!(json[0]["style"]["backgroundColor"], "#e1e9ee");
    }
}
