//! Read-side view of the host's node tree
//!
//! The host supplies the selection as nodes implementing [`SceneNode`]. A
//! child counts as a variant when it can report a full bounding box; that
//! capability is resolved once, by [`collect_variants`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::{BoundingBox, Variant};

/// Opaque identifier of a host node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Host type tag of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    ComponentSet,
    Component,
    Instance,
    Frame,
    Group,
    Text,
    Other,
}

impl NodeKind {
    /// Classify a host type tag such as `"COMPONENT_SET"`
    pub fn from_type(tag: &str) -> Self {
        match tag {
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "COMPONENT" => NodeKind::Component,
            "INSTANCE" => NodeKind::Instance,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "TEXT" => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    /// Host type tag for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Component => "COMPONENT",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Text => "TEXT",
            NodeKind::Other => "OTHER",
        }
    }
}

/// A node in the host's scene tree
pub trait SceneNode: Sized {
    fn id(&self) -> &NodeId;

    fn kind(&self) -> NodeKind;

    /// Direct children in host order
    fn children(&self) -> &[Self];

    /// Position and size, if the node exposes all four
    fn geometry(&self) -> Option<BoundingBox>;
}

/// Variants of a container: the children that expose a full bounding box.
///
/// Other children are dropped without error. Child order is preserved.
pub fn collect_variants<N: SceneNode>(children: &[N]) -> Vec<Variant> {
    children
        .iter()
        .filter_map(|child| {
            child
                .geometry()
                .map(|bounds| Variant::new(child.id().clone(), bounds))
        })
        .collect()
}
