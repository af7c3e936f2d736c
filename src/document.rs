//! JSON scene document
//!
//! A serialized snapshot of the host's selection. [`Node`] implements
//! [`SceneNode`] for reading and [`Document`] implements [`Host`] for
//! writing, so a document can stand in for a live host.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::host::{Host, HostError};
use crate::layout::{BoundingBox, Guide, Variant};
use crate::scene::{NodeId, NodeKind, SceneNode};

/// A node of the scene tree, as the host serializes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    /// Host type tag, kept verbatim
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Paint records, kept opaque
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guides: Vec<Guide>,
    /// Locked nodes refuse to be resized
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with no geometry, style or children
    pub fn new(id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            node_type: kind.as_str().to_string(),
            name: None,
            x: None,
            y: None,
            width: None,
            height: None,
            corner_radius: None,
            strokes: Vec::new(),
            guides: Vec::new(),
            locked: false,
            children: Vec::new(),
        }
    }

    /// Set position and size
    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Depth-first search for a node by id, including this one
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Mutable depth-first search for a node by id, including this one
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }
}

impl SceneNode for Node {
    fn id(&self) -> &NodeId {
        &self.id
    }

    fn kind(&self) -> NodeKind {
        NodeKind::from_type(&self.node_type)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn geometry(&self) -> Option<BoundingBox> {
        Some(BoundingBox::new(self.x?, self.y?, self.width?, self.height?))
    }
}

/// A selection of nodes, read from and written back to JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub selection: Vec<Node>,
}

impl Document {
    pub fn new(selection: Vec<Node>) -> Self {
        Self { selection }
    }

    /// Load a document from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a document from JSON text
    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(source).map_err(|e| DocumentError::from_json(e, source))
    }

    /// Serialize the document as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)
    }

    /// Find a node anywhere in the selection tree
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        self.selection.iter().find_map(|n| n.find(id))
    }

    fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.selection.iter_mut().find_map(|n| n.find_mut(id))
    }

    fn with_node(&mut self, id: &NodeId, apply: impl FnOnce(&mut Node)) {
        match self.find_mut(id) {
            Some(node) => apply(node),
            None => tracing::warn!(node = %id, "mutation on unknown node ignored"),
        }
    }
}

impl Host for Document {
    fn place_variants(&mut self, set: &NodeId, variants: &[Variant]) {
        self.with_node(set, |node| {
            // Each variant claims the next unclaimed child with its id, so
            // children sharing an id are placed in order
            let mut claimed = vec![false; node.children.len()];
            for variant in variants {
                let slot = node.children.iter().enumerate().position(|(i, c)| {
                    !claimed[i] && c.id == variant.id && c.geometry().is_some()
                });
                match slot {
                    Some(i) => {
                        claimed[i] = true;
                        let child = &mut node.children[i];
                        child.x = Some(variant.bounds.x);
                        child.y = Some(variant.bounds.y);
                    }
                    None => tracing::warn!(
                        set = %node.id,
                        variant = %variant.id,
                        "variant is not a child of the component set"
                    ),
                }
            }
        });
    }

    fn resize(&mut self, set: &NodeId, width: f64, height: f64) -> Result<(), HostError> {
        let node = self
            .find_mut(set)
            .ok_or_else(|| HostError::NodeNotFound { node: set.clone() })?;
        if node.locked {
            return Err(HostError::resize_rejected(set.clone(), "node is locked"));
        }
        node.width = Some(width);
        node.height = Some(height);
        Ok(())
    }

    fn set_corner_radius(&mut self, set: &NodeId, radius: f64) {
        self.with_node(set, |node| node.corner_radius = Some(radius));
    }

    fn clear_strokes(&mut self, set: &NodeId) {
        self.with_node(set, |node| node.strokes.clear());
    }

    fn set_guides(&mut self, set: &NodeId, guides: Vec<Guide>) {
        self.with_node(set, |node| node.guides = guides);
    }
}
