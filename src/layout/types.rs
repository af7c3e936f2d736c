//! Core types for the grid layout

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scene::NodeId;

/// Width and height of a container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A bounding box representing the spatial extent of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Move the box by the given delta, keeping its size
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// A child rectangle of a component set, subject to alignment
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub id: NodeId,
    pub bounds: BoundingBox,
}

impl Variant {
    pub fn new(id: impl Into<NodeId>, bounds: BoundingBox) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// Direction along which a cluster extends.
///
/// A row extends along [`Axis::X`], so its members share a `y` coordinate.
/// A column extends along [`Axis::Y`], so its members share an `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The coordinate that members of a cluster along this axis share
    pub fn key(self, bounds: &BoundingBox) -> f64 {
        match self {
            Axis::X => bounds.y,
            Axis::Y => bounds.x,
        }
    }

    /// Overwrite the shared coordinate of `bounds`
    pub fn set_key(self, bounds: &mut BoundingBox, value: f64) {
        match self {
            Axis::X => bounds.y = value,
            Axis::Y => bounds.x = value,
        }
    }
}

/// A group of variants considered aligned within the alignment threshold
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Shared coordinate, fixed to the first member's key at creation
    pub key: f64,
    /// Indices into the clustered variant slice, in first-seen order
    pub members: Vec<usize>,
}

/// Axis tag of a layout guide, as the host names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GuideAxis {
    /// Vertical line at an x offset
    X,
    /// Horizontal line at a y offset
    Y,
}

/// A layout guide marking a row or column boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub axis: GuideAxis,
    pub offset: f64,
}

impl Guide {
    pub fn new(axis: GuideAxis, offset: f64) -> Self {
        Self { axis, offset }
    }
}

impl fmt::Display for Guide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            GuideAxis::X => "X",
            GuideAxis::Y => "Y",
        };
        write!(f, "{} {}", axis, self.offset)
    }
}

/// The complete transform computed for one component set
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    /// Variants at their final positions, in child order
    pub variants: Vec<Variant>,
    /// New container size
    pub size: Size,
    /// Guides derived from the final rows and columns
    pub guides: Vec<Guide>,
}
