//! Write-side boundary to the host's mutation API
//!
//! [`commit`] applies an [`Arrangement`] through a [`Host`] in a fixed order:
//! variant positions, container size, corner radius, strokes, guides.

use thiserror::Error;

use crate::layout::{Arrangement, Guide, LayoutConfig, Variant};
use crate::scene::NodeId;

/// Errors reported by the host when a mutation is refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// The host refused to resize the container
    #[error("cannot resize '{node}': {reason}")]
    ResizeRejected { node: NodeId, reason: String },

    /// No node with this id exists in the host
    #[error("node '{node}' not found")]
    NodeNotFound { node: NodeId },
}

impl HostError {
    pub fn resize_rejected(node: NodeId, reason: impl Into<String>) -> Self {
        Self::ResizeRejected {
            node,
            reason: reason.into(),
        }
    }
}

/// Mutation API of the host environment
///
/// Only `resize` may fail; the host accepts every other mutation.
pub trait Host {
    /// Move each variant of `set` to its new position
    fn place_variants(&mut self, set: &NodeId, variants: &[Variant]);

    fn resize(&mut self, set: &NodeId, width: f64, height: f64) -> Result<(), HostError>;

    fn set_corner_radius(&mut self, set: &NodeId, radius: f64);

    fn clear_strokes(&mut self, set: &NodeId);

    /// Replace the whole guide list of `set`
    fn set_guides(&mut self, set: &NodeId, guides: Vec<Guide>);
}

/// Apply an arrangement to the component set `set`.
///
/// A refused resize stops before styling and guides. Positions placed
/// before that are not rolled back.
pub fn commit<H: Host + ?Sized>(
    host: &mut H,
    set: &NodeId,
    arrangement: &Arrangement,
    config: &LayoutConfig,
) -> Result<(), HostError> {
    host.place_variants(set, &arrangement.variants);
    host.resize(set, arrangement.size.width, arrangement.size.height)?;
    host.set_corner_radius(set, config.corner_radius);
    host.clear_strokes(set);
    host.set_guides(set, arrangement.guides.clone());
    Ok(())
}
