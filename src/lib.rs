//! Variant Grid - snap component set variants into an aligned grid
//!
//! Given a selection of component sets, this library groups each set's
//! variants into rows and columns, snaps them to shared coordinates, pads
//! and resizes the container, and emits guides along the row and column
//! boundaries. The host is reached only through the [`SceneNode`] and
//! [`Host`] traits.
//!
//! # Example
//!
//! ```rust
//! use variant_grid::{run, Document, LayoutConfig, Node, NodeKind};
//!
//! let mut doc = Document::new(vec![Node::new("set", NodeKind::ComponentSet)
//!     .with_children(vec![
//!         Node::new("a", NodeKind::Component).with_bounds(0.0, 0.0, 40.0, 30.0),
//!         Node::new("b", NodeKind::Component).with_bounds(45.0, 5.0, 40.0, 30.0),
//!     ])]);
//!
//! let selection = doc.selection.clone();
//! let report = run(&selection, &mut doc, &LayoutConfig::default()).unwrap();
//!
//! assert_eq!(report.arranged().count(), 1);
//! assert_eq!(doc.selection[0].width, Some(245.0));
//! ```

pub mod document;
pub mod error;
pub mod host;
pub mod layout;
pub mod renderer;
pub mod scene;

pub use document::{Document, Node};
pub use error::DocumentError;
pub use host::{commit, Host, HostError};
pub use layout::{Arrangement, ConfigError, Guide, GuideAxis, LayoutConfig, LayoutError};
pub use renderer::{render_svg, SvgConfig};
pub use scene::{collect_variants, NodeId, NodeKind, SceneNode};

use std::fmt;

use thiserror::Error;

/// Errors surfaced to the command-line front end
#[derive(Debug, Error)]
pub enum AppError {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Already rendered with source context
    #[error("{0}")]
    Report(String),
}

impl AppError {
    /// Wrap a document error, rendering syntax errors against `source`
    pub fn from_document(err: DocumentError, source: &str, filename: &str) -> Self {
        match err {
            DocumentError::Syntax { .. } => AppError::Report(err.format(source, filename)),
            other => AppError::Document(other),
        }
    }
}

/// User-facing message at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoSelection,
    Success,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoSelection => write!(f, "Please select a ComponentSet."),
            Notice::Success => write!(f, "Done ✔️"),
        }
    }
}

/// Why a selected node was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotComponentSet,
    NoVariants,
}

/// What happened to one selected node
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerOutcome {
    Arranged(Arrangement),
    Skipped(SkipReason),
    /// The host refused a mutation; earlier mutations stay applied
    Failed(HostError),
}

/// Result of arranging a whole selection
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// One entry per selected node, in selection order
    pub outcomes: Vec<(NodeId, ContainerOutcome)>,
    pub notice: Option<Notice>,
}

impl RunReport {
    /// Arrangements of the component sets that were fully committed
    pub fn arranged(&self) -> impl Iterator<Item = (&NodeId, &Arrangement)> {
        self.outcomes.iter().filter_map(|(id, outcome)| match outcome {
            ContainerOutcome::Arranged(a) => Some((id, a)),
            _ => None,
        })
    }

    /// Component sets whose commit was refused by the host
    pub fn failures(&self) -> impl Iterator<Item = (&NodeId, &HostError)> {
        self.outcomes.iter().filter_map(|(id, outcome)| match outcome {
            ContainerOutcome::Failed(e) => Some((id, e)),
            _ => None,
        })
    }
}

/// Arrange every component set in `selection`, committing through `host`.
///
/// Nodes are processed in order and independently: a refused resize on one
/// component set is recorded in the report and the run moves on.
pub fn run<N, H>(selection: &[N], host: &mut H, config: &LayoutConfig) -> Result<RunReport, LayoutError>
where
    N: SceneNode,
    H: Host + ?Sized,
{
    config.validate()?;

    if selection.is_empty() {
        return Ok(RunReport {
            outcomes: Vec::new(),
            notice: Some(Notice::NoSelection),
        });
    }

    let outcomes: Vec<(NodeId, ContainerOutcome)> = selection
        .iter()
        .map(|node| (node.id().clone(), arrange_component_set(node, host, config)))
        .collect();

    let handled = outcomes.iter().any(|(_, outcome)| {
        matches!(
            outcome,
            ContainerOutcome::Arranged(_) | ContainerOutcome::Skipped(SkipReason::NoVariants)
        )
    });

    Ok(RunReport {
        outcomes,
        notice: handled.then_some(Notice::Success),
    })
}

/// Arrange a single selected node if it is a component set with variants
pub fn arrange_component_set<N, H>(node: &N, host: &mut H, config: &LayoutConfig) -> ContainerOutcome
where
    N: SceneNode,
    H: Host + ?Sized,
{
    let _span = tracing::debug_span!("arrange_component_set", set = %node.id()).entered();

    if node.kind() != NodeKind::ComponentSet {
        tracing::debug!(kind = ?node.kind(), "not a component set, skipped");
        return ContainerOutcome::Skipped(SkipReason::NotComponentSet);
    }

    let variants = collect_variants(node.children());
    let Some(arrangement) = layout::arrange(variants, config) else {
        tracing::debug!("no variants, skipped");
        return ContainerOutcome::Skipped(SkipReason::NoVariants);
    };

    match commit(host, node.id(), &arrangement, config) {
        Ok(()) => {
            tracing::info!(
                variants = arrangement.variants.len(),
                width = arrangement.size.width,
                height = arrangement.size.height,
                "arranged component set"
            );
            ContainerOutcome::Arranged(arrangement)
        }
        Err(e) => {
            tracing::warn!(error = %e, "component set left partially arranged");
            ContainerOutcome::Failed(e)
        }
    }
}
