//! Grid arrangement pipeline for a single component set
//!
//! Stages run strictly forward: padding, row alignment, column alignment,
//! re-anchoring, sizing, guide derivation. Nothing here touches the host;
//! the result is an [`Arrangement`] for the committer to apply.

use super::align::{align_columns, align_rows, apply_padding, fit_size};
use super::config::LayoutConfig;
use super::guides::derive_guides;
use super::types::{Arrangement, Variant};

/// Arrange `variants` into an aligned, padded grid.
///
/// Returns `None` when there are no variants, in which case the container
/// must be left untouched.
///
/// Padding is applied again after alignment. When a row or column's first
/// member is not its outermost one, snapping pushes the content off the
/// padded edge, and a snap-only arrangement keeps that offset. Variants at
/// `(0, 10)` and `(60, 0)`, both 40x30, land here at `(80, 80)` and
/// `(140, 80)` in a 260x190 container; without the second pass they would
/// sit at `(80, 90)` and `(140, 90)` in 260x200, and a second run would
/// move them again.
pub fn arrange(mut variants: Vec<Variant>, config: &LayoutConfig) -> Option<Arrangement> {
    if variants.is_empty() {
        return None;
    }

    let threshold = config.alignment_threshold;

    apply_padding(&mut variants, config.padding);
    align_rows(&mut variants, threshold);
    align_columns(&mut variants, threshold);

    // Snapping to a first member that wasn't outermost leaves the content
    // box off the padded edge.
    apply_padding(&mut variants, config.padding);

    let size = fit_size(&variants, config.padding)?;
    let guides = derive_guides(&variants, threshold);

    tracing::debug!(
        variants = variants.len(),
        width = size.width,
        height = size.height,
        guides = guides.len(),
        "computed arrangement"
    );

    Some(Arrangement {
        variants,
        size,
        guides,
    })
}
