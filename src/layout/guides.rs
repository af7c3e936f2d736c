//! Guide derivation from final row and column boundaries

use super::cluster::{columns, rows};
use super::types::{Cluster, Guide, GuideAxis, Variant};

/// Derive guides from the variants' current (final) positions.
///
/// Rows and columns are clustered afresh rather than reused from alignment,
/// since snapping can change which variants fall within the threshold of
/// each other. Output is every X guide ascending, then every Y guide
/// ascending, with no repeated offset on the same axis.
pub fn derive_guides(variants: &[Variant], threshold: f64) -> Vec<Guide> {
    let x_offsets = boundaries(variants, &columns(variants, threshold), |v| {
        (v.bounds.x, v.bounds.right())
    });
    let y_offsets = boundaries(variants, &rows(variants, threshold), |v| {
        (v.bounds.y, v.bounds.bottom())
    });

    x_offsets
        .into_iter()
        .map(|offset| Guide::new(GuideAxis::X, offset))
        .chain(
            y_offsets
                .into_iter()
                .map(|offset| Guide::new(GuideAxis::Y, offset)),
        )
        .collect()
}

/// Leading and trailing edge of each cluster, sorted and de-duplicated
fn boundaries(
    variants: &[Variant],
    clusters: &[Cluster],
    edges: impl Fn(&Variant) -> (f64, f64),
) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(clusters.len() * 2);

    for group in clusters {
        let span = group
            .members
            .iter()
            .map(|&i| edges(&variants[i]))
            .reduce(|(lo, hi), (start, end)| (lo.min(start), hi.max(end)));
        if let Some((start, end)) = span {
            offsets.push(start);
            offsets.push(end);
        }
    }

    offsets.sort_by(f64::total_cmp);
    offsets.dedup();
    offsets
}
