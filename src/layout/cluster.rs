//! Tolerance-based grouping of variants into rows and columns
//!
//! Clustering is a single greedy pass in child order: a variant joins the
//! first existing cluster whose key lies within the threshold of its own
//! key, or starts a new cluster. Keys never move once a cluster exists, so
//! the outcome depends on arrival order. Two variants that are both close to
//! a third may or may not end up together.

use super::types::{Axis, Cluster, Variant};

/// Group `variants` into clusters extending along `axis`.
///
/// `Axis::X` forms rows (keyed by `y`), `Axis::Y` forms columns (keyed by
/// `x`). Clusters are returned in creation order.
pub fn cluster(variants: &[Variant], axis: Axis, threshold: f64) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for (index, variant) in variants.iter().enumerate() {
        let key = axis.key(&variant.bounds);
        match clusters
            .iter_mut()
            .find(|c| (c.key - key).abs() <= threshold)
        {
            Some(existing) => existing.members.push(index),
            None => clusters.push(Cluster {
                key,
                members: vec![index],
            }),
        }
    }

    tracing::debug!(?axis, threshold, clusters = clusters.len(), "clustered variants");
    clusters
}

/// Rows: variants sharing a similar `y`
pub fn rows(variants: &[Variant], threshold: f64) -> Vec<Cluster> {
    cluster(variants, Axis::X, threshold)
}

/// Columns: variants sharing a similar `x`
pub fn columns(variants: &[Variant], threshold: f64) -> Vec<Cluster> {
    cluster(variants, Axis::Y, threshold)
}
