//! Padding, snapping and container sizing

use super::cluster::cluster;
use super::types::{Axis, Size, Variant};

/// Translate all variants so the content box starts at `(padding, padding)`.
///
/// Does nothing for an empty slice.
pub fn apply_padding(variants: &mut [Variant], padding: f64) {
    let Some((min_x, min_y)) = min_origin(variants) else {
        return;
    };

    let dx = padding - min_x;
    let dy = padding - min_y;
    for variant in variants.iter_mut() {
        variant.bounds.translate(dx, dy);
    }
}

fn min_origin(variants: &[Variant]) -> Option<(f64, f64)> {
    variants
        .iter()
        .map(|v| (v.bounds.x, v.bounds.y))
        .reduce(|(ax, ay), (bx, by)| (ax.min(bx), ay.min(by)))
}

/// Snap every cluster along `axis` to its first member's coordinate.
///
/// Not an average, min or max: the first variant in child order decides.
pub fn align(variants: &mut [Variant], axis: Axis, threshold: f64) {
    for group in cluster(variants, axis, threshold) {
        let Some(&first) = group.members.first() else {
            continue;
        };
        let reference = axis.key(&variants[first].bounds);
        for &index in &group.members {
            axis.set_key(&mut variants[index].bounds, reference);
        }
    }
}

/// Give every row a single `y`
pub fn align_rows(variants: &mut [Variant], threshold: f64) {
    align(variants, Axis::X, threshold);
}

/// Give every column a single `x`
pub fn align_columns(variants: &mut [Variant], threshold: f64) {
    align(variants, Axis::Y, threshold);
}

/// Container size that fits all variants plus `padding` on the far edges.
///
/// Returns `None` for an empty slice.
pub fn fit_size(variants: &[Variant], padding: f64) -> Option<Size> {
    variants
        .iter()
        .map(|v| (v.bounds.right(), v.bounds.bottom()))
        .reduce(|(ax, ay), (bx, by)| (ax.max(bx), ay.max(by)))
        .map(|(max_x, max_y)| Size::new(max_x + padding, max_y + padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::BoundingBox;

    fn variant(id: &str, x: f64, y: f64, w: f64, h: f64) -> Variant {
        Variant::new(id, BoundingBox::new(x, y, w, h))
    }

    fn origins(variants: &[Variant]) -> Vec<(f64, f64)> {
        variants.iter().map(|v| (v.bounds.x, v.bounds.y)).collect()
    }

    #[test]
    fn test_padding_moves_min_to_padding() {
        let mut variants = vec![
            variant("a", 0.0, 0.0, 40.0, 30.0),
            variant("b", 45.0, 5.0, 40.0, 30.0),
            variant("c", 0.0, 50.0, 40.0, 30.0),
        ];
        apply_padding(&mut variants, 80.0);
        assert_eq!(
            origins(&variants),
            vec![(80.0, 80.0), (125.0, 85.0), (80.0, 130.0)]
        );
    }

    #[test]
    fn test_padding_pulls_content_back_from_far_away() {
        let mut variants = vec![variant("a", 500.0, -20.0, 10.0, 10.0)];
        apply_padding(&mut variants, 8.0);
        assert_eq!(origins(&variants), vec![(8.0, 8.0)]);
    }

    #[test]
    fn test_padding_empty_is_noop() {
        let mut variants: Vec<Variant> = vec![];
        apply_padding(&mut variants, 80.0);
        assert!(variants.is_empty());
    }

    #[test]
    fn test_align_rows_uses_first_member() {
        let mut variants = vec![
            variant("a", 80.0, 90.0, 40.0, 30.0),
            variant("b", 125.0, 80.0, 40.0, 30.0),
            variant("c", 170.0, 110.0, 40.0, 30.0),
        ];
        align_rows(&mut variants, 20.0);
        // 90 is the first member's y; neither the minimum nor the maximum
        assert_eq!(
            origins(&variants),
            vec![(80.0, 90.0), (125.0, 90.0), (170.0, 90.0)]
        );
    }

    #[test]
    fn test_align_columns_only_touches_x() {
        let mut variants = vec![
            variant("a", 80.0, 80.0, 40.0, 30.0),
            variant("b", 95.0, 130.0, 40.0, 30.0),
        ];
        align_columns(&mut variants, 20.0);
        assert_eq!(origins(&variants), vec![(80.0, 80.0), (80.0, 130.0)]);
    }

    #[test]
    fn test_align_keeps_sizes() {
        let mut variants = vec![
            variant("a", 0.0, 0.0, 40.0, 30.0),
            variant("b", 50.0, 3.0, 60.0, 10.0),
        ];
        align_rows(&mut variants, 20.0);
        assert_eq!(variants[1].bounds.width, 60.0);
        assert_eq!(variants[1].bounds.height, 10.0);
    }

    #[test]
    fn test_fit_size() {
        let variants = vec![
            variant("a", 80.0, 80.0, 40.0, 30.0),
            variant("b", 125.0, 80.0, 40.0, 30.0),
            variant("c", 80.0, 130.0, 40.0, 30.0),
        ];
        assert_eq!(fit_size(&variants, 80.0), Some(Size::new(245.0, 240.0)));
    }

    #[test]
    fn test_fit_size_uses_tallest_and_widest() {
        let variants = vec![
            variant("wide", 10.0, 10.0, 300.0, 5.0),
            variant("tall", 10.0, 20.0, 5.0, 400.0),
        ];
        assert_eq!(fit_size(&variants, 10.0), Some(Size::new(320.0, 430.0)));
    }

    #[test]
    fn test_fit_size_empty() {
        assert_eq!(fit_size(&[], 80.0), None);
    }
}
