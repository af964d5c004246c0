//! Tests for dataset classification and layer merging

use super::{layer, point, row};
use crate::app::services::soil_classifier::{classify_dataset, merge_layers};

#[test]
fn test_thin_trailing_layer_absorbed() {
    let points = vec![point(0.0, Some(1)), point(0.1, Some(1)), point(0.3, Some(2))];
    let layers = merge_layers(&points, 0.2);
    assert_eq!(layers, vec![layer(0.0, 0.3, 1)]);
}

#[test]
fn test_first_layer_never_absorbed() {
    let points = vec![
        point(0.0, Some(4)),
        point(0.1, Some(3)),
        point(0.5, Some(3)),
        point(1.0, Some(3)),
    ];
    let layers = merge_layers(&points, 0.2);
    assert_eq!(layers, vec![layer(0.0, 0.0, 4), layer(0.1, 1.0, 3)]);
}

#[test]
fn test_absorption_widens_neighbour() {
    let points = vec![
        point(1.0, Some(3)),
        point(2.0, Some(3)),
        point(2.1, Some(6)),
        point(2.2, Some(5)),
        point(3.0, Some(5)),
    ];
    let layers = merge_layers(&points, 0.2);

    // The zone 6 singleton disappears into the clay above it
    assert_eq!(layers, vec![layer(1.0, 2.1, 3), layer(2.2, 3.0, 5)]);
}

#[test]
fn test_points_sorted_by_depth_and_nulls_dropped() {
    let points = vec![
        point(2.0, Some(5)),
        point(0.0, Some(3)),
        point(1.0, None),
        point(1.0, Some(3)),
        point(3.0, Some(5)),
    ];
    let layers = merge_layers(&points, 0.2);
    assert_eq!(layers, vec![layer(0.0, 1.0, 3), layer(2.0, 3.0, 5)]);
}

#[test]
fn test_empty_inputs() {
    assert!(merge_layers(&[], 0.2).is_empty());
    assert!(merge_layers(&[point(1.0, None), point(2.0, None)], 0.2).is_empty());
}

#[test]
fn test_layers_ordered_and_non_overlapping() {
    let points: Vec<_> = (0..200)
        .map(|i| point(i as f64 * 0.02, Some(((i / 7) % 9 + 1) as u8)))
        .collect();
    let layers = merge_layers(&points, 0.2);

    assert_eq!(layers.first().unwrap().start_depth, 0.0);
    assert!((layers.last().unwrap().end_depth - 199.0 * 0.02).abs() < 1e-12);
    for pair in layers.windows(2) {
        assert!(pair[0].end_depth <= pair[1].start_depth);
    }
}

#[test]
fn test_classify_dataset_uses_depth_then_length() {
    let rows = vec![
        row(&[("depth", Some(-1.0)), ("qc", Some(3.0)), ("rf", Some(3.0))]),
        row(&[("length", Some(2.0)), ("qc", Some(30.0)), ("rf", Some(0.5))]),
        row(&[("depth", None), ("length", None), ("qc", Some(3.0)), ("rf", Some(3.0))]),
        row(&[("depth", Some(3.0)), ("qc", None), ("rf", Some(3.0))]),
    ];
    let points = classify_dataset(&rows);

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].depth, 1.0);
    assert_eq!(points[0].zone.unwrap().id, 3);
    assert_eq!(points[1].depth, 2.0);
    assert_eq!(points[1].zone.unwrap().id, 7);
    assert_eq!(points[2].zone, None);
}
