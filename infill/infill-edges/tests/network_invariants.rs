//! Integration tests over hand-built subdivisions.
//!
//! Each scenario pins down one rule of the edge network: ownership
//! tie-breaks, oscillation constraints firing (or declining to), the
//! Z-discontinuity repair, and the sampling laws.

use infill_edges::{EdgeNetwork, EdgeNetworkError};
use infill_types::{
    CellFootprint, Direction, Point2, Point3, PrismCell, PrismSubdivision, ZRange,
};

fn footprint(a: (i64, i64), straight_corner: (i64, i64), b: (i64, i64)) -> CellFootprint {
    CellFootprint::new(
        Point2::new(a.0, a.1),
        Point2::new(straight_corner.0, straight_corner.1),
        Point2::new(b.0, b.1),
    )
}

fn cell(
    footprint_corners: ((i64, i64), (i64, i64), (i64, i64)),
    z: (i64, i64),
    depth: u8,
    is_expanding: bool,
) -> PrismCell {
    let (a, straight_corner, b) = footprint_corners;
    PrismCell::new(
        footprint(a, straight_corner, b),
        ZRange::new(z.0, z.1),
        depth,
        is_expanding,
    )
}

/// Two equal-depth cells side by side: the left one owns the shared edge.
fn lateral_pair() -> PrismSubdivision {
    let mut left = cell(((0, 0), (1000, 0), (1000, 1000)), (0, 1000), 0, true);
    let mut right = cell(((1000, 0), (1000, 1000), (2000, 1000)), (0, 1000), 0, true);
    left.push_neighbor(Direction::Right, 1);
    right.push_neighbor(Direction::Left, 0);
    PrismSubdivision::from_cells(vec![left, right])
}

/// Two stacked equal-depth cells with alternating oscillation sense.
fn stacked_pair() -> PrismSubdivision {
    let corners = ((0, 0), (1000, 0), (1000, 1000));
    let mut bottom = cell(corners, (0, 1000), 0, true);
    let mut top = cell(corners, (1000, 2000), 0, false);
    bottom.push_neighbor(Direction::Up, 1);
    top.push_neighbor(Direction::Down, 0);
    PrismSubdivision::from_cells(vec![bottom, top])
}

/// One coarse cell with a single finer cell above its inner corner.
fn coarse_under_fine() -> PrismSubdivision {
    let mut coarse = cell(((0, 0), (2000, 0), (2000, 2000)), (0, 2000), 0, true);
    let mut fine = cell(((0, 0), (1000, 0), (1000, 1000)), (2000, 3000), 1, true);
    coarse.push_neighbor(Direction::Up, 1);
    fine.push_neighbor(Direction::Down, 0);
    PrismSubdivision::from_cells(vec![coarse, fine])
}

/// One coarse cell under an equal-depth pair of finer cells. The pair's
/// oscillation senses are chosen so both of the coarse cell's own edges meet
/// the pair at their corners; only the resolver has anything to repair.
fn coarse_under_pair() -> PrismSubdivision {
    let mut coarse = cell(((0, 0), (2000, 2000), (4000, 0)), (0, 4000), 0, true);
    let mut upper_left = cell(((2000, 2000), (3000, 2000), (3000, 0)), (4000, 6000), 1, true);
    let mut upper_right = cell(((3000, 2000), (3000, 0), (4000, 0)), (4000, 6000), 1, false);
    coarse.push_neighbor(Direction::Up, 1);
    coarse.push_neighbor(Direction::Up, 2);
    upper_left.push_neighbor(Direction::Down, 0);
    upper_left.push_neighbor(Direction::Right, 2);
    upper_right.push_neighbor(Direction::Down, 0);
    upper_right.push_neighbor(Direction::Left, 1);
    PrismSubdivision::from_cells(vec![coarse, upper_left, upper_right])
}

#[test]
fn lateral_pair_left_cell_owns_shared_edge() {
    let subdivision = lateral_pair();
    let network = EdgeNetwork::new(&subdivision).unwrap();

    // Exactly one of the two adjacent cells stores the shared edge.
    assert!(network.right_edge(0).is_some());
    assert!(network.left_edge(1).is_none());
    // Outer boundary edges are stored by their only cell.
    assert!(network.left_edge(0).is_some());
    assert!(network.right_edge(1).is_some());
    assert_eq!(network.edge_count(), 3);

    // The query reads the left cell's RIGHT edge for an equal-depth pair.
    assert_eq!(
        network.edge_location_between(0, 1, 250),
        Point2::new(1000, 250),
    );
}

#[test]
fn stacked_pair_applies_no_constraint() {
    let subdivision = stacked_pair();
    let network = EdgeNetwork::new(&subdivision).unwrap();

    // Equal depths: every edge is a straight two-point polyline.
    for index in 0..2 {
        assert_eq!(network.left_edge(index).unwrap().len(), 2);
        assert_eq!(network.right_edge(index).unwrap().len(), 2);
    }
    assert_eq!(network.bend_count(), 0);

    // Alternating oscillation sense makes the edges continuous anyway.
    assert_eq!(
        network.left_edge(0).unwrap().last(),
        network.left_edge(1).unwrap().first(),
    );
    assert_eq!(
        network.right_edge(0).unwrap().last(),
        network.right_edge(1).unwrap().first(),
    );

    // At the shared Z the edge sits on the triangle corner.
    assert_eq!(
        network.edge_location_between(0, 0, 1000),
        Point2::new(1000, 1000),
    );
}

#[test]
fn fine_cell_above_coarse_keeps_straight_edges() {
    let subdivision = coarse_under_fine();
    let network = EdgeNetwork::new(&subdivision).unwrap();

    // The finer cell is authoritative over its own endpoints.
    assert_eq!(network.left_edge(1).unwrap().len(), 2);
    assert_eq!(network.right_edge(1).unwrap().len(), 2);
}

#[test]
fn coarse_cell_is_pulled_to_the_finer_edge_above() {
    let subdivision = coarse_under_fine();
    let network = EdgeNetwork::new(&subdivision).unwrap();

    // LEFT edge: pulled from its own corner (2000, 0) to the fine cell's
    // bottom corner (0, 0), with a bend halfway down the original segment.
    assert_eq!(
        network.left_edge(0).unwrap().points(),
        &[
            Point3::new(0, 0, 0),
            Point3::new(1000, 0, 1000),
            Point3::new(0, 0, 2000),
        ],
    );

    // RIGHT edge: the same rule along the other diagonal.
    assert_eq!(
        network.right_edge(0).unwrap().points(),
        &[
            Point3::new(2000, 0, 0),
            Point3::new(2000, 882, 882),
            Point3::new(1000, 0, 2000),
        ],
    );

    // Both constrained endpoints coincide bit-for-bit with the finer edges.
    assert_eq!(
        network.left_edge(0).unwrap().last(),
        network.left_edge(1).unwrap().first(),
    );
    assert_eq!(
        network.right_edge(0).unwrap().last(),
        network.right_edge(1).unwrap().first(),
    );

    assert!(network.validate().is_ok());
}

#[test]
fn equal_depth_pair_above_coarse_is_anchored_to_the_crossing_line() {
    let subdivision = coarse_under_pair();
    let network = EdgeNetwork::new(&subdivision).unwrap();

    // The pair's shared edge is stored once, by the left cell.
    assert!(network.right_edge(1).is_some());
    assert!(network.left_edge(2).is_none());

    // Its lower endpoint was pulled from the footprint corner (3000, 2000)
    // onto the intersection of the pair's shared side with the coarse
    // cell's top crossing line (2000, 2000) → (4000, 0), at the pair's
    // z_min, gaining a bend.
    assert_eq!(
        network.right_edge(1).unwrap().points(),
        &[
            Point3::new(3000, 1000, 4000),
            Point3::new(3000, 1500, 4500),
            Point3::new(3000, 0, 6000),
        ],
    );
    assert_eq!(network.bend_count(), 1);

    // The anchored endpoint lies on the crossing line x + y = 4000.
    let anchored = network.edge_location_between(1, 2, 4000);
    assert_eq!(anchored.x + anchored.y, 4000);

    assert!(network.validate().is_ok());
}

#[test]
fn query_is_idempotent() {
    let subdivision = coarse_under_pair();
    let network = EdgeNetwork::new(&subdivision).unwrap();
    for z in [4000, 4500, 5000, 5999, 6000] {
        let first = network.edge_location_between(1, 2, z);
        let second = network.edge_location_between(1, 2, z);
        assert_eq!(first, second);
    }
}

#[test]
fn query_at_range_bounds_returns_the_stored_endpoints() {
    let subdivision = coarse_under_pair();
    let network = EdgeNetwork::new(&subdivision).unwrap();
    let edge = network.right_edge(1).unwrap();
    assert_eq!(
        network.edge_location_between(1, 2, 4000),
        Point2::new(edge.first().x, edge.first().y),
    );
    assert_eq!(
        network.edge_location_between(1, 2, 6000),
        Point2::new(edge.last().x, edge.last().y),
    );
}

#[test]
fn networks_satisfy_all_structural_invariants() {
    for subdivision in [
        lateral_pair(),
        stacked_pair(),
        coarse_under_fine(),
        coarse_under_pair(),
    ] {
        let network = EdgeNetwork::new(&subdivision).unwrap();
        assert!(network.validate().is_ok());

        // Every stored polyline is strictly Z-monotone and spans its
        // owner's Z range.
        for index in 0..subdivision.len() {
            for edge in [network.left_edge(index), network.right_edge(index)]
                .into_iter()
                .flatten()
            {
                assert!(edge.len() >= 2);
                assert!(edge.points().windows(2).all(|w| w[0].z < w[1].z));
                let z_range = subdivision.cell(index).z_range;
                assert_eq!(edge.first().z, z_range.min);
                assert_eq!(edge.last().z, z_range.max);
                assert!(edge.min_inclination_deg() > 35.0);
            }
        }
    }
}

#[test]
fn empty_subdivision_is_an_error() {
    let subdivision = PrismSubdivision::from_cells(Vec::new());
    assert!(matches!(
        EdgeNetwork::new(&subdivision),
        Err(EdgeNetworkError::EmptySubdivision)
    ));
}
