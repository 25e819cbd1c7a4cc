//! Cover inventory and dynamic reservation board.
//!
//! # Two kinds of cover
//!
//! - **Static cover nodes**: authored positions loaded once at startup
//!   (scene markers, or CSV via [`crate::loader`]).  Read-only after
//!   construction; indexed in an R-tree for nearest/range queries.
//! - **Dynamic cover spots**: ad-hoc ground positions an agent claims when
//!   no authored node serves.  Tracked as a flat reservation list.
//!
//! # Reservation semantics
//!
//! The reservation protocol is advisory: `reserve` never rejects, and two
//! reservations closer than the similarity threshold can coexist if a caller
//! skips the `is_spot_reserved` check.  Under the single-threaded tick model
//! a check immediately followed by a reserve cannot be interleaved, which is
//! the only guarantee the protocol needs.
//!
//! Duplicates are deliberately representable: `release` removes the first
//! exactly-equal entry and leaves the rest, so two agents that independently
//! reserved the same coordinates each get one release.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use ft_core::{CoverId, Vec3};

// ── CoverNode ─────────────────────────────────────────────────────────────────

/// One authored static cover position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverNode {
    pub id: CoverId,
    pub position: Vec3,
    /// Low cover: the occupant must crouch to be concealed.
    pub crouch: bool,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a 3-D point with the node's index into
/// the inventory vector.
#[derive(Clone)]
struct CoverEntry {
    point: [f32; 3],
    idx: usize,
}

impl RTreeObject for CoverEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CoverEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── CoverBoard ────────────────────────────────────────────────────────────────

/// Static cover inventory plus the dynamic reservation list.
pub struct CoverBoard {
    nodes: Vec<CoverNode>,
    spatial_idx: RTree<CoverEntry>,
    /// Outstanding dynamic reservations.  May contain duplicates; order is
    /// insertion order and only matters for first-match release.
    dynamic_spots: Vec<Vec3>,
    /// Squared similarity threshold below which two reservations are
    /// considered the same spot.
    min_separation_sq: f32,
}

impl CoverBoard {
    /// Build a board over a fixed node inventory.
    ///
    /// `min_separation` is the *linear* distance below which two cover
    /// reservations count as the same spot; it is squared once here so every
    /// later check is a squared-distance comparison.
    pub fn new(nodes: Vec<CoverNode>, min_separation: f32) -> Self {
        let entries = nodes
            .iter()
            .enumerate()
            .map(|(idx, n)| CoverEntry {
                point: [n.position.x, n.position.y, n.position.z],
                idx,
            })
            .collect();
        Self {
            nodes,
            spatial_idx: RTree::bulk_load(entries),
            dynamic_spots: Vec::new(),
            min_separation_sq: min_separation * min_separation,
        }
    }

    /// A board with no authored nodes (dynamic cover only).
    pub fn empty(min_separation: f32) -> Self {
        Self::new(Vec::new(), min_separation)
    }

    // ── Static inventory ──────────────────────────────────────────────────

    pub fn nodes(&self) -> &[CoverNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes strictly inside `max_range` of `origin`, nearest first.
    pub fn nodes_near(&self, origin: Vec3, max_range: f32) -> Vec<&CoverNode> {
        let max_range_sq = max_range * max_range;
        let point = [origin.x, origin.y, origin.z];
        self.spatial_idx
            .nearest_neighbor_iter_with_distance_2(&point)
            .take_while(|(_, dist_sq)| *dist_sq < max_range_sq)
            .map(|(entry, _)| &self.nodes[entry.idx])
            .collect()
    }

    /// The closest node to `origin`, or `None` for an empty inventory.
    pub fn nearest_node(&self, origin: Vec3) -> Option<&CoverNode> {
        self.spatial_idx
            .nearest_neighbor(&[origin.x, origin.y, origin.z])
            .map(|entry| &self.nodes[entry.idx])
    }

    // ── Dynamic reservations ──────────────────────────────────────────────

    /// True if any reservation lies strictly within the similarity threshold
    /// of `position`.
    pub fn is_spot_reserved(&self, position: Vec3) -> bool {
        self.dynamic_spots
            .iter()
            .any(|spot| spot.distance_sq(position) < self.min_separation_sq)
    }

    /// Append a reservation.  No dedup, no rejection.
    pub fn reserve(&mut self, position: Vec3) {
        self.dynamic_spots.push(position);
    }

    /// Remove the first reservation exactly equal to `position`, if any.
    pub fn release(&mut self, position: Vec3) {
        if let Some(idx) = self.dynamic_spots.iter().position(|s| *s == position) {
            self.dynamic_spots.remove(idx);
        }
    }

    /// Number of outstanding dynamic reservations (duplicates counted).
    pub fn reserved_count(&self) -> usize {
        self.dynamic_spots.len()
    }
}
