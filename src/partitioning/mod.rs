//! Bounding-box index over the segments of a point series.

use crate::bounding_volume::Rect;
use crate::math::{Real, EPSILON};
use rstar::{RTree, RTreeObject, AABB};

/// One indexed segment: its position in the series and its bounding box.
#[derive(Clone, Debug, PartialEq)]
struct IndexedSegment {
    index: u32,
    envelope: AABB<[Real; 2]>,
}

impl RTreeObject for IndexedSegment {
    type Envelope = AABB<[Real; 2]>;

    #[inline]
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// An R-tree over the bounding boxes of a series' segments, keyed by segment
/// index.
///
/// Built once, eagerly, at series construction and never mutated, so
/// concurrent read-only searches need no synchronization.
#[derive(Clone, Debug)]
pub struct SegmentTree {
    tree: RTree<IndexedSegment>,
}

impl SegmentTree {
    /// Bulk-loads a tree from `(segment index, segment bounding rect)` pairs.
    pub fn build<I>(segments: I) -> SegmentTree
    where
        I: IntoIterator<Item = (usize, Rect)>,
    {
        let leaves = segments
            .into_iter()
            .map(|(index, rect)| IndexedSegment {
                index: index as u32,
                envelope: AABB::from_corners(
                    [rect.min.x, rect.min.y],
                    [rect.max.x, rect.max.y],
                ),
            })
            .collect();
        SegmentTree {
            tree: RTree::bulk_load(leaves),
        }
    }

    /// The number of indexed segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Is the tree empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Visits the index of every segment whose bounding box intersects
    /// `rect`. The visitor returns `false` to stop early; the final return
    /// value is `false` iff the visitor stopped the search.
    ///
    /// The query envelope is widened by [`EPSILON`] so boundary-grazing
    /// candidates are never missed by the tree's exact comparisons.
    pub fn search<F>(&self, rect: &Rect, mut visitor: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        let envelope = AABB::from_corners(
            [rect.min.x - EPSILON, rect.min.y - EPSILON],
            [rect.max.x + EPSILON, rect.max.y + EPSILON],
        );
        for leaf in self.tree.locate_in_envelope_intersecting(&envelope) {
            if !visitor(leaf.index as usize) {
                return false;
            }
        }
        true
    }
}
