#![forbid(unsafe_code)]

//! Closed fill paths built from line and cubic-Bézier segments.

use smallvec::SmallVec;

use crate::vec::Vec2;

/// One segment of a fill path. Coordinates are absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSeg {
    /// Straight line to a point.
    LineTo(Vec2),
    /// Cubic Bézier to `to` with control points `c1` and `c2`.
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
}

/// A path assembled from a start point plus line/cubic segments.
///
/// The metaball band is always exactly four segments (cubic, line, cubic,
/// line), so segment storage is inline; building a band never allocates.
/// Paths are reusable scratch buffers: [`reset`](Self::reset) before reuse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillPath {
    start: Vec2,
    segs: SmallVec<[PathSeg; 4]>,
    closed: bool,
}

impl FillPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all segments and the closed flag, keeping capacity.
    pub fn reset(&mut self) {
        self.start = Vec2::ZERO;
        self.segs.clear();
        self.closed = false;
    }

    /// Set the start point. Call on a fresh or freshly reset path.
    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.start = p;
        self
    }

    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.segs.push(PathSeg::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) -> &mut Self {
        self.segs.push(PathSeg::CubicTo { c1, c2, to });
        self
    }

    /// Mark the path closed (end point joins the start point).
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSeg] {
        &self.segs
    }

    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// End point of the final segment; the start point for an empty path.
    #[must_use]
    pub fn end(&self) -> Vec2 {
        match self.segs.last() {
            Some(PathSeg::LineTo(to)) | Some(PathSeg::CubicTo { to, .. }) => *to,
            None => self.start,
        }
    }
}
