//! Growable stroke geometry built from pointer samples.

use crate::util::Rect;

/// Coordinates are pinned to this magnitude when handed to Cairo, whose
/// 24.8 fixed-point path format wraps beyond roughly 8.4 million.
const TRACE_LIMIT: f64 = 4_194_304.0;

/// A position on the surface in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Linear interpolation from `self` toward `other` by `t`.
    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn traceable(self) -> Point {
        Point::new(
            self.x.clamp(-TRACE_LIMIT, TRACE_LIMIT),
            self.y.clamp(-TRACE_LIMIT, TRACE_LIMIT),
        )
    }
}

/// One element of a [`StrokePath`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// Starts the path at a point without drawing
    MoveTo(Point),
    /// Quadratic Bézier from the current point to `end`, pulled toward `ctrl`
    QuadTo { ctrl: Point, end: Point },
    /// Straight line from the current point to the given point
    LineTo(Point),
}

impl PathSegment {
    fn end(&self) -> Point {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
            PathSegment::QuadTo { end, .. } => end,
        }
    }
}

/// Ordered path of the stroke currently being drawn.
///
/// A path always begins with a single [`PathSegment::MoveTo`]; every later
/// element is a drawing segment. Calling [`quad_to`](Self::quad_to) or
/// [`line_to`](Self::line_to) on an empty path starts it at the origin, the
/// way a canvas path without a current point behaves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokePath {
    segments: Vec<PathSegment>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all geometry.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Starts a fresh path at `point`, dropping any previous geometry.
    pub fn move_to(&mut self, point: Point) {
        self.segments.clear();
        self.segments.push(PathSegment::MoveTo(point));
    }

    pub fn quad_to(&mut self, ctrl: Point, end: Point) {
        self.ensure_started();
        self.segments.push(PathSegment::QuadTo { ctrl, end });
    }

    pub fn line_to(&mut self, point: Point) {
        self.ensure_started();
        self.segments.push(PathSegment::LineTo(point));
    }

    fn ensure_started(&mut self) {
        if self.segments.is_empty() {
            self.segments.push(PathSegment::MoveTo(Point::new(0.0, 0.0)));
        }
    }

    /// All path elements in order, including the leading move.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of drawing segments (the leading move is not counted).
    pub fn segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| !matches!(segment, PathSegment::MoveTo(_)))
            .count()
    }

    /// End point of the last element, if any.
    pub fn current_point(&self) -> Option<Point> {
        self.segments.last().map(PathSegment::end)
    }

    /// Bounding box of the path's control hull, padded for the stroke width.
    ///
    /// A quadratic curve never leaves the triangle formed by its endpoints and
    /// control point, so the hull bounds are a safe damage rectangle.
    pub fn bounding_box(&self, stroke_width: f64) -> Option<Rect> {
        let points = self
            .segments
            .iter()
            .flat_map(|segment| match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => [Some(p), None],
                PathSegment::QuadTo { ctrl, end } => [Some(ctrl), Some(end)],
            })
            .flatten();
        bounding_box_for_points(points, stroke_width)
    }

    /// Emits the path into a Cairo context as the current path.
    ///
    /// Cairo has no quadratic primitive, so each quadratic segment is raised to
    /// the equivalent cubic with control points two thirds of the way from each
    /// endpoint toward the quadratic control point. Points millions of
    /// pixels off the surface are pinned to a finite range first.
    pub fn trace(&self, ctx: &cairo::Context) {
        ctx.new_path();
        let mut current = Point::new(0.0, 0.0);
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    let p = p.traceable();
                    ctx.move_to(p.x, p.y);
                }
                PathSegment::LineTo(p) => {
                    let p = p.traceable();
                    ctx.line_to(p.x, p.y);
                }
                PathSegment::QuadTo { ctrl, end } => {
                    let (ctrl, end) = (ctrl.traceable(), end.traceable());
                    let c1 = current.lerp(ctrl, 2.0 / 3.0);
                    let c2 = end.lerp(ctrl, 2.0 / 3.0);
                    ctx.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
                }
            }
            current = segment.end().traceable();
        }
    }
}

/// Padded bounding box of a set of points, or `None` when there are none.
pub(crate) fn bounding_box_for_points(
    points: impl IntoIterator<Item = Point>,
    stroke_width: f64,
) -> Option<Rect> {
    let mut points = points.into_iter();
    let first = points.next()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let padding = (stroke_width / 2.0).ceil().max(1.0);
    Rect::covering(
        min_x - padding,
        min_y - padding,
        max_x + padding,
        max_y + padding,
    )
}
