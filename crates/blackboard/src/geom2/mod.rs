//! 2D geometry lessons: primitives, convex hull, polygons, half-planes.
//!
//! Purpose
//! - Implement each geometry lesson's core with explicit tolerances
//!   (`GeomCfg`) and owned step traces where the lesson animates.
//! - Keep the API small; a rendering layer consumes the returned traces and
//!   never reaches into intermediate state.

pub mod halfplane;
pub mod hull;
pub mod polygon;
pub mod rand;
pub mod segment;
mod types;
mod util;

pub use halfplane::{Region, RegionShape};
pub use hull::{graham_scan, HullAction, HullFrame, HullTrace};
pub use polygon::{area, area_trace, centroid, point_in_polygon, signed_area, AreaTerm, AreaTrace};
pub use segment::{
    line_intersection, point_line_distance, point_segment_distance, project_onto_segment,
    segment_circle_intersects, segments_intersect, LineHit, SegmentProjection,
};
pub use types::{GeomCfg, GeomError, HalfPlane};
pub use util::{angle_between, collinear, cross, dot, orient, rotate_about};

#[cfg(test)]
mod tests;
