//! Inclusive domain bounds enforced by the parser.

use std::ops::RangeInclusive;

/// Number of roads meeting at the intersection
pub const ROAD_COUNT: usize = 2;

/// Number of travel directions per road
pub const DIRECTIONS_PER_ROAD: usize = 2;

pub const LANE_COUNT: RangeInclusive<i64> = 1..=3;

/// Intersection type codes as written in the document (1-based)
pub const INTERSECTION_TYPE: RangeInclusive<i64> = 1..=4;

/// Posted speed limit, mph
pub const SPEED_LIMIT: RangeInclusive<i64> = 15..=75;

/// Detector setback from the stop line, feet. Zero is a stop-line detector.
pub const DETECTOR_SETBACK: RangeInclusive<i64> = 0..=600;

/// Pedestrian crossing length, feet
pub const CROSSING_DISTANCE: RangeInclusive<i64> = 10..=250;

/// Default identifier length limit, in characters
pub const MAX_IDENTIFIER_LENGTH: usize = 63;
