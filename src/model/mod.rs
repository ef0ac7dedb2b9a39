pub mod builder;
pub mod entities;
pub mod limits;
pub mod types;

pub use builder::{
    DetectorBuilder, DirectionBuilder, IntersectionConfigBuilder, LaneGroupBuilder, RoadBuilder,
};
pub use entities::{
    Detector, Direction, Identifier, IntersectionConfig, LaneGroup, PedestrianCrossing, Road,
    RoadIndex,
};
pub use types::{Axis, DetectorKind, DirectionPair, DirectionType, IntersectionType, Movement};
