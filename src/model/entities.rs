use crate::model::limits::ROAD_COUNT;
use crate::model::types::{DetectorKind, DirectionPair, DirectionType, IntersectionType, Movement};
use serde::Serialize;

/// Id token plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub id: String,
    pub name: String,
}

impl Identifier {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Vehicle detector attached to a lane group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detector {
    pub kind: DetectorKind,

    /// Distance from the stop line in feet, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setback: Option<u16>,
}

impl Detector {
    pub fn new(kind: DetectorKind) -> Self {
        Self { kind, setback: None }
    }

    pub fn with_setback(mut self, feet: u16) -> Self {
        self.setback = Some(feet);
        self
    }

    /// Setback in feet; an absent distance is a stop-line detector
    pub fn setback_feet(&self) -> u16 {
        self.setback.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaneGroup {
    pub count: u8,

    /// Whether the movement runs on its own dedicated phase
    pub protected: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detector: Option<Detector>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PedestrianCrossing {
    pub push_button: bool,

    /// Crossing length in feet
    pub distance: u16,
}

/// One travel direction of a road with its lane groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Direction {
    #[serde(rename = "type")]
    pub direction_type: DirectionType,
    pub straight: LaneGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<LaneGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<LaneGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pedestrian: Option<PedestrianCrossing>,
}

impl Direction {
    pub fn lane(&self, movement: Movement) -> Option<&LaneGroup> {
        match movement {
            Movement::Straight => Some(&self.straight),
            Movement::Left => self.left.as_ref(),
            Movement::Right => self.right.as_ref(),
        }
    }

    /// Configured lane groups, straight first
    pub fn lanes(&self) -> impl Iterator<Item = (Movement, &LaneGroup)> {
        [Movement::Straight, Movement::Left, Movement::Right]
            .into_iter()
            .filter_map(move |movement| self.lane(movement).map(|lane| (movement, lane)))
    }

    pub fn turn_lanes(&self) -> impl Iterator<Item = (Movement, &LaneGroup)> {
        self.lanes().filter(|(movement, _)| movement.is_turn())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Road {
    #[serde(flatten)]
    pub identifier: Identifier,

    /// Posted speed limit, mph
    pub speed_limit: u8,

    pub directions: [Direction; 2],
}

impl Road {
    pub fn id(&self) -> &str {
        &self.identifier.id
    }

    pub fn name(&self) -> &str {
        &self.identifier.name
    }

    pub fn direction_pair(&self) -> DirectionPair {
        DirectionPair::new(
            self.directions[0].direction_type,
            self.directions[1].direction_type,
        )
    }

    pub fn direction(&self, direction_type: DirectionType) -> Option<&Direction> {
        self.directions
            .iter()
            .find(|direction| direction.direction_type == direction_type)
    }
}

/// Position of a road within `IntersectionConfig::roads`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoadIndex(usize);

impl RoadIndex {
    pub const FIRST: RoadIndex = RoadIndex(0);
    pub const SECOND: RoadIndex = RoadIndex(1);

    pub fn new(index: usize) -> Option<Self> {
        (index < ROAD_COUNT).then_some(RoadIndex(index))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// A complete intersection description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntersectionConfig {
    #[serde(flatten)]
    pub identifier: Identifier,

    #[serde(rename = "type")]
    pub intersection_type: IntersectionType,

    pub roads: [Road; 2],

    /// Index of the main road, resolved from its id at parse time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_road: Option<RoadIndex>,
}

impl IntersectionConfig {
    pub fn main_road(&self) -> Option<&Road> {
        self.main_road.map(|index| &self.roads[index.get()])
    }

    pub fn is_main_road(&self, road: usize) -> bool {
        self.main_road.map_or(false, |index| index.get() == road)
    }

    /// Resolves a road id to its position, if exactly one road carries it
    pub fn road_index(&self, id: &str) -> Option<RoadIndex> {
        let mut matches = self
            .roads
            .iter()
            .enumerate()
            .filter(|(_, road)| road.id() == id)
            .map(|(index, _)| index);
        match (matches.next(), matches.next()) {
            (Some(index), None) => RoadIndex::new(index),
            _ => None,
        }
    }
}
