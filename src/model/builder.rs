//! Builders accumulate fields while a document is parsed and only yield a
//! record once every required field has been supplied.

use crate::error::{ConfigError, Result};
use crate::model::entities::{
    Detector, Direction, Identifier, IntersectionConfig, LaneGroup, PedestrianCrossing, Road,
};
use crate::model::limits::{DIRECTIONS_PER_ROAD, ROAD_COUNT};
use crate::model::types::{DetectorKind, DirectionType, IntersectionType};

fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn required<T>(value: Option<T>, prefix: &str, name: &str) -> Result<T> {
    value.ok_or_else(|| ConfigError::missing_field(field_path(prefix, name)))
}

#[derive(Debug, Default)]
pub struct DetectorBuilder {
    path: String,
    kind: Option<DetectorKind>,
    setback: Option<u16>,
}

impl DetectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document path used when reporting missing fields
    pub fn at<S: Into<String>>(mut self, path: S) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_kind(mut self, kind: DetectorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_setback(mut self, feet: u16) -> Self {
        self.setback = Some(feet);
        self
    }

    pub fn build(self) -> Result<Detector> {
        Ok(Detector {
            kind: required(self.kind, &self.path, "type")?,
            setback: self.setback,
        })
    }
}

#[derive(Debug, Default)]
pub struct LaneGroupBuilder {
    path: String,
    count: Option<u8>,
    protected: bool,
    detector: Option<Detector>,
}

impl LaneGroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at<S: Into<String>>(mut self, path: S) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.count = Some(count);
        self
    }

    pub fn protected(mut self, protected: bool) -> Self {
        self.protected = protected;
        self
    }

    pub fn with_detector(mut self, detector: Detector) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn build(self) -> Result<LaneGroup> {
        Ok(LaneGroup {
            count: required(self.count, &self.path, "count")?,
            protected: self.protected,
            detector: self.detector,
        })
    }
}

#[derive(Debug, Default)]
pub struct DirectionBuilder {
    path: String,
    direction_type: Option<DirectionType>,
    straight: Option<LaneGroup>,
    left: Option<LaneGroup>,
    right: Option<LaneGroup>,
    pedestrian: Option<PedestrianCrossing>,
}

impl DirectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at<S: Into<String>>(mut self, path: S) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_type(mut self, direction_type: DirectionType) -> Self {
        self.direction_type = Some(direction_type);
        self
    }

    pub fn with_straight(mut self, lanes: LaneGroup) -> Self {
        self.straight = Some(lanes);
        self
    }

    pub fn with_left(mut self, lanes: LaneGroup) -> Self {
        self.left = Some(lanes);
        self
    }

    pub fn with_right(mut self, lanes: LaneGroup) -> Self {
        self.right = Some(lanes);
        self
    }

    pub fn with_pedestrian(mut self, crossing: PedestrianCrossing) -> Self {
        self.pedestrian = Some(crossing);
        self
    }

    pub fn build(self) -> Result<Direction> {
        Ok(Direction {
            direction_type: required(self.direction_type, &self.path, "type")?,
            straight: required(self.straight, &self.path, "lanes.straight")?,
            left: self.left,
            right: self.right,
            pedestrian: self.pedestrian,
        })
    }
}

#[derive(Debug, Default)]
pub struct RoadBuilder {
    path: String,
    id: Option<String>,
    name: Option<String>,
    speed_limit: Option<u8>,
    directions: [Option<Direction>; DIRECTIONS_PER_ROAD],
}

impl RoadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at<S: Into<String>>(mut self, path: S) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_speed_limit(mut self, mph: u8) -> Self {
        self.speed_limit = Some(mph);
        self
    }

    /// Places a direction in one of the road's two slots
    pub fn with_direction(mut self, slot: usize, direction: Direction) -> Result<Self> {
        match self.directions.get_mut(slot) {
            Some(entry) => {
                *entry = Some(direction);
                Ok(self)
            }
            None => Err(ConfigError::CardinalityError {
                field: field_path(&self.path, "directions"),
                expected: DIRECTIONS_PER_ROAD,
                got: slot + 1,
            }),
        }
    }

    pub fn build(self) -> Result<Road> {
        let identifier = Identifier {
            id: required(self.id, &self.path, "id")?,
            name: required(self.name, &self.path, "name")?,
        };
        let speed_limit = required(self.speed_limit, &self.path, "speed_limit")?;
        let [first, second] = self.directions;
        let directions = [
            required(first, &self.path, "directions[0]")?,
            required(second, &self.path, "directions[1]")?,
        ];
        Ok(Road {
            identifier,
            speed_limit,
            directions,
        })
    }
}

#[derive(Debug, Default)]
pub struct IntersectionConfigBuilder {
    id: Option<String>,
    name: Option<String>,
    intersection_type: Option<IntersectionType>,
    main_road_id: Option<String>,
    roads: [Option<Road>; ROAD_COUNT],
}

impl IntersectionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Display name; defaults to the id when never set
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, intersection_type: IntersectionType) -> Self {
        self.intersection_type = Some(intersection_type);
        self
    }

    pub fn with_main_road<S: Into<String>>(mut self, road_id: S) -> Self {
        self.main_road_id = Some(road_id.into());
        self
    }

    pub fn with_road(mut self, slot: usize, road: Road) -> Result<Self> {
        match self.roads.get_mut(slot) {
            Some(entry) => {
                *entry = Some(road);
                Ok(self)
            }
            None => Err(ConfigError::CardinalityError {
                field: "roads".to_string(),
                expected: ROAD_COUNT,
                got: slot + 1,
            }),
        }
    }

    /// Finishes the record and resolves the main road reference by id.
    pub fn build(self) -> Result<IntersectionConfig> {
        let id = required(self.id, "", "intersection_id")?;
        let name = self.name.unwrap_or_else(|| id.clone());
        let intersection_type = required(self.intersection_type, "", "type")?;
        let [first, second] = self.roads;
        let roads = [
            required(first, "", "roads[0]")?,
            required(second, "", "roads[1]")?,
        ];

        let mut config = IntersectionConfig {
            identifier: Identifier { id, name },
            intersection_type,
            roads,
            main_road: None,
        };

        if let Some(main_road_id) = self.main_road_id {
            match config.road_index(&main_road_id) {
                Some(index) => config.main_road = Some(index),
                None => {
                    return Err(ConfigError::UnresolvedReference {
                        main_road: main_road_id,
                    })
                }
            }
        }

        Ok(config)
    }
}
