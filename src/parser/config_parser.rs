use crate::config::LoaderConfig;
use crate::document::{Document, DocumentFormat, DocumentNode};
use crate::error::{ConfigError, Result};
use crate::model::limits::{
    CROSSING_DISTANCE, DETECTOR_SETBACK, DIRECTIONS_PER_ROAD, INTERSECTION_TYPE, LANE_COUNT,
    ROAD_COUNT, SPEED_LIMIT,
};
use crate::model::{
    Detector, DetectorBuilder, DetectorKind, Direction, DirectionBuilder, DirectionType,
    IntersectionConfig, IntersectionConfigBuilder, IntersectionType, LaneGroup, LaneGroupBuilder,
    PedestrianCrossing, Road, RoadBuilder,
};
use crate::parser::fields::{
    boolean, bounded, expect_object, fixed_array, indexed, path, required, string,
};
use log::{debug, info};
use regex::Regex;

/// Maps a generic document tree onto the typed intersection model.
///
/// Parsing stops at the first error; no partial model is ever returned.
pub struct ConfigParser {
    config: LoaderConfig,
    printable: Regex,
}

impl ConfigParser {
    pub fn new(config: LoaderConfig) -> Result<Self> {
        Ok(Self {
            config,
            printable: Regex::new(r"^[^\p{Cc}]+$")?,
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parse an intersection from JSON text with default limits
    pub fn from_json(json_str: &str) -> Result<IntersectionConfig> {
        let document = Document::parse(json_str, DocumentFormat::Json, "<json>")?;
        Self::new(LoaderConfig::default())?.parse_document(&document)
    }

    /// Parse an intersection from YAML text with default limits
    #[cfg(feature = "yaml-support")]
    pub fn from_yaml(yaml_str: &str) -> Result<IntersectionConfig> {
        let document = Document::parse(yaml_str, DocumentFormat::Yaml, "<yaml>")?;
        Self::new(LoaderConfig::default())?.parse_document(&document)
    }

    /// Serialize a parsed intersection to pretty JSON
    pub fn to_json(config: &IntersectionConfig) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }

    pub fn parse_document(&self, document: &Document) -> Result<IntersectionConfig> {
        match document {
            Document::Json(root) => self.parse(root),
            #[cfg(feature = "yaml-support")]
            Document::Yaml(root) => self.parse(root),
        }
    }

    pub fn parse<N: DocumentNode>(&self, root: &N) -> Result<IntersectionConfig> {
        expect_object(root, "<root>")?;

        let id = self.identifier(required(root, "", "intersection_id")?, "intersection_id")?;
        let mut builder = IntersectionConfigBuilder::new().with_id(id);

        if let Some(name) = root.field("name") {
            builder = builder.with_name(self.identifier(name, "name")?);
        }

        let code = bounded(required(root, "", "type")?, "type", INTERSECTION_TYPE)?;
        let intersection_type = IntersectionType::from_code(code)
            .ok_or_else(|| ConfigError::range("type", code, 1, 4))?;
        builder = builder.with_type(intersection_type);

        if let Some(main_road) = root.field("main_road") {
            builder = builder.with_main_road(self.identifier(main_road, "main_road")?);
        }

        let roads = required(root, "", "roads")?;
        fixed_array(roads, "roads", ROAD_COUNT)?;

        for index in 0..ROAD_COUNT {
            let at = indexed("roads", index);
            let road_node = roads
                .element(index)
                .ok_or_else(|| ConfigError::missing_field(at.clone()))?;
            builder = builder.with_road(index, self.parse_road(road_node, &at)?)?;
        }

        let config = builder.build()?;
        info!(
            "Parsed intersection '{}' (type {}, main road: {})",
            config.identifier.id,
            config.intersection_type,
            config.main_road().map_or("none", |road| road.id())
        );
        Ok(config)
    }

    fn parse_road<N: DocumentNode>(&self, node: &N, at: &str) -> Result<Road> {
        expect_object(node, at)?;

        let id = self.identifier(required(node, at, "id")?, &path(at, "id"))?;
        let name = self.identifier(required(node, at, "name")?, &path(at, "name"))?;
        let speed_limit = bounded(
            required(node, at, "speed_limit")?,
            &path(at, "speed_limit"),
            SPEED_LIMIT,
        )?;

        let directions_at = path(at, "directions");
        let directions = required(node, at, "directions")?;
        fixed_array(directions, &directions_at, DIRECTIONS_PER_ROAD)?;

        let mut builder = RoadBuilder::new()
            .at(at)
            .with_id(id)
            .with_name(name)
            .with_speed_limit(speed_limit as u8);

        for index in 0..DIRECTIONS_PER_ROAD {
            let direction_at = indexed(&directions_at, index);
            let direction_node = directions
                .element(index)
                .ok_or_else(|| ConfigError::missing_field(direction_at.clone()))?;
            builder =
                builder.with_direction(index, self.parse_direction(direction_node, &direction_at)?)?;
        }

        let road = builder.build()?;
        debug!(
            "Parsed road '{}' ({} mph, {})",
            road.id(),
            road.speed_limit,
            road.direction_pair()
        );
        Ok(road)
    }

    fn parse_direction<N: DocumentNode>(&self, node: &N, at: &str) -> Result<Direction> {
        expect_object(node, at)?;

        let type_at = path(at, "type");
        let token = string(required(node, at, "type")?, &type_at)?;
        let direction_type =
            DirectionType::from_token(&token).ok_or_else(|| ConfigError::UnknownEnumValue {
                field: type_at,
                value: token,
            })?;

        let lanes_at = path(at, "lanes");
        let lanes = required(node, at, "lanes")?;
        expect_object(lanes, &lanes_at)?;

        let straight_at = path(&lanes_at, "straight");
        let straight = self.parse_lane_group(required(lanes, &lanes_at, "straight")?, &straight_at)?;

        let mut builder = DirectionBuilder::new()
            .at(at)
            .with_type(direction_type)
            .with_straight(straight);

        if let Some(left) = lanes.field("left") {
            builder = builder.with_left(self.parse_lane_group(left, &path(&lanes_at, "left"))?);
        }
        if let Some(right) = lanes.field("right") {
            builder = builder.with_right(self.parse_lane_group(right, &path(&lanes_at, "right"))?);
        }
        if let Some(pedestrian) = node.field("pedestrian") {
            builder =
                builder.with_pedestrian(self.parse_crossing(pedestrian, &path(at, "pedestrian"))?);
        }

        let direction = builder.build()?;
        debug!(
            "Parsed direction {} at {} (left: {}, right: {}, crossing: {})",
            direction.direction_type,
            at,
            direction.left.is_some(),
            direction.right.is_some(),
            direction.pedestrian.is_some()
        );
        Ok(direction)
    }

    fn parse_lane_group<N: DocumentNode>(&self, node: &N, at: &str) -> Result<LaneGroup> {
        expect_object(node, at)?;

        let count = bounded(required(node, at, "count")?, &path(at, "count"), LANE_COUNT)?;
        let mut builder = LaneGroupBuilder::new().at(at).with_count(count as u8);

        if let Some(protected) = node.field("protected") {
            builder = builder.protected(boolean(protected, &path(at, "protected"))?);
        }
        if let Some(detector) = node.field("detector") {
            builder = builder.with_detector(self.parse_detector(detector, &path(at, "detector"))?);
        }

        builder.build()
    }

    fn parse_detector<N: DocumentNode>(&self, node: &N, at: &str) -> Result<Detector> {
        expect_object(node, at)?;

        let type_at = path(at, "type");
        let token = string(required(node, at, "type")?, &type_at)?;
        let kind = DetectorKind::from_token(&token).ok_or_else(|| ConfigError::UnknownEnumValue {
            field: type_at,
            value: token,
        })?;

        let mut builder = DetectorBuilder::new().at(at).with_kind(kind);
        if let Some(distance) = node.field("distance") {
            let feet = bounded(distance, &path(at, "distance"), DETECTOR_SETBACK)?;
            builder = builder.with_setback(feet as u16);
        }

        builder.build()
    }

    fn parse_crossing<N: DocumentNode>(&self, node: &N, at: &str) -> Result<PedestrianCrossing> {
        expect_object(node, at)?;

        let push_button = boolean(
            required(node, at, "push_button")?,
            &path(at, "push_button"),
        )?;
        let distance = bounded(
            required(node, at, "distance")?,
            &path(at, "distance"),
            CROSSING_DISTANCE,
        )?;

        Ok(PedestrianCrossing {
            push_button,
            distance: distance as u16,
        })
    }

    /// Bounded, printable identifier text
    fn identifier<N: DocumentNode>(&self, node: &N, at: &str) -> Result<String> {
        let value = string(node, at)?;
        let length = value.chars().count();
        let max = self.config.max_identifier_length;
        if length == 0 || length > max {
            return Err(ConfigError::range(at, length as i64, 1, max as i64));
        }
        if !self.printable.is_match(&value) {
            return Err(ConfigError::type_mismatch(
                at,
                "printable text",
                "control characters",
            ));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movement;
    use serde_json::{json, Value};

    fn direction(direction_type: &str) -> Value {
        json!({
            "type": direction_type,
            "lanes": { "straight": { "count": 2 } }
        })
    }

    fn document() -> Value {
        json!({
            "intersection_id": "int-1",
            "type": 1,
            "roads": [
                { "id": "main", "name": "Main St", "speed_limit": 35,
                  "directions": [direction("NB"), direction("SB")] },
                { "id": "elm", "name": "Elm St", "speed_limit": 30,
                  "directions": [direction("EB"), direction("WB")] }
            ]
        })
    }

    fn parse(value: &Value) -> Result<IntersectionConfig> {
        ConfigParser::new(LoaderConfig::default())?.parse(value)
    }

    #[test]
    fn test_parse_minimal_document() {
        let config = parse(&document()).unwrap();
        assert_eq!(config.identifier.id, "int-1");
        assert_eq!(config.intersection_type, IntersectionType::StraightOnly);
        assert_eq!(config.roads[1].name(), "Elm St");
        assert_eq!(config.roads[0].directions[1].direction_type, DirectionType::Sb);
        assert!(config.roads[0].directions[0].lane(Movement::Left).is_none());
        assert!(config.main_road.is_none());
    }

    #[test]
    fn test_missing_intersection_id() {
        let mut value = document();
        value.as_object_mut().unwrap().remove("intersection_id");
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::missing_field("intersection_id")
        );
    }

    #[test]
    fn test_type_out_of_range() {
        let mut value = document();
        value["type"] = json!(5);
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::range("type", 5, 1, 4)
        );
    }

    #[test]
    fn test_direction_token_case_insensitive() {
        let mut value = document();
        value["roads"][1]["directions"][0]["type"] = json!("eb");
        let config = parse(&value).unwrap();
        assert_eq!(config.roads[1].directions[0].direction_type, DirectionType::Eb);
    }

    #[test]
    fn test_unknown_direction_token() {
        let mut value = document();
        value["roads"][1]["directions"][0]["type"] = json!("EAST");
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::UnknownEnumValue {
                field: "roads[1].directions[0].type".to_string(),
                value: "EAST".to_string()
            }
        );
    }

    #[test]
    fn test_main_road_rejects_control_characters() {
        let mut value = document();
        value["main_road"] = json!("Elm\nSt");
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::type_mismatch("main_road", "printable text", "control characters")
        );
    }

    #[test]
    fn test_oversized_integer_is_range_error() {
        let mut value = document();
        value["roads"][0]["speed_limit"] = json!(u64::MAX);
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::range("roads[0].speed_limit", i64::MAX, 15, 75)
        );

        value["roads"][0]["speed_limit"] = json!(-1.0e30);
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::range("roads[0].speed_limit", i64::MIN, 15, 75)
        );
    }

    #[test]
    fn test_lane_count_out_of_range() {
        let mut value = document();
        value["roads"][0]["directions"][1]["lanes"]["straight"]["count"] = json!(4);
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::range("roads[0].directions[1].lanes.straight.count", 4, 1, 3)
        );
    }

    #[test]
    fn test_detector_parsed_with_optional_distance() {
        let mut value = document();
        value["roads"][0]["directions"][0]["lanes"]["straight"]["detector"] =
            json!({ "type": "Loop", "distance": 200 });
        value["roads"][0]["directions"][1]["lanes"]["straight"]["detector"] =
            json!({ "type": "video" });
        let config = parse(&value).unwrap();
        let road = &config.roads[0];
        assert_eq!(
            road.directions[0].straight.detector,
            Some(Detector::new(DetectorKind::Loop).with_setback(200))
        );
        assert_eq!(
            road.directions[1].straight.detector,
            Some(Detector::new(DetectorKind::Video))
        );
    }

    #[test]
    fn test_pedestrian_crossing_requires_both_fields() {
        let mut value = document();
        value["roads"][1]["directions"][1]["pedestrian"] = json!({ "push_button": true });
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::missing_field("roads[1].directions[1].pedestrian.distance")
        );
    }

    #[test]
    fn test_speed_limit_required() {
        let mut value = document();
        value["roads"][1].as_object_mut().unwrap().remove("speed_limit");
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::missing_field("roads[1].speed_limit")
        );
    }

    #[test]
    fn test_identifier_length_bounded() {
        let mut value = document();
        value["roads"][0]["name"] = json!("x".repeat(64));
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::range("roads[0].name", 64, 1, 63)
        );

        value["roads"][0]["name"] = json!("");
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::range("roads[0].name", 0, 1, 63)
        );
    }

    #[test]
    fn test_identifier_rejects_control_characters() {
        let mut value = document();
        value["roads"][0]["id"] = json!("main\nst");
        assert!(matches!(
            parse(&value).unwrap_err(),
            ConfigError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_directions_cardinality() {
        let mut value = document();
        value["roads"][0]["directions"] = json!([direction("NB")]);
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::CardinalityError {
                field: "roads[0].directions".to_string(),
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_cardinality_checked_before_elements() {
        let mut value = document();
        value["roads"] = json!([{ "broken": true }, {}, {}]);
        assert!(matches!(
            parse(&value).unwrap_err(),
            ConfigError::CardinalityError { expected: 2, got: 3, .. }
        ));
    }

    #[test]
    fn test_lane_group_must_be_object() {
        let mut value = document();
        value["roads"][0]["directions"][0]["lanes"]["left"] = json!(2);
        assert_eq!(
            parse(&value).unwrap_err(),
            ConfigError::type_mismatch("roads[0].directions[0].lanes.left", "object", "number")
        );
    }

    #[test]
    fn test_to_json_emits_direction_tokens() {
        let config = parse(&document()).unwrap();
        let json_str = ConfigParser::to_json(&config).unwrap();
        assert!(json_str.contains("\"NB\""));
        assert!(json_str.contains("\"straight_only\""));
    }

    #[cfg(feature = "yaml-support")]
    #[test]
    fn test_from_yaml() {
        let yaml = r#"
intersection_id: int-9
type: 4
main_road: main
roads:
  - id: main
    name: Main St
    speed_limit: 40
    directions:
      - type: NB
        lanes:
          straight: { count: 2 }
          left: { count: 1, protected: true }
      - type: SB
        lanes:
          straight: { count: 2 }
  - id: elm
    name: Elm St
    speed_limit: 25
    directions:
      - type: EB
        lanes:
          straight: { count: 1 }
          right: { count: 1 }
        pedestrian: { push_button: true, distance: 48 }
      - type: WB
        lanes:
          straight: { count: 1 }
"#;
        let config = ConfigParser::from_yaml(yaml).unwrap();
        assert_eq!(config.intersection_type, IntersectionType::StraightLeftRight);
        assert_eq!(config.main_road().map(|road| road.id()), Some("main"));
        assert!(config.roads[0].directions[0].left.unwrap().protected);
        assert_eq!(
            config.roads[1].directions[0].pedestrian,
            Some(PedestrianCrossing {
                push_button: true,
                distance: 48
            })
        );
    }
}
