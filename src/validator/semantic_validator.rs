use crate::error::Result;
use crate::model::IntersectionConfig;
use crate::validator::rules::Rule;
use crate::validator::validated::ValidatedConfig;
use log::{debug, info};

/// Runs the semantic rules over a parsed intersection in a fixed order.
///
/// The first violated rule aborts validation; the parsed model is consumed
/// either way, so a rejected model is never handed on.
pub struct SemanticValidator;

impl SemanticValidator {
    pub fn validate(config: IntersectionConfig) -> Result<ValidatedConfig> {
        Self::check(&config)?;
        info!(
            "Intersection '{}' passed {} semantic rules",
            config.identifier.id,
            Rule::ORDER.len()
        );
        Ok(ValidatedConfig::new(config))
    }

    /// Checks every rule without taking ownership
    pub fn check(config: &IntersectionConfig) -> Result<()> {
        for rule in Rule::ORDER {
            debug!("Checking rule {} on '{}'", rule, config.identifier.id);
            if let Err(e) = rule.check(config) {
                debug!("Rule {} failed: {}", rule, e);
                return Err(e);
            }
            debug!("✓ {} passed", rule);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, ErrorCode};
    use crate::model::{
        Detector, DetectorKind, Direction, DirectionType, Identifier, IntersectionType, LaneGroup,
        Movement, Road, RoadIndex,
    };

    fn lanes(count: u8) -> LaneGroup {
        LaneGroup {
            count,
            protected: false,
            detector: None,
        }
    }

    fn direction(direction_type: DirectionType) -> Direction {
        Direction {
            direction_type,
            straight: lanes(2),
            left: None,
            right: None,
            pedestrian: None,
        }
    }

    fn road(id: &str, a: DirectionType, b: DirectionType, speed_limit: u8) -> Road {
        Road {
            identifier: Identifier::new(id, format!("{} Road", id)),
            speed_limit,
            directions: [direction(a), direction(b)],
        }
    }

    fn intersection(intersection_type: IntersectionType) -> IntersectionConfig {
        IntersectionConfig {
            identifier: Identifier::new("int-1", "First & Main"),
            intersection_type,
            roads: [
                road("main", DirectionType::Nb, DirectionType::Sb, 35),
                road("cross", DirectionType::Eb, DirectionType::Wb, 30),
            ],
            main_road: None,
        }
    }

    fn with_main(mut config: IntersectionConfig) -> IntersectionConfig {
        config.main_road = Some(RoadIndex::FIRST);
        config
    }

    fn loop_at(feet: u16) -> Option<Detector> {
        Some(Detector::new(DetectorKind::Loop).with_setback(feet))
    }

    #[test]
    fn test_minimal_config_valid_for_every_type() {
        for kind in IntersectionType::ALL {
            let validated = SemanticValidator::validate(intersection(kind)).unwrap();
            assert_eq!(validated.intersection_type, kind);
        }
    }

    #[test]
    fn test_invalid_direction_pair() {
        let mut config = intersection(IntersectionType::StraightOnly);
        config.roads[1].directions[1].direction_type = DirectionType::Nb;
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDirectionPair {
                road: 1,
                road_id: "cross".to_string(),
                first: DirectionType::Eb,
                second: DirectionType::Nb
            }
        );
    }

    #[test]
    fn test_same_direction_twice_is_invalid_pair() {
        let mut config = intersection(IntersectionType::StraightOnly);
        config.roads[0].directions[1].direction_type = DirectionType::Nb;
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDirectionPair);
    }

    #[test]
    fn test_reversed_pair_is_accepted() {
        let mut config = intersection(IntersectionType::StraightOnly);
        config.roads[0].directions.swap(0, 1);
        config.roads[1].directions.swap(0, 1);
        assert!(SemanticValidator::validate(config).is_ok());
    }

    #[test]
    fn test_duplicate_road_name() {
        let mut config = intersection(IntersectionType::StraightOnly);
        config.roads[1].identifier.name = config.roads[0].identifier.name.clone();
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateRoadName {
                name: "main Road".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_road_id() {
        let mut config = intersection(IntersectionType::StraightOnly);
        config.roads[1].identifier.id = "main".to_string();
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateRoadId);
    }

    #[test]
    fn test_duplicate_direction_pair_in_any_order() {
        for (a, b) in [
            (DirectionType::Nb, DirectionType::Sb),
            (DirectionType::Sb, DirectionType::Nb),
        ] {
            let mut config = intersection(IntersectionType::StraightOnly);
            config.roads[1] = road("cross", a, b, 30);
            let err = SemanticValidator::validate(config).unwrap_err();
            assert_eq!(
                err,
                ConfigError::DuplicateDirectionPair {
                    first: DirectionType::Nb,
                    second: DirectionType::Sb
                }
            );
        }
    }

    #[test]
    fn test_turn_legality_exhaustive() {
        for kind in IntersectionType::ALL {
            for movement in [Movement::Left, Movement::Right] {
                let mut config = intersection(kind);
                let target = &mut config.roads[1].directions[0];
                match movement {
                    Movement::Left => target.left = Some(lanes(1)),
                    _ => target.right = Some(lanes(1)),
                }

                let result = SemanticValidator::validate(config);
                if kind.permits(movement) {
                    assert!(result.is_ok(), "{:?} should allow {}", kind, movement);
                } else {
                    assert_eq!(
                        result.unwrap_err(),
                        ConfigError::TurnNotAllowed {
                            road: 1,
                            road_id: "cross".to_string(),
                            direction: DirectionType::Eb,
                            movement,
                            intersection_type: kind
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn test_main_road_loop_table_every_speed() {
        let speeds = [(30, 80), (35, 200), (40, 300), (45, 330), (50, 370), (55, 445), (60, 485)];
        for (speed, feet) in speeds {
            let mut config = with_main(intersection(IntersectionType::StraightOnly));
            config.roads[0].speed_limit = speed;
            config.roads[0].directions[0].straight.detector = loop_at(feet);
            assert!(
                SemanticValidator::check(&config).is_ok(),
                "{} ft at {} mph",
                feet,
                speed
            );

            config.roads[0].directions[0].straight.detector = loop_at(feet + 1);
            assert_eq!(
                SemanticValidator::check(&config).unwrap_err().code(),
                ErrorCode::SetbackMismatch
            );
        }
    }

    #[test]
    fn test_main_road_detector_wrong_distance() {
        let mut config = with_main(intersection(IntersectionType::StraightOnly));
        config.roads[0].directions[1].straight.detector = loop_at(150);
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SetbackMismatch {
                road: 0,
                road_id: "main".to_string(),
                direction: DirectionType::Sb,
                speed_limit: 35,
                expected: 200,
                got: 150
            }
        );
    }

    #[test]
    fn test_main_road_detector_zero_setback_rejected() {
        let mut config = with_main(intersection(IntersectionType::StraightOnly));
        config.roads[0].directions[0].straight.detector = Some(Detector::new(DetectorKind::Radar));
        let err = SemanticValidator::validate(config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SetbackMismatch {
                expected: 200,
                got: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_speed_is_hard_failure() {
        for speed in [25, 29, 31, 61, 65] {
            let mut config = with_main(intersection(IntersectionType::StraightOnly));
            config.roads[0].speed_limit = speed;
            config.roads[0].directions[0].straight.detector = loop_at(200);
            let err = SemanticValidator::validate(config).unwrap_err();
            assert_eq!(
                err,
                ConfigError::UnsupportedSpeedForDetector {
                    road: 0,
                    road_id: "main".to_string(),
                    direction: DirectionType::Nb,
                    detector: DetectorKind::Loop,
                    speed_limit: speed
                }
            );
        }
    }

    #[test]
    fn test_unsupported_speed_without_detector_passes() {
        let mut config = with_main(intersection(IntersectionType::StraightOnly));
        config.roads[0].speed_limit = 25;
        assert!(SemanticValidator::validate(config).is_ok());
    }

    #[test]
    fn test_detector_on_main_road_turn_lane() {
        let mut config = with_main(intersection(IntersectionType::StraightLeft));
        config.roads[0].directions[0].left = Some(LaneGroup {
            count: 1,
            protected: true,
            detector: Some(Detector::new(DetectorKind::Video)),
        });
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DetectorOnTurnLaneForbidden {
                road: 0,
                road_id: "main".to_string(),
                direction: DirectionType::Nb,
                movement: Movement::Left
            }
        );
    }

    #[test]
    fn test_setback_on_non_main_road() {
        let mut config = with_main(intersection(IntersectionType::StraightOnly));
        config.roads[1].directions[1].straight.detector = loop_at(80);
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SetbackOnNonMainRoad {
                road: 1,
                road_id: "cross".to_string(),
                direction: DirectionType::Wb,
                movement: Movement::Straight,
                distance: 80
            }
        );
    }

    #[test]
    fn test_stop_line_detectors_allowed_off_main_road() {
        let mut config = with_main(intersection(IntersectionType::StraightRight));
        config.roads[1].directions[0].straight.detector = Some(Detector::new(DetectorKind::Video));
        config.roads[1].directions[0].right = Some(LaneGroup {
            count: 1,
            protected: false,
            detector: Some(Detector::new(DetectorKind::Loop).with_setback(0)),
        });
        assert!(SemanticValidator::validate(config).is_ok());
    }

    #[test]
    fn test_without_main_road_every_setback_fails() {
        let mut config = intersection(IntersectionType::StraightOnly);
        config.roads[0].directions[0].straight.detector = loop_at(200);
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::SetbackOnNonMainRoad);
    }

    #[test]
    fn test_rules_run_in_fixed_order() {
        // Violates both PairValidity and TurnLegality; the first rule wins.
        let mut config = intersection(IntersectionType::StraightOnly);
        config.roads[0].directions[1].direction_type = DirectionType::Eb;
        config.roads[0].directions[0].left = Some(lanes(1));
        let err = SemanticValidator::validate(config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDirectionPair);
    }
}
