//! Cross-field rules over a parsed intersection. Each rule reports only the
//! first violation it finds.

use crate::error::{ConfigError, Result};
use crate::model::{IntersectionConfig, Movement};
use crate::validator::setback_table::SetbackTable;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    PairValidity,
    Uniqueness,
    TurnLegality,
    DetectorPlacement,
}

impl Rule {
    /// Execution order
    pub const ORDER: [Rule; 4] = [
        Rule::PairValidity,
        Rule::Uniqueness,
        Rule::TurnLegality,
        Rule::DetectorPlacement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::PairValidity => "PairValidity",
            Rule::Uniqueness => "Uniqueness",
            Rule::TurnLegality => "TurnLegality",
            Rule::DetectorPlacement => "DetectorPlacement",
        }
    }

    pub fn check(&self, config: &IntersectionConfig) -> Result<()> {
        match self {
            Rule::PairValidity => check_pair_validity(config),
            Rule::Uniqueness => check_uniqueness(config),
            Rule::TurnLegality => check_turn_legality(config),
            Rule::DetectorPlacement => check_detector_placement(config),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn check_pair_validity(config: &IntersectionConfig) -> Result<()> {
    for (index, road) in config.roads.iter().enumerate() {
        if !road.direction_pair().is_opposite() {
            return Err(ConfigError::InvalidDirectionPair {
                road: index,
                road_id: road.id().to_string(),
                first: road.directions[0].direction_type,
                second: road.directions[1].direction_type,
            });
        }
    }
    Ok(())
}

fn check_uniqueness(config: &IntersectionConfig) -> Result<()> {
    let [first, second] = &config.roads;

    if first.name() == second.name() {
        return Err(ConfigError::DuplicateRoadName {
            name: first.name().to_string(),
        });
    }
    if first.id() == second.id() {
        return Err(ConfigError::DuplicateRoadId {
            id: first.id().to_string(),
        });
    }
    if first.direction_pair() == second.direction_pair() {
        let (low, high) = first.direction_pair().members();
        return Err(ConfigError::DuplicateDirectionPair {
            first: low,
            second: high,
        });
    }
    Ok(())
}

fn check_turn_legality(config: &IntersectionConfig) -> Result<()> {
    let intersection_type = config.intersection_type;
    for (index, road) in config.roads.iter().enumerate() {
        for direction in &road.directions {
            for (movement, _) in direction.turn_lanes() {
                if !intersection_type.permits(movement) {
                    return Err(ConfigError::TurnNotAllowed {
                        road: index,
                        road_id: road.id().to_string(),
                        direction: direction.direction_type,
                        movement,
                        intersection_type,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Advance (nonzero setback) detectors are only legal on the main road's
/// straight lanes, at the table distance for the road's speed limit.
fn check_detector_placement(config: &IntersectionConfig) -> Result<()> {
    for (index, road) in config.roads.iter().enumerate() {
        let is_main = config.is_main_road(index);

        for direction in &road.directions {
            for (movement, lane) in direction.lanes() {
                let Some(detector) = lane.detector else {
                    continue;
                };

                if !is_main {
                    if detector.setback_feet() != 0 {
                        return Err(ConfigError::SetbackOnNonMainRoad {
                            road: index,
                            road_id: road.id().to_string(),
                            direction: direction.direction_type,
                            movement,
                            distance: detector.setback_feet(),
                        });
                    }
                    continue;
                }

                if movement != Movement::Straight {
                    return Err(ConfigError::DetectorOnTurnLaneForbidden {
                        road: index,
                        road_id: road.id().to_string(),
                        direction: direction.direction_type,
                        movement,
                    });
                }

                let expected = SetbackTable::for_kind(detector.kind)
                    .distance_for(road.speed_limit)
                    .ok_or_else(|| ConfigError::UnsupportedSpeedForDetector {
                        road: index,
                        road_id: road.id().to_string(),
                        direction: direction.direction_type,
                        detector: detector.kind,
                        speed_limit: road.speed_limit,
                    })?;

                if detector.setback_feet() != expected {
                    return Err(ConfigError::SetbackMismatch {
                        road: index,
                        road_id: road.id().to_string(),
                        direction: direction.direction_type,
                        speed_limit: road.speed_limit,
                        expected,
                        got: detector.setback_feet(),
                    });
                }
            }
        }
    }
    Ok(())
}
