use crate::controller::phase::{ControllerState, Phase};
use crate::error::{ConfigError, Result};
use crate::model::{Direction, IntersectionConfig, IntersectionType, RoadIndex};

/// Per-intersection-type controller behavior
pub trait ControllerStrategy {
    fn intersection_type(&self) -> IntersectionType;

    /// Phases this intersection runs, in NEMA order
    fn phases(&self, config: &IntersectionConfig) -> Vec<Phase>;

    fn init(&self, config: &IntersectionConfig) -> Result<ControllerState> {
        if config.intersection_type != self.intersection_type() {
            return Err(ConfigError::ControllerInit(format!(
                "strategy for type {} cannot drive a type {} intersection",
                self.intersection_type(),
                config.intersection_type
            )));
        }

        let first = self
            .phases(config)
            .into_iter()
            .find(Phase::is_through)
            .ok_or_else(|| ConfigError::ControllerInit("no through phase configured".to_string()))?;
        Ok(ControllerState::all_red(first))
    }
}

/// Through phase served by each direction. Without a designated main road the
/// first road takes the main-road phases.
fn through_phases(config: &IntersectionConfig) -> [(Phase, &Direction); 4] {
    let main = config.main_road.unwrap_or(RoadIndex::FIRST).get();
    let main_road = &config.roads[main];
    let cross_road = &config.roads[1 - main];
    [
        (Phase::Phase2, &main_road.directions[0]),
        (Phase::Phase4, &cross_road.directions[0]),
        (Phase::Phase6, &main_road.directions[1]),
        (Phase::Phase8, &cross_road.directions[1]),
    ]
}

/// Through phases plus a dedicated left phase wherever a protected left lane exists
fn phases_with_protected_left(config: &IntersectionConfig) -> Vec<Phase> {
    let mut phases: Vec<Phase> = Phase::THROUGH.to_vec();
    for (through, direction) in through_phases(config) {
        if direction.left.map_or(false, |lanes| lanes.protected) {
            phases.extend(Phase::left_of(through));
        }
    }
    phases.sort();
    phases
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightOnly;

impl ControllerStrategy for StraightOnly {
    fn intersection_type(&self) -> IntersectionType {
        IntersectionType::StraightOnly
    }

    fn phases(&self, _config: &IntersectionConfig) -> Vec<Phase> {
        Phase::THROUGH.to_vec()
    }
}

/// Right turns are served alongside their through movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightRight;

impl ControllerStrategy for StraightRight {
    fn intersection_type(&self) -> IntersectionType {
        IntersectionType::StraightRight
    }

    fn phases(&self, _config: &IntersectionConfig) -> Vec<Phase> {
        Phase::THROUGH.to_vec()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightLeft;

impl ControllerStrategy for StraightLeft {
    fn intersection_type(&self) -> IntersectionType {
        IntersectionType::StraightLeft
    }

    fn phases(&self, config: &IntersectionConfig) -> Vec<Phase> {
        phases_with_protected_left(config)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightLeftRight;

impl ControllerStrategy for StraightLeftRight {
    fn intersection_type(&self) -> IntersectionType {
        IntersectionType::StraightLeftRight
    }

    fn phases(&self, config: &IntersectionConfig) -> Vec<Phase> {
        phases_with_protected_left(config)
    }
}

/// Closed set of strategies, one per intersection type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    StraightOnly(StraightOnly),
    StraightRight(StraightRight),
    StraightLeft(StraightLeft),
    StraightLeftRight(StraightLeftRight),
}

impl Strategy {
    pub fn for_type(intersection_type: IntersectionType) -> Self {
        match intersection_type {
            IntersectionType::StraightOnly => Strategy::StraightOnly(StraightOnly),
            IntersectionType::StraightRight => Strategy::StraightRight(StraightRight),
            IntersectionType::StraightLeft => Strategy::StraightLeft(StraightLeft),
            IntersectionType::StraightLeftRight => Strategy::StraightLeftRight(StraightLeftRight),
        }
    }

    fn inner(&self) -> &dyn ControllerStrategy {
        match self {
            Strategy::StraightOnly(strategy) => strategy,
            Strategy::StraightRight(strategy) => strategy,
            Strategy::StraightLeft(strategy) => strategy,
            Strategy::StraightLeftRight(strategy) => strategy,
        }
    }
}

impl ControllerStrategy for Strategy {
    fn intersection_type(&self) -> IntersectionType {
        self.inner().intersection_type()
    }

    fn phases(&self, config: &IntersectionConfig) -> Vec<Phase> {
        self.inner().phases(config)
    }

    fn init(&self, config: &IntersectionConfig) -> Result<ControllerState> {
        self.inner().init(config)
    }
}
