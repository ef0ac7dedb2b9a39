use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of travel on one side of a road
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DirectionType {
    #[serde(rename = "NB")]
    Nb,
    #[serde(rename = "SB")]
    Sb,
    #[serde(rename = "EB")]
    Eb,
    #[serde(rename = "WB")]
    Wb,
}

const DIRECTION_TOKENS: [(&str, DirectionType); 4] = [
    ("NB", DirectionType::Nb),
    ("SB", DirectionType::Sb),
    ("EB", DirectionType::Eb),
    ("WB", DirectionType::Wb),
];

impl DirectionType {
    pub const ALL: [DirectionType; 4] = [
        DirectionType::Nb,
        DirectionType::Sb,
        DirectionType::Eb,
        DirectionType::Wb,
    ];

    /// Looks up a document token, ignoring ASCII case
    pub fn from_token(token: &str) -> Option<Self> {
        let normalized = token.to_ascii_uppercase();
        DIRECTION_TOKENS
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, value)| *value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionType::Nb => "NB",
            DirectionType::Sb => "SB",
            DirectionType::Eb => "EB",
            DirectionType::Wb => "WB",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            DirectionType::Nb => DirectionType::Sb,
            DirectionType::Sb => DirectionType::Nb,
            DirectionType::Eb => DirectionType::Wb,
            DirectionType::Wb => DirectionType::Eb,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            DirectionType::Nb | DirectionType::Sb => Axis::NorthSouth,
            DirectionType::Eb | DirectionType::Wb => Axis::EastWest,
        }
    }
}

impl fmt::Display for DirectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical axis a road runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    NorthSouth,
    EastWest,
}

/// Unordered pair of direction types. `(SB, NB)` and `(NB, SB)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionPair {
    low: DirectionType,
    high: DirectionType,
}

impl DirectionPair {
    pub fn new(a: DirectionType, b: DirectionType) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// True for {NB, SB} and {EB, WB}
    pub fn is_opposite(&self) -> bool {
        self.low.opposite() == self.high
    }

    pub fn members(&self) -> (DirectionType, DirectionType) {
        (self.low, self.high)
    }
}

impl fmt::Display for DirectionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.low, self.high)
    }
}

/// Detection technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    Loop,
    Video,
    Radar,
}

const DETECTOR_TOKENS: [(&str, DetectorKind); 3] = [
    ("LOOP", DetectorKind::Loop),
    ("VIDEO", DetectorKind::Video),
    ("RADAR", DetectorKind::Radar),
];

impl DetectorKind {
    /// Looks up a document token, ignoring ASCII case
    pub fn from_token(token: &str) -> Option<Self> {
        let normalized = token.to_ascii_uppercase();
        DETECTOR_TOKENS
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, value)| *value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Loop => "loop",
            DetectorKind::Video => "video",
            DetectorKind::Radar => "radar",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lane movement within a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Straight,
    Left,
    Right,
}

impl Movement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Straight => "straight",
            Movement::Left => "left",
            Movement::Right => "right",
        }
    }

    pub fn is_turn(&self) -> bool {
        !matches!(self, Movement::Straight)
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Intersection class, deciding which turn movements may be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntersectionType {
    StraightOnly,
    StraightRight,
    StraightLeft,
    StraightLeftRight,
}

impl IntersectionType {
    pub const ALL: [IntersectionType; 4] = [
        IntersectionType::StraightOnly,
        IntersectionType::StraightRight,
        IntersectionType::StraightLeft,
        IntersectionType::StraightLeftRight,
    ];

    /// Maps the 1-based document code to a type
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(IntersectionType::StraightOnly),
            2 => Some(IntersectionType::StraightRight),
            3 => Some(IntersectionType::StraightLeft),
            4 => Some(IntersectionType::StraightLeftRight),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            IntersectionType::StraightOnly => 1,
            IntersectionType::StraightRight => 2,
            IntersectionType::StraightLeft => 3,
            IntersectionType::StraightLeftRight => 4,
        }
    }

    /// Turn legality table. Straight movements are always permitted.
    pub fn permits(&self, movement: Movement) -> bool {
        match movement {
            Movement::Straight => true,
            Movement::Left => matches!(
                self,
                IntersectionType::StraightLeft | IntersectionType::StraightLeftRight
            ),
            Movement::Right => matches!(
                self,
                IntersectionType::StraightRight | IntersectionType::StraightLeftRight
            ),
        }
    }
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
