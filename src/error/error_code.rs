use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage an error originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Load,
    Parse,
    Validate,
    Controller,
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Parse => "parse",
            Stage::Validate => "validate",
            Stage::Controller => "controller",
            Stage::Output => "output",
        };
        write!(f, "{}", name)
    }
}

/// Stable error codes reported alongside every diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    // Document access
    DocumentLoadError = 100,
    DocumentTooLarge = 101,
    InvalidLoaderConfig = 102,

    // Typed parser
    MissingField = 200,
    TypeMismatch = 201,
    UnknownEnumValue = 202,
    RangeError = 203,
    CardinalityError = 204,
    UnresolvedReference = 205,

    // Semantic validator
    InvalidDirectionPair = 300,
    DuplicateRoadName = 301,
    DuplicateRoadId = 302,
    DuplicateDirectionPair = 303,
    TurnNotAllowed = 304,
    DetectorOnTurnLaneForbidden = 305,
    SetbackOnNonMainRoad = 306,
    UnsupportedSpeedForDetector = 307,
    SetbackMismatch = 308,

    // Controller entry point
    ControllerInit = 400,

    // Dump of a validated model
    SerializationError = 500,
}

impl ErrorCode {
    /// Returns the string representation of the error code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DocumentLoadError => "DOCUMENT_LOAD_ERROR",
            ErrorCode::DocumentTooLarge => "DOCUMENT_TOO_LARGE",
            ErrorCode::InvalidLoaderConfig => "INVALID_LOADER_CONFIG",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::TypeMismatch => "TYPE_MISMATCH",
            ErrorCode::UnknownEnumValue => "UNKNOWN_ENUM_VALUE",
            ErrorCode::RangeError => "RANGE_ERROR",
            ErrorCode::CardinalityError => "CARDINALITY_ERROR",
            ErrorCode::UnresolvedReference => "UNRESOLVED_REFERENCE",
            ErrorCode::InvalidDirectionPair => "INVALID_DIRECTION_PAIR",
            ErrorCode::DuplicateRoadName => "DUPLICATE_ROAD_NAME",
            ErrorCode::DuplicateRoadId => "DUPLICATE_ROAD_ID",
            ErrorCode::DuplicateDirectionPair => "DUPLICATE_DIRECTION_PAIR",
            ErrorCode::TurnNotAllowed => "TURN_NOT_ALLOWED",
            ErrorCode::DetectorOnTurnLaneForbidden => "DETECTOR_ON_TURN_LANE_FORBIDDEN",
            ErrorCode::SetbackOnNonMainRoad => "SETBACK_ON_NON_MAIN_ROAD",
            ErrorCode::UnsupportedSpeedForDetector => "UNSUPPORTED_SPEED_FOR_DETECTOR",
            ErrorCode::SetbackMismatch => "SETBACK_MISMATCH",
            ErrorCode::ControllerInit => "CONTROLLER_INIT",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
        }
    }

    /// Returns the pipeline stage that raises this code
    pub fn stage(&self) -> Stage {
        match self.code() / 100 {
            1 => Stage::Load,
            2 => Stage::Parse,
            3 => Stage::Validate,
            4 => Stage::Controller,
            _ => Stage::Output,
        }
    }

    /// Returns the numeric error code value
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
