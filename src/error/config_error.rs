use crate::error::ErrorCode;
use crate::model::{DetectorKind, DirectionType, IntersectionType, Movement};
use thiserror::Error;

/// Every way a load attempt can fail. The first failure ends the attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to load document {source_name:?}: {reason}")]
    DocumentLoad { source_name: String, reason: String },

    #[error("Document {source_name:?} is {size} bytes, limit is {limit}")]
    DocumentTooLarge {
        source_name: String,
        size: u64,
        limit: u64,
    },

    #[error("Invalid loader configuration: {0}")]
    InvalidLoaderConfig(String),

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Type mismatch for field '{field}': expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },

    #[error("Unknown value {value:?} for field '{field}'")]
    UnknownEnumValue { field: String, value: String },

    #[error("Value out of range for field '{field}': {value} not in {min}..={max}")]
    RangeError {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Field '{field}' must hold exactly {expected} entries, got {got}")]
    CardinalityError {
        field: String,
        expected: usize,
        got: usize,
    },

    #[error("Main road {main_road:?} does not match exactly one road id")]
    UnresolvedReference { main_road: String },

    #[error("Road {road} ('{road_id}') has directions {first}/{second}, expected NB/SB or EB/WB")]
    InvalidDirectionPair {
        road: usize,
        road_id: String,
        first: DirectionType,
        second: DirectionType,
    },

    #[error("Road name '{name}' is used by both roads")]
    DuplicateRoadName { name: String },

    #[error("Road id '{id}' is used by both roads")]
    DuplicateRoadId { id: String },

    #[error("Both roads model the same {first}/{second} axis")]
    DuplicateDirectionPair {
        first: DirectionType,
        second: DirectionType,
    },

    #[error("Road {road} ('{road_id}') {direction}: {movement} turn lanes not allowed for intersection type {intersection_type}")]
    TurnNotAllowed {
        road: usize,
        road_id: String,
        direction: DirectionType,
        movement: Movement,
        intersection_type: IntersectionType,
    },

    #[error("Road {road} ('{road_id}') {direction}: detector on main road {movement} turn lane is forbidden")]
    DetectorOnTurnLaneForbidden {
        road: usize,
        road_id: String,
        direction: DirectionType,
        movement: Movement,
    },

    #[error("Road {road} ('{road_id}') {direction}: {movement} lane detector has setback {distance} ft but road is not the main road")]
    SetbackOnNonMainRoad {
        road: usize,
        road_id: String,
        direction: DirectionType,
        movement: Movement,
        distance: u16,
    },

    #[error("Road {road} ('{road_id}') {direction}: no {detector} detector setback defined for {speed_limit} mph")]
    UnsupportedSpeedForDetector {
        road: usize,
        road_id: String,
        direction: DirectionType,
        detector: DetectorKind,
        speed_limit: u8,
    },

    #[error("Road {road} ('{road_id}') {direction}: straight lane detector setback must be {expected} ft at {speed_limit} mph, got {got} ft")]
    SetbackMismatch {
        road: usize,
        road_id: String,
        direction: DirectionType,
        speed_limit: u8,
        expected: u16,
        got: u16,
    },

    #[error("Controller initialization failed: {0}")]
    ControllerInit(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialization(String),
}

impl ConfigError {
    /// Returns the stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::DocumentLoad { .. } => ErrorCode::DocumentLoadError,
            ConfigError::DocumentTooLarge { .. } => ErrorCode::DocumentTooLarge,
            ConfigError::InvalidLoaderConfig(_) => ErrorCode::InvalidLoaderConfig,
            ConfigError::MissingField { .. } => ErrorCode::MissingField,
            ConfigError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            ConfigError::UnknownEnumValue { .. } => ErrorCode::UnknownEnumValue,
            ConfigError::RangeError { .. } => ErrorCode::RangeError,
            ConfigError::CardinalityError { .. } => ErrorCode::CardinalityError,
            ConfigError::UnresolvedReference { .. } => ErrorCode::UnresolvedReference,
            ConfigError::InvalidDirectionPair { .. } => ErrorCode::InvalidDirectionPair,
            ConfigError::DuplicateRoadName { .. } => ErrorCode::DuplicateRoadName,
            ConfigError::DuplicateRoadId { .. } => ErrorCode::DuplicateRoadId,
            ConfigError::DuplicateDirectionPair { .. } => ErrorCode::DuplicateDirectionPair,
            ConfigError::TurnNotAllowed { .. } => ErrorCode::TurnNotAllowed,
            ConfigError::DetectorOnTurnLaneForbidden { .. } => {
                ErrorCode::DetectorOnTurnLaneForbidden
            }
            ConfigError::SetbackOnNonMainRoad { .. } => ErrorCode::SetbackOnNonMainRoad,
            ConfigError::UnsupportedSpeedForDetector { .. } => {
                ErrorCode::UnsupportedSpeedForDetector
            }
            ConfigError::SetbackMismatch { .. } => ErrorCode::SetbackMismatch,
            ConfigError::ControllerInit(_) => ErrorCode::ControllerInit,
            ConfigError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        ConfigError::MissingField {
            field: field.into(),
        }
    }

    pub fn type_mismatch<S: Into<String>>(field: S, expected: &str, got: &str) -> Self {
        ConfigError::TypeMismatch {
            field: field.into(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub fn range<S: Into<String>>(field: S, value: i64, min: i64, max: i64) -> Self {
        ConfigError::RangeError {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    pub fn document_load<S: Into<String>, R: Into<String>>(source_name: S, reason: R) -> Self {
        ConfigError::DocumentLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Serialization(error.to_string())
    }
}

impl From<regex::Error> for ConfigError {
    fn from(error: regex::Error) -> Self {
        ConfigError::InvalidLoaderConfig(error.to_string())
    }
}
