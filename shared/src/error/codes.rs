//! Unified error codes for the venue platform
//!
//! This module defines all error codes used across venue-server and the
//! layout clients. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Venue errors
//! - 2xxx: Media (background map) errors
//! - 3xxx: Event scheduling errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Venue ====================
    /// Stadium not found
    StadiumNotFound = 1001,
    /// Stadium name already exists for the club
    StadiumNameExists = 1002,
    /// Segmentation type cannot change after creation
    SegmentationTypeLocked = 1003,
    /// Stand is missing required configuration
    StandInvalid = 1004,
    /// Sector is missing required configuration
    SectorInvalid = 1005,

    // ==================== 2xxx: Media ====================
    /// Sectorized venue requires a background map image
    ImageRequired = 2001,
    /// Uploaded image exceeds the size limit
    ImageTooLarge = 2002,
    /// Uploaded file is not a supported image format
    UnsupportedImageFormat = 2003,

    // ==================== 3xxx: Event scheduling ====================
    /// Venue has an event currently in progress
    EventInProgress = 3001,
    /// Event schedule collaborator is unavailable
    ScheduleUnavailable = 3002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage error
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether this code represents success
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the default human-readable message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::StadiumNotFound => "Stadium not found",
            Self::StadiumNameExists => "Stadium name already exists",
            Self::SegmentationTypeLocked => "Segmentation type cannot change after creation",
            Self::StandInvalid => "Stand is missing required configuration",
            Self::SectorInvalid => "Sector is missing required configuration",

            Self::ImageRequired => "A background map image is required",
            Self::ImageTooLarge => "Image exceeds the size limit",
            Self::UnsupportedImageFormat => "Unsupported image format",

            Self::EventInProgress => "Cannot edit a venue with an ongoing event",
            Self::ScheduleUnavailable => "Event schedule is unavailable",

            Self::InternalError => "Internal server error",
            Self::StorageError => "Storage error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when deserializing an unknown error code value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::InvalidFormat),
            7 => Ok(Self::RequiredField),
            8 => Ok(Self::ValueOutOfRange),

            1001 => Ok(Self::StadiumNotFound),
            1002 => Ok(Self::StadiumNameExists),
            1003 => Ok(Self::SegmentationTypeLocked),
            1004 => Ok(Self::StandInvalid),
            1005 => Ok(Self::SectorInvalid),

            2001 => Ok(Self::ImageRequired),
            2002 => Ok(Self::ImageTooLarge),
            2003 => Ok(Self::UnsupportedImageFormat),

            3001 => Ok(Self::EventInProgress),
            3002 => Ok(Self::ScheduleUnavailable),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::StorageError),
            9003 => Ok(Self::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
