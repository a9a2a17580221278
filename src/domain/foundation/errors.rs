//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during input validation.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Pipeline stage where a calculation failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationStage {
    FourPillars,
    TenGods,
    Nayin,
    MajorPeriods,
    Strength,
}

impl fmt::Display for CalculationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalculationStage::FourPillars => "four-pillars",
            CalculationStage::TenGods => "ten-gods",
            CalculationStage::Nayin => "nayin",
            CalculationStage::MajorPeriods => "major-periods",
            CalculationStage::Strength => "strength",
        };
        write!(f, "{}", s)
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Stage errors
    FourPillarsCalculationError,
    TenGodCalculationError,
    NayinCalculationError,
    MajorPeriodCalculationError,
    StrengthCalculationError,

    // Collaborator errors
    CalendarError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::FourPillarsCalculationError => "FOUR_PILLARS_CALCULATION_ERROR",
            ErrorCode::TenGodCalculationError => "TEN_GOD_CALCULATION_ERROR",
            ErrorCode::NayinCalculationError => "NAYIN_CALCULATION_ERROR",
            ErrorCode::MajorPeriodCalculationError => "MAJOR_PERIOD_CALCULATION_ERROR",
            ErrorCode::StrengthCalculationError => "STRENGTH_CALCULATION_ERROR",
            ErrorCode::CalendarError => "CALENDAR_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Top-level chart computation error.
///
/// Validation failures surface before any stage runs; stage failures carry
/// the stage tag and a context string for diagnostics.
#[derive(Debug, Clone, Error)]
pub enum ChartError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Calendar conversion failed: {reason}")]
    Calendar { reason: String },

    #[error("{stage} calculation failed: {reason}")]
    Stage {
        stage: CalculationStage,
        reason: String,
    },
}

impl ChartError {
    /// Creates a calendar conversion error.
    pub fn calendar(reason: impl Into<String>) -> Self {
        ChartError::Calendar { reason: reason.into() }
    }

    /// Creates a stage-tagged calculation error.
    pub fn stage(stage: CalculationStage, reason: impl Into<String>) -> Self {
        ChartError::Stage {
            stage,
            reason: reason.into(),
        }
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ChartError::InvalidInput(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            ChartError::InvalidInput(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            ChartError::InvalidInput(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            ChartError::Calendar { .. } => ErrorCode::CalendarError,
            ChartError::Stage { stage, .. } => match stage {
                CalculationStage::FourPillars => ErrorCode::FourPillarsCalculationError,
                CalculationStage::TenGods => ErrorCode::TenGodCalculationError,
                CalculationStage::Nayin => ErrorCode::NayinCalculationError,
                CalculationStage::MajorPeriods => ErrorCode::MajorPeriodCalculationError,
                CalculationStage::Strength => ErrorCode::StrengthCalculationError,
            },
        }
    }
}
