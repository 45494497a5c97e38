//! Error codes for the trivia API.
//!
//! Every failure cause gets one code here; never pass ad-hoc strings as
//! error codes. Codes are SCREAMING_SNAKE_CASE and show up in logs next to
//! the trace id. The client-facing envelope only carries the HTTP status.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General bad request error
    BadRequest,
    /// Body is not syntactically valid JSON
    InvalidJson,
    /// `page` query parameter is not a positive integer
    InvalidPage,
    /// Category referenced by a path does not exist
    UnknownCategory,

    // Unprocessable payloads
    /// Required field absent, null or blank
    MissingField,
    /// Field present but of the wrong type or out of range
    InvalidField,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Question not found
    QuestionNotFound,
    /// Category not found
    CategoryNotFound,
    /// Requested page is empty
    PageOutOfRange,
    /// Quiz has no unseen questions left
    NoMoreQuestions,
    /// No route matches the path
    NotFound,

    // Routing
    /// Route exists but not for this method
    MethodNotAllowed,

    // System Errors
    /// Internal server error
    InternalError,
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Stored data violates an invariant
    DataCorruption,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidPage => "INVALID_PAGE",
            Self::UnknownCategory => "UNKNOWN_CATEGORY",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidField => "INVALID_FIELD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::PageOutOfRange => "PAGE_OUT_OF_RANGE",
            Self::NoMoreQuestions => "NO_MORE_QUESTIONS",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    pub const ALL: [ErrorCode; 18] = [
        Self::BadRequest,
        Self::InvalidJson,
        Self::InvalidPage,
        Self::UnknownCategory,
        Self::MissingField,
        Self::InvalidField,
        Self::ValidationError,
        Self::QuestionNotFound,
        Self::CategoryNotFound,
        Self::PageOutOfRange,
        Self::NoMoreQuestions,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::InternalError,
        Self::DbError,
        Self::DbUnavailable,
        Self::DataCorruption,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
