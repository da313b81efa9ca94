//! Integer status codes returned by the host-facing entry points.

use std::fmt;

/// Summary of an entry point's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Status {
    /// Completed successfully
    #[default]
    Ok = 0,
    /// Generic I/O, write, or parse failure
    Failure = 1,
    /// Input file does not exist
    NotFound = 2,
}

impl Status {
    /// Convert from an i32 value.
    ///
    /// Returns `None` for unknown codes.
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(Status::Ok),
            1 => Some(Status::Failure),
            2 => Some(Status::NotFound),
            _ => None,
        }
    }

    /// Convert to an i32 value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// True for [`Status::Ok`].
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Failure => "FAILURE",
            Status::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<T> From<&crate::Result<T>> for Status {
    fn from(result: &crate::Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}
