use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Call lengths (minutes) a caller may book
pub const ALLOWED_DURATIONS: [u32; 5] = [1, 15, 30, 45, 60];

const INVALID_DURATION_MESSAGE: &str = "Invalid duration. Allowed: 1, 15, 30, 45, 60 minutes";

/// Rejected `duration` input. Every variant renders the same caller-facing message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", INVALID_DURATION_MESSAGE)]
    NotAllowed(i64),

    #[error("{}", INVALID_DURATION_MESSAGE)]
    NotAnInteger(Value),

    #[error("{}", INVALID_DURATION_MESSAGE)]
    Missing,
}

/// A meeting length in minutes, guaranteed to be one of `ALLOWED_DURATIONS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MeetingDuration(u32);

impl MeetingDuration {
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Extract and validate the `duration` field of a request body.
    ///
    /// Integral JSON numbers (`30`, `30.0`) are accepted; strings, booleans,
    /// null and fractional numbers are not. A non-object body counts as a
    /// missing field.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        match body.get("duration") {
            None => Err(ValidationError::Missing),
            Some(value) => Self::from_json(value),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let Value::Number(number) = value else {
            return Err(ValidationError::NotAnInteger(value.clone()));
        };

        let minutes = match number.as_i64() {
            Some(n) => n,
            None => match number.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => f as i64,
                _ => return Err(ValidationError::NotAnInteger(value.clone())),
            },
        };

        Self::try_from(minutes)
    }
}

impl TryFrom<i64> for MeetingDuration {
    type Error = ValidationError;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        ALLOWED_DURATIONS
            .iter()
            .copied()
            .find(|&allowed| i64::from(allowed) == minutes)
            .map(MeetingDuration)
            .ok_or(ValidationError::NotAllowed(minutes))
    }
}

impl fmt::Display for MeetingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
