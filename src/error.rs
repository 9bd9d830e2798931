use thiserror::Error;

use crate::schema::Profile;

/// An operation would produce a date outside the supported range, or an
/// intermediate day-number computation would not fit the integer type.
/// This is an expected, recoverable outcome, not a programming error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("date is out of the supported range")]
pub struct DateOverflow;

/// Raised once, at arithmetic-construction time, never mid-computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSchemaError {
    /// The schema's own supported years and the engine-representable year
    /// range share no years at all.
    #[error("schema's supported years do not intersect the representable year range")]
    EmptyYearRange,

    /// The schema declares a profile it does not structurally satisfy.
    #[error("schema does not satisfy profile {profile:?}: {reason}")]
    ProfileMismatch {
        profile: Profile,
        reason: &'static str,
    },
}
