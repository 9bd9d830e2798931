//! Calendrical arithmetic over pluggable calendar descriptions.
//!
//! A calendar is described by a [`Schema`]: a pure, immutable account of
//! its shape (months per year, days per month, day-number conversions).
//! [`Arithmetic::new`] validates a schema against its declared [`Profile`]
//! and selects a strategy whose fast paths exploit that profile, from
//! closed-form formulas for the proleptic civil calendar down to a
//! day-number-only fallback for calendars with very short months. All
//! strategies expose the same operations and agree exactly with plain
//! day-number arithmetic; out-of-range results surface as [`DateOverflow`]
//! rather than panics.
//!
//! Month- and year-level additions follow the end-of-month convention:
//! a day (or month) the target lacks is clamped to the last one, and the
//! clamped amount is reported alongside the result.
//!
//! ```
//! use kalends::{Arithmetic, DateParts};
//! use kalends::schemas::GregorianSchema;
//!
//! let arith = Arithmetic::new(GregorianSchema)?;
//! let (date, roundoff) = arith.add_months_to_date(DateParts::new(2021, 1, 31), 1)?;
//! assert_eq!(date, DateParts::new(2021, 2, 28));
//! assert_eq!(roundoff, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use arithmetic::{Arithmetic, MIN_MIN_DAYS_IN_MONTH};
pub use error::{DateOverflow, InvalidSchemaError};
pub use factory::PartsFactory;
pub use parts::{
    DateParts, MonthParts, OrdinalParts, MAX_DAY, MAX_DAY_OF_YEAR, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
pub use schema::{Profile, Schema};
pub use segment::Segment;

pub mod arithmetic;
mod error;
mod factory;
mod parts;
mod schema;
pub mod schemas;
mod segment;
#[cfg(test)]
pub(crate) mod testing;
