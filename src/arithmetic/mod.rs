//! Profile-dispatched calendrical arithmetic.
//!
//! [`Arithmetic::new`] inspects a schema's declared profile, validates that
//! the schema's shape actually matches it, and selects one of a closed set
//! of strategies. All strategies implement the same operations; they differ
//! in how wide their fast-path tiers are and in whether month and year
//! lengths come from schema calls, stored constants or closed-form
//! formulas.

use crate::error::{DateOverflow, InvalidSchemaError};
use crate::parts::{DateParts, MonthParts, OrdinalParts};
use crate::schema::{Profile, Schema};
use crate::segment::Segment;

mod gregorian;
mod kernel;
mod lunar;
mod lunisolar;
mod plain;
mod regular;
mod solar;
mod strategy;

pub use gregorian::GregorianArithmetic;
pub use lunar::LunarArithmetic;
pub use lunisolar::LunisolarArithmetic;
pub use plain::{PlainArithmetic, PlainSlowArithmetic};
pub use regular::RegularArithmetic;
pub use solar::{Solar12Arithmetic, Solar13Arithmetic};

use strategy::Strategy;

/// Months shorter than this break the single-rollover invariant of the
/// within-month tier, so such schemas fall back to [`PlainSlowArithmetic`].
pub const MIN_MIN_DAYS_IN_MONTH: u8 = 7;

/// Arithmetic engine for one schema, specialized to its profile.
#[derive(Debug)]
pub enum Arithmetic<S: Schema> {
    Gregorian(GregorianArithmetic<S>),
    Solar12(Solar12Arithmetic<S>),
    Solar13(Solar13Arithmetic<S>),
    Lunar(LunarArithmetic<S>),
    Lunisolar(LunisolarArithmetic<S>),
    Regular(RegularArithmetic<S>),
    Plain(PlainArithmetic<S>),
    PlainSlow(PlainSlowArithmetic<S>),
}

impl<S: Schema> Arithmetic<S> {
    /// Selects and validates the strategy for `schema`.
    pub fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        Ok(match schema.profile() {
            Profile::Solar12 if schema.is_proleptic_gregorian() => {
                Arithmetic::Gregorian(GregorianArithmetic::new(schema)?)
            }
            Profile::Solar12 => Arithmetic::Solar12(Solar12Arithmetic::new(schema)?),
            Profile::Solar13 => Arithmetic::Solar13(Solar13Arithmetic::new(schema)?),
            Profile::Lunar => Arithmetic::Lunar(LunarArithmetic::new(schema)?),
            Profile::Lunisolar => Arithmetic::Lunisolar(LunisolarArithmetic::new(schema)?),
            Profile::Other if schema.min_days_in_month() < MIN_MIN_DAYS_IN_MONTH => {
                Arithmetic::PlainSlow(PlainSlowArithmetic::new(schema)?)
            }
            Profile::Other if schema.is_regular().is_some() => {
                Arithmetic::Regular(RegularArithmetic::new(schema)?)
            }
            Profile::Other => Arithmetic::Plain(PlainArithmetic::new(schema)?),
        })
    }

    fn strategy(&self) -> &dyn Strategy<S> {
        match self {
            Arithmetic::Gregorian(s) => s,
            Arithmetic::Solar12(s) => s,
            Arithmetic::Solar13(s) => s,
            Arithmetic::Lunar(s) => s,
            Arithmetic::Lunisolar(s) => s,
            Arithmetic::Regular(s) => s,
            Arithmetic::Plain(s) => s,
            Arithmetic::PlainSlow(s) => s,
        }
    }

    /// The supported range of the underlying schema, clamped to the
    /// engine's representable years.
    pub fn segment(&self) -> &Segment {
        self.strategy().kernel().segment()
    }

    /// Largest `|days|` the within-month tier handles.
    pub fn max_days_via_day_of_month(&self) -> u32 {
        self.strategy().kernel().max_days_via_day_of_month()
    }

    /// Largest `|days|` the within-year tier handles.
    pub fn max_days_via_day_of_year(&self) -> u32 {
        self.strategy().kernel().max_days_via_day_of_year()
    }

    // ---- day arithmetic ----

    pub fn add_days(&self, date: DateParts, days: i32) -> Result<DateParts, DateOverflow> {
        self.strategy().add_days(date, days)
    }

    pub fn next_day(&self, date: DateParts) -> Result<DateParts, DateOverflow> {
        self.strategy().next_day(date)
    }

    pub fn previous_day(&self, date: DateParts) -> Result<DateParts, DateOverflow> {
        self.strategy().previous_day(date)
    }

    /// Signed day count from `start` to `end` (`end - start`).
    pub fn count_days_between(&self, start: DateParts, end: DateParts) -> i32 {
        self.strategy().count_days_between(start, end)
    }

    pub fn add_days_ordinal(
        &self,
        date: OrdinalParts,
        days: i32,
    ) -> Result<OrdinalParts, DateOverflow> {
        self.strategy().add_days_ordinal(date, days)
    }

    pub fn next_day_ordinal(&self, date: OrdinalParts) -> Result<OrdinalParts, DateOverflow> {
        self.strategy().next_day_ordinal(date)
    }

    pub fn previous_day_ordinal(
        &self,
        date: OrdinalParts,
    ) -> Result<OrdinalParts, DateOverflow> {
        self.strategy().previous_day_ordinal(date)
    }

    pub fn count_days_between_ordinal(&self, start: OrdinalParts, end: OrdinalParts) -> i32 {
        self.strategy().count_days_between_ordinal(start, end)
    }

    // ---- month arithmetic ----

    pub fn add_months(&self, month: MonthParts, months: i32) -> Result<MonthParts, DateOverflow> {
        self.strategy().add_months(month, months)
    }

    pub fn next_month(&self, month: MonthParts) -> Result<MonthParts, DateOverflow> {
        self.strategy().add_months(month, 1)
    }

    pub fn previous_month(&self, month: MonthParts) -> Result<MonthParts, DateOverflow> {
        self.strategy().add_months(month, -1)
    }

    /// Signed month count from `start` to `end`.
    pub fn count_months_between(&self, start: MonthParts, end: MonthParts) -> i32 {
        self.strategy().count_months_between(start, end)
    }

    // ---- clamping (roundoff) arithmetic ----

    /// Adds whole years, clamping a day the target month lacks to the
    /// month's last day. Returns the result and the number of clamped days.
    pub fn add_years_to_date(
        &self,
        date: DateParts,
        years: i32,
    ) -> Result<(DateParts, u16), DateOverflow> {
        self.strategy().add_years_to_date(date, years)
    }

    /// Adds whole months with the same end-of-month clamping policy.
    pub fn add_months_to_date(
        &self,
        date: DateParts,
        months: i32,
    ) -> Result<(DateParts, u16), DateOverflow> {
        self.strategy().add_months_to_date(date, months)
    }

    /// Adds whole years to an ordinal date, clamping to the target year's
    /// length.
    pub fn add_years_to_ordinal(
        &self,
        date: OrdinalParts,
        years: i32,
    ) -> Result<(OrdinalParts, u16), DateOverflow> {
        self.strategy().add_years_to_ordinal(date, years)
    }

    pub fn add_months_to_ordinal(
        &self,
        date: OrdinalParts,
        months: i32,
    ) -> Result<(OrdinalParts, u16), DateOverflow> {
        self.strategy().add_months_to_ordinal(date, months)
    }

    /// Adds whole years to a month, clamping to the target year's last
    /// month. Returns the result and the number of clamped months.
    pub fn add_years_to_month(
        &self,
        month: MonthParts,
        years: i32,
    ) -> Result<(MonthParts, u8), DateOverflow> {
        self.strategy().add_years_to_month(month, years)
    }
}
