use std::ops::RangeInclusive;

/// Structural classification of a calendar. Carries no behavior; it exists
/// only so the arithmetic factory can pick a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Fixed 12-month solar year.
    Solar12,
    /// Fixed 13-month solar year (calendars with a short 13th month).
    Solar13,
    /// Fixed 12-month lunar year.
    Lunar,
    /// Month count varies per year (intercalary months).
    Lunisolar,
    /// Anything else; the factory probes the schema's shape instead.
    Other,
}

/// Pure description of one calendar's shape. Every method must be total and
/// side-effect-free for inputs that are valid in this calendar; the engine
/// never calls them with anything else.
///
/// Day-numbers ("days since epoch") are relative to an epoch the schema
/// chooses; the engine only ever compares and offsets them, so the choice
/// is invisible to callers.
///
/// Implementations must be immutable: a schema is shared by reference and
/// invoked concurrently without locking.
pub trait Schema {
    /// The declared classification tag.
    fn profile(&self) -> Profile;

    /// The year range this schema's formulas are valid for. The engine
    /// intersects it with the representable year range; an empty
    /// intersection fails construction.
    fn supported_years(&self) -> RangeInclusive<i32>;

    /// Calendar-wide minimum month length, used to derive the month-level
    /// fast-path radius.
    fn min_days_in_month(&self) -> u8;

    /// Calendar-wide minimum year length, used to derive the year-level
    /// fast-path radius.
    fn min_days_in_year(&self) -> u16;

    /// `Some(n)` if every year of this calendar has exactly `n` months.
    fn is_regular(&self) -> Option<u8>;

    /// Opt-in hook for the specialized Gregorian fast path. Return `true`
    /// only if this schema is the proleptic civil calendar: January-based
    /// years, the usual month lengths, and the 4/100/400 leap rule.
    /// The arithmetic then resolves month and year lengths with closed-form
    /// formulas instead of calling back into the schema, so the two must
    /// agree exactly.
    fn is_proleptic_gregorian(&self) -> bool {
        false
    }

    fn months_in_year(&self, year: i32) -> u8;

    fn days_in_year(&self, year: i32) -> u16;

    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Ordinal day within the year of a (month, day) pair, 1-based.
    fn day_of_year(&self, year: i32, month: u8, day: u8) -> u16;

    /// Inverse of [`day_of_year`](Self::day_of_year): the (month, day) pair
    /// a given ordinal day falls on.
    fn month_and_day(&self, year: i32, day_of_year: u16) -> (u8, u8);

    /// Day-number of an ordinal date.
    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32;

    /// The (year, day-of-year) a day-number falls on.
    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16);

    /// Day-number of a (year, month, day) triple.
    fn days_since_epoch(&self, year: i32, month: u8, day: u8) -> i32 {
        self.days_since_epoch_ordinal(year, self.day_of_year(year, month, day))
    }

    /// The (year, month, day) a day-number falls on.
    fn date_parts_at(&self, days_since_epoch: i32) -> (i32, u8, u8) {
        let (year, doy) = self.ordinal_parts_at(days_since_epoch);
        let (month, day) = self.month_and_day(year, doy);
        (year, month, day)
    }

    /// Last (month, day) of a year.
    fn end_of_year_parts(&self, year: i32) -> (u8, u8) {
        let month = self.months_in_year(year);
        (month, self.days_in_month(year, month))
    }
}
