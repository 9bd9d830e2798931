use std::fmt;

/// Smallest year any calendar may reach. Together with [`MAX_YEAR`] this is
/// the 22-bit two's-complement range, chosen so that a (year, month, day)
/// triple from any calendar can be packed into a single `i32` upstream and
/// compared against triples from other calendars.
pub const MIN_YEAR: i32 = -2_097_152;
/// Largest year any calendar may reach.
pub const MAX_YEAR: i32 = 2_097_151;

/// Largest month number a schema may produce (4 packed bits).
pub const MAX_MONTH: u8 = 15;
/// Largest day-of-month a schema may produce (6 packed bits).
pub const MAX_DAY: u8 = 63;
/// Largest day-of-year a schema may produce (10 packed bits).
pub const MAX_DAY_OF_YEAR: u16 = 1023;

/// A (year, month, day) coordinate. Only meaningful relative to one schema;
/// the type itself enforces the packed field bounds, not calendrical
/// validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateParts {
    year: i32,
    month: u8,
    day: u8,
}

impl DateParts {
    /// Builds a triple without consulting any schema. The fields must be
    /// within the packed bounds; whether the date exists in a given
    /// calendar is the caller's business.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((MIN_YEAR..=MAX_YEAR).contains(&year));
        debug_assert!((1..=MAX_MONTH).contains(&month));
        debug_assert!((1..=MAX_DAY).contains(&day));
        DateParts { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The (year, month) coordinate this date lies in.
    pub fn month_parts(&self) -> MonthParts {
        MonthParts::new(self.year, self.month)
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A (year, day-of-year) coordinate. Same validity contract as
/// [`DateParts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrdinalParts {
    year: i32,
    day_of_year: u16,
}

impl OrdinalParts {
    pub fn new(year: i32, day_of_year: u16) -> Self {
        debug_assert!((MIN_YEAR..=MAX_YEAR).contains(&year));
        debug_assert!((1..=MAX_DAY_OF_YEAR).contains(&day_of_year));
        OrdinalParts { year, day_of_year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day_of_year(&self) -> u16 {
        self.day_of_year
    }
}

impl fmt::Display for OrdinalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:03}", self.year, self.day_of_year)
    }
}

/// A (year, month) coordinate, used for month-level arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthParts {
    year: i32,
    month: u8,
}

impl MonthParts {
    pub fn new(year: i32, month: u8) -> Self {
        debug_assert!((MIN_YEAR..=MAX_YEAR).contains(&year));
        debug_assert!((1..=MAX_MONTH).contains(&month));
        MonthParts { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for MonthParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
