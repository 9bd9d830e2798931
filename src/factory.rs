use crate::error::DateOverflow;
use crate::parts::{DateParts, OrdinalParts};
use crate::schema::Schema;

/// Construction of parts triples from raw coordinates, in a validating
/// (`try_*`) and a non-validating (`*_unchecked`) mode.
///
/// The unchecked methods have one precondition: the input is already valid
/// in this schema (the year supported, the day-of-year or day-number
/// reachable). They exist for internal call sites that have just performed
/// an equivalent check themselves; the precondition is asserted in debug
/// builds and simply assumed in release builds.
///
/// Blanket-implemented for every [`Schema`].
pub trait PartsFactory: Schema {
    /// Validating form of [`ordinal_parts_unchecked`](Self::ordinal_parts_unchecked).
    fn try_ordinal_parts(&self, year: i32, day_of_year: u16) -> Result<OrdinalParts, DateOverflow> {
        if !self.supported_years().contains(&year)
            || day_of_year < 1
            || day_of_year > self.days_in_year(year)
        {
            return Err(DateOverflow);
        }
        Ok(OrdinalParts::new(year, day_of_year))
    }

    /// Precondition: `year` is supported and `day_of_year` exists in it.
    fn ordinal_parts_unchecked(&self, year: i32, day_of_year: u16) -> OrdinalParts {
        debug_assert!(self.supported_years().contains(&year));
        debug_assert!(day_of_year >= 1 && day_of_year <= self.days_in_year(year));
        OrdinalParts::new(year, day_of_year)
    }

    /// Validating form of
    /// [`date_parts_from_ordinal_unchecked`](Self::date_parts_from_ordinal_unchecked).
    fn try_date_parts_from_ordinal(
        &self,
        year: i32,
        day_of_year: u16,
    ) -> Result<DateParts, DateOverflow> {
        let ordinal = self.try_ordinal_parts(year, day_of_year)?;
        Ok(self.date_parts_from_ordinal_unchecked(ordinal.year(), ordinal.day_of_year()))
    }

    /// Precondition: `year` is supported and `day_of_year` exists in it.
    fn date_parts_from_ordinal_unchecked(&self, year: i32, day_of_year: u16) -> DateParts {
        debug_assert!(self.supported_years().contains(&year));
        debug_assert!(day_of_year >= 1 && day_of_year <= self.days_in_year(year));
        let (month, day) = self.month_and_day(year, day_of_year);
        DateParts::new(year, month, day)
    }

    /// Validating form of [`date_parts_at_unchecked`](Self::date_parts_at_unchecked).
    fn try_date_parts_at(&self, days_since_epoch: i32) -> Result<DateParts, DateOverflow> {
        let (year, month, day) = self.date_parts_at(days_since_epoch);
        if !self.supported_years().contains(&year) {
            return Err(DateOverflow);
        }
        Ok(DateParts::new(year, month, day))
    }

    /// Precondition: `days_since_epoch` falls within a supported year.
    fn date_parts_at_unchecked(&self, days_since_epoch: i32) -> DateParts {
        let (year, month, day) = self.date_parts_at(days_since_epoch);
        debug_assert!(self.supported_years().contains(&year));
        DateParts::new(year, month, day)
    }

    /// Validating form of [`ordinal_parts_at_unchecked`](Self::ordinal_parts_at_unchecked).
    fn try_ordinal_parts_at(&self, days_since_epoch: i32) -> Result<OrdinalParts, DateOverflow> {
        let (year, doy) = self.ordinal_parts_at(days_since_epoch);
        if !self.supported_years().contains(&year) {
            return Err(DateOverflow);
        }
        Ok(OrdinalParts::new(year, doy))
    }

    /// Precondition: `days_since_epoch` falls within a supported year.
    fn ordinal_parts_at_unchecked(&self, days_since_epoch: i32) -> OrdinalParts {
        let (year, doy) = self.ordinal_parts_at(days_since_epoch);
        debug_assert!(self.supported_years().contains(&year));
        OrdinalParts::new(year, doy)
    }
}

impl<S: Schema> PartsFactory for S {}
