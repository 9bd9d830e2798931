use crate::error::DateOverflow;
use crate::parts::{DateParts, MonthParts, OrdinalParts};
use crate::schema::Schema;

use super::kernel::Kernel;

/// The arithmetic contract every profile strategy implements.
///
/// The default methods hold the complete tier logic; a strategy normally
/// overrides only the shape hooks (`days_in_month`, `days_in_year`,
/// `months_in_year`, `fixed_months_in_year` and the two ordinal
/// conversions), replacing schema calls with constants or closed-form
/// formulas where its profile allows. The few strategies whose rollover
/// genuinely differs (a 13th month shorter than the step radius, or a
/// disabled month tier) override the affected operation itself.
///
/// Correctness backbone: for every delta, every tier that could resolve it
/// must produce the same result as the slow day-number tier. The fast
/// tiers are performance shortcuts, nothing more.
pub(crate) trait Strategy<S: Schema> {
    fn kernel(&self) -> &Kernel<S>;

    // ---- shape hooks ----

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        self.kernel().schema().days_in_month(year, month)
    }

    fn days_in_year(&self, year: i32) -> u16 {
        self.kernel().schema().days_in_year(year)
    }

    fn months_in_year(&self, year: i32) -> u8 {
        self.kernel().schema().months_in_year(year)
    }

    /// `Some(n)` when the strategy may assume every year has `n` months,
    /// unlocking closed-form month arithmetic.
    fn fixed_months_in_year(&self) -> Option<u8> {
        None
    }

    fn day_of_year(&self, date: DateParts) -> u16 {
        self.kernel()
            .schema()
            .day_of_year(date.year(), date.month(), date.day())
    }

    fn month_and_day(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        self.kernel().schema().month_and_day(year, day_of_year)
    }

    // ---- day arithmetic ----

    /// Three-tier delta classification: within-month, within-year, then
    /// the full day-number conversion.
    fn add_days(&self, date: DateParts, days: i32) -> Result<DateParts, DateOverflow> {
        let kernel = self.kernel();
        if days.unsigned_abs() <= kernel.max_days_via_day_of_month() {
            self.add_days_via_day_of_month(date, days)
        } else if days.unsigned_abs() <= kernel.max_days_via_day_of_year() {
            self.add_days_via_day_of_year(date, days)
        } else {
            kernel.add_days_slow(date, days)
        }
    }

    /// Within-month tier. Precondition: `|days|` does not exceed the
    /// month radius, so the result lies at most one month boundary away.
    fn add_days_via_day_of_month(
        &self,
        date: DateParts,
        days: i32,
    ) -> Result<DateParts, DateOverflow> {
        let kernel = self.kernel();
        let mut year = date.year();
        let mut month = date.month();
        let mut day = date.day() as i32 + days;
        if day < 1 {
            if month == 1 {
                year -= 1;
                kernel.check_min_year(year)?;
                month = self.months_in_year(year);
            } else {
                month -= 1;
            }
            day += self.days_in_month(year, month) as i32;
        } else {
            let len = self.days_in_month(year, month) as i32;
            if day > len {
                day -= len;
                if month == self.months_in_year(year) {
                    year += 1;
                    kernel.check_max_year(year)?;
                    month = 1;
                } else {
                    month += 1;
                }
            }
        }
        Ok(DateParts::new(year, month, day as u8))
    }

    /// Within-year tier: go through (year, day-of-year) coordinates.
    /// Precondition: `|days|` does not exceed the year radius, so at most
    /// one adjacent year is touched.
    fn add_days_via_day_of_year(
        &self,
        date: DateParts,
        days: i32,
    ) -> Result<DateParts, DateOverflow> {
        let doy = self.day_of_year(date);
        let ordinal = self.add_days_ordinal_in_year(OrdinalParts::new(date.year(), doy), days)?;
        let (month, day) = self.month_and_day(ordinal.year(), ordinal.day_of_year());
        Ok(DateParts::new(ordinal.year(), month, day))
    }

    /// Ordinal dates have no month concept, so their `add_days` collapses
    /// to two tiers.
    fn add_days_ordinal(
        &self,
        date: OrdinalParts,
        days: i32,
    ) -> Result<OrdinalParts, DateOverflow> {
        let kernel = self.kernel();
        if days.unsigned_abs() <= kernel.max_days_via_day_of_year() {
            self.add_days_ordinal_in_year(date, days)
        } else {
            kernel.add_days_ordinal_slow(date, days)
        }
    }

    /// Shared rollover for the within-year tier, in ordinal coordinates.
    fn add_days_ordinal_in_year(
        &self,
        date: OrdinalParts,
        days: i32,
    ) -> Result<OrdinalParts, DateOverflow> {
        let kernel = self.kernel();
        let mut year = date.year();
        let mut doy = date.day_of_year() as i32 + days;
        if doy < 1 {
            year -= 1;
            kernel.check_min_year(year)?;
            doy += self.days_in_year(year) as i32;
        } else {
            let len = self.days_in_year(year) as i32;
            if doy > len {
                doy -= len;
                year += 1;
                kernel.check_max_year(year)?;
            }
        }
        Ok(OrdinalParts::new(year, doy as u16))
    }

    /// `add_days(date, 1)` without the delta classification.
    fn next_day(&self, date: DateParts) -> Result<DateParts, DateOverflow> {
        let (year, month, day) = (date.year(), date.month(), date.day());
        Ok(if day < self.days_in_month(year, month) {
            DateParts::new(year, month, day + 1)
        } else if month < self.months_in_year(year) {
            DateParts::new(year, month + 1, 1)
        } else {
            self.kernel().check_max_year(year + 1)?;
            DateParts::new(year + 1, 1, 1)
        })
    }

    fn previous_day(&self, date: DateParts) -> Result<DateParts, DateOverflow> {
        let (mut year, mut month, day) = (date.year(), date.month(), date.day());
        if day > 1 {
            return Ok(DateParts::new(year, month, day - 1));
        }
        if month == 1 {
            year -= 1;
            self.kernel().check_min_year(year)?;
            month = self.months_in_year(year);
        } else {
            month -= 1;
        }
        Ok(DateParts::new(year, month, self.days_in_month(year, month)))
    }

    fn next_day_ordinal(&self, date: OrdinalParts) -> Result<OrdinalParts, DateOverflow> {
        let (year, doy) = (date.year(), date.day_of_year());
        Ok(if doy < self.days_in_year(year) {
            OrdinalParts::new(year, doy + 1)
        } else {
            self.kernel().check_max_year(year + 1)?;
            OrdinalParts::new(year + 1, 1)
        })
    }

    fn previous_day_ordinal(&self, date: OrdinalParts) -> Result<OrdinalParts, DateOverflow> {
        let (year, doy) = (date.year(), date.day_of_year());
        if doy > 1 {
            return Ok(OrdinalParts::new(year, doy - 1));
        }
        self.kernel().check_min_year(year - 1)?;
        Ok(OrdinalParts::new(year - 1, self.days_in_year(year - 1)))
    }

    /// Exact signed day count, `end - start`. Same-month and same-year
    /// cases short-circuit before the day-number subtraction.
    fn count_days_between(&self, start: DateParts, end: DateParts) -> i32 {
        if start.year() == end.year() {
            if start.month() == end.month() {
                return end.day() as i32 - start.day() as i32;
            }
            return self.day_of_year(end) as i32 - self.day_of_year(start) as i32;
        }
        let schema = self.kernel().schema();
        schema.days_since_epoch(end.year(), end.month(), end.day())
            - schema.days_since_epoch(start.year(), start.month(), start.day())
    }

    fn count_days_between_ordinal(&self, start: OrdinalParts, end: OrdinalParts) -> i32 {
        if start.year() == end.year() {
            return end.day_of_year() as i32 - start.day_of_year() as i32;
        }
        let schema = self.kernel().schema();
        schema.days_since_epoch_ordinal(end.year(), end.day_of_year())
            - schema.days_since_epoch_ordinal(start.year(), start.day_of_year())
    }

    // ---- month arithmetic ----

    fn add_months(&self, month: MonthParts, months: i32) -> Result<MonthParts, DateOverflow> {
        let kernel = self.kernel();
        if let Some(n) = self.fixed_months_in_year() {
            let n = n as i64;
            let total = month.month() as i64 - 1 + months as i64;
            let delta_years = total.div_euclid(n);
            let new_month = total.rem_euclid(n) as u8 + 1;
            let year = kernel.checked_year(month.year() as i64 + delta_years)?;
            return Ok(MonthParts::new(year, new_month));
        }
        // No uniform month count, so walk the year boundaries; each step
        // checks the segment so the walk is bounded by the supported range.
        let mut year = month.year();
        let mut m = month.month() as i64 + months as i64;
        loop {
            if m < 1 {
                year -= 1;
                kernel.check_min_year(year)?;
                m += self.months_in_year(year) as i64;
            } else {
                let n = self.months_in_year(year) as i64;
                if m > n {
                    m -= n;
                    year += 1;
                    kernel.check_max_year(year)?;
                } else {
                    break;
                }
            }
        }
        Ok(MonthParts::new(year, m as u8))
    }

    fn count_months_between(&self, start: MonthParts, end: MonthParts) -> i32 {
        if let Some(n) = self.fixed_months_in_year() {
            return ((end.year() as i64 - start.year() as i64) * n as i64 + end.month() as i64
                - start.month() as i64) as i32;
        }
        if start > end {
            return -self.count_months_between(end, start);
        }
        let mut count = end.month() as i64 - start.month() as i64;
        let mut year = start.year();
        while year < end.year() {
            count += self.months_in_year(year) as i64;
            year += 1;
        }
        count as i32
    }

    // ---- clamping (roundoff) arithmetic ----

    /// Year-level addition with the end-of-month adjustment policy: a day
    /// missing from the target month is clamped to the month's last day
    /// and the clamped day count reported.
    fn add_years_to_date(
        &self,
        date: DateParts,
        years: i32,
    ) -> Result<(DateParts, u16), DateOverflow> {
        let year = self
            .kernel()
            .checked_year(date.year() as i64 + years as i64)?;
        let months = self.months_in_year(year);
        if date.month() > months {
            // The whole source month is missing from the target year; land
            // on the last day of that year and report the full source day.
            let day = self.days_in_month(year, months);
            return Ok((DateParts::new(year, months, day), date.day() as u16));
        }
        let len = self.days_in_month(year, date.month());
        if date.day() > len {
            Ok((
                DateParts::new(year, date.month(), len),
                (date.day() - len) as u16,
            ))
        } else {
            Ok((DateParts::new(year, date.month(), date.day()), 0))
        }
    }

    fn add_months_to_date(
        &self,
        date: DateParts,
        months: i32,
    ) -> Result<(DateParts, u16), DateOverflow> {
        let target = self.add_months(date.month_parts(), months)?;
        let len = self.days_in_month(target.year(), target.month());
        if date.day() > len {
            Ok((
                DateParts::new(target.year(), target.month(), len),
                (date.day() - len) as u16,
            ))
        } else {
            Ok((
                DateParts::new(target.year(), target.month(), date.day()),
                0,
            ))
        }
    }

    fn add_years_to_ordinal(
        &self,
        date: OrdinalParts,
        years: i32,
    ) -> Result<(OrdinalParts, u16), DateOverflow> {
        let year = self
            .kernel()
            .checked_year(date.year() as i64 + years as i64)?;
        let len = self.days_in_year(year);
        if date.day_of_year() > len {
            Ok((OrdinalParts::new(year, len), date.day_of_year() - len))
        } else {
            Ok((OrdinalParts::new(year, date.day_of_year()), 0))
        }
    }

    fn add_months_to_ordinal(
        &self,
        date: OrdinalParts,
        months: i32,
    ) -> Result<(OrdinalParts, u16), DateOverflow> {
        let (month, day) = self.month_and_day(date.year(), date.day_of_year());
        let (result, roundoff) =
            self.add_months_to_date(DateParts::new(date.year(), month, day), months)?;
        Ok((
            OrdinalParts::new(result.year(), self.day_of_year(result)),
            roundoff,
        ))
    }

    /// Month form: clamps to the last month of the target year and reports
    /// the clamped month count.
    fn add_years_to_month(
        &self,
        month: MonthParts,
        years: i32,
    ) -> Result<(MonthParts, u8), DateOverflow> {
        let year = self
            .kernel()
            .checked_year(month.year() as i64 + years as i64)?;
        let months = self.months_in_year(year);
        if month.month() > months {
            Ok((MonthParts::new(year, months), month.month() - months))
        } else {
            Ok((MonthParts::new(year, month.month()), 0))
        }
    }
}
