//! Fake schemas for exercising each strategy, plus an independent
//! day-number oracle the fast tiers are checked against.

use std::ops::RangeInclusive;

use num_integer::Integer;

use crate::error::DateOverflow;
use crate::parts::DateParts;
use crate::schema::{Profile, Schema};
use crate::schemas::gregorian;
use crate::segment::Segment;

/// Day-number arithmetic with no tier shortcuts. Deliberately rebuilt from
/// the schema primitives rather than shared with the engine, so a bug in
/// the tier logic cannot cancel itself out.
pub(crate) fn slow_add_days<S: Schema>(
    schema: &S,
    date: DateParts,
    days: i32,
) -> Result<DateParts, DateOverflow> {
    let segment = Segment::new(schema).expect("oracle schema must be valid");
    let dse = schema.days_since_epoch(date.year(), date.month(), date.day());
    let dse = dse.checked_add(days).ok_or(DateOverflow)?;
    if !segment.contains_day(dse) {
        return Err(DateOverflow);
    }
    let (year, month, day) = schema.date_parts_at(dse);
    Ok(DateParts::new(year, month, day))
}

/// The civil calendar restricted to a caller-chosen year range. `new`
/// leaves the specialized fast-path hook on; `generic` turns it off so the
/// generic 12-month solar strategy is selected for the same shape.
#[derive(Debug, Clone)]
pub(crate) struct BoundedCivilSchema {
    years: RangeInclusive<i32>,
    proleptic_gregorian: bool,
}

impl BoundedCivilSchema {
    pub(crate) fn new(years: RangeInclusive<i32>) -> Self {
        BoundedCivilSchema {
            years,
            proleptic_gregorian: true,
        }
    }

    pub(crate) fn generic(years: RangeInclusive<i32>) -> Self {
        BoundedCivilSchema {
            years,
            proleptic_gregorian: false,
        }
    }
}

impl Schema for BoundedCivilSchema {
    fn profile(&self) -> Profile {
        Profile::Solar12
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    fn min_days_in_month(&self) -> u8 {
        28
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn is_regular(&self) -> Option<u8> {
        Some(12)
    }

    fn is_proleptic_gregorian(&self) -> bool {
        self.proleptic_gregorian
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn days_in_year(&self, year: i32) -> u16 {
        gregorian::days_in_year(year)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        gregorian::days_in_month(year, month)
    }

    fn day_of_year(&self, year: i32, month: u8, day: u8) -> u16 {
        gregorian::day_of_year(year, month, day)
    }

    fn month_and_day(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        gregorian::month_and_day(year, day_of_year)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        gregorian::days_since_epoch(year, 1, 1) + day_of_year as i32 - 1
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        let (year, month, day) = gregorian::date_parts_at(days_since_epoch);
        (year, gregorian::day_of_year(year, month, day))
    }

    fn days_since_epoch(&self, year: i32, month: u8, day: u8) -> i32 {
        gregorian::days_since_epoch(year, month, day)
    }

    fn date_parts_at(&self, days_since_epoch: i32) -> (i32, u8, u8) {
        gregorian::date_parts_at(days_since_epoch)
    }
}

/// A lunisolar fake: every third year (those divisible by 3) gains a 13th
/// month. Months alternate 30 and 29 days, both the 1st and the 13th being
/// 30-day months, so years have 354 or 384 days. Epoch is 0001-01-01.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmbolismicSchema;

impl EmbolismicSchema {
    fn is_embolismic(year: i32) -> bool {
        year.rem_euclid(3) == 0
    }

    fn days_before_month(month: u8) -> u16 {
        29 * (month as u16 - 1) + month as u16 / 2
    }

    fn days_before_year(year: i32) -> i64 {
        let year = year as i64;
        354 * (year - 1) + 30 * Integer::div_floor(&(year - 1), &3)
    }
}

impl Schema for EmbolismicSchema {
    fn profile(&self) -> Profile {
        Profile::Lunisolar
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        crate::parts::MIN_YEAR..=crate::parts::MAX_YEAR
    }

    fn min_days_in_month(&self) -> u8 {
        29
    }

    fn min_days_in_year(&self) -> u16 {
        354
    }

    fn is_regular(&self) -> Option<u8> {
        None
    }

    fn months_in_year(&self, year: i32) -> u8 {
        if Self::is_embolismic(year) {
            13
        } else {
            12
        }
    }

    fn days_in_year(&self, year: i32) -> u16 {
        if Self::is_embolismic(year) {
            384
        } else {
            354
        }
    }

    fn days_in_month(&self, _year: i32, month: u8) -> u8 {
        if month % 2 == 1 {
            30
        } else {
            29
        }
    }

    fn day_of_year(&self, _year: i32, month: u8, day: u8) -> u16 {
        Self::days_before_month(month) + day as u16
    }

    fn month_and_day(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        let count = self.months_in_year(year);
        let mut month = (((day_of_year - 1) / 29) as u8 + 1).min(count);
        while Self::days_before_month(month) >= day_of_year {
            month -= 1;
        }
        (month, (day_of_year - Self::days_before_month(month)) as u8)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        (Self::days_before_year(year) + day_of_year as i64 - 1) as i32
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        // Three years average 1092 days; the estimate is off by at most
        // one year either way.
        let dse = days_since_epoch as i64;
        let mut year = Integer::div_floor(&(3 * dse), &1092) as i32 + 1;
        while dse < Self::days_before_year(year) {
            year -= 1;
        }
        while dse >= Self::days_before_year(year + 1) {
            year += 1;
        }
        (year, (dse - Self::days_before_year(year) + 1) as u16)
    }
}

/// A regular unprofiled fake: ten months per year, nine of 36 days and a
/// last of 41, every year 365 days. Epoch is 0001-01-01.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DecimalSchema;

impl Schema for DecimalSchema {
    fn profile(&self) -> Profile {
        Profile::Other
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        crate::parts::MIN_YEAR..=crate::parts::MAX_YEAR
    }

    fn min_days_in_month(&self) -> u8 {
        36
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn is_regular(&self) -> Option<u8> {
        Some(10)
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        10
    }

    fn days_in_year(&self, _year: i32) -> u16 {
        365
    }

    fn days_in_month(&self, _year: i32, month: u8) -> u8 {
        if month == 10 {
            41
        } else {
            36
        }
    }

    fn day_of_year(&self, _year: i32, month: u8, day: u8) -> u16 {
        36 * (month as u16 - 1) + day as u16
    }

    fn month_and_day(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        let month = (((day_of_year - 1) / 36) as u8 + 1).min(10);
        (month, (day_of_year - 36 * (month as u16 - 1)) as u8)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        (365 * (year as i64 - 1) + day_of_year as i64 - 1) as i32
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        let dse = days_since_epoch as i64;
        let year = Integer::div_floor(&dse, &365) + 1;
        (year as i32, (dse - 365 * (year - 1) + 1) as u16)
    }
}

/// An irregular unprofiled fake: even years have eleven 30-day months,
/// odd years ten. Epoch is 0001-01-01.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IrregularSchema;

impl IrregularSchema {
    fn days_before_year(year: i32) -> i64 {
        let year = year as i64;
        300 * (year - 1) + 30 * Integer::div_floor(&(year - 1), &2)
    }
}

impl Schema for IrregularSchema {
    fn profile(&self) -> Profile {
        Profile::Other
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        crate::parts::MIN_YEAR..=crate::parts::MAX_YEAR
    }

    fn min_days_in_month(&self) -> u8 {
        30
    }

    fn min_days_in_year(&self) -> u16 {
        300
    }

    fn is_regular(&self) -> Option<u8> {
        None
    }

    fn months_in_year(&self, year: i32) -> u8 {
        if year % 2 == 0 {
            11
        } else {
            10
        }
    }

    fn days_in_year(&self, year: i32) -> u16 {
        30 * self.months_in_year(year) as u16
    }

    fn days_in_month(&self, _year: i32, _month: u8) -> u8 {
        30
    }

    fn day_of_year(&self, _year: i32, month: u8, day: u8) -> u16 {
        30 * (month as u16 - 1) + day as u16
    }

    fn month_and_day(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        let month = ((day_of_year - 1) / 30) as u8 + 1;
        (month, (day_of_year - 30 * (month as u16 - 1)) as u8)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        (Self::days_before_year(year) + day_of_year as i64 - 1) as i32
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        // Two years average 630 days.
        let dse = days_since_epoch as i64;
        let mut year = Integer::div_floor(&(2 * dse), &630) as i32 + 1;
        while dse < Self::days_before_year(year) {
            year -= 1;
        }
        while dse >= Self::days_before_year(year + 1) {
            year += 1;
        }
        (year, (dse - Self::days_before_year(year) + 1) as u16)
    }
}

/// A fake whose even months are only 5 days long (odd months are 40),
/// short enough to defeat the within-month tier. Every year has 12 months
/// and 270 days. Epoch is 0001-01-01.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ShortMonthSchema;

impl ShortMonthSchema {
    fn days_before_month(month: u8) -> u16 {
        let pairs = (month as u16 - 1) / 2;
        45 * pairs + if month % 2 == 0 { 40 } else { 0 }
    }
}

impl Schema for ShortMonthSchema {
    fn profile(&self) -> Profile {
        Profile::Other
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        crate::parts::MIN_YEAR..=crate::parts::MAX_YEAR
    }

    fn min_days_in_month(&self) -> u8 {
        5
    }

    fn min_days_in_year(&self) -> u16 {
        270
    }

    fn is_regular(&self) -> Option<u8> {
        Some(12)
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn days_in_year(&self, _year: i32) -> u16 {
        270
    }

    fn days_in_month(&self, _year: i32, month: u8) -> u8 {
        if month % 2 == 1 {
            40
        } else {
            5
        }
    }

    fn day_of_year(&self, _year: i32, month: u8, day: u8) -> u16 {
        Self::days_before_month(month) + day as u16
    }

    fn month_and_day(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        let mut month = 12;
        while Self::days_before_month(month) >= day_of_year {
            month -= 1;
        }
        (month, (day_of_year - Self::days_before_month(month)) as u8)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        (270 * (year as i64 - 1) + day_of_year as i64 - 1) as i32
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        let dse = days_since_epoch as i64;
        let year = Integer::div_floor(&dse, &270) + 1;
        (year as i32, (dse - 270 * (year - 1) + 1) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fakes_are_internally_consistent() {
        fn check<S: Schema>(schema: &S, years: std::ops::Range<i32>) {
            for year in years {
                let months = schema.months_in_year(year);
                let total: u32 = (1..=months)
                    .map(|m| schema.days_in_month(year, m) as u32)
                    .sum();
                assert_eq!(total, schema.days_in_year(year) as u32, "year {year}");
                for doy in 1..=schema.days_in_year(year) {
                    let (m, d) = schema.month_and_day(year, doy);
                    assert_eq!(schema.day_of_year(year, m, d), doy, "year {year} doy {doy}");
                    let dse = schema.days_since_epoch_ordinal(year, doy);
                    assert_eq!(schema.ordinal_parts_at(dse), (year, doy));
                }
            }
        }
        check(&EmbolismicSchema, -4..8);
        check(&DecimalSchema, -2..4);
        check(&IrregularSchema, -2..5);
        check(&ShortMonthSchema, -2..4);
    }

    #[test]
    fn embolismic_year_shape() {
        let schema = EmbolismicSchema;
        assert_eq!(schema.months_in_year(3), 13);
        assert_eq!(schema.months_in_year(4), 12);
        assert_eq!(schema.days_in_year(3), 384);
        assert_eq!(schema.days_in_year(4), 354);
        assert_eq!(schema.days_in_month(3, 13), 30);
        assert_eq!(schema.end_of_year_parts(4), (12, 29));
    }

    #[test]
    fn oracle_matches_hand_counts() {
        let schema = BoundedCivilSchema::new(1..=9999);
        assert_eq!(
            slow_add_days(&schema, DateParts::new(2020, 2, 28), 2),
            Ok(DateParts::new(2020, 3, 1))
        );
        assert_eq!(
            slow_add_days(&schema, DateParts::new(9999, 12, 31), 1),
            Err(DateOverflow)
        );
    }
}
