// The Gregorian calendar works in cycles of 400 years with 97 leap years
// and 303 normal years each, 97*366 + 303*365 = 146097 days. The
// conversions below shift the year so that it starts on March 1: that puts
// the leap day at the very end of the shifted year, so month lengths
// become independent of the leap rule and the leap days fall out of plain
// integer division. Day-numbers are days since 1970-01-01, which lies
// 719468 days after 0000-03-01, the start of a shifted cycle.

use std::ops::RangeInclusive;

use num_integer::Integer;

use crate::parts;
use crate::schema::{Profile, Schema};

pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;
const YEARS_PER_CYCLE: i64 = 400;
// 1970-01-01 relative to 0000-03-01.
const EPOCH_SHIFT_DAYS: i64 = 719_468;

// Days into a common year before each month, index = month number.
const DAYS_BEFORE_MONTH: [u16; 13] = [
    0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334,
];

pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub(crate) fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let leap_shift = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[month as usize] + leap_shift + day as u16
}

pub(crate) fn month_and_day(year: i32, day_of_year: u16) -> (u8, u8) {
    let mut doy = day_of_year;
    if is_leap_year(year) && doy >= 60 {
        if doy == 60 {
            return (2, 29);
        }
        // Work in common-year coordinates past the leap day.
        doy -= 1;
    }
    // Guess the month from the offset, then move back if we overshot.
    let mut month = ((doy - 1) / 29 + 1) as u8;
    if month > 12 || DAYS_BEFORE_MONTH[month as usize] >= doy {
        month -= 1;
    }
    (month, (doy - DAYS_BEFORE_MONTH[month as usize]) as u8)
}

pub(crate) fn days_since_epoch(year: i32, month: u8, day: u8) -> i32 {
    // Shift so the year starts in March and the leap day comes last.
    let year = year as i64 - if month <= 2 { 1 } else { 0 };
    let (cycle, year_of_cycle) = year.div_mod_floor(&YEARS_PER_CYCLE);
    let shifted_month = (month as i64 + 9) % 12; // March = 0
    let day_of_shifted_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_cycle =
        365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100 + day_of_shifted_year;
    (cycle * DAYS_PER_CYCLE + day_of_cycle - EPOCH_SHIFT_DAYS) as i32
}

pub(crate) fn date_parts_at(days_since_epoch: i32) -> (i32, u8, u8) {
    let shifted = days_since_epoch as i64 + EPOCH_SHIFT_DAYS;
    let (cycle, day_of_cycle) = shifted.div_mod_floor(&DAYS_PER_CYCLE);
    // Leap days sit at the end of each quadrennium, century and cycle, so
    // the year index falls out of plain division after removing them.
    let year_of_cycle =
        (day_of_cycle - day_of_cycle / 1460 + day_of_cycle / 36_524 - day_of_cycle / 146_096) / 365;
    let day_of_shifted_year =
        day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
    let shifted_month = (5 * day_of_shifted_year + 2) / 153;
    let day = (day_of_shifted_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    } as u8;
    let year = cycle * YEARS_PER_CYCLE + year_of_cycle + if month <= 2 { 1 } else { 0 };
    (year as i32, month, day)
}

/// The proleptic civil calendar: January-based years, the usual month
/// lengths and the 4/100/400 leap rule, valid over the whole representable
/// year range. Epoch (day-number 0) is 1970-01-01.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianSchema;

impl Schema for GregorianSchema {
    fn profile(&self) -> Profile {
        Profile::Solar12
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        parts::MIN_YEAR..=parts::MAX_YEAR
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
        true
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn days_in_year(&self, year: i32) -> u16 {
        days_in_year(year)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        days_in_month(year, month)
    }

    fn day_of_year(&self, year: i32, month: u8, day: u8) -> u16 {
        day_of_year(year, month, day)
    }

    fn month_and_day(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        month_and_day(year, day_of_year)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        days_since_epoch(year, 1, 1) + day_of_year as i32 - 1
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        let (year, month, day) = date_parts_at(days_since_epoch);
        (year, day_of_year(year, month, day))
    }

    fn days_since_epoch(&self, year: i32, month: u8, day: u8) -> i32 {
        days_since_epoch(year, month, day)
    }

    fn date_parts_at(&self, days_since_epoch: i32) -> (i32, u8, u8) {
        date_parts_at(days_since_epoch)
    }
}
