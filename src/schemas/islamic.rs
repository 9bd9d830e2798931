// The tabular Islamic calendar is a purely arithmetical lunar calendar:
// twelve months alternating 30 and 29 days, with a 30th day added to the
// last month in 11 leap years of every 30-year cycle. A cycle therefore
// has 30*354 + 11 = 10631 days. The leap-year pattern used here is the
// most common one (leap when (11y + 14) mod 30 < 11, i.e. years 2, 5, 7,
// 10, 13, 16, 18, 21, 24, 26 and 29 of the cycle). Day-number 0 is
// 0001-01-01.

use std::ops::RangeInclusive;

use num_integer::Integer;

use crate::parts;
use crate::schema::{Profile, Schema};

const DAYS_PER_CYCLE: i64 = 30 * 354 + 11;

fn is_leap_year(year: i32) -> bool {
    (11 * year as i64 + 14).rem_euclid(30) < 11
}

fn days_before_year(year: i32) -> i64 {
    let year = year as i64;
    354 * (year - 1) + Integer::div_floor(&(11 * year + 3), &30)
}

fn days_before_month(month: u8) -> u16 {
    29 * (month as u16 - 1) + month as u16 / 2
}

/// The tabular (arithmetical) Islamic calendar. Epoch (day-number 0) is
/// 0001-01-01.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularIslamicSchema;

impl Schema for TabularIslamicSchema {
    fn profile(&self) -> Profile {
        Profile::Lunar
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        parts::MIN_YEAR..=parts::MAX_YEAR
    }

    fn min_days_in_month(&self) -> u8 {
        29
    }

    fn min_days_in_year(&self) -> u16 {
        354
    }

    fn is_regular(&self) -> Option<u8> {
        Some(12)
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn days_in_year(&self, year: i32) -> u16 {
        if is_leap_year(year) {
            355
        } else {
            354
        }
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
            30
        } else {
            29
        }
    }

    fn day_of_year(&self, _year: i32, month: u8, day: u8) -> u16 {
        days_before_month(month) + day as u16
    }

    fn month_and_day(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        // Guess the month from the offset, then move back if we overshot.
        let mut month = (((day_of_year - 1) / 29) as u8 + 1).min(12);
        while days_before_month(month) >= day_of_year {
            month -= 1;
        }
        (month, (day_of_year - days_before_month(month)) as u8)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        (days_before_year(year) + day_of_year as i64 - 1) as i32
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        let shifted = 30 * days_since_epoch as i64 + 10_646;
        let year = Integer::div_floor(&shifted, &DAYS_PER_CYCLE) as i32;
        let doy = days_since_epoch as i64 - days_before_year(year) + 1;
        (year, doy as u16)
    }
}
