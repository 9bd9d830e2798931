// The Coptic calendar has twelve 30-day months followed by a short
// epagomenal month of 5 days, 6 in leap years. Leap years are every 4th
// year, placed so that year y is leap when y mod 4 == 3; there is no
// century correction, so the whole calendar is a plain 1461-day
// quadrennium repeated forever. Day-number 0 is 0001-01-01.

use std::ops::RangeInclusive;

use num_integer::Integer;

use crate::parts;
use crate::schema::{Profile, Schema};

const DAYS_PER_QUADRENNIUM: i64 = 4 * 365 + 1;

fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

fn days_before_year(year: i32) -> i64 {
    let year = year as i64;
    // Leap years at y mod 4 == 3 put floor(y/4) leap days before year y.
    365 * (year - 1) + Integer::div_floor(&year, &4)
}

/// The Coptic calendar with the epagomenal days counted as a thirteenth
/// month. Epoch (day-number 0) is 0001-01-01.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coptic13Schema;

impl Schema for Coptic13Schema {
    fn profile(&self) -> Profile {
        Profile::Solar13
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        parts::MIN_YEAR..=parts::MAX_YEAR
    }

    fn min_days_in_month(&self) -> u8 {
        5
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn is_regular(&self) -> Option<u8> {
        Some(13)
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        13
    }

    fn days_in_year(&self, year: i32) -> u16 {
        if is_leap_year(year) {
            366
        } else {
            365
        }
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        if month < 13 {
            30
        } else if is_leap_year(year) {
            6
        } else {
            5
        }
    }

    fn day_of_year(&self, _year: i32, month: u8, day: u8) -> u16 {
        30 * (month as u16 - 1) + day as u16
    }

    fn month_and_day(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        let month = ((day_of_year - 1) / 30 + 1).min(13) as u8;
        (month, (day_of_year - 30 * (month as u16 - 1)) as u8)
    }

    fn days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        (days_before_year(year) + day_of_year as i64 - 1) as i32
    }

    fn ordinal_parts_at(&self, days_since_epoch: i32) -> (i32, u16) {
        // Invert days_before_year: within a 1461-day quadrennium the year
        // index is a plain division because the leap day comes last.
        let shifted = 4 * days_since_epoch as i64 + 1463;
        let year = Integer::div_floor(&shifted, &DAYS_PER_QUADRENNIUM) as i32;
        let doy = days_since_epoch as i64 - days_before_year(year) + 1;
        (year, doy as u16)
    }
}
