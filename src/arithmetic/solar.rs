use crate::error::{DateOverflow, InvalidSchemaError};
use crate::parts::DateParts;
use crate::schema::{Profile, Schema};

use super::kernel::Kernel;
use super::strategy::Strategy;

/// Every month of a solar calendar has at least 28 days (February), every
/// year at least 365. The radii for both solar profiles derive from these
/// rather than from the schema's declared minimums, so a 13-month schema
/// whose epagomenal month is short still gets the full-width fast path.
pub(crate) const SOLAR_MIN_DAYS_IN_MONTH: u32 = 28;
pub(crate) const SOLAR_MIN_DAYS_IN_YEAR: u32 = 365;

/// Generic fast path for fixed 12-month solar years.
#[derive(Debug)]
pub struct Solar12Arithmetic<S: Schema> {
    kernel: Kernel<S>,
}

impl<S: Schema> Solar12Arithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        if schema.is_regular() != Some(12) {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Solar12,
                reason: "expected a fixed 12-month year",
            });
        }
        if (schema.min_days_in_month() as u32) < SOLAR_MIN_DAYS_IN_MONTH
            || (schema.min_days_in_year() as u32) < SOLAR_MIN_DAYS_IN_YEAR
        {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Solar12,
                reason: "solar months have at least 28 days and years at least 365",
            });
        }
        Ok(Solar12Arithmetic {
            kernel: Kernel::new(schema, SOLAR_MIN_DAYS_IN_MONTH, SOLAR_MIN_DAYS_IN_YEAR)?,
        })
    }
}

impl<S: Schema> Strategy<S> for Solar12Arithmetic<S> {
    fn kernel(&self) -> &Kernel<S> {
        &self.kernel
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn fixed_months_in_year(&self) -> Option<u8> {
        Some(12)
    }
}

/// Fast path for fixed 13-month solar years: twelve ordinary months plus a
/// 13th that may be much shorter than the step radius.
#[derive(Debug)]
pub struct Solar13Arithmetic<S: Schema> {
    kernel: Kernel<S>,
}

impl<S: Schema> Solar13Arithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        if schema.is_regular() != Some(13) {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Solar13,
                reason: "expected a fixed 13-month year",
            });
        }
        if (schema.min_days_in_year() as u32) < SOLAR_MIN_DAYS_IN_YEAR {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Solar13,
                reason: "solar years have at least 365 days",
            });
        }
        Ok(Solar13Arithmetic {
            kernel: Kernel::new(schema, SOLAR_MIN_DAYS_IN_MONTH, SOLAR_MIN_DAYS_IN_YEAR)?,
        })
    }
}

impl<S: Schema> Strategy<S> for Solar13Arithmetic<S> {
    fn kernel(&self) -> &Kernel<S> {
        &self.kernel
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        13
    }

    fn fixed_months_in_year(&self) -> Option<u8> {
        Some(13)
    }

    // The 13th month can be shorter than the step radius, so a step may
    // cross it entirely; walk the month boundaries instead of assuming a
    // single rollover. The walk still touches at most one year boundary
    // because the radius is far below the year length.
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
            while day < 1 {
                if month == 1 {
                    year -= 1;
                    kernel.check_min_year(year)?;
                    month = 13;
                } else {
                    month -= 1;
                }
                day += self.days_in_month(year, month) as i32;
            }
        } else {
            let mut len = self.days_in_month(year, month) as i32;
            while day > len {
                day -= len;
                if month == 13 {
                    year += 1;
                    kernel.check_max_year(year)?;
                    month = 1;
                } else {
                    month += 1;
                }
                len = self.days_in_month(year, month) as i32;
            }
        }
        Ok(DateParts::new(year, month, day as u8))
    }
}
