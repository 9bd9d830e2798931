use crate::error::InvalidSchemaError;
use crate::parts::DateParts;
use crate::schema::{Profile, Schema};
use crate::schemas::gregorian;

use super::kernel::Kernel;
use super::solar::{SOLAR_MIN_DAYS_IN_MONTH, SOLAR_MIN_DAYS_IN_YEAR};
use super::strategy::Strategy;

/// Specialization of the 12-month solar fast path for the proleptic civil
/// calendar: month and year lengths come from the closed-form helpers in
/// [`crate::schemas::gregorian`] instead of schema calls. Selected only
/// for schemas that opt in via
/// [`Schema::is_proleptic_gregorian`], which promises those formulas and
/// the schema agree exactly.
#[derive(Debug)]
pub struct GregorianArithmetic<S: Schema> {
    kernel: Kernel<S>,
}

impl<S: Schema> GregorianArithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        if !schema.is_proleptic_gregorian() || schema.is_regular() != Some(12) {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Solar12,
                reason: "expected the proleptic civil calendar",
            });
        }
        Ok(GregorianArithmetic {
            kernel: Kernel::new(schema, SOLAR_MIN_DAYS_IN_MONTH, SOLAR_MIN_DAYS_IN_YEAR)?,
        })
    }
}

impl<S: Schema> Strategy<S> for GregorianArithmetic<S> {
    fn kernel(&self) -> &Kernel<S> {
        &self.kernel
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        gregorian::days_in_month(year, month)
    }

    fn days_in_year(&self, year: i32) -> u16 {
        gregorian::days_in_year(year)
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn fixed_months_in_year(&self) -> Option<u8> {
        Some(12)
    }

    fn day_of_year(&self, date: DateParts) -> u16 {
        gregorian::day_of_year(date.year(), date.month(), date.day())
    }

    fn month_and_day(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        gregorian::month_and_day(year, day_of_year)
    }
}
