use crate::error::InvalidSchemaError;
use crate::schema::{Profile, Schema};

use super::kernel::Kernel;
use super::strategy::Strategy;

/// A lunar month has at least 29 days, a 12-month lunar year at least 354.
pub(crate) const LUNAR_MIN_DAYS_IN_MONTH: u32 = 29;
pub(crate) const LUNAR_MIN_DAYS_IN_YEAR: u32 = 354;

/// Fast path for fixed 12-month lunar years; the radii come from the
/// lunar month-length constants.
#[derive(Debug)]
pub struct LunarArithmetic<S: Schema> {
    kernel: Kernel<S>,
}

impl<S: Schema> LunarArithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        if schema.is_regular() != Some(12) {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Lunar,
                reason: "expected a fixed 12-month year",
            });
        }
        if (schema.min_days_in_month() as u32) < LUNAR_MIN_DAYS_IN_MONTH
            || (schema.min_days_in_year() as u32) < LUNAR_MIN_DAYS_IN_YEAR
        {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Lunar,
                reason: "lunar months have at least 29 days and years at least 354",
            });
        }
        Ok(LunarArithmetic {
            kernel: Kernel::new(schema, LUNAR_MIN_DAYS_IN_MONTH, LUNAR_MIN_DAYS_IN_YEAR)?,
        })
    }
}

impl<S: Schema> Strategy<S> for LunarArithmetic<S> {
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
