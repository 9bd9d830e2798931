use crate::error::InvalidSchemaError;
use crate::schema::{Profile, Schema};

use super::kernel::Kernel;
use super::strategy::Strategy;

/// Lunisolar months are lunar months, but an embolismic year squeezes the
/// year minimum slightly below the lunar one.
pub(crate) const LUNISOLAR_MIN_DAYS_IN_MONTH: u32 = 29;
pub(crate) const LUNISOLAR_MIN_DAYS_IN_YEAR: u32 = 353;

/// Fast path for lunisolar calendars. The month count varies per year
/// (intercalary months), so the last month of a year is queried from the
/// schema for every rollover instead of being assumed constant, and month
/// arithmetic walks year boundaries.
#[derive(Debug)]
pub struct LunisolarArithmetic<S: Schema> {
    kernel: Kernel<S>,
}

impl<S: Schema> LunisolarArithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        if schema.is_regular().is_some() {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Lunisolar,
                reason: "expected a month count that varies per year",
            });
        }
        if (schema.min_days_in_month() as u32) < LUNISOLAR_MIN_DAYS_IN_MONTH
            || (schema.min_days_in_year() as u32) < LUNISOLAR_MIN_DAYS_IN_YEAR
        {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Lunisolar,
                reason: "lunisolar months have at least 29 days and years at least 353",
            });
        }
        Ok(LunisolarArithmetic {
            kernel: Kernel::new(
                schema,
                LUNISOLAR_MIN_DAYS_IN_MONTH,
                LUNISOLAR_MIN_DAYS_IN_YEAR,
            )?,
        })
    }
}

impl<S: Schema> Strategy<S> for LunisolarArithmetic<S> {
    fn kernel(&self) -> &Kernel<S> {
        &self.kernel
    }
}
