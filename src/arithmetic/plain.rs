use crate::error::{DateOverflow, InvalidSchemaError};
use crate::parts::DateParts;
use crate::schema::{Profile, Schema};

use super::kernel::Kernel;
use super::strategy::Strategy;
use super::MIN_MIN_DAYS_IN_MONTH;

/// Fallback strategy for unprofiled schemas with a varying month count.
/// Nothing is assumed beyond the schema's declared minimums, which become
/// the tier radii directly.
#[derive(Debug)]
pub struct PlainArithmetic<S: Schema> {
    kernel: Kernel<S>,
}

impl<S: Schema> PlainArithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        if schema.min_days_in_month() < MIN_MIN_DAYS_IN_MONTH {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Other,
                reason: "months must be at least 7 days long for the month fast path",
            });
        }
        let month_radius = schema.min_days_in_month() as u32;
        let year_radius = schema.min_days_in_year() as u32;
        Ok(PlainArithmetic {
            kernel: Kernel::new(schema, month_radius, year_radius)?,
        })
    }
}

impl<S: Schema> Strategy<S> for PlainArithmetic<S> {
    fn kernel(&self) -> &Kernel<S> {
        &self.kernel
    }
}

/// Last-resort strategy for schemas whose shortest month is too short for
/// the single-rollover invariant of the within-month tier. That tier is
/// disabled outright; day arithmetic classifies into the within-year tier
/// and the day-number tier only.
#[derive(Debug)]
pub struct PlainSlowArithmetic<S: Schema> {
    kernel: Kernel<S>,
}

impl<S: Schema> PlainSlowArithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        let year_radius = schema.min_days_in_year() as u32;
        Ok(PlainSlowArithmetic {
            kernel: Kernel::new(schema, 0, year_radius)?,
        })
    }
}

impl<S: Schema> Strategy<S> for PlainSlowArithmetic<S> {
    fn kernel(&self) -> &Kernel<S> {
        &self.kernel
    }

    fn add_days(&self, date: DateParts, days: i32) -> Result<DateParts, DateOverflow> {
        let kernel = self.kernel();
        if days.unsigned_abs() <= kernel.max_days_via_day_of_year() {
            self.add_days_via_day_of_year(date, days)
        } else {
            kernel.add_days_slow(date, days)
        }
    }
}
