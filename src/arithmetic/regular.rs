use crate::error::InvalidSchemaError;
use crate::schema::{Profile, Schema};

use super::kernel::Kernel;
use super::strategy::Strategy;
use super::MIN_MIN_DAYS_IN_MONTH;

/// Fallback strategy for unprofiled schemas with a uniform month count:
/// month arithmetic is modulo the fixed count, and the radii come from the
/// schema's declared minimum month and year lengths.
#[derive(Debug)]
pub struct RegularArithmetic<S: Schema> {
    kernel: Kernel<S>,
    month_count: u8,
}

impl<S: Schema> RegularArithmetic<S> {
    pub(crate) fn new(schema: S) -> Result<Self, InvalidSchemaError> {
        let Some(month_count) = schema.is_regular() else {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Other,
                reason: "expected a uniform month count",
            });
        };
        if schema.min_days_in_month() < MIN_MIN_DAYS_IN_MONTH {
            return Err(InvalidSchemaError::ProfileMismatch {
                profile: Profile::Other,
                reason: "months must be at least 7 days long for the month fast path",
            });
        }
        let month_radius = schema.min_days_in_month() as u32;
        let year_radius = schema.min_days_in_year() as u32;
        Ok(RegularArithmetic {
            kernel: Kernel::new(schema, month_radius, year_radius)?,
            month_count,
        })
    }
}

impl<S: Schema> Strategy<S> for RegularArithmetic<S> {
    fn kernel(&self) -> &Kernel<S> {
        &self.kernel
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        self.month_count
    }

    fn fixed_months_in_year(&self) -> Option<u8> {
        Some(self.month_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{DateParts, MonthParts};
    use crate::testing::{slow_add_days, DecimalSchema};

    fn arith() -> RegularArithmetic<DecimalSchema> {
        RegularArithmetic::new(DecimalSchema).unwrap()
    }

    #[test]
    fn rejects_irregular_schemas() {
        assert!(matches!(
            RegularArithmetic::new(crate::testing::EmbolismicSchema),
            Err(InvalidSchemaError::ProfileMismatch { .. })
        ));
    }

    #[test]
    fn rejects_short_months() {
        assert!(matches!(
            RegularArithmetic::new(crate::testing::ShortMonthSchema),
            Err(InvalidSchemaError::ProfileMismatch { .. })
        ));
    }

    #[test]
    fn day_arithmetic_with_ten_months() {
        let arith = arith();
        // Months 1-9 have 36 days, month 10 has 41.
        let d = DateParts::new(5, 9, 36);
        assert_eq!(arith.add_days(d, 1).unwrap(), DateParts::new(5, 10, 1));
        assert_eq!(arith.add_days(d, 41).unwrap(), DateParts::new(5, 10, 41));
        assert_eq!(arith.add_days(d, 42).unwrap(), DateParts::new(6, 1, 1));
        assert_eq!(
            arith.previous_day(DateParts::new(6, 1, 1)).unwrap(),
            DateParts::new(5, 10, 41)
        );
    }

    #[test]
    fn tiers_agree_with_slow_path() {
        let arith = arith();
        let schema = DecimalSchema;
        for start in [DateParts::new(1, 1, 1), DateParts::new(7, 10, 41)] {
            for days in [-365, -36, -1, 0, 1, 35, 36, 37, 364, 365, 366, 5000] {
                assert_eq!(
                    arith.add_days(start, days),
                    slow_add_days(&schema, start, days),
                    "start {start} days {days}"
                );
            }
        }
    }

    #[test]
    fn month_arithmetic_is_modulo_the_fixed_count() {
        let arith = arith();
        let ym = MonthParts::new(4, 8);
        assert_eq!(arith.add_months(ym, 5).unwrap(), MonthParts::new(5, 3));
        assert_eq!(arith.add_months(ym, -8).unwrap(), MonthParts::new(3, 10));
        assert_eq!(
            arith.count_months_between(MonthParts::new(3, 10), MonthParts::new(5, 3)),
            13
        );
    }
}
