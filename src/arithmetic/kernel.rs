use crate::error::{DateOverflow, InvalidSchemaError};
use crate::factory::PartsFactory;
use crate::parts::{DateParts, OrdinalParts};
use crate::schema::Schema;
use crate::segment::Segment;

/// State shared by every profile strategy: the schema, its precomputed
/// segment, and the two fast-path radii. Immutable after construction, so
/// a strategy can be shared across threads freely.
#[derive(Debug)]
pub(crate) struct Kernel<S: Schema> {
    schema: S,
    segment: Segment,
    max_days_via_day_of_month: u32,
    max_days_via_day_of_year: u32,
}

impl<S: Schema> Kernel<S> {
    pub(crate) fn new(
        schema: S,
        max_days_via_day_of_month: u32,
        max_days_via_day_of_year: u32,
    ) -> Result<Self, InvalidSchemaError> {
        let segment = Segment::new(&schema)?;
        Ok(Kernel {
            schema,
            segment,
            max_days_via_day_of_month,
            max_days_via_day_of_year,
        })
    }

    pub(crate) fn schema(&self) -> &S {
        &self.schema
    }

    pub(crate) fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Largest day delta resolvable by the within-month tier without
    /// crossing more than one month boundary.
    pub(crate) fn max_days_via_day_of_month(&self) -> u32 {
        self.max_days_via_day_of_month
    }

    /// Largest day delta resolvable by the within-year tier without
    /// crossing more than one year boundary.
    pub(crate) fn max_days_via_day_of_year(&self) -> u32 {
        self.max_days_via_day_of_year
    }

    pub(crate) fn check_min_year(&self, year: i32) -> Result<(), DateOverflow> {
        if year < self.segment.min_year() {
            Err(DateOverflow)
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_max_year(&self, year: i32) -> Result<(), DateOverflow> {
        if year > self.segment.max_year() {
            Err(DateOverflow)
        } else {
            Ok(())
        }
    }

    /// Narrows a widened year back to `i32`, failing when it lies outside
    /// the segment.
    pub(crate) fn checked_year(&self, year: i64) -> Result<i32, DateOverflow> {
        if year < self.segment.min_year() as i64 || year > self.segment.max_year() as i64 {
            Err(DateOverflow)
        } else {
            Ok(year as i32)
        }
    }

    /// The slow tier: full conversion to a day-number and back. Correct
    /// for any delta; the fast tiers must agree with it bit for bit.
    pub(crate) fn add_days_slow(
        &self,
        date: DateParts,
        days: i32,
    ) -> Result<DateParts, DateOverflow> {
        let dse = self
            .schema
            .days_since_epoch(date.year(), date.month(), date.day());
        let dse = dse.checked_add(days).ok_or(DateOverflow)?;
        if !self.segment.contains_day(dse) {
            return Err(DateOverflow);
        }
        Ok(self.schema.date_parts_at_unchecked(dse))
    }

    pub(crate) fn add_days_ordinal_slow(
        &self,
        date: OrdinalParts,
        days: i32,
    ) -> Result<OrdinalParts, DateOverflow> {
        let dse = self
            .schema
            .days_since_epoch_ordinal(date.year(), date.day_of_year());
        let dse = dse.checked_add(days).ok_or(DateOverflow)?;
        if !self.segment.contains_day(dse) {
            return Err(DateOverflow);
        }
        Ok(self.schema.ordinal_parts_at_unchecked(dse))
    }
}
