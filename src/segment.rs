use crate::error::InvalidSchemaError;
use crate::parts;
use crate::schema::Schema;

/// Precomputed bounds for one schema: the supported year span (the
/// schema's declared years intersected with the representable range) and
/// the day-numbers reachable within it. Computed once at construction and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    min_year: i32,
    max_year: i32,
    min_days_since_epoch: i32,
    max_days_since_epoch: i32,
}

impl Segment {
    /// Evaluates `schema` at its year boundaries. Fails with
    /// [`InvalidSchemaError::EmptyYearRange`] when the schema's claimed
    /// years and the representable range share no years.
    pub fn new<S: Schema>(schema: &S) -> Result<Self, InvalidSchemaError> {
        let supported = schema.supported_years();
        let min_year = (*supported.start()).max(parts::MIN_YEAR);
        let max_year = (*supported.end()).min(parts::MAX_YEAR);
        if min_year > max_year {
            return Err(InvalidSchemaError::EmptyYearRange);
        }
        let min_days_since_epoch = schema.days_since_epoch_ordinal(min_year, 1);
        let max_days_since_epoch =
            schema.days_since_epoch_ordinal(max_year, schema.days_in_year(max_year));
        Ok(Segment {
            min_year,
            max_year,
            min_days_since_epoch,
            max_days_since_epoch,
        })
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn min_days_since_epoch(&self) -> i32 {
        self.min_days_since_epoch
    }

    pub fn max_days_since_epoch(&self) -> i32 {
        self.max_days_since_epoch
    }

    pub fn contains_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    pub fn contains_day(&self, days_since_epoch: i32) -> bool {
        (self.min_days_since_epoch..=self.max_days_since_epoch).contains(&days_since_epoch)
    }
}
