use crate::error::FixtureConfigurationError;


/// The default inclusive upper limit for bounded configuration values.
pub const DEFAULT_UPPER_LIMIT: u32 = 30;


/// A named numeric configuration slot with a validated range.
///
/// Valid values satisfy `minimum < value <= maximum`
/// (exclusive at the bottom, inclusive at the top).
/// Validation happens at assignment time, never at use time:
/// a rejected value leaves the previously stored one in place.
///
/// A bounded count cannot be cleared or removed;
/// it models a permanent configuration slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundedCount {
    field: &'static str,

    minimum: u32,

    maximum: u32,

    value: u32,
}

impl BoundedCount {
    /// Initializes a bounded count with the default `(0, 30]` range,
    /// validating the initial value.
    pub fn new(field: &'static str, value: u32) -> Result<Self, FixtureConfigurationError> {
        Self::with_bounds(field, value, 0, DEFAULT_UPPER_LIMIT)
    }

    /// Initializes a bounded count with custom bounds,
    /// validating the initial value against them.
    ///
    /// `minimum` is exclusive, `maximum` is inclusive.
    pub fn with_bounds(
        field: &'static str,
        value: u32,
        minimum: u32,
        maximum: u32,
    ) -> Result<Self, FixtureConfigurationError> {
        validate_in_bounds(field, value, minimum, maximum)?;

        Ok(Self {
            field,
            minimum,
            maximum,
            value,
        })
    }

    /// Returns the last validated value.
    #[inline]
    pub fn get(&self) -> u32 {
        self.value
    }

    /// Validates and stores a new value.
    ///
    ///
    /// # Errors
    /// If the value falls outside `(minimum, maximum]`,
    /// a [`FixtureConfigurationError::ValueOutOfRange`] is returned
    /// and the previously stored value is kept.
    pub fn set(&mut self, value: u32) -> Result<(), FixtureConfigurationError> {
        validate_in_bounds(self.field, value, self.minimum, self.maximum)?;

        self.value = value;

        Ok(())
    }

    /// Validates a value against this count's bounds without storing it.
    ///
    /// Useful for validating a value against a cross-field invariant
    /// before committing it.
    pub fn check(&self, value: u32) -> Result<(), FixtureConfigurationError> {
        validate_in_bounds(self.field, value, self.minimum, self.maximum)
    }

    /// Returns the name of the configuration field this count belongs to.
    pub fn field_name(&self) -> &'static str {
        self.field
    }
}


fn validate_in_bounds(
    field: &'static str,
    value: u32,
    minimum: u32,
    maximum: u32,
) -> Result<(), FixtureConfigurationError> {
    if value <= minimum || value > maximum {
        return Err(FixtureConfigurationError::ValueOutOfRange {
            field,
            value,
            minimum,
            maximum,
        });
    }

    Ok(())
}



#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_values_inside_the_range() {
        let mut count = BoundedCount::new("file_count", 5).unwrap();

        count.set(1).unwrap();
        count.set(30).unwrap();

        assert_eq!(count.get(), 30);
    }

    #[test]
    fn rejects_zero_on_default_bounds() {
        let mut count = BoundedCount::new("file_count", 5).unwrap();

        let error = count.set(0).unwrap_err();

        assert_matches!(
            error,
            FixtureConfigurationError::ValueOutOfRange {
                field: "file_count",
                value: 0,
                minimum: 0,
                maximum: 30,
            }
        );
    }

    #[test]
    fn rejects_values_above_the_upper_limit() {
        let mut count = BoundedCount::new("depth", 3).unwrap();

        assert_matches!(
            count.set(31).unwrap_err(),
            FixtureConfigurationError::ValueOutOfRange { value: 31, .. }
        );
    }

    #[test]
    fn rejected_value_keeps_the_previous_one() {
        let mut count = BoundedCount::new("directory_count", 5).unwrap();

        count.set(2).unwrap();
        count.set(99).unwrap_err();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn rejects_out_of_range_initial_value() {
        assert_matches!(
            BoundedCount::new("depth", 0).unwrap_err(),
            FixtureConfigurationError::ValueOutOfRange { value: 0, .. }
        );
    }
}
