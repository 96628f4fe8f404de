use crate::types::err::{self};

/// A configuration option, bounded by a minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, e.g. for use in errors and on the command line.
    pub name: &'static str,

    /// The least value the option may take.
    pub min: T,

    /// The greatest value the option may take.
    pub max: T,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// The minimum and maximum values of the option.
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    ///
    /// ```rust
    /// # use clause_stage::config::Config;
    /// let mut config = Config::default();
    /// assert!(config.engine.polarity_lean.set(0.5).is_ok());
    /// assert!(config.engine.polarity_lean.set(1.5).is_err());
    /// assert_eq!(config.engine.polarity_lean.value, 0.5);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || value > self.max {
            return Err(err::ConfigError::OutOfRange(self.name));
        }
        self.value = value;
        Ok(())
    }
}
