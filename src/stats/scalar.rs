//! Named scalar statistics.

use serde::Serialize;
use std::fmt::{self, Display};
use std::ops::{Add, AddAssign};

/// Column widths of a rendered statistic line: name, value, unit.
pub const NAME_WIDTH: usize = 40;
pub const VALUE_WIDTH: usize = 20;
pub const UNIT_WIDTH: usize = 5;

/// Renders one `name: value unit  # description` line, right-aligned in
/// fixed-width columns. The description suffix is omitted when empty.
pub(crate) fn format_line(name: &str, value: &dyn Display, unit: &str, description: &str) -> String {
    let mut line = format!(
        "{:>nw$}: {:>vw$}{:>uw$}",
        name,
        value.to_string(),
        unit,
        nw = NAME_WIDTH,
        vw = VALUE_WIDTH,
        uw = UNIT_WIDTH
    );
    if !description.is_empty() {
        line.push_str("  # ");
        line.push_str(description);
    }
    line
}

/// A single named value with a unit and a human-readable description.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalarStat<T> {
    value: T,
    name: String,
    unit: String,
    description: String,
}

impl<T> ScalarStat<T> {
    /// Creates a statistic.
    ///
    /// # Arguments
    ///
    /// * `value` - Initial value.
    /// * `name` - Label printed in the report.
    /// * `unit` - Unit suffix, empty for plain counts.
    /// * `description` - Trailing comment, omitted when empty.
    pub fn new(
        value: T,
        name: impl Into<String>,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value,
            name: name.into(),
            unit: unit.into(),
            description: description.into(),
        }
    }

    /// Replaces the value.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Report label.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Unit suffix.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl<T: Copy> ScalarStat<T> {
    /// Current value.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Display> Display for ScalarStat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_line(
            &self.name,
            &self.value,
            &self.unit,
            &self.description,
        ))
    }
}

/// Sums the values of two stats.
///
/// The result keeps the left-hand unit but has an empty name and
/// description; whoever stores it is expected to name it.
impl<T: Add<Output = T>> Add for ScalarStat<T> {
    type Output = ScalarStat<T>;

    fn add(self, rhs: Self) -> Self::Output {
        ScalarStat {
            value: self.value + rhs.value,
            name: String::new(),
            unit: self.unit,
            description: String::new(),
        }
    }
}

impl<T: AddAssign> AddAssign<T> for ScalarStat<T> {
    fn add_assign(&mut self, rhs: T) {
        self.value += rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_drops_stale_metadata() {
        let a = ScalarStat::new(1.5f64, "a", "pJ", "first");
        let b = ScalarStat::new(2.0f64, "b", "mW", "second");
        let sum = a + b;
        assert_eq!(sum.value(), 3.5);
        assert_eq!(sum.name(), "");
        assert_eq!(sum.unit(), "pJ");
        assert_eq!(sum.description(), "");
    }

    #[test]
    fn line_columns() {
        let line = format_line("x", &7u64, "pJ", "");
        assert_eq!(line.len(), NAME_WIDTH + 2 + VALUE_WIDTH + UNIT_WIDTH);
        assert!(line.ends_with("7   pJ"));
    }
}
