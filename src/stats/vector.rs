//! Fixed-length indexed statistics.
//!
//! A `VectorStat` holds one value per member of a closed enumeration (command
//! types, interleaving classes). Its length is fixed at construction and an
//! index outside `[0, len)` is a programming error that panics.

use super::scalar::format_line;
use crate::common::EnergyError;
use serde::Serialize;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{AddAssign, Index, IndexMut};

/// A named, fixed-length sequence of values sharing one unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorStat<T> {
    members: Vec<T>,
    name: String,
    unit: String,
    description: String,
}

impl<T: Clone> VectorStat<T> {
    /// Creates a vector of `len` members, each set to `initial`.
    pub fn new(
        len: usize,
        initial: T,
        name: impl Into<String>,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            members: vec![initial; len],
            name: name.into(),
            unit: unit.into(),
            description: description.into(),
        }
    }
}

impl<T> VectorStat<T> {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Report label of the header line.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Iterates over the members in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Overwrites the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn check(&self, index: usize) {
        if index >= self.members.len() {
            let err = EnergyError::IndexOutOfRange {
                what: "vector stat",
                index,
                len: self.members.len(),
            };
            panic!("{}: {}", self.name, err);
        }
    }

    /// Renders a header line for the vector followed by one line per
    /// member, each labelled by `label(index)`.
    pub fn render<F>(&self, label: F) -> String
    where
        T: Display,
        F: Fn(usize) -> String,
    {
        let mut out = format_line(&self.name, &"", &self.unit, &self.description);
        out.push('\n');
        for (i, value) in self.members.iter().enumerate() {
            out.push_str(&format_line(&label(i), value, &self.unit, ""));
            out.push('\n');
        }
        out
    }
}

impl<T: Copy> VectorStat<T> {
    /// Value of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: AddAssign> VectorStat<T> {
    /// Adds `delta` to the member at `index`.
    pub fn add(&mut self, index: usize, delta: T) {
        self[index] += delta;
    }
}

impl<T: Copy + Sum> VectorStat<T> {
    /// Sum over all members.
    pub fn total(&self) -> T {
        self.members.iter().copied().sum()
    }
}

impl<T> Index<usize> for VectorStat<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.check(index);
        &self.members[index]
    }
}

impl<T> IndexMut<usize> for VectorStat<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.check(index);
        &mut self.members[index]
    }
}
