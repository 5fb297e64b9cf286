//! Series module - one named column of homogeneous values
//!
//! A Series is the column type stored inside a [`DataFrame`](crate::dataframe::DataFrame).
//! Numeric series feed the resampling engine as target values, while series of
//! strings, integers or floats can act as grouping labels.

use std::fmt::Debug;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// Series data structure
///
/// A Series is similar to a one-dimensional array with an optional name.
#[derive(Debug, Clone)]
pub struct Series<T: Debug + Clone> {
    /// Series data values
    values: Vec<T>,
    /// Optional name for the series
    name: Option<String>,
}

impl<T: Debug + Clone> Series<T> {
    /// Create a new Series from a vector
    ///
    /// # Example
    /// ```
    /// use resamplrs::Series;
    ///
    /// let series = Series::new(vec![1.5, 2.5, 3.5], Some("weight".to_string())).unwrap();
    /// assert_eq!(series.len(), 3);
    /// ```
    pub fn new(values: Vec<T>, name: Option<String>) -> Result<Self> {
        Ok(Series { values, name })
    }

    /// Get the length of the Series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the Series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get value by position
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// Get the array of values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Convert Series to Vec
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Get the name
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// Set the name and return self (builder pattern)
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Collect the values at the given positions, in the order given
    pub fn take(&self, positions: &[usize]) -> Result<Vec<T>> {
        positions
            .iter()
            .map(|&pos| {
                self.values.get(pos).cloned().ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "position {} out of bounds for series of length {}",
                        pos,
                        self.values.len()
                    ))
                })
            })
            .collect()
    }
}

impl<T> Series<T>
where
    T: Debug + Clone + ToPrimitive,
{
    /// Convert to f64 values
    pub fn as_f64(&self) -> Result<Vec<f64>> {
        let mut result = Vec::with_capacity(self.values.len());
        for (pos, value) in self.values.iter().enumerate() {
            let converted = value.to_f64().ok_or_else(|| {
                Error::Type(format!(
                    "value {:?} at position {} cannot be represented as f64",
                    value, pos
                ))
            })?;
            result.push(converted);
        }
        Ok(result)
    }
}
