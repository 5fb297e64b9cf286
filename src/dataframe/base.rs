use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::core::error::{Error, Result};
use crate::series::Series;

// Column trait to allow storing different Series types in the DataFrame
trait ColumnAny: Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn column_type_string(&self) -> String;
    fn clone_box(&self) -> Box<dyn ColumnAny + Send + Sync>;
}

impl<T: 'static + Debug + Clone + Send + Sync> ColumnAny for Series<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn column_type_string(&self) -> String {
        std::any::type_name::<T>().to_string()
    }

    fn clone_box(&self) -> Box<dyn ColumnAny + Send + Sync> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ColumnAny + Send + Sync> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// DataFrame struct: Column-oriented 2D data structure
///
/// Columns may hold different element types. The resampling engine reads a
/// numeric target column and a label column out of it and never mutates it.
#[derive(Debug, Clone)]
pub struct DataFrame {
    columns: HashMap<String, Box<dyn ColumnAny + Send + Sync>>,
    column_order: Vec<String>,
    row_count: usize,
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFrame {
    /// Create a new empty DataFrame
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
            column_order: Vec::new(),
            row_count: 0,
        }
    }

    /// Check if the DataFrame contains a column with the given name
    pub fn contains_column(&self, column_name: &str) -> bool {
        self.columns.contains_key(column_name)
    }

    /// Get the number of rows in the DataFrame
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns in the DataFrame
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get column names in insertion order
    pub fn column_names(&self) -> Vec<String> {
        self.column_order.clone()
    }

    /// Add a column to the DataFrame
    pub fn add_column<T: 'static + Debug + Clone + Send + Sync>(
        &mut self,
        column_name: String,
        series: Series<T>,
    ) -> Result<()> {
        if self.contains_column(&column_name) {
            return Err(Error::DuplicateColumnName(column_name));
        }

        let series_len = series.len();
        if !self.columns.is_empty() && series_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: series_len,
            });
        }

        self.columns.insert(column_name.clone(), Box::new(series));
        self.column_order.push(column_name);

        if self.columns.len() == 1 {
            self.row_count = series_len;
        }

        Ok(())
    }

    /// Get a column from the DataFrame with generic type
    pub fn get_column<T: 'static + Debug + Clone + Send + Sync>(
        &self,
        column_name: &str,
    ) -> Result<&Series<T>> {
        let col = self
            .columns
            .get(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))?;

        col.as_any().downcast_ref::<Series<T>>().ok_or_else(|| {
            Error::Type(format!(
                "Column '{}' holds {} values, not {}",
                column_name,
                col.column_type_string(),
                std::any::type_name::<T>()
            ))
        })
    }

    /// Get numeric values from a column as f64
    ///
    /// Accepts columns of any primitive numeric element type.
    pub fn get_column_numeric_values(&self, column_name: &str) -> Result<Vec<f64>> {
        let col = self
            .columns
            .get(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))?;
        let any = col.as_any();

        if let Some(series) = any.downcast_ref::<Series<f64>>() {
            return Ok(series.to_vec());
        }
        if let Some(series) = any.downcast_ref::<Series<f32>>() {
            return series.as_f64();
        }
        if let Some(series) = any.downcast_ref::<Series<i64>>() {
            return series.as_f64();
        }
        if let Some(series) = any.downcast_ref::<Series<i32>>() {
            return series.as_f64();
        }
        if let Some(series) = any.downcast_ref::<Series<u32>>() {
            return series.as_f64();
        }
        if let Some(series) = any.downcast_ref::<Series<usize>>() {
            return series.as_f64();
        }

        Err(Error::Type(format!(
            "Column '{}' holds {} values and cannot be converted to numeric values",
            column_name,
            col.column_type_string()
        )))
    }
}
