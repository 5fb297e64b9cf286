// Re-export from core module so call sites can use `crate::error`
pub use crate::core::error::{Error, Result};
