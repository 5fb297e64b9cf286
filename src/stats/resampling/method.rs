use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Resampling strategy
///
/// Bootstrap draws with replacement; permutation shuffles the pooled values
/// without replacement, which is what simulates "no group effect".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResamplingMethod {
    #[default]
    Bootstrap,
    Permutation,
}

impl ResamplingMethod {
    /// Whether resamples are drawn with replacement
    pub fn replace(&self) -> bool {
        matches!(self, ResamplingMethod::Bootstrap)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResamplingMethod::Bootstrap => "bootstrap",
            ResamplingMethod::Permutation => "permutation",
        }
    }
}

impl FromStr for ResamplingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bootstrap" => Ok(ResamplingMethod::Bootstrap),
            "permutation" => Ok(ResamplingMethod::Permutation),
            _ => Err(Error::ResamplingMethodUnknown(s.to_string())),
        }
    }
}

impl fmt::Display for ResamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
