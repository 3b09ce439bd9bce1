//! Operator selection and detector configuration.

use crate::canny::HysteresisParams;
use crate::error::EdgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge operator run by the detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    Sobel,
    Prewitt,
    Canny,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Sobel, Operator::Prewitt, Operator::Canny];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sobel => "sobel",
            Self::Prewitt => "prewitt",
            Self::Canny => "canny",
        }
    }

    /// Next operator in viewer cycling order: Sobel → Prewitt → Canny → Sobel.
    pub fn next(self) -> Self {
        match self {
            Self::Sobel => Self::Prewitt,
            Self::Prewitt => Self::Canny,
            Self::Canny => Self::Sobel,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| EdgeError::UnsupportedOperator {
                name: s.to_string(),
            })
    }
}

/// Detector-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeDetectorParams {
    /// Operator applied by [`EdgeDetector::process`](super::EdgeDetector::process).
    pub operator: Operator,
    /// Threshold multipliers used by Canny.
    pub canny: HysteresisParams,
}
