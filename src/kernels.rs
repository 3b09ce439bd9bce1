//! Kernel registry: fixed convolution operators selected by tag.
//!
//! Derivative kernels are integer 3×3 grids; the Gaussian blur is the
//! normalised 5×5 outer product of the `[1, 4, 6, 4, 1] / 16` binomial taps.
//! Derivative kernels are left-minus-right (X) and top-minus-bottom (Y). With
//! negative responses clamped away, each responds to one edge polarity only.
use crate::error::EdgeError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weights of a square kernel, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KernelWeights<'a> {
    Int(&'a [i32]),
    Float(&'a [f64]),
}

impl KernelWeights<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Int(w) => w.len(),
            Self::Float(w) => w.len(),
        }
    }
}

/// Square convolution kernel of side `size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel<'a> {
    size: usize,
    weights: KernelWeights<'a>,
}

impl<'a> Kernel<'a> {
    /// Integer kernel. Even sizes are accepted; convolution passes them through.
    pub fn from_int(size: usize, weights: &'a [i32]) -> Result<Self, EdgeError> {
        Self::checked(size, KernelWeights::Int(weights))
    }

    /// Fractional kernel; responses are truncated toward zero when stored.
    pub fn from_float(size: usize, weights: &'a [f64]) -> Result<Self, EdgeError> {
        Self::checked(size, KernelWeights::Float(weights))
    }

    fn checked(size: usize, weights: KernelWeights<'a>) -> Result<Self, EdgeError> {
        let expected = size * size;
        if weights.len() != expected {
            return Err(EdgeError::SizeMismatch {
                expected,
                actual: weights.len(),
            });
        }
        Ok(Self { size, weights })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weights(&self) -> KernelWeights<'a> {
        self.weights
    }

    pub fn is_odd(&self) -> bool {
        self.size % 2 == 1
    }
}

/// Operator identity for registry lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelTag {
    SobelX,
    SobelY,
    PrewittX,
    PrewittY,
    GaussianBlur,
}

impl KernelTag {
    pub const ALL: [KernelTag; 5] = [
        KernelTag::SobelX,
        KernelTag::SobelY,
        KernelTag::PrewittX,
        KernelTag::PrewittY,
        KernelTag::GaussianBlur,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SobelX => "sobel_x",
            Self::SobelY => "sobel_y",
            Self::PrewittX => "prewitt_x",
            Self::PrewittY => "prewitt_y",
            Self::GaussianBlur => "gaussian_blur",
        }
    }
}

impl fmt::Display for KernelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelTag {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == wanted)
            .ok_or_else(|| EdgeError::UnsupportedOperator {
                name: s.to_string(),
            })
    }
}

#[rustfmt::skip]
const SOBEL_X: [i32; 9] = [
    1, 0, -1,
    2, 0, -2,
    1, 0, -1,
];
#[rustfmt::skip]
const SOBEL_Y: [i32; 9] = [
     1,  2,  1,
     0,  0,  0,
    -1, -2, -1,
];
#[rustfmt::skip]
const PREWITT_X: [i32; 9] = [
    1, 0, -1,
    1, 0, -1,
    1, 0, -1,
];
#[rustfmt::skip]
const PREWITT_Y: [i32; 9] = [
     1,  1,  1,
     0,  0,  0,
    -1, -1, -1,
];

const G: f64 = 1.0 / 256.0;

/// Outer product of the 5-tap binomial `[1, 4, 6, 4, 1] / 16`.
#[rustfmt::skip]
const GAUSSIAN_5X5: [f64; 25] = [
    G,       4.0 * G,  6.0 * G,  4.0 * G,  G,
    4.0 * G, 16.0 * G, 24.0 * G, 16.0 * G, 4.0 * G,
    6.0 * G, 24.0 * G, 36.0 * G, 24.0 * G, 6.0 * G,
    4.0 * G, 16.0 * G, 24.0 * G, 16.0 * G, 4.0 * G,
    G,       4.0 * G,  6.0 * G,  4.0 * G,  G,
];

/// Fixed kernel for `tag`.
pub fn kernel(tag: KernelTag) -> Kernel<'static> {
    match tag {
        KernelTag::SobelX => Kernel {
            size: 3,
            weights: KernelWeights::Int(&SOBEL_X),
        },
        KernelTag::SobelY => Kernel {
            size: 3,
            weights: KernelWeights::Int(&SOBEL_Y),
        },
        KernelTag::PrewittX => Kernel {
            size: 3,
            weights: KernelWeights::Int(&PREWITT_X),
        },
        KernelTag::PrewittY => Kernel {
            size: 3,
            weights: KernelWeights::Int(&PREWITT_Y),
        },
        KernelTag::GaussianBlur => Kernel {
            size: 5,
            weights: KernelWeights::Float(&GAUSSIAN_5X5),
        },
    }
}

/// Registry lookup by operator name (`"sobel_x"`, `"gaussian-blur"`, ...).
pub fn kernel_by_name(name: &str) -> Result<Kernel<'static>, EdgeError> {
    match name.parse::<KernelTag>() {
        Ok(tag) => Ok(kernel(tag)),
        Err(err) => {
            warn!("kernel registry: operator {name:?} not implemented");
            Err(err)
        }
    }
}
