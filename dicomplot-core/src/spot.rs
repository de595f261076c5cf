//! Spot map types for a single energy layer.

use std::fmt;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Millimetres per centimetre. Spot positions are stored in mm.
pub const MM_PER_CM: f64 = 10.0;

/// Nominal beam energy of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Energy {
    /// Nominal energy in MeV.
    Nominal(f64),
    /// The control point carries no energy value.
    #[default]
    Unknown,
}

impl Energy {
    /// Returns the energy in MeV, if known.
    #[inline]
    #[must_use]
    pub fn mev(self) -> Option<f64> {
        match self {
            Energy::Nominal(e) => Some(e),
            Energy::Unknown => None,
        }
    }
}

impl From<Option<f64>> for Energy {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Energy::Unknown, Energy::Nominal)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mev() {
            Some(e) => write!(f, "{e}"),
            None => f.write_str("N/A"),
        }
    }
}

/// A single scan spot: position in mm and its meterset weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    /// X position (mm).
    pub x: f64,
    /// Y position (mm).
    pub y: f64,
    /// Meterset weight (MU).
    pub weight: f64,
}

impl Spot {
    /// X position in centimetres.
    #[inline]
    #[must_use]
    pub fn x_cm(&self) -> f64 {
        self.x / MM_PER_CM
    }

    /// Y position in centimetres.
    #[inline]
    #[must_use]
    pub fn y_cm(&self) -> f64 {
        self.y / MM_PER_CM
    }
}

/// Scan spot positions and weights of one energy layer.
///
/// Positions are kept exactly as the plan stores them: a flat sequence of
/// alternating X/Y values in mm. The map is immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpotMap {
    positions: Vec<f64>,
    weights: Vec<f64>,
    energy: Energy,
}

impl SpotMap {
    /// Creates a spot map from flat X/Y positions and per-spot weights.
    ///
    /// # Errors
    /// Returns [`Error::SpotCountMismatch`] unless `positions` holds exactly
    /// two values per weight.
    pub fn new(positions: Vec<f64>, weights: Vec<f64>, energy: Energy) -> Result<Self> {
        if positions.len() != weights.len() * 2 {
            return Err(Error::SpotCountMismatch {
                positions: positions.len(),
                weights: weights.len(),
            });
        }
        Ok(Self {
            positions,
            weights,
            energy,
        })
    }

    /// Flat alternating X/Y positions (mm).
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Meterset weight per spot.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Nominal beam energy of the layer.
    #[must_use]
    pub fn energy(&self) -> Energy {
        self.energy
    }

    /// Number of spots in the layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the layer has no spots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over the spots of the layer.
    pub fn spots(&self) -> impl Iterator<Item = Spot> + '_ {
        self.positions
            .chunks_exact(2)
            .zip(&self.weights)
            .map(|(xy, &weight)| Spot {
                x: xy[0],
                y: xy[1],
                weight,
            })
    }

    /// Largest weight in the layer, or `None` for an empty layer.
    #[must_use]
    pub fn max_weight(&self) -> Option<f64> {
        self.weights.iter().copied().reduce(f64::max)
    }

    /// Sum of all weights in the layer.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}
