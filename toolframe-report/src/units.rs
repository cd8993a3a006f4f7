//! Document length units.
//!
//! CAD hosts store assembly translations in their own internal unit --
//! centimeters for the host this tool grew up against -- while controller
//! poses want millimeters. The unit is a property of the document, chosen
//! on the command line, and applied once when the report is assembled.

use clap::ValueEnum;
use std::fmt;
use toolframe_core::constants::{CM_TO_MM, M_TO_MM};
use toolframe_core::Vector3;

/// The length unit a document's translations are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LengthUnit {
    #[value(alias = "mm")]
    Millimeters,
    #[value(alias = "cm")]
    Centimeters,
    #[value(alias = "m")]
    Meters,
}

impl LengthUnit {
    /// Multiplier taking a value in this unit to millimeters.
    pub fn scale_to_millimeters(&self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Centimeters => CM_TO_MM,
            Self::Meters => M_TO_MM,
        }
    }

    /// Converts a scalar length to millimeters.
    pub fn to_millimeters(&self, value: f64) -> f64 {
        value * self.scale_to_millimeters()
    }

    /// Converts a point or translation to millimeters componentwise.
    pub fn point_to_millimeters(&self, point: Vector3) -> Vector3 {
        point * self.scale_to_millimeters()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
        };
        write!(f, "{}", label)
    }
}
