use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The number of shared electron-pair lines drawn for a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid bond order: {0} (expected 1, 2 or 3)")]
pub struct InvalidBondOrder(pub u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid bond order string: '{0}'")]
pub struct ParseBondOrderError(pub String);

impl TryFrom<u8> for BondOrder {
    type Error = InvalidBondOrder;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            other => Err(InvalidBondOrder(other)),
        }
    }
}

impl From<BondOrder> for u8 {
    fn from(order: BondOrder) -> Self {
        order as u8
    }
}

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            _ => Err(ParseBondOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
            }
        )
    }
}

/// A bond between two atoms, referenced by atom id.
///
/// Endpoints are not checked on construction; a bond whose endpoints do not
/// resolve is skipped by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoleculeBond {
    pub from: String,
    pub to: String,
    pub order: BondOrder,
    /// Marks a coordinate (dative) bond. Affects stroke style only.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dative: bool,
}

impl MoleculeBond {
    pub fn new(from: &str, to: &str, order: BondOrder) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            order,
            dative: false,
        }
    }

    pub fn dative(mut self) -> Self {
        self.dative = true;
        self
    }
}
