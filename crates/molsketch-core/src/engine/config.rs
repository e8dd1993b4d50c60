use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Parameter '{parameter}' must be positive (got {value})")]
    NonPositive { parameter: &'static str, value: f64 },
    #[error("Parameter '{parameter}' must not be negative (got {value})")]
    Negative { parameter: &'static str, value: f64 },
    #[error("Parameter '{parameter}' must be a finite number (got {value})")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// The fixed frame used when a structure has no atoms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometric constants of the diagram, in visual units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Visual units per grid unit.
    pub unit_scale: f64,
    /// Margin added around the atom bounding box.
    pub viewport_padding: f64,
    pub default_frame: Frame,
    /// Distance trimmed from both ends of a bond so it clears the atom labels.
    pub stroke_clearance: f64,
    /// Distance between the two rails of a double bond.
    pub double_bond_gap: f64,
    /// Distance between the center line and each rail of a triple bond.
    pub triple_bond_gap: f64,
    pub lone_pair_radius: f64,
    /// Distance between the two dots of one lone pair.
    pub lone_pair_dot_spacing: f64,
    pub oxidation_radius: f64,
    pub charge_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit_scale: 60.0,
            viewport_padding: 40.0,
            default_frame: Frame {
                min_x: 0.0,
                min_y: 0.0,
                width: 200.0,
                height: 200.0,
            },
            stroke_clearance: 14.0,
            double_bond_gap: 6.0,
            triple_bond_gap: 5.0,
            lone_pair_radius: 18.0,
            lone_pair_dot_spacing: 5.0,
            oxidation_radius: 24.0,
            charge_radius: 26.0,
        }
    }
}

#[derive(Default)]
pub struct LayoutConfigBuilder {
    unit_scale: Option<f64>,
    viewport_padding: Option<f64>,
    default_frame: Option<Frame>,
    stroke_clearance: Option<f64>,
    double_bond_gap: Option<f64>,
    triple_bond_gap: Option<f64>,
    lone_pair_radius: Option<f64>,
    lone_pair_dot_spacing: Option<f64>,
    oxidation_radius: Option<f64>,
    charge_radius: Option<f64>,
}

impl LayoutConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit_scale(mut self, scale: f64) -> Self {
        self.unit_scale = Some(scale);
        self
    }
    pub fn viewport_padding(mut self, padding: f64) -> Self {
        self.viewport_padding = Some(padding);
        self
    }
    pub fn default_frame(mut self, frame: Frame) -> Self {
        self.default_frame = Some(frame);
        self
    }
    pub fn stroke_clearance(mut self, clearance: f64) -> Self {
        self.stroke_clearance = Some(clearance);
        self
    }
    pub fn double_bond_gap(mut self, gap: f64) -> Self {
        self.double_bond_gap = Some(gap);
        self
    }
    pub fn triple_bond_gap(mut self, gap: f64) -> Self {
        self.triple_bond_gap = Some(gap);
        self
    }
    pub fn lone_pair_radius(mut self, radius: f64) -> Self {
        self.lone_pair_radius = Some(radius);
        self
    }
    pub fn lone_pair_dot_spacing(mut self, spacing: f64) -> Self {
        self.lone_pair_dot_spacing = Some(spacing);
        self
    }
    pub fn oxidation_radius(mut self, radius: f64) -> Self {
        self.oxidation_radius = Some(radius);
        self
    }
    pub fn charge_radius(mut self, radius: f64) -> Self {
        self.charge_radius = Some(radius);
        self
    }

    /// Fills unset values from [`LayoutConfig::default`] and validates the result.
    ///
    /// Scales, gaps and radii must be positive; padding and clearance may be
    /// zero. Every value must be finite.
    pub fn build(self) -> Result<LayoutConfig, ConfigError> {
        let defaults = LayoutConfig::default();
        let config = LayoutConfig {
            unit_scale: self.unit_scale.unwrap_or(defaults.unit_scale),
            viewport_padding: self.viewport_padding.unwrap_or(defaults.viewport_padding),
            default_frame: self.default_frame.unwrap_or(defaults.default_frame),
            stroke_clearance: self.stroke_clearance.unwrap_or(defaults.stroke_clearance),
            double_bond_gap: self.double_bond_gap.unwrap_or(defaults.double_bond_gap),
            triple_bond_gap: self.triple_bond_gap.unwrap_or(defaults.triple_bond_gap),
            lone_pair_radius: self.lone_pair_radius.unwrap_or(defaults.lone_pair_radius),
            lone_pair_dot_spacing: self
                .lone_pair_dot_spacing
                .unwrap_or(defaults.lone_pair_dot_spacing),
            oxidation_radius: self.oxidation_radius.unwrap_or(defaults.oxidation_radius),
            charge_radius: self.charge_radius.unwrap_or(defaults.charge_radius),
        };
        config.validate()?;
        Ok(config)
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("unit_scale", self.unit_scale),
            ("double_bond_gap", self.double_bond_gap),
            ("triple_bond_gap", self.triple_bond_gap),
            ("lone_pair_radius", self.lone_pair_radius),
            ("lone_pair_dot_spacing", self.lone_pair_dot_spacing),
            ("oxidation_radius", self.oxidation_radius),
            ("charge_radius", self.charge_radius),
            ("default_frame.width", self.default_frame.width),
            ("default_frame.height", self.default_frame.height),
        ];
        let non_negative = [
            ("viewport_padding", self.viewport_padding),
            ("stroke_clearance", self.stroke_clearance),
        ];
        let unbounded = [
            ("default_frame.min_x", self.default_frame.min_x),
            ("default_frame.min_y", self.default_frame.min_y),
        ];

        for &(parameter, value) in positive.iter().chain(&non_negative).chain(&unbounded) {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { parameter, value });
            }
        }
        for (parameter, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { parameter, value });
            }
        }
        for (parameter, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { parameter, value });
            }
        }
        Ok(())
    }
}

/// One toggleable layer of the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Bonds,
    OxidationStates,
    Charges,
    LonePairs,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown layer '{0}'. Expected one of: bonds, oxidation, charges, lone-pairs")]
pub struct ParseLayerError(pub String);

impl FromStr for Layer {
    type Err = ParseLayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bonds" => Ok(Layer::Bonds),
            "oxidation" | "oxidation-states" | "ox" => Ok(Layer::OxidationStates),
            "charges" | "charge" | "polarity" => Ok(Layer::Charges),
            "lone-pairs" | "lone_pairs" | "lonepairs" => Ok(Layer::LonePairs),
            _ => Err(ParseLayerError(s.to_string())),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layer::Bonds => "bonds",
            Layer::OxidationStates => "oxidation",
            Layer::Charges => "charges",
            Layer::LonePairs => "lone-pairs",
        })
    }
}

/// Which annotation layers are shown.
///
/// A pure rendering filter supplied by the host. Placement reads it only to
/// decide which already-shown annotations later ones must avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Visibility {
    pub bonds: bool,
    pub oxidation_states: bool,
    pub charges: bool,
    pub lone_pairs: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            bonds: true,
            oxidation_states: false,
            charges: false,
            lone_pairs: false,
        }
    }
}

impl Visibility {
    pub fn all() -> Self {
        Self {
            bonds: true,
            oxidation_states: true,
            charges: true,
            lone_pairs: true,
        }
    }

    pub fn is_shown(&self, layer: Layer) -> bool {
        match layer {
            Layer::Bonds => self.bonds,
            Layer::OxidationStates => self.oxidation_states,
            Layer::Charges => self.charges,
            Layer::LonePairs => self.lone_pairs,
        }
    }

    pub fn with_layer(mut self, layer: Layer, shown: bool) -> Self {
        match layer {
            Layer::Bonds => self.bonds = shown,
            Layer::OxidationStates => self.oxidation_states = shown,
            Layer::Charges => self.charges = shown,
            Layer::LonePairs => self.lone_pairs = shown,
        }
        self
    }
}
