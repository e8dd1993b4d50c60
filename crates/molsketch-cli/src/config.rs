use crate::cli::DrawingArgs;
use crate::error::{CliError, Result};
use molsketch::engine::config::{Frame, LayoutConfig, LayoutConfigBuilder, Visibility};
use molsketch::workflows::svg::SvgStyle;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialFrame {
    min_x: Option<f64>,
    min_y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialGeometryConfig {
    unit_scale: Option<f64>,
    viewport_padding: Option<f64>,
    default_frame: Option<PartialFrame>,
    stroke_clearance: Option<f64>,
    double_bond_gap: Option<f64>,
    triple_bond_gap: Option<f64>,
    lone_pair_radius: Option<f64>,
    lone_pair_dot_spacing: Option<f64>,
    oxidation_radius: Option<f64>,
    charge_radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialLayersConfig {
    bonds: Option<bool>,
    oxidation_states: Option<bool>,
    charges: Option<bool>,
    lone_pairs: Option<bool>,
}

/// The drawing configuration as read from a TOML file, before CLI overrides.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialDrawingConfig {
    geometry: Option<PartialGeometryConfig>,
    layers: Option<PartialLayersConfig>,
    style: Option<SvgStyle>,
}

/// Fully resolved settings for one drawing command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingConfig {
    pub layout: LayoutConfig,
    pub visibility: Visibility,
    pub style: SvgStyle,
}

impl PartialDrawingConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final settings.
    ///
    /// Precedence, lowest first: built-in defaults, the file, `-S` overrides,
    /// then `--all-layers`, `--show` and `--hide`.
    pub fn merge_with_cli(mut self, args: &DrawingArgs) -> Result<DrawingConfig> {
        self.apply_set_values(&args.set_values)?;

        let layout = Self::merge_geometry(self.geometry.take().unwrap_or_default())?;
        let visibility = Self::merge_layers(self.layers.take().unwrap_or_default(), args);
        let style = self.style.take().unwrap_or_default();

        debug!(?visibility, "Resolved drawing configuration.");
        Ok(DrawingConfig {
            layout,
            visibility,
            style,
        })
    }

    fn merge_geometry(partial: PartialGeometryConfig) -> Result<LayoutConfig> {
        let mut builder = LayoutConfigBuilder::new();
        if let Some(v) = partial.unit_scale {
            builder = builder.unit_scale(v);
        }
        if let Some(v) = partial.viewport_padding {
            builder = builder.viewport_padding(v);
        }
        if let Some(frame) = partial.default_frame {
            let defaults = LayoutConfig::default().default_frame;
            builder = builder.default_frame(Frame {
                min_x: frame.min_x.unwrap_or(defaults.min_x),
                min_y: frame.min_y.unwrap_or(defaults.min_y),
                width: frame.width.unwrap_or(defaults.width),
                height: frame.height.unwrap_or(defaults.height),
            });
        }
        if let Some(v) = partial.stroke_clearance {
            builder = builder.stroke_clearance(v);
        }
        if let Some(v) = partial.double_bond_gap {
            builder = builder.double_bond_gap(v);
        }
        if let Some(v) = partial.triple_bond_gap {
            builder = builder.triple_bond_gap(v);
        }
        if let Some(v) = partial.lone_pair_radius {
            builder = builder.lone_pair_radius(v);
        }
        if let Some(v) = partial.lone_pair_dot_spacing {
            builder = builder.lone_pair_dot_spacing(v);
        }
        if let Some(v) = partial.oxidation_radius {
            builder = builder.oxidation_radius(v);
        }
        if let Some(v) = partial.charge_radius {
            builder = builder.charge_radius(v);
        }
        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_layers(partial: PartialLayersConfig, args: &DrawingArgs) -> Visibility {
        let defaults = Visibility::default();
        let mut visibility = if args.all_layers {
            Visibility::all()
        } else {
            Visibility {
                bonds: partial.bonds.unwrap_or(defaults.bonds),
                oxidation_states: partial.oxidation_states.unwrap_or(defaults.oxidation_states),
                charges: partial.charges.unwrap_or(defaults.charges),
                lone_pairs: partial.lone_pairs.unwrap_or(defaults.lone_pairs),
            }
        };
        for &layer in &args.show {
            visibility = visibility.with_layer(layer, true);
        }
        for &layer in &args.hide {
            visibility = visibility.with_layer(layer, false);
        }
        visibility
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value_str) = (key.trim(), value_str.trim());

            if let Some(field) = key.strip_prefix("geometry.") {
                let geometry = self.geometry.get_or_insert_with(Default::default);
                let value: f64 = parse_value(key, value_str, "float")?;
                let slot = match field {
                    "unit-scale" => &mut geometry.unit_scale,
                    "viewport-padding" => &mut geometry.viewport_padding,
                    "stroke-clearance" => &mut geometry.stroke_clearance,
                    "double-bond-gap" => &mut geometry.double_bond_gap,
                    "triple-bond-gap" => &mut geometry.triple_bond_gap,
                    "lone-pair-radius" => &mut geometry.lone_pair_radius,
                    "lone-pair-dot-spacing" => &mut geometry.lone_pair_dot_spacing,
                    "oxidation-radius" => &mut geometry.oxidation_radius,
                    "charge-radius" => &mut geometry.charge_radius,
                    _ => {
                        let frame = geometry.default_frame.get_or_insert_with(Default::default);
                        match field {
                            "default-frame.min-x" => &mut frame.min_x,
                            "default-frame.min-y" => &mut frame.min_y,
                            "default-frame.width" => &mut frame.width,
                            "default-frame.height" => &mut frame.height,
                            _ => return Err(unsupported_key(key)),
                        }
                    }
                };
                *slot = Some(value);
            } else if let Some(field) = key.strip_prefix("layers.") {
                let layers = self.layers.get_or_insert_with(Default::default);
                let value: bool = parse_value(key, value_str, "boolean")?;
                let slot = match field {
                    "bonds" => &mut layers.bonds,
                    "oxidation-states" => &mut layers.oxidation_states,
                    "charges" => &mut layers.charges,
                    "lone-pairs" => &mut layers.lone_pairs,
                    _ => return Err(unsupported_key(key)),
                };
                *slot = Some(value);
            } else if let Some(field) = key.strip_prefix("style.") {
                let style = self.style.get_or_insert_with(Default::default);
                match field {
                    "bond-color" => style.bond_color = value_str.to_string(),
                    "annotation-color" => style.annotation_color = value_str.to_string(),
                    "font-family" => style.font_family = value_str.to_string(),
                    "background" => {
                        style.background = match value_str {
                            "" | "none" => None,
                            color => Some(color.to_string()),
                        }
                    }
                    "bond-width" => style.bond_width = parse_value(key, value_str, "float")?,
                    "atom-font-size" => style.atom_font_size = parse_value(key, value_str, "float")?,
                    "annotation-font-size" => {
                        style.annotation_font_size = parse_value(key, value_str, "float")?
                    }
                    "label-halo" => style.label_halo = parse_value(key, value_str, "boolean")?,
                    _ => return Err(unsupported_key(key)),
                }
            } else {
                return Err(unsupported_key(key));
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!("Unsupported configuration key for --set: '{}'", key))
}
