use super::layout::{AtomLayout, LayoutResult};
use crate::core::models::atom::oxidation_label;
use crate::core::utils::elements::label_color;
use crate::engine::bonds::{RenderedBond, StrokeStyle};
use serde::{Deserialize, Serialize};

/// Presentation settings for SVG export. Geometry comes from the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SvgStyle {
    pub background: Option<String>,
    pub bond_color: String,
    pub bond_width: f64,
    /// `stroke-dasharray` used for dative bonds.
    pub dative_dash: String,
    pub font_family: String,
    pub atom_font_size: f64,
    pub annotation_font_size: f64,
    pub annotation_color: String,
    pub lone_pair_dot_radius: f64,
    /// Paints a background-coloured disc behind each atom label.
    pub label_halo: bool,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: Some("#ffffff".to_string()),
            bond_color: "#333333".to_string(),
            bond_width: 2.0,
            dative_dash: "6 4".to_string(),
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            atom_font_size: 18.0,
            annotation_font_size: 12.0,
            annotation_color: "#555555".to_string(),
            lone_pair_dot_radius: 1.8,
            label_halo: true,
        }
    }
}

/// Renders a computed layout as a standalone SVG document.
///
/// Bonds are drawn first, then per atom the label, the lone-pair dots and the
/// oxidation and charge labels. Layers hidden in the layout's visibility are
/// left out; atom labels are always drawn. Atoms carrying a partial charge get
/// the `charged` class so hosts can target them.
pub fn render_svg(layout: &LayoutResult, style: &SvgStyle) -> String {
    let viewport = &layout.viewport;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" width=\"{:.2}\" height=\"{:.2}\" data-structure=\"{}\">",
        viewport.view_box(),
        viewport.width,
        viewport.height,
        escape_xml(&layout.structure_id)
    ));

    if let Some(background) = &style.background {
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            viewport.min_x,
            viewport.min_y,
            viewport.width,
            viewport.height,
            escape_xml(background)
        ));
    }

    if layout.visibility.bonds {
        svg.push_str("<g class=\"bonds\">");
        for bond in &layout.bonds {
            svg.push_str(&bond_svg(bond, style));
        }
        svg.push_str("</g>");
    }

    svg.push_str("<g class=\"atoms\">");
    for atom in &layout.atoms {
        svg.push_str(&atom_svg(atom, layout, style));
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

fn bond_svg(bond: &RenderedBond, style: &SvgStyle) -> String {
    let dash = match bond.style {
        StrokeStyle::Solid => String::new(),
        StrokeStyle::Dative => format!(" stroke-dasharray=\"{}\"", escape_xml(&style.dative_dash)),
    };
    let mut out = format!(
        "<g class=\"bond\" data-from=\"{}\" data-to=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"{}>",
        escape_xml(&bond.from),
        escape_xml(&bond.to),
        escape_xml(&style.bond_color),
        style.bond_width,
        dash
    );
    for line in &bond.lines {
        out.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
            line.start.x, line.start.y, line.end.x, line.end.y
        ));
    }
    out.push_str("</g>");
    out
}

fn atom_svg(atom: &AtomLayout, layout: &LayoutResult, style: &SvgStyle) -> String {
    let class = if atom.charge.is_some() {
        "atom charged"
    } else {
        "atom"
    };
    let mut out = format!(
        "<g class=\"{}\" data-atom=\"{}\">",
        class,
        escape_xml(&atom.id)
    );

    if style.label_halo {
        if let Some(background) = &style.background {
            out.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
                atom.position.x,
                atom.position.y,
                style.atom_font_size * 0.6,
                escape_xml(background)
            ));
        }
    }

    out.push_str(&text_svg(
        atom.position.x,
        atom.position.y,
        &atom.label,
        label_color(&atom.symbol),
        style.atom_font_size,
        style,
    ));

    if layout.visibility.lone_pairs {
        for [first, second] in &atom.lone_pair_dots {
            for dot in [first, second] {
                out.push_str(&format!(
                    "<circle class=\"lone-pair\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>",
                    dot.x,
                    dot.y,
                    style.lone_pair_dot_radius,
                    escape_xml(&style.bond_color)
                ));
            }
        }
    }

    if let (Some(position), Some(ox)) = (atom.oxidation_label_position(), atom.oxidation_state) {
        out.push_str(&text_svg(
            position.x,
            position.y,
            &oxidation_label(ox),
            &style.annotation_color,
            style.annotation_font_size,
            style,
        ));
    }

    if let (Some(position), Some(charge)) = (atom.charge_label_position(), atom.charge) {
        out.push_str(&text_svg(
            position.x,
            position.y,
            charge.symbol(),
            &style.annotation_color,
            style.annotation_font_size,
            style,
        ));
    }

    out.push_str("</g>");
    out
}

fn text_svg(x: f64, y: f64, text: &str, fill: &str, size: f64, style: &SvgStyle) -> String {
    format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        escape_xml(&style.font_family),
        size,
        escape_xml(fill),
        escape_xml(text)
    )
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
