use phf::{Map, phf_map};

/// Label colour for elements without an entry.
pub const DEFAULT_LABEL_COLOR: &str = "#222222";

/// CPK-derived label colours, darkened where the canonical colour would be
/// unreadable on a white background (hydrogen, the halogens, noble gases).
static LABEL_COLORS: Map<&'static str, &'static str> = phf_map! {
    "H" => "#555555",
    "He" => "#00A0A0",
    "Li" => "#9A4DDB",
    "Be" => "#6E9A00",
    "B" => "#D0705A",
    "C" => "#222222",
    "N" => "#3050F8",
    "O" => "#E00000",
    "F" => "#4C9A00",
    "Ne" => "#0096B4",
    "Na" => "#AB5CF2",
    "Mg" => "#5AA000",
    "Al" => "#8C7575",
    "Si" => "#B08C60",
    "P" => "#FF8000",
    "S" => "#C8A000",
    "Cl" => "#1FA01F",
    "Ar" => "#00879E",
    "K" => "#8F40D4",
    "Ca" => "#3DA000",
    "Fe" => "#E06633",
    "Cu" => "#C88033",
    "Zn" => "#7D80B0",
    "Br" => "#A62929",
    "Kr" => "#3C9EB0",
    "I" => "#940094",
    "Xe" => "#2A8FA6",
};

/// Returns the label colour for an element symbol.
///
/// Symbols are matched exactly after trimming, so "Cl" and "CL" differ;
/// the data pipeline emits canonical capitalisation.
pub fn label_color(symbol: &str) -> &'static str {
    LABEL_COLORS
        .get(symbol.trim())
        .copied()
        .unwrap_or(DEFAULT_LABEL_COLOR)
}
