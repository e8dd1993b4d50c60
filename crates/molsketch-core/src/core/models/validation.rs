use super::structure::MoleculeStructure;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// How serious a data-quality issue is for diagram rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// The diagram renders, but something is silently dropped or ambiguous.
    Warning,
    /// The structure breaks an invariant the layout relies on.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single data-quality finding about a structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    DuplicateAtomId { id: String },
    DanglingBond { index: usize, missing: String },
    SelfBond { index: usize, atom: String },
    DanglingPolarity { index: usize, missing: String },
    ConflictingCharge { atom: String },
}

impl StructureIssue {
    pub fn severity(&self) -> Severity {
        match self {
            StructureIssue::DuplicateAtomId { .. } | StructureIssue::SelfBond { .. } => {
                Severity::Error
            }
            StructureIssue::DanglingBond { .. }
            | StructureIssue::DanglingPolarity { .. }
            | StructureIssue::ConflictingCharge { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureIssue::DuplicateAtomId { id } => {
                write!(f, "atom id '{}' is used more than once", id)
            }
            StructureIssue::DanglingBond { index, missing } => write!(
                f,
                "bond #{} references unknown atom '{}' and will not be drawn",
                index, missing
            ),
            StructureIssue::SelfBond { index, atom } => {
                write!(f, "bond #{} connects atom '{}' to itself", index, atom)
            }
            StructureIssue::DanglingPolarity { index, missing } => write!(
                f,
                "polarity record #{} references unknown atom '{}'",
                index, missing
            ),
            StructureIssue::ConflictingCharge { atom } => write!(
                f,
                "atom '{}' is marked both \u{03B4}+ and \u{03B4}\u{2212}; the first record wins",
                atom
            ),
        }
    }
}

/// Checks a structure for data-quality problems without rejecting it.
///
/// The layout engine tolerates every issue reported here (dangling bonds are
/// skipped, duplicate charges collapse), so this is a diagnostic for data
/// tooling rather than a precondition. Issues are reported in input order.
pub fn validate(structure: &MoleculeStructure) -> Vec<StructureIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for atom in &structure.atoms {
        if !seen.insert(atom.id.as_str()) && reported.insert(atom.id.as_str()) {
            issues.push(StructureIssue::DuplicateAtomId {
                id: atom.id.clone(),
            });
        }
    }

    for (index, bond) in structure.bonds.iter().enumerate() {
        for endpoint in [&bond.from, &bond.to] {
            if !seen.contains(endpoint.as_str()) {
                issues.push(StructureIssue::DanglingBond {
                    index,
                    missing: endpoint.clone(),
                });
            }
        }
        if bond.from == bond.to {
            issues.push(StructureIssue::SelfBond {
                index,
                atom: bond.from.clone(),
            });
        }
    }

    let mut signs: HashMap<&str, (bool, bool)> = HashMap::new();
    let mut conflict_order = Vec::new();
    for (index, polarity) in structure.polarity.iter().enumerate() {
        for referenced in [&polarity.delta_plus, &polarity.delta_minus] {
            if !seen.contains(referenced.as_str()) {
                issues.push(StructureIssue::DanglingPolarity {
                    index,
                    missing: referenced.clone(),
                });
            }
        }

        let plus = signs.entry(polarity.delta_plus.as_str()).or_default();
        plus.0 = true;
        if plus.1 {
            conflict_order.push(polarity.delta_plus.as_str());
        }
        let minus = signs.entry(polarity.delta_minus.as_str()).or_default();
        minus.1 = true;
        if minus.0 {
            conflict_order.push(polarity.delta_minus.as_str());
        }
    }

    let mut conflicts_reported = HashSet::new();
    for atom in conflict_order {
        if conflicts_reported.insert(atom) {
            issues.push(StructureIssue::ConflictingCharge {
                atom: atom.to_string(),
            });
        }
    }

    issues
}

/// Returns `true` if any issue is an error.
pub fn has_errors(issues: &[StructureIssue]) -> bool {
    issues
        .iter()
        .any(|issue| issue.severity() == Severity::Error)
}
