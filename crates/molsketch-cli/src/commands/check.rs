use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use molsketch::core::io::format::load_structures;
use molsketch::core::io::traits::select_structure;
use molsketch::core::models::structure::MoleculeStructure;
use molsketch::core::models::validation::{Severity, StructureIssue, validate};
use tracing::{info, warn};

/// Logs every data-quality issue of `structure` as a warning.
pub(crate) fn log_issues(structure: &MoleculeStructure) {
    for issue in validate(structure) {
        warn!(structure = %structure.id, severity = %issue.severity(), "{}", issue);
    }
}

fn count_by_severity(issues: &[StructureIssue]) -> (usize, usize) {
    issues
        .iter()
        .fold((0, 0), |(errors, warnings), issue| match issue.severity() {
            Severity::Error => (errors + 1, warnings),
            Severity::Warning => (errors, warnings + 1),
        })
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut structures = load_structures(&args.input)?;
    if let Some(id) = args.structure_id.as_deref() {
        structures = vec![select_structure(structures, Some(id))?];
    }
    info!("Checking {} structure(s) from {:?}", structures.len(), args.input);

    let (mut errors, mut warnings) = (0, 0);
    for structure in &structures {
        let issues = validate(structure);
        let (e, w) = count_by_severity(&issues);
        errors += e;
        warnings += w;

        if issues.is_empty() {
            println!("{}: ok", structure.id);
        }
        for issue in &issues {
            println!("{}: {}: {}", structure.id, issue.severity(), issue);
        }
    }

    if errors > 0 || (args.strict && warnings > 0) {
        return Err(CliError::Validation { errors, warnings });
    }
    Ok(())
}
