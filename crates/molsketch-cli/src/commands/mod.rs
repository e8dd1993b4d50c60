pub mod check;
pub mod layout;
pub mod render;

use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes `content` to `output`, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            info!("Wrote {} bytes to {:?}", content.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
