// src/export/fs_utils.rs
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Whether the export may write to `path`. An existing file needs `force`
/// or a "y"/"yes" on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    if confirmed(io::stdin().lock())? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "existing file not overwritten (use --force)".to_string(),
        ))
    }
}

/// One answer line; anything but yes (including EOF) is a no.
fn confirmed(mut input: impl BufRead) -> AppResult<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_confirms() {
        assert!(confirmed("y\n".as_bytes()).unwrap());
        assert!(confirmed(" YES \n".as_bytes()).unwrap());
        assert!(!confirmed("n\n".as_bytes()).unwrap());
        assert!(!confirmed("".as_bytes()).unwrap());
    }

    #[test]
    fn missing_file_needs_no_confirmation() {
        let path = std::env::temp_dir().join("rpunchcalc_never_written.csv");
        let _ = std::fs::remove_file(&path);
        assert!(ensure_writable(&path, false).is_ok());
    }
}
