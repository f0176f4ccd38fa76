use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                Config::default().save()?;
            }

            let fallback = platform_editor();
            let first = editor.clone().unwrap_or_else(|| fallback.clone());

            if open_in(&first, &path) {
                success(format!("Configuration edited with '{}'", first));
            } else if first != fallback {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    first, fallback
                ));
                if open_in(&fallback, &path) {
                    success(format!("Configuration edited with '{}'", fallback));
                } else {
                    error(format!("Could not open the configuration with '{}'", fallback));
                }
            } else {
                error(format!("Could not open the configuration with '{}'", first));
            }
        }
    }

    Ok(())
}
