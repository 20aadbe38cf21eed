use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::process::Command;

fn default_editor() -> String {
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

fn run_editor(editor: &str) -> bool {
    Command::new(editor)
        .arg(Config::config_file())
        .status()
        .is_ok_and(|s| s.success())
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
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&requested) {
                success(format!("Configuration file edited using '{requested}'"));
            } else {
                warning(format!(
                    "Editor '{requested}' not available, falling back to '{fallback}'"
                ));
                if run_editor(&fallback) {
                    success(format!("Configuration file edited using '{fallback}'"));
                } else {
                    crate::ui::messages::error(format!(
                        "Failed to edit configuration file using '{fallback}'"
                    ));
                }
            }

            // surface YAML mistakes right away
            Config::load()?.validate()?;
        }
    }

    Ok(())
}
