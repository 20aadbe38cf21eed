use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ctl = open_session(cfg)?;
        let rows = ExportLogic::export(ctl.store().state(), *format, file, *force)?;
        if rows > 0 {
            audit(&ctl, "export", file, &format!("{rows} sets exported as {}", format.as_str()));
        }
    }
    Ok(())
}
