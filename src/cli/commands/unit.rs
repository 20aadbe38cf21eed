use crate::cli::commands::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Unit { unit } = cmd {
        let mut ctl = open_session(cfg)?;
        match unit {
            None => info(format!("Weight unit: {}", ctl.store().weight_unit())),
            Some(u) => {
                ctl.set_weight_unit(*u)?;
                audit(&ctl, "unit", u.as_str(), "Weight unit changed");
                success(format!("Weight unit set to {u}"));
            }
        }
    }
    Ok(())
}
