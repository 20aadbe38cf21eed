use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ExerciseLibrary;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, LIME, RESET};
use crate::utils::formatting::bold;

/// Print the how-to card of an exercise. Names without an entry print
/// nothing.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Info { exercise } = cmd {
        let library = ExerciseLibrary::bundled()?;
        let Some(info) = library.lookup(exercise) else {
            ::log::debug!("no library entry for '{exercise}'");
            return Ok(());
        };

        header(&info.name);
        println!("{LIME}[{}]{RESET}", info.category);
        if !info.primary_muscles.is_empty() {
            println!("{GREY}Primary muscles: {}{RESET}", info.primary_muscles.join(", "));
        }

        println!("\n{}", bold("Instructions"));
        for (i, step) in info.instructions.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }

        println!("\n{}", bold("Tips"));
        for tip in &info.tips {
            println!("  • {tip}");
        }
    }
    Ok(())
}
