use crate::db::pool::DbPool;
use crate::db::queries::list_keys;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED PROGRAM LOGS
    //
    let keys = list_keys(pool)?;
    println!(
        "{}• Program logs:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        keys.len(),
        RESET
    );
    for (key, updated) in &keys {
        println!("    {key} {GREY}(updated {updated}){RESET}");
    }

    //
    // 3) AUDIT LOG SIZE
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
