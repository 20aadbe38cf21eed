//! Console rendering of the internal audit log.

use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const OP_WIDTH_LIMIT: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" | "finish" => Colour::Green,
        "set" | "check" | "add_set" | "notes" => Colour::Cyan,
        "mark" | "unit" => Colour::Yellow,
        "timer" | "close" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to the column limit.
fn op_column(row: &LogRow) -> String {
    let full = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };
    if full.chars().count() > OP_WIDTH_LIMIT {
        let mut cut: String = full.chars().take(OP_WIDTH_LIMIT - 3).collect();
        cut.push_str("...");
        cut
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;
        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let columns: Vec<String> = rows.iter().map(op_column).collect();
        let op_w = columns.iter().map(|c| c.chars().count()).max().unwrap_or(10);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for (row, column) in rows.iter().zip(&columns) {
            let color = color_for_operation(&row.operation);
            // only the operation word is colored
            let (op, rest) = match column.split_once(' ') {
                Some((op, rest)) => (op, format!(" {rest}")),
                None => (column.as_str(), String::new()),
            };
            let padding = " ".repeat(op_w.saturating_sub(column.chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                row.id,
                row.date,
                color.paint(op),
                rest,
                padding,
                row.message,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_column_truncates() {
        let row = LogRow {
            id: 1,
            date: "2025-03-03".into(),
            operation: "export".into(),
            target: "x".repeat(80),
            message: String::new(),
        };
        let col = op_column(&row);
        assert_eq!(col.chars().count(), OP_WIDTH_LIMIT);
        assert!(col.ends_with("..."));
    }

    #[test]
    fn test_print_log_on_fresh_db() {
        let pool = DbPool::in_memory().unwrap();
        crate::db::init_db(&pool.conn).unwrap();
        crate::db::log::audit(&pool.conn, "start", "1_Mon", "Workout started").unwrap();
        assert!(LogLogic::print_log(&pool).is_ok());
    }
}
