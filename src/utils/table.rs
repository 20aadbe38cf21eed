//! Table rendering utilities for CLI outputs.

use super::colors::strip_ansi;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column widths fit the widest visible cell (colors excluded).
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(strip_ansi(cell).chars().count());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&format!("{:<width$}  ", h, width = *w));
        }
        out.push('\n');
        let total: usize = widths.iter().map(|w| w + 2).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let visible = strip_ansi(cell).chars().count();
                out.push_str(cell);
                out.push_str(&" ".repeat(w.saturating_sub(visible) + 2));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut t = Table::new(vec!["Set", "Reps"]);
        t.add_row(vec!["1".into(), "10".into()]);
        t.add_row(vec!["12".into(), "8".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Set  Reps  ");
        assert_eq!(lines[2], "1    10    ");
        assert_eq!(lines[3], "12   8     ");
    }
}
