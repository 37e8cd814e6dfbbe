//! Fixed-width text grid used by the text renderer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Title, alignment and optional width cap of one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub align: Align,
    pub cap: Option<usize>,
}

impl Column {
    pub fn left(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            align: Align::Left,
            cap: None,
        }
    }

    pub fn right(title: impl Into<String>) -> Self {
        Self {
            align: Align::Right,
            ..Self::left(title)
        }
    }

    /// Cells wider than `cap` characters are cut and end in `…`.
    pub fn capped(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Each column is as wide as its widest cell or title, but never past its cap.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| char_len(&c.title)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(char_len(cell));
            }
        }
        for (width, column) in widths.iter_mut().zip(&self.columns) {
            if let Some(cap) = column.cap {
                *width = (*width).min(cap);
            }
        }
        widths
    }

    /// Title line, a dashed rule, then one line per row.
    pub fn lines(&self) -> Vec<String> {
        let widths = self.widths();
        let titles: Vec<&str> = self.columns.iter().map(|c| c.title.as_str()).collect();
        let rule = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

        let mut lines = vec![self.line(&titles, &widths), "-".repeat(rule)];
        lines.extend(self.rows.iter().map(|row| {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.line(&cells, &widths)
        }));
        lines
    }

    fn line(&self, cells: &[&str], widths: &[usize]) -> String {
        let mut line = String::new();
        for (idx, (column, &width)) in self.columns.iter().zip(widths).enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            let text = clip(cells.get(idx).copied().unwrap_or(""), width);
            let padded = match column.align {
                Align::Left => format!("{text:<width$}"),
                Align::Right => format!("{text:>width$}"),
            };
            line.push_str(&padded);
        }
        line.truncate(line.trim_end().len());
        line
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn clip(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    if width > 0 {
        clipped.push('…');
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_widest_cell_within_limits() {
        let table = Table {
            columns: vec![Column::left("Tag").capped(6), Column::right("Amount")],
            rows: vec![
                vec!["Groceries".into(), "12.50".into()],
                vec!["Rent".into(), "1200.00".into()],
            ],
        };
        assert_eq!(table.widths(), vec![6, 7]);
        let lines = table.lines();
        assert_eq!(lines[0], "Tag     Amount");
        assert_eq!(lines[1], "--------------");
        assert_eq!(lines[2], "Groce…   12.50");
        assert_eq!(lines[3], "Rent   1200.00");
    }

    #[test]
    fn short_rows_and_tiny_caps() {
        let table = Table {
            columns: vec![Column::left("A").capped(1), Column::right("B")],
            rows: vec![vec!["xyz".into()]],
        };
        assert_eq!(table.lines()[2], "…");
        assert_eq!(clip("abc", 0), "");
    }
}
