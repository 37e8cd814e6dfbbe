//! Drawing the ledger for a user. The ledger itself knows nothing about output;
//! a session hands a [`LedgerView`] to its [`Renderer`] after every change.

pub mod table;

use std::io::Write;

use colored::Colorize;

use crate::{
    errors::LedgerError,
    ledger::{AllocationRow, NumericField, Summary, UNDEFINED_PERCENTAGE},
};

use table::{Column, Table};

const TAG_MAX_WIDTH: usize = 32;

/// Borrowed state handed to a renderer after each mutation.
#[derive(Debug, Clone, Copy)]
pub struct LedgerView<'a> {
    pub rows: &'a [AllocationRow],
    pub summary: &'a Summary,
    pub total_budget: &'a NumericField,
    pub dark_mode: bool,
}

/// Receives the current ledger state whenever it changes.
pub trait Renderer {
    fn render(&mut self, view: &LedgerView<'_>) -> Result<(), LedgerError>;
}

/// Writes the allocation table and the summary block as text.
pub struct TextRenderer<W: Write> {
    out: W,
    currency_symbol: String,
    use_color: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.into(),
            use_color: true,
        }
    }

    pub fn plain(out: W, currency_symbol: impl Into<String>) -> Self {
        Self {
            use_color: false,
            ..Self::new(out, currency_symbol)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &LedgerView<'_>) -> Result<(), LedgerError> {
        let text = render_text(view, &self.currency_symbol, self.use_color);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Full text for one render pass: budget line, table, summary block.
pub fn render_text(view: &LedgerView<'_>, symbol: &str, use_color: bool) -> String {
    let palette = Palette::for_mode(view.dark_mode, use_color);
    let mut out = String::new();

    out.push_str(&palette.heading(&format!("Total Budget: {}", view.total_budget)));
    out.push('\n');

    let table = allocation_table(view.rows);
    for (idx, line) in table.lines().into_iter().enumerate() {
        let line = if idx == 0 { palette.heading(&line) } else { line };
        out.push_str(&line);
        out.push('\n');
    }

    let display = view.summary.display(symbol);
    out.push_str(&format!(
        "Total Allocated: {} ({})\n",
        display.total_allocated,
        with_percent_sign(&display.allocated_percentage)
    ));
    let remaining = format!(
        "Remaining Budget: {} ({})",
        display.remaining_budget,
        with_percent_sign(&display.remaining_percentage)
    );
    out.push_str(&palette.balance(&remaining, view.summary.is_over_allocated()));
    out.push('\n');
    out
}

fn with_percent_sign(text: &str) -> String {
    if text == UNDEFINED_PERCENTAGE {
        text.to_string()
    } else {
        format!("{text}%")
    }
}

fn allocation_table(rows: &[AllocationRow]) -> Table {
    Table {
        columns: vec![
            Column::right("#"),
            Column::left("Tag").capped(TAG_MAX_WIDTH),
            Column::right("Amount"),
            Column::right("Percentage"),
        ],
        rows: rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                vec![
                    index.to_string(),
                    row.tag().to_string(),
                    row.amount().raw().to_string(),
                    row.percentage().raw().to_string(),
                ]
            })
            .collect(),
    }
}

#[derive(Clone, Copy)]
struct Palette {
    enabled: bool,
    dark: bool,
}

impl Palette {
    fn for_mode(dark: bool, enabled: bool) -> Self {
        Self { enabled, dark }
    }

    fn heading(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        if self.dark {
            text.bright_white().bold().to_string()
        } else {
            text.black().bold().to_string()
        }
    }

    fn balance(&self, text: &str, over: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match (over, self.dark) {
            (true, _) => text.red().bold().to_string(),
            (false, true) => text.bright_green().to_string(),
            (false, false) => text.green().to_string(),
        }
    }
}
