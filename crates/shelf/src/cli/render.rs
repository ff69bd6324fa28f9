//! Output formatting: numbered option lists, leveled messages, book lines and
//! the aligned catalog table.
//!
//! Styling goes through `console` and is switched on only when the session
//! says so, so rendering stays byte-exact in tests and when piped.

use console::Style;
use shelfapp::commands::{CmdMessage, MessageLevel};
use shelfapp::model::Book;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn style(&self) -> Style {
        Style::new().force_styling(self.color)
    }

    /// `title` followed by `1. option` lines.
    pub fn options<S: AsRef<str>>(&self, title: &str, options: &[S]) -> String {
        let mut lines = vec![self.style().bold().apply_to(title).to_string()];
        for (index, option) in options.iter().enumerate() {
            lines.push(format!("{}. {}", index + 1, option.as_ref()));
        }
        lines.join("\n")
    }

    pub fn message(&self, message: &CmdMessage) -> String {
        let style = match message.level {
            MessageLevel::Info => self.style(),
            MessageLevel::Success => self.style().green(),
            MessageLevel::Warning => self.style().yellow(),
            MessageLevel::Error => self.style().red(),
        };
        style.apply_to(&message.content).to_string()
    }

    pub fn book_line(&self, book: &Book) -> String {
        book.to_string()
    }

    /// One header row plus one row per book, columns padded to display width.
    pub fn book_table(&self, books: &[Book]) -> Vec<String> {
        let header = ["ID", "Title", "Author", "Year", "Status"].map(String::from);
        let rows: Vec<[String; 5]> = books
            .iter()
            .map(|b| {
                [
                    b.id.to_string(),
                    b.title.clone(),
                    b.author.clone(),
                    b.year.to_string(),
                    b.status.to_string(),
                ]
            })
            .collect();

        let mut widths = header.clone().map(|cell| cell.width());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.width());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            self.style()
                .bold()
                .apply_to(format_row(&header, &widths))
                .to_string(),
        );
        lines.extend(rows.iter().map(|row| format_row(row, &widths)));
        lines
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
