use std::io::Write;

use crossterm::style::{Color, Stylize};

use crate::category::Category;
use crate::collection::WidgetCollection;
use crate::error::Result;
use crate::packer::{ROW_BUDGET, Row};
use crate::widget::{Widget, Zone};

/// Display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

#[derive(Debug, Clone)]
pub struct GridPreview {
    column_width: u16,
    colorize: bool,
    content_label: String,
}

impl Default for GridPreview {
    fn default() -> Self {
        Self {
            column_width: 20,
            colorize: false,
            content_label: "primary content".to_string(),
        }
    }
}

impl GridPreview {
    /// `column_width` is clamped to at least 3 so a cell can hold its brackets.
    pub fn new(column_width: u16) -> Self {
        Self {
            column_width: column_width.max(3),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn with_content_label(mut self, label: impl Into<String>) -> Self {
        self.content_label = label.into();
        self
    }

    fn line_width(&self) -> usize {
        self.column_width as usize * ROW_BUDGET as usize
    }

    /// One line per row; every line is padded to the full grid width.
    pub fn render_rows(&self, rows: &[Row<'_>]) -> Vec<String> {
        rows.iter()
            .map(|row| {
                let mut line = String::new();
                for (widget, _, span) in row.cells() {
                    line.push_str(&self.render_cell(widget, span));
                }
                let used = row.span() as usize * self.column_width as usize;
                line.push_str(&" ".repeat(self.line_width().saturating_sub(used)));
                line
            })
            .collect()
    }

    pub fn render(&self, writer: &mut impl Write, collection: &WidgetCollection) -> Result<()> {
        self.render_zone(writer, collection, Zone::Above)?;
        writeln!(writer, "{}", self.banner(&self.content_label, '='))?;
        self.render_zone(writer, collection, Zone::Below)?;
        writer.flush()?;
        Ok(())
    }

    fn render_zone(
        &self,
        writer: &mut impl Write,
        collection: &WidgetCollection,
        zone: Zone,
    ) -> Result<()> {
        writeln!(writer, "{}", self.banner(zone.as_str(), '-'))?;
        let rows = collection.rows(zone);
        if rows.is_empty() {
            writeln!(writer, "{}", fit(&format!("(drop widgets {})", zone.as_str()), self.line_width()))?;
        }
        for line in self.render_rows(&rows) {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    fn render_cell(&self, widget: &Widget, span: u8) -> String {
        let inner = (span as usize * self.column_width as usize).saturating_sub(2);
        let label = fit(widget.name(), inner);
        if !self.colorize {
            return format!("[{label}]");
        }
        let rgb = Category::new(widget.category_id(), widget.category_color()).rgb();
        match rgb {
            Some((r, g, b)) => format!("[{}]", label.with(Color::Rgb { r, g, b })),
            None => format!("[{label}]"),
        }
    }

    fn banner(&self, title: &str, fill: char) -> String {
        let title = format!(" {title} ");
        let total = self.line_width();
        let remaining = total.saturating_sub(display_width(&title));
        let left = remaining / 2;
        let right = remaining - left;
        fit(
            &format!(
                "{}{}{}",
                fill.to_string().repeat(left),
                title,
                fill.to_string().repeat(right)
            ),
            total,
        )
    }
}

/// Truncate or pad `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if display_width(&out) > width {
            out.pop();
            break;
        }
    }
    let pad = width.saturating_sub(display_width(&out));
    out.push_str(&" ".repeat(pad));
    out
}
