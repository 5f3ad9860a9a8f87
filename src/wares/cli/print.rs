use crate::commands::{CmdMessage, MessageLevel};
use crate::error::WaresError;
use crate::model::Product;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, err: &WaresError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}

/// Aligned product listing. Name and category columns are padded by display
/// width, not byte length, so wide glyphs keep the table straight.
pub fn print_products<W: Write>(out: &mut W, products: &[Product]) -> io::Result<()> {
    let name_width = column_width(products.iter().map(|p| p.name.as_str()));
    let category_width = column_width(products.iter().map(|p| p.category.as_str()));

    for product in products {
        writeln!(
            out,
            "  {}{}  {}{}  qty {:>5}  {:>10}",
            product.name.bold(),
            pad(&product.name, name_width),
            product.category,
            pad(&product.category, category_width),
            product.quantity,
            money(product.price),
        )?;
    }
    Ok(())
}

pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0)
}

fn pad(value: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(value.width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_two_decimals() {
        assert_eq!(money(5.0), "$5.00");
        assert_eq!(money(2.555), "$2.56");
    }

    #[test]
    fn products_align_by_display_width() {
        let products = vec![
            Product::new("Ö".into(), "Tools".into(), 1, 1.0, 0),
            Product::new("Long Name".into(), "T".into(), 2, 2.0, 0),
        ];
        let mut out = Vec::new();
        print_products(&mut out, &products).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.contains("qty")));
    }
}
