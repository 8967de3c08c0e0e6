use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::services::{LineKind, Quote};

#[derive(Tabled)]
struct QuoteTableRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub fn format_quote_table(quote: &Quote, precision: usize) -> String {
    if quote.lines.is_empty() {
        return String::new();
    }

    let rows: Vec<QuoteTableRow> = quote
        .lines
        .iter()
        .map(|line| QuoteTableRow {
            item: format!("{}{}", "  ".repeat(line.depth), line.label),
            kind: format_kind(&line.kind),
            price: format_price(line.price, precision),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_total(total: f64, precision: usize) -> String {
    format!(
        "{}: {}",
        style("Total").bold(),
        style(format_price(total, precision)).green()
    )
}

pub fn format_price(price: f64, precision: usize) -> String {
    format!("{:.*}", precision, price)
}

fn format_kind(kind: &LineKind) -> String {
    match kind {
        LineKind::Product => style("Product").cyan().to_string(),
        LineKind::Box => style("Box").yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::QuoteLine;

    #[test]
    fn test_format_price_precision() {
        assert_eq!(format_price(1600.0, 2), "1600.00");
        assert_eq!(format_price(40.4, 0), "40");
        assert_eq!(format_price(-3.24, 1), "-3.2");
    }

    #[test]
    fn test_empty_quote_renders_nothing() {
        let quote = Quote {
            lines: vec![],
            total: 0.0,
        };
        assert!(format_quote_table(&quote, 2).is_empty());
    }

    #[test]
    fn test_table_indents_children() {
        let quote = Quote {
            lines: vec![
                QuoteLine {
                    depth: 0,
                    label: "Bundle".to_string(),
                    kind: LineKind::Box,
                    price: 1600.0,
                },
                QuoteLine {
                    depth: 1,
                    label: "iPhone".to_string(),
                    kind: LineKind::Product,
                    price: 1000.0,
                },
            ],
            total: 1600.0,
        };

        let table = format_quote_table(&quote, 2);
        assert!(table.contains("Bundle"));
        assert!(table.contains("iPhone"));
        assert!(table.contains("1600.00"));
        assert!(table.contains("1000.00"));
    }
}
