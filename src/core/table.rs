//! Fixed-width table rendering. Pure: identical inputs always produce
//! byte-identical output.

use crate::domain::model::{Align, ColumnSchema, RowRecord};
use crate::utils::error::{BotError, Result};

pub fn render(title: &str, schema: ColumnSchema, rows: &[RowRecord]) -> Result<String> {
    for row in rows {
        check_row(schema, row)?;
    }

    let widths = column_widths(schema, rows);
    let rule = horizontal_rule(&widths);
    // inner width of the title row: every column plus its padding and
    // the separators between columns
    let span: usize = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len() - 1;

    let mut out = String::new();
    out.push('+');
    out.push_str(&"-".repeat(span));
    out.push_str("+\n|");
    out.push_str(&pad(title, span, Align::Center));
    out.push_str("|\n");
    out.push_str(&rule);
    out.push('\n');

    let header: Vec<&str> = schema.columns.iter().map(|(name, _)| *name).collect();
    out.push_str(&render_row(schema, &widths, &header));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in rows {
        let cells: Vec<&str> = row.values().collect();
        out.push_str(&render_row(schema, &widths, &cells));
        out.push('\n');
    }
    out.push_str(&rule);

    Ok(out)
}

fn check_row(schema: ColumnSchema, row: &RowRecord) -> Result<()> {
    let expected: Vec<&str> = schema.columns.iter().map(|(name, _)| *name).collect();
    let got: Vec<&str> = row.fields.iter().map(|(name, _)| *name).collect();
    if expected != got {
        return Err(BotError::Render {
            expected: expected.join(", "),
            got: got.join(", "),
        });
    }
    Ok(())
}

fn column_widths(schema: ColumnSchema, rows: &[RowRecord]) -> Vec<usize> {
    let mut widths: Vec<usize> = schema
        .columns
        .iter()
        .map(|(name, _)| name.chars().count())
        .collect();
    for row in rows {
        for (i, value) in row.values().enumerate() {
            widths[i] = widths[i].max(value.chars().count());
        }
    }
    widths
}

fn horizontal_rule(widths: &[usize]) -> String {
    let mut rule = String::from("+");
    for width in widths {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
    }
    rule
}

fn render_row(schema: ColumnSchema, widths: &[usize], cells: &[&str]) -> String {
    let mut line = String::from("|");
    for (i, cell) in cells.iter().enumerate() {
        let (_, align) = schema.columns[i];
        line.push(' ');
        line.push_str(&pad(cell, widths[i], align));
        line.push_str(" |");
    }
    line
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let gap = width - len;
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}
