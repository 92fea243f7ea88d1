// 📋 Table Renderer - grouped account summary
// Accounts sorted by bank then account name, a rule between banks,
// ⚠ on accounts the error correlator flagged.
//
// Cells are ratatui `Line`s carrying their column alignment. Each table line
// is built from them and written straight to the output, so the table has no
// size limit. No terminal backend is involved.

use std::io::{self, Write};

use ratatui::{
    layout::Alignment,
    symbols::line,
    text::{Line, Span},
};

use crate::model::Account;

pub const WARNING_GLYPH: &str = "⚠";

const COLUMNS: usize = 5;
const HEADERS: [&str; COLUMNS] = ["Bank", "Account Name", "Balance", "Currency", ""];
const ALIGNMENTS: [Alignment; COLUMNS] = [
    Alignment::Center,
    Alignment::Left,
    Alignment::Right,
    Alignment::Left,
    Alignment::Left,
];

const BORDER: line::Set = line::NORMAL;

// ============================================================================
// LAYOUT (sort + group, no drawing)
// ============================================================================

/// One body line of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine {
    /// Bank, account name, balance, currency, status. The bank cell is blank
    /// on every row after the first of its group.
    Row([String; COLUMNS]),
    /// Rule between two banks
    Separator,
}

/// Stable sort by organization name, then account name (byte order)
pub fn sort_accounts(accounts: &[Account]) -> Vec<&Account> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by(|a, b| {
        a.org
            .name
            .cmp(&b.org.name)
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

// Control characters would break the line structure
fn clean_cell(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Sorted rows with a separator wherever the organization name changes
pub fn layout_rows(accounts: &[Account]) -> Vec<TableLine> {
    let mut lines = Vec::with_capacity(accounts.len());
    let mut previous_org: Option<&str> = None;

    for account in sort_accounts(accounts) {
        let org = account.org.name.as_str();

        let bank = match previous_org {
            Some(prev) if prev == org => String::new(),
            Some(_) => {
                lines.push(TableLine::Separator);
                clean_cell(org)
            }
            None => clean_cell(org),
        };
        previous_org = Some(org);

        let status = if account.possible_error {
            WARNING_GLYPH.to_string()
        } else {
            String::new()
        };

        lines.push(TableLine::Row([
            bank,
            clean_cell(&account.name),
            clean_cell(&account.balance),
            clean_cell(&account.currency),
            status,
        ]));
    }

    lines
}

fn column_widths(lines: &[TableLine]) -> [usize; COLUMNS] {
    let mut widths = HEADERS.map(|header| Span::raw(header).width().max(1));

    for line in lines {
        if let TableLine::Row(cells) = line {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(Span::raw(cell.as_str()).width());
            }
        }
    }

    widths
}

// ============================================================================
// DRAWING
// ============================================================================

fn body_cells(cells: &[String; COLUMNS]) -> [Line<'_>; COLUMNS] {
    std::array::from_fn(|i| Line::from(cells[i].as_str()).alignment(ALIGNMENTS[i]))
}

/// Text of `line` padded out to `width` according to its alignment
fn pad(line: &Line, width: usize) -> String {
    let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
    let slack = width.saturating_sub(line.width());

    match line.alignment.unwrap_or(Alignment::Left) {
        Alignment::Left => format!("{}{}", text, " ".repeat(slack)),
        Alignment::Right => format!("{}{}", " ".repeat(slack), text),
        Alignment::Center => {
            let left = slack / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
        }
    }
}

fn format_row(cells: &[Line; COLUMNS], widths: &[usize; COLUMNS]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {} ", pad(cell, *width)))
        .collect();
    format!(
        "{}{}{}",
        BORDER.vertical,
        padded.join(BORDER.vertical),
        BORDER.vertical
    )
}

fn format_rule(left: &str, junction: &str, right: &str, widths: &[usize; COLUMNS]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| BORDER.horizontal.repeat(width + 2))
        .collect();
    format!("{}{}{}", left, segments.join(junction), right)
}

// ============================================================================
// PUBLIC ENTRY POINT
// ============================================================================

/// Render the grouped account table to `out`. Zero accounts renders the
/// header alone.
pub fn render_table<W: Write>(accounts: &[Account], out: &mut W) -> io::Result<()> {
    let lines = layout_rows(accounts);
    let widths = column_widths(&lines);

    let middle_rule = format_rule(
        BORDER.vertical_right,
        BORDER.cross,
        BORDER.vertical_left,
        &widths,
    );

    writeln!(
        out,
        "{}",
        format_rule(BORDER.top_left, BORDER.horizontal_down, BORDER.top_right, &widths)
    )?;
    writeln!(out, "{}", format_row(&HEADERS.map(Line::from), &widths))?;
    if !lines.is_empty() {
        writeln!(out, "{}", middle_rule)?;
    }

    for line in &lines {
        match line {
            TableLine::Row(cells) => writeln!(out, "{}", format_row(&body_cells(cells), &widths))?,
            TableLine::Separator => writeln!(out, "{}", middle_rule)?,
        }
    }

    writeln!(
        out,
        "{}",
        format_rule(BORDER.bottom_left, BORDER.horizontal_up, BORDER.bottom_right, &widths)
    )?;
    out.flush()
}
