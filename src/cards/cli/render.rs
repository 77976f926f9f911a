//! # Rendering Module
//!
//! Styled terminal output through `outstanding` templates, with automatic terminal
//! color detection.
//!
//! Column widths, alignment and padding are computed here because they need
//! Unicode-aware width handling. Templates only lay the cells out and pick styles.

use super::styles::{names, CARDS_THEME};
use super::templates::{MESSAGES_TEMPLATE, TABLE_TEMPLATE};
use cards::api::{CmdMessage, MessageLevel};
use cards::config::TableFormat;
use cards::model::{Card, CardState};
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Space between columns.
pub const COLUMN_GAP: &str = "  ";
/// Minimum padding added to a header to get its column width.
pub const HEADER_PADDING: usize = 2;

const HEADERS: [&str; 4] = ["ID", "state", "owner", "summary"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const ALIGNS: [Align; 4] = [Align::Right, Align::Left, Align::Left, Align::Left];

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    rows: Vec<Vec<CellData>>,
    gap: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders cards as a table with `ID`, `state`, `owner` and `summary` columns.
pub fn render_card_table(cards: &[Card], format: TableFormat) -> String {
    render_card_table_internal(cards, format, None)
}

fn render_card_table_internal(
    cards: &[Card],
    format: TableFormat,
    use_color: Option<bool>,
) -> String {
    let body: Vec<([String; 4], [&'static str; 4])> = cards
        .iter()
        .map(|card| {
            (
                [
                    card.id.to_string(),
                    card.state.to_string(),
                    card.owner.clone().unwrap_or_default(),
                    card.summary.clone().unwrap_or_default(),
                ],
                [
                    names::ID,
                    state_style(card.state),
                    names::OWNER,
                    names::SUMMARY,
                ],
            )
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width() + HEADER_PADDING);
    for (cells, _) in &body {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut rows = Vec::with_capacity(body.len() + 2);
    rows.push(layout_row(
        HEADERS.map(str::to_string),
        [names::HEADER; 4],
        &widths,
    ));
    if format == TableFormat::Simple {
        rows.push(layout_row(
            widths.map(|w| "-".repeat(w)),
            [names::RULE; 4],
            &widths,
        ));
    }
    for (cells, styles) in body {
        rows.push(layout_row(cells, styles, &widths));
    }

    let data = TableData {
        rows,
        gap: COLUMN_GAP,
    };
    let theme = ThemeChoice::from(&*CARDS_THEME);
    match use_color {
        Some(c) => render_with_color(TABLE_TEMPLATE, &data, theme, c),
        None => render(TABLE_TEMPLATE, &data, theme),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Pads each cell to its column width, then drops trailing empty cells and the
/// padding of the last one so lines carry no trailing whitespace.
fn layout_row(cells: [String; 4], styles: [&'static str; 4], widths: &[usize; 4]) -> Vec<CellData> {
    let mut row: Vec<CellData> = cells
        .into_iter()
        .zip(styles)
        .zip(widths.iter().zip(ALIGNS))
        .map(|((text, style), (width, align))| CellData {
            text: pad(&text, *width, align),
            style,
        })
        .collect();

    while row.last().is_some_and(|cell| cell.text.trim().is_empty()) {
        row.pop();
    }
    if let Some(last) = row.last_mut() {
        last.text.truncate(last.text.trim_end().len());
    }
    row
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

fn state_style(state: CardState) -> &'static str {
    match state {
        CardState::Todo => names::STATE_TODO,
        CardState::InProgress => names::STATE_IN_PROGRESS,
        CardState::Waiting => names::STATE_WAITING,
        CardState::Done => names::STATE_DONE,
    }
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };

    let theme = ThemeChoice::from(&*CARDS_THEME);
    match use_color {
        Some(c) => render_with_color(MESSAGES_TEMPLATE, &data, theme, c),
        None => render(MESSAGES_TEMPLATE, &data, theme),
    }
    .unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}
