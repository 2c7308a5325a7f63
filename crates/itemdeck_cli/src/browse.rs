//! Line-driven two-screen session.
//!
//! Main screen: `open`. List screen: `type <text>`, `filter [text]`, `back`.
//! `quit` or end of input leaves from either screen.

use anyhow::Result;
use itemdeck_core::view::labels;
use itemdeck_core::{Catalog, Screen, ViewState};
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

pub fn run(catalog: &Catalog, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut view = ViewState::new(catalog);
    render(&view, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let (command, argument) = match line.trim_start().split_once(' ') {
            Some((command, rest)) => (command, Some(rest)),
            None => (line.trim(), None),
        };

        match (view.screen(), command) {
            (_, "quit" | "exit") => break,
            (_, "") => {}
            (Screen::Main, "open") => {
                view.open_item_list()?;
            }
            (Screen::ItemList, "type") => {
                if let Some(list) = view.item_list_mut() {
                    list.set_query(argument.unwrap_or_default());
                }
            }
            (Screen::ItemList, "filter") => {
                if let Some(list) = view.item_list_mut() {
                    if let Some(text) = argument {
                        list.set_query(text);
                    }
                    list.apply_filter();
                }
            }
            (Screen::ItemList, "back") => view.navigate_back()?,
            (screen, other) => {
                writeln!(out, "unknown command `{other}` on {screen} screen")?;
                writeln!(out, "{}", help(screen))?;
                continue;
            }
        }

        render(&view, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn help(screen: Screen) -> &'static str {
    match screen {
        Screen::Main => "commands: open, quit",
        Screen::ItemList => "commands: type <text>, filter [text], back, quit",
    }
}

fn render(view: &ViewState<'_>, out: &mut impl Write) -> Result<()> {
    match (view.screen(), view.item_list()) {
        (Screen::ItemList, Some(list)) => {
            writeln!(out, "{}", labels::ITEM_LIST_TITLE)?;
            writeln!(
                out,
                "{}: {}   [filter] {}",
                labels::FILTER_INPUT,
                list.query(),
                labels::FILTER_ACTION
            )?;
            writeln!(out)?;
            if let Some(message) = list.empty_state_message() {
                writeln!(out, "{message}")?;
            } else {
                for row in list.rows() {
                    for line in row.lines() {
                        writeln!(out, "{line}")?;
                    }
                    writeln!(out)?;
                }
            }
            writeln!(out, "[back] {}", labels::BACK_TO_MAIN)?;
        }
        _ => {
            writeln!(out, "[open] {}", labels::OPEN_ITEM_LIST)?;
        }
    }
    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}
