use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{client::UrlClient, info, view::ViewState, warning};

use super::{expand, render, shorten};

enum Action<'a> {
    Shorten(&'a str),
    Expand(&'a str),
    Show,
    Quit,
    Help,
}

fn parse(line: &str) -> Option<Action<'_>> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    match (cmd, arg) {
        ("shorten", a) if !a.is_empty() => Some(Action::Shorten(a)),
        ("expand", a) if !a.is_empty() => Some(Action::Expand(a)),
        ("show", _) => Some(Action::Show),
        ("quit" | "exit", _) => Some(Action::Quit),
        ("help", _) => Some(Action::Help),
        _ => None,
    }
}

fn prompt() {
    print!("> ");
    if let Err(e) = std::io::stdout().flush() {
        warning!("Failed to write prompt: {}", e);
    }
}

/// Reads commands from stdin until `quit` or end of input, threading one view
/// through every call. Returns the final view.
pub async fn shell(client: &UrlClient) -> ViewState {
    info!("Connected to {}. Type `help` for commands.", client.base_url());

    let mut view = ViewState::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Failed to read input: {}", e);
                break;
            }
        };

        match parse(&line) {
            Some(Action::Shorten(full_url)) => view = shorten(client, view, full_url).await,
            Some(Action::Expand(short_url)) => view = expand(client, view, short_url, false).await,
            Some(Action::Show) => render(&view),
            Some(Action::Quit) => break,
            Some(Action::Help) => {
                info!("shorten <full url> | expand <short url> | show | quit");
            }
            None if line.trim().is_empty() => {}
            None => warning!("Unknown command: {}", line.trim()),
        }
        prompt();
    }

    view
}
