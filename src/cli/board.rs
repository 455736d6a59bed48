use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::prompt::TerminalPrompt;
use crate::board::render::{render_html, render_text, templates};
use crate::board::{Board, Event, HttpActivityClient};
use crate::core::AppConfig;

const HELP: &str = "Commands:
  list                          re-fetch and show the board
  html                          show the board as HTML
  signup <email> <activity>     sign up for an activity
  unregister <email> <activity> unregister a participant
  help                          show this message
  quit                          leave the session";

#[derive(Debug, PartialEq)]
enum Line {
    List,
    Html,
    Signup { email: String, activity: String },
    Unregister { email: String, activity: String },
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_line(line: &str) -> Line {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    // Activity names contain spaces so they take the rest of the line
    let email_and_activity = || {
        rest.split_once(char::is_whitespace)
            .map(|(email, activity)| (email.to_string(), activity.trim().to_string()))
    };

    match command {
        "" => Line::Empty,
        "list" | "ls" => Line::List,
        "html" => Line::Html,
        "signup" => match email_and_activity() {
            Some((email, activity)) => Line::Signup { email, activity },
            None => Line::Unknown(line.to_string()),
        },
        "unregister" => match email_and_activity() {
            Some((email, activity)) => Line::Unregister { email, activity },
            None => Line::Unknown(line.to_string()),
        },
        "help" | "?" => Line::Help,
        "quit" | "exit" => Line::Quit,
        _ => Line::Unknown(line.to_string()),
    }
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let templates = templates();

    let api = Arc::new(HttpActivityClient::new(&config.api_base_url));
    let mut board = Board::new(api, TerminalPrompt::new(false), config.message_timeout);
    board.load().await;
    println!("{}\n", render_text(board.state()));
    println!("{}", HELP);

    loop {
        let readline = rl.readline(">>> ");
        // Apply any hide timers that fired while waiting on input
        board.drain();

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match parse_line(&line) {
                    Line::List => {
                        board.dispatch(Event::Load);
                        board.settle().await;
                        println!("{}", render_text(board.state()));
                    }
                    Line::Html => println!("{}", render_html(&templates, board.state())?),
                    Line::Signup { email, activity } => {
                        board.dispatch(Event::EmailChanged(email));
                        board.dispatch(Event::ActivitySelected(activity));
                        board.dispatch(Event::Submit);
                        board.settle().await;
                        println!("{}", render_text(board.state()));
                    }
                    Line::Unregister { email, activity } => {
                        board.dispatch(Event::UnregisterRequested { activity, email });
                        board.settle().await;
                        println!("{}", render_text(board.state()));
                    }
                    Line::Help => println!("{}", HELP),
                    Line::Quit => break,
                    Line::Empty => {}
                    Line::Unknown(line) => println!("Unknown command: {}\n{}", line, HELP),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_commands() {
        assert_eq!(parse_line("list"), Line::List);
        assert_eq!(parse_line("  "), Line::Empty);
        assert_eq!(parse_line("quit"), Line::Quit);
        assert_eq!(
            parse_line("signup a@x.com Chess Club"),
            Line::Signup {
                email: "a@x.com".into(),
                activity: "Chess Club".into()
            }
        );
        assert_eq!(
            parse_line("unregister  a@x.com   Programming Class "),
            Line::Unregister {
                email: "a@x.com".into(),
                activity: "Programming Class".into()
            }
        );
        assert_eq!(
            parse_line("signup a@x.com"),
            Line::Unknown("signup a@x.com".into())
        );
        assert_eq!(parse_line("dance"), Line::Unknown("dance".into()));
    }
}
