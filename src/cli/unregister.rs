use std::sync::Arc;

use anyhow::{Result, bail};

use super::prompt::TerminalPrompt;
use crate::board::render::render_text;
use crate::board::{Board, Event, HttpActivityClient};
use crate::core::AppConfig;

pub async fn run(activity: String, email: String, yes: bool, config: &AppConfig) -> Result<()> {
    let api = Arc::new(HttpActivityClient::new(&config.api_base_url));
    let mut board = Board::new(api, TerminalPrompt::new(yes), config.message_timeout);
    board.load().await;

    board.dispatch(Event::UnregisterRequested { activity, email });
    board.settle().await;

    // Rejections and network failures only surface as alerts
    if let Some(alert) = board.prompt().last_alert() {
        bail!("{}", alert);
    }

    println!("{}", render_text(board.state()));

    Ok(())
}
