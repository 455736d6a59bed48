use std::sync::Arc;

use anyhow::Result;

use crate::board::render::{render_html, render_text, templates};
use crate::board::{AssumeYes, Board, HttpActivityClient};
use crate::core::AppConfig;

pub async fn run(html: bool, config: &AppConfig) -> Result<()> {
    let api = Arc::new(HttpActivityClient::new(&config.api_base_url));
    let mut board = Board::new(api, AssumeYes, config.message_timeout);
    board.load().await;

    if html {
        println!("{}", render_html(&templates(), board.state())?);
    } else {
        println!("{}", render_text(board.state()));
    }

    Ok(())
}
