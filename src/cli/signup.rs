use std::sync::Arc;

use anyhow::{Result, bail};

use crate::board::{AssumeYes, Board, Event, HttpActivityClient, Notice, NoticeKind};
use crate::core::AppConfig;

pub async fn run(activity: String, email: String, config: &AppConfig) -> Result<()> {
    let api = Arc::new(HttpActivityClient::new(&config.api_base_url));
    let mut board = Board::new(api, AssumeYes, config.message_timeout);
    board.load().await;

    board.dispatch(Event::EmailChanged(email));
    board.dispatch(Event::ActivitySelected(activity));
    board.dispatch(Event::Submit);
    board.settle().await;

    match &board.state().notice {
        Notice::Visible {
            kind: NoticeKind::Success,
            text,
            ..
        } => println!("{}", text),
        Notice::Visible { text, .. } => bail!("{}", text),
        Notice::Hidden => bail!("Both --activity and --email are required"),
    }

    Ok(())
}
