//! The activity board: a view over the activities API that renders the
//! list, signs people up and unregisters them, re-fetching the whole
//! collection after every successful change.

pub mod client;
pub mod models;
pub mod render;
pub mod runtime;
pub mod state;
pub mod update;

pub use client::{ActivityApi, HttpActivityClient, RequestError};
pub use models::{Activities, Activity, ActivityDetails};
pub use runtime::{AssumeYes, Board, Prompt};
pub use state::{ActivityCard, ListArea, Notice, NoticeKind, ViewState};
pub use update::{Effect, Event, update};
