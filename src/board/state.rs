//! View state for the activity board. Everything here is plain data
//! rebuilt from the latest fetch; nothing is cached between fetches.

use serde::Serialize;

use super::models::{Activities, Activity};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_MESSAGE: &str = "No participants yet";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
    /// Accessible label of the unregister control
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let participants = activity
            .details
            .participants
            .iter()
            .map(|email| ParticipantRow {
                activity: activity.name.clone(),
                email: email.clone(),
                label: format!("Unregister {} from {}", email, activity.name),
            })
            .collect();

        Self {
            name: activity.name.clone(),
            description: activity.details.description.clone(),
            schedule: activity.details.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    /// Drop the row for `email`. Returns whether a row was removed.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|row| row.email != email);
        self.participants.len() != before
    }

    /// A card with no participants renders a single placeholder row
    /// instead of any unregister controls.
    pub fn shows_placeholder(&self) -> bool {
        self.participants.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListArea {
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed,
}

impl ListArea {
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ListArea::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|c| c.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.activity.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// The signup outcome message. Each time a message is shown it gets a
/// new generation so a stale hide timer can't hide a newer message.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Notice {
    #[default]
    Hidden,
    Visible {
        kind: NoticeKind,
        text: String,
        generation: u64,
    },
}

impl Notice {
    pub fn is_visible(&self) -> bool {
        matches!(self, Notice::Visible { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub list: ListArea,
    /// Options of the activity select, one per activity name
    pub options: Vec<String>,
    pub form: SignupForm,
    pub notice: Notice,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list and the select options with a fresh fetch.
    pub fn show_activities(&mut self, activities: &Activities) {
        let cards = activities.iter().map(ActivityCard::from_activity).collect();
        self.list = ListArea::Loaded(cards);
        self.options = activities.names();
    }

    pub fn show_load_failure(&mut self) {
        self.list = ListArea::Failed;
    }

    /// Show a message and return its generation for the hide timer.
    pub fn show_notice(&mut self, kind: NoticeKind, text: &str) -> u64 {
        self.generation += 1;
        self.notice = Notice::Visible {
            kind,
            text: text.to_string(),
            generation: self.generation,
        };
        self.generation
    }

    /// Hide the message if it is still the one shown at `generation`.
    pub fn hide_notice(&mut self, generation: u64) -> bool {
        match &self.notice {
            Notice::Visible { generation: g, .. } if *g == generation => {
                self.notice = Notice::Hidden;
                true
            }
            _ => false,
        }
    }

    pub fn remove_participant(&mut self, activity: &str, email: &str) -> bool {
        match &mut self.list {
            ListArea::Loaded(cards) => cards
                .iter_mut()
                .find(|c| c.name == activity)
                .map(|c| c.remove_participant(email))
                .unwrap_or(false),
            _ => false,
        }
    }
}
