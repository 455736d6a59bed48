//! The board's single update function. Every user action and every
//! request completion arrives as an `Event`; `update` changes the view
//! state and returns the `Effect`s the runtime has to carry out. Any
//! successful mutation asks for a full re-fetch instead of patching the
//! list locally.

use std::time::Duration;

use super::client::RequestError;
use super::models::Activities;
use super::state::{NoticeKind, ViewState};

pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_REJECTED_MESSAGE: &str = "An error occurred";
pub const UNREGISTER_REJECTED_MESSAGE: &str = "Failed to unregister participant";
pub const UNREGISTER_FAILED_MESSAGE: &str = "Network error while unregistering participant";

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Page load
    Load,
    ActivitiesFetched(Result<Activities, RequestError>),
    EmailChanged(String),
    ActivitySelected(String),
    Submit,
    SignupFinished(Result<String, RequestError>),
    /// The unregister control for `email` on `activity` was activated
    UnregisterRequested { activity: String, email: String },
    /// The user confirmed the unregister prompt
    UnregisterConfirmed { activity: String, email: String },
    UnregisterFinished {
        activity: String,
        email: String,
        result: Result<(), RequestError>,
    },
    HideNotice { generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchActivities,
    Signup { activity: String, email: String },
    /// Ask the user before unregistering; dispatch `UnregisterConfirmed`
    /// only on yes
    Confirm {
        activity: String,
        email: String,
        question: String,
    },
    Unregister { activity: String, email: String },
    /// Blocking notification
    Alert(String),
    HideNoticeAfter { generation: u64, delay: Duration },
}

pub fn unregister_question(activity: &str, email: &str) -> String {
    format!("Unregister {} from {}?", email, activity)
}

pub fn update(state: &mut ViewState, event: Event, message_timeout: Duration) -> Vec<Effect> {
    match event {
        Event::Load => vec![Effect::FetchActivities],
        Event::ActivitiesFetched(Ok(activities)) => {
            tracing::debug!("Rendering {} activities", activities.len());
            state.show_activities(&activities);
            vec![]
        }
        Event::ActivitiesFetched(Err(err)) => {
            // A failed fetch always replaces the whole list, so a row
            // removed ahead of this fetch can't linger as stale state
            tracing::error!("Error fetching activities: {}", err);
            state.show_load_failure();
            vec![]
        }
        Event::EmailChanged(email) => {
            state.form.email = email;
            vec![]
        }
        Event::ActivitySelected(activity) => {
            state.form.activity = activity;
            vec![]
        }
        Event::Submit => {
            if !state.form.is_complete() {
                tracing::debug!("Ignoring signup with missing fields");
                return vec![];
            }
            vec![Effect::Signup {
                activity: state.form.activity.trim().to_string(),
                email: state.form.email.trim().to_string(),
            }]
        }
        Event::SignupFinished(result) => {
            let mut effects = vec![];
            let generation = match result {
                Ok(message) => {
                    state.form.reset();
                    effects.push(Effect::FetchActivities);
                    state.show_notice(NoticeKind::Success, &message)
                }
                Err(err @ RequestError::Rejected { .. }) => {
                    let text = err.detail().unwrap_or(SIGNUP_REJECTED_MESSAGE);
                    state.show_notice(NoticeKind::Error, text)
                }
                Err(err) => {
                    tracing::error!("Error signing up: {}", err);
                    state.show_notice(NoticeKind::Error, SIGNUP_FAILED_MESSAGE)
                }
            };
            effects.push(Effect::HideNoticeAfter {
                generation,
                delay: message_timeout,
            });
            effects
        }
        Event::UnregisterRequested { activity, email } => {
            let question = unregister_question(&activity, &email);
            vec![Effect::Confirm {
                activity,
                email,
                question,
            }]
        }
        Event::UnregisterConfirmed { activity, email } => {
            vec![Effect::Unregister { activity, email }]
        }
        Event::UnregisterFinished {
            activity,
            email,
            result,
        } => match result {
            Ok(()) => {
                state.remove_participant(&activity, &email);
                vec![Effect::FetchActivities]
            }
            Err(err @ RequestError::Rejected { .. }) => vec![Effect::Alert(
                err.detail().unwrap_or(UNREGISTER_REJECTED_MESSAGE).to_string(),
            )],
            Err(err) => {
                tracing::error!("Error unregistering: {}", err);
                vec![Effect::Alert(UNREGISTER_FAILED_MESSAGE.to_string())]
            }
        },
        Event::HideNotice { generation } => {
            state.hide_notice(generation);
            vec![]
        }
    }
}
