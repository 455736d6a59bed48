use handlebars::Handlebars;

use crate::api::public::ApiError;
use crate::board::models::{Activities, Activity, ActivityDetails};
use crate::board::render;

pub struct AppState {
    pub activities: Activities,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(activities: Activities) -> Self {
        Self {
            activities,
            templates: render::templates(),
        }
    }

    /// Add `email` to the activity's participants and return the
    /// confirmation message.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<String, ApiError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| ApiError::NotFound(String::from("Activity not found")))?;

        if activity.has_participant(email) {
            return Err(ApiError::BadRequest(String::from(
                "Student is already signed up",
            )));
        }
        if activity.is_full() {
            return Err(ApiError::BadRequest(String::from("Activity is full")));
        }

        activity.details.participants.push(email.to_string());
        tracing::debug!("Signed up {} for {}", email, name);

        Ok(format!("Signed up {} for {}", email, name))
    }

    pub fn unregister(&mut self, name: &str, email: &str) -> Result<String, ApiError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| ApiError::NotFound(String::from("Activity not found")))?;

        if !activity.has_participant(email) {
            return Err(ApiError::BadRequest(String::from(
                "Student is not signed up for this activity",
            )));
        }

        activity.details.participants.retain(|p| p != email);
        tracing::debug!("Unregistered {} from {}", email, name);

        Ok(format!("Unregistered {} from {}", email, name))
    }
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity::new(
        name,
        ActivityDetails {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    )
}

/// The activities a fresh server starts with.
pub fn default_activities() -> Activities {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &[],
        ),
    ]
    .into_iter()
    .collect()
}
