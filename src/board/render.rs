//! Rendering of the board view state. HTML goes through Handlebars so
//! every activity name, description and email is escaped; the terminal
//! rendering is plain text.

use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

use super::state::{
    ActivityCard, ListArea, LOAD_FAILED_MESSAGE, NO_PARTICIPANTS_MESSAGE, Notice, SignupForm,
    ViewState,
};
use super::update::unregister_question;

const BOARD_TEMPLATE: &str = "board";
const CONFIRM_TEMPLATE: &str = "confirm";
const ACTIVITY_CARD_PARTIAL: &str = "activity_card";

const ACTIVITY_CARD: &str = r#"<div class="activity-card">
  <h4>{{name}}</h4>
  <p>{{description}}</p>
  <p><strong>Schedule:</strong> {{schedule}}</p>
  <p><strong>Availability:</strong> {{spots_left}} spots left</p>
  <div class="participants-section">
    <h5>Participants</h5>
    <ul class="participants-list" aria-live="polite">
    {{#each participants}}
      <li class="participant-badge">
        <span class="participant-email">{{email}}</span>
        <form class="unregister-form" method="get" action="/board/unregister">
          <input type="hidden" name="activity" value="{{activity}}" />
          <input type="hidden" name="email" value="{{email}}" />
          <button type="submit" class="delete-participant" aria-label="{{label}}">&times;</button>
        </form>
      </li>
    {{else}}
      <li class="no-participants">No participants yet</li>
    {{/each}}
    </ul>
  </div>
</div>
"#;

const BOARD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity Board</title>
</head>
<body>
  <main>
    <section id="activities-container">
      <h3>Available Activities</h3>
      <div id="activities-list">
      {{#if failed}}
        <p>{{failed_message}}</p>
      {{else}}
        {{#if loading}}
        <p>Loading activities...</p>
        {{else}}
        {{#each cards}}
        {{> activity_card}}
        {{/each}}
        {{/if}}
      {{/if}}
      </div>
    </section>

    <section id="signup-container">
      <h3>Sign Up for an Activity</h3>
      <form id="signup-form" method="post" action="/board/signup">
        <div class="form-group">
          <label for="email">Student Email:</label>
          <input type="email" id="email" name="email" required value="{{form.email}}" />
        </div>
        <div class="form-group">
          <label for="activity">Select Activity:</label>
          <select id="activity" name="activity" required>
            <option value="">-- Select an activity --</option>
            {{#each options}}
            <option value="{{name}}"{{#if selected}} selected{{/if}}>{{name}}</option>
            {{/each}}
          </select>
        </div>
        <button type="submit">Sign Up</button>
      </form>
      <div id="message" class="{{message.class}}">{{message.text}}</div>
    </section>
  </main>
</body>
</html>
"#;

const CONFIRM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Activity Board</title>
</head>
<body>
  <main>
    <form id="unregister-confirm" method="post" action="/board/unregister">
      <p>{{question}}</p>
      <input type="hidden" name="activity" value="{{activity}}" />
      <input type="hidden" name="email" value="{{email}}" />
      <button type="submit">Unregister</button>
      <a href="/">Cancel</a>
    </form>
  </main>
</body>
</html>
"#;

#[derive(Serialize)]
struct ConfirmPage<'a> {
    question: String,
    activity: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct OptionView<'a> {
    name: &'a str,
    selected: bool,
}

#[derive(Serialize)]
struct MessageView<'a> {
    class: String,
    text: &'a str,
}

#[derive(Serialize)]
struct BoardPage<'a> {
    loading: bool,
    failed: bool,
    failed_message: &'static str,
    cards: &'a [ActivityCard],
    form: &'a SignupForm,
    options: Vec<OptionView<'a>>,
    message: MessageView<'a>,
}

impl<'a> BoardPage<'a> {
    fn new(state: &'a ViewState) -> Self {
        let options = state
            .options
            .iter()
            .map(|name| OptionView {
                name,
                selected: *name == state.form.activity,
            })
            .collect();

        let message = match &state.notice {
            Notice::Hidden => MessageView {
                class: String::from("message hidden"),
                text: "",
            },
            Notice::Visible { kind, text, .. } => MessageView {
                class: format!("message {}", kind.class()),
                text,
            },
        };

        Self {
            loading: state.list == ListArea::Loading,
            failed: state.list == ListArea::Failed,
            failed_message: LOAD_FAILED_MESSAGE,
            cards: state.list.cards(),
            form: &state.form,
            options,
            message,
        }
    }
}

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_partial(ACTIVITY_CARD_PARTIAL, ACTIVITY_CARD)
        .expect("Failed to register partial");
    registry
        .register_template_string(BOARD_TEMPLATE, BOARD_PAGE)
        .expect("Failed to register template");
    registry
        .register_template_string(CONFIRM_TEMPLATE, CONFIRM_PAGE)
        .expect("Failed to register template");
    registry
}

/// Render the whole board page as HTML.
pub fn render_html(templates: &Handlebars, state: &ViewState) -> Result<String> {
    let page = BoardPage::new(state);
    Ok(templates.render(BOARD_TEMPLATE, &page)?)
}

/// Render the page asking whether to unregister `email` from `activity`.
pub fn render_confirm(templates: &Handlebars, activity: &str, email: &str) -> Result<String> {
    let page = ConfirmPage {
        question: unregister_question(activity, email),
        activity,
        email,
    };
    Ok(templates.render(CONFIRM_TEMPLATE, &page)?)
}

/// Render the board for a terminal.
pub fn render_text(state: &ViewState) -> String {
    let mut out = vec![];

    match &state.list {
        ListArea::Loading => out.push(String::from("Loading activities...")),
        ListArea::Failed => out.push(LOAD_FAILED_MESSAGE.to_string()),
        ListArea::Loaded(cards) if cards.is_empty() => {
            out.push(String::from("No activities available"))
        }
        ListArea::Loaded(cards) => {
            for card in cards {
                out.push(format!("## {}", card.name));
                out.push(card.description.clone());
                out.push(format!("Schedule: {}", card.schedule));
                out.push(format!("Availability: {} spots left", card.spots_left));
                out.push(String::from("Participants:"));
                if card.shows_placeholder() {
                    out.push(format!("  {}", NO_PARTICIPANTS_MESSAGE));
                } else {
                    for row in &card.participants {
                        out.push(format!("  - {}", row.email));
                    }
                }
                out.push(String::new());
            }
        }
    }

    if let Notice::Visible { kind, text, .. } = &state.notice {
        out.push(format!("[{}] {}", kind.class(), text));
    }

    out.join("\n").trim_end().to_string()
}
