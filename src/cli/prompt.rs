use rustyline::DefaultEditor;

use crate::board::Prompt;

/// Confirmations and alerts on the terminal.
pub struct TerminalPrompt {
    editor: Option<DefaultEditor>,
    assume_yes: bool,
    last_alert: Option<String>,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        // Without a usable terminal every confirmation is declined
        let editor = if assume_yes {
            None
        } else {
            match DefaultEditor::new() {
                Ok(editor) => Some(editor),
                Err(err) => {
                    tracing::warn!("Terminal prompt unavailable: {}", err);
                    None
                }
            }
        };
        Self {
            editor,
            assume_yes,
            last_alert: None,
        }
    }

    /// The most recent alert shown, if any.
    pub fn last_alert(&self) -> Option<&str> {
        self.last_alert.as_deref()
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let Some(editor) = self.editor.as_mut() else {
            return false;
        };
        match editor.readline(&format!("{} [y/N] ", question)) {
            Ok(answer) => is_yes(&answer),
            Err(_) => false,
        }
    }

    fn alert(&mut self, message: &str) {
        println!("! {}", message);
        self.last_alert = Some(message.to_string());
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_only_accepts_explicit_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" Yes \n"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
        assert!(!is_yes("yeah"));
    }

    #[test]
    fn it_remembers_the_last_alert() {
        let mut prompt = TerminalPrompt::new(true);
        assert_eq!(prompt.last_alert(), None);
        assert!(prompt.confirm("Unregister a@x.com from Chess Club?"));

        prompt.alert("Activity not found");
        prompt.alert("Student is not signed up for this activity");
        assert_eq!(
            prompt.last_alert(),
            Some("Student is not signed up for this activity")
        );
    }
}
