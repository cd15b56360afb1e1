//! Presentation of the form as terminal text.
//!
//! A [`Screen`] is a plain snapshot of what the user should see; it holds no
//! reference to the controller and has no behaviour beyond `Display`.

use crate::controller::{FormState, SubmissionController};
use crate::domain::Field;
use std::fmt;

pub const HEADING: &str = "Contact Us";
pub const SUBMIT_LABEL: &str = "Submit";
pub const LOADING_MESSAGE: &str = "Submitting your form...";
pub const CONFIRMATION: &str = "We've received your details, and\nwe'll get back to you shortly.";
pub const RESTART_LABEL: &str = "Submit Another Form";

/// One labelled input with its adjacent error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub field: Field,
    pub required: bool,
    pub value: String,
    pub error: Option<String>,
}

/// What the form currently looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Form {
        rows: Vec<FieldRow>,
        notice: Option<String>,
    },
    Loading,
    Submitted,
}

impl Screen {
    /// Snapshot the controller.
    pub fn from_controller(controller: &SubmissionController) -> Self {
        match controller.state() {
            FormState::Idle => Screen::Form {
                rows: Field::ALL
                    .into_iter()
                    .map(|field| FieldRow {
                        field,
                        required: field.is_required(),
                        value: controller.fields().get(field).to_string(),
                        error: controller.error_for(field),
                    })
                    .collect(),
                notice: controller.notice().map(str::to_string),
            },
            FormState::Loading => Screen::Loading,
            FormState::Submitted => Screen::Submitted,
        }
    }
}

impl fmt::Display for FieldRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            writeln!(f, "{} *", self.field.label())?;
        } else {
            writeln!(f, "{}", self.field.label())?;
        }

        if self.value.is_empty() {
            writeln!(f, "  [{}]", self.field.placeholder())?;
        } else {
            writeln!(f, "  {}", self.value)?;
        }

        if let Some(error) = &self.error {
            writeln!(f, "  ! {}", error)?;
        }
        Ok(())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADING)?;
        writeln!(f, "{}", "=".repeat(HEADING.len()))?;
        writeln!(f)?;

        match self {
            Screen::Form { rows, notice } => {
                if let Some(notice) = notice {
                    writeln!(f, "! {}", notice)?;
                    writeln!(f)?;
                }
                for row in rows {
                    write!(f, "{}", row)?;
                }
                writeln!(f)?;
                writeln!(f, "[ {} ]", SUBMIT_LABEL)
            }
            Screen::Loading => writeln!(f, "{}", LOADING_MESSAGE),
            Screen::Submitted => {
                writeln!(f, "{}", CONFIRMATION)?;
                writeln!(f)?;
                writeln!(f, "[ {} ]", RESTART_LABEL)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(field: Field, value: &str, error: Option<&str>) -> FieldRow {
        FieldRow {
            field,
            required: field.is_required(),
            value: value.to_string(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_row_shows_placeholder_when_empty() {
        let text = row(Field::Email, "", None).to_string();
        assert_eq!(text, "Email *\n  [example@email.domain]\n");
    }

    #[test]
    fn test_row_error_is_adjacent() {
        let text = row(Field::Name, "A", Some("Name must contain at least 2 characters")).to_string();
        assert_eq!(
            text,
            "Name *\n  A\n  ! Name must contain at least 2 characters\n"
        );
    }

    #[test]
    fn test_message_row_has_no_required_marker() {
        let text = row(Field::Message, "hi", None).to_string();
        assert!(text.starts_with("Message\n"));
    }

    #[test]
    fn test_form_screen_renders_notice_and_submit() {
        let screen = Screen::Form {
            rows: vec![row(Field::Name, "Al", None)],
            notice: Some("Try again".to_string()),
        };
        let text = screen.to_string();
        assert!(text.starts_with("Contact Us\n==========\n"));
        assert!(text.contains("! Try again"));
        assert!(text.ends_with("[ Submit ]\n"));
    }

    #[test]
    fn test_loading_and_submitted_screens() {
        assert!(Screen::Loading.to_string().contains(LOADING_MESSAGE));

        let submitted = Screen::Submitted.to_string();
        assert!(submitted.contains("we'll get back to you shortly."));
        assert!(submitted.contains("[ Submit Another Form ]"));
        assert!(!submitted.contains("[ Submit ]"));
    }
}
