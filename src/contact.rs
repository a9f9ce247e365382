use std::time::Duration;

use thiserror::Error;

/// Simulated time the message takes to "send".
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the sent confirmation stays before the form unlocks again.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Missing("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::Missing("email"));
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Missing("message"));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// same shape the browser's type="email" check accepts: local@domain.tld
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split('.')
            .all(|label| !label.is_empty())
        && domain.contains('.')
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Sent,
}

impl SubmissionState {
    /// Validates the form and moves to `Submitting`.
    pub fn submit(&mut self, form: &ContactForm) -> Result<(), ContactError> {
        if *self != Self::Idle {
            return Err(ContactError::Busy);
        }
        form.validate()?;
        *self = Self::Submitting;
        Ok(())
    }

    /// Simulated delivery finished.
    pub fn complete(&mut self) -> bool {
        if *self == Self::Submitting {
            *self = Self::Sent;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_locked(&self) -> bool {
        *self != Self::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Submitting => "Sending...",
            Self::Sent => "Message Sent!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::Missing("name")));

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate(), Err(ContactError::Missing("email")));

        let mut form = filled();
        form.message = "\n".to_string();
        assert_eq!(form.validate(), Err(ContactError::Missing("message")));
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org"] {
            assert!(looks_like_email(ok), "{ok}");
        }
        for bad in ["plain", "@example.com", "a@b", "a@b..com", "a b@c.com", "a@b@c.com"] {
            assert!(!looks_like_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = SubmissionState::default();
        let form = filled();
        assert_eq!(state.button_label(), "Send Message");

        state.submit(&form).unwrap();
        assert_eq!(state, SubmissionState::Submitting);
        assert!(state.is_locked());
        assert_eq!(state.submit(&form), Err(ContactError::Busy));

        assert!(state.complete());
        assert_eq!(state.button_label(), "Message Sent!");
        assert!(!state.complete());

        state.reset();
        assert!(!state.is_locked());
    }

    #[test]
    fn test_invalid_form_stays_idle() {
        let mut state = SubmissionState::default();
        let result = state.submit(&ContactForm::default());
        assert_eq!(result, Err(ContactError::Missing("name")));
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
