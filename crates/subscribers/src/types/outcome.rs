//! Outcome of a registration request.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    AlreadyRegistered,
    Unregistered,
    NotRegistered,
}

impl RegistrationOutcome {
    /// Reply text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Registered => "You are now registered for updates!",
            Self::AlreadyRegistered => "You are already registered for updates!",
            Self::Unregistered => "You are now unregistered from updates!",
            Self::NotRegistered => "You are not registered for updates!",
        }
    }

    /// Whether the subscriber set was mutated (and a write attempted).
    pub fn changed(&self) -> bool {
        matches!(self, Self::Registered | Self::Unregistered)
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_reply_text() {
        assert_eq!(
            RegistrationOutcome::Registered.to_string(),
            "You are now registered for updates!"
        );
        assert_eq!(
            RegistrationOutcome::AlreadyRegistered.to_string(),
            "You are already registered for updates!"
        );
        assert_eq!(
            RegistrationOutcome::Unregistered.to_string(),
            "You are now unregistered from updates!"
        );
        assert_eq!(
            RegistrationOutcome::NotRegistered.to_string(),
            "You are not registered for updates!"
        );
    }

    #[test]
    fn only_transitions_report_changes() {
        assert!(RegistrationOutcome::Registered.changed());
        assert!(RegistrationOutcome::Unregistered.changed());
        assert!(!RegistrationOutcome::AlreadyRegistered.changed());
        assert!(!RegistrationOutcome::NotRegistered.changed());
    }
}
