//! Contact form model: the draft, its validation and the submit lifecycle.
//!
//! No network is involved; the view drives [`SubmitPhase`] with timers.

use std::collections::BTreeMap;

/// What a visitor can ask about. Shared with the services section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Web,
    Student,
    Consulting,
    UiUx,
    Maintenance,
    AiAgents,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::Web,
        Service::Student,
        Service::Consulting,
        Service::UiUx,
        Service::Maintenance,
        Service::AiAgents,
    ];

    /// Form value of the `<option>`.
    pub fn key(self) -> &'static str {
        match self {
            Service::Web => "web",
            Service::Student => "student",
            Service::Consulting => "consulting",
            Service::UiUx => "uiux",
            Service::Maintenance => "maintenance",
            Service::AiAgents => "aiAgents",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

/// Per-field problems found by [`ContactDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    /// Optional.
    pub phone: String,
    pub service: Option<Service>,
    pub message: String,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::Required);
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldError::Required);
        } else if !looks_like_email(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }
        if self.service.is_none() {
            errors.insert(Field::Service, FieldError::Required);
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, FieldError::Required);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain.tld` shape check; deliverability is not our concern.
pub fn looks_like_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !domain.starts_with('.')
}

/// Simulated submission: `Idle → Submitting → Success → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmitPhase {
    /// Start a submission. Ignored (returns `false`) unless idle.
    pub fn begin(&mut self) -> bool {
        if *self != SubmitPhase::Idle {
            return false;
        }
        *self = SubmitPhase::Submitting;
        true
    }

    pub fn complete(&mut self) {
        if *self == SubmitPhase::Submitting {
            *self = SubmitPhase::Success;
        }
    }

    pub fn reset(&mut self) {
        if *self == SubmitPhase::Success {
            *self = SubmitPhase::Idle;
        }
    }

    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Layla".into(),
            email: "layla@example.com".into(),
            phone: String::new(),
            service: Some(Service::UiUx),
            message: "We need a redesign.".into(),
        }
    }

    #[test]
    fn complete_draft_validates_without_phone() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = ContactDraft::default().validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Email, Field::Service, Field::Message]
        );
        assert_eq!(errors.get(Field::Phone), None);
        assert!(errors.fields().all(|f| errors.get(f) == Some(FieldError::Required)));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut draft = filled();
        draft.name = "   ".into();
        draft.message = "\n\t".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Message), Some(FieldError::Required));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["layla", "layla@", "@example.com", "layla@example", "a b@example.com", "a@@b.com", "a@.com"] {
            let mut draft = filled();
            draft.email = bad.into();
            assert_eq!(
                draft.validate().unwrap_err().get(Field::Email),
                Some(FieldError::InvalidEmail),
                "{bad}"
            );
        }
        assert!(looks_like_email(" llc.bluecode@gmail.com "));
    }

    #[test]
    fn service_keys_round_trip() {
        for service in Service::ALL {
            assert_eq!(Service::from_key(service.key()), Some(service));
        }
        assert_eq!(Service::from_key(""), None);
        assert_eq!(Service::from_key("aiAgents"), Some(Service::AiAgents));
    }

    #[test]
    fn submit_phases_advance_in_order() {
        let mut phase = SubmitPhase::default();
        assert!(phase.begin());
        assert!(phase.is_busy());
        assert!(!phase.begin());
        phase.complete();
        assert_eq!(phase, SubmitPhase::Success);
        phase.reset();
        assert_eq!(phase, SubmitPhase::Idle);
    }

    #[test]
    fn out_of_order_transitions_are_ignored() {
        let mut phase = SubmitPhase::Idle;
        phase.complete();
        assert_eq!(phase, SubmitPhase::Idle);
        phase.begin();
        phase.reset();
        assert_eq!(phase, SubmitPhase::Submitting);
    }
}
