//! Contact form to mailto bridge.
//!
//! The form never talks to a server: submitting composes a pre-filled
//! message and hands a `mailto:` URI to the user's mail client, then shows
//! a short confirmation on the submit button.

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::config::ContactConfig;
use crate::effects::{Effect, Target};

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DEFAULT_TOPIC: &str = "contact";
const MISSING_PHONE: &str = "Non renseigné";
const MISSING_SERVICE: &str = "Non spécifié";

/// Percent-encode a URI component the way browsers' `encodeURIComponent`
/// does.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Named form fields. Optional fields left blank count as omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Collect a submission from `(field name, value)` pairs. Unknown fields
    /// are ignored; for repeated names the last value wins.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut out = ContactSubmission::default();
        for (key, value) in fields {
            let value = value.into();
            match key.as_ref() {
                "name" => out.name = value,
                "email" => out.email = value,
                "phone" => out.phone = non_blank(value),
                "service" => out.service = non_blank(value),
                "message" => out.message = value,
                _ => {}
            }
        }
        out
    }
}

fn non_blank(v: String) -> Option<String> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MailtoMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoMessage {
    pub fn compose(recipient: &str, form: &ContactSubmission) -> Self {
        let subject = format!(
            "Demande de {} - {}",
            form.service.as_deref().unwrap_or(DEFAULT_TOPIC),
            form.name
        );
        let body = format!(
            "Nom: {}\nEmail: {}\nTéléphone: {}\nService: {}\n\nMessage:\n{}",
            form.name,
            form.email,
            form.phone.as_deref().unwrap_or(MISSING_PHONE),
            form.service.as_deref().unwrap_or(MISSING_SERVICE),
            form.message
        );
        Self {
            recipient: recipient.to_string(),
            subject,
            body,
        }
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body)
        )
    }
}

/// Submit handler plus the transient button confirmation.
#[derive(Debug)]
pub struct ContactBridge {
    recipient: String,
    success_label: String,
    success_color: String,
    feedback_ms: u32,
    open_mail_client: bool,
    /// Label to restore once the confirmation expires.
    pending_label: Option<String>,
    /// Bumped on every submit; only the latest submit's timer may reset.
    generation: u64,
}

impl ContactBridge {
    pub fn new(cfg: &ContactConfig) -> Self {
        Self {
            recipient: cfg.recipient.clone(),
            success_label: cfg.success_label.clone(),
            success_color: cfg.success_color.clone(),
            feedback_ms: cfg.feedback_ms,
            open_mail_client: cfg.open_mail_client,
            pending_label: None,
            generation: 0,
        }
    }

    /// How long the confirmation stays before [`reset`](Self::reset).
    pub fn feedback_ms(&self) -> u32 {
        self.feedback_ms
    }

    /// Generation of the latest submit, to hand back to [`reset`](Self::reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_confirming(&self) -> bool {
        self.pending_label.is_some()
    }

    /// Handle a submission. `button_label` is the submit button's current
    /// text; a second submit during the confirmation keeps the first label.
    pub fn submit(&mut self, form: &ContactSubmission, button_label: &str) -> Vec<Effect> {
        let message = MailtoMessage::compose(&self.recipient, form);
        debug!("contact form prepared: {}", message.subject);
        if self.pending_label.is_none() {
            self.pending_label = Some(button_label.to_string());
        }
        self.generation = self.generation.wrapping_add(1);
        let mut effects = Vec::with_capacity(3);
        if self.open_mail_client {
            effects.push(Effect::OpenUri(message.to_uri()));
        }
        effects.push(Effect::SetText {
            target: Target::SubmitButton,
            text: self.success_label.clone(),
        });
        effects.push(Effect::SetStyle {
            target: Target::SubmitButton,
            property: "background-color",
            value: self.success_color.clone(),
        });
        effects
    }

    /// Confirmation of submit `generation` expired: restore the button and
    /// clear the form. Timers from earlier submits are ignored, so every
    /// confirmation lasts the full feedback duration after the last submit.
    pub fn reset(&mut self, generation: u64) -> Vec<Effect> {
        if generation != self.generation {
            debug!("ignoring stale contact reset {generation} (latest {})", self.generation);
            return Vec::new();
        }
        let Some(label) = self.pending_label.take() else {
            return Vec::new();
        };
        vec![
            Effect::SetText {
                target: Target::SubmitButton,
                text: label,
            },
            Effect::SetStyle {
                target: Target::SubmitButton,
                property: "background-color",
                value: String::new(),
            },
            Effect::ResetForm,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("it's (ok)!*~._-"), "it's%20(ok)!*~._-");
        assert_eq!(encode_uri_component("é\n"), "%C3%A9%0A");
    }

    #[test]
    fn blank_optional_fields_are_omitted() {
        let form = ContactSubmission::from_fields([("phone", ""), ("service", "")]);
        assert_eq!(form.phone, None);
        assert_eq!(form.service, None);
    }
}
