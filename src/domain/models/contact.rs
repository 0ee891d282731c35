use std::fmt;

use serde::{Deserialize, Serialize};

/// Field collected by one step of the conversational form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "Email address",
            FormField::Message => "Message",
        }
    }

    /// HTML input type used to render the field
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Name => "text",
            FormField::Email => "email",
            FormField::Message => "textarea",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One screen of the conversational form. The last step collects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStep {
    pub key: &'static str,
    pub prompt: &'static str,
    pub placeholder: &'static str,
    pub field: Option<FormField>,
}

impl FormStep {
    pub const SEQUENCE: [FormStep; 4] = [
        FormStep {
            key: "name",
            prompt: "What's your name?",
            placeholder: "Enter your full name",
            field: Some(FormField::Name),
        },
        FormStep {
            key: "email",
            prompt: "What's your email address?",
            placeholder: "Enter your email address",
            field: Some(FormField::Email),
        },
        FormStep {
            key: "message",
            prompt: "How can we help you?",
            placeholder: "Tell us about your project or inquiry...",
            field: Some(FormField::Message),
        },
        FormStep {
            key: "complete",
            prompt: "Thank you! We'll be in touch soon.",
            placeholder: "",
            field: None,
        },
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactChannel {
    pub glyph: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        glyph: "mail",
        title: "Email Us",
        content: "hello@futuretech.com",
        description: "Send us an email anytime!",
    },
    ContactChannel {
        glyph: "phone",
        title: "Call Us",
        content: "+1 (555) 123-4567",
        description: "Mon-Fri from 8am to 6pm",
    },
    ContactChannel {
        glyph: "map-pin",
        title: "Visit Us",
        content: "San Francisco, CA",
        description: "Come say hello at our office",
    },
];

pub const BUSINESS_HOURS: &[BusinessHours] = &[
    BusinessHours { days: "Monday - Friday", hours: "8:00 AM - 6:00 PM" },
    BusinessHours { days: "Saturday", hours: "9:00 AM - 4:00 PM" },
    BusinessHours { days: "Sunday", hours: "Closed" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_step_is_terminal() {
        let (last, collectible) = FormStep::SEQUENCE.split_last().unwrap();
        assert!(last.field.is_none());
        assert!(collectible.iter().all(|s| s.field.is_some()));
    }

    #[test]
    fn test_form_data_field_access() {
        let mut data = ContactFormData::default();
        data.set(FormField::Email, "ada@example.com".to_string());
        assert_eq!(data.get(FormField::Email), "ada@example.com");
        assert_eq!(data.get(FormField::Name), "");
    }
}
