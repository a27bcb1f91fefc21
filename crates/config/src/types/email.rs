//! Mail transport and mail content settings.
//!
//! Responsibilities:
//! - Define SMTP transport settings (`SmtpConfig`).
//! - Define template and subject lookup per notification kind (`EmailConfig`).
//!
//! Invariants:
//! - `SmtpConfig::password` is binder-owned (`SMTP_PASSWORD`).
//! - Template and subject keys in documents are `verification_email` and
//!   `purchase_successful`.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::redacted;

/// Notification kinds the mailer sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Verification,
    PurchaseSuccessful,
}

impl NotificationKind {
    /// Every kind, in declaration order.
    pub const ALL: [NotificationKind; 2] = [Self::Verification, Self::PurchaseSuccessful];

    /// Document key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            Self::Verification => "verification_email",
            Self::PurchaseSuccessful => "purchase_successful",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Template identifiers, one per notification kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailTemplates {
    #[serde(rename = "verification_email")]
    pub verification: String,
    pub purchase_successful: String,
}

/// Subject lines, one per notification kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSubjects {
    #[serde(rename = "verification_email")]
    pub verification: String,
    pub purchase_successful: String,
}

/// Mail content settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailConfig {
    pub templates: EmailTemplates,
    pub subjects: EmailSubjects,
}

impl EmailConfig {
    /// Template identifier for a notification kind.
    pub fn template(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Verification => &self.templates.verification,
            NotificationKind::PurchaseSuccessful => &self.templates.purchase_successful,
        }
    }

    /// Subject line for a notification kind.
    pub fn subject(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Verification => &self.subjects.verification,
            NotificationKind::PurchaseSuccessful => &self.subjects.purchase_successful,
        }
    }
}

/// SMTP transport settings.
#[derive(Debug, Clone, Serialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Sender address.
    pub from: String,
    #[serde(serialize_with = "redacted::serialize")]
    pub password: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> EmailConfig {
        EmailConfig {
            templates: EmailTemplates {
                verification: "./templates/verification_email.html".to_string(),
                purchase_successful: "./templates/purchase_successful.html".to_string(),
            },
            subjects: EmailSubjects {
                verification: "Thanks for signing up, %s!".to_string(),
                purchase_successful: "Purchase completed".to_string(),
            },
        }
    }

    #[test]
    fn test_lookup_by_kind() {
        let email = email();
        assert_eq!(
            email.template(NotificationKind::Verification),
            "./templates/verification_email.html"
        );
        assert_eq!(
            email.subject(NotificationKind::PurchaseSuccessful),
            "Purchase completed"
        );
    }

    #[test]
    fn test_every_kind_has_a_document_key() {
        let keys: Vec<_> = NotificationKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys, ["verification_email", "purchase_successful"]);
    }

    #[test]
    fn test_templates_decode_from_document_keys() {
        let templates: EmailTemplates =
            serde_yaml::from_str("verification_email: a.html\npurchase_successful: b.html\n")
                .unwrap();
        assert_eq!(templates.verification, "a.html");
        assert_eq!(templates.purchase_successful, "b.html");
    }
}
