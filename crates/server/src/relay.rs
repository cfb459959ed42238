//! Inbound contact messages and admin announcements.
//!
//! Neither is stored; each accepted message is written to the log and
//! acknowledged with a receipt.

use shared_types::{AnnouncementRequest, AppError, ContactMessage, FeatureFlags, Receipt};

fn receipt(prefix: &str) -> Receipt {
    let id = uuid::Uuid::new_v4().simple().to_string();
    Receipt {
        reference: format!("{prefix}-{}", id[..8].to_uppercase()),
        accepted_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Accept a contact-form message. Fails with NotFound while the
/// `contact_relay` flag is off.
pub fn relay_contact(flags: &FeatureFlags, message: &ContactMessage) -> Result<Receipt, AppError> {
    if !flags.contact_relay {
        return Err(AppError::not_found("Contact relay is disabled"));
    }
    let message = message.normalized()?;
    let receipt = receipt("MSG");
    tracing::info!(
        reference = %receipt.reference,
        category = message.category.as_str(),
        subject = %message.subject,
        "contact message received"
    );
    tracing::debug!(reference = %receipt.reference, email = %message.email, "contact sender");
    Ok(receipt)
}

/// Accept an admin announcement for delivery to the chosen audience.
pub fn broadcast(request: &AnnouncementRequest) -> Result<Receipt, AppError> {
    let request = request.normalized()?;
    let receipt = receipt("ANN");
    tracing::info!(
        reference = %receipt.reference,
        audience = request.audience.label(),
        message = %request.message,
        "announcement broadcast"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, Audience, ContactCategory};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Asha Patel".into(),
            email: "asha@freshmart.in".into(),
            category: ContactCategory::Missing,
            subject: "Missing dal".into(),
            message: "One bag of dal was missing from ORD001.".into(),
        }
    }

    fn relay_on() -> FeatureFlags {
        FeatureFlags {
            contact_relay: true,
            ..Default::default()
        }
    }

    #[test]
    fn contact_is_refused_while_relay_is_off() {
        let err = relay_contact(&FeatureFlags::default(), &message()).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn contact_receipt_has_prefixed_reference() {
        let receipt = relay_contact(&relay_on(), &message()).unwrap();
        assert!(receipt.reference.starts_with("MSG-"));
        assert_eq!(receipt.reference.len(), "MSG-".len() + 8);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn contact_info_log_leaves_out_sender_email() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let receipt = tracing::subscriber::with_default(subscriber, || {
            relay_contact(&relay_on(), &message()).unwrap()
        });

        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("contact message received"));
        assert!(logged.contains(&receipt.reference));
        assert!(!logged.contains("asha@freshmart.in"));
    }

    #[test]
    fn invalid_contact_is_rejected_before_logging() {
        let mut msg = message();
        msg.email = String::new();
        let err = relay_contact(&relay_on(), &msg).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
    }

    #[test]
    fn announcement_gets_receipt() {
        let req = AnnouncementRequest {
            audience: Audience::Suppliers,
            message: "New drop point at Sector 18 market.".into(),
        };
        assert!(broadcast(&req).unwrap().reference.starts_with("ANN-"));
    }

    #[test]
    fn empty_announcement_is_rejected() {
        let req = AnnouncementRequest {
            audience: Audience::All,
            message: String::new(),
        };
        assert!(broadcast(&req).is_err());
    }
}
