pub mod consultation_service;
pub mod email_service;

pub use consultation_service::{ConsultationError, ConsultationService};
pub use email_service::{DisabledMailer, Mailer, OutgoingEmail, SmtpMailer};
