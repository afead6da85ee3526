// Candidate notifications: result email templates and delivery.

pub mod handlers;
pub mod mailer;
pub mod templates;
