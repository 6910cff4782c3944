// =============================================================================
// NexusCorp Common - Contact Form
// =============================================================================
// Submitting the form never sends anything. It only acknowledges.
// =============================================================================

use crate::notice::{NoticeId, NoticeQueue};

pub const ACKNOWLEDGEMENT: &str = "Message sent! Our team will contact you shortly.";

/// Post the fixed success notice for one submission.
pub fn acknowledge(queue: &mut NoticeQueue) -> NoticeId {
    tracing::info!("contact form submitted");
    queue.success(ACKNOWLEDGEMENT)
}
