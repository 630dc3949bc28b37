mod classifier;
pub mod views;

pub use classifier::classify;
pub use views::{InterviewReminderView, ReminderDigest};
