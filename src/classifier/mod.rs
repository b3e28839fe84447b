//! Simulated image classification.
//!
//! A [`ClassifierSession`] accepts dropped files and, after a fixed delay per
//! drop, publishes whatever its [`Classifier`] returns. Every drop schedules
//! its own timer; timers are not debounced, so the last one to fire decides
//! the displayed result. Dropping the session aborts all pending timers.

mod service;
mod session;

#[cfg(test)]
mod tests;

pub use service::{CANNED_LABEL, CannedClassifier, Classifier, IMAGE_EXTENSIONS};
pub use session::{ClassifierSession, ClassifierState};
