//! Capabilities the engine hands work to but never implements itself.
//!
//! Hrefs are passed through untouched, icons stay opaque, and submitted
//! values go to a [`FormSubmitter`] whose outcome the engine never observes.

use std::fmt;

pub use crate::models::IconHandle;

/// Resolves an href to actual navigation
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, href: &str) {
        self(href)
    }
}

/// What a submitted value is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionIntent {
    /// Sign an email address up to a newsletter
    Subscribe,
    Search,
    Other(String),
}

impl fmt::Display for SubmissionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionIntent::Subscribe => f.write_str("subscribe"),
            SubmissionIntent::Search => f.write_str("search"),
            SubmissionIntent::Other(intent) => f.write_str(intent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub value: String,
    pub intent: SubmissionIntent,
}

/// Receives a field's value when the user submits the form.
///
/// Fire and forget: validation, retries and failure messaging all belong to
/// the implementor.
pub trait FormSubmitter {
    fn submit(&mut self, submission: Submission);
}

impl<F: FnMut(Submission)> FormSubmitter for F {
    fn submit(&mut self, submission: Submission) {
        self(submission)
    }
}
