use crate::interop::{FormSubmitter, SubmissionIntent};
use crate::models::NewsletterFooterConfig;
use crate::state::ControlledField;

/// Footer with a newsletter signup form
#[derive(Debug, Clone, PartialEq)]
pub struct NewsletterFooter {
    config: NewsletterFooterConfig,
    email: ControlledField,
}

impl NewsletterFooter {
    pub fn new(config: NewsletterFooterConfig) -> Self {
        Self {
            config,
            email: ControlledField::new(),
        }
    }

    pub fn config(&self) -> &NewsletterFooterConfig {
        &self.config
    }

    pub fn email(&self) -> &str {
        self.email.value()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email.set_value(email);
    }

    /// Pass the typed address to the signup collaborator as-is.
    pub fn subscribe(&self, submitter: &mut impl FormSubmitter) {
        self.email.submit(submitter, SubmissionIntent::Subscribe);
    }

    pub fn clear(&mut self) {
        self.email.clear();
    }

    /// Swap in new content without losing the typed address.
    pub fn reconfigure(&mut self, config: NewsletterFooterConfig) {
        self.config = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interop::Submission;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_subscribe_hands_over_typed_email() {
        let mut footer = NewsletterFooter::new(NewsletterFooterConfig::default());
        footer.set_email("a");
        footer.set_email("ab@example.com");

        let mut received = Vec::new();
        footer.subscribe(&mut |submission: Submission| received.push(submission));

        assert_eq!(
            received,
            vec![Submission {
                value: "ab@example.com".to_string(),
                intent: SubmissionIntent::Subscribe,
            }]
        );
        assert_eq!(footer.email(), "ab@example.com");
    }

    #[test]
    fn test_empty_email_is_still_handed_over() {
        let footer = NewsletterFooter::new(NewsletterFooterConfig::default());
        let mut received = Vec::new();
        footer.subscribe(&mut |submission: Submission| received.push(submission.value));
        assert_eq!(received, vec![String::new()]);
    }
}
