use crate::interop::{FormSubmitter, Submission, SubmissionIntent};

/// Current text of one controlled input.
///
/// No validation or length limits; whoever receives the submitted value
/// decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlledField {
    value: String,
}

impl ControlledField {
    /// An empty field
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value. Last write wins.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Hand the current value, unmodified, to `submitter`.
    ///
    /// The field is not cleared; callers that want a reset call [`clear`]
    /// themselves.
    ///
    /// [`clear`]: ControlledField::clear
    pub fn submit(&self, submitter: &mut impl FormSubmitter, intent: SubmissionIntent) {
        log::debug!("Submitting field value for {intent}");
        submitter.submit(Submission {
            value: self.value.clone(),
            intent,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_empty() {
        let field = ControlledField::new();
        assert_eq!(field.value(), "");
        assert!(field.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut field = ControlledField::new();
        field.set_value("a");
        field.set_value("ab");
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_no_validation_on_set() {
        let mut field = ControlledField::new();
        let long = "x".repeat(10_000);
        field.set_value(long.clone());
        assert_eq!(field.value(), long);
        field.set_value("   not an email   ");
        assert_eq!(field.value(), "   not an email   ");
    }

    #[test]
    fn test_submit_hands_over_exact_value_and_keeps_it() {
        let field = ControlledField::with_value(" user@example.com ");
        let mut received = Vec::new();

        field.submit(
            &mut |submission: Submission| received.push(submission),
            SubmissionIntent::Subscribe,
        );

        assert_eq!(
            received,
            vec![Submission {
                value: " user@example.com ".to_string(),
                intent: SubmissionIntent::Subscribe,
            }]
        );
        assert_eq!(field.value(), " user@example.com ");
    }

    #[test]
    fn test_clear_is_up_to_the_caller() {
        let mut field = ControlledField::with_value("hello");
        field.clear();
        assert!(field.is_empty());
    }
}
