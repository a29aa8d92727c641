// Flat answer set collected over one wizard run.
//
// A question that was skipped stores nothing; accessors encode the
// explicit absent convention (false for flags, empty for selections)
// so downstream assembly never observes an undefined-but-required value.

use std::collections::BTreeMap;

/// A single collected answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Flag(bool),
    Choice(String),
    Choices(Vec<String>),
}

/// Question name → answer, built incrementally and scoped to one run.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    values: BTreeMap<&'static str, Answer>,
}

const NO_CHOICES: &[String] = &[];

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, answer: Answer) {
        self.values.insert(name, answer);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Boolean answer; absent (skipped question) reads as false.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Answer::Flag(true)))
    }

    /// Free-form text answer, if collected.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Answer::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Single-select answer, if collected.
    pub fn choice(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Answer::Choice(value)) => Some(value),
            _ => None,
        }
    }

    /// Multi-select answer; absent reads as empty.
    pub fn choices(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(Answer::Choices(values)) => values,
            _ => NO_CHOICES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_answers_read_as_falsy() {
        let answers = AnswerSet::new();
        assert!(!answers.flag("private_website"));
        assert!(answers.text("certificate").is_none());
        assert!(answers.choice("bedrock_region").is_none());
        assert!(answers.choices("rag_engines").is_empty());
    }

    #[test]
    fn test_typed_accessors() {
        let mut answers = AnswerSet::new();
        answers.insert("prefix", Answer::Text("demo".to_string()));
        answers.insert("rag_enable", Answer::Flag(true));
        answers.insert("bedrock_region", Answer::Choice("us-east-1".to_string()));
        answers.insert(
            "rag_engines",
            Answer::Choices(vec!["aurora".to_string(), "kendra".to_string()]),
        );

        assert_eq!(answers.text("prefix"), Some("demo"));
        assert!(answers.flag("rag_enable"));
        assert_eq!(answers.choice("bedrock_region"), Some("us-east-1"));
        assert_eq!(answers.choices("rag_engines").len(), 2);

        // Accessor of the wrong type reads as absent
        assert!(answers.text("rag_enable").is_none());
        assert!(!answers.flag("prefix"));
    }
}
