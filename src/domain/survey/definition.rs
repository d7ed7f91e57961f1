//! Static survey definition: values, questions, and survey metadata.
//!
//! Loaded once at startup from a survey definition source and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ValidationError, ValueId};

/// A named thematic category grouping related questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub id: ValueId,
    pub name: String,
    pub description: String,
}

/// A single Likert-scale prompt belonging to one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub value_id: ValueId,
    pub text: String,
    /// Default display position when question order is not randomized.
    pub order: u32,
}

/// The complete static survey configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub values: Vec<Value>,
    pub questions: Vec<Question>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// Invited respondent count, used for the participation rate.
    #[serde(default)]
    pub expected_responses: Option<u32>,
}

fn default_is_active() -> bool {
    true
}

impl SurveyDefinition {
    /// Returns the questions sorted by their default display order.
    pub fn questions_in_order(&self) -> Vec<Question> {
        let mut questions = self.questions.clone();
        questions.sort_by_key(|q| q.order);
        questions
    }

    /// Returns the questions belonging to the given value, in definition order.
    pub fn questions_for_value(&self, value_id: &ValueId) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| &q.value_id == value_id)
            .collect()
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Looks up a value by id.
    pub fn value(&self, id: &ValueId) -> Option<&Value> {
        self.values.iter().find(|v| &v.id == id)
    }

    /// Validates referential integrity of the definition.
    ///
    /// Every question must reference a defined value, and ids must be
    /// non-empty. Duplicate question ids are rejected because answers
    /// are keyed by question id.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_field("survey.id"));
        }
        for value in &self.values {
            if value.id.as_str().is_empty() {
                return Err(ValidationError::empty_field("value.id"));
            }
        }
        for question in &self.questions {
            if question.id.as_str().is_empty() {
                return Err(ValidationError::empty_field("question.id"));
            }
            if self.value(&question.value_id).is_none() {
                return Err(ValidationError::invalid_format(
                    "question.value_id",
                    format!(
                        "question '{}' references undefined value '{}'",
                        question.id, question.value_id
                    ),
                ));
            }
        }
        for (i, question) in self.questions.iter().enumerate() {
            if self.questions[i + 1..].iter().any(|q| q.id == question.id) {
                return Err(ValidationError::invalid_format(
                    "question.id",
                    format!("duplicate question id '{}'", question.id),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> SurveyDefinition {
        SurveyDefinition {
            id: "test-survey".to_string(),
            title: "Test Survey".to_string(),
            description: "A survey".to_string(),
            values: vec![Value {
                id: ValueId::new("teamwork"),
                name: "Teamwork".to_string(),
                description: "Working together".to_string(),
            }],
            questions: vec![
                Question {
                    id: QuestionId::new("q2"),
                    value_id: ValueId::new("teamwork"),
                    text: "Second".to_string(),
                    order: 2,
                },
                Question {
                    id: QuestionId::new("q1"),
                    value_id: ValueId::new("teamwork"),
                    text: "First".to_string(),
                    order: 1,
                },
            ],
            is_active: true,
            expected_responses: Some(45),
        }
    }

    #[test]
    fn questions_in_order_sorts_by_order_field() {
        let ids: Vec<_> = definition()
            .questions_in_order()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![QuestionId::new("q1"), QuestionId::new("q2")]);
    }

    #[test]
    fn questions_for_value_filters_by_value_id() {
        let def = definition();
        assert_eq!(def.questions_for_value(&ValueId::new("teamwork")).len(), 2);
        assert!(def.questions_for_value(&ValueId::new("missing")).is_empty());
    }

    #[test]
    fn validate_accepts_well_formed_definition() {
        assert!(definition().validate().is_ok());
    }

    #[test]
    fn validate_rejects_dangling_value_reference() {
        let mut def = definition();
        def.questions[0].value_id = ValueId::new("missing");
        assert!(def.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_question_ids() {
        let mut def = definition();
        def.questions[1].id = QuestionId::new("q2");
        assert!(def.validate().is_err());
    }

    #[test]
    fn definition_deserializes_with_defaults() {
        let yaml = r#"
id: minimal
title: Minimal
description: Just one value
values:
  - id: focus
    name: Focus
    description: Staying on task
questions:
  - id: f1
    value_id: focus
    text: I can focus at work
    order: 1
"#;
        let def: SurveyDefinition = serde_yaml::from_str(yaml).unwrap();
        assert!(def.is_active);
        assert_eq!(def.expected_responses, None);
        assert!(def.validate().is_ok());
    }
}
