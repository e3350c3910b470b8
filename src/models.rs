//! Response shapes of the catalog API.
//!
//! Stored rows carry more than clients see (answers know their question id),
//! so handlers never serialize `db` records directly.

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::db::{Answer, Question, QuestionAnswerRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub answer_id: i64,
    pub content: String,
    pub is_correct: bool,
}

impl From<Answer> for AnswerPayload {
    fn from(answer: Answer) -> Self {
        AnswerPayload {
            answer_id: answer.answer_id,
            content: answer.content,
            is_correct: answer.is_correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub question_id: i64,
    pub content: String,
    #[serde(default)]
    pub category: Option<i64>,
}

impl From<Question> for QuestionPayload {
    fn from(question: Question) -> Self {
        QuestionPayload {
            question_id: question.question_id,
            content: question.content,
            category: question.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionWithAnswersPayload {
    #[serde(flatten)]
    pub question: QuestionPayload,
    #[serde(default)]
    pub answers: Vec<AnswerPayload>,
}

impl QuestionWithAnswersPayload {
    pub fn new(question: Question, answers: Vec<Answer>) -> Self {
        QuestionWithAnswersPayload {
            question: question.into(),
            answers: answers.into_iter().map(AnswerPayload::from).collect(),
        }
    }
}

/// Attaches every answer to its question. Question order is kept, answers
/// keep their relative order, questions without answers get an empty list.
/// Answers whose question is not in `questions` are dropped.
pub fn nest_answers(
    questions: Vec<Question>,
    answers: Vec<Answer>,
) -> Vec<QuestionWithAnswersPayload> {
    let mut by_question = answers.into_iter().into_group_map_by(|a| a.question_id);
    questions
        .into_iter()
        .map(|question| {
            let answers = by_question.remove(&question.question_id).unwrap_or_default();
            QuestionWithAnswersPayload::new(question, answers)
        })
        .collect()
}

/// Folds join rows (one per answer) back into one entry per question, in
/// order of first appearance.
pub fn collapse_joined_rows(rows: Vec<QuestionAnswerRow>) -> Vec<QuestionWithAnswersPayload> {
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut out: Vec<QuestionWithAnswersPayload> = Vec::new();

    for row in rows {
        let idx = match positions.get(&row.question_id) {
            Some(idx) => *idx,
            None => {
                out.push(QuestionWithAnswersPayload {
                    question: QuestionPayload {
                        question_id: row.question_id,
                        content: row.question_content,
                        category: row.category,
                    },
                    answers: vec![],
                });
                positions.insert(row.question_id, out.len() - 1);
                out.len() - 1
            }
        };
        if let (Some(answer_id), Some(content)) = (row.answer_id, row.answer_content) {
            out[idx].answers.push(AnswerPayload {
                answer_id,
                content,
                is_correct: row.is_correct.unwrap_or(false),
            });
        }
    }
    out
}
