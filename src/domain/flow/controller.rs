//! Survey flow controller.
//!
//! One tagged state value carries everything the questionnaire walk-through
//! needs: the working (possibly shuffled) question order, the current
//! question index, and the accumulated answers. Invalid combinations such
//! as "submitting with an out-of-range index" are unrepresentable.

use std::collections::BTreeMap;

use rand::Rng;
use thiserror::Error;

use crate::domain::foundation::{
    LikertScore, Percentage, QuestionId, StateMachine, Timestamp, ValidationError,
};
use crate::domain::survey::{Question, Response};

use super::{shuffled, ViewMode};

/// Errors raised by flow transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("Invalid view transition: {0}")]
    InvalidTransition(#[from] ValidationError),

    #[error("No survey is in progress")]
    NotInProgress,

    #[error("Question '{0}' is not part of this survey")]
    UnknownQuestion(QuestionId),

    #[error("The current question must be answered before advancing")]
    CurrentUnanswered,

    #[error("Survey incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("No submission is pending")]
    NotSubmitting,
}

/// Whether the working question order follows the definition or is
/// shuffled once at the start of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOrder {
    Sequential,
    Randomized,
}

/// Token issued when an answer arms an auto-advance.
///
/// The shell schedules its delay and then redeems the ticket; the ticket
/// carries the state epoch at issue time, so a ticket that outlives any
/// manual navigation is silently ignored (last writer wins on the index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "redeem the ticket with auto_advance or drop it to cancel"]
pub struct AdvanceTicket {
    epoch: u64,
}

#[derive(Debug, Clone)]
enum State {
    Overview,
    InProgress {
        questions: Vec<Question>,
        index: usize,
        answers: BTreeMap<QuestionId, LikertScore>,
        epoch: u64,
    },
    Submitting {
        questions: Vec<Question>,
        answers: BTreeMap<QuestionId, LikertScore>,
    },
    Results,
}

/// Finite state machine walking a respondent through the questionnaire.
#[derive(Debug, Clone)]
pub struct SurveyFlow {
    base_questions: Vec<Question>,
    state: State,
}

impl SurveyFlow {
    /// Creates a flow over the given questions, starting at the overview.
    ///
    /// Questions are kept in default display order until a randomized
    /// session shuffles a working copy.
    pub fn new(mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| q.order);
        Self {
            base_questions: questions,
            state: State::Overview,
        }
    }

    /// Returns the screen the respondent is currently on.
    pub fn view(&self) -> ViewMode {
        match &self.state {
            State::Overview => ViewMode::Overview,
            State::InProgress { .. } => ViewMode::InProgress,
            State::Submitting { .. } => ViewMode::Submitting,
            State::Results => ViewMode::Results,
        }
    }

    /// Begins the questionnaire: index 0, answers cleared.
    ///
    /// `Randomized` order shuffles the working question list exactly once;
    /// the permutation is fixed for the remainder of the session.
    pub fn start_survey<R: Rng + ?Sized>(
        &mut self,
        order: QuestionOrder,
        rng: &mut R,
    ) -> Result<(), FlowError> {
        self.view().transition_to(ViewMode::InProgress)?;
        let questions = match order {
            QuestionOrder::Sequential => self.base_questions.clone(),
            QuestionOrder::Randomized => shuffled(&self.base_questions, rng),
        };
        self.state = State::InProgress {
            questions,
            index: 0,
            answers: BTreeMap::new(),
            epoch: 0,
        };
        Ok(())
    }

    /// Records or replaces the answer for a question.
    ///
    /// Answering the current question (when it is not the last) arms an
    /// auto-advance and returns a ticket for it.
    pub fn answer(
        &mut self,
        question_id: &QuestionId,
        score: LikertScore,
    ) -> Result<Option<AdvanceTicket>, FlowError> {
        match &mut self.state {
            State::InProgress {
                questions,
                index,
                answers,
                epoch,
            } => {
                if !questions.iter().any(|q| &q.id == question_id) {
                    return Err(FlowError::UnknownQuestion(question_id.clone()));
                }
                answers.insert(question_id.clone(), score);

                let is_current = &questions[*index].id == question_id;
                let is_last = *index + 1 == questions.len();
                if is_current && !is_last {
                    Ok(Some(AdvanceTicket { epoch: *epoch }))
                } else {
                    Ok(None)
                }
            }
            _ => Err(FlowError::NotInProgress),
        }
    }

    /// Redeems an auto-advance ticket after the shell's delay has elapsed.
    ///
    /// Returns true if the index actually advanced. A ticket whose epoch no
    /// longer matches (the respondent navigated, or the session ended) is
    /// ignored: a stale timer must never apply an old transition.
    pub fn auto_advance(&mut self, ticket: AdvanceTicket) -> bool {
        match &mut self.state {
            State::InProgress {
                questions,
                index,
                epoch,
                ..
            } if *epoch == ticket.epoch && *index + 1 < questions.len() => {
                *index += 1;
                *epoch += 1;
                true
            }
            _ => false,
        }
    }

    /// Moves to the next question.
    ///
    /// Only permitted once the current question has a recorded answer, so
    /// unanswered items cannot be skipped. Clamped at the last question.
    pub fn next(&mut self) -> Result<(), FlowError> {
        match &mut self.state {
            State::InProgress {
                questions,
                index,
                answers,
                epoch,
            } => {
                // An empty working list has no current question to guard on.
                if let Some(current) = questions.get(*index) {
                    if !answers.contains_key(&current.id) {
                        return Err(FlowError::CurrentUnanswered);
                    }
                }
                if *index + 1 < questions.len() {
                    *index += 1;
                    *epoch += 1;
                }
                Ok(())
            }
            _ => Err(FlowError::NotInProgress),
        }
    }

    /// Moves back to the previous question. Always permitted, clamped at 0.
    pub fn previous(&mut self) -> Result<(), FlowError> {
        match &mut self.state {
            State::InProgress { index, epoch, .. } => {
                if *index > 0 {
                    *index -= 1;
                    *epoch += 1;
                }
                Ok(())
            }
            _ => Err(FlowError::NotInProgress),
        }
    }

    /// Starts submission. Only enabled once every question is answered.
    pub fn submit(&mut self) -> Result<(), FlowError> {
        match &self.state {
            State::InProgress {
                questions, answers, ..
            } => {
                if answers.len() != questions.len() {
                    return Err(FlowError::Incomplete {
                        answered: answers.len(),
                        total: questions.len(),
                    });
                }
            }
            _ => return Err(FlowError::NotInProgress),
        }
        // Completeness checked; hand the working set to the transient state.
        if let State::InProgress {
            questions, answers, ..
        } = std::mem::replace(&mut self.state, State::Results)
        {
            self.state = State::Submitting { questions, answers };
        }
        Ok(())
    }

    /// Completes a pending submission, materializing the recorded answers
    /// into timestamped responses in working question order.
    pub fn complete_submission(&mut self, now: Timestamp) -> Result<Vec<Response>, FlowError> {
        match std::mem::replace(&mut self.state, State::Results) {
            State::Submitting { questions, answers } => {
                let responses = questions
                    .iter()
                    .filter_map(|q| {
                        answers
                            .get(&q.id)
                            .map(|&score| Response::new(q.id.clone(), score, now))
                    })
                    .collect();
                Ok(responses)
            }
            other => {
                self.state = other;
                Err(FlowError::NotSubmitting)
            }
        }
    }

    /// Jumps from the overview straight to the results dashboard.
    pub fn view_results(&mut self) -> Result<(), FlowError> {
        self.view().transition_to(ViewMode::Results)?;
        self.state = State::Results;
        Ok(())
    }

    /// Abandons the current screen and returns to the overview, discarding
    /// any unsubmitted answers.
    pub fn back_to_overview(&mut self) -> Result<(), FlowError> {
        self.view().transition_to(ViewMode::Overview)?;
        self.state = State::Overview;
        Ok(())
    }

    /// Leaves the results dashboard for the overview. The caller clears the
    /// persisted submission and restores the seed corpus.
    pub fn reset(&mut self) -> Result<(), FlowError> {
        self.view().transition_to(ViewMode::Overview)?;
        self.state = State::Overview;
        Ok(())
    }

    /// The working question list for this session, if one is active.
    pub fn working_questions(&self) -> Option<&[Question]> {
        match &self.state {
            State::InProgress { questions, .. } | State::Submitting { questions, .. } => {
                Some(questions)
            }
            _ => None,
        }
    }

    /// The question currently presented, if the survey is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            State::InProgress {
                questions, index, ..
            } => questions.get(*index),
            _ => None,
        }
    }

    /// The recorded answer for a question, if any.
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<LikertScore> {
        match &self.state {
            State::InProgress { answers, .. } | State::Submitting { answers, .. } => {
                answers.get(question_id).copied()
            }
            _ => None,
        }
    }

    /// Number of distinct questions answered so far.
    pub fn answered_count(&self) -> usize {
        match &self.state {
            State::InProgress { answers, .. } | State::Submitting { answers, .. } => answers.len(),
            _ => 0,
        }
    }

    /// Number of questions in the working list (or the definition when no
    /// session is active).
    pub fn question_count(&self) -> usize {
        self.working_questions()
            .map(<[Question]>::len)
            .unwrap_or(self.base_questions.len())
    }

    /// True once every question in the working list has an answer.
    pub fn is_complete(&self) -> bool {
        match &self.state {
            State::InProgress {
                questions, answers, ..
            } => answers.len() == questions.len(),
            _ => false,
        }
    }

    /// True when submission is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_complete()
    }

    /// Position through the questionnaire as a percentage, for the
    /// progress bar.
    pub fn progress_percent(&self) -> Option<Percentage> {
        match &self.state {
            State::InProgress {
                questions, index, ..
            } => Some(Percentage::from_ratio(
                *index as u32 + 1,
                questions.len() as u32,
            )),
            _ => None,
        }
    }
}
