//! Recorded responses and the scoring corpus.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LikertScore, QuestionId, Timestamp};

/// One respondent's answer to one question.
///
/// Multiple responses may share a question id (one per respondent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub score: LikertScore,
    pub timestamp: Timestamp,
}

impl Response {
    pub fn new(question_id: QuestionId, score: LikertScore, timestamp: Timestamp) -> Self {
        Self {
            question_id,
            score,
            timestamp,
        }
    }
}

/// The full response corpus the scoring engine runs over.
///
/// A fixed seed corpus is always present; the respondent's own completed
/// submission sits alongside it. Re-submitting replaces the prior local
/// submission (one live submission per session), and a reset drops it,
/// restoring the corpus to exactly the seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCorpus {
    seed: Vec<Response>,
    submitted: Vec<Response>,
}

impl ResponseCorpus {
    /// Creates a corpus over the given seed responses.
    pub fn new(seed: Vec<Response>) -> Self {
        Self {
            seed,
            submitted: Vec::new(),
        }
    }

    /// Creates a corpus with a previously persisted local submission.
    pub fn with_submission(seed: Vec<Response>, submitted: Vec<Response>) -> Self {
        Self { seed, submitted }
    }

    /// Replaces the local submission with a newly completed one.
    pub fn record_submission(&mut self, responses: Vec<Response>) {
        self.submitted = responses;
    }

    /// Drops the local submission, restoring the seed-only corpus.
    pub fn reset(&mut self) {
        self.submitted.clear();
    }

    /// Returns the seed corpus.
    pub fn seed(&self) -> &[Response] {
        &self.seed
    }

    /// Returns the local submission, empty if none was recorded.
    pub fn submitted(&self) -> &[Response] {
        &self.submitted
    }

    /// Returns the merged corpus: seed followed by the local submission.
    pub fn responses(&self) -> Vec<Response> {
        self.seed
            .iter()
            .chain(self.submitted.iter())
            .cloned()
            .collect()
    }

    /// Total number of responses in the merged corpus.
    pub fn len(&self) -> usize {
        self.seed.len() + self.submitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seed.is_empty() && self.submitted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(question_id: &str, score: u8) -> Response {
        Response::new(
            QuestionId::new(question_id),
            LikertScore::try_from_u8(score).unwrap(),
            Timestamp::from_unix_secs(1_705_309_200),
        )
    }

    #[test]
    fn corpus_merges_seed_and_submission() {
        let mut corpus = ResponseCorpus::new(vec![response("q1", 4), response("q2", 2)]);
        corpus.record_submission(vec![response("q1", 5)]);

        assert_eq!(corpus.len(), 3);
        let merged = corpus.responses();
        assert_eq!(merged[0], response("q1", 4));
        assert_eq!(merged[2], response("q1", 5));
    }

    #[test]
    fn record_submission_replaces_prior_submission() {
        let mut corpus = ResponseCorpus::new(vec![response("q1", 4)]);
        corpus.record_submission(vec![response("q1", 1)]);
        corpus.record_submission(vec![response("q1", 5)]);

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.submitted(), &[response("q1", 5)]);
    }

    #[test]
    fn reset_restores_exact_seed_corpus() {
        let seed = vec![response("q1", 4), response("q2", 2)];
        let mut corpus = ResponseCorpus::new(seed.clone());
        let before = corpus.responses();

        corpus.record_submission(vec![response("q1", 5), response("q2", 5)]);
        corpus.record_submission(vec![response("q1", 3)]);
        corpus.reset();

        assert_eq!(corpus.responses(), before);
        assert_eq!(corpus.seed(), seed.as_slice());
        assert!(corpus.submitted().is_empty());
    }

    #[test]
    fn empty_corpus_reports_empty() {
        let corpus = ResponseCorpus::new(Vec::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }
}
