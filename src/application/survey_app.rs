//! SurveyApp - The application service tying the core together.
//!
//! Owns the loaded survey definition, the response corpus, the flow state
//! machine, and the persistence collaborator. On startup it merges any
//! previously persisted submission into the corpus; on completion it
//! persists the new submission and merges it; on reset it clears the
//! persisted copy and restores the seed corpus.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::persistence::ResponseStore;
use crate::domain::flow::{AdvanceTicket, FlowError, QuestionOrder, SurveyFlow};
use crate::domain::foundation::{LikertScore, QuestionId, Timestamp};
use crate::domain::scoring::{score_definition, SurveyResults};
use crate::domain::survey::{Response, ResponseCorpus, SurveyDefinition};
use crate::ports::{
    BlobStore, BlobStoreError, ExportError, ResultsExporter, SurveyProvider, SurveyProviderError,
};

/// Errors surfaced by the application service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Storage(#[from] BlobStoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Definition(#[from] SurveyProviderError),
}

/// Single-respondent survey application.
pub struct SurveyApp {
    definition: SurveyDefinition,
    corpus: ResponseCorpus,
    store: ResponseStore,
    flow: SurveyFlow,
}

impl SurveyApp {
    /// Builds the application from a survey definition source and a blob
    /// store, merging any previously persisted submission into the corpus.
    pub fn from_provider(
        provider: &dyn SurveyProvider,
        blob_store: Arc<dyn BlobStore>,
    ) -> Result<Self, AppError> {
        let definition = provider.load()?;
        Ok(Self::new(definition, provider.seed_responses(), blob_store))
    }

    /// Builds the application over an already-loaded definition.
    pub fn new(
        definition: SurveyDefinition,
        seed: Vec<Response>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        let store = ResponseStore::new(blob_store);
        let persisted = store.load();
        if !persisted.is_empty() {
            debug!(count = persisted.len(), "restored persisted submission");
        }

        let flow = SurveyFlow::new(definition.questions_in_order());
        Self {
            definition,
            corpus: ResponseCorpus::with_submission(seed, persisted),
            store,
            flow,
        }
    }

    /// The loaded survey definition.
    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    /// Read access to the flow state machine for screen queries.
    pub fn flow(&self) -> &SurveyFlow {
        &self.flow
    }

    /// The response corpus the dashboard is computed over.
    pub fn corpus(&self) -> &ResponseCorpus {
        &self.corpus
    }

    /// Begins the questionnaire using the process-wide RNG for any
    /// randomized ordering.
    pub fn start_survey(&mut self, order: QuestionOrder) -> Result<(), AppError> {
        self.start_survey_with_rng(order, &mut rand::rng())
    }

    /// Begins the questionnaire with a caller-supplied RNG.
    pub fn start_survey_with_rng<R: Rng + ?Sized>(
        &mut self,
        order: QuestionOrder,
        rng: &mut R,
    ) -> Result<(), AppError> {
        self.flow.start_survey(order, rng)?;
        Ok(())
    }

    /// Records an answer for a question.
    pub fn answer(
        &mut self,
        question_id: &QuestionId,
        score: LikertScore,
    ) -> Result<Option<AdvanceTicket>, AppError> {
        Ok(self.flow.answer(question_id, score)?)
    }

    /// Redeems an auto-advance ticket; stale tickets are ignored.
    pub fn auto_advance(&mut self, ticket: AdvanceTicket) -> bool {
        self.flow.auto_advance(ticket)
    }

    pub fn next(&mut self) -> Result<(), AppError> {
        Ok(self.flow.next()?)
    }

    pub fn previous(&mut self) -> Result<(), AppError> {
        Ok(self.flow.previous()?)
    }

    /// Starts submission once every question is answered.
    pub fn submit(&mut self) -> Result<(), AppError> {
        Ok(self.flow.submit()?)
    }

    /// Completes a pending submission: materializes the answers with a
    /// fresh capture timestamp, persists them, and merges them into the
    /// scoring corpus.
    pub fn complete_submission(&mut self) -> Result<(), AppError> {
        let responses = self.flow.complete_submission(Timestamp::now())?;
        self.store.save(&responses)?;
        info!(count = responses.len(), "submission persisted");
        self.corpus.record_submission(responses);
        Ok(())
    }

    /// Jumps from the overview to the results dashboard.
    pub fn view_results(&mut self) -> Result<(), AppError> {
        Ok(self.flow.view_results()?)
    }

    /// Abandons the current screen without persisting anything.
    pub fn back_to_overview(&mut self) -> Result<(), AppError> {
        Ok(self.flow.back_to_overview()?)
    }

    /// Leaves the dashboard, deletes the persisted submission, and
    /// restores the baseline seed corpus.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.flow.reset()?;
        self.store.clear()?;
        self.corpus.reset();
        info!("survey reset to seed corpus");
        Ok(())
    }

    /// Computes the results dashboard model over the merged corpus.
    pub fn results(&self) -> SurveyResults {
        score_definition(&self.definition, &self.corpus.responses())
    }

    /// Renders the current results through an exporter.
    pub fn export_results(&self, exporter: &dyn ResultsExporter) -> Result<String, ExportError> {
        exporter.export(&self.results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryBlobStore;
    use crate::domain::foundation::{QuestionId, ValueId};
    use crate::domain::survey::{Question, Value};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn definition() -> SurveyDefinition {
        SurveyDefinition {
            id: "test".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            values: vec![Value {
                id: ValueId::new("v1"),
                name: "Value One".to_string(),
                description: String::new(),
            }],
            questions: vec![
                Question {
                    id: QuestionId::new("q1"),
                    value_id: ValueId::new("v1"),
                    text: "First".to_string(),
                    order: 1,
                },
                Question {
                    id: QuestionId::new("q2"),
                    value_id: ValueId::new("v1"),
                    text: "Second".to_string(),
                    order: 2,
                },
            ],
            is_active: true,
            expected_responses: None,
        }
    }

    fn app() -> SurveyApp {
        SurveyApp::new(definition(), Vec::new(), Arc::new(InMemoryBlobStore::new()))
    }

    fn complete_survey(app: &mut SurveyApp, score: LikertScore) {
        app.start_survey_with_rng(QuestionOrder::Sequential, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let _ = app.answer(&QuestionId::new("q1"), score).unwrap();
        let _ = app.answer(&QuestionId::new("q2"), score).unwrap();
        app.submit().unwrap();
        app.complete_submission().unwrap();
    }

    #[test]
    fn submission_is_persisted_and_scored() {
        let blob_store = Arc::new(InMemoryBlobStore::new());
        let mut app = SurveyApp::new(definition(), Vec::new(), blob_store.clone());

        complete_survey(&mut app, LikertScore::StronglyAgree);

        assert!(blob_store.get("survey-responses").unwrap().is_some());
        let results = app.results();
        assert_eq!(results.total_responses, 1);
        assert_eq!(results.overall_score.value(), 100);
    }

    #[test]
    fn persisted_submission_is_restored_on_startup() {
        let blob_store = Arc::new(InMemoryBlobStore::new());
        {
            let mut app = SurveyApp::new(definition(), Vec::new(), blob_store.clone());
            complete_survey(&mut app, LikertScore::Agree);
        }

        let restored = SurveyApp::new(definition(), Vec::new(), blob_store);
        assert_eq!(restored.corpus().submitted().len(), 2);
        assert_eq!(restored.results().total_responses, 1);
    }

    #[test]
    fn reset_clears_persistence_and_restores_seed() {
        let blob_store = Arc::new(InMemoryBlobStore::new());
        let mut app = SurveyApp::new(definition(), Vec::new(), blob_store.clone());

        complete_survey(&mut app, LikertScore::Agree);
        app.reset().unwrap();

        assert_eq!(blob_store.get("survey-responses").unwrap(), None);
        assert!(app.corpus().is_empty());
        assert_eq!(app.results().total_responses, 0);
    }

    #[test]
    fn from_provider_loads_definition_and_seed() {
        use crate::adapters::survey::DemoSurveyProvider;

        let app = SurveyApp::from_provider(
            &DemoSurveyProvider::new(),
            Arc::new(InMemoryBlobStore::new()),
        )
        .unwrap();

        assert_eq!(app.definition().values.len(), 5);
        assert!(!app.corpus().is_empty());
    }
}
