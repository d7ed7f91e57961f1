//! Flow module - The respondent's walk through the questionnaire.

mod controller;
mod shuffle;
mod view_mode;

pub use controller::{AdvanceTicket, FlowError, QuestionOrder, SurveyFlow};
pub use shuffle::shuffled;
pub use view_mode::ViewMode;
