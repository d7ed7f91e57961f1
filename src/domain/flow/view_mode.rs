//! View mode state machine over the survey's screens.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The screen the respondent is on.
///
/// `Submitting` is a transient state between the questionnaire and the
/// results dashboard, while the completed answers are materialized and
/// handed to the persistence collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Overview,
    InProgress,
    Submitting,
    Results,
}

impl StateMachine for ViewMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewMode::*;
        matches!(
            (self, target),
            (Overview, InProgress)
                | (Overview, Results)
                | (InProgress, Overview)
                | (InProgress, Submitting)
                | (Submitting, Results)
                | (Results, Overview)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewMode::*;
        match self {
            Overview => vec![InProgress, Results],
            InProgress => vec![Overview, Submitting],
            Submitting => vec![Results],
            Results => vec![Overview],
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewMode::Overview => "overview",
            ViewMode::InProgress => "in_progress",
            ViewMode::Submitting => "submitting",
            ViewMode::Results => "results",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_can_start_survey_or_view_results() {
        assert!(ViewMode::Overview.can_transition_to(&ViewMode::InProgress));
        assert!(ViewMode::Overview.can_transition_to(&ViewMode::Results));
        assert!(!ViewMode::Overview.can_transition_to(&ViewMode::Submitting));
    }

    #[test]
    fn in_progress_can_abandon_or_submit() {
        assert!(ViewMode::InProgress.can_transition_to(&ViewMode::Overview));
        assert!(ViewMode::InProgress.can_transition_to(&ViewMode::Submitting));
        assert!(!ViewMode::InProgress.can_transition_to(&ViewMode::Results));
    }

    #[test]
    fn submitting_only_completes_to_results() {
        assert_eq!(ViewMode::Submitting.valid_transitions(), vec![ViewMode::Results]);
        assert!(!ViewMode::Submitting.can_transition_to(&ViewMode::Overview));
    }

    #[test]
    fn results_returns_to_overview() {
        assert_eq!(ViewMode::Results.valid_transitions(), vec![ViewMode::Overview]);
    }

    #[test]
    fn no_view_is_terminal() {
        for view in [
            ViewMode::Overview,
            ViewMode::InProgress,
            ViewMode::Submitting,
            ViewMode::Results,
        ] {
            assert!(!view.is_terminal());
        }
    }

    #[test]
    fn transition_to_rejects_skipping_submission() {
        assert!(ViewMode::InProgress.transition_to(ViewMode::Results).is_err());
    }

    #[test]
    fn view_mode_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ViewMode::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
