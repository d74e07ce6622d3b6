use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use repodeck_core::app::Command;

use super::model::TuiModel;

/// Messages that can be sent from the TUI to the dashboard service
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Send a command to the dashboard service
    Command(Command),

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly.
    /// Returns a TuiMessage that should be sent to the dashboard service.
    pub fn handle_key(
        model: &mut TuiModel,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<TuiMessage> {
        match key {
            KeyCode::Char('q') if modifiers.is_empty() => Ok(TuiMessage::Command(Command::Quit)),

            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(TuiMessage::Command(Command::Quit))
            }

            KeyCode::Esc => Ok(TuiMessage::Command(Command::Quit)),

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => {
                model.cursor_up();
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                model.cursor_down();
                Ok(TuiMessage::None)
            }

            KeyCode::Enter => {
                if let Some(repo) = model.repo_under_cursor() {
                    Ok(TuiMessage::Command(Command::SelectRepository {
                        id: repo.id,
                    }))
                } else {
                    Ok(TuiMessage::None)
                }
            }

            KeyCode::Char('r') if modifiers.is_empty() => {
                // Re-fetch articles and metrics for the current selection
                Ok(TuiMessage::Command(Command::Reselect))
            }

            KeyCode::Char('e') if modifiers.is_empty() => {
                model.clear_errors();
                Ok(TuiMessage::None)
            }

            _ => Ok(TuiMessage::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repodeck_core::domain::{Event, RepoId, Repository};
    use repodeck_core::ports::UiConfig;

    fn model_with_repos() -> TuiModel {
        let mut model = TuiModel::new(UiConfig::default());
        model.apply_event(&Event::RepositoriesLoaded {
            repositories: vec![
                Repository {
                    id: RepoId(1),
                    name: "a".to_string(),
                    reg_date: "2025-01-01T00:00:00Z".to_string(),
                    last_rq_commit: None,
                    language: None,
                },
                Repository {
                    id: RepoId(2),
                    name: "b".to_string(),
                    reg_date: "2025-01-02T00:00:00Z".to_string(),
                    last_rq_commit: None,
                    language: None,
                },
            ],
        });
        model
    }

    #[test]
    fn q_quits() {
        let mut model = model_with_repos();
        let msg = TuiUpdate::handle_key(&mut model, KeyCode::Char('q'), KeyModifiers::NONE).unwrap();
        assert!(matches!(msg, TuiMessage::Command(Command::Quit)));
    }

    #[test]
    fn enter_selects_repo_under_cursor() {
        let mut model = model_with_repos();
        TuiUpdate::handle_key(&mut model, KeyCode::Down, KeyModifiers::NONE).unwrap();
        let msg = TuiUpdate::handle_key(&mut model, KeyCode::Enter, KeyModifiers::NONE).unwrap();
        match msg {
            TuiMessage::Command(Command::SelectRepository { id }) => assert_eq!(id, RepoId(2)),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn enter_with_empty_list_is_a_noop() {
        let mut model = TuiModel::new(UiConfig::default());
        let msg = TuiUpdate::handle_key(&mut model, KeyCode::Enter, KeyModifiers::NONE).unwrap();
        assert!(matches!(msg, TuiMessage::None));
    }

    #[test]
    fn r_requests_reselect() {
        let mut model = model_with_repos();
        let msg = TuiUpdate::handle_key(&mut model, KeyCode::Char('r'), KeyModifiers::NONE).unwrap();
        assert!(matches!(msg, TuiMessage::Command(Command::Reselect)));
    }

    #[test]
    fn vim_keys_move_cursor() {
        let mut model = model_with_repos();
        TuiUpdate::handle_key(&mut model, KeyCode::Char('j'), KeyModifiers::NONE).unwrap();
        assert_eq!(model.cursor, 1);
        TuiUpdate::handle_key(&mut model, KeyCode::Char('k'), KeyModifiers::NONE).unwrap();
        assert_eq!(model.cursor, 0);
    }
}
