use super::EngineState;
use crate::error::Result;
use crate::model::Style;
use crate::notify::Notification;
use crate::store::backend::StorageBackend;
use crate::store::storage::Durability;

/// Writes the full collection. The notification reflects the durability outcome; a backend
/// that cannot confirm durability produces none.
pub fn run<B: StorageBackend>(state: &EngineState<B>) {
    report(state, state.store.save(), "snippets");
}

pub fn style<B: StorageBackend>(state: &EngineState<B>, default: Style) -> Result<Style> {
    state.store.storage().style(default)
}

pub fn save_style<B: StorageBackend>(state: &EngineState<B>, style: &Style) {
    report(state, state.store.storage().save_style(style), "style");
}

fn report<B: StorageBackend>(state: &EngineState<B>, outcome: Result<Durability>, what: &str) {
    match outcome {
        Ok(Durability::Confirmed) => state.notify(Notification::SaveSucceeded),
        Ok(Durability::Unconfirmed) => {
            tracing::debug!(what, "saved without durability confirmation");
        }
        Err(e) => {
            tracing::warn!(what, error = %e, "save failed");
            state.notify(Notification::SaveFailed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::EngineState;
    use crate::notify::ChannelSink;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{numbered_snippets, StateFixture};

    #[test]
    fn save_writes_current_order() {
        let fixture = StateFixture::with_snippets(numbered_snippets(3));
        fixture.state.store.storage().remove_snippet("0").unwrap();
        assert_eq!(fixture.stored().len(), 2);

        run(&fixture.state);
        assert_eq!(fixture.stored().len(), 3);
        assert_eq!(fixture.drain(), vec![Notification::SaveSucceeded]);
    }

    #[test]
    fn rejected_persist_reports_failure() {
        let fixture = StateFixture::with_snippets(numbered_snippets(1));
        fixture.backend.set_simulate_persist_rejection(true);
        run(&fixture.state);
        assert_eq!(fixture.drain(), vec![Notification::SaveFailed]);
    }

    #[test]
    fn write_error_reports_failure() {
        let fixture = StateFixture::with_snippets(numbered_snippets(1));
        fixture.backend.set_simulate_write_error(true);
        run(&fixture.state);
        assert_eq!(fixture.drain(), vec![Notification::SaveFailed]);
    }

    #[test]
    fn unconfirmed_durability_is_silent() {
        let (sink, notifications) = ChannelSink::unbounded();
        let state = EngineState::open(MemBackend::without_durability(), Box::new(sink), 12).unwrap();
        run(&state);
        assert!(notifications.try_iter().next().is_none());
    }

    #[test]
    fn style_round_trip() {
        let fixture = StateFixture::new();
        let default = Style::from_json(r#"{"accent":"teal"}"#).unwrap();
        assert_eq!(style(&fixture.state, default.clone()).unwrap(), default);

        let edited = Style::from_json(r#"{"accent":"plum"}"#).unwrap();
        save_style(&fixture.state, &edited);
        assert_eq!(fixture.drain(), vec![Notification::SaveSucceeded]);
        assert_eq!(style(&fixture.state, default).unwrap(), edited);
    }
}
