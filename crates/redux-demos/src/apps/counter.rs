//! Counter app: a bare store holding an integer

use super::{DemoApp, SharedWriter};
use crate::reducers::counter_reducer;
use crate::script::UiEvent;
use crate::view_models::CounterViewModel;
use crate::{views, CounterStore};
use anyhow::{bail, Result};
use redux_demos_config::AppConfig;
use redux_store::{Store, StoreError, Subscription};

pub struct CounterApp {
    store: CounterStore,
    view_model: CounterViewModel,
}

impl CounterApp {
    pub fn new(config: &AppConfig) -> Self {
        let store = Store::with_state(counter_reducer::reduce, config.initial_counter);
        let view_model = CounterViewModel::new(&store);
        Self { store, view_model }
    }

    pub fn store(&self) -> &CounterStore {
        &self.store
    }
}

fn render(store: &CounterStore) -> String {
    views::counter(&CounterViewModel::new(store).props())
}

impl DemoApp for CounterApp {
    fn render(&self) -> String {
        views::counter(&self.view_model.props())
    }

    fn subscribe_renderer(&self, out: SharedWriter) -> Subscription {
        super::subscribe_renderer(&self.store, out, render)
    }

    fn dispatch_value(&self, value: serde_json::Value) -> Result<(), StoreError> {
        self.store.dispatch_value(value)
    }

    fn handle_event(&self, event: &UiEvent) -> Result<()> {
        match event.name.as_str() {
            "increment" => self.view_model.on_increment(),
            "decrement" => self.view_model.on_decrement(),
            other => bail!("unknown event @{} for the counter app", other),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_config() {
        let config = AppConfig {
            initial_counter: 7,
            ..AppConfig::default()
        };
        let app = CounterApp::new(&config);

        assert_eq!(*app.store().state(), 7);
        assert_eq!(app.render(), "Clicked: 7 times");
    }

    #[test]
    fn test_events_click_buttons() {
        let app = CounterApp::new(&AppConfig::default());
        let event = |name: &str| UiEvent {
            name: name.to_string(),
            arg: None,
        };

        app.handle_event(&event("decrement")).unwrap();
        app.handle_event(&event("decrement")).unwrap();
        assert!(app.handle_event(&event("reset")).is_err());

        assert_eq!(*app.store().state(), -2);
    }
}
