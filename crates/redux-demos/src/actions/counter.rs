use redux_store::Action;
use serde::Deserialize;
use strum::IntoStaticStr;

/// Actions of the counter app
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    Increment,
    Decrement,
    #[serde(other)]
    Unknown,
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        self.into()
    }
}
