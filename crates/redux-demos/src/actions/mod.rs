//! Actions for the demo apps
//!
//! Every action enum decodes from the duck-typed `{ "type": ..., ...payload }`
//! shape and has an `Unknown` variant for types the app does not handle.

mod counter;
mod todo;

pub use counter::CounterAction;
pub use todo::TodoAction;
