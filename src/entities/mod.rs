pub mod prelude;

pub mod action_events;
pub mod administrators;
