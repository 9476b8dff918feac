pub use super::action_events::Entity as ActionEvents;
pub use super::administrators::Entity as Administrators;
