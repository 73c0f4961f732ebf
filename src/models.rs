pub mod prediction;
pub mod user_event;
