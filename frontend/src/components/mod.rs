pub mod create_event;
pub mod editor;
