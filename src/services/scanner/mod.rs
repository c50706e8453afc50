pub mod matcher;
pub mod normalizer;
pub mod organizer;
pub mod walker;
