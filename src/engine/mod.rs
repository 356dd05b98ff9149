pub mod cache;
pub mod manager;
pub mod modifier;
mod presenter;
pub mod sequencer;
