pub mod args;
pub mod config;
pub mod feedback;
pub mod logging;
pub mod survey;
pub mod ui;
