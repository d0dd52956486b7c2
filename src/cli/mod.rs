pub mod commands;
pub mod view;
pub mod wizard;
