pub mod app;
pub mod cart;
pub mod commands;
