pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod flows;
pub mod logging;
pub mod store;
pub mod tui;

#[cfg(test)]
mod testing;
