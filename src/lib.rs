pub mod config;
pub mod logging;
pub mod replay;
pub mod shutdown;
pub mod store;
pub mod ui;
