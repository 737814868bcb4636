pub mod config;
pub mod enhance;
pub mod order;
pub mod outline;
pub mod upload;
