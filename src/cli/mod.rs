pub mod commands;
pub mod ui;
pub mod util;

pub use util::{CommandContext, STDIN_PATH, read_json, read_structure};
