pub mod output;
pub mod render;

pub use output::Output;
pub use render::{render_outline, render_structure};
