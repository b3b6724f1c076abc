mod app_state;
pub mod forms;
mod screen_state;
mod tabs;

pub use app_state::*;
pub use screen_state::*;
pub use tabs::*;
