mod app;
pub use app::*;
mod auth_switch;
pub use auth_switch::*;
mod forms;
pub use forms::*;
mod nav;
pub use nav::*;
mod profile;
pub use profile::*;
mod story;
pub use story::*;
