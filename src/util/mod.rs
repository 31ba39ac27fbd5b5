pub(crate) mod app_dirs;
mod error;
pub mod greek;

pub use self::error::{color_enabled, error_exit, error_message, set_color_enabled};
