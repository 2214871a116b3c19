//! HTML page handlers.

mod home;
mod metrics;
mod shorten;

pub use home::home_handler;
pub use metrics::metrics_page_handler;
pub use shorten::{ShortenForm, shorten_form_handler};
