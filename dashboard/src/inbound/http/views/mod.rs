//! Server-rendered HTML for the two dashboard pages.

mod detail;
mod html;
mod list;

pub use detail::render_detail;
pub use list::{reload_href, render_list};
