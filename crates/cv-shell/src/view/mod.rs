//! Text rendering of the two screens and the route table that selects them.

mod detail_view;
mod format;
mod list_view;
mod route;

pub use detail_view::render_detail;
pub use format::{ability_line, capitalize, humanize};
pub use list_view::render_list;
pub use route::{Route, RouteError};

use cv_core::DisplayProfile;

pub const TITLE: &str = "Catalog";

/// Header shared by both screens: title plus the active palette.
pub fn render_header(profile: DisplayProfile) -> String {
    let palette = profile.palette();
    format!(
        "{TITLE} [{profile}] text {} | surface {} | accent {} | emphasis {}\n",
        palette.text, palette.surface, palette.accent, palette.emphasis
    )
}
