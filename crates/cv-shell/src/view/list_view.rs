use cv_core::{CategoryFilter, DisplayProfile, ListState, ListStatus};

use super::format::{capitalize, push_line};
use super::render_header;

const LOADING_LABEL: &str = "Loading...";
const LOAD_MORE_LABEL: &str = "Load more";

/// Render the list screen from a store snapshot.
///
/// 渲染列表视图：标题、过滤后的条目、错误信息和加载按钮。
pub fn render_list(state: &ListState, profile: DisplayProfile) -> String {
    let mut out = render_header(profile);

    if let CategoryFilter::Tag(tag) = state.active_filter() {
        push_line(&mut out, format!("Filter: {tag}"));
    }

    let visible = state.filtered_view();
    for entry in &visible {
        let row = format!("#{} {}", entry.identifier, capitalize(&entry.display_name));
        match &entry.image_ref {
            Some(image) => push_line(&mut out, format!("{row} <{image}>")),
            None => push_line(&mut out, row),
        }
    }
    if visible.is_empty() && !state.items().is_empty() {
        push_line(
            &mut out,
            format!("(no loaded entries match \"{}\")", state.active_filter()),
        );
    }

    if let Some(message) = state.error_message() {
        push_line(&mut out, message);
    }

    let label = if state.status() == ListStatus::Loading {
        LOADING_LABEL
    } else {
        LOAD_MORE_LABEL
    };
    push_line(&mut out, format!("[{label}]"));
    out
}
