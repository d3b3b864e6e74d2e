use cv_core::{DetailPhase, DetailSnapshot, DisplayProfile};

use super::format::{ability_line, capitalize, humanize, push_line};
use super::render_header;

/// Render the detail screen for the loader's current phase.
///
/// Descriptions only appear once every one of them has arrived; a failed
/// load shows its message instead of a partial view.
pub fn render_detail(phase: &DetailPhase, profile: DisplayProfile) -> String {
    let mut out = render_header(profile);
    match phase {
        DetailPhase::Idle => {}
        DetailPhase::Loading { id } => push_line(&mut out, format!("Loading #{id}...")),
        DetailPhase::Failed { id, message } => push_line(&mut out, format!("#{id}: {message}")),
        DetailPhase::Ready(snapshot) => render_snapshot(&mut out, snapshot),
    }
    out
}

fn render_snapshot(out: &mut String, snapshot: &DetailSnapshot) {
    let entry = snapshot.entry();
    push_line(out, capitalize(&entry.display_name));
    if let Some(image) = &entry.image_ref {
        push_line(out, format!("Image: {image}"));
    }

    push_line(out, format!("Type: {}", entry.categories.join(", ")));

    push_line(out, "Abilities:");
    for (name, description) in snapshot.abilities_with_descriptions() {
        push_line(out, format!("  {}", ability_line(name, description)));
    }

    let moves: Vec<String> = entry.moves.iter().map(|m| humanize(m)).collect();
    push_line(out, format!("Moves: {}", moves.join(", ")));
}
