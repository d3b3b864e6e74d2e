/// Append `text` plus a newline to a screen buffer.
pub(crate) fn push_line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Service slugs use hyphens; show them as words.
pub fn humanize(slug: &str) -> String {
    slug.replace('-', " ")
}

/// `overgrow: powers up grass-type moves when the pokémon's hp is low`
///
/// The description is lower-cased and loses its final character, which for
/// the service's short effects is the closing period.
pub fn ability_line(name: &str, description: &str) -> String {
    let mut sentence = description.trim_end().to_lowercase();
    sentence.pop();
    format!("{}: {}", humanize(name), sentence)
}
