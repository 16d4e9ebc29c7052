//! Item list parsing for the wheel input box.

/// Splits raw input into wheel items: one per line, trimmed, empty lines
/// dropped. Order is kept and duplicates are allowed.
pub fn parse_items(text: &str) -> Vec<String> {
    clean_items(text.lines())
}

/// Trims already separated entries and drops the blank ones. An entry is
/// never split, even if it contains a line break.
pub fn clean_items<I>(entries: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let entry = entry.as_ref().trim();
            (!entry.is_empty()).then(|| entry.to_string())
        })
        .collect()
}
