use kelime_types::TranslationItem;

/// History keeps this many records; the oldest by recency fall off the end.
pub const HISTORY_CAP: usize = 50;

/// Record a translation into history. Any existing entry whose `from_text`
/// matches case-insensitively is replaced; the new item lands at the front
/// and the collection is truncated to [`HISTORY_CAP`].
pub fn record_translation(
    history: Vec<TranslationItem>,
    item: TranslationItem,
) -> Vec<TranslationItem> {
    let needle = item.from_text.to_lowercase();

    let mut updated: Vec<TranslationItem> = history
        .into_iter()
        .filter(|h| h.from_text.to_lowercase() != needle)
        .collect();

    updated.insert(0, item);
    updated.truncate(HISTORY_CAP);
    updated
}

/// Drop the entry with `id`, if present. Removing an absent id is a no-op.
pub fn remove_from_history(history: Vec<TranslationItem>, id: &str) -> Vec<TranslationItem> {
    history.into_iter().filter(|h| h.id != id).collect()
}
