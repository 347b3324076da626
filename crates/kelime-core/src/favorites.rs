use kelime_types::TranslationItem;

/// Outcome of a toggle, used by the caller to pick the toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Add `item` to favorites, or remove it when an entry with the same id is
/// already present. Favorites are uncapped; new entries go to the front.
pub fn toggle_favorite(
    favorites: Vec<TranslationItem>,
    item: &TranslationItem,
) -> (Vec<TranslationItem>, FavoriteToggle) {
    if favorites.iter().any(|fav| fav.id == item.id) {
        let remaining = favorites
            .into_iter()
            .filter(|fav| fav.id != item.id)
            .collect();
        (remaining, FavoriteToggle::Removed)
    } else {
        let mut updated = favorites;
        updated.insert(0, item.clone());
        (updated, FavoriteToggle::Added)
    }
}

/// Drop the favorite with `id`, if present. No-op for absent ids.
pub fn remove_from_favorites(favorites: Vec<TranslationItem>, id: &str) -> Vec<TranslationItem> {
    favorites.into_iter().filter(|fav| fav.id != id).collect()
}
