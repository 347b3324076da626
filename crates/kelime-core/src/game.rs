//! Self-test session over the favorites collection.
//!
//! A session is built from a snapshot of favorites at game start and lives
//! only in memory; abandoning it (switching views) discards all progress.

use kelime_types::{GameResult, TranslationItem};

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("cannot start a game without favorites")]
    EmptyDeck,
}

/// What happened after recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameProgress {
    /// More cards remain; `current()` now points at the next one.
    Next,
    /// Every card has been answered or skipped.
    Finished,
}

pub struct GameSession {
    items: Vec<TranslationItem>,
    cursor: usize,
    results: Vec<GameResult>,
}

impl GameSession {
    /// Snapshot `favorites` into a new session. An empty collection is
    /// rejected; no session is produced.
    pub fn new(favorites: &[TranslationItem]) -> Result<Self, GameError> {
        if favorites.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        Ok(Self {
            items: favorites.to_vec(),
            cursor: 0,
            results: Vec::new(),
        })
    }

    /// The card currently shown, or `None` once the session is finished.
    pub fn current(&self) -> Option<&TranslationItem> {
        self.items.get(self.cursor)
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.items.len()
    }

    /// Record whether the user knew the current card and advance.
    pub fn answer(&mut self, known: bool) -> GameProgress {
        self.record(Some(known))
    }

    /// Record the current card as unanswered and advance.
    pub fn skip(&mut self) -> GameProgress {
        self.record(None)
    }

    fn record(&mut self, known: Option<bool>) -> GameProgress {
        if let Some(item) = self.items.get(self.cursor) {
            self.results.push(GameResult {
                item: item.clone(),
                known,
            });
            self.cursor += 1;
        }

        if self.is_finished() {
            GameProgress::Finished
        } else {
            GameProgress::Next
        }
    }

    /// Ordered per-card outcomes; complete once the session is finished.
    pub fn into_results(self) -> Vec<GameResult> {
        self.results
    }
}

/// Aggregate counts for the analysis view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSummary {
    pub known: usize,
    pub unknown: usize,
    pub skipped: usize,
}

pub fn summarize(results: &[GameResult]) -> GameSummary {
    results
        .iter()
        .fold(GameSummary::default(), |mut acc, r| {
            match r.known {
                Some(true) => acc.known += 1,
                Some(false) => acc.unknown += 1,
                None => acc.skipped += 1,
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorites(n: usize) -> Vec<TranslationItem> {
        (0..n)
            .map(|i| TranslationItem {
                id: i.to_string(),
                from_text: format!("word-{i}"),
                to_text: format!("translated-{i}"),
                source_lang: "tr".to_string(),
                target_lang: "en".to_string(),
                pronunciation: String::new(),
                meanings: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn empty_favorites_cannot_start_a_game() {
        assert!(matches!(GameSession::new(&[]), Err(GameError::EmptyDeck)));
    }

    #[test]
    fn session_yields_one_result_per_card() {
        let deck = favorites(3);
        let mut session = GameSession::new(&deck).unwrap();

        assert_eq!(session.total(), 3);
        assert_eq!(session.current().unwrap().id, "0");

        assert_eq!(session.answer(true), GameProgress::Next);
        assert_eq!(session.answer(false), GameProgress::Next);
        assert_eq!(session.skip(), GameProgress::Finished);
        assert!(session.is_finished());
        assert!(session.current().is_none());

        let results = session.into_results();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].item.id, "0");
        assert_eq!(results[0].known, Some(true));
        assert_eq!(results[1].known, Some(false));
        assert_eq!(results[2].item.id, "2");
        assert_eq!(results[2].known, None);
    }

    #[test]
    fn answering_past_the_end_records_nothing() {
        let deck = favorites(1);
        let mut session = GameSession::new(&deck).unwrap();

        assert_eq!(session.answer(true), GameProgress::Finished);
        assert_eq!(session.answer(true), GameProgress::Finished);
        assert_eq!(session.into_results().len(), 1);
    }

    #[test]
    fn summary_counts_outcomes() {
        let deck = favorites(4);
        let mut session = GameSession::new(&deck).unwrap();
        session.answer(true);
        session.answer(true);
        session.answer(false);
        session.skip();

        let summary = summarize(&session.into_results());
        assert_eq!(
            summary,
            GameSummary {
                known: 2,
                unknown: 1,
                skipped: 1
            }
        );
    }
}
