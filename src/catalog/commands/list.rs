use crate::error::Result;
use crate::model::Game;
use crate::store::CollectionStore;

/// Server-side list filter. Only the name search is supported here; richer
/// filtering happens client-side in [`crate::view`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub search: Option<String>,
}

impl GameFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }

    fn term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }
}

/// Lists games in insertion order. With a search term, keeps only games whose
/// name contains the trimmed term, ignoring case.
pub fn run<S: CollectionStore + ?Sized>(store: &S, filter: &GameFilter) -> Result<Vec<Game>> {
    let games = store.load()?;
    let Some(term) = filter.term() else {
        return Ok(games);
    };
    Ok(games
        .into_iter()
        .filter(|g| g.name.to_lowercase().contains(&term))
        .collect())
}
