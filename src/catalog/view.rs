//! # Browser View
//!
//! The client-side half of filtering. The server only knows a name search;
//! platform, multiplayer mode, Russian language support and sort order are
//! applied here against a snapshot the client already holds.
//!
//! ## Recompute, never narrow
//!
//! [`Browser`] keeps the fetched snapshot untouched and derives every view
//! from it with the *current* [`ViewFilter`]. Clearing a selection therefore
//! brings back everything it excluded; filters never compound on a previously
//! filtered view.

use crate::model::{Game, Multiplayer};
use std::cmp::Ordering;

/// Language a game must list to pass the "has Russian" filter.
pub const RUSSIAN: &str = "Russian";

/// Selection value meaning "no constraint" in the platform and multiplayer pickers.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplayerMode {
    Offline,
    Online,
}

impl MultiplayerMode {
    /// Parse a picker selection. `all` (or anything unknown) means no constraint.
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection {
            "offline" => Some(MultiplayerMode::Offline),
            "online" => Some(MultiplayerMode::Online),
            _ => None,
        }
    }

    pub fn matches(&self, multiplayer: &Multiplayer) -> bool {
        match self {
            MultiplayerMode::Offline => multiplayer.has_offline(),
            MultiplayerMode::Online => multiplayer.has_online(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Snapshot order.
    #[default]
    None,
    /// Highest rating first. Ties keep snapshot order; unrated games go last.
    Rating,
}

impl SortOrder {
    pub fn from_selection(selection: &str) -> Self {
        match selection {
            "rating" => SortOrder::Rating,
            _ => SortOrder::None,
        }
    }
}

/// The current filter selections. Each set field is one AND-combined predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub platform: Option<String>,
    pub multiplayer: Option<MultiplayerMode>,
    pub russian: bool,
    pub sort: SortOrder,
}

impl ViewFilter {
    pub fn matches(&self, game: &Game) -> bool {
        if let Some(platform) = &self.platform {
            if !game.platforms.iter().any(|p| p == platform) {
                return false;
            }
        }
        if let Some(mode) = self.multiplayer {
            if !mode.matches(&game.multiplayer) {
                return false;
            }
        }
        if self.russian && !game.languages.iter().any(|l| l == RUSSIAN) {
            return false;
        }
        true
    }

    /// Filter and sort `snapshot` into a fresh view. `snapshot` is not modified.
    pub fn apply(&self, snapshot: &[Game]) -> Vec<Game> {
        let mut view: Vec<Game> = snapshot
            .iter()
            .filter(|g| self.matches(g))
            .cloned()
            .collect();
        if self.sort == SortOrder::Rating {
            view.sort_by(by_rating_desc);
        }
        view
    }
}

fn by_rating_desc(a: &Game, b: &Game) -> Ordering {
    match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Snapshot plus current selections. Every setter returns the recomputed view.
#[derive(Debug, Clone, Default)]
pub struct Browser {
    snapshot: Vec<Game>,
    filter: ViewFilter,
}

impl Browser {
    pub fn new(snapshot: Vec<Game>) -> Self {
        Self {
            snapshot,
            filter: ViewFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: ViewFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn snapshot(&self) -> &[Game] {
        &self.snapshot
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn replace_snapshot(&mut self, snapshot: Vec<Game>) {
        self.snapshot = snapshot;
    }

    pub fn view(&self) -> Vec<Game> {
        self.filter.apply(&self.snapshot)
    }

    pub fn set_platform(&mut self, selection: &str) -> Vec<Game> {
        self.filter.platform = (selection != ALL).then(|| selection.to_string());
        self.view()
    }

    pub fn set_multiplayer(&mut self, selection: &str) -> Vec<Game> {
        self.filter.multiplayer = MultiplayerMode::from_selection(selection);
        self.view()
    }

    pub fn set_russian(&mut self, russian: bool) -> Vec<Game> {
        self.filter.russian = russian;
        self.view()
    }

    pub fn set_sort(&mut self, selection: &str) -> Vec<Game> {
        self.filter.sort = SortOrder::from_selection(selection);
        self.view()
    }
}
