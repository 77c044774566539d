use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player counts for local and networked play. Zero means the mode is unsupported.
///
/// Counts are plain JSON numbers, so fractional or negative values stored by
/// other writers still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Multiplayer {
    #[serde(default)]
    pub offline: f64,
    #[serde(default)]
    pub online: f64,
}

impl Multiplayer {
    pub fn has_offline(&self) -> bool {
        self.offline.is_truthy()
    }

    pub fn has_online(&self) -> bool {
        self.online.is_truthy()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub multiplayer: Multiplayer,
    #[serde(default)]
    pub languages: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Builds a new record from caller input. Fields that are absent or falsy
    /// fall back to their defaults.
    pub fn new(id: String, input: GameInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: pick(input.name, String::new()),
            rating: input.rating.filter(Truthy::is_truthy),
            poster: pick(input.poster, String::new()),
            screenshots: pick(input.screenshots, Vec::new()),
            platforms: pick(input.platforms, Vec::new()),
            multiplayer: pick(input.multiplayer, Multiplayer::default()),
            languages: pick(input.languages, Vec::new()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a partial update. A field is replaced only when the input
    /// carries a truthy value, so an update can never clear a field.
    pub fn merge(&mut self, input: GameInput, now: DateTime<Utc>) {
        self.name = pick(input.name, std::mem::take(&mut self.name));
        self.rating = input.rating.filter(Truthy::is_truthy).or(self.rating);
        self.poster = pick(input.poster, std::mem::take(&mut self.poster));
        self.screenshots = pick(input.screenshots, std::mem::take(&mut self.screenshots));
        self.platforms = pick(input.platforms, std::mem::take(&mut self.platforms));
        self.multiplayer = pick(input.multiplayer, self.multiplayer);
        self.languages = pick(input.languages, std::mem::take(&mut self.languages));
        self.updated_at = now;
    }
}

/// Caller-supplied fields for create and update. `None` means the field was
/// not sent (or sent as `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplayer: Option<Multiplayer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl GameInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_platforms<I, P>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_languages<I, L>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_multiplayer(mut self, offline: f64, online: f64) -> Self {
        self.multiplayer = Some(Multiplayer { offline, online });
        self
    }
}

/// Whether a supplied value counts as "present" for create/update merging.
///
/// Empty strings and zero (or NaN) numbers are falsy. Sequences and the
/// multiplayer object count as present whenever they are supplied, even empty.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for Multiplayer {
    fn is_truthy(&self) -> bool {
        true
    }
}

fn pick<T: Truthy>(supplied: Option<T>, fallback: T) -> T {
    match supplied {
        Some(value) if value.is_truthy() => value,
        _ => fallback,
    }
}
