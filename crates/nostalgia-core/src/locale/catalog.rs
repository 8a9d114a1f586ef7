//! Locale catalog.

use super::tables::{self, EN_US};
use tracing::debug;

/// Tag whose table backs every lookup miss.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Named indices into the phrase tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Phrase {
    By = 0,
    AppName = 1,
    Author = 2,
    AskName = 3,
    Next = 4,
    Your = 5,
    Nostalgia = 6,
    AskPeriod = 7,
    AskCreators = 8,
    AskTopics = 9,
    Possessive = 10,
    NameplateLead = 11,
    NameplateJoin = 12,
    AskLabel = 13,
    SkipLabel = 14,
    VideoPool = 15,
    VideoPoolCaption = 16,
    Player = 17,
    PlayerCaption = 18,
    Loading = 19,
    ReplayTitle = 20,
    ChooseThis = 21,
    DeleteThis = 22,
    ViewSaved = 23,
    NextOne = 24,
    LessOf = 25,
    Arrow = 26,
    MoreOf = 27,
    Creator = 28,
    Topic = 29,
    DragDown = 30,
    ExitMenu = 31,
    Greeting = 32,
    Nevermind = 36,
}

impl Phrase {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Phrase lookup for one resolved locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    tag: String,
    table: &'static [&'static str],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::resolve(DEFAULT_LOCALE)
    }
}

impl Catalog {
    /// Resolves a language tag: exact match, then primary subtag, then `en-US`.
    ///
    /// POSIX-style values (`fr_FR.UTF-8`) are normalized first.
    pub fn resolve(tag: &str) -> Self {
        let normalized = normalize_tag(tag);
        let primary = normalized.split('-').next().unwrap_or_default();

        let (tag, table) = tables::table_for(&normalized)
            .map(|table| (normalized.clone(), table))
            .or_else(|| tables::table_for(primary).map(|table| (primary.to_string(), table)))
            .unwrap_or_else(|| {
                debug!(requested = %normalized, "no phrase table, using {}", DEFAULT_LOCALE);
                (DEFAULT_LOCALE.to_string(), EN_US)
            });

        Self { tag, table }
    }

    /// Picks the configured tag when present, else the environment's.
    pub fn detect(configured: Option<&str>, environment: Option<&str>) -> Self {
        match configured.or(environment) {
            Some(tag) if !tag.trim().is_empty() => Self::resolve(tag),
            _ => Self::default(),
        }
    }

    /// The tag of the table actually in use.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Raw phrase (may contain HTML entities).
    pub fn text(&self, phrase: Phrase) -> &'static str {
        self.text_at(phrase.index())
    }

    /// Raw phrase by index, with the `en-US` and empty-string fallbacks.
    pub fn text_at(&self, index: usize) -> &'static str {
        if let Some(text) = self.table.get(index).copied() {
            return text;
        }
        debug!(locale = %self.tag, index, "phrase missing, falling back");
        EN_US.get(index).copied().unwrap_or("")
    }

    /// Phrase with `&nbsp;` decoded, for plain-text surfaces.
    pub fn plain(&self, phrase: Phrase) -> String {
        self.text(phrase).replace("&nbsp;", " ")
    }

    /// "<name>'s nostalgia", in the locale's word order.
    pub fn nameplate(&self, name: &str) -> String {
        format!(
            "{}{}{}{}{}",
            self.text(Phrase::NameplateLead),
            self.text(Phrase::NameplateJoin),
            name,
            self.text(Phrase::Possessive),
            self.text(Phrase::Nostalgia)
        )
    }

    /// Greeting shown to a returning user.
    pub fn greeting(&self, name: &str) -> String {
        format!("{}{}?", self.text(Phrase::Greeting), name)
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .split('.')
        .next()
        .unwrap_or_default()
        .replace('_', "-")
}
