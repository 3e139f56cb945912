//! Utility module implementing the derived state of a color/symbol picker.
//!
//! A user interface for prettymoji tracks a current color, a current symbol,
//! and the dataset's loading status. Everything else, notably whether the
//! color is valid and which record matches it, is derived from those inputs.
//! [`MatchState`] bundles inputs and derived values, and
//! [`MatchState::update`] computes the next state for an [`Event`]. Both are
//! plain values without hidden state, so the same state and event always
//! produce the same next state.

use std::sync::Arc;

use crate::input::{shape_color_input, shape_symbol_input};
use crate::{parse_color, Dataset, Rgb, SymbolRecord};

/// The color a fresh state starts out with.
pub const DEFAULT_COLOR: &str = "#7C4DFF";

static EMPTY: Dataset = Dataset::empty();

/// The loading status of a dataset.
///
/// A dataset that failed to load behaves exactly like an empty one.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DatasetStatus {
    /// The dataset is still being loaded.
    #[default]
    Loading,
    /// The dataset has been loaded.
    Loaded(Arc<Dataset>),
    /// The dataset could not be loaded, for the given reason.
    Failed(String),
}

impl DatasetStatus {
    /// Get the loaded dataset.
    pub fn dataset(&self) -> Option<&Dataset> {
        match *self {
            Self::Loaded(ref dataset) => Some(dataset.as_ref()),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Determine whether the dataset is still being loaded.
    pub fn is_loading(&self) -> bool {
        matches!(*self, Self::Loading)
    }
}

/// An event changing the inputs of a [`MatchState`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The user edited the color field, which now holds the given raw text.
    ColorEdited(String),
    /// The user picked the given color, e.g., with a color wheel.
    ColorPicked(Rgb),
    /// The user edited the symbol field, which now holds the given raw text.
    SymbolEdited(String),
    /// The dataset finished loading. A new dataset replaces any previous one.
    DatasetLoaded(Arc<Dataset>),
    /// The dataset failed to load, for the given reason.
    DatasetFailed(String),
}

/// Derive the color and its closest record.
///
/// If the text is a valid color, this function returns the color and, if the
/// dataset is loaded and has records, the record closest to that color.
/// Otherwise, both are `None`.
pub fn recompute(
    color_text: &str,
    dataset: Option<&Dataset>,
) -> (Option<Rgb>, Option<SymbolRecord>) {
    let Ok(color) = parse_color(color_text) else {
        return (None, None);
    };

    let matched = dataset.and_then(|d| d.find_closest(color)).cloned();
    (Some(color), matched)
}

/// The state of a color/symbol picker.
///
/// ```
/// # use std::sync::Arc;
/// # use prettymoji::{Dataset, Rgb, SymbolRecord};
/// # use prettymoji::state::{Event, MatchState};
/// let dataset = Arc::new(Dataset::new(vec![
///     SymbolRecord::new("🟪", "purple_square", Rgb::new(0xaa, 0x8e, 0xd6)),
///     SymbolRecord::new("🟩", "green_square", Rgb::new(0x78, 0xb1, 0x59)),
/// ]));
///
/// let state = MatchState::new().update(Event::DatasetLoaded(dataset));
/// assert_eq!(state.matched().map(|r| r.symbol()), Some("🟪"));
///
/// let state = state.update(Event::ColorEdited("00ff00".to_string()));
/// assert_eq!(state.color_text(), "#00ff00");
/// assert_eq!(state.matched().map(|r| r.symbol()), Some("🟩"));
///
/// let state = state.update(Event::ColorEdited("#00ff".to_string()));
/// assert!(!state.is_valid());
/// assert!(state.matched().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MatchState {
    color_text: String,
    color: Option<Rgb>,
    matched: Option<SymbolRecord>,
    symbol_text: String,
    dataset: DatasetStatus,
}

impl MatchState {
    /// Create a new state with the default color while the dataset is still
    /// loading.
    pub fn new() -> Self {
        Self::with_color_text(DEFAULT_COLOR)
    }

    /// Create a new state with the given color text while the dataset is
    /// still loading.
    pub fn with_color_text(color_text: &str) -> Self {
        let (color, matched) = recompute(color_text, None);
        Self {
            color_text: color_text.to_owned(),
            color,
            matched,
            symbol_text: String::new(),
            dataset: DatasetStatus::Loading,
        }
    }

    /// Get the color text.
    pub fn color_text(&self) -> &str {
        &self.color_text
    }

    /// Get the color, if the color text is valid.
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    /// Determine whether the color text is valid.
    pub fn is_valid(&self) -> bool {
        self.color.is_some()
    }

    /// Get the record closest to the color.
    pub fn matched(&self) -> Option<&SymbolRecord> {
        self.matched.as_ref()
    }

    /// Get the symbol text.
    pub fn symbol_text(&self) -> &str {
        &self.symbol_text
    }

    /// Get the dataset's status.
    pub fn dataset(&self) -> &DatasetStatus {
        &self.dataset
    }

    /// Compute the state after the given event.
    #[must_use = "method returns the next state and does not mutate the original"]
    pub fn update(mut self, event: Event) -> Self {
        match event {
            Event::ColorEdited(raw) => {
                let Some(text) = shape_color_input(&raw) else {
                    log::debug!("ignoring color input {:?}", raw);
                    return self;
                };
                self.color_text = text;
            }
            Event::ColorPicked(color) => self.color_text = color.to_string(),
            Event::SymbolEdited(raw) => {
                let dataset = self.dataset.dataset().unwrap_or(&EMPTY);
                let input = shape_symbol_input(dataset, &raw);
                if let Some(record) = input.record {
                    self.color_text = record.hex();
                }
                self.symbol_text = input.text;
            }
            Event::DatasetLoaded(dataset) => {
                log::debug!("switching to dataset with {} records", dataset.len());
                self.dataset = DatasetStatus::Loaded(dataset);
            }
            Event::DatasetFailed(reason) => {
                log::debug!("dataset failed to load: {}", reason);
                self.dataset = DatasetStatus::Failed(reason);
            }
        }

        self.refresh()
    }

    fn refresh(mut self) -> Self {
        let (color, matched) = recompute(&self.color_text, self.dataset.dataset());
        if let (Some(record), Some(color)) = (matched.as_ref(), color) {
            log::debug!("color {} matches {}", color, record.symbol());
        } else {
            log::debug!("no match for color {:?}", self.color_text);
        }

        self.color = color;
        self.matched = matched;
        self
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::{recompute, DatasetStatus, Event, MatchState, DEFAULT_COLOR};
    use crate::{Dataset, Rgb, SymbolRecord};

    fn squares() -> Arc<Dataset> {
        Arc::new(Dataset::new(vec![
            SymbolRecord::new("🟥", "red_square", Rgb::new(0xdd, 0x2e, 0x44)),
            SymbolRecord::new("🟦", "blue_square", Rgb::new(0x55, 0xac, 0xee)),
            SymbolRecord::new("🟪", "purple_square", Rgb::new(0xaa, 0x8e, 0xd6)),
        ]))
    }

    #[test]
    fn test_recompute() {
        let dataset = squares();

        let (color, matched) = recompute("#FF0000", Some(&*dataset));
        assert_eq!(color, Some(Rgb::new(255, 0, 0)));
        assert_eq!(matched.as_ref().map(SymbolRecord::symbol), Some("🟥"));

        let (color, matched) = recompute("#FF000", Some(&*dataset));
        assert!(color.is_none());
        assert!(matched.is_none());

        let (color, matched) = recompute("#FF0000", None);
        assert!(color.is_some());
        assert!(matched.is_none());

        let (color, matched) = recompute("#FF0000", Some(&Dataset::empty()));
        assert!(color.is_some());
        assert!(matched.is_none());
    }

    #[test]
    fn test_initial_state() {
        let state = MatchState::default();
        assert_eq!(state.color_text(), DEFAULT_COLOR);
        assert_eq!(state.color(), Some(Rgb::new(0x7c, 0x4d, 0xff)));
        assert!(state.matched().is_none());
        assert!(state.dataset().is_loading());
        assert_eq!(state.symbol_text(), "");
    }

    #[test]
    fn test_dataset_loaded_triggers_match() {
        let state = MatchState::new().update(Event::DatasetLoaded(squares()));
        assert_eq!(state.matched().map(SymbolRecord::symbol), Some("🟪"));
        assert!(state.dataset().dataset().is_some());
    }

    #[test]
    fn test_color_edits() {
        let state = MatchState::new().update(Event::DatasetLoaded(squares()));

        let state = state.update(Event::ColorEdited("5".to_owned()));
        assert_eq!(state.color_text(), "#5");
        assert!(!state.is_valid());
        assert!(state.matched().is_none());

        let state = state.update(Event::ColorEdited("#55ACEF".to_owned()));
        assert_eq!(state.matched().map(SymbolRecord::symbol), Some("🟦"));

        // Rejected input leaves the state as is.
        let before = state.clone();
        let state = state.update(Event::ColorEdited("blue".to_owned()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejected_color_keeps_previous_text() {
        let state = MatchState::new()
            .update(Event::DatasetLoaded(squares()))
            .update(Event::ColorEdited("#55ACEE".to_owned()));

        for raw in ["7C4DFF0", "xyz", " 55ACEE"] {
            let next = state.clone().update(Event::ColorEdited(raw.to_owned()));
            assert_eq!(next.color_text(), "#55ACEE");
            assert_eq!(next.matched().map(SymbolRecord::symbol), Some("🟦"));
        }

        // Accepted but incomplete input still replaces the text.
        let next = state.update(Event::ColorEdited("55A".to_owned()));
        assert_eq!(next.color_text(), "#55A");
        assert!(next.matched().is_none());
    }

    #[test]
    fn test_color_picked() {
        let state = MatchState::new()
            .update(Event::DatasetLoaded(squares()))
            .update(Event::ColorPicked(Rgb::new(0xe0, 0x30, 0x40)));
        assert_eq!(state.color_text(), "#E03040");
        assert_eq!(state.matched().map(SymbolRecord::symbol), Some("🟥"));
    }

    #[test]
    fn test_symbol_edits() {
        let state = MatchState::new()
            .update(Event::DatasetLoaded(squares()))
            .update(Event::SymbolEdited("🟥🟦".to_owned()));
        assert_eq!(state.symbol_text(), "🟦");
        assert_eq!(state.color_text(), "#55ACEE");
        assert_eq!(state.matched().map(SymbolRecord::symbol), Some("🟦"));

        // Unknown symbols leave the color alone.
        let state = state.update(Event::SymbolEdited("🟦?".to_owned()));
        assert_eq!(state.symbol_text(), "?");
        assert_eq!(state.color_text(), "#55ACEE");
    }

    #[test]
    fn test_symbol_edits_while_loading() {
        let state = MatchState::new().update(Event::SymbolEdited("🟥".to_owned()));
        assert_eq!(state.symbol_text(), "🟥");
        assert_eq!(state.color_text(), DEFAULT_COLOR);
    }

    #[test]
    fn test_failed_load_behaves_like_empty() {
        let failed = MatchState::new().update(Event::DatasetFailed("404".to_owned()));
        let empty = MatchState::new().update(Event::DatasetLoaded(Arc::new(Dataset::empty())));

        assert_eq!(failed.dataset(), &DatasetStatus::Failed("404".to_owned()));
        assert_eq!(failed.color(), empty.color());
        assert_eq!(failed.matched(), empty.matched());
        assert!(failed.matched().is_none());
    }

    #[test]
    fn test_reload_swaps_dataset() {
        let state = MatchState::new().update(Event::DatasetLoaded(squares()));
        assert_eq!(state.matched().map(SymbolRecord::symbol), Some("🟪"));

        let other = Arc::new(Dataset::new(vec![SymbolRecord::new(
            "⬛",
            "black_large_square",
            Rgb::new(0x29, 0x2f, 0x33),
        )]));
        let state = state.update(Event::DatasetLoaded(other));
        assert_eq!(state.matched().map(SymbolRecord::symbol), Some("⬛"));
    }

    #[test]
    fn test_update_is_idempotent() {
        let events = [
            Event::DatasetLoaded(squares()),
            Event::ColorEdited("#AA8ED6".to_owned()),
            Event::ColorPicked(Rgb::new(1, 2, 3)),
            Event::SymbolEdited("🟥".to_owned()),
            Event::ColorEdited("#12".to_owned()),
        ];

        let mut state = MatchState::new();
        for event in events {
            let once = state.clone().update(event.clone());
            let twice = once.clone().update(event);
            assert_eq!(once, twice);
            state = once;
        }
    }
}
