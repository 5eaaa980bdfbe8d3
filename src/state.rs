use crate::anim::Animation;
use crate::data::model::TrendDataset;
use crate::data::series::{PercentChange, SeriesError, TrendPoint, filter_series, percentage_change};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A discrete input to the application: a widget selection, the play
/// button, or a timer tick. Every mutation of [`AppState`] goes through
/// [`AppState::handle`], so any event loop (or a test) can drive the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectCounty(String),
    SelectIndicator(String),
    PlayPressed,
    Tick,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, static for the process lifetime.
    pub dataset: TrendDataset,

    /// Current dropdown selections; always members of the dataset's
    /// distinct value lists.
    pub selected_county: String,
    pub selected_indicator: String,

    /// Reveal-animation mode and cursor.
    pub animation: Animation,

    /// Trend series for the current selection (cached, recomputed on
    /// selection change).
    pub series: Vec<TrendPoint>,

    /// Percentage change across the full series, or why it is unavailable.
    /// A property of the whole trend, so ticks never touch it.
    pub change: Result<PercentChange, SeriesError>,
}

impl AppState {
    /// Build the initial state: first county and indicator in source order.
    ///
    /// The loader guarantees a non-empty dataset, so the defaults exist.
    pub fn new(dataset: TrendDataset) -> Self {
        let selected_county = dataset.counties.first().cloned().unwrap_or_default();
        let selected_indicator = dataset.indicators.first().cloned().unwrap_or_default();

        let mut state = Self {
            dataset,
            selected_county,
            selected_indicator,
            animation: Animation::default(),
            series: Vec::new(),
            change: Err(SeriesError::EmptySeries),
        };
        state.refresh_series();
        state
    }

    /// Apply one event. Selection events ignore values absent from the
    /// dataset, which keeps the selection-validity invariant even for a
    /// misbehaving caller (the dropdowns only offer dataset values).
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::SelectCounty(county) => {
                if self.dataset.counties.contains(&county) && county != self.selected_county {
                    self.selected_county = county;
                    self.refresh_series();
                }
            }
            Event::SelectIndicator(indicator) => {
                if self.dataset.indicators.contains(&indicator)
                    && indicator != self.selected_indicator
                {
                    self.selected_indicator = indicator;
                    self.refresh_series();
                }
            }
            Event::PlayPressed => self.animation.play(),
            Event::Tick => self.animation.tick(self.series.len()),
        }
    }

    /// Recompute the cached series and change metric after a selection
    /// change, and re-bound the animation cursor to the new length.
    fn refresh_series(&mut self) {
        self.series = filter_series(&self.dataset, &self.selected_county, &self.selected_indicator);
        self.change = percentage_change(&self.series);
        self.animation.clamp_to(self.series.len());
    }
}
