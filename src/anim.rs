use std::time::Duration;

// ---------------------------------------------------------------------------
// Animation driver
// ---------------------------------------------------------------------------

/// Time between animation ticks while playing.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Whether the reveal animation is running.
///
/// There is deliberately no Stopped transition besides the initial state:
/// the dashboard exposes a play action only, and once playing the cursor
/// free-runs until it saturates at the last point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    Stopped,
    Playing,
}

/// Cursor state for the point-reveal animation.
///
/// The cursor is an index into the current trend series bounding how many
/// leading points are revealed (`cursor + 1` of them). It is never reset:
/// pressing play again or changing the selection resumes from wherever it
/// was, clamped to the new series length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Animation {
    pub mode: AnimationMode,
    pub cursor: usize,
}

impl Animation {
    /// Start playing. Idempotent; does not touch the cursor.
    pub fn play(&mut self) {
        self.mode = AnimationMode::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.mode == AnimationMode::Playing
    }

    /// Advance one tick. No-op unless playing; saturates at the last index
    /// of a series of `series_len` points.
    pub fn tick(&mut self, series_len: usize) {
        if !self.is_playing() {
            return;
        }
        let last = series_len.saturating_sub(1);
        if self.cursor < last {
            self.cursor += 1;
        }
    }

    /// Re-bound the cursor after the filtered series changed size.
    pub fn clamp_to(&mut self, series_len: usize) {
        let last = series_len.saturating_sub(1);
        if self.cursor > last {
            self.cursor = last;
        }
    }
}
