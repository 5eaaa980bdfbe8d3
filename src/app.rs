use std::time::Instant;

use eframe::egui;

use crate::anim::TICK_INTERVAL;
use crate::data::model::TrendDataset;
use crate::render::chart_payload;
use crate::state::{AppState, Event};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrendApp {
    pub state: AppState,
    /// When the last animation tick fired (None until playback starts).
    last_tick: Option<Instant>,
}

impl TrendApp {
    pub fn new(dataset: TrendDataset) -> Self {
        Self {
            state: AppState::new(dataset),
            last_tick: None,
        }
    }

    /// Emit a tick once per interval while playing, and keep the frame
    /// loop alive until the next one is due.
    fn drive_animation(&mut self, ctx: &egui::Context) {
        if !self.state.animation.is_playing() {
            return;
        }

        let now = Instant::now();
        match self.last_tick {
            // First frame after play: arm the timer, reveal nothing extra.
            None => self.last_tick = Some(now),
            Some(prev) if now.duration_since(prev) >= TICK_INTERVAL => {
                self.state.handle(Event::Tick);
                self.last_tick = Some(now);
            }
            Some(_) => {}
        }

        let since_tick = self
            .last_tick
            .map(|t| now.duration_since(t))
            .unwrap_or_default();
        ctx.request_repaint_after(TICK_INTERVAL.saturating_sub(since_tick));
    }
}

impl eframe::App for TrendApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drive_animation(ctx);

        // ---- Top panel: title and dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: county / indicator dropdowns ----
        egui::SidePanel::left("selection_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Project once per frame, after selection events have been applied.
        let payload = chart_payload(&self.state);

        // ---- Bottom panel: play control and percentage change ----
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            panels::controls(ui, &mut self.state, &payload);
        });

        // ---- Central panel: trend chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trend_plot(ui, &payload);
        });
    }
}
