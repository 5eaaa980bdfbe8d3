use eframe::egui::{self, RichText, Ui};

use crate::render::ChartPayload;
use crate::state::{AppState, Event};

// ---------------------------------------------------------------------------
// Left side panel – county / indicator selection
// ---------------------------------------------------------------------------

/// Render the selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Selection");
    ui.separator();

    // Clone the option lists so we can mutate state inside the loops.
    let counties = state.dataset.counties.clone();
    let indicators = state.dataset.indicators.clone();

    ui.strong("County");
    let current_county = state.selected_county.clone();
    egui::ComboBox::from_id_salt("county")
        .selected_text(&current_county)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for county in &counties {
                if ui
                    .selectable_label(current_county == *county, county)
                    .clicked()
                {
                    state.handle(Event::SelectCounty(county.clone()));
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Indicator");
    let current_indicator = state.selected_indicator.clone();
    egui::ComboBox::from_id_salt("indicator")
        .selected_text(&current_indicator)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for indicator in &indicators {
                if ui
                    .selectable_label(current_indicator == *indicator, indicator)
                    .clicked()
                {
                    state.handle(Event::SelectIndicator(indicator.clone()));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: app title and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Cancer Trends in New York State");
        ui.separator();
        ui.label(format!(
            "{} records, {} counties, {} indicators",
            state.dataset.len(),
            state.dataset.counties.len(),
            state.dataset.indicators.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Bottom controls – play button and percentage-change text
// ---------------------------------------------------------------------------

/// Render the animation control and the change summary.
pub fn controls(ui: &mut Ui, state: &mut AppState, payload: &ChartPayload) {
    ui.horizontal(|ui: &mut Ui| {
        let label = if state.animation.is_playing() {
            "Playing…"
        } else {
            "Play Animation"
        };
        if ui.button(label).clicked() {
            state.handle(Event::PlayPressed);
        }

        ui.separator();
        ui.label(RichText::new(&payload.change_text).size(16.0));
    });
}
