use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::render::ChartPayload;

// ---------------------------------------------------------------------------
// Trend plot (central panel)
// ---------------------------------------------------------------------------

/// Render the trend line chart from an already-projected payload.
pub fn trend_plot(ui: &mut Ui, payload: &ChartPayload) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&payload.title);
    });

    Plot::new("trend_plot")
        .legend(Legend::default())
        .x_axis_label(payload.x_label)
        .y_axis_label(payload.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line_points: PlotPoints = payload.points.iter().copied().collect();
            let line = Line::new(line_points)
                .name(&payload.trace_name)
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);

            // Marker per revealed observation, matching the lines+markers
            // style of the chart.
            let marker_points: PlotPoints = payload.points.iter().copied().collect();
            let markers = Points::new(marker_points)
                .name(&payload.trace_name)
                .color(Color32::LIGHT_BLUE)
                .radius(3.0);
            plot_ui.points(markers);
        });
}
