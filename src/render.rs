use crate::data::series::SeriesError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart payload: pure projection of state into what the plot draws
// ---------------------------------------------------------------------------

/// Everything the chart widgets need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    /// Revealed points, year-ascending: the first `cursor + 1` of the
    /// series (all of them once the cursor has saturated).
    pub points: Vec<[f64; 2]>,
    /// Chart heading.
    pub title: String,
    /// Legend name for the single trace.
    pub trace_name: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Percentage-change line shown under the chart.
    pub change_text: String,
}

/// Project the current state into a chart payload.
///
/// Total over every state: an empty series or an undefined percentage
/// produces an empty chart and an explanatory text, never an error.
pub fn chart_payload(state: &AppState) -> ChartPayload {
    let revealed = state.series.len().min(state.animation.cursor + 1);
    let points = state.series[..revealed]
        .iter()
        .map(|p| [p.year as f64, p.value])
        .collect();

    let change_text = match &state.change {
        Ok(change) => format!(
            "Percentage Change: {:.2}% from {} to {}",
            change.percent, change.start_year, change.end_year
        ),
        Err(SeriesError::EmptySeries) => "No data for this selection".to_string(),
        Err(SeriesError::ZeroStartValue { start_year }) => format!(
            "Percentage change undefined (value in {start_year} is zero)"
        ),
    };

    ChartPayload {
        points,
        title: format!(
            "Cancer Trend for {} ({})",
            state.selected_county, state.selected_indicator
        ),
        trace_name: format!("{} - {}", state.selected_county, state.selected_indicator),
        x_label: "Year",
        y_label: "Cancer Rate",
        change_text,
    }
}
