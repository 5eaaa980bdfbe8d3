use thiserror::Error;

use super::model::TrendDataset;

// ---------------------------------------------------------------------------
// Trend series: the year-ordered values for one county + indicator
// ---------------------------------------------------------------------------

/// One point of a trend series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub year: i64,
    pub value: f64,
}

/// All records matching both county and indicator, sorted ascending by year.
///
/// The sort is stable, so records sharing a year keep their source order;
/// [`percentage_change`] relies on that for its tie-break.
pub fn filter_series(dataset: &TrendDataset, county: &str, indicator: &str) -> Vec<TrendPoint> {
    let mut series: Vec<TrendPoint> = dataset
        .records
        .iter()
        .filter(|r| r.county == county && r.indicator == indicator)
        .map(|r| TrendPoint {
            year: r.year,
            value: r.value,
        })
        .collect();
    series.sort_by_key(|p| p.year);
    series
}

// ---------------------------------------------------------------------------
// Percentage change across the full series
// ---------------------------------------------------------------------------

/// Why a percentage change could not be computed for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("no records match the selection")]
    EmptySeries,
    #[error("value in {start_year} is zero, percentage change is undefined")]
    ZeroStartValue { start_year: i64 },
}

/// Change from the earliest to the latest observed year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentChange {
    pub start_year: i64,
    pub end_year: i64,
    pub percent: f64,
}

/// Percentage change between the first and last year of `series`.
///
/// `series` must be sorted ascending by year (as [`filter_series`] returns
/// it). When several records share the minimum or maximum year, the first
/// one in sorted order is used.
pub fn percentage_change(series: &[TrendPoint]) -> Result<PercentChange, SeriesError> {
    let (start, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SeriesError::EmptySeries),
    };

    // First point carrying the maximum year, not the last element: duplicate
    // max-year records resolve to the earliest of them.
    let end = series
        .iter()
        .find(|p| p.year == last.year)
        .unwrap_or(last);

    if start.value == 0.0 {
        return Err(SeriesError::ZeroStartValue {
            start_year: start.year,
        });
    }

    Ok(PercentChange {
        start_year: start.year,
        end_year: end.year,
        percent: (end.value - start.value) / start.value * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{TrendDataset, TrendRecord};

    fn rec(county: &str, indicator: &str, year: i64, value: f64) -> TrendRecord {
        TrendRecord {
            county: county.to_string(),
            indicator: indicator.to_string(),
            year,
            value,
        }
    }

    fn pt(year: i64, value: f64) -> TrendPoint {
        TrendPoint { year, value }
    }

    #[test]
    fn filter_matches_both_fields_and_sorts_by_year() {
        let ds = TrendDataset::from_records(vec![
            rec("Erie", "Lung cancer", 2012, 30.0),
            rec("Erie", "Breast cancer", 2010, 99.0),
            rec("Monroe", "Lung cancer", 2010, 50.0),
            rec("Erie", "Lung cancer", 2010, 10.0),
            rec("Erie", "Lung cancer", 2011, 20.0),
        ]);

        let series = filter_series(&ds, "Erie", "Lung cancer");
        assert_eq!(series, vec![pt(2010, 10.0), pt(2011, 20.0), pt(2012, 30.0)]);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let ds = TrendDataset::from_records(vec![rec("Erie", "Lung cancer", 2010, 10.0)]);
        assert!(filter_series(&ds, "Erie", "Breast cancer").is_empty());
        assert!(filter_series(&ds, "Albany", "Lung cancer").is_empty());
    }

    #[test]
    fn doubling_over_two_years_is_one_hundred_percent() {
        let series = vec![pt(2010, 10.0), pt(2011, 15.0), pt(2012, 20.0)];
        let change = percentage_change(&series).unwrap();
        assert_eq!(change.start_year, 2010);
        assert_eq!(change.end_year, 2012);
        assert_eq!(change.percent, 100.0);
    }

    #[test]
    fn percentage_change_is_idempotent() {
        let series = vec![pt(2010, 4.0), pt(2015, 3.0)];
        assert_eq!(percentage_change(&series), percentage_change(&series));
    }

    #[test]
    fn empty_series_is_an_error() {
        assert_eq!(percentage_change(&[]), Err(SeriesError::EmptySeries));
    }

    #[test]
    fn zero_start_value_is_an_error() {
        let series = vec![pt(2010, 0.0), pt(2011, 5.0)];
        assert_eq!(
            percentage_change(&series),
            Err(SeriesError::ZeroStartValue { start_year: 2010 })
        );
    }

    #[test]
    fn single_point_series_has_zero_change() {
        let change = percentage_change(&[pt(2014, 7.5)]).unwrap();
        assert_eq!((change.start_year, change.end_year), (2014, 2014));
        assert_eq!(change.percent, 0.0);
    }

    #[test]
    fn duplicate_end_year_uses_first_in_sorted_order() {
        // Stable sort keeps 40.0 ahead of 60.0 for the shared max year.
        let series = vec![pt(2010, 20.0), pt(2012, 40.0), pt(2012, 60.0)];
        let change = percentage_change(&series).unwrap();
        assert_eq!(change.end_year, 2012);
        assert_eq!(change.percent, 100.0);
    }

    #[test]
    fn negative_trend_gives_negative_percent() {
        let series = vec![pt(2010, 50.0), pt(2012, 40.0)];
        let change = percentage_change(&series).unwrap();
        assert_eq!(change.percent, -20.0);
    }
}
