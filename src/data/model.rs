// ---------------------------------------------------------------------------
// TrendRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation: one county, one indicator, one year.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRecord {
    pub county: String,
    pub indicator: String,
    pub year: i64,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// TrendDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct value lists.
///
/// `counties` and `indicators` keep first-seen source order, which is also
/// the order the dropdowns present them in and where the default selection
/// (first entry of each) comes from.
#[derive(Debug, Clone)]
pub struct TrendDataset {
    /// All observations (rows).
    pub records: Vec<TrendRecord>,
    /// Distinct county names, first-seen order.
    pub counties: Vec<String>,
    /// Distinct indicator names, first-seen order.
    pub indicators: Vec<String>,
}

impl TrendDataset {
    /// Build the distinct value lists from the loaded records.
    pub fn from_records(records: Vec<TrendRecord>) -> Self {
        let mut counties: Vec<String> = Vec::new();
        let mut indicators: Vec<String> = Vec::new();

        for rec in &records {
            if !counties.contains(&rec.county) {
                counties.push(rec.county.clone());
            }
            if !indicators.contains(&rec.indicator) {
                indicators.push(rec.indicator.clone());
            }
        }

        TrendDataset {
            records,
            counties,
            indicators,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(county: &str, indicator: &str, year: i64, value: f64) -> TrendRecord {
        TrendRecord {
            county: county.to_string(),
            indicator: indicator.to_string(),
            year,
            value,
        }
    }

    #[test]
    fn distinct_lists_keep_first_seen_order() {
        let ds = TrendDataset::from_records(vec![
            rec("Suffolk", "Lung cancer", 2010, 1.0),
            rec("Albany", "Lung cancer", 2010, 2.0),
            rec("Suffolk", "Breast cancer", 2011, 3.0),
            rec("Albany", "Breast cancer", 2011, 4.0),
        ]);

        assert_eq!(ds.counties, vec!["Suffolk", "Albany"]);
        assert_eq!(ds.indicators, vec!["Lung cancer", "Breast cancer"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_dataset() {
        let ds = TrendDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.counties.is_empty());
        assert!(ds.indicators.is_empty());
    }
}
