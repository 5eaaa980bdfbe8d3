use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{TrendDataset, TrendRecord};

/// Required source columns, as named in the CHIRS export.
const COL_COUNTY: &str = "County Name";
const COL_INDICATOR: &str = "Indicator Name";
const COL_YEAR: &str = "Date Year";
const COL_VALUE: &str = "Trend Data County Value";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a trend dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the CHIRS column names (recommended)
/// * `.json`    – records orientation: `[{ "County Name": ..., ... }, ...]`
/// * `.parquet` – flat columns of the same names
///
/// Rows with a blank value cell are skipped; extra columns are ignored.
/// Fails if the file is missing, malformed, lacks a required column, or
/// contains no usable rows.
pub fn load_file(path: &Path) -> Result<TrendDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    if records.is_empty() {
        bail!("{} contains no usable rows", path.display());
    }

    Ok(TrendDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Raw row shared by the CSV and JSON decoders
// ---------------------------------------------------------------------------

/// One source row, keyed by the external column names.
/// `value` is optional: CHIRS exports leave the cell blank for years with
/// suppressed or missing data.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "County Name")]
    county: String,
    #[serde(rename = "Indicator Name")]
    indicator: String,
    #[serde(rename = "Date Year")]
    year: i64,
    #[serde(rename = "Trend Data County Value")]
    value: Option<f64>,
}

impl RawRecord {
    fn into_record(self) -> Option<TrendRecord> {
        Some(TrendRecord {
            county: self.county,
            indicator: self.indicator,
            year: self.year,
            value: self.value?,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<TrendRecord>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<TrendRecord>> {
    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in [COL_COUNTY, COL_INDICATOR, COL_YEAR, COL_VALUE] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        match raw.into_record() {
            Some(rec) => records.push(rec),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} rows with blank values");
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "County Name": "Albany",
///     "Indicator Name": "Lung cancer incidence rate per 100,000",
///     "Date Year": 2014,
///     "Trend Data County Value": 61.3
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<TrendRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raws: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(raws.into_iter().filter_map(RawRecord::into_record).collect())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the same flat columns as the CSV layout.
///
/// Column types accepted:
/// - names: Utf8 or LargeUtf8
/// - `Date Year`: Int32 or Int64
/// - `Trend Data County Value`: Float32 or Float64 (nulls skip the row)
fn load_parquet(path: &Path) -> Result<Vec<TrendRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let col = |name: &str| {
            schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))
        };
        let county_col = batch.column(col(COL_COUNTY)?);
        let indicator_col = batch.column(col(COL_INDICATOR)?);
        let year_col = batch.column(col(COL_YEAR)?);
        let value_col = batch.column(col(COL_VALUE)?);

        for row in 0..batch.num_rows() {
            let value = match extract_f64(value_col, row)? {
                Some(v) => v,
                None => continue,
            };
            records.push(TrendRecord {
                county: extract_string(county_col, row)
                    .with_context(|| format!("Row {row}: '{COL_COUNTY}'"))?,
                indicator: extract_string(indicator_col, row)
                    .with_context(|| format!("Row {row}: '{COL_INDICATOR}'"))?,
                year: extract_i64(year_col, row)
                    .with_context(|| format!("Row {row}: '{COL_YEAR}'"))?,
                value,
            });
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("expected a string column, got {other:?}"),
    }
}

fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        other => bail!("expected an integer column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    match col.data_type() {
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(Some(arr.value(row) as f64))
        }
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(Some(arr.value(row)))
        }
        other => bail!("expected a float column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_from(text: &str) -> Result<Vec<TrendRecord>> {
        read_csv(csv::Reader::from_reader(text.as_bytes()))
    }

    #[test]
    fn parses_well_formed_csv() {
        let records = csv_from(
            "County Name,Indicator Name,Date Year,Trend Data County Value\n\
             Albany,Lung cancer,2010,61.3\n\
             Albany,Lung cancer,2011,59.8\n",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].county, "Albany");
        assert_eq!(records[0].indicator, "Lung cancer");
        assert_eq!(records[0].year, 2010);
        assert_eq!(records[0].value, 61.3);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let records = csv_from(
            "County Name,Region,Indicator Name,Date Year,Trend Data County Value\n\
             Erie,Western,Lung cancer,2012,48.1\n",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].county, "Erie");
    }

    #[test]
    fn missing_required_column_is_rejected() {
        let err = csv_from(
            "County Name,Indicator Name,Date Year\n\
             Erie,Lung cancer,2012\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Trend Data County Value"));
    }

    #[test]
    fn blank_value_rows_are_skipped() {
        let records = csv_from(
            "County Name,Indicator Name,Date Year,Trend Data County Value\n\
             Erie,Lung cancer,2012,48.1\n\
             Erie,Lung cancer,2013,\n\
             Erie,Lung cancer,2014,47.2\n",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.iter().map(|r| r.year).collect::<Vec<_>>(), [2012, 2014]);
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let result = csv_from(
            "County Name,Indicator Name,Date Year,Trend Data County Value\n\
             Erie,Lung cancer,2012,n/a\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn parses_records_oriented_json() {
        let dir = std::env::temp_dir().join("county_trends_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trends.json");
        std::fs::write(
            &path,
            r#"[
                {"County Name": "Albany", "Indicator Name": "Lung cancer",
                 "Date Year": 2010, "Trend Data County Value": 61.3},
                {"County Name": "Albany", "Indicator Name": "Lung cancer",
                 "Date Year": 2011, "Trend Data County Value": null}
            ]"#,
        )
        .unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.counties, vec!["Albany"]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(load_file(Path::new("trends.xlsx")).is_err());
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = std::env::temp_dir().join("county_trends_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.csv");
        std::fs::write(
            &path,
            "County Name,Indicator Name,Date Year,Trend Data County Value\n",
        )
        .unwrap();
        assert!(load_file(&path).is_err());
    }
}
