//! Generates a synthetic CHIRS-style cancer trend dataset so the viewer can
//! be tried without the real export. Writes the same table as both CSV and
//! Parquet under `sample_data/`.

use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct Row {
    county: String,
    indicator: String,
    year: i64,
    value: Option<f64>,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let counties = ["Albany", "Broome", "Erie", "Monroe", "Nassau", "Suffolk"];

    // (name, statewide base rate per 100,000, yearly drift)
    let indicators: [(&str, f64, f64); 3] = [
        ("Lung and bronchus cancer incidence rate per 100,000", 62.0, -0.9),
        ("Colorectal cancer incidence rate per 100,000", 41.0, -0.6),
        ("Female breast cancer incidence rate per 100,000 women", 132.0, 0.4),
    ];

    let years: Vec<i64> = (2010..=2021).collect();

    let mut rows: Vec<Row> = Vec::new();
    for county in &counties {
        for &(indicator, base, drift) in &indicators {
            // County-level offset from the statewide base.
            let county_base = base + rng.gauss(0.0, base * 0.08);

            for (i, &year) in years.iter().enumerate() {
                // ~3% of cells are blank, like suppressed values in the
                // real export.
                let value = if rng.next_f64() < 0.03 {
                    None
                } else {
                    let v = county_base + drift * i as f64 + rng.gauss(0.0, 1.2);
                    Some((v.max(0.0) * 10.0).round() / 10.0)
                };
                rows.push(Row {
                    county: county.to_string(),
                    indicator: indicator.to_string(),
                    year,
                    value,
                });
            }
        }
    }

    std::fs::create_dir_all("sample_data").expect("Failed to create sample_data/");
    write_csv(&rows, "sample_data/cancer_trends.csv");
    write_parquet(&rows, "sample_data/cancer_trends.parquet");

    println!(
        "Wrote {} rows ({} counties × {} indicators × {} years) to sample_data/",
        rows.len(),
        counties.len(),
        indicators.len(),
        years.len()
    );
}

fn write_csv(rows: &[Row], output_path: &str) {
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create CSV file");
    writer
        .write_record([
            "County Name",
            "Indicator Name",
            "Date Year",
            "Trend Data County Value",
        ])
        .expect("Failed to write CSV header");

    for row in rows {
        let value = row.value.map(|v| v.to_string()).unwrap_or_default();
        writer
            .write_record([
                row.county.as_str(),
                row.indicator.as_str(),
                &row.year.to_string(),
                &value,
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(rows: &[Row], output_path: &str) {
    let county_array = StringArray::from(
        rows.iter().map(|r| r.county.as_str()).collect::<Vec<_>>(),
    );
    let indicator_array = StringArray::from(
        rows.iter().map(|r| r.indicator.as_str()).collect::<Vec<_>>(),
    );
    let year_array = Int64Array::from(rows.iter().map(|r| r.year).collect::<Vec<_>>());
    let value_array = Float64Array::from(rows.iter().map(|r| r.value).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("County Name", DataType::Utf8, false),
        Field::new("Indicator Name", DataType::Utf8, false),
        Field::new("Date Year", DataType::Int64, false),
        Field::new("Trend Data County Value", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(county_array),
            Arc::new(indicator_array),
            Arc::new(year_array),
            Arc::new(value_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}
