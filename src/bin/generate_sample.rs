//! Writes `sample_data.csv`: 24 columns, column 12 is a noisy height trace,
//! with a few deliberately malformed rows.

use anyhow::{Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

const FIELDS: usize = 24;
const ROWS: usize = 400;
const HEIGHT_COLUMN: usize = 11;

/// Normal sample via the Box-Muller transform.
fn normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u: f64 = rng.gen_range(f64::EPSILON..1.0);
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    mean + std_dev * (-2.0 * u.ln()).sqrt() * angle.cos()
}

fn header() -> Vec<String> {
    (0..FIELDS)
        .map(|i| match i {
            0 => "time_s".to_string(),
            HEIGHT_COLUMN => "height_m".to_string(),
            _ => format!("sensor_{i:02}"),
        })
        .collect()
}

fn row(t: f64, rng: &mut StdRng) -> Vec<String> {
    // Balloon-like climb with a slow oscillation.
    let height = 2.5 * t + 15.0 * (t / 20.0).sin() + normal(rng, 0.0, 1.5);
    (0..FIELDS)
        .map(|i| match i {
            0 => format!("{t:.1}"),
            HEIGHT_COLUMN => format!("{height:.3}"),
            _ => format!("{:.4}", normal(rng, i as f64, 0.25)),
        })
        .collect()
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data.csv".to_string());
    let mut rng = StdRng::seed_from_u64(42);

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(header())?;

    let mut malformed = 0;
    for i in 0..ROWS {
        let mut fields = row(i as f64 * 0.5, &mut rng);
        if i % 37 == 36 {
            fields.pop();
            malformed += 1;
        } else if i % 53 == 52 {
            fields[HEIGHT_COLUMN] = "n/a".to_string();
            malformed += 1;
        }
        writer.write_record(&fields)?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {ROWS} rows ({malformed} malformed) to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_match_the_fixed_schema() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(header()[HEIGHT_COLUMN], "height_m");
        let fields = row(10.0, &mut rng);
        assert_eq!(fields.len(), FIELDS);
        assert!(fields[HEIGHT_COLUMN].parse::<f64>().is_ok());
    }

    #[test]
    fn seeded_noise_is_repeatable() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let x = normal(&mut a, 1.0, 0.5);
            assert!(x.is_finite());
            assert_eq!(x, normal(&mut b, 1.0, 0.5));
        }
    }
}
