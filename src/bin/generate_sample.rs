use anyhow::{Context, Result};

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

const FIRST_YEAR: i32 = 2000;
const LAST_YEAR: i32 = 2023;

const SECTORS: [(&str, f64); 6] = [
    // (sector id, starting salary)
    ("mining", 5940.0),
    ("manufacturing", 2365.0),
    ("construction", 2640.0),
    ("education", 1240.0),
    ("healthcare", 1333.0),
    ("finance", 5232.0),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_years = (LAST_YEAR - FIRST_YEAR + 1) as usize;

    // Inflation: starts high, decays towards a mid-single-digit floor,
    // with a little noise per year.
    let inflation: Vec<f64> = (0..n_years)
        .map(|i| {
            let trend = 4.0 + 16.0 * (-0.18 * i as f64).exp();
            (trend + rng.gauss(0.0, 1.2)).max(0.5)
        })
        .collect();

    // Each sector's salary drifts up by roughly last year's inflation plus
    // a sector-specific real-growth premium.
    let mut rows: Vec<(String, Vec<f64>)> = Vec::new();
    for (sector, start_salary) in SECTORS {
        let premium = rng.gauss(2.0, 1.0);
        let mut salary = start_salary;
        let mut row = Vec::with_capacity(n_years);
        for i in 0..n_years {
            row.push((salary * 100.0).round() / 100.0);
            let prior_inflation = if i == 0 { inflation[0] } else { inflation[i - 1] };
            let growth_pct = prior_inflation + premium + rng.gauss(0.0, 1.5);
            salary *= 1.0 + growth_pct / 100.0;
        }
        rows.push((sector.to_string(), row));
    }

    // Cross-sector average row, first like in the source data.
    let average: Vec<f64> = (0..n_years)
        .map(|i| {
            let sum: f64 = rows.iter().map(|(_, row)| row[i]).sum();
            (sum / rows.len() as f64 * 100.0).round() / 100.0
        })
        .collect();
    rows.insert(0, ("average".to_string(), average));

    write_salaries("salaries.csv", &rows)?;
    write_inflation("inflation.csv", &inflation)?;

    println!(
        "Wrote {} sectors × {n_years} years to salaries.csv and inflation.csv",
        rows.len()
    );
    Ok(())
}

fn write_salaries(path: &str, rows: &[(String, Vec<f64>)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating salary CSV")?;

    let mut header = vec!["sector".to_string()];
    header.extend((FIRST_YEAR..=LAST_YEAR).map(|y| y.to_string()));
    writer.write_record(&header).context("writing salary header")?;

    for (sector, values) in rows {
        let mut record = vec![sector.clone()];
        record.extend(values.iter().map(|v| v.to_string()));
        writer
            .write_record(&record)
            .with_context(|| format!("writing salary row '{sector}'"))?;
    }
    writer.flush().context("flushing salary CSV")?;
    Ok(())
}

fn write_inflation(path: &str, rates: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating inflation CSV")?;
    writer
        .write_record(["year", "inflation"])
        .context("writing inflation header")?;
    for (i, rate) in rates.iter().enumerate() {
        let year = FIRST_YEAR + i as i32;
        let rounded = (rate * 100.0).round() / 100.0;
        writer
            .write_record([year.to_string(), rounded.to_string()])
            .with_context(|| format!("writing inflation row {year}"))?;
    }
    writer.flush().context("flushing inflation CSV")?;
    Ok(())
}
