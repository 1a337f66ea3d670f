//! Draw frequency comparison across the three strategies.
//!
//! Fills each sampler with the same words, draws from it in a loop, tallies
//! how often each word came out and reports wall-clock time plus a
//! chi-squared distance from uniform.
//!
//! ```text
//! cargo run --example draw_frequency -- [draws] [strategy...]
//! RUST_LOG=redraw=debug cargo run --example draw_frequency -- 20
//! ```

use std::time::Instant;

use redraw::{SamplerConfig, SamplerKind, Tally};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WORDS: [&str; 8] = [
    "apple", "banana", "cherry", "damson", "elder", "fig", "grape", "huckleberry",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let draws: usize = match args.next() {
        Some(n) => n.parse::<usize>()?,
        None => 1_000_000,
    };
    let kinds: Vec<SamplerKind> = {
        let parsed = args.map(|a| a.parse::<SamplerKind>()).collect::<Result<Vec<_>, _>>()?;
        if parsed.is_empty() {
            SamplerKind::ALL.to_vec()
        } else {
            parsed
        }
    };

    for kind in kinds {
        let mut sampler = SamplerConfig::new(kind).build_with_items(WORDS);

        let start = Instant::now();
        let mut tally = Tally::new();
        for _ in 0..draws {
            tally.record(*sampler.draw()?);
        }
        let elapsed = start.elapsed();

        info!(
            strategy = %kind,
            draws,
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            chi2 = tally.chi_squared(WORDS.len()),
            max_rel_dev = tally.max_relative_deviation(WORDS.len()),
            "sampled"
        );
        for word in WORDS {
            println!("  {kind:<12} {word:<12} {:>9}", tally.count(&word));
        }
    }

    Ok(())
}
