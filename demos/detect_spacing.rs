//! Period-spacing search CLI.
//!
//! Reads event epochs and scores a grid of candidate spacings with one or
//! all of the available scorers.
//!
//! Usage:
//!   # Read from stdin (one epoch per line)
//!   echo "0.0\n10.2\n19.9..." | cargo run --example detect_spacing -- --method ks
//!
//!   # Synthetic jittered events
//!   cargo run --example detect_spacing -- --test --spacing 10 --count 100 --jitter 0.5
//!
//!   # All scorers, JSON output
//!   cargo run --example detect_spacing -- --test --all-methods

use period_spacing::detection::{
    FourierPowerScorer, InverseVarianceScorer, KolmogorovSmirnovScorer, PeriodScorer,
    PeriodScores, PeriodSearch, ScoreDirection,
};
use std::env;
use std::io::{self, BufRead};

fn main() {
    let args: Vec<String> = env::args().collect();

    let method = get_arg(&args, "--method").unwrap_or_else(|| "ks".to_string());
    let min_period = get_arg(&args, "--min-period")
        .and_then(|s| s.parse().ok())
        .unwrap_or(5.0);
    let max_period = get_arg(&args, "--max-period")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20.0);
    let oversample = get_arg(&args, "--oversample")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10.0);
    let uncentered = args.contains(&"--uncentered".to_string());
    let all_methods = args.contains(&"--all-methods".to_string());
    let test_mode = args.contains(&"--test".to_string());

    let data = if test_mode {
        let spacing = get_arg(&args, "--spacing")
            .and_then(|s| s.parse().ok())
            .unwrap_or(10.0);
        let count = get_arg(&args, "--count")
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);
        let jitter = get_arg(&args, "--jitter")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);

        generate_events(count, spacing, jitter)
    } else {
        read_stdin()
    };

    if data.is_empty() {
        eprintln!("Error: No data provided");
        std::process::exit(1);
    }

    let search = PeriodSearch::new(min_period, max_period).with_oversample_factor(oversample);
    let centered = !uncentered;

    if all_methods {
        run_all_methods(&data, &search, centered);
    } else {
        let scorer: Box<dyn PeriodScorer> = match method.to_lowercase().as_str() {
            "iv" | "inverse_variance" => Box::new(InverseVarianceScorer::new(centered)),
            "ks" | "kolmogorov_smirnov" => Box::new(KolmogorovSmirnovScorer::new(centered)),
            "ft" | "fourier" => Box::new(FourierPowerScorer),
            _ => {
                eprintln!("Unknown method: {}. Available: iv, ks, ft", method);
                std::process::exit(1);
            }
        };
        run_single_method(&data, &search, scorer.as_ref());
    }
}

fn get_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1).cloned())
}

fn read_stdin() -> Vec<f64> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| line.trim().parse().ok())
        .collect()
}

fn generate_events(count: usize, spacing: f64, jitter: f64) -> Vec<f64> {
    (0..count)
        .map(|i| {
            // Deterministic jitter for reproducibility
            let pseudo_random = ((i * 7 + 3) % 13) as f64 / 13.0 - 0.5;
            spacing * i as f64 + pseudo_random * jitter
        })
        .collect()
}

/// Strongest `k` candidates, best first.
fn top_candidates(result: &PeriodScores, k: usize) -> Vec<(f64, f64)> {
    let mut ranked: Vec<(f64, f64)> = result.iter().collect();
    ranked.sort_by(|a, b| match result.direction {
        ScoreDirection::HigherIsStronger => b.1.total_cmp(&a.1),
        ScoreDirection::LowerIsStronger => a.1.total_cmp(&b.1),
    });
    ranked.truncate(k);
    ranked
}

fn run_single_method(data: &[f64], search: &PeriodSearch, scorer: &dyn PeriodScorer) {
    let result = match search.run(data, scorer) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Method: {}", result.method);
    println!("Data length: {}", data.len());
    println!("Candidates: {}", result.len());
    println!("Strongest spacings:");
    for (period, score) in top_candidates(&result, 5) {
        println!("  - Period: {:.4}, Score: {:.4}", period, score);
    }
}

fn run_all_methods(data: &[f64], search: &PeriodSearch, centered: bool) {
    let scorers: Vec<Box<dyn PeriodScorer>> = vec![
        Box::new(InverseVarianceScorer::new(centered)),
        Box::new(KolmogorovSmirnovScorer::new(centered)),
        Box::new(FourierPowerScorer),
    ];

    println!("{{");
    println!("  \"data_length\": {},", data.len());
    println!("  \"min_period\": {},", search.min_period);
    println!("  \"max_period\": {},", search.max_period);
    println!("  \"results\": {{");

    for (i, scorer) in scorers.iter().enumerate() {
        let comma = if i < scorers.len() - 1 { "," } else { "" };
        match search.run(data, scorer.as_ref()) {
            Ok(result) => {
                let periods_json: Vec<String> = top_candidates(&result, 5)
                    .iter()
                    .map(|(p, s)| format!("{{\"period\": {:.6}, \"score\": {:.6}}}", p, s))
                    .collect();
                println!(
                    "    \"{}\": {{\"candidates\": {}, \"periods\": [{}]}}{}",
                    result.method,
                    result.len(),
                    periods_json.join(", "),
                    comma
                );
            }
            Err(e) => {
                println!("    \"{}\": {{\"error\": \"{}\"}}{}", scorer.name(), e, comma);
            }
        }
    }

    println!("  }}");
    println!("}}");
}
