use rendermath::math::constants::{ Float, PI };
use rendermath::math::fast_trig::{ self, Tier };

use indicatif::{ ProgressBar, ProgressStyle };
use std::env;

struct Case {
    name: &'static str,
    approx: fn(Float, Tier) -> Float,
    reference: fn(f64) -> f64,
    lo: Float,
    hi: Float,
}

const CASES: [Case; 6] = [
    Case { name: "sin", approx: fast_trig::fast_sin, reference: f64::sin, lo: -PI / 2.0, hi: PI / 2.0 },
    Case { name: "cos", approx: fast_trig::fast_cos, reference: f64::cos, lo: -PI / 2.0, hi: PI / 2.0 },
    Case { name: "tan", approx: fast_trig::fast_tan, reference: f64::tan, lo: -PI / 4.0, hi: PI / 4.0 },
    Case { name: "asin", approx: fast_trig::fast_asin, reference: f64::asin, lo: 0.0, hi: 1.0 },
    Case { name: "acos", approx: fast_trig::fast_acos, reference: f64::acos, lo: 0.0, hi: 1.0 },
    Case { name: "atan", approx: fast_trig::fast_atan, reference: f64::atan, lo: -1.0, hi: 1.0 },
];

fn max_error(case: &Case, tier: Tier, samples: usize) -> (f64, Float) {
    let mut worst = (0.0f64, case.lo);
    for i in 0..=samples {
        let x = case.lo + (case.hi - case.lo) * (i as Float) / (samples as Float);
        let err = ((case.approx)(x, tier) as f64 - (case.reference)(x as f64)).abs();
        if err > worst.0 {
            worst = (err, x);
        }
    }
    worst
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut samples: usize = 1_000_000;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--samples" => {
                i += 1;
                samples = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(samples).max(1);
            }
            _ => {
                eprintln!("Usage: {} [--samples N]", args[0]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    log::info!("Sweeping {} fast trig functions with {} samples each.", CASES.len(), samples);

    let tiers = [Tier::Fast, Tier::Precise];
    let progress = ProgressBar::new((CASES.len() * tiers.len()) as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut rows = Vec::with_capacity(CASES.len() * tiers.len());
    for case in CASES.iter() {
        for &tier in tiers.iter() {
            progress.set_message(case.name);
            let (err, at) = max_error(case, tier, samples);
            rows.push((case.name, tier, case.lo, case.hi, err, at));
            progress.inc(1);
        }
    }
    progress.finish_and_clear();

    println!("{:<6} {:<8} {:>22} {:>14} {:>12}", "func", "tier", "domain", "max error", "at");
    for (name, tier, lo, hi, err, at) in rows {
        let tier = match tier {
            Tier::Fast => "0",
            Tier::Precise => "1",
        };
        println!("{:<6} {:<8} [{:>9.6}, {:>9.6}] {:>14.3e} {:>12.6}", name, tier, lo, hi, err, at);
    }
}
