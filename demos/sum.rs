use log::{info, LevelFilter};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use simple_logger::SimpleLogger;
use statool::Gaussian;

const TRIALS: usize = 100_000;
const SEED: u64 = 0x5eed;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let a = Gaussian::new(25.0, 3.0);
    let b = Gaussian::new(30.0, 4.0);
    let sum = &a + &b;
    info!("a: {a}");
    info!("b: {b}");
    info!("a + b: {sum}");

    // モンテカルロで和の分布を確認
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(SEED);
    let dist_a = Normal::new(a.mean, a.std_dev)?;
    let dist_b = Normal::new(b.mean, b.std_dev)?;
    let draws: Vec<f64> = (0..TRIALS)
        .map(|_| dist_a.sample(&mut rng) + dist_b.sample(&mut rng))
        .collect();

    let mut empirical = Gaussian::default();
    empirical.load_and_estimate(draws, true)?;
    println!("closed form: {}", sum.describe());
    println!("simulated:   {}", empirical.describe());
    Ok(())
}
