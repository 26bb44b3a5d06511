use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use statool::plot::{self, DEFAULT_BINS, DEFAULT_SAMPLES};
use statool::{Gaussian, LoadOptions};

const DEFAULT_DATA: &str = "data/numbers.txt";

fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let file_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_DATA.to_string());

    let mut gaussian = Gaussian::default();
    gaussian.read_data_file(&file_path, LoadOptions::default())?;
    info!("{}: {}", file_path, gaussian);

    let (xs, ys) = gaussian.pdf_samples(DEFAULT_SAMPLES)?;
    let hist = plot::histogram(&gaussian.observations, DEFAULT_BINS)?;

    // 実行ごとにログディレクトリを分ける
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let dir = format!("logs/statistics/{stamp}");
    plot::save_pdf_csv(format!("{dir}/pdf.csv"), &xs, &ys)?;
    plot::save_histogram_csv(format!("{dir}/histogram.csv"), &hist)?;
    info!("plot data written to {dir}");

    for x in [gaussian.mean - gaussian.std_dev, gaussian.mean, gaussian.mean + gaussian.std_dev] {
        println!("pdf({:8.3}) = {:.6}", x, gaussian.pdf(x)?);
    }
    Ok(())
}
