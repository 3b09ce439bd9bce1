use edge_detector::config::edge::load_config;
use edge_detector::diagnostics::EdgeReport;
use edge_detector::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use edge_detector::{EdgeDetector, EdgeDetectorParams};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let frame = gray.as_view();

    let mut reports: Vec<EdgeReport> = Vec::with_capacity(config.operators.len());
    for &operator in &config.operators {
        let detector = EdgeDetector::new(EdgeDetectorParams {
            operator,
            canny: config.canny,
        });
        let Some(report) = detector
            .process_with_diagnostics(&frame)
            .map_err(|e| format!("{operator} failed: {e}"))?
        else {
            return Err(format!("{} is empty", config.input.display()));
        };

        let out_path = config.output.dir.join(format!("{operator}.png"));
        save_grayscale_u8(&report.image, &out_path)?;
        println!(
            "{operator}: {} edge pixels, {:.3} ms -> {}",
            report.edge_pixels,
            report.timing.total_ms,
            out_path.display()
        );
        reports.push(report);
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &reports)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge_demo <config.json>".to_string()
}
