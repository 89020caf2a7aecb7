//! Build the adaptive launcher icon from the white logo.
//!
//! Resizes the fixed input asset to 60% of a 1024x1024 canvas and centers
//! it there, leaving a transparent safe margin for platform shape masks.
//! Run this after `whiten_logo`.

use std::path::Path;
use std::process::ExitCode;

use logo_prep::pipeline;

// Input and output paths. The output lands next to the input.
const INPUT_PATH: &str = "assets/images/logov1_padded_white.png";
const OUTPUT_NAME: &str = "logov1_adaptive_white.png";

fn main() -> ExitCode {
    env_logger::init();

    let input = Path::new(INPUT_PATH);

    match pipeline::pad_adaptive_icon(input, OUTPUT_NAME) {
        Ok(report) => {
            println!(
                "Created adaptive icon with proper padding: {}",
                report.output.display()
            );
            println!(
                "Logo size: {}x{} centered in {}x{} canvas",
                report.logo_size, report.logo_size, report.canvas_size, report.canvas_size
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
