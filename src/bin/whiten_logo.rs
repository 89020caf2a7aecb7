//! Recolor the padded logo to pure white, keeping its alpha channel.
//!
//! Reads the fixed input asset, forces every visible pixel to white, and
//! writes the result next to it. Run this before `pad_logo`.

use std::path::Path;
use std::process::ExitCode;

use logo_prep::pipeline;

// Input and output paths. The output lands next to the input.
const INPUT_PATH: &str = "assets/images/logov1_padded.png";
const OUTPUT_NAME: &str = "logov1_padded_white.png";

fn main() -> ExitCode {
    env_logger::init();

    let input = Path::new(INPUT_PATH);
    println!("Loading: {}", input.display());

    match pipeline::whiten_logo(input, OUTPUT_NAME) {
        Ok(output) => {
            println!("Saved white logo to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
