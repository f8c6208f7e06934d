use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

use promokit_core::{generate, GenerationRequest, Outcome, TextGenerator};

use crate::output::print_generated;

/// Runs a single panel invocation, showing a spinner while the request is in
/// flight, and prints the outcome.
///
/// Returns whether the invocation succeeded so the caller can set the exit
/// code; a failure never aborts the process by itself.
pub async fn run_panel<G: TextGenerator>(generator: &G, request: GenerationRequest) -> bool {
    let kind = request.kind();
    info!("Running {} panel", kind.label());
    debug!("Request: {:?}", request);

    // Display a spinner while waiting for the response
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Generating {}...", kind.label().to_lowercase()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = generate(generator, &request).await;
    spinner.finish_and_clear();

    match outcome {
        Outcome::Success { text } => {
            print_generated(kind, &text);
            true
        }
        Outcome::Failure { message } => {
            eprintln!("{}", message.red());
            false
        }
    }
}
