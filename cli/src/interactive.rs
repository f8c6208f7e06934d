use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use promokit_core::{
    GenerationKind, GenerationRequest, Outcome, Panel, TextGenerator, DEFAULT_CONTENT_FORMAT,
};

use crate::output::print_generated;

/// Runs the interactive panel menu until the user exits.
///
/// Each generation kind keeps its own panel, so a panel's last result stays
/// around while other panels are used.
pub async fn run<G: TextGenerator>(generator: Arc<G>) -> Result<()> {
    println!(
        "{}",
        "Interactive mode. Pick a panel, fill in the form, get your text.".bold()
    );
    println!("Choose Exit to leave.");
    println!();

    let panels: Vec<Panel<G>> = GenerationKind::all()
        .iter()
        .map(|kind| Panel::new(*kind, generator.clone()))
        .collect();

    loop {
        let mut items: Vec<String> = panels
            .iter()
            .map(|panel| {
                // Mark panels that already hold a result
                let marker = match panel.last_outcome() {
                    Some(outcome) if outcome.is_success() => " ✔",
                    Some(_) => " ✘",
                    None => "",
                };
                format!("{}{}", panel.kind().label(), marker)
            })
            .collect();
        items.push("Exit".to_string());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose a panel")
            .items(&items)
            .default(0)
            .interact()
            .context("Failed to read panel selection")?;

        if selection == panels.len() {
            println!("Exiting.");
            break;
        }

        let panel = &panels[selection];
        let request = collect_request(panel.kind())?;

        // Display a spinner while waiting for the response
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!(
            "Generating {}...",
            panel.kind().label().to_lowercase()
        ));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let outcome = panel.trigger(request).await;
        spinner.finish_and_clear();

        match outcome {
            Some(Outcome::Success { text }) => print_generated(panel.kind(), &text),
            Some(Outcome::Failure { message }) => eprintln!("{}", message.red()),
            None => eprintln!(
                "{}",
                "This panel is still working on the previous request.".yellow()
            ),
        }
        println!();
    }

    Ok(())
}

/// Collects the form fields for one panel.
///
/// Fields may be left empty here; the generation cycle rejects blank required
/// fields with the panel's own instructional message, like the original forms.
fn collect_request(kind: GenerationKind) -> Result<GenerationRequest> {
    let theme = ColorfulTheme::default();

    let request = match kind {
        GenerationKind::MarketingCopy => {
            let product_name: String = Input::with_theme(&theme)
                .with_prompt("Product/service name")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read product name")?;
            let description: String = Input::with_theme(&theme)
                .with_prompt("Description")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read description")?;
            GenerationRequest::MarketingCopy {
                product_name,
                description,
            }
        }
        GenerationKind::SeoKeywords => {
            let business_type: String = Input::with_theme(&theme)
                .with_prompt("Business type")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read business type")?;
            let target_audience: String = Input::with_theme(&theme)
                .with_prompt("Target audience (optional)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read target audience")?;
            GenerationRequest::SeoKeywords {
                business_type,
                target_audience: Some(target_audience),
            }
        }
        GenerationKind::SiteAnalysis => {
            let website_url: String = Input::with_theme(&theme)
                .with_prompt("Website URL")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read website URL")?;
            GenerationRequest::SiteAnalysis { website_url }
        }
        GenerationKind::ContentIdeas => {
            let topic: String = Input::with_theme(&theme)
                .with_prompt("Content topic")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read content topic")?;
            let format: String = Input::with_theme(&theme)
                .with_prompt("Content format")
                .default(DEFAULT_CONTENT_FORMAT.to_string())
                .interact_text()
                .context("Failed to read content format")?;
            GenerationRequest::ContentIdeas {
                topic,
                format: Some(format),
            }
        }
    };

    Ok(request)
}
