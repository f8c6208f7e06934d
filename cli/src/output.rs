use colored::*;
use pulldown_cmark::{Event as MdEvent, Options, Parser as MdParser, Tag};
use promokit_core::GenerationKind;

/// Print a generated result under its panel title
pub fn print_generated(kind: GenerationKind, text: &str) {
    println!("{}", kind.label().blue().bold());
    println!("{}", render_markdown(text));
}

/// Show usage instructions when no panel or action is provided
pub fn print_usage_instructions() {
    println!("{}", "Usage:".yellow().bold());
    println!(
        "  {}",
        "promokit copy --name <NAME> --description <TEXT>".green().bold()
    );
    println!("    Generate marketing copy for a product or service");
    println!();
    println!(
        "  {}",
        "promokit keywords --business-type <TYPE> [--target-audience <WHO>]"
            .green()
            .bold()
    );
    println!("    Generate SEO keywords for a business");
    println!();
    println!("  {}", "promokit analyze <URL>".green().bold());
    println!("    Analyze a website for SEO, content quality, and user experience");
    println!();
    println!(
        "  {}",
        "promokit ideas --topic <TOPIC> [--format <FORMAT>]".green().bold()
    );
    println!("    Generate content ideas for a topic");
    println!();
    println!("  {}", "promokit -i".green().bold());
    println!("    Open the panels interactively");
    println!();
    println!("{}", "Options:".cyan());
    println!("  --api-key <KEY>   Gemini API key (or set GEMINI_API_KEY)");
    println!("  --model <MODEL>   Model identifier requests are sent to");
    println!("  --verbose         Enable verbose output");
    println!();
}

/// Render markdown in the terminal.
///
/// Generated copy comes back as headed, bulleted markdown; this keeps the
/// structure readable without leaving raw markers on screen.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = MdParser::new_ext(markdown, options);

    let mut output = String::new();
    let mut in_heading = false;
    let mut in_code_block = false;
    let mut strong = false;
    let mut emphasis = false;
    // Next ordinal for an ordered list; None while in a bulleted list
    let mut list_index: Option<u64> = None;

    for event in parser {
        match event {
            MdEvent::Start(Tag::Heading(..)) => {
                in_heading = true;
                output.push('\n');
            }
            MdEvent::End(Tag::Heading(..)) => {
                in_heading = false;
                output.push('\n');
            }
            MdEvent::Start(Tag::List(start)) => {
                list_index = start;
            }
            MdEvent::End(Tag::List(_)) => {
                list_index = None;
                output.push('\n');
            }
            MdEvent::Start(Tag::Item) => match list_index.as_mut() {
                Some(index) => {
                    output.push_str(&format!("  {}. ", index));
                    *index += 1;
                }
                None => output.push_str("  • "),
            },
            MdEvent::End(Tag::Item) => output.push('\n'),
            MdEvent::Start(Tag::Strong) => strong = true,
            MdEvent::End(Tag::Strong) => strong = false,
            MdEvent::Start(Tag::Emphasis) => emphasis = true,
            MdEvent::End(Tag::Emphasis) => emphasis = false,
            MdEvent::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                output.push('\n');
            }
            MdEvent::End(Tag::CodeBlock(_)) => {
                in_code_block = false;
                output.push('\n');
            }
            MdEvent::Start(Tag::Paragraph) => {}
            MdEvent::End(Tag::Paragraph) => output.push_str("\n\n"),
            MdEvent::Text(text) => {
                let text: &str = &text;
                let rendered = if in_heading {
                    text.cyan().bold().to_string()
                } else if in_code_block {
                    text.yellow().to_string()
                } else if strong {
                    text.bold().to_string()
                } else if emphasis {
                    text.italic().to_string()
                } else {
                    text.to_string()
                };
                output.push_str(&rendered);
            }
            MdEvent::Code(code) => {
                let code: &str = &code;
                output.push_str(&code.yellow().to_string());
            }
            MdEvent::SoftBreak | MdEvent::HardBreak => output.push('\n'),
            MdEvent::Rule => output.push_str("\n――――――――――\n"),
            _ => {}
        }
    }

    output.trim_end().to_string()
}
