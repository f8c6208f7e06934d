use clap::{Parser, Subcommand};
use promokit_core::GenerationRequest;

/// AI generation panels for small-business marketing content
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enter interactive panel mode
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Gemini API key (overrides GEMINI_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model identifier requests are sent to
    #[arg(long)]
    pub model: Option<String>,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// One subcommand per generation panel
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate marketing copy for a product or service
    Copy {
        /// Product or service name
        #[arg(long)]
        name: String,

        /// Short description of what it does
        #[arg(long)]
        description: String,
    },

    /// Generate SEO keywords for a business
    Keywords {
        /// Type of business (e.g., "family bakery")
        #[arg(long)]
        business_type: String,

        /// Audience the keywords should target
        #[arg(long)]
        target_audience: Option<String>,
    },

    /// Analyze a website for SEO, content quality, and user experience
    Analyze {
        /// Website URL, e.g. https://example.com
        url: String,
    },

    /// Generate content ideas for a topic
    Ideas {
        /// Topic to generate ideas about
        #[arg(long)]
        topic: String,

        /// Content format (defaults to blog post ideas)
        #[arg(long)]
        format: Option<String>,
    },
}

impl Command {
    /// Map the parsed subcommand onto its panel request
    pub fn into_request(self) -> GenerationRequest {
        match self {
            Command::Copy { name, description } => GenerationRequest::MarketingCopy {
                product_name: name,
                description,
            },
            Command::Keywords {
                business_type,
                target_audience,
            } => GenerationRequest::SeoKeywords {
                business_type,
                target_audience,
            },
            Command::Analyze { url } => GenerationRequest::SiteAnalysis { website_url: url },
            Command::Ideas { topic, format } => GenerationRequest::ContentIdeas { topic, format },
        }
    }
}
