use url::Url;

use crate::errors::{GenerateError, GenerateResult};

/// Format used for content ideas when the form leaves the selector untouched
pub const DEFAULT_CONTENT_FORMAT: &str = "blog post ideas";

/// The four generation panels offered by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    MarketingCopy,
    SeoKeywords,
    SiteAnalysis,
    ContentIdeas,
}

impl GenerationKind {
    pub fn all() -> &'static [GenerationKind] {
        &[
            GenerationKind::MarketingCopy,
            GenerationKind::SeoKeywords,
            GenerationKind::SiteAnalysis,
            GenerationKind::ContentIdeas,
        ]
    }

    /// Human-readable panel title
    pub fn label(&self) -> &'static str {
        match self {
            GenerationKind::MarketingCopy => "Marketing Copy",
            GenerationKind::SeoKeywords => "SEO Keywords",
            GenerationKind::SiteAnalysis => "Website Analysis",
            GenerationKind::ContentIdeas => "Content Ideas",
        }
    }

    /// Message shown when the provider call completes without usable text
    pub fn failure_message(&self) -> &'static str {
        match self {
            GenerationKind::MarketingCopy => "Failed to generate copy. Please try again.",
            GenerationKind::SeoKeywords => "Failed to generate keywords. Please try again.",
            GenerationKind::SiteAnalysis => "Failed to analyze website. Please try again.",
            GenerationKind::ContentIdeas => "Failed to generate content ideas. Please try again.",
        }
    }
}

/// A single generation request: the typed fields of one panel's form.
///
/// Required fields must be non-blank after trimming before the request may be
/// dispatched; optional fields are dropped from the prompt when blank.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    MarketingCopy {
        product_name: String,
        description: String,
    },
    SeoKeywords {
        business_type: String,
        target_audience: Option<String>,
    },
    SiteAnalysis {
        website_url: String,
    },
    ContentIdeas {
        topic: String,
        format: Option<String>,
    },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !is_blank(v))
}

impl GenerationRequest {
    pub fn kind(&self) -> GenerationKind {
        match self {
            GenerationRequest::MarketingCopy { .. } => GenerationKind::MarketingCopy,
            GenerationRequest::SeoKeywords { .. } => GenerationKind::SeoKeywords,
            GenerationRequest::SiteAnalysis { .. } => GenerationKind::SiteAnalysis,
            GenerationRequest::ContentIdeas { .. } => GenerationKind::ContentIdeas,
        }
    }

    /// Checks that every required field is usable before any network traffic.
    ///
    /// Violations carry the instructional message for the triggering form.
    pub fn validate(&self) -> GenerateResult<()> {
        match self {
            GenerationRequest::MarketingCopy {
                product_name,
                description,
            } => {
                if is_blank(product_name) || is_blank(description) {
                    return Err(GenerateError::InvalidInput(
                        "Please provide both a product/service name and a description."
                            .to_string(),
                    ));
                }
            }
            GenerationRequest::SeoKeywords { business_type, .. } => {
                if is_blank(business_type) {
                    return Err(GenerateError::InvalidInput(
                        "Please provide a business type.".to_string(),
                    ));
                }
            }
            GenerationRequest::SiteAnalysis { website_url } => {
                if is_blank(website_url) {
                    return Err(GenerateError::InvalidInput(
                        "Please enter a website URL to analyze.".to_string(),
                    ));
                }
                if Url::parse(website_url.trim()).is_err() {
                    return Err(GenerateError::InvalidInput(
                        "Please enter a valid URL (e.g., https://example.com).".to_string(),
                    ));
                }
            }
            GenerationRequest::ContentIdeas { topic, .. } => {
                if is_blank(topic) {
                    return Err(GenerateError::InvalidInput(
                        "Please provide a content topic.".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Builds the natural-language prompt sent to the provider.
    ///
    /// Deterministic: the same fields always produce the same string, with
    /// supplied values inserted verbatim.
    pub fn prompt(&self) -> String {
        match self {
            GenerationRequest::MarketingCopy {
                product_name,
                description,
            } => format!(
                "Generate compelling marketing copy for a product or service.\n\
                 Product/Service Name: {product_name}\n\
                 Description: {description}\n\
                 \n\
                 Please provide:\n\
                 1. A catchy headline.\n\
                 2. A short social media post (for platforms like Instagram/Facebook).\n\
                 3. A brief ad copy (for platforms like Google Ads/WhatsApp marketing).\n\
                 4. A concise, benefit-driven description (2-3 sentences)."
            ),
            GenerationRequest::SeoKeywords {
                business_type,
                target_audience,
            } => {
                let mut prompt = format!(
                    "Generate a list of highly relevant SEO keywords for a business.\n\
                     Business Type: {business_type}"
                );
                if let Some(audience) = non_blank(target_audience) {
                    prompt.push_str(&format!("\nTarget Audience: {audience}"));
                }
                prompt.push_str(
                    "\n\nPlease provide:\n\
                     - 5-7 short-tail keywords (1-2 words)\n\
                     - 8-10 long-tail keywords (3+ words)\n\
                     - 3-5 related customer questions\n\
                     Format as a bulleted list.",
                );
                prompt
            }
            GenerationRequest::SiteAnalysis { website_url } => format!(
                "Analyze the following website URL for its SEO, content quality, and user \
                 experience. Provide actionable insights and suggestions.\n\
                 Website URL: {website_url}\n\
                 \n\
                 Structure your analysis:\n\
                 1. Overall Impression\n\
                 2. SEO Analysis\n\
                 3. Content Quality\n\
                 4. User Experience\n\
                 5. Actionable Recommendations"
            ),
            GenerationRequest::ContentIdeas { topic, format } => {
                let format = non_blank(format).unwrap_or(DEFAULT_CONTENT_FORMAT);
                format!(
                    "Generate 5-7 unique and engaging content ideas.\n\
                     Topic: {topic}\n\
                     Format: {format}\n\
                     \n\
                     Provide:\n\
                     - A catchy title\n\
                     - 1-2 sentence description\n\
                     - Relevant keywords/hashtags\n\
                     Numbered list."
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(request: &GenerationRequest, expected: &str) {
        match request.validate() {
            Err(GenerateError::InvalidInput(message)) => assert_eq!(message, expected),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_marketing_copy_requires_both_fields() {
        let expected = "Please provide both a product/service name and a description.";

        assert_invalid(
            &GenerationRequest::MarketingCopy {
                product_name: String::new(),
                description: "A handy widget".to_string(),
            },
            expected,
        );
        // Whitespace-only counts as blank
        assert_invalid(
            &GenerationRequest::MarketingCopy {
                product_name: "Widget".to_string(),
                description: "   ".to_string(),
            },
            expected,
        );
    }

    #[test]
    fn test_seo_keywords_requires_business_type() {
        assert_invalid(
            &GenerationRequest::SeoKeywords {
                business_type: " \t".to_string(),
                target_audience: Some("everyone".to_string()),
            },
            "Please provide a business type.",
        );
    }

    #[test]
    fn test_content_ideas_requires_topic() {
        assert_invalid(
            &GenerationRequest::ContentIdeas {
                topic: String::new(),
                format: None,
            },
            "Please provide a content topic.",
        );
    }

    #[test]
    fn test_site_analysis_rejects_blank_and_malformed_urls() {
        assert_invalid(
            &GenerationRequest::SiteAnalysis {
                website_url: String::new(),
            },
            "Please enter a website URL to analyze.",
        );
        assert_invalid(
            &GenerationRequest::SiteAnalysis {
                website_url: "not a url".to_string(),
            },
            "Please enter a valid URL (e.g., https://example.com).",
        );
    }

    #[test]
    fn test_site_analysis_accepts_well_formed_url() {
        let request = GenerationRequest::SiteAnalysis {
            website_url: "https://example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_prompt_contains_field_values_verbatim() {
        let request = GenerationRequest::MarketingCopy {
            product_name: "Acme Widget".to_string(),
            description: "A widget for everything".to_string(),
        };

        let prompt = request.prompt();
        assert!(prompt.contains("Product/Service Name: Acme Widget"));
        assert!(prompt.contains("Description: A widget for everything"));
    }

    #[test]
    fn test_seo_prompt_omits_blank_audience() {
        let without = GenerationRequest::SeoKeywords {
            business_type: "bakery".to_string(),
            target_audience: Some("  ".to_string()),
        };
        assert!(!without.prompt().contains("Target Audience"));

        let with = GenerationRequest::SeoKeywords {
            business_type: "bakery".to_string(),
            target_audience: Some("young families".to_string()),
        };
        assert!(with.prompt().contains("Target Audience: young families"));
    }

    #[test]
    fn test_content_ideas_format_defaults() {
        let request = GenerationRequest::ContentIdeas {
            topic: "gardening".to_string(),
            format: None,
        };
        assert!(request.prompt().contains("Format: blog post ideas"));

        let explicit = GenerationRequest::ContentIdeas {
            topic: "gardening".to_string(),
            format: Some("video scripts".to_string()),
        };
        assert!(explicit.prompt().contains("Format: video scripts"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = GenerationRequest::SiteAnalysis {
            website_url: "https://example.com".to_string(),
        };
        assert_eq!(request.prompt(), request.prompt());
    }
}
