// src/core/catalog.rs

//! Static, read-only domain lists.
//!
//! These are the sites the product publishes benchmark tables and sample
//! reports for. Keeping them as data means a list can change without touching
//! the code that grades it.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// One site in a benchmark list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkSite {
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Sector of a curated domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl BenchmarkSite {
    pub fn new(name: &str, domain: &str, note: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            note: note.map(str::to_string),
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// A named site with a one-line description.
pub struct ListedSite {
    pub name: &'static str,
    pub domain: &'static str,
    pub note: &'static str,
}

/// A domain that is known to grade poorly, kept for outreach reports.
pub struct CuratedDomain {
    pub domain: &'static str,
    pub label: &'static str,
    /// Free-form sector, e.g. `"media"` or `"finance"`.
    pub category: &'static str,
    pub notes: &'static str,
}

static SAAS_SITES: &[ListedSite] = &[
    ListedSite { name: "Notion", domain: "notion.so", note: "Docs and wiki for teams" },
    ListedSite { name: "Linear", domain: "linear.app", note: "Issue tracking for software" },
    ListedSite { name: "Figma", domain: "figma.com", note: "Design collaboration" },
    ListedSite { name: "Slack", domain: "slack.com", note: "Team messaging" },
    ListedSite { name: "Asana", domain: "asana.com", note: "Project management" },
    ListedSite { name: "ClickUp", domain: "clickup.com", note: "Work management" },
    ListedSite { name: "Monday.com", domain: "monday.com", note: "Work OS platform" },
    ListedSite { name: "HubSpot", domain: "hubspot.com", note: "CRM and marketing" },
    ListedSite { name: "Intercom", domain: "intercom.com", note: "Customer messaging" },
    ListedSite { name: "Salesforce", domain: "salesforce.com", note: "Enterprise CRM" },
    ListedSite { name: "GitHub", domain: "github.com", note: "Code hosting and collaboration" },
    ListedSite { name: "Vercel", domain: "vercel.com", note: "Frontend hosting" },
    ListedSite { name: "Atlassian", domain: "atlassian.com", note: "Jira and Confluence" },
    ListedSite { name: "Zendesk", domain: "zendesk.com", note: "Customer support" },
    ListedSite { name: "Airtable", domain: "airtable.com", note: "Database and spreadsheets" },
    ListedSite { name: "Miro", domain: "miro.com", note: "Whiteboarding and collaboration" },
    ListedSite { name: "Segment", domain: "segment.com", note: "Customer data platform" },
    ListedSite { name: "Datadog", domain: "datadoghq.com", note: "Monitoring and observability" },
    ListedSite { name: "Sentry", domain: "sentry.io", note: "Error monitoring" },
    ListedSite { name: "Auth0", domain: "auth0.com", note: "Identity and auth" },
];

static AI_STARTUPS: &[ListedSite] = &[
    ListedSite { name: "Perplexity", domain: "perplexity.ai", note: "AI search engine" },
    ListedSite { name: "Anthropic / Claude", domain: "claude.ai", note: "AI assistant" },
    ListedSite { name: "OpenAI", domain: "openai.com", note: "Models & API" },
    ListedSite { name: "Character AI", domain: "character.ai", note: "AI characters" },
    ListedSite { name: "Midjourney", domain: "midjourney.com", note: "AI image generation" },
    ListedSite { name: "Runway", domain: "runwayml.com", note: "AI video & editing" },
    ListedSite { name: "ElevenLabs", domain: "elevenlabs.io", note: "AI voice" },
    ListedSite { name: "Synthesia", domain: "synthesia.io", note: "AI video avatars" },
    ListedSite { name: "Cohere", domain: "cohere.ai", note: "Enterprise LLMs" },
    ListedSite { name: "Stability AI", domain: "stability.ai", note: "Stable Diffusion" },
    ListedSite { name: "Hugging Face", domain: "huggingface.co", note: "Models & hub" },
    ListedSite { name: "Luma", domain: "luma.ai", note: "3D & video AI" },
    ListedSite { name: "Mistral AI", domain: "mistral.ai", note: "Open LLMs" },
    ListedSite { name: "Replit", domain: "replit.com", note: "AI coding environment" },
    ListedSite { name: "Cursor", domain: "cursor.sh", note: "AI code editor" },
    ListedSite { name: "Adept", domain: "adept.ai", note: "Action-taking AI" },
    ListedSite { name: "Inflection AI", domain: "inflection.ai", note: "Pi assistant" },
    ListedSite { name: "Sierra", domain: "sierra.ai", note: "AI customer agents" },
    ListedSite { name: "Glean", domain: "glean.com", note: "AI workplace search" },
    ListedSite { name: "Runpod", domain: "runpod.io", note: "AI infra / GPUs" },
];

static CURATED_DOMAINS: &[CuratedDomain] = &[
    CuratedDomain { domain: "craigslist.org", label: "Craigslist", category: "general", notes: "Almost always missing CSP, HSTS and Permissions Policy; usually scores F." },
    CuratedDomain { domain: "espn.com", label: "ESPN", category: "media", notes: "Legacy infrastructure; missing several modern security headers." },
    CuratedDomain { domain: "foxnews.com", label: "Fox News", category: "media", notes: "Missing CSP and Permissions Policy, predictable F score." },
    CuratedDomain { domain: "harvard.edu", label: "Harvard University", category: "education", notes: "Weak security headers despite a strong brand." },
    CuratedDomain { domain: "nba.com", label: "NBA", category: "sports", notes: "Typically missing 4-5 security headers." },
    CuratedDomain { domain: "bbc.com", label: "BBC", category: "media", notes: "Weak header posture; CSP missing." },
    CuratedDomain { domain: "marketwatch.com", label: "MarketWatch", category: "finance", notes: "Fails several header checks; reliable F." },
    CuratedDomain { domain: "weather.com", label: "Weather.com", category: "weather", notes: "Often D or F due to missing essential headers." },
    CuratedDomain { domain: "msn.com", label: "MSN", category: "portal", notes: "Missing multiple headers; common F." },
    CuratedDomain { domain: "imdb.com", label: "IMDb", category: "entertainment", notes: "Missing CSP and HSTS; frequently fails." },
    CuratedDomain { domain: "midjourney.com", label: "Midjourney", category: "ai", notes: "Popular AI tool, often minimal headers." },
    CuratedDomain { domain: "claude.ai", label: "Claude / Anthropic", category: "ai", notes: "Security headers vary by region." },
    CuratedDomain { domain: "perplexity.ai", label: "Perplexity AI", category: "ai", notes: "Very high growth." },
    CuratedDomain { domain: "runwayml.com", label: "Runway ML", category: "ai", notes: "Creative AI; header score typically C or D." },
    CuratedDomain { domain: "character.ai", label: "Character AI", category: "ai", notes: "Weak CSP." },
    CuratedDomain { domain: "coinmarketcap.com", label: "CoinMarketCap", category: "finance", notes: "Weak CSP; large search volume." },
    CuratedDomain { domain: "kraken.com", label: "Kraken Exchange", category: "finance", notes: "SSL strong; missing modern headers." },
    CuratedDomain { domain: "sofi.com", label: "SoFi", category: "finance", notes: "Popular fintech; header score usually D." },
    CuratedDomain { domain: "venmo.com", label: "Venmo", category: "finance", notes: "Missing Permissions-Policy." },
    CuratedDomain { domain: "mint.com", label: "Mint", category: "finance", notes: "Good SSL, weak header setup." },
    CuratedDomain { domain: "weebly.com", label: "Weebly", category: "general", notes: "Historically poor security headers (F/D)." },
    CuratedDomain { domain: "godaddy.com", label: "GoDaddy", category: "general", notes: "Large audience; header score often D." },
    CuratedDomain { domain: "quora.com", label: "Quora", category: "general", notes: "Missing key policies." },
];

/// Domains the public sample reports are published for.
static SAMPLE_DOMAINS: &[&str] = &[
    "reddit.com",
    "github.com",
    "notion.so",
    "openai.com",
    "ycombinator.com",
    "producthunt.com",
    "news.ycombinator.com",
    "stripe.com",
    "vercel.com",
    "cloudflare.com",
];

/// The benchmark lists that can be graded side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum BenchmarkList {
    Saas,
    AiStartups,
    Curated,
    Samples,
}

impl BenchmarkList {
    pub fn title(self) -> &'static str {
        match self {
            BenchmarkList::Saas => "SaaS website security benchmarks",
            BenchmarkList::AiStartups => "AI startup website security benchmarks",
            BenchmarkList::Curated => "Curated low-scoring websites",
            BenchmarkList::Samples => "Sample security reports",
        }
    }

    /// The list's sites, in catalog order.
    pub fn sites(self) -> Vec<BenchmarkSite> {
        match self {
            BenchmarkList::Saas => listed(SAAS_SITES),
            BenchmarkList::AiStartups => listed(AI_STARTUPS),
            BenchmarkList::Curated => CURATED_DOMAINS
                .iter()
                .map(|c| {
                    BenchmarkSite::new(c.label, c.domain, Some(c.notes)).with_category(c.category)
                })
                .collect(),
            BenchmarkList::Samples => SAMPLE_DOMAINS
                .iter()
                .map(|domain| BenchmarkSite::new(domain, domain, None))
                .collect(),
        }
    }
}

fn listed(sites: &[ListedSite]) -> Vec<BenchmarkSite> {
    sites
        .iter()
        .map(|s| BenchmarkSite::new(s.name, s.domain, Some(s.note)))
        .collect()
}
