use clap::{Parser, Subcommand};

/// CLI arguments for advisory
#[derive(Debug, Parser)]
#[command(
    name = "advisory",
    version,
    about = "Look up country travel advisories and map zoom levels"
)]
pub struct CliArgs {
    /// Advisory feed: an http(s) URL or a path to a saved JSON document
    #[arg(short = 's', long = "source", env = "ADVISORY_URL", global = true)]
    pub source: Option<String>,

    /// Use the sample snapshot bundled with advisory-core instead of the live feed
    #[arg(long = "offline", global = true, conflicts_with = "source")]
    pub offline: bool,

    /// Request timeout in seconds for every upstream call
    #[arg(short = 't', long = "timeout", global = true)]
    pub timeout: Option<u64>,

    /// OpenCage API key, needed by `locate` and `click`
    #[arg(long = "api-key", env = "OPENCAGE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries alphabetically
    Countries {
        /// Keep only names or codes containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the advisory for a country code
    Advisory {
        /// ISO2 code (e.g. FR, us)
        code: String,
    },

    /// Show the advisory for an exact country name
    ByName {
        /// Country name as spelled in the feed (case-sensitive)
        name: String,
    },

    /// Show the size tier and zoom level for a country code
    Zoom {
        /// ISO2 code
        code: String,
    },

    /// Run the dropdown flow: geocode the country and print the map update
    Locate {
        /// ISO2 code
        code: String,
    },

    /// Run the map-click flow for a point
    Click {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },

    /// Print the zoom tier table and check that tiers do not overlap
    Tiers,

    /// Show a summary of the advisory catalog
    Stats,
}
