use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- HTTP Server Args ---
    /// Port for the JSON API server
    #[arg(long, env = "HTTP_PORT", default_value = "5000")]
    pub http_port: u16,

    /// Enable TLS for the API server (requires cert and key paths)
    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    /// Path to the TLS certificate in PEM format
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Path to the TLS private key in PEM format
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    // --- Completion Service Args ---
    /// API key for the generative completion service. Absent or implausibly
    /// short keys mean "not configured": requests skip the network call and
    /// take the local fallback path.
    #[arg(long, env = "GOOGLE_AI_API_KEY", default_value = "")]
    pub ai_api_key: String,

    /// Model name used for palette and animation completions
    #[arg(long, env = "AI_MODEL", default_value = "gemini-1.5-flash")]
    pub ai_model: String,

    /// Base URL for the completion service API
    #[arg(
        long,
        env = "AI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub ai_base_url: String,

    /// Timeout in seconds for a single completion call; the fallback path is
    /// taken once it elapses
    #[arg(long, env = "AI_TIMEOUT_SECS", default_value = "8")]
    pub ai_timeout_secs: u64,
}
