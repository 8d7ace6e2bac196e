use clap::Parser;

#[derive(Parser)]
#[command(name = "oldest-repos-server")]
#[command(about = "Oldest Repositories Server - Serves an organization's oldest GitHub repositories as a chat-bot carousel")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Hosting environment; `development` serves the OpenAPI document
    #[arg(long, env = "APP_ENVIRONMENT", default_value = "production")]
    pub environment: String,

    /// Redirect plain-HTTP requests to this HTTPS port
    #[arg(long, env = "HTTPS_PORT")]
    pub https_port: Option<u16>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Timeout for GitHub API requests in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout: u64,
}

impl Cli {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}
