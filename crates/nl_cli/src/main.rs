use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Context;
use clap::{Parser, Subcommand};
use nl_core::{parse_date, Settings};
use nl_newsletter::NewsletterService;
use nl_web::AppState;
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(name = "newsletter", author, version, about = "Daily AI news newsletter service", long_about = None)]
pub struct Cli {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,
    #[arg(long, env = "OPENAI_BASE_URL", default_value = nl_core::config::DEFAULT_OPENAI_BASE_URL)]
    openai_base_url: String,
    #[arg(long, env = "OPENAI_MODEL", default_value = nl_core::config::DEFAULT_OPENAI_MODEL)]
    openai_model: String,
    #[arg(long, env = "SERPAPI_API_KEY", hide_env_values = true)]
    serpapi_api_key: Option<String>,
    #[arg(long, env = "NEWSAPI_API_KEY", hide_env_values = true)]
    newsapi_api_key: Option<String>,
    /// Articles per newsletter (1-100)
    #[arg(long, env = "MAX_ARTICLES", default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=100))]
    max_articles: u16,
    #[arg(long, env = "NEWS_QUERY", default_value = nl_core::config::DEFAULT_NEWS_QUERY)]
    news_query: String,
    #[arg(long, env = "CACHE_DIR", default_value = "cache")]
    cache_dir: PathBuf,
    /// Cache backend: file or memory
    #[arg(long = "cache", env = "CACHE_BACKEND", default_value = "file")]
    cache_backend: String,
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    request_timeout_secs: u64,
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API (default)
    Serve,
    /// Generate today's newsletter and print it as JSON
    Generate {
        #[arg(long)]
        force_refresh: bool,
    },
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
    Archive {
        #[command(subcommand)]
        command: ArchiveCommands,
    },
}

#[derive(Subcommand, Debug)]
enum CacheCommands {
    Status,
    Clear {
        /// Only clear this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ArchiveCommands {
    List,
    Show { date: String },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            openai_api_key: self.openai_api_key.clone(),
            openai_base_url: self.openai_base_url.clone(),
            openai_model: self.openai_model.clone(),
            serpapi_api_key: self.serpapi_api_key.clone(),
            newsapi_api_key: self.newsapi_api_key.clone(),
            log_level: self.log_level.clone(),
            max_articles: usize::from(self.max_articles),
            news_query: self.news_query.clone(),
            cache_dir: self.cache_dir.clone(),
            cache_backend: self.cache_backend.clone(),
            host: self.host.clone(),
            port: self.port,
            request_timeout_secs: self.request_timeout_secs,
            ..Settings::default()
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let settings = cli.settings();
    info!("🚀 Starting {} v{}", settings.app_name, settings.app_version);
    let service = Arc::new(
        NewsletterService::from_settings(settings.clone())
            .await
            .context("Failed to initialize newsletter service")?,
    );

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
                .parse()
                .with_context(|| format!("Invalid listen address {}:{}", settings.host, settings.port))?;
            nl_web::serve(AppState::new(service), addr).await?;
        }
        Commands::Generate { force_refresh } => {
            let newsletter = service.generate(force_refresh).await?;
            print_json(&newsletter)?;
        }
        Commands::Cache { command } => match command {
            CacheCommands::Status => print_json(&service.get_cache_status().await?)?,
            CacheCommands::Clear { date: Some(date) } => {
                let date = parse_date(&date)?;
                service.clear_cache_for(date).await?;
                println!("Cleared cached newsletter for {}", date);
            }
            CacheCommands::Clear { date: None } => {
                service.clear_cache().await?;
                println!("Cache cleared");
            }
        },
        Commands::Archive { command } => match command {
            ArchiveCommands::List => {
                for date in service.archive_dates().await? {
                    println!("{}", date);
                }
            }
            ArchiveCommands::Show { date } => {
                let date = parse_date(&date)?;
                match service.newsletter_for(date).await? {
                    Some(newsletter) => print_json(&newsletter)?,
                    None => anyhow::bail!("No newsletter cached for {}", date),
                }
            }
        },
    }

    Ok(())
}
