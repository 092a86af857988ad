use clap::Parser;
use hns_core::{Result, SummaryRecord};
use hns_web::{
    create_app, AppState, FreshnessTicker, HttpSummarySource, PollConfig, RefreshScheduler,
    ViewState,
};
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                match c {
                    's' => total_seconds += num,
                    'm' => total_seconds += num * 60,
                    'h' => total_seconds += num * 3600,
                    'd' => total_seconds += num * 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                }
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A bare number means seconds
        if !current_number.is_empty() {
            match current_number.parse::<u64>() {
                Ok(num) => {
                    total_seconds += num;
                    has_unit = true;
                }
                Err(_) => return Err("Invalid number in duration".to_string()),
            }
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Hacker News discussion summaries viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the summaries page, polling the upstream summarizer
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:3000")]
        listen: String,
        /// Base URL of the summarizer API (serves /api/summaries)
        #[arg(long, default_value = "http://127.0.0.1:5000/")]
        upstream: String,
        /// Delay between polls while upstream has no summaries yet (e.g. 10s, 1m)
        #[arg(long, default_value = "10s")]
        retry_delay: HumanDuration,
        /// Poll attempts before giving up and asking for a manual refresh
        #[arg(long, default_value_t = 30)]
        max_attempts: u32,
        /// How often the "last updated" label is recomputed
        #[arg(long, default_value = "60s")]
        tick: HumanDuration,
    },
    /// Render one raw summary blob to an HTML fragment on stdout
    Render {
        /// File with the raw summary text; stdin when omitted
        file: Option<PathBuf>,
        /// Story title for the fragment header
        #[arg(long, default_value = "Untitled story")]
        title: String,
        /// Comment count the low-signal guard sees
        #[arg(long, default_value_t = 100)]
        comments: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            upstream,
            retry_delay,
            max_attempts,
            tick,
        } => {
            let source = Arc::new(HttpSummarySource::new(&upstream)?);
            let view = Arc::new(ViewState::default());

            let mut scheduler = RefreshScheduler::new(
                source,
                view.clone(),
                PollConfig {
                    retry_delay: retry_delay.0,
                    max_attempts,
                },
            );
            scheduler.start();
            info!("📡 Polling {} for summaries", upstream);

            let mut ticker = FreshnessTicker::new(view.clone(), tick.0);
            ticker.start();

            let state = AppState {
                view,
                scheduler: tokio::sync::Mutex::new(scheduler),
            };
            let app = create_app(state).await;
            let listener = tokio::net::TcpListener::bind(&listen).await?;
            info!("🌐 Serving summaries on http://{}", listen);
            axum::serve(listener, app).await?;
        }
        Commands::Render {
            file,
            title,
            comments,
        } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let record = SummaryRecord {
                story_id: 0,
                title,
                url: None,
                points: 0,
                comment_count: comments,
                summary: raw,
                created_at: None,
            };
            print!("{}", hns_web::html::render_story(&record));
        }
    }

    Ok(())
}
