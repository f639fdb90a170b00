use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use butai::api::HttpListingsProvider;
use butai::core::config;
use butai::tui;

#[derive(Parser)]
#[command(name = "butai", about = "Terminal client for the apartments listings API")]
struct Args {
    /// Base URL of the listings API (overrides config and env)
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to butai.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("butai.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Butai starting up against {}", resolved.base_url);

    let provider = Arc::new(HttpListingsProvider::new(
        resolved.base_url.clone(),
        resolved.listings_path.clone(),
        resolved.timeout_secs,
    ));

    tui::run(provider, &resolved)
}
