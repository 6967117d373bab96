use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use wain::core::config;
use wain::gis::{AddressQuery, AddressResolver, maps};
use wain::tui;

#[derive(Parser)]
#[command(name = "wain", about = "Locate a Qatari cadastral address on the map")]
struct Args {
    /// Zone number (one-shot mode; requires --street and --building)
    #[arg(short, long)]
    zone: Option<String>,

    /// Street number
    #[arg(short, long)]
    street: Option<String>,

    /// Building number
    #[arg(short, long)]
    building: Option<String>,

    /// Override the GIS layer URL
    #[arg(long)]
    gis_url: Option<String>,

    /// One-shot mode: print the map URL without opening a browser
    #[arg(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to wain.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("wain.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("wain: {e}");
            std::process::exit(2);
        }
    };
    let resolved = config::resolve(&file_config, args.gis_url.as_deref());

    log::info!("Wain starting up (gis: {})", resolved.gis_base_url);

    match (args.zone, args.street, args.building) {
        (Some(zone), Some(street), Some(building)) => {
            let query = AddressQuery::new(zone, street, building);
            one_shot(&resolved, query, args.no_open).await;
            Ok(())
        }
        (None, None, None) => tui::run(&resolved),
        _ => {
            eprintln!("wain: --zone, --street, and --building must be given together");
            std::process::exit(2);
        }
    }
}

/// Headless mode: resolve once, print the map URL, open the browser.
async fn one_shot(config: &config::ResolvedConfig, query: AddressQuery, no_open: bool) {
    let resolver = tui::build_resolver(config);
    match resolver.resolve(&query).await {
        Ok(coords) => {
            let url = maps::search_url(&config.maps_base_url, coords);
            println!("{url}");
            if !no_open && maps::open_in_browser(&url).is_err() {
                log::warn!("Browser launch failed, URL printed above");
            }
        }
        Err(e) => {
            log::warn!("One-shot lookup failed: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
