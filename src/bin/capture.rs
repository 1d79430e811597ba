use std::path::PathBuf;

use clap::{Parser, Subcommand};
use placeregistry::{
    client::{render, ApiClient, CaptureSession, FixedLocation, StaticCamera},
    config::ClientConfig,
    logging::{init_logging, Verbosity},
    Coordinates,
};

/// Register places with the record service from the terminal.
#[derive(Debug, Parser)]
#[command(name = "capture", version)]
struct Cli {
    /// Record service base URL (defaults to $API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Increase log output (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every registered place, newest last.
    List,
    /// Show one place.
    Show { id: String },
    /// Register a new place.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Latitude of the location fix; without --lat/--lng the location is refused.
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Image file to attach, sent inline as base64.
        #[arg(long, conflicts_with = "photo_uri")]
        photo: Option<PathBuf>,
        /// Image reference to attach as-is.
        #[arg(long)]
        photo_uri: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_occurrences(cli.verbose, cli.quiet));

    let api_url = cli.api_url.unwrap_or_else(|| ClientConfig::from_env().api_url);
    let api = ApiClient::new(api_url);

    match cli.command {
        Command::List => {
            let mut session = CaptureSession::new(api, FixedLocation::denied(), StaticCamera::Unavailable);
            session.load().await;
            report(session.drain_notices());
            print!("{}", render::render_list(session.places()));
        }
        Command::Show { id } => {
            let record = api.get_place(&id).await?;
            print!("{}", render::render_card(&record));
        }
        Command::Add { title, description, lat, lng, photo, photo_uri } => {
            let location = match lat.zip(lng) {
                Some((latitude, longitude)) => FixedLocation::granted(Coordinates::new(latitude, longitude)),
                None => FixedLocation::denied(),
            };
            let camera = match (photo, photo_uri) {
                (Some(path), _) => Some(StaticCamera::File(path)),
                (None, Some(uri)) => Some(StaticCamera::Uri(uri)),
                (None, None) => None,
            };
            let wants_photo = camera.is_some();

            let mut session = CaptureSession::new(api, location, camera.unwrap_or(StaticCamera::Unavailable));
            session.load().await;

            let form = session.form_mut();
            form.title = title;
            form.description = description;
            session.request_location().await;
            if wants_photo {
                session.take_photo().await;
            }

            let saved = session.submit().await;
            report(session.drain_notices());
            print!("{}", render::render_list(session.places()));

            if saved.is_none() {
                anyhow::bail!("place was not saved");
            }
        }
    }

    Ok(())
}

fn report(notices: Vec<placeregistry::client::Notice>) {
    for notice in notices {
        eprintln!("{notice}");
    }
}
