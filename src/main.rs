//! soundcloud-dl CLI - take SoundCloud with you offline.
//!
//! With no arguments at all the binary enters an interactive mode and asks
//! for a single track link. When several modes are given at once, priority
//! is likes > set > track.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use soundcloud_dl::{Config, Outcome, RunStats, SoundcloudDownloader};

/// API client id used when neither the flag nor the environment supplies one
const DEFAULT_CLIENT_ID: &str = "02gUJC0hH2ct1EGOcYXQIzRFU91c72Ea";

/// Likes mode downloads this many tracks when no count is given
const DEFAULT_LIKES_COUNT: usize = 10;

#[derive(Parser)]
#[command(name = "soundcloud-dl")]
#[command(version)]
#[command(about = "Take SoundCloud with you offline")]
struct Cli {
    /// Download the likes of a user (requires --username)
    #[arg(short, long, requires = "username")]
    likes: bool,

    /// Username whose likes to download
    #[arg(short, long)]
    username: Option<String>,

    /// Link to a set to download
    #[arg(short, long)]
    set: Option<String>,

    /// Link to a track to download
    #[arg(short, long)]
    track: Option<String>,

    /// How many tracks to download; all available when omitted
    #[arg(short, long)]
    count: Option<usize>,

    /// Directory to download into; the current directory when omitted
    #[arg(short, long)]
    folder: Option<PathBuf>,

    /// Create the download directory if it does not exist
    #[arg(short = 'x', long)]
    create_directory: bool,

    /// Overwrite already existing files
    #[arg(short, long)]
    overwrite: bool,

    /// Query the API over HTTPS instead of plain HTTP
    #[arg(long)]
    https: bool,

    /// API client id sent with every request
    #[arg(long, env = "SOUNDCLOUD_CLIENT_ID", default_value = DEFAULT_CLIENT_ID, hide_default_value = true)]
    client_id: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env().add_directive("soundcloud_dl=info".parse().unwrap()),
        )
        .init();

    // Interactive mode: no arguments at all prompts for one track link
    if std::env::args().len() == 1 {
        return interactive().await;
    }

    let cli = Cli::parse();

    let config = Config {
        client_id: cli.client_id.clone(),
        save_dir: cli.folder.clone(),
        create_dir: cli.create_directory,
        overwrite: cli.overwrite,
        https: cli.https,
    };

    // Configuration errors (a missing directory that may not be created)
    // surface here, before any network activity
    let downloader = match SoundcloudDownloader::new(config).await {
        Ok(downloader) => downloader,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.likes {
        let Some(username) = cli.username.as_deref() else {
            eprintln!("--likes requires --username");
            return ExitCode::FAILURE;
        };
        println!("Downloading likes for '{username}'..");
        let count = cli.count.unwrap_or(DEFAULT_LIKES_COUNT);
        match downloader.download_likes(username, count).await {
            Ok(stats) => report(&stats),
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        }
    } else if let Some(set) = cli.set.as_deref() {
        println!("Downloading set..");
        match downloader.download_set(set, cli.count.unwrap_or(0)).await {
            Ok(stats) => report(&stats),
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        }
    } else if let Some(track) = cli.track.as_deref() {
        println!("Downloading track '{track}'");
        match downloader.download_track(track).await {
            Ok(outcome) => report_single(outcome),
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        }
    } else {
        eprintln!("Well, you have to type in something! See --help.");
        ExitCode::FAILURE
    }
}

/// Prompt for a single track link and download it
async fn interactive() -> ExitCode {
    println!("Input a link to the track you wish to download:");
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        eprintln!("Could not read from stdin.");
        return ExitCode::FAILURE;
    }
    let reference = line.trim();
    if reference.is_empty() {
        eprintln!("No track link given.");
        return ExitCode::FAILURE;
    }

    let client_id =
        std::env::var("SOUNDCLOUD_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string());
    let downloader = match SoundcloudDownloader::new(Config::new(client_id)).await {
        Ok(downloader) => downloader,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match downloader.download_track(reference).await {
        Ok(outcome) => report_single(outcome),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Print the end-of-run summary for a batch
fn report(stats: &RunStats) -> ExitCode {
    if stats.errors() > 0 {
        println!("Finished with {} error(s)", stats.errors());
        if stats.no_stream > 0 {
            println!("..of which {} had no downloadable stream", stats.no_stream);
        }
    }
    println!("Done! {} of {} tracks saved.", stats.succeeded, stats.attempted);
    if stats.errors() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print the result of a single-track download
fn report_single(outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Downloaded | Outcome::SkippedExisting => {
            println!("Done!");
            ExitCode::SUCCESS
        }
        Outcome::NoStream => {
            eprintln!("No downloadable stream for this track.");
            ExitCode::FAILURE
        }
        Outcome::Failed => {
            eprintln!("Download failed.");
            ExitCode::FAILURE
        }
    }
}
