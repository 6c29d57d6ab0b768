use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{Datelike as _, FixedOffset};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "movie-collage", version)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every collage frame as a PNG file.
    Render(RenderArgs),
    /// Print how a history would be split into frames, without rendering.
    Plan(PlanArgs),
    /// Print poster URLs for a history as JSON.
    Posters(PostersArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Watch history JSON.
    #[arg(long)]
    history: PathBuf,

    /// Run configuration JSON (title, year, colors, optional layout).
    #[arg(long)]
    config: PathBuf,

    /// Movie details JSON (array of detail records). Without it every movie is unrated.
    #[arg(long)]
    details: Option<PathBuf>,

    /// Directory holding posters named after the local watch time.
    #[arg(long, default_value = "images")]
    images: PathBuf,

    /// Output directory for the rendered frames.
    #[arg(long, default_value = "images")]
    out: PathBuf,

    /// Name poster files in this UTC offset (e.g. `+02:00`) instead of the local time zone.
    #[arg(long)]
    utc_offset: Option<FixedOffset>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Watch history JSON.
    #[arg(long)]
    history: PathBuf,

    /// Run configuration JSON. Defaults to the built-in layout.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PostersArgs {
    /// Watch history JSON.
    #[arg(long)]
    history: PathBuf,

    /// Movie details JSON (array of detail records).
    #[arg(long)]
    details: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Posters(args) => cmd_posters(args),
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn read_catalog(path: Option<&Path>) -> anyhow::Result<movie_collage::MovieCatalog> {
    match path {
        Some(p) => Ok(movie_collage::MovieCatalog::from_path(p)?),
        None => Ok(movie_collage::MovieCatalog::new()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = movie_collage::RunConfig::from_path(&args.config)?;
    let history = movie_collage::load_history(&args.history)?;
    let details = read_catalog(args.details.as_deref())?;

    let mut posters = movie_collage::DirPosterSource::new(&args.images);
    if let Some(offset) = args.utc_offset {
        posters = posters.with_utc_offset(offset);
    }

    let session = movie_collage::CollageSession::from_run_config(cfg)?;
    let mut sink = movie_collage::PngDirSink::new(&args.out);
    let report = session
        .generate(&history, &posters, &details, &mut sink)
        .context("generate collage")?;

    if report.frames.is_empty() {
        println!("no history entries, nothing written");
        return Ok(());
    }
    for frame in &report.frames {
        println!(
            "{} ({} posters, {} placeholders, {} skipped)",
            frame.output,
            frame.report.drawn,
            frame.report.placeholders,
            frame.report.skipped_overflow
        );
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(p) => movie_collage::RunConfig::from_path(p)?,
        None => movie_collage::RunConfig::new(
            movie_collage::CollageConfig::new("Movie Collage", chrono::Local::now().year()),
            movie_collage::LayoutConfig::default(),
        ),
    };
    let history = movie_collage::load_history(&args.history)?;
    let year = cfg.collage.year;
    let session = movie_collage::CollageSession::from_run_config(cfg)?;
    let slices = session.plan(history.len())?;

    let frames: Vec<serde_json::Value> = slices
        .iter()
        .map(|s| {
            let info = movie_collage::FrameInfo {
                year,
                frame_number: s.number(),
                total_frames: slices.len(),
            };
            serde_json::json!({
                "frame": s.number(),
                "start": s.start,
                "end": s.end,
                "output": movie_collage::output_file_name(info),
            })
        })
        .collect();
    let out = serde_json::json!({
        "movies": history.len(),
        "posters_per_frame": session.posters_per_frame(),
        "frames": frames,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_posters(args: PostersArgs) -> anyhow::Result<()> {
    let history = movie_collage::load_history(&args.history)?;
    let details = read_catalog(Some(&args.details))?;
    let urls = movie_collage::poster_urls(&history, &details);
    let count = urls.len();
    let out = serde_json::json!({
        "poster_paths": urls,
        "count": count,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
