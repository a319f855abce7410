use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use playbook::{
    ContainerSize, Ease, EntityKind, FieldStandard, FitMode, Frame, InMemoryRecorder,
    PlaybackOpts, Playbook, PlaybookDocument, TeamCounts, ViewportOpts, ViewportTransform,
    compute_transform, export_frames,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "playbook", version, about = "Tactical playbook frame engine")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new playbook document.
    New(NewArgs),
    /// Validate a playbook document.
    Validate(ValidateArgs),
    /// Export interpolated playback frames as JSON.
    Play(PlayArgs),
    /// Change team sizes on one frame.
    Reconcile(ReconcileArgs),
    /// Print one frame projected to pixel coordinates.
    Project(ProjectArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Output document path.
    #[arg(long)]
    out: PathBuf,

    /// Play name.
    #[arg(long, default_value = "Untitled play")]
    name: String,

    /// Start from a built-in formation (`vertical_stack`, `horizontal_stack`).
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input document.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Export frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Time spent between consecutive frames, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    segment_ms: u64,

    /// Easing curve (`linear`, `in-quad`, `out-quad`, `in-out-quad`, `in-out-cubic`).
    #[arg(long, default_value = "linear")]
    ease: Ease,
}

#[derive(Parser, Debug)]
struct ReconcileArgs {
    /// Input document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: usize,

    /// Offense players (1-7).
    #[arg(long)]
    offense: u8,

    /// Defense players (0-7).
    #[arg(long)]
    defense: u8,

    /// Output document path.
    #[arg(long)]
    out: PathBuf,

    /// Field standard used for fabricated positions.
    #[arg(long, default_value = "WFDF")]
    standard: String,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Input document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: usize,

    /// Container width in pixels.
    #[arg(long)]
    width: f64,

    /// Container height in pixels.
    #[arg(long)]
    height: f64,

    /// Fit mode (`contain`, `fit-width`, `fit-height`, `manual`).
    #[arg(long, default_value = "contain", value_parser = parse_fit)]
    fit: FitMode,

    /// Padding around the field in pixels.
    #[arg(long, default_value_t = playbook::field::mapper::DEFAULT_PADDING_PX)]
    padding: f64,

    /// Field standard (`WFDF`, `USAU`, `AUDL`).
    #[arg(long, default_value = "WFDF")]
    standard: String,
}

#[derive(serde::Serialize)]
struct PlayExport<'a> {
    name: &'a str,
    fps: u32,
    segment_ms: u64,
    ease: Ease,
    frames: Vec<Frame>,
}

#[derive(serde::Serialize)]
struct ProjectedEntity<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: EntityKind,
    x: f64,
    y: f64,
}

#[derive(serde::Serialize)]
struct Projection<'a> {
    standard: &'static str,
    transform: ViewportTransform,
    entities: Vec<ProjectedEntity<'a>>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::New(args) => cmd_new(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Play(args) => cmd_play(args),
        Command::Reconcile(args) => cmd_reconcile(args),
        Command::Project(args) => cmd_project(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn parse_fit(s: &str) -> Result<FitMode, String> {
    serde_json::from_value(serde_json::Value::String(s.trim().to_ascii_lowercase()))
        .map_err(|_| format!("unknown fit mode \"{s}\""))
}

fn standard(id: &str) -> anyhow::Result<&'static FieldStandard> {
    FieldStandard::by_id(id).with_context(|| format!("unknown field standard '{id}'"))
}

fn load(path: &Path) -> anyhow::Result<PlaybookDocument> {
    PlaybookDocument::from_path(path).with_context(|| format!("load '{}'", path.display()))
}

fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    let doc = match args.preset.as_deref() {
        Some(name) => {
            let mut doc = playbook::preset(name).with_context(|| {
                format!(
                    "unknown preset '{name}' (expected one of: {})",
                    playbook::PRESET_NAMES.join(", ")
                )
            })?;
            doc.name = args.name;
            doc
        }
        None => Playbook::new().to_document(args.name),
    };
    doc.write_path(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    println!("ok: '{}' has {} frame(s)", doc.name, doc.frames.len());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let pb = Playbook::from_document(doc.clone())?;
    let opts = PlaybackOpts {
        segment_duration: Duration::from_millis(args.segment_ms),
        ease: args.ease,
    };
    let mut rec = InMemoryRecorder::new();
    let emitted = export_frames(pb.sequence(), opts, args.fps, &mut rec)?;
    tracing::info!(emitted, "exported playback frames");

    let export = PlayExport {
        name: &doc.name,
        fps: args.fps,
        segment_ms: args.segment_ms,
        ease: args.ease,
        frames: rec.into_frames(),
    };
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&export).context("serialize playback export")?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write playback export '{}'", args.out.display()))?;

    eprintln!("wrote {} ({emitted} frames)", args.out.display());
    Ok(())
}

fn cmd_reconcile(args: ReconcileArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let name = doc.name.clone();
    let field = *standard(&args.standard)?;
    let counts = TeamCounts::new(args.offense, args.defense)?;

    let mut pb = Playbook::with_field(field);
    pb.load_document(doc)?;
    if !pb.select_frame(args.frame) {
        anyhow::bail!(
            "frame {} out of range (document has {} frame(s))",
            args.frame,
            pb.frame_count()
        );
    }
    let out = pb.apply_team_counts(counts);
    pb.commit();

    if !out.fabricated.is_empty() {
        eprintln!("added: {}", out.fabricated.join(", "));
    }
    if !out.dropped.is_empty() {
        eprintln!("removed: {}", out.dropped.join(", "));
    }
    pb.to_document(name).write_path(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_project(args: ProjectArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let field = standard(&args.standard)?;
    let frame = doc.frames.get(args.frame).with_context(|| {
        format!(
            "frame {} out of range (document has {} frame(s))",
            args.frame,
            doc.frames.len()
        )
    })?;

    let transform = compute_transform(
        ContainerSize::new(args.width, args.height),
        &field.dimensions,
        ViewportOpts {
            fit: args.fit,
            padding: args.padding,
        },
    );
    let entities = frame
        .iter()
        .map(|e| {
            let p = transform.project(e.pos());
            ProjectedEntity {
                id: &e.id,
                kind: e.kind,
                x: p.x,
                y: p.y,
            }
        })
        .collect();

    let out = Projection {
        standard: field.id,
        transform,
        entities,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
