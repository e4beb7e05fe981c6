use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hero-reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the visual state for a single progress value as JSON.
    Eval(EvalArgs),
    /// Drive a session through evenly spaced progress samples and print one JSON line per frame.
    Sweep(SweepArgs),
    /// Print the SVG transform that fits a mask shape into a container.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Scroll progress (clamped to [0, 1] unless --strict).
    #[arg(long, allow_hyphen_values = true)]
    progress: f64,

    /// Reveal config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject progress outside [0, 1] instead of clamping it.
    #[arg(long)]
    strict: bool,

    /// Print only the fields each segment writes at this progress.
    #[arg(long)]
    patch: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Number of frames, including both endpoints.
    #[arg(long, default_value_t = 61)]
    frames: usize,

    /// Reveal config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame update strategy.
    #[arg(long, value_enum, default_value_t = ModeChoice::Total)]
    mode: ModeChoice,

    /// Logo container as "left,top,width,height".
    #[arg(long, value_parser = parse_quad, default_value = "0,0,1280,720")]
    container: [f64; 4],

    /// Mask path data.
    #[arg(long = "path-d", default_value = "M0,0 L100,0 L100,100 L0,100 Z")]
    path_d: String,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Logo container as "left,top,width,height".
    #[arg(long, value_parser = parse_quad)]
    container: [f64; 4],

    /// Shape bounding box as "x,y,width,height".
    #[arg(long, value_parser = parse_quad, conflicts_with = "path_d", required_unless_present = "path_d")]
    bbox: Option<[f64; 4]>,

    /// SVG path data; its bounding box is used as the shape.
    #[arg(long = "path-d")]
    path_d: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Total,
    Accumulate,
}

impl From<ModeChoice> for hero_reveal::UpdateMode {
    fn from(value: ModeChoice) -> Self {
        match value {
            ModeChoice::Total => Self::Total,
            ModeChoice::Accumulate => Self::Accumulate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn parse_quad(s: &str) -> Result<[f64; 4], String> {
    let parts = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid number \"{}\": {e}", p.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; 4]>::try_from(parts)
        .map_err(|v| format!("expected 4 comma-separated numbers, got {}", v.len()))
}

fn read_config(path: Option<&Path>) -> anyhow::Result<hero_reveal::RevealConfig> {
    match path {
        Some(p) => hero_reveal::RevealConfig::load(p)
            .with_context(|| format!("load reveal config '{}'", p.display())),
        None => Ok(hero_reveal::RevealConfig::default()),
    }
}

#[derive(serde::Serialize)]
struct EvalReport {
    progress: hero_reveal::Progress,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<hero_reveal::VisualState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patch: Option<hero_reveal::VisualPatch>,
    assignments: Vec<hero_reveal::PropertyAssignment>,
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let progress = if args.strict {
        hero_reveal::Progress::try_new(args.progress)?
    } else {
        hero_reveal::Progress::clamped(args.progress)
    };
    let mapper = hero_reveal::ProgressMapper::new(cfg.thresholds)?;

    let report = if args.patch {
        let patch = mapper.evaluate_patch(progress.get());
        EvalReport {
            progress,
            state: None,
            assignments: patch.assignments(&cfg.palette),
            patch: Some(patch),
        }
    } else {
        let state = mapper.evaluate(progress.get());
        EvalReport {
            progress,
            state: Some(state),
            patch: None,
            assignments: state.assignments(&cfg.palette),
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let mapper = hero_reveal::ProgressMapper::new(cfg.thresholds)?;
    let source = hero_reveal::ScriptedScroll::sweep(args.frames)?;
    let logo = hero_reveal::LogoPath::parse(&args.path_d)?;
    let [left, top, width, height] = args.container;
    let geometry = hero_reveal::StaticGeometry::new(
        hero_reveal::ContainerRect::new(left, top, width, height),
        logo,
    );

    let mut session = hero_reveal::RevealSession::new(
        mapper,
        Box::new(source),
        Box::new(geometry),
        hero_reveal::RevealSessionOpts {
            mode: args.mode.into(),
        },
    );
    let mut surface = hero_reveal::RecordingSurface::new();
    session.mount(&mut surface)?;
    for _ in 0..args.frames {
        session.tick(&mut surface)?;
    }
    session.unmount();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(mask) = session.mask() {
        writeln!(out, "{}", serde_json::json!({ "mask": mask.to_svg_attr() }))?;
    }
    for commit in surface.commits() {
        writeln!(out, "{}", serde_json::to_string(commit)?)?;
    }
    Ok(())
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let [left, top, width, height] = args.container;
    let container = hero_reveal::ContainerRect::new(left, top, width, height);
    let shape = match (args.bbox, args.path_d.as_deref()) {
        (Some([x, y, w, h]), _) => hero_reveal::ShapeBounds::new(x, y, w, h),
        (None, Some(d)) => hero_reveal::LogoPath::parse(d)?.bounds(),
        (None, None) => anyhow::bail!("one of --bbox or --path-d is required"),
    };

    let transform = hero_reveal::MaskFitter::fit(container, shape)
        .with_context(|| format!("fit {shape:?} into {container:?}"))?;
    println!("{transform}");
    Ok(())
}
