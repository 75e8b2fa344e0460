use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpack::assets::AssetLoader;
use inkpack::models::{BoardsFile, ParamOverrides};
use inkpack::services::{
    read_png, write_outputs, ConversionJob, ConversionService, FileWatcher, OutputFormat,
    OutputPlan, OutputWriter,
};

#[derive(Parser)]
#[command(name = "inkpack")]
#[command(about = "Dither and pack images for e-ink display boards")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG into a packed display buffer
    Convert(ConvertArgs),
    /// Convert, then convert again whenever the input or board file changes
    Watch(ConvertArgs),
    /// List the known boards and their modes
    Boards {
        /// Print the resolved board file as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract the embedded boards.json for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Args, Clone)]
struct ConvertArgs {
    /// Input PNG, already sized to the board's display
    input: PathBuf,

    /// Board name (defaults to the first board in the board file)
    #[arg(short, long)]
    board: Option<String>,

    /// Mode id (defaults to the board's first mode)
    #[arg(short, long)]
    mode: Option<String>,

    /// Dithering method, e.g. "none", "floyd-steinberg" or "jarvis"
    #[arg(short, long)]
    dither: Option<String>,

    /// Black/white threshold for 1 bpp output
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Invert the image before quantizing
    #[arg(long, overrides_with = "no_invert")]
    invert: bool,

    /// Do not invert, even if the mode's default says so
    #[arg(long, overrides_with = "invert")]
    no_invert: bool,

    /// Output file (defaults to the input path with a .bin or .h extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: "bin" or "c" (defaults from the output extension)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// C array name for header output (defaults to the input file stem)
    #[arg(long)]
    name: Option<String>,

    /// Also write a PNG preview of what the panel will show
    #[arg(short, long)]
    preview: Option<PathBuf>,

    /// Board file (overrides BOARDS_FILE)
    #[arg(long)]
    boards: Option<PathBuf>,
}

impl ConvertArgs {
    fn loader(&self) -> AssetLoader {
        match self.boards {
            Some(ref path) => AssetLoader::new(Some(path.clone())),
            None => AssetLoader::from_env(),
        }
    }

    fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            threshold: self.threshold,
            invert: match (self.invert, self.no_invert) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            dither: self.dither.clone(),
        }
    }

    fn plan(&self) -> OutputPlan {
        OutputPlan::for_input(
            &self.input,
            self.output.clone(),
            self.format,
            self.name.clone(),
            self.preview.clone(),
        )
    }

    /// Load boards, read the input and build a job for the selected mode
    fn job(&self, loader: &AssetLoader) -> anyhow::Result<ConversionJob> {
        let (boards, _) = BoardsFile::load(loader)?;
        let selection =
            boards.select(self.board.as_deref(), self.mode.as_deref(), &self.overrides())?;
        tracing::info!(
            board = %selection.board.board,
            mode = %selection.mode.id,
            dither = selection.params.dither.as_deref().unwrap_or("default"),
            "Selected board mode"
        );
        let image = read_png(&self.input)?;
        Ok(ConversionJob::new(image, &selection)?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => {
            init_logging("inkpack=warn");
            run_convert_command(args).await
        }
        Some(Commands::Watch(args)) => {
            init_logging("inkpack=info");
            run_watch_command(args).await
        }
        Some(Commands::Boards { json }) => {
            init_logging("inkpack=warn");
            run_boards_command(json)
        }
        Some(Commands::Init { force }) => run_init_command(force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Convert once and write the outputs
async fn run_convert_command(args: ConvertArgs) -> anyhow::Result<()> {
    let loader = args.loader();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed board file");
    }

    let job = args.job(&loader)?;
    let service = ConversionService::new();
    let Some(image) = service.convert(job).await? else {
        anyhow::bail!("conversion was superseded");
    };

    let plan = args.plan();
    let report = write_outputs(&image, &plan)?;
    println!(
        "Wrote {} ({} bytes, {}x{} @ {} bpp, mode {})",
        plan.path.display(),
        report.output_bytes,
        image.meta().width,
        image.meta().height,
        image.meta().bpp,
        image.meta().mode_id
    );
    if let (Some(path), Some(bytes)) = (&plan.preview, report.preview_bytes) {
        println!("Wrote preview {} ({bytes} bytes)", path.display());
    }
    Ok(())
}

/// Convert on every change; a slow conversion never overwrites a newer one
async fn run_watch_command(args: ConvertArgs) -> anyhow::Result<()> {
    let loader = args.loader();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed board file");
    }

    let mut watched = vec![args.input.clone()];
    if let Some(path) = loader.boards_file() {
        watched.push(path.to_path_buf());
    }
    let mut watcher = FileWatcher::new(&watched)?;
    let service = ConversionService::new();
    let (writer, _writer_task) = OutputWriter::spawn(service.clone(), args.plan());

    submit(&service, &args, &loader, &writer);
    println!("Watching {} (Ctrl+C to stop)", args.input.display());

    loop {
        tokio::select! {
            event = watcher.changed() => {
                let Some(event) = event else { break };
                tracing::info!(paths = ?event.paths, "Change detected");
                submit(&service, &args, &loader, &writer);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watch");
                break;
            }
        }
    }
    Ok(())
}

/// Start one conversion and hand its result to the writer
fn submit(
    service: &ConversionService,
    args: &ConvertArgs,
    loader: &AssetLoader,
    writer: &OutputWriter,
) {
    let job = match args.job(loader) {
        Ok(job) => job,
        Err(e) => {
            tracing::error!(error = %e, "Cannot convert");
            return;
        }
    };
    let pending = service.submit(job);
    let ticket = pending.ticket();
    let writer = writer.clone();
    tokio::spawn(async move {
        match pending.wait().await {
            Ok(Some(image)) => {
                writer.send(ticket, image).await;
            }
            Ok(None) => {}
            Err(e) => tracing::error!(error = %e, "Conversion failed"),
        }
    });
}

fn run_boards_command(json: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let (boards, source) = BoardsFile::load(&loader)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&boards)?);
        return Ok(());
    }

    println!("Boards ({source}):\n");
    for board in &boards.boards {
        println!(
            "  {} ({}x{})",
            board.board, board.display_width, board.display_height
        );
        for mode in &board.modes {
            let status = match mode.target() {
                Ok(target) => format!("{} bpp packed", target.bpp()),
                Err(e) => format!("unusable: {e}"),
            };
            println!("    - {:<8} {status}", mode.id);
        }
    }
    Ok(())
}

fn run_init_command(force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped {} existing files (use --force to overwrite):", report.skipped.len());
        for f in &report.skipped {
            println!("  - {f}");
        }
    }
    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let boards_file = std::env::var("BOARDS_FILE").ok();

    println!("inkpack v{VERSION}");
    println!("Dither and pack images for e-ink display boards\n");

    println!("Environment Variables:");
    println!(
        "  BOARDS_FILE = {}",
        boards_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nBoard Source:");
    let source = match boards_file {
        Some(ref path) if Path::new(path).exists() => path.clone(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  {source}");

    println!("\nCommands:");
    println!("  inkpack convert <input.png>  Convert an image for a board");
    println!("  inkpack watch <input.png>    Convert again on every change");
    println!("  inkpack boards               List boards and modes");
    println!("  inkpack init                 Extract boards.json for customization");
}
