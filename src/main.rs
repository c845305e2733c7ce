use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use cloudfractal::{
    GridEncoder, GridEncoderKind, MandelbrotRenderer, RawRenderParams, RenderImageController,
    RenderLimits, grid_encoder_factory, parse_query,
};

#[derive(Parser, Debug)]
#[command(name = "cloudfractal", version, about = "Render the Mandelbrot set to an image file")]
struct Cli {
    /// Parameters as a URL query string, e.g. `width=800&centerX=-0.75&palette=dark`.
    /// Individual flags below take precedence.
    #[arg(long)]
    query: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    center_x: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    center_y: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    zoom: Option<String>,

    /// One of sol, sunrise, dark. Anything else renders with sol.
    #[arg(long)]
    palette: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    max_iterations: Option<String>,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Output path. Defaults to `mandelbrot.<format>`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Worker threads for row computation. Defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,

    /// Refuse renders with more pixels than this.
    #[arg(long, default_value_t = RenderLimits::default().max_pixels)]
    max_pixels: u64,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Ppm,
}

impl From<FormatChoice> for GridEncoderKind {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Png => GridEncoderKind::Png,
            FormatChoice::Ppm => GridEncoderKind::Ppm,
        }
    }
}

impl Cli {
    fn raw_params(&self) -> RawRenderParams {
        let flags = RawRenderParams {
            width: self.width.clone(),
            height: self.height.clone(),
            center_x: self.center_x.clone(),
            center_y: self.center_y.clone(),
            zoom: self.zoom.clone(),
            palette: self.palette.clone(),
            max_iterations: self.max_iterations.clone(),
        };

        let query = self.query.as_deref().map(parse_query).unwrap_or_default();

        flags.or(query)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configure worker threads")?;
    }

    let limits = RenderLimits {
        max_pixels: cli.max_pixels,
        ..RenderLimits::default()
    };
    let encoder = grid_encoder_factory(cli.format.into());
    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("mandelbrot.{}", encoder.file_extension())));

    let controller = RenderImageController::new(MandelbrotRenderer::new(limits), encoder);
    let response = controller
        .handle(&cli.raw_params())
        .context("render mandelbrot")?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, &response.bytes)
        .with_context(|| format!("write {} '{}'", response.content_type, out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
