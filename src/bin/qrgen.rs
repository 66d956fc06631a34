use bazar_qr::encoder::format::format_word;
use bazar_qr::render::raster;
use bazar_qr::render::svg::to_svg_string;
use bazar_qr::render::text::to_text;
use bazar_qr::{ECLevel, QrEncoder, RenderOptions, generate_batch, read_symbol, try_generate_symbol};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Version 3-L QR code generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a symbol and write it as SVG, PNG or terminal text
    Generate {
        #[arg(long)]
        text: String,
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long)]
        png: Option<PathBuf>,
        #[arg(long)]
        module_px: Option<usize>,
        #[arg(long)]
        quiet_zone: Option<usize>,
        /// Print the symbol to stdout
        #[arg(long)]
        print: bool,
    },
    /// Show every mask candidate's penalty and the chosen format word
    Inspect {
        #[arg(long)]
        text: String,
    },
    /// Generate, read back, and compare
    Verify {
        #[arg(long)]
        text: String,
    },
    /// Render one PNG per input line
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long)]
        module_px: Option<usize>,
    },
}

fn init_tracing() {
    let filter = if std::env::var_os("QR_DEBUG").is_some() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("QR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate {
            text,
            svg,
            png,
            module_px,
            quiet_zone,
            print,
        } => generate_cmd(&text, svg.as_deref(), png.as_deref(), module_px, quiet_zone, print),
        Command::Inspect { text } => inspect_cmd(&text),
        Command::Verify { text } => verify_cmd(&text),
        Command::Batch {
            input,
            out_dir,
            module_px,
        } => batch_cmd(&input, &out_dir, module_px),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("qrgen: {err}");
            ExitCode::FAILURE
        }
    }
}

fn render_options(module_px: Option<usize>, quiet_zone: Option<usize>) -> RenderOptions {
    let mut options = RenderOptions::default();
    if let Some(px) = module_px {
        options = options.with_module_px(px);
    }
    if let Some(qz) = quiet_zone {
        options = options.with_quiet_zone(qz);
    }
    options
}

fn generate_cmd(
    text: &str,
    svg_path: Option<&Path>,
    png_path: Option<&Path>,
    module_px: Option<usize>,
    quiet_zone: Option<usize>,
    print: bool,
) -> Result<ExitCode, bazar_qr::QrError> {
    let symbol = try_generate_symbol(text)?;
    let options = render_options(module_px, quiet_zone);

    if let Some(path) = svg_path {
        std::fs::write(path, to_svg_string(&symbol, options.quiet_zone))?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = png_path {
        raster::save_png(&symbol, path, &options)?;
        let edge = options.image_size(symbol.size());
        println!("Wrote {} ({edge}x{edge})", path.display());
    }
    if print || (svg_path.is_none() && png_path.is_none()) {
        print!("{}", to_text(&symbol, options.quiet_zone));
    }
    Ok(ExitCode::SUCCESS)
}

fn inspect_cmd(text: &str) -> Result<ExitCode, bazar_qr::QrError> {
    let candidates = QrEncoder::candidates(text.as_bytes())?;
    let symbol = try_generate_symbol(text)?;

    println!("Payload: {} bytes", text.len());
    for candidate in &candidates {
        let marker = if candidate.mask == symbol.mask_pattern() {
            " <"
        } else {
            ""
        };
        println!(
            "  mask {}: penalty={}{}",
            candidate.mask.id(),
            candidate.penalty,
            marker
        );
    }
    println!(
        "Chosen mask {} format word {:#06X}",
        symbol.mask_pattern().id(),
        format_word(ECLevel::L, symbol.mask_pattern())
    );
    println!("Dark modules: {}", symbol.modules().count_dark());
    Ok(ExitCode::SUCCESS)
}

fn verify_cmd(text: &str) -> Result<ExitCode, bazar_qr::QrError> {
    let symbol = try_generate_symbol(text)?;
    let decoded = read_symbol(symbol.modules())?;
    if decoded.data == text.as_bytes() {
        println!(
            "OK: mask {} round-trips {} bytes",
            decoded.mask_pattern.id(),
            decoded.data.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!("MISMATCH: read back {:?}", decoded.content);
        Ok(ExitCode::FAILURE)
    }
}

fn batch_cmd(
    input: &Path,
    out_dir: &Path,
    module_px: Option<usize>,
) -> Result<ExitCode, bazar_qr::QrError> {
    let content = std::fs::read_to_string(input)?;
    let lines: Vec<&str> = content.lines().collect();
    std::fs::create_dir_all(out_dir)?;

    let options = render_options(module_px, None);
    let start = Instant::now();
    let symbols = generate_batch(&lines);
    let elapsed = start.elapsed();

    let mut written = 0usize;
    let mut skipped = 0usize;
    for (i, symbol) in symbols.iter().enumerate() {
        let line_no = i + 1;
        match symbol {
            Some(symbol) => {
                raster::save_png(symbol, out_dir.join(format!("{line_no}.png")), &options)?;
                written += 1;
            }
            None => {
                println!("  line {line_no}: skipped ({} bytes)", lines[i].len());
                skipped += 1;
            }
        }
    }

    println!(
        "Generated {written} symbols, skipped {skipped}, in {:.2}ms",
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(ExitCode::SUCCESS)
}
