use clap::{Parser, Subcommand};
use cubespace_layout::{ColorScheme, CubeLayout, FaceletString, LayoutParams, PieceKind};
use cubespace_render::{RenderView, Renderer, TextRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubespace-cli", about = "CLI for cube layout operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Compute and print the cubelet layout for a facelet string
    Layout {
        /// Facelet string; defaults to the solved cube
        #[arg(short, long)]
        cube_string: Option<String>,
        /// Total cube edge length
        #[arg(long, default_value = "2.0")]
        size: f32,
        /// Inter-cubelet spacing as a fraction of one cubelet
        #[arg(long, default_value = "0.0")]
        spacing: f32,
        /// Emit the cubelet records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a facelet string against the classic color scheme
    Validate {
        /// Facelet string to validate
        cube_string: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("cubespace-cli v{}", env!("CARGO_PKG_VERSION"));
            let layout = CubeLayout::build(
                &FaceletString::solved(),
                &ColorScheme::classic(),
                &LayoutParams::default(),
            )?;
            println!(
                "layout: {} cubelets ({} corners, {} edges, {} centers, {} interior)",
                layout.cubelets().len(),
                layout.count_of(PieceKind::Corner),
                layout.count_of(PieceKind::Edge),
                layout.count_of(PieceKind::Center),
                layout.count_of(PieceKind::Interior)
            );
            println!("render: {}", cubespace_render::crate_info());
        }
        Commands::Layout {
            cube_string,
            size,
            spacing,
            json,
        } => {
            let facelets = match cube_string {
                Some(s) => FaceletString::parse(&s)?,
                None => FaceletString::solved(),
            };
            let params = LayoutParams {
                cube_size: size,
                spacing_fraction: spacing,
                ..LayoutParams::default()
            };
            let layout = CubeLayout::build(&facelets, &ColorScheme::classic(), &params)?;
            tracing::debug!("computed layout for {facelets}");

            if json {
                println!("{}", serde_json::to_string_pretty(layout.cubelets())?);
            } else {
                let view = RenderView::centered_on(&layout);
                print!("{}", TextRenderer::new().render(&layout, &view));
            }
        }
        Commands::Validate { cube_string } => {
            let facelets = FaceletString::parse(&cube_string)?;
            let layout = CubeLayout::build(
                &facelets,
                &ColorScheme::classic(),
                &LayoutParams::default(),
            )?;
            println!(
                "OK: {} cubelets ({} corners, {} edges, {} centers)",
                layout.cubelets().len(),
                layout.count_of(PieceKind::Corner),
                layout.count_of(PieceKind::Edge),
                layout.count_of(PieceKind::Center)
            );
        }
    }

    Ok(())
}
