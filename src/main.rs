//! Loads an OBJ file and prints what a renderer would receive.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use model::{LoadOptions, LogDiagnostics, Model, TextureFallback};

#[derive(Parser)]
#[command(name = "obj-loader")]
#[command(about = "Validate an OBJ file and build its vertex and index buffers", long_about = None)]
#[command(version)]
struct Cli {
    /// OBJ file to load
    path: PathBuf,

    /// Store `1 - v` for texture coordinates
    #[arg(long)]
    flip_v: bool,

    /// Rescale normals to unit length
    #[arg(long)]
    normalize_normals: bool,

    /// Give corners without a texture index a random coordinate drawn from this seed
    #[arg(long, value_name = "SEED", conflicts_with = "fallback_uv")]
    random_fallback: Option<u64>,

    /// Texture coordinate given to corners without a texture index, each value in [0, 1]
    #[arg(long, num_args = 2, value_names = ["U", "V"], allow_negative_numbers = true)]
    fallback_uv: Option<Vec<f32>>,

    /// Print the vertex and index buffers
    #[arg(long)]
    dump: bool,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_options(&self) -> anyhow::Result<LoadOptions> {
        let texture_fallback = match (self.random_fallback, self.fallback_uv.as_deref()) {
            (Some(seed), _) => TextureFallback::Random { seed },
            (None, Some(&[u, v])) => {
                if ![u, v].iter().all(|value| (0. ..=1.).contains(value)) {
                    anyhow::bail!("--fallback-uv values must be in [0, 1], got {u} {v}");
                }
                TextureFallback::Fixed([u, v])
            }
            _ => TextureFallback::default(),
        };

        Ok(LoadOptions::default()
            .texture_fallback(texture_fallback)
            .flip_texture_v(self.flip_v)
            .normalize_normals(self.normalize_normals))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = cli.load_options()?;
    log::debug!("loading {} with {options:?}", cli.path.display());

    let model = Model::load(&cli.path, &options, &mut LogDiagnostics)
        .with_context(|| format!("Failed to load {}", cli.path.display()))?;

    let layout = model.layout();
    println!("name: {}", model.name().unwrap_or("<unnamed>"));
    println!(
        "layout: {layout:?} ({} floats, {} bytes per vertex)",
        layout.stride(),
        layout.stride_bytes()
    );
    println!("vertices: {}", model.vertex_count());
    println!("triangles: {}", model.triangle_count());

    if cli.dump {
        println!("vertex data:");
        for vertex in model.vertices() {
            println!("  {vertex:?}");
        }
        println!("indices:");
        for triangle in model.vertex_indices().chunks(3) {
            println!("  {triangle:?}");
        }
    }

    Ok(())
}
