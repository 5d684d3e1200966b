use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use voxcast_tools::{
    export_obj, format_inspect_pretty, inspect_bytes, inspect_targets, ConfigOverrides,
    ExportConfig, InspectOrder, MeshMode,
};
use world::{Combine, WorldSnapshot};

#[derive(Parser)]
#[command(
    name = "voxcast",
    version,
    about = "Convert voxel world snapshots into surface meshes"
)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mesh the selected masks of a snapshot and write OBJ.
    Convert {
        /// Path to the snapshot tag file.
        input: PathBuf,
        /// Output OBJ path.
        #[arg(short, long)]
        output: PathBuf,
        /// Mask to select (repeatable); replaces the configured masks.
        #[arg(long = "mask")]
        masks: Vec<String>,
        /// How to merge several masks.
        #[arg(long, value_enum)]
        combine: Option<CombineArg>,
        /// Invert the merged mask before meshing.
        #[arg(long, conflicts_with = "no_invert")]
        invert: bool,
        /// Mesh the merged mask as-is.
        #[arg(long)]
        no_invert: bool,
        /// Multiply vertex coordinates by this factor.
        #[arg(long)]
        scale: Option<f64>,
        /// Face generation mode.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Export config JSON; flags take precedence.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Inspect tag file structure and mask occupancy.
    Inspect {
        /// Path to a tag file or a directory of them.
        input: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected files.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected files (after sorting; 10 when sorting by size).
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CombineArg {
    Or,
    And,
}

impl From<CombineArg> for Combine {
    fn from(arg: CombineArg) -> Self {
        match arg {
            CombineArg::Or => Self::Or,
            CombineArg::And => Self::And,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Surface,
    Cubes,
}

impl From<ModeArg> for MeshMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Surface => Self::Surface,
            ModeArg::Cubes => Self::Cubes,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Convert {
            input,
            output,
            masks,
            combine,
            invert,
            no_invert,
            scale,
            mode,
            config,
        } => {
            let base = match &config {
                Some(path) => ExportConfig::load(path).context("load config")?,
                None => ExportConfig::default(),
            };
            let overrides = ConfigOverrides {
                masks,
                combine: combine.map(Combine::from),
                invert: (invert || no_invert).then_some(invert),
                scale,
                mode: mode.map(MeshMode::from),
            };
            let config = overrides.apply(base);
            config.validate()?;

            let snapshot = load_snapshot(&input)?;
            let file = fs::File::create(&output)
                .with_context(|| format!("create output {}", output.display()))?;
            export_obj(&snapshot, &config, BufWriter::new(file))?;
            tracing::info!(path = %output.display(), "wrote obj");
        }
        Command::Inspect {
            input,
            format,
            glob,
            sort,
            limit,
        } => {
            if input.is_dir() {
                let order = match sort {
                    Some(InspectSort::Size) => InspectOrder::LargestFirst,
                    None => InspectOrder::Name,
                };
                for target in inspect_targets(&input, glob.as_deref(), order, limit)? {
                    println!("== {} ({} bytes) ==", target.path.display(), target.size);
                    inspect_file(&target.path, format)?;
                }
            } else {
                inspect_file(&input, format)?;
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("read snapshot {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "read snapshot");
    Ok(bytes)
}

fn load_snapshot(path: &Path) -> Result<WorldSnapshot> {
    let bytes = read_input(path)?;
    let snapshot = WorldSnapshot::from_bytes(&bytes, &tag::Limits::default())
        .with_context(|| format!("load snapshot {}", path.display()))?;
    tracing::info!(
        root = snapshot.name(),
        dims = %snapshot.dims(),
        masks = snapshot.mask_names().count(),
        "loaded snapshot"
    );
    for (name, bytes) in snapshot.rejected_arrays() {
        tracing::debug!(array = name, bytes, "byte array not sized for grid");
    }
    Ok(snapshot)
}

fn inspect_file(path: &Path, format: InspectFormat) -> Result<()> {
    let bytes = read_input(path)?;
    let (root, report) = inspect_bytes(&bytes, &tag::Limits::default())
        .with_context(|| format!("decode {}", path.display()))?;
    match format {
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&root).context("serialize json")?;
            println!("{json}");
        }
        InspectFormat::Pretty => {
            println!("{}", format_inspect_pretty(&report));
        }
    }
    Ok(())
}
