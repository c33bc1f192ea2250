mod settings;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use garden_core::{
    Emotion, GardenLayout, GardenStats, LayoutGenerator, LifecycleCounts, LifecycleState,
    MemoryRecord, classify_text, cluster_stats, export_layout, import_records, parse_timestamp,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use settings::Settings;

#[derive(Parser)]
#[command(name = "garden", about = "Memory garden layout engine CLI")]
struct Cli {
    /// TOML config file (defaults to $GARDEN_CONFIG, then built-in values)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct LayoutArgs {
    /// JSON file with an array of memory records ("-" for stdin)
    records: PathBuf,

    /// Seed the placement rng for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate lifecycle states at this instant instead of now
    #[arg(long)]
    now: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a garden layout and print it as JSON
    Layout(LayoutArgs),

    /// Show lifecycle counters, garden coverage and cluster statistics
    Stats(LayoutArgs),

    /// Show the active cluster table
    Zones,

    /// Classify text into an emotion with the keyword rules
    Classify {
        /// Memory text
        text: String,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Layout(args) => cmd_layout(&cli, args),
        Commands::Stats(args) => cmd_stats(&cli, args),
        Commands::Zones => cmd_zones(&cli),
        Commands::Classify { text } => cmd_classify(text),
    }
}

fn load_generator(cli: &Cli) -> Result<LayoutGenerator> {
    Settings::load(cli.config.as_deref())?.generator()
}

fn read_records(path: &Path) -> Result<Vec<MemoryRecord>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read records from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    import_records(&content).with_context(|| format!("failed to parse records from {}", path.display()))
}

fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => parse_timestamp(s).with_context(|| format!("unrecognised --now timestamp '{s}'")),
        None => Ok(Utc::now()),
    }
}

fn run_layout(cli: &Cli, args: &LayoutArgs) -> Result<(LayoutGenerator, GardenLayout, DateTime<Utc>)> {
    let generator = load_generator(cli)?;
    let records = read_records(&args.records)?;
    let now = resolve_now(args.now.as_deref())?;
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    tracing::info!("laying out {} memories", records.len());
    let layout = generator.generate(&records, now, &mut rng);
    if layout.shortfall() > 0 {
        tracing::warn!(
            "placed {} of {} empty slots; garden is congested",
            layout.slots.len(),
            layout.requested_slots
        );
    }
    Ok((generator, layout, now))
}

fn cmd_layout(cli: &Cli, args: &LayoutArgs) -> Result<()> {
    let (_, layout, _) = run_layout(cli, args)?;
    let json = export_layout(&layout).context("failed to serialize layout")?;
    println!("{json}");
    Ok(())
}

fn cmd_stats(cli: &Cli, args: &LayoutArgs) -> Result<()> {
    let (generator, layout, now) = run_layout(cli, args)?;
    let counts = LifecycleCounts::from_layout(&layout);
    let garden = GardenStats::from_layout(&layout);

    println!("evaluated:  {}", now.to_rfc3339());
    println!("memories:   {}", counts.total());
    for state in LifecycleState::ALL {
        println!("{:<11} {}", format!("{}s:", state.as_str()), counts.get(state));
    }
    println!(
        "slots:      {}/{} requested",
        garden.empty_slots, layout.requested_slots
    );
    println!("spots:      {}", garden.total_spots);
    println!("coverage:   {:.1}%", garden.coverage_percent);
    println!("clusters:");
    for c in cluster_stats(&layout, generator.table()) {
        println!(
            "  {:<10} {:<10} flowers={:<3} center=({:.0}, {:.0}) radius={}",
            c.emotion.as_str(),
            c.plant,
            c.count,
            c.center.x,
            c.center.y,
            c.radius
        );
    }
    Ok(())
}

fn cmd_zones(cli: &Cli) -> Result<()> {
    let generator = load_generator(cli)?;
    let config = generator.config();
    println!(
        "garden: {}x{} margin={} spacing={}",
        config.width, config.height, config.margin, config.min_spacing
    );
    for zone in generator.table().zones() {
        let plant = zone.emotion.plant();
        println!(
            "{:<10} ({:.0}, {:.0}) r={:<4} {} {}",
            zone.emotion.as_str(),
            zone.center.x,
            zone.center.y,
            zone.radius,
            plant.emoji,
            plant.name
        );
    }
    Ok(())
}

fn cmd_classify(text: &str) -> Result<()> {
    let emotion: Emotion = classify_text(text);
    let plant = emotion.plant();
    println!("{} {} {}", emotion, plant.emoji, plant.name);
    Ok(())
}
