use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use linesep::{Axis, Separator, SeparatorConfig};
use linesep_util::{
    instance_path, load_config, parse_solution, read_instance, render::render_svg,
    solution_path, verify, write_solution,
};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum AxisArg {
    X,
    Y,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Axis {
        match axis {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
        }
    }
}

#[derive(Parser)]
#[command(about = "Separates points with axis-parallel lines")]
struct Cli {
    /// A TOML file with separator settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the maximum number of points per instance.
    #[arg(long, global = true)]
    max_points: Option<usize>,

    /// Overrides the axis whose candidates are tried first.
    #[arg(long, global = true)]
    first_axis: Option<AxisArg>,

    /// Log more (repeat for even more).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solves the numbered instances `instanceNN` in a directory, writing
    /// `greedy_solution_NN` next to each one.
    Run {
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        #[arg(long, default_value_t = 1)]
        first: u32,

        #[arg(long, default_value_t = 99)]
        last: u32,

        /// Skip invalid instances instead of stopping at the first one.
        #[arg(long)]
        keep_going: bool,
    },

    /// Solves a single instance file.
    Solve {
        input: PathBuf,

        /// Where to write the solution; it's printed if this is missing.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also draw the points and lines to this SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Checks that a solution file separates every pair of an instance.
    Verify { instance: PathBuf, solution: PathBuf },
}

impl Cli {
    fn separator_config(&self) -> anyhow::Result<SeparatorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SeparatorConfig::default(),
        };
        if let Some(max_points) = self.max_points {
            config.max_points = max_points;
        }
        if let Some(axis) = self.first_axis {
            config.first_axis = axis.into();
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(
    config: &SeparatorConfig,
    dir: PathBuf,
    first: u32,
    last: u32,
    keep_going: bool,
) -> anyhow::Result<()> {
    let mut solved = 0;
    let mut failed = 0;
    for number in first..=last {
        let path = instance_path(&dir, number);
        let registry = match read_instance(&path, config) {
            Ok(registry) => registry,
            Err(e) if e.is_not_found() => {
                log::info!("no instance file {}, stopping", path.display());
                break;
            }
            Err(e) if keep_going => {
                log::error!("skipping instance {number:02}: {e}");
                failed += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("instance {number:02} is invalid"));
            }
        };

        let separation = Separator::new(registry, config).run();
        if !separation.is_done() {
            log::warn!(
                "instance {number:02}: ran out of candidates with {} connections left",
                separation.remaining()
            );
        }
        write_solution(&solution_path(&dir, number), &separation)?;
        log::info!(
            "solved instance {number:02} with {} lines",
            separation.lines().len()
        );
        solved += 1;
    }

    log::info!("{solved} instances solved, {failed} skipped");
    Ok(())
}

fn solve(
    config: &SeparatorConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    svg: Option<PathBuf>,
) -> anyhow::Result<()> {
    let registry = read_instance(&input, config)?;
    let separation = Separator::new(registry, config).run();
    if !separation.is_done() {
        log::warn!(
            "ran out of candidates with {} connections left",
            separation.remaining()
        );
    }

    match output {
        Some(path) => write_solution(&path, &separation)?,
        None => print!("{}", separation.solution_text()),
    }
    if let Some(path) = svg {
        svg::save(&path, &render_svg(&separation))
            .with_context(|| format!("could not write {}", path.display()))?;
    }
    Ok(())
}

fn check(config: &SeparatorConfig, instance: PathBuf, solution: PathBuf) -> anyhow::Result<()> {
    let registry = read_instance(&instance, config)?;
    let text = std::fs::read_to_string(&solution)
        .with_context(|| format!("could not read {}", solution.display()))?;
    let lines = parse_solution(&text, &solution)?;

    let unseparated = verify(&registry, &lines);
    for (i, j) in &unseparated {
        log::debug!(
            "{:?} {:?} and {:?} {:?} are not separated",
            i,
            registry.point(*i),
            j,
            registry.point(*j)
        );
    }
    if !unseparated.is_empty() {
        bail!(
            "{} pairs of points are not separated by the {} lines",
            unseparated.len(),
            lines.len()
        );
    }
    log::info!("all pairs are separated by the {} lines", lines.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.separator_config()?;

    match cli.command {
        Command::Run {
            dir,
            first,
            last,
            keep_going,
        } => run(&config, dir, first, last, keep_going),
        Command::Solve { input, output, svg } => solve(&config, input, output, svg),
        Command::Verify { instance, solution } => check(&config, instance, solution),
    }
}
