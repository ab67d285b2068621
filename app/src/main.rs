use std::{io, path::PathBuf};

use clap::Parser;
use common::{
    config::{Config, ScaleMode},
    stats::{Direction, StatGroup},
};
use eyre::{Result, WrapErr};
use fio::Aggregation;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const MODULES: &[&str] = &["fio_latency_plot", "fio_latency", "fio", "common"];

/// Compare fio read/write latencies of a baseline and a candidate device
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// fio JSON report (fio --output-format=json)
    report: PathBuf,
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Jobs using this filename are the baseline
    #[arg(short, long)]
    target: Option<String>,
    /// Directory the plot is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Plot file name prefix, followed by a timestamp
    #[arg(short, long)]
    prefix: Option<String>,
    /// shared or fixed
    #[arg(long)]
    scale_mode: Option<ScaleMode>,
    #[arg(long)]
    baseline_label: Option<String>,
    #[arg(long)]
    candidate_label: Option<String>,
    /// Extra tracing filter directives, ie. fio=debug
    #[arg(short, long)]
    log: Vec<String>,
}

impl Cli {
    /// Defaults, overridden by the config file, overridden by flags
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .wrap_err_with(|| format!("Load config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(target) = &self.target {
            config.target = target.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.plot.output_dir = output_dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.plot.prefix = prefix.clone();
        }
        if let Some(scale_mode) = self.scale_mode {
            config.plot.scale_mode = scale_mode;
        }
        if let Some(label) = &self.baseline_label {
            config.labels.baseline = label.clone();
        }
        if let Some(label) = &self.candidate_label {
            config.labels.candidate = label.clone();
        }
        Ok(config)
    }
}

fn init_logging(directives: &[String]) -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let mut env_filter = EnvFilter::new(format!("fio_latency_plot={log_level}"));
    for log in directives {
        env_filter = env_filter.add_directive(log.parse()?);
    }
    for module in MODULES {
        if !directives.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_writer(io::stderr)
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .init();
    Ok(())
}

fn print_summary(group: &StatGroup, label: &str) {
    for direction in [Direction::Read, Direction::Write] {
        match group.series(direction).summary() {
            Some(summary) => println!("{label} {direction}: {summary}"),
            None => println!("{label} {direction}: no samples"),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    info!("Baseline target is {}", config.target);

    let report = fio::load_report(&cli.report)
        .wrap_err_with(|| format!("Load fio report {}", cli.report.display()))?;
    let Aggregation {
        baseline,
        candidate,
        processed,
    } = fio::aggregate(&report, &config.target, &config.labels, &mut io::stdout().lock())?;
    drop(report);
    println!("{processed}");

    print_summary(&baseline, &config.labels.baseline);
    print_summary(&candidate, &config.labels.candidate);

    let path = fio_latency::render(&baseline, &candidate, &config.labels, &config.plot)
        .wrap_err("Render latency plot")?;
    println!("Plot written to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log)?;

    if let Err(err) = run(&cli) {
        error!("{err:#}");
        return Err(err);
    }
    Ok(())
}
