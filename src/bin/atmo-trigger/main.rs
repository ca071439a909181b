mod args;
mod replay;

use std::{fs::File, process::ExitCode};

use anyhow::{Context as _, Result, anyhow};
use args::{Args, LogFormat};
use atmo::atmo::{Atmo, Driver, ReportSender, Trigger};
use clap::Parser as _;
use tokio::{
    io::{AsyncBufReadExt as _, BufReader, stdin},
    sync::mpsc::{self, UnboundedReceiver},
};
use tokio_stream::{StreamExt as _, wrappers::LinesStream};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::replay::ReplayDriver;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.log_format).context("failed to initialize tracing")?;

    let file = File::open(&args.replay_file)
        .with_context(|| format!("failed to open replay file: {:?}", args.replay_file))?;
    let mut driver = ReplayDriver::new(file).context("failed to load replay file")?;

    let mut atmo = Atmo::new(&mut driver, &args.name).with_timezone(args.timezone);
    info!(adapter = %atmo.name(), connected = atmo.is_connected(), "waiting for triggers");

    let (report_to, mut reports) = mpsc::unbounded_channel();
    let mut lines = LinesStream::new(BufReader::new(stdin()).lines());

    while let Some(line) = lines.next().await {
        let line = line.context("failed to read trigger from stdin")?;
        let Some(trigger) = parse_trigger(&line, &report_to) else {
            continue;
        };

        let report = handle(&mut atmo, trigger, &mut reports).await?;
        if report.error {
            warn!(trigger_target = %report.target, action = %report.action, "trigger failed");
            eprintln!("{}", report.message);
        } else {
            println!("{}", report.message);
        }
    }

    Ok(())
}

/// Dispatches `trigger` and waits for the report it produces.
async fn handle<D: Driver>(
    atmo: &mut Atmo<'_, D>,
    trigger: Trigger,
    reports: &mut UnboundedReceiver<Trigger>,
) -> Result<Trigger> {
    atmo.dispatch(trigger);

    reports
        .recv()
        .await
        .ok_or_else(|| anyhow!("report channel closed"))
}

/// `<target> [action]`; blank lines are skipped.
fn parse_trigger(line: &str, report_to: &ReportSender) -> Option<Trigger> {
    let mut parts = line.split_whitespace();
    let target = parts.next()?;
    let action = parts.next().unwrap_or_default();

    Some(Trigger::new(target, action, report_to.clone()))
}

fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }?;

    Ok(())
}
