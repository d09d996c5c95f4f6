//! sysdash - tabbed terminal dashboard for host characteristics.
//!
//! Usage:
//!   sysdash                     # full dashboard, gauges at 500 ms
//!   sysdash --interval-ms 1000  # slower gauges
//!   sysdash --tabs overview,disks
//!   sysdash --theme light --color blue
//!   sysdash --once              # print one snapshot and exit

use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[cfg(target_os = "linux")]
use sysdash::collector::RealFs;
#[cfg(not(target_os = "linux"))]
use sysdash::collector::mock::MockFs;
use sysdash::collector::{
    Collector, CpuPercentTracker, FileSystem, HostInfo, PlatformDisplay, SnapshotSource,
    SysinfoVolumes, SystemSampler, enumerate_volumes, probe_display,
};
use sysdash::config::{Accent, DashboardConfig, Tab, ThemeKind};
use sysdash::fmt::bytes_to_mb;
use sysdash::gauge::{
    GaugeHandle, GaugeKind, GaugeState, MetricFn, cpu_fill_boundary, mem_fill_boundary,
    spawn_gauge,
};
use sysdash::model::MetricsSnapshot;
use sysdash::tui::{App, AppState};

/// Tabbed terminal dashboard for host characteristics.
#[derive(Parser)]
#[command(name = "sysdash", about = "Host characteristics dashboard", version)]
struct Args {
    /// Gauge update interval in milliseconds.
    #[arg(long, default_value = "500", value_name = "MS")]
    interval_ms: u64,

    /// Tabs to enable, comma separated. Default: all.
    #[arg(long, value_delimiter = ',', value_name = "TABS")]
    tabs: Vec<Tab>,

    /// Color theme.
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeKind,

    /// Accent color for labels and gauges.
    #[arg(long = "color", value_enum, default_value = "green")]
    accent: Accent,

    /// Print one metrics snapshot to stdout and exit.
    #[arg(long)]
    once: bool,

    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber.
///
/// Interactive mode defaults to errors only: stderr writes land on the
/// alternate screen and would garble it. `--once` defaults to info.
fn init_logging(verbose: u8, quiet: bool, once: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match (verbose, once) {
            (0, false) => Level::ERROR,
            (0, true) => Level::INFO,
            (1, _) => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sysdash={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Spawns the two gauge updater loops, each owning its own sampler.
fn spawn_gauges<F>(fs: F, proc_path: &str, interval: Duration, ram_gb: u64) -> Vec<GaugeHandle>
where
    F: FileSystem + Clone + 'static,
{
    let cpu_sampler = SystemSampler::new(fs.clone(), proc_path);
    let mut cpu_tracker = CpuPercentTracker::new();
    let cpu_metric: MetricFn = Box::new(move || {
        let times = cpu_sampler.sample_cpu_times()?;
        Ok(match cpu_tracker.update(times) {
            Some(percent) => cpu_fill_boundary(percent),
            // No baseline yet, draw an empty bar
            None => GaugeState { boundary: 100 },
        })
    });

    let mem_sampler = SystemSampler::new(fs, proc_path);
    let mem_metric: MetricFn = Box::new(move || {
        let mem = mem_sampler.sample_memory()?;
        Ok(mem_fill_boundary(bytes_to_mb(mem.available), ram_gb))
    });

    vec![
        spawn_gauge(GaugeKind::Cpu, interval, cpu_metric),
        spawn_gauge(GaugeKind::Memory, interval, mem_metric),
    ]
}

/// Prints a snapshot in `--once` mode.
fn print_snapshot(host: &HostInfo, snapshot: &MetricsSnapshot) {
    println!("OS: {}", host.os);
    println!("CPU: {}", host.cpu_model);
    println!("RAM(GB): {}", host.ram_gb);
    println!("System bitness: {}", host.bitness);
    println!();
    println!("Available RAM(GB): {}", snapshot.available_display());
    println!("RAM usage percent(%): {}", snapshot.mem_percent_display());
    println!("RAM usage(GB): {}", snapshot.used_display());
    println!("Process amount: {}", snapshot.process_count_display());
    println!("CPU usage percent(%): {}", snapshot.cpu_percent_display());
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet, args.once);

    let config = DashboardConfig::default()
        .with_tabs(args.tabs.clone())
        .with_gauge_interval(Duration::from_millis(args.interval_ms.max(1)))
        .with_theme(args.theme)
        .with_accent(args.accent);

    #[cfg(target_os = "linux")]
    let fs = RealFs::new();
    #[cfg(not(target_os = "linux"))]
    let fs = MockFs::typical_system();

    let mut collector = Collector::new(fs.clone(), &args.proc_path);
    let host = HostInfo::detect();

    // First sample: warms the CPU baseline and pins down the gauge
    // denominator.
    let first = collector.sample();
    let ram_gb = first.total_gb.unwrap_or(host.ram_gb);

    if args.once {
        // The CPU percent is a delta of two /proc/stat reads; pause briefly
        // and print the second sample so it carries a real figure.
        thread::sleep(Duration::from_millis(200));
        print_snapshot(&host, &collector.sample());
        return;
    }

    info!("sysdash {} starting", env!("CARGO_PKG_VERSION"));

    let display = probe_display(&PlatformDisplay::new());
    let volumes = enumerate_volumes(&SysinfoVolumes::new());

    let gauges = if config.gauges_enabled() {
        spawn_gauges(fs, &args.proc_path, config.gauge_interval, ram_gb)
    } else {
        Vec::new()
    };

    let mut state = AppState::new(config, host, display, volumes);
    state.snapshot = Some(first);

    let app = App::new(Box::new(collector), gauges, state);
    if let Err(e) = app.run() {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
