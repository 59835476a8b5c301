mod config;
mod logfile;
mod netif;
mod otp;
mod pidfile;
mod probe;
mod process;
mod util;

use clap::{Parser, Subcommand};
use config::Config;
use pidfile::PidFile;
use probe::SystemProbe;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Companion CLI for a VPN client wrapper: one-time auth codes, PID
/// tracking, tunnel interface probing, and connection logging.
#[derive(Parser, Debug)]
#[command(name = "vpnwrap", version, about)]
struct Cli {
    /// Extra diagnostics on stderr (probe invocations, parse failures)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the tracked client: PID, liveness, uptime, tunnel address
    Status {
        /// Tunnel interface to probe
        #[arg(short, long, default_value = "tun0")]
        interface: String,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the current one-time auth code
    Otp {
        /// Base32 shared secret (default: $VPN_TOTP_SECRET)
        secret: Option<String>,
    },

    /// Append an entry to the wrapper log
    Log {
        /// Entry text
        message: String,

        /// Entry level
        #[arg(short, long, default_value = logfile::DEFAULT_LEVEL)]
        level: String,

        /// Write to connection.log instead of vpn.log
        #[arg(long)]
        connection: bool,
    },

    /// Record a launched client PID in the PID file
    Track {
        /// PID of the freshly launched VPN client
        pid: u32,
    },

    /// Remove the PID file (best effort)
    Clean,
}

/// Snapshot printed by `vpnwrap status`.
#[derive(Debug, Serialize)]
struct StatusReport {
    pid: Option<String>,
    running: bool,
    start_time: Option<String>,
    uptime: Option<String>,
    interface: String,
    address: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?cli, "parsed CLI arguments");

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vpnwrap: {e}");
            2
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    match cli.command {
        Command::Status { interface, json } => cmd_status(&config, &interface, json),

        Command::Otp { secret } => {
            let secret = match secret {
                Some(s) => s,
                None => config::read_env(config::TOTP_SECRET_VAR, None)?,
            };
            println!("{}", otp::generate(&secret)?);
            Ok(0)
        }

        Command::Log {
            message,
            level,
            connection,
        } => {
            let path = if connection {
                config.connection_log()
            } else {
                config.vpn_log()
            };
            logfile::ensure(&path)?;
            let line = logfile::append(&path, &message, &level)?;
            println!("{line}");
            Ok(0)
        }

        Command::Track { pid } => {
            PidFile::from_config(&config).write(pid)?;
            let log = config.connection_log();
            logfile::ensure(&log)?;
            logfile::append(&log, &format!("tracking VPN client pid {pid}"), "INFO")?;
            Ok(0)
        }

        Command::Clean => {
            util::remove_if_exists(&config.pid_file);
            Ok(0)
        }
    }
}

fn cmd_status(
    config: &Config,
    interface: &str,
    json: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let pid = PidFile::from_config(config).read()?;
    let probe = SystemProbe::new();

    let running = pid.as_deref().is_some_and(process::is_running);
    let start = match (&pid, running) {
        (Some(p), true) => process::start_time(&probe, p),
        _ => None,
    };
    let uptime = start.map(|s| util::format_duration(process::uptime_secs(s) as f64));
    let address = netif::interface_address(&probe, interface);

    let report = StatusReport {
        pid,
        running,
        start_time: start.map(|s| s.format("%Y-%m-%d %H:%M:%S").to_string()),
        uptime,
        interface: interface.to_string(),
        address,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_status(&report);
    }

    Ok(if report.running { 0 } else { 1 })
}

fn print_status(report: &StatusReport) {
    match (&report.pid, report.running) {
        (None, _) => println!("no tracked VPN client (PID file absent)"),
        (Some(pid), false) => println!("VPN client pid {pid} is not running (stale PID file)"),
        (Some(pid), true) => {
            println!("VPN client pid {pid} is running");
            if let (Some(start), Some(uptime)) = (&report.start_time, &report.uptime) {
                println!("  started: {start} (up {uptime})");
            }
        }
    }
    match &report.address {
        Some(addr) => println!("  {}: {addr}", report.interface),
        None => println!("  {}: no address", report.interface),
    }
}
