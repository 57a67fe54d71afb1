//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_snapshot_adapter::JsonSnapshotAdapter;
use crate::domain::config::SignalConfig;
use crate::domain::error::SigtraderError;
use crate::domain::signal::evaluate;
use crate::ports::snapshot_port::SnapshotPort;

#[derive(Parser, Debug)]
#[command(name = "sigtrader", about = "Market snapshot signal evaluator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a snapshot and print the decision as JSON
    Evaluate {
        #[arg(short, long)]
        snapshot: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Validate a snapshot file without evaluating it
    Validate {
        #[arg(short, long)]
        snapshot: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the resolved signal thresholds
    ShowConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Start the web server
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Evaluate {
            snapshot,
            config,
            pretty,
        } => run_evaluate(&snapshot, config.as_ref(), pretty),
        Command::Validate { snapshot, config } => run_validate(&snapshot, config.as_ref()),
        Command::ShowConfig { config } => run_show_config(config.as_ref()),
        Command::Serve { config } => run_serve(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = SigtraderError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Resolve the threshold set: defaults, overridden by an INI file when one
/// is given.
pub fn load_signal_config(config_path: Option<&PathBuf>) -> Result<SignalConfig, ExitCode> {
    match config_path {
        None => Ok(SignalConfig::default()),
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            let adapter = load_config(path)?;
            SignalConfig::from_config_port(&adapter).map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::from(&e)
            })
        }
    }
}

fn run_evaluate(snapshot_path: &PathBuf, config_path: Option<&PathBuf>, pretty: bool) -> ExitCode {
    let config = match load_signal_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    eprintln!("Loading snapshot from {}", snapshot_path.display());
    let adapter = JsonSnapshotAdapter::new(snapshot_path);
    let snapshot = match adapter.fetch() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let decision = match evaluate(&snapshot, &config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let json = if pretty {
        serde_json::to_string_pretty(&decision)
    } else {
        serde_json::to_string(&decision)
    };
    match json {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize decision: {e}");
            ExitCode::from(1)
        }
    }
}

fn run_validate(snapshot_path: &PathBuf, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_signal_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    eprintln!("Validating snapshot: {}", snapshot_path.display());
    let adapter = JsonSnapshotAdapter::new(snapshot_path);
    let snapshot = match adapter.fetch() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match snapshot.validate(&config) {
        Ok(()) => {
            eprintln!("Snapshot is valid");
            eprintln!("  prices_1h:   {} points", snapshot.prices_1h.len());
            eprintln!("  prices_4h:   {} points", snapshot.prices_4h.len());
            eprintln!("  prices_15m:  {} points", snapshot.prices_15m.len());
            eprintln!("  candles_15m: {} candles", snapshot.candles_15m.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_show_config(config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_signal_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    println!("ma_fast_period      = {}", config.ma_fast_period);
    println!("ma_slow_period      = {}", config.ma_slow_period);
    println!("rsi_period          = {}", config.rsi_period);
    println!("level_proximity_pct = {}", config.level_proximity_pct);
    println!("rsi_midline         = {}", config.rsi_midline);
    println!("rsi_overbought      = {}", config.rsi_overbought);
    println!("rsi_oversold        = {}", config.rsi_oversold);
    println!("min_risk_reward     = {}", config.min_risk_reward);
    ExitCode::SUCCESS
}

fn run_serve(config_path: &PathBuf) -> ExitCode {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::build_router;
        use crate::ports::config_port::ConfigPort;
        use std::net::SocketAddr;
        use std::sync::Arc;

        eprintln!("Loading config from {}", config_path.display());
        let adapter = match load_config(config_path) {
            Ok(c) => c,
            Err(code) => return code,
        };

        let config = match SignalConfig::from_config_port(&adapter) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let snapshot_file = match adapter.get_string("web", "snapshot_path") {
            Some(p) => p,
            None => {
                let err = SigtraderError::ConfigMissing {
                    section: "web".into(),
                    key: "snapshot_path".into(),
                };
                eprintln!("error: {err}");
                return (&err).into();
            }
        };

        let addr: SocketAddr = adapter
            .get_string("web", "listen")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse()
            .unwrap_or_else(|_| "127.0.0.1:3000".parse().unwrap());

        eprintln!("Starting web server on {}", addr);

        let state = crate::adapters::web::AppState {
            snapshot_port: Arc::new(JsonSnapshotAdapter::new(&snapshot_file))
                as Arc<dyn SnapshotPort + Send + Sync>,
            config,
        };

        let router = build_router(state);

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                eprintln!("error: failed to start runtime: {e}");
                return ExitCode::from(1);
            }
        };

        runtime.block_on(async {
            let listener = match tokio::net::TcpListener::bind(addr).await {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error: failed to bind {addr}: {e}");
                    return ExitCode::from(1);
                }
            };
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("error: server failed: {e}");
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        })
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = config_path;
        eprintln!("error: web feature is required for serve");
        ExitCode::from(1)
    }
}
