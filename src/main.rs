//! Folio - A terminal portfolio with a typewriter hero.
//!
//! # Usage
//!
//! ```bash
//! folio
//! folio --content me.json --watch
//! folio --typing-speed 80 --pause 1500 --endpoint https://formspree.io/f/abc
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use folio::app::App;
use folio::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use folio::perf;
use folio::typewriter::{DEFAULT_DELETING_MS, DEFAULT_PAUSE_MS, DEFAULT_TYPING_MS};

/// A terminal portfolio with a typewriter hero
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Portfolio content file (JSON); the built-in content is used otherwise
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Watch the content file for changes and auto-reload
    #[arg(short, long)]
    watch: bool,

    /// Milliseconds per typed character
    #[arg(long, value_name = "MS")]
    typing_speed: Option<u64>,

    /// Milliseconds per deleted character
    #[arg(long, value_name = "MS")]
    deleting_speed: Option<u64>,

    /// Milliseconds a finished word stays on screen
    #[arg(long, value_name = "MS")]
    pause: Option<u64>,

    /// Hosted form endpoint that receives contact messages
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed render debug events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "resolved flags");

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("FOLIO_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize render debug log {}: {}",
            render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    if let Some(path) = &effective.content
        && !path.exists()
    {
        anyhow::bail!("Content file not found: {}", path.display());
    }

    let mut app = App::new()
        .with_content(effective.content.clone())
        .with_watch(effective.watch)
        .with_timings(
            Duration::from_millis(effective.typing_speed.unwrap_or(DEFAULT_TYPING_MS)),
            Duration::from_millis(effective.deleting_speed.unwrap_or(DEFAULT_DELETING_MS)),
            Duration::from_millis(effective.pause.unwrap_or(DEFAULT_PAUSE_MS)),
        )
        .with_endpoint(effective.endpoint.clone())
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
