//! # digitech
//!
//! Command-line front end for the Digital Tech 101 page.
//!
//! ## Usage
//!
//! ```bash
//! # Render the built-in page to ./index.html
//! digitech render
//!
//! # Render with custom content and the browser module wired in
//! digitech render --content content.json --wasm-module /pkg/digitech_wasm.js --out dist/index.html
//!
//! # Validate a content file and print its section map
//! digitech check --content content.json
//!
//! # Dump the built-in content as an editable starting point
//! digitech export-content > content.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use digitech_site::config::SiteConfig;
use digitech_site::content;
use digitech_site::navigation::UiState;
use digitech_site::types::{ContentRegistry, PageSection};
use digitech_site::{render_page, write_page};

#[derive(Parser, Debug)]
#[command(name = "digitech")]
#[command(about = "Render the Digital Tech 101 landing page to static HTML")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to an HTML file
    Render {
        /// Output file
        #[arg(long, short, default_value = "index.html")]
        out: PathBuf,
        /// Config file (default: ./digitech.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Content registry JSON (overrides the config's `content`)
        #[arg(long)]
        content: Option<PathBuf>,
        /// URL of the wasm-bindgen JS glue (overrides the config's `wasm_module`)
        #[arg(long)]
        wasm_module: Option<String>,
        /// Render with the mobile menu expanded
        #[arg(long)]
        menu_open: bool,
        /// Render as if scrolled past the back-to-top threshold
        #[arg(long)]
        scrolled: bool,
    },
    /// Validate content and print the section map
    Check {
        /// Content registry JSON (default: built-in content)
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Print the built-in content registry as JSON
    ExportContent,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries page data for `check` and `export-content`
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[digitech] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render {
            out,
            config,
            content,
            wasm_module,
            menu_open,
            scrolled,
        } => {
            let (mut config, root) = resolve_config(config.as_deref())?;
            if wasm_module.is_some() {
                config.wasm_module = wasm_module;
            }
            let content_path = content.or_else(|| config.content.as_ref().map(|p| root.join(p)));
            let registry = load_content(content_path.as_deref())?;

            let state = UiState {
                menu_open,
                scrolled_past_threshold: scrolled,
            };
            let html = render_page(&registry, state, &config);
            write_page(&out, &html).with_context(|| format!("rendering {}", out.display()))?;
            info!(
                "Rendered {} ({} bytes, {} sections)",
                out.display(),
                html.len(),
                registry.sections.len()
            );
            Ok(())
        }
        Command::Check { content } => {
            let registry = load_content(content.as_deref())?;
            for section in PageSection::ORDER {
                match registry.descriptor(section) {
                    Some(descriptor) => println!("{:<10} {}", descriptor.href(), descriptor.label),
                    None => println!("{:<10} (not in navigation)", format!("{section:?}")),
                }
            }
            println!("ok: {} navigation entries", registry.sections.len());
            Ok(())
        }
        Command::ExportContent => {
            println!("{}", content::builtin().to_json()?);
            Ok(())
        }
    }
}

/// Explicit config paths must load; the implicit `./digitech.toml` falls
/// back to defaults. Returns the directory relative content paths resolve
/// against.
fn resolve_config(explicit: Option<&Path>) -> Result<(SiteConfig, PathBuf)> {
    match explicit {
        Some(path) => {
            let config = SiteConfig::read(path)?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            debug!(path = %path.display(), "using explicit config");
            Ok((config, root))
        }
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            Ok((SiteConfig::load(&cwd), cwd))
        }
    }
}

fn load_content(path: Option<&Path>) -> Result<ContentRegistry> {
    match path {
        Some(path) => {
            ContentRegistry::load(path).with_context(|| format!("loading content {}", path.display()))
        }
        None => {
            let registry = content::builtin().clone();
            registry.validate()?;
            Ok(registry)
        }
    }
}
