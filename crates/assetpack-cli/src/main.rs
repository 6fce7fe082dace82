//! CLI entry point for assetpack.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `assetpack-app` crate.

use anyhow::Context;
use assetpack_app::{
    ExplainOutput, RunInput, RunOutput, render_markdown, render_text, run_analyze, run_explain,
    run_export, serialize_report, verdict_exit_code,
};
use assetpack_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "assetpack",
    version,
    about = "Validate asset dependency graphs and package them into portable archives"
)]
struct Cli {
    /// Project root; asset paths are relative to it.
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Path to assetpack config TOML, relative to the project root.
    #[arg(long, default_value = "assetpack.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|compat).
    #[arg(long)]
    profile: Option<String>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze every root target and archive the ones that pass.
    Export {
        #[command(flatten)]
        run: RunArgs,

        /// Override the archive output directory.
        #[arg(long)]
        output_dir: Option<String>,

        /// Override the deflate level (0-9).
        #[arg(long)]
        compression_level: Option<u32>,
    },

    /// Analyze every root target without writing archives.
    Analyze {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "assets.library_whitelist") or code (e.g., "unsupported_library").
        identifier: String,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Dependency graph file, or a directory containing `*.deps.json` / `*.deps.toml` files.
    #[arg(long)]
    graph: Utf8PathBuf,

    /// Worker threads across targets.
    #[arg(long, short, default_value = "1")]
    jobs: usize,

    /// Where to write the JSON receipt.
    #[arg(long, default_value = "artifacts/assetpack/report.json")]
    report_out: Utf8PathBuf,

    /// Write a Markdown summary alongside the JSON.
    #[arg(long)]
    write_markdown: bool,

    /// Where to write the Markdown summary (if enabled).
    #[arg(long, default_value = "artifacts/assetpack/summary.md")]
    markdown_out: Utf8PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Export,
    Analyze,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.cmd {
        Commands::Export {
            run,
            output_dir,
            compression_level,
        } => {
            let overrides = Overrides {
                profile: cli.profile.clone(),
                output_dir: output_dir.clone(),
                compression_level: *compression_level,
            };
            cmd_run(&cli, Mode::Export, run, overrides)
        }
        Commands::Analyze { run } => {
            let overrides = Overrides {
                profile: cli.profile.clone(),
                ..Overrides::default()
            };
            cmd_run(&cli, Mode::Analyze, run, overrides)
        }
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn cmd_run(cli: &Cli, mode: Mode, args: &RunArgs, overrides: Overrides) -> anyhow::Result<()> {
    let project_root = cli
        .project_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.project_root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !project_root.is_dir() {
            anyhow::bail!("project root does not exist: {}", project_root);
        }
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_path = project_root.join(&cli.config);
        let cfg_text = match std::fs::read_to_string(&cfg_path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("read config: {}", cfg_path));
            }
        };

        let graph = project_root.join(&args.graph);
        tracing::debug!(project_root = %project_root, graph = %graph, ?mode, "starting run");
        let input = RunInput {
            project_root: &project_root,
            config_text: &cfg_text,
            overrides,
            graph: &graph,
            jobs: args.jobs,
        };

        let output = match mode {
            Mode::Export => run_export(input)?,
            Mode::Analyze => run_analyze(input)?,
        };

        print!("{}", render_text(&output.outcomes));
        write_artifacts(args, &output)?;

        Ok(verdict_exit_code(output.receipt.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("assetpack error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_artifacts(args: &RunArgs, output: &RunOutput) -> anyhow::Result<()> {
    let data = serialize_report(&output.receipt)?;
    write_file(&args.report_out, &data).context("write report json")?;

    if args.write_markdown {
        let md = render_markdown(&output.outcomes);
        write_file(&args.markdown_out, md.as_bytes()).context("write markdown")?;
    }
    Ok(())
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", assetpack_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound { identifier, known } => {
            eprint!("{}", assetpack_app::format_not_found(&identifier, known));
            std::process::exit(1);
        }
    }
}
