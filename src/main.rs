//! CLI entry point for sprout

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;
use sprout::{
    OutputConfig, Renderer, ScanConfig, ScanLimits, Scanner, print_json, print_lines,
    resolve_root,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine the color choice based on mode and environment.
fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return ColorChoice::Never;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return ColorChoice::Always;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return ColorChoice::Never;
            }
            if std::io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(about = "Draw a directory tree, skipping hidden entries and capping huge trees")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden entries (names starting with '.' or '__')
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Label entries with their path relative to the root
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Descend only N levels deep (0 shows the root alone)
    #[arg(short = 'L', long = "level", visible_short_alias = 'm', visible_alias = "max-depth")]
    level: Option<usize>,

    /// Do not print branch lines. Useful together with -f
    #[arg(short = 'i', long = "no-indent")]
    no_indent: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Stop after admitting this many entries
    #[arg(long = "max-entries", default_value_t = sprout::tree::DEFAULT_MAX_ENTRIES)]
    max_entries: usize,

    /// Stop after examining this many entries, admitted or not
    #[arg(long = "scan-budget", default_value_t = sprout::tree::DEFAULT_SCAN_BUDGET)]
    scan_budget: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log scan details to stderr (SPROUT_LOG overrides the level)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("SPROUT_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let root = resolve_root(&args.path).unwrap_or_else(|e| {
        eprintln!("sprout: {}", e);
        process::exit(1);
    });

    let scan_config = ScanConfig {
        show_all: args.all,
        max_depth: args.level,
        dirs_only: args.dirs_only,
        relative_paths: args.full_path,
        ignore_patterns: args.ignore.clone(),
        limits: ScanLimits {
            max_entries: args.max_entries,
            scan_budget: args.scan_budget,
        },
    };

    let scan = Scanner::new(scan_config).scan(&root).unwrap_or_else(|e| {
        eprintln!("sprout: {}", e);
        process::exit(1);
    });

    let result = if args.json {
        print_json(&scan)
    } else {
        let output_config = OutputConfig {
            color: color_choice(args.color),
            suppress_branch_lines: args.no_indent,
        };
        let lines = Renderer::new(&output_config).render(&scan);
        print_lines(&lines, output_config.color)
    };

    if let Err(e) = result {
        eprintln!("sprout: error writing output: {}", e);
        process::exit(1);
    }
}
