#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

mod commands;
mod logging;

use clap::Parser;
use esmkit_core::Config;
use miette::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "esmkit")]
#[command(author, version, about = "Inspect ES module specifiers, versions and source trees", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Classify specifiers as remote, local or bare
    Classify {
        /// Specifiers to classify
        #[arg(required = true)]
        specifiers: Vec<String>,
    },

    /// Match version patterns against a path or version string
    Match {
        /// Request path, package reference or version
        input: String,
    },

    /// Compare two exact semantic versions
    Compare {
        a: String,
        b: String,
    },

    /// Strip a module extension (and optionally a `:line:col` suffix)
    StripExt {
        name: String,

        /// Also strip a trailing `.js:LINE:COL` location
        #[arg(long)]
        loc: bool,
    },

    /// List source files under a directory, skipping node_modules
    Scan {
        /// Directory to scan (relative to --cwd)
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Only keep files with one of these suffixes (repeatable)
        #[arg(long = "ext", value_name = "SUFFIX")]
        exts: Vec<String>,

        /// Only keep files matching this glob
        #[arg(long)]
        glob: Option<String>,

        /// Only keep module files (.js, .ts, .tsx, ...)
        #[arg(long, conflicts_with_all = ["exts", "glob"])]
        modules: bool,

        /// Prefix prepended to every reported path
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Encode text as an unpadded url-safe base64 token
    Encode { text: String },

    /// Decode an url-safe base64 token back to text
    Decode { token: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = Config::new(cwd)
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json);

    logging::init(config.verbosity, config.json_logs);

    let json = cli.json;
    match cli.command {
        Some(Commands::Version) | None => commands::version::run(),
        Some(Commands::Classify { specifiers }) => {
            let _guard = tracing::info_span!("classify", cmd = "classify").entered();
            commands::classify::run(&specifiers, json)
        }
        Some(Commands::Match { input }) => {
            let _guard = tracing::info_span!("match", cmd = "match").entered();
            commands::pattern::run(&input, json)
        }
        Some(Commands::Compare { a, b }) => {
            let _guard = tracing::info_span!("compare", cmd = "compare").entered();
            commands::compare::run(&a, &b, json)
        }
        Some(Commands::StripExt { name, loc }) => {
            let _guard = tracing::info_span!("strip-ext", cmd = "strip-ext").entered();
            commands::strip::run(&name, loc, json)
        }
        Some(Commands::Scan {
            root,
            exts,
            glob,
            modules,
            prefix,
        }) => {
            let root = config.resolve_path(&root);
            let _guard =
                tracing::info_span!("scan", cmd = "scan", root = %root.display()).entered();
            let filter = commands::scan::ScanFilter::from_args(exts, glob, modules);
            commands::scan::run(&root, &prefix, filter, json)
        }
        Some(Commands::Encode { text }) => {
            let _guard = tracing::info_span!("encode", cmd = "encode").entered();
            commands::token::encode(&text, json)
        }
        Some(Commands::Decode { token }) => {
            let _guard = tracing::info_span!("decode", cmd = "decode").entered();
            commands::token::decode(&token, json)
        }
    }
}
