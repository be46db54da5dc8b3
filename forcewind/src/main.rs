use anyhow::Context;
use clap::{Parser, Subcommand};
use forcewind_lib::force_generate::{self, GenerateConfig, Mode};
use forcewind_lib::style::force_css::InputSource;
use log::info;
use std::path::PathBuf;

const FORCEWIND_INTRO: &str = r#"
    forcewind - utility classes, forced past the cascade
"#;

#[derive(Parser)]
#[command(name = "forcewind")]
#[command(about = "Rewrite generated utility-class CSS into !important override rules")]
struct Args {
    /// Generated utility CSS to read, `-` for stdin.
    #[arg(short, long, global = true, default_value = "-")]
    input: String,

    /// Directory the output files are written under.
    #[arg(short, long, global = true, default_value = ".")]
    out_dir: PathBuf,

    /// Log debug details.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sorted distinct values of one category (PropertyValues.json).
    Values {
        /// Category prefix to filter, e.g. grid-cols, gap, m, p.
        #[arg(short, long)]
        category: String,
    },
    /// Override rules for one category (tailwind-classes/tw-<category>.css).
    Prefab {
        /// Category prefix to filter, e.g. gap, m, p.
        #[arg(short, long)]
        category: String,
    },
    /// One CSS file per category of the full taxonomy.
    Categories,
    /// One JSON file per category of the compact taxonomy.
    CategoriesJson,
    /// Every class in one JSON object (tailwind-classes.json).
    Json,
    /// Every class in one multi-line stylesheet (tailwind-classes.css).
    Css,
}

impl From<Command> for Mode {
    fn from(command: Command) -> Self {
        match command {
            Command::Values { category } => Mode::Values { category },
            Command::Prefab { category } => Mode::Prefab { category },
            Command::Categories => Mode::Categories,
            Command::CategoriesJson => Mode::CategoriesJson,
            Command::Json => Mode::Json,
            Command::Css => Mode::Css,
        }
    }
}

fn main() {
    // parse the args given in terminal
    let args: Args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if !args.quiet {
        println!("{}", FORCEWIND_INTRO);
    }

    if let Err(error) = run(args) {
        eprintln!("forcewind error: {error:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = GenerateConfig {
        input: InputSource::from_arg(&args.input),
        out_dir: args.out_dir,
    };
    let mode = Mode::from(args.command);

    let written = force_generate::generate(&config, &mode)
        .with_context(|| format!("{:?} run failed", mode))?;

    info!(
        "Generated {} file(s) under {}",
        written.len(),
        config.out_dir.display()
    );
    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
