use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use accordion::{Accordion, Config, ConversionMode, Prompter};

#[derive(Parser)]
#[command(name = "accordion")]
#[command(about = "Generate accordion HTML from a small Markdown-like dialect")]
struct Cli {
    /// Config file (defaults to ./accordion.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build an accordion interactively and write it to a file
    Generate(GenerateArgs),
    /// Read text with Markdown links and lists on stdin and print the HTML
    Links,
    /// Convert a file (or stdin) and print the HTML fragment
    Convert {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        mode: Option<ConversionMode>,
    },
}

#[derive(clap::Args, Default)]
struct GenerateArgs {
    /// Number of items; asked for when omitted
    #[arg(short = 'n', long)]
    items: Option<u64>,

    /// Accordion identifier; generated when blank
    #[arg(long)]
    id: Option<String>,

    #[arg(short, long, value_enum)]
    mode: Option<ConversionMode>,

    /// Directory for the output file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config)?;

    match cli.command.unwrap_or(Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => generate(args, config),
        Command::Links => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            let text = prompter.multiline(
                "Please insert the text with Markdown links (leave two blank lines to finish): ",
            )?;
            println!("Processed HTML Links:");
            println!("{}", accordion::convert_with_mode(&text, ConversionMode::Links));
            Ok(())
        }
        Command::Convert { input, mode } => {
            let text = match input {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    io::stdin().read_to_string(&mut text)?;
                    text
                }
            };
            let mode = mode.unwrap_or(config.answer.mode);
            println!("{}", accordion::convert_with_mode(&text, mode));
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(&path)? {
            Some(config) => Ok(config),
            None => bail!("config file {} not found", path.display()),
        },
        None => Ok(Config::load_from_path(Config::default_path())?
            .unwrap_or_else(Config::compiled_default)),
    }
}

fn generate(args: GenerateArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(mode) = args.mode {
        config.answer.mode = mode;
    }
    if let Some(dir) = args.output_dir {
        config.output.directory = dir;
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let count = match args.items {
        Some(0) => bail!("the number of items must be a positive integer"),
        Some(count) => count,
        None => prompter.positive_integer("How many items will this accordion have? ")?,
    };

    let unique_id = match args.id {
        Some(id) => id,
        None => prompter.line(
            "Please enter a unique identifier for the accordion (leave blank for auto-generated): ",
        )?,
    };
    let unique_id = match unique_id.trim() {
        "" => accordion::generate_unique_id(config.output.id_length),
        id => id.to_string(),
    };
    log::info!("generating accordion {unique_id} with {count} items");

    let items = prompter.collect_items(count, &config)?;
    let html = Accordion::new(unique_id.as_str(), items)?.render_with_config(&config.images);

    let path = accordion::write_accordion(
        &config.output.directory,
        &unique_id,
        &html,
        &config.output,
    )?;
    println!("Accordion HTML has been written to {}", path.display());
    Ok(())
}
