use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cmtnorm_lib::comments::{CommentStyle, CommentSyntax};
use cmtnorm_lib::config::{self as cmtnorm_config, Config};
use cmtnorm_lib::exit_codes::ExitStatus;
use cmtnorm_lib::output::OutputFormat;
use cmtnorm_lib::rule::Rule;
use cmtnorm_lib::rules::{all_rules, filter_rules};
use cmtnorm_lib::utils::{LineEnding, normalize_line_ending, restore_line_endings};

#[derive(Parser)]
#[command(author, version, about = "Normalize banner comment blocks in source files", long_about = None)]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Commands,

    /// Show detailed output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report comment blocks that are not normalized
    Check(CheckArgs),
    /// Rewrite comment blocks into their canonical form
    Fmt(FmtArgs),
    /// Initialize a new configuration file
    Init {
        /// Where to write the configuration
        #[arg(default_value = ".cmtnorm.toml")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// File to process, or `-` to read from stdin
    file: String,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comment style preset: slash (//) or hash (##)
    #[arg(long)]
    style: Option<CommentStyle>,

    /// Comment marker overriding the style preset
    #[arg(long)]
    marker: Option<String>,

    /// Quiet mode
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args)]
struct CheckArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format: text (default), concise or json
    #[arg(long)]
    output_format: Option<String>,

    /// Disable colored text output
    #[arg(long)]
    no_color: bool,
}

#[derive(Args)]
struct FmtArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Exit with 1 if the file would be reformatted, without writing it
    #[arg(long)]
    check: bool,

    /// Print the formatted content to stdout instead of writing the file
    #[arg(long)]
    stdout: bool,
}

/// Source text with its line endings normalized to LF for processing
struct Input {
    display_name: String,
    original: String,
    content: String,
    from_stdin: bool,
}

impl InputArgs {
    fn is_stdin(&self) -> bool {
        self.file == "-"
    }

    fn read(&self) -> Result<Input> {
        let original = if self.is_stdin() {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        } else {
            fs::read_to_string(&self.file).with_context(|| format!("Failed to read file {}", self.file))?
        };

        let content = normalize_line_ending(&original, LineEnding::Lf);
        Ok(Input {
            display_name: if self.is_stdin() { "<stdin>".to_string() } else { self.file.clone() },
            original,
            content,
            from_stdin: self.is_stdin(),
        })
    }

    /// Load the config file and apply the command-line overrides
    fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(style) = self.style {
            config.global.style = style;
        }
        if let Some(marker) = &self.marker {
            config.global.marker = Some(marker.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

fn enabled_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    let rules = filter_rules(&all_rules(config), &config.global);
    log::debug!(
        "enabled rules: {}",
        rules.iter().map(|r| r.name()).collect::<Vec<_>>().join(", ")
    );
    rules
}

fn run_check(args: &CheckArgs) -> Result<ExitStatus> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = args.input.config()?;
    let syntax: CommentSyntax = config.comment_syntax();
    let rules = enabled_rules(&config);
    let input = args.input.read()?;

    let format_name = args
        .output_format
        .as_deref()
        .or(config.global.output_format.as_deref())
        .unwrap_or("text");
    let output_format = OutputFormat::from_str(format_name).map_err(|e| anyhow!(e))?;

    let warnings = cmtnorm_lib::lint(&input.content, &rules, &syntax)?;
    let formatter = output_format.create_formatter(!args.no_color);

    // JSON always prints, so consumers get `[]` for a clean file
    if output_format == OutputFormat::Json || !warnings.is_empty() {
        println!("{}", formatter.format_warnings(&warnings, &input.display_name));
    }

    if !args.input.quiet && output_format != OutputFormat::Json {
        if warnings.is_empty() {
            println!("{} No issues found in {}", "Success:".green().bold(), input.display_name);
        } else {
            let fixable = warnings.iter().filter(|w| w.fix.is_some()).count();
            println!(
                "\n{} Found {} issue(s) in {} ({} fixable, run `cmtnorm fmt` to fix)",
                "Issues:".yellow().bold(),
                warnings.len(),
                input.display_name,
                fixable
            );
        }
    }

    Ok(ExitStatus::from_findings(!warnings.is_empty()))
}

fn run_fmt(args: &FmtArgs) -> Result<ExitStatus> {
    let config = args.input.config()?;
    let syntax = config.comment_syntax();
    let rules = enabled_rules(&config);
    let input = args.input.read()?;

    let fixed = cmtnorm_lib::fix(&input.content, &rules, &syntax)?;
    let changed = fixed != input.content;

    if args.check {
        if changed && !args.input.quiet {
            println!("Would reformat: {}", input.display_name);
        }
        return Ok(ExitStatus::from_findings(changed));
    }

    let output = if changed {
        restore_line_endings(&input.original, &fixed)
    } else {
        input.original.clone()
    };

    if input.from_stdin || args.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes()).context("Failed to write to stdout")?;
        stdout.flush().context("Failed to write to stdout")?;
        return Ok(ExitStatus::Clean);
    }

    if changed {
        write_file(Path::new(&input.display_name), &output)?;
        if !args.input.quiet {
            println!("{} {}", "Reformatted".green().bold(), input.display_name);
        }
    } else if !args.input.quiet {
        println!("{} already normalized", input.display_name);
    }

    Ok(ExitStatus::Clean)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file {}", path.display()))
}

fn run_init(path: &Path) -> Result<ExitStatus> {
    cmtnorm_config::create_default_config(path)?;
    println!("Created default configuration file: {}", path.display());
    Ok(ExitStatus::Clean)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Fmt(args) => run_fmt(args),
        Commands::Init { path } => run_init(path),
    };

    match result {
        Ok(status) => status.exit(),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitStatus::Failure.exit();
        }
    }
}
