//! ddl-provider CLI - Render migration plans into engine-specific SQL scripts.

mod script;

use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ddl_provider::{
    execute_all, Config, Engine, LogicalType, MigrationPlan, ProviderError, TypeMapper,
};
use tracing::{debug, info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use script::ScriptWriter;

/// Length used when listing fixed-length types.
const SAMPLE_LENGTH: u32 = 255;

#[derive(Parser)]
#[command(name = "ddl-provider")]
#[command(about = "Render migration plans into engine-specific SQL scripts")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database engine (overrides the configuration file)
    #[arg(short, long)]
    engine: Option<String>,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a migration plan into a SQL script
    Generate {
        /// Path to the YAML migration plan
        plan: PathBuf,

        /// Write the script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output the commands as a JSON array
        #[arg(long)]
        output_json: bool,
    },

    /// Show how logical types map onto the selected engine
    Types {
        /// Output the mapping as JSON
        #[arg(long)]
        output_json: bool,
    },

    /// List supported engines and their aliases
    Engines,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), ProviderError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(ProviderError::Config)?;

    let mut config = match cli.config {
        Some(ref path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };
    if let Some(engine) = cli.engine {
        config.provider.engine = engine;
        config.validate()?;
    }

    match cli.command {
        Commands::Generate {
            plan,
            output,
            output_json,
        } => {
            let plan = MigrationPlan::load(&plan)?;
            let provider = config.build_provider()?;

            // Render everything before writing anything.
            let commands = plan.render(&provider)?;

            if output_json {
                let json = serde_json::to_string_pretty(&commands)?;
                match output {
                    Some(path) => std::fs::write(&path, json + "\n")?,
                    None => println!("{}", json),
                }
                return Ok(());
            }

            let out: Box<dyn Write + Send> = match output {
                Some(ref path) => Box::new(BufWriter::new(std::fs::File::create(path)?)),
                None => Box::new(BufWriter::new(std::io::stdout())),
            };
            let mut writer =
                ScriptWriter::new(out, config.batch_separator()?, config.provider.newline.clone());
            let written = execute_all(&mut writer, commands).await?;
            writer.finish()?;

            if let Some(path) = output {
                info!("Wrote {} command(s) to {:?}", written, path);
            }
        }

        Commands::Types { output_json } => {
            let engine = config.engine()?;
            let mapper = engine.type_mapper();

            let rows: Vec<(LogicalType, Option<String>)> = LogicalType::ALL
                .iter()
                .map(|&ty| {
                    let length = ty.requires_length().then_some(SAMPLE_LENGTH);
                    (ty, mapper.map_type(ty, length, None).ok())
                })
                .collect();
            debug!("Listed {} logical types for {}", rows.len(), engine);

            if output_json {
                let map: serde_json::Map<String, serde_json::Value> = rows
                    .into_iter()
                    .map(|(ty, token)| (ty.to_string(), serde_json::json!(token)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                println!("Type mapping for {}:", engine);
                for (ty, token) in rows {
                    println!(
                        "  {:<16} {}",
                        ty.to_string(),
                        token.as_deref().unwrap_or("(unsupported)")
                    );
                }
                println!("\nFixed-length types are shown with length {}.", SAMPLE_LENGTH);
            }
        }

        Commands::Engines => {
            println!("Supported engines:");
            for engine in Engine::ALL {
                println!(
                    "  {:<10} aliases: {:<24} separator: {}",
                    engine.name(),
                    engine.aliases().join(", "),
                    engine.batch_separator()
                );
            }
        }
    }

    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => return Err(format!("invalid verbosity '{}'", other)),
    };

    // Scripts go to stdout, so logs stay on stderr.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => return Err(format!("invalid log format '{}'", other)),
    }

    Ok(())
}
