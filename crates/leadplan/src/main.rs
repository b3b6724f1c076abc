use clap::Parser;
use leadplan::cli::{self, Command};
use leadplan::data::storage::DataDirectory;
use leadplan::{App, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leadplan")]
#[command(about = "Lead generation budget allocator and ROI projector")]
struct Args {
    /// Path to the data directory (default: ~/.leadplan/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    if let Some(command) = &args.command {
        let output = cli::execute(command, &DataDirectory::new(data_dir))?;
        println!("{output}");
        return Ok(());
    }

    let mut app = App::with_data_dir(data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
