use clap::Parser;
use roster::Frontend;
use roster::console::ConsolePrompter;
use roster::core::Controller;
use roster::core::config::{self, CliOverrides};
use roster::core::storage::RosterFile;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster", about = "Keep a roster of users in a flat text file")]
struct Args {
    /// Presentation layer to use
    #[arg(short, long, value_enum)]
    frontend: Option<Frontend>,

    /// Roster file to load at startup and save on quit
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let mut startup_warnings = Vec::new();
    let file_config = config::load_config().unwrap_or_else(|e| {
        startup_warnings.push(format!("{e}; using defaults"));
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            frontend: args.frontend,
            data_file: args.data_file,
        },
    );
    startup_warnings.extend(resolved.warnings.iter().cloned());

    // Initialize file logger; the terminal belongs to the front end
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "roster: cannot open log file {}: {e}",
            resolved.log_file.display()
        ),
    }

    // Config problems happen before the logger exists; report them now
    for warning in &startup_warnings {
        eprintln!("roster: {warning}");
        log::warn!("{}", warning);
    }

    log::info!("Roster starting up with {:?}", resolved);

    let mut controller =
        Controller::new(RosterFile::new(&resolved.data_file)).with_page_size(resolved.page_size);

    match resolved.frontend {
        Frontend::Tui => roster::tui::run(&mut controller),
        Frontend::Console => {
            let mut prompter = ConsolePrompter::stdio();
            controller.load(&mut prompter);
            controller.run(&mut prompter);
            Ok(())
        }
    }
}
