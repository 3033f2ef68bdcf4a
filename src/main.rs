use chrono::{Local, NaiveDateTime};
use clap::Parser;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use jotcal::application::entries::{CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use jotcal::application::{
    init::init, ConfigService, EntryChanges, EntryService, MonthCalendarService, NewEntry, Session,
};
use jotcal::cli::{format_calendar, format_entry, format_entry_list, Cli, Commands};
use jotcal::domain::{EntryId, MonthToken};
use jotcal::error::JotcalError;
use jotcal::infrastructure::{FileSystemRepository, JournalRepository};
use std::path::Path;

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<LoggerHandle, JotcalError> {
    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(path) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(path)?);
    }

    Ok(logger.start()?)
}

fn run(cli: Cli) -> Result<(), JotcalError> {
    let _logger = init_logging(cli.log_file.as_deref())?;
    let user = cli.user.as_deref();
    let now = Local::now().naive_local();

    // The calendar of the current month is the home view
    let command = cli.command.unwrap_or(Commands::Calendar { month: None });

    match command {
        Commands::Init { path, owner } => {
            let config = init(&path, owner)?;
            println!("Initialized jotcal journal at {}", path.display());
            println!("Owner: {}", config.owner);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo.clone());

            if list {
                let config = service.list()?;
                println!("owner = {}", config.owner);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Changing the owner is an owner-only operation
                    Session::login(&repo.load_config()?, user)?;
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: jotcal config [--list | <key> [<value>]]");
                println!("Valid keys: owner, created");
                Ok(())
            }
        }
        command => {
            let repo = FileSystemRepository::discover()?;
            let session = Session::login(&repo.load_config()?, user)?;
            run_journal_command(command, repo, &session, now)
        }
    }
}

fn run_journal_command(
    command: Commands,
    repo: FileSystemRepository,
    session: &Session,
    now: NaiveDateTime,
) -> Result<(), JotcalError> {
    match command {
        Commands::Calendar { month } => {
            let service = MonthCalendarService::new(repo, session);
            let page = service.execute(month.as_deref(), now.date())?;
            print!("{}", format_calendar(&page));
            Ok(())
        }
        Commands::List { month, limit } => {
            let month = month.as_deref().map(MonthToken::parse).transpose()?;
            let service = EntryService::new(repo, session);
            let entries = service.list(month, limit)?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let service = EntryService::new(repo, session);
            print!("{}", format_entry(&service.show(EntryId(id))?));
            Ok(())
        }
        Commands::New {
            title,
            content,
            date,
        } => {
            let mut service = EntryService::new(repo, session);
            let new_entry = NewEntry {
                title,
                content,
                date_hint: date,
            };
            let entry = service.create(new_entry, now)?;
            println!("{}", CREATED_MESSAGE);
            println!("#{} {}", entry.id, entry.title);
            Ok(())
        }
        Commands::Edit { id, title, content } => {
            let mut service = EntryService::new(repo, session);
            let entry = service.update(EntryId(id), EntryChanges { title, content })?;
            println!("{}", UPDATED_MESSAGE);
            println!("#{} {}", entry.id, entry.title);
            Ok(())
        }
        Commands::Delete { id } => {
            let mut service = EntryService::new(repo, session);
            service.delete(EntryId(id))?;
            println!("{}", DELETED_MESSAGE);
            Ok(())
        }
        // Handled in run() without a session
        Commands::Init { .. } | Commands::Config { .. } => Ok(()),
    }
}
