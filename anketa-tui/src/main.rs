//! anketa-tui - Water park questionnaire in the terminal
//!
//! Shows the visitor questionnaire full-screen, checks it on submit and hands
//! the composed message to the system mail client.

use std::io::Write;
use std::path::PathBuf;

use anketa_tui::{
    app::{
        event::{EventHandler, TuiEvent},
        map_key, reduce, AppState, ServiceHandle,
    },
    error::{Result, TuiError},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use clap::Parser;
use libanketa::logging::{LogFormat, LoggingConfig};
use libanketa::mail::{MailComposer, RecordingComposer};
use libanketa::{Config, Locale, MailMessage, MailtoComposer};

#[derive(Parser, Debug)]
#[command(name = "anketa-tui")]
#[command(about = "Water park visitor questionnaire", long_about = None)]
struct Cli {
    /// Config file (defaults to $ANKETA_CONFIG or the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface language (ru or en); overrides the config file
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Log output format (text, json or pretty)
    #[arg(long, default_value = "text")]
    log_format: LogFormat,

    /// Write logs to this file; logs are discarded otherwise
    #[arg(long, env = "ANKETA_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Minimum log level
    #[arg(long, env = "ANKETA_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the composed message instead of opening the mail client
    #[arg(long)]
    dry_run: bool,

    /// Output format for --dry-run (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = e.downcast_ref::<TuiError>().map(TuiError::exit_code).unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if !matches!(cli.format.as_str(), "text" | "json") {
        return Err(TuiError::from(libanketa::AnketaError::InvalidInput(format!(
            "Invalid format: '{}'. Valid options: text, json",
            cli.format
        )))
        .into());
    }

    LoggingConfig::new(cli.log_format, cli.log_level.clone(), cli.verbose)
        .with_file(cli.log_file.clone())
        .init()
        .map_err(|e| anyhow::anyhow!("Failed to open log file: {}", e))?;

    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path).map_err(TuiError::from)?,
        None => Config::load().map_err(TuiError::from)?,
    };
    let locale = cli.locale.unwrap_or(config.form.locale);
    let bounds = config.picker.bounds().map_err(TuiError::from)?;

    let state = AppState::new(locale, chrono::Local::now().date_naive(), bounds);
    tracing::info!(%locale, dry_run = cli.dry_run, "Starting questionnaire");

    if cli.dry_run {
        let services = ServiceHandle::new(RecordingComposer::new(), config.mail);
        run_on_terminal(state, &services)?;
        print_messages(&services.into_composer().into_messages(), &cli.format)?;
    } else {
        let services = ServiceHandle::new(MailtoComposer::new(config.mail.opener.clone()), config.mail);
        if !services.composer().can_send() {
            tracing::warn!(opener = services.composer().opener(), "Mail opener not found on PATH");
        }
        run_on_terminal(state, &services)?;
    }

    Ok(())
}

fn run_on_terminal<C: MailComposer>(state: AppState, services: &ServiceHandle<C>) -> Result<()> {
    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, state, services);
    restore_terminal(terminal)?;

    result
}

fn run_app<C: MailComposer>(
    terminal: &mut Tui,
    mut state: AppState,
    services: &ServiceHandle<C>,
) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        // Keys are mapped here so the services see what they stand for
        let action = match event_handler.next()? {
            TuiEvent::Key(key) => match map_key(&state, &key) {
                Some(action) => action,
                None => continue,
            },
            other => other.into(),
        };

        state = reduce(state, action.clone());
        state = services.perform(state, &action);

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn print_messages(messages: &[MailMessage], format: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    if format == "json" {
        let json = serde_json::to_string_pretty(messages)
            .map_err(|e| anyhow::anyhow!("Failed to serialize messages: {}", e))?;
        writeln!(stdout, "{}", json)?;
        return Ok(());
    }

    for message in messages {
        writeln!(stdout, "To: {}", message.recipients.join(", "))?;
        writeln!(stdout, "Subject: {}", message.subject)?;
        writeln!(stdout)?;
        writeln!(stdout, "{}", message.body)?;
        writeln!(stdout)?;
    }
    Ok(())
}
