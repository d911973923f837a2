use anyhow::Result;
use clap::Parser;

use userdeck::app::App;
use userdeck::cli::Cli;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        // This ensures the terminal is usable after a panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        // Call the original panic hook to show the panic message
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Set up logging directory; the TUI owns the terminal so logs go to a file
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("userdeck");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join("userdeck.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "userdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    // Print log location before the TUI starts (visible briefly)
    eprintln!("Logs are being written to: {:?}", log_file);

    userdeck::styles::init_theme(cli.theme_type());

    let mut app = App::new(&cli)?;
    let result = app.run();

    // Flush remaining log lines on normal exit (panic hook handles panics)
    drop(guard);

    result
}
