// dsaviz: data structures and algorithm steps drawn in the terminal

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dsaviz::config::{Config, DEFAULT_PLAY_INTERVAL_MS};
use dsaviz::headless;
use dsaviz::session::Session;
use dsaviz::ui::App;

#[derive(Parser, Debug)]
#[command(
    name = "dsaviz",
    version,
    about = "Run code against data structures and watch them, and searches over them, drawn in the terminal"
)]
struct Cli {
    /// Script to run as the first cell
    script: Option<PathBuf>,

    /// Run the script without the TUI and print every diagram and algorithm step
    #[arg(long, requires = "script")]
    print: bool,

    /// Delay between auto-played algorithm steps
    #[arg(long, default_value_t = DEFAULT_PLAY_INTERVAL_MS)]
    play_interval_ms: u64,

    /// Log filter (overrides RUST_LOG), e.g. `debug` or `dsaviz=info`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let source = match &cli.script {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?,
        ),
        None => None,
    };

    let mut session = Session::new();
    if cli.print {
        let source = source.unwrap_or_default();
        println!("{}", headless::run_script(&mut session, &source));
        return Ok(());
    }

    let config = Config::default().with_play_interval_ms(cli.play_interval_ms);
    let mut app = App::new(session, config);
    if let Some(source) = source {
        log::info!("running startup script");
        app.submit_code(&source);
    }
    run_tui(&mut app)
}

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    res.context("terminal UI failed")
}
