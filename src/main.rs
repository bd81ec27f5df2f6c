// hanoitty: Tower of Hanoi solver with step-by-step terminal playback

use std::fs::File;
use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use hanoitty::config::{Cli, Config};
use hanoitty::puzzle::{self, format_grouped};
use hanoitty::session::Session;
use hanoitty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = Config::from_cli(&cli);
    log::info!(
        "starting with {} disks, peg {} -> peg {}",
        config.params.disks,
        config.params.start,
        config.params.end
    );

    let session = Session::new(config.params);

    if config.print_only {
        print_solution(&session, &config);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, config.playback, config.labels);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI exited with an error: {err}");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Log to stderr, or to `log_file` while the TUI owns the terminal
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Non-interactive output: step count, then the numbered move list
fn print_solution(session: &Session, config: &Config) {
    let params = session.params();
    println!(
        "{} disks, {} -> {}: {} moves",
        params.disks,
        config.labels.peg_name(params.start),
        config.labels.peg_name(params.end),
        format_grouped(session.min_moves())
    );

    if let Some(solution) = session.solution() {
        if !solution.moves.is_empty() {
            println!("{}", config.labels.move_list_text(&solution.moves));
        }
    } else {
        println!(
            "Move list omitted: only up to {} disks are listed.",
            puzzle::MAX_ANIMATED_DISKS
        );
    }
}
