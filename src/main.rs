use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use ratatui::DefaultTerminal;

use conq::engine::{DemoEngine, Engine, spawn_worker};
use conq::{App, config};

/// Interactive command console with bracket-placeholder autocomplete.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run a single command, print its result, and exit
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    command: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Log lines would corrupt the alternate screen; debug builds only, and
    // expected to be redirected (RUST_LOG=debug conq 2>conq.log).
    #[cfg(debug_assertions)]
    let _ = env_logger::try_init();

    let cli = Cli::parse();

    if let Some(command) = cli.command {
        return run_once(&command);
    }

    let config = config::load(cli.config.as_deref())?;

    let terminal = ratatui::init();
    let _ = execute!(std::io::stdout(), EnableMouseCapture);
    let result = run(terminal, App::new(config, spawn_worker(DemoEngine::new())));
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// One-shot mode: no terminal UI, no worker thread, plain text out.
fn run_once(command: &str) -> Result<()> {
    let mut engine = DemoEngine::new();
    match engine.command(command) {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(err) => {
            eprintln!("! {err}");
            std::process::exit(1);
        }
    }
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    app.start();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Short poll so engine responses and host signals are drained
        // promptly even when the keyboard is idle.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        app.drain_engine();
        app.drain_host_signals();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
