use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use stackit::adapters::FileSessionStore;
use stackit::app::{App, AppMessage};
use stackit::cli::{apply_options, parse_args, version_string, CliCommand, USAGE, VERSION};
use stackit::config::ClientConfig;
use stackit::logging;
use stackit::terminal::{setup_panic_hook, TerminalManager};
use stackit::traits::SessionStore;
use stackit::ui;

/// UI tick; also bounds how late an expired toast disappears.
const TICK: Duration = Duration::from_millis(16);

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key).await;
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg).await;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    // Flags that print and exit run before any terminal setup
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Logout => None,
        CliCommand::RunTui(options) => Some(options),
    };

    color_eyre::install()?;

    let base_config = ClientConfig::from_env();
    if let Err(e) = logging::init(&base_config.log_path()) {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let runtime = tokio::runtime::Runtime::new()?;

    let Some(options) = options else {
        let store = FileSessionStore::in_dir(base_config.home_dir());
        runtime.block_on(store.clear())?;
        tracing::info!("session cleared from the command line");
        println!("Logged out.");
        return Ok(());
    };
    let config = apply_options(base_config, &options);

    setup_panic_hook();
    tracing::info!(api_url = %config.api_url, route = %config.initial_route, "starting stackit {}", VERSION);

    let mut app = App::from_config(&config);
    let mut term = TerminalManager::new()?;

    let result = runtime.block_on(async {
        app.navigate(config.initial_route).await;
        app.refresh_unread();
        run_app(term.terminal(), &mut app).await
    });

    term.restore();
    if let Err(e) = &result {
        tracing::error!("exiting with error: {:?}", e);
    }
    tracing::info!("stackit stopped");
    result
}
