//! Smoke test for the ZincX pipeline.
//!
//! Loads configuration, opens a console-backed view, dispatches one click and
//! renders a single frame.
//!
//! ```text
//! zincx-test [CONFIG]
//! ```
//!
//! The configuration path is the first argument, or `ZINCX_CONFIG` when no
//! argument is given. Without either, defaults are used. `RUST_LOG` overrides
//! the configured log filter.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use zincx::item::{ButtonItem, ItemArena, TextItem};
use zincx::{
    log, Config, ConsoleBackend, ElapsedTimer, Event, EventManager, GraphicsView, Point, Rect,
    TextAlignment,
};

fn load_config() -> zincx::Result<Config> {
    let path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("ZINCX_CONFIG"));
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.directives()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(config: &Config) -> zincx::Result<()> {
    let timer = ElapsedTimer::new();

    let mut items = ItemArena::new();
    let title = items.insert(
        TextItem::new(Rect::new(10, 2, 40, 1), "ZincX").with_alignment(TextAlignment::Left),
    );
    let button = items.insert(ButtonItem::new(Rect::new(10, 5, 20, 3), "Click Me"));

    let mut view = GraphicsView::from_config(ConsoleBackend::stdout(), config)?;
    view.add_item(title);
    view.add_item(button);

    let mut events = EventManager::new();
    events.register_listener(button, |event| {
        log(&format!("Button received {}", event.event_type()));
        Ok(())
    });

    let click = Event::mouse_click(Point::new(15, 6))
        .with_target(button)
        .with_timestamp(timer.elapsed_millis());
    events.queue_event(click);
    events.dispatch_events(&mut items).into_result()?;
    log(&format!("Button state: {}", items.state(button)?));

    view.render(&items).into_result()?;
    Ok(())
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("zincx-test: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    log("Starting ZincX Test");
    match run(&config) {
        Ok(()) => {
            log("Test Complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(target: "zincx", code = ?err.code(), "{err}");
            ExitCode::FAILURE
        }
    }
}
