//! Weather lookup TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_lookup::action::Action;
use weather_lookup::client::WeatherClient;
use weather_lookup::components::{Component, WeatherWidget, WeatherWidgetProps};
use weather_lookup::config::Config;
use weather_lookup::effect::Effect;
use weather_lookup::logging;
use weather_lookup::reducer::reducer;
use weather_lookup::state::{AppState, SPINNER_TICK_MS};

/// Look up current weather for a city (OpenWeatherMap)
#[derive(Parser, Debug)]
#[command(name = "weather-lookup")]
#[command(about = "Look up the current weather for a city")]
struct Args {
    /// City to prefill and look up at startup
    #[arg(long, short)]
    city: Option<String>,

    /// OpenWeatherMap API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Weather service base URL (falls back to OPENWEATHER_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Append diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LookupComponentId {
    Widget,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupContext {
    Main,
}

impl EventRoutingState<LookupComponentId, LookupContext> for AppState {
    fn focused(&self) -> Option<LookupComponentId> {
        Some(LookupComponentId::Widget)
    }

    fn modal(&self) -> Option<LookupComponentId> {
        None
    }

    fn binding_context(&self, _id: LookupComponentId) -> LookupContext {
        LookupContext::Main
    }

    fn default_context(&self) -> LookupContext {
        LookupContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        api_key,
        base_url,
        timeout,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        logging::init(path)?;
    }

    let config = match Config::resolve(api_key, base_url, timeout) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    let client = WeatherClient::new(&config).map_err(io::Error::other)?;
    tracing::info!(base_url = client.base_url(), "weather-lookup started");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial_input = city.clone().unwrap_or_default();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::with_input(initial_input))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        Arc::new(client),
        city.map(Action::LookupSubmit),
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("weather-lookup exited");
    Ok(())
}

struct LookupUi {
    widget: WeatherWidget,
}

impl LookupUi {
    fn new() -> Self {
        Self {
            widget: WeatherWidget::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<LookupComponentId>,
    ) {
        event_ctx.set_component_area(LookupComponentId::Widget, area);

        let props = WeatherWidgetProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.widget.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherWidgetProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .widget
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: Arc<WeatherClient>,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(LookupUi::new()));
    let mut bus: EventBus<AppState, Action, LookupComponentId, LookupContext> = EventBus::new();
    let keybindings: Keybindings<LookupContext> = Keybindings::new();

    let ui_widget = Rc::clone(&ui);
    bus.register(LookupComponentId::Widget, move |event, state| {
        ui_widget.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Handle effects by spawning tasks. All fetches share one task key, so a
/// new lookup cancels the one in flight.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &Arc<WeatherClient>) {
    match effect {
        Effect::FetchWeather { id, city } => {
            tracing::info!(id, city = %city, "starting weather lookup");
            let client = Arc::clone(client);
            ctx.tasks().spawn("weather", async move {
                match client.current_weather(&city).await {
                    Ok(result) => Action::LookupDidLoad { id, result },
                    Err(e) => {
                        tracing::warn!(id, city = %city, error = %e, "weather lookup failed");
                        Action::LookupDidFail {
                            id,
                            reason: e.to_string(),
                        }
                    }
                }
            });
        }
    }
}
