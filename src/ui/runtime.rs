use crate::config::Config;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::store;
use crate::ui::app::App;
use crate::ui::binding::ViewBinding;
use crate::ui::counter::CounterReactor;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use tokio::time::MissedTickBehavior;

/// Run the interactive counter until the user quits or shutdown is signaled.
pub async fn run(config: &Config, shutdown: &ShutdownCoordinator) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let store = store::spawn(
        CounterReactor::new(config.reactor.delay()),
        config.reactor.ordering,
        shutdown.handle(),
    );
    let mut states = store.subscribe();
    let mut app = App::new(store);
    let mut binding = ViewBinding::new();
    let mut events = EventHandler::new(shutdown.handle());
    let mut ticker = tokio::time::interval(config.ui.tick_rate());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let signal = shutdown.handle();

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            _ = signal.wait() => break Ok(()),
            state = states.next() => match state {
                Some(state) => {
                    binding.apply(&state, &mut app);
                }
                None => break Ok(()),
            },
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Resize) => {}
                None => break Ok(()),
            },
            _ = ticker.tick() => app.on_tick(),
        }
    };

    shutdown.signal();
    shutdown.advance(ShutdownPhase::StoppingInput);
    events.stop().await;
    shutdown.advance(ShutdownPhase::RestoringTerminal);
    drop(guard);
    shutdown.advance(ShutdownPhase::Complete);
    result
}
