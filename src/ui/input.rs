use crate::ui::app::App;
use crate::ui::binding::ControlEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    if let Some(control) = control_for(key) {
        app.press(control);
    }
}

/// Map a key to the button it activates, if any.
pub fn control_for(key: KeyEvent) -> Option<ControlEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Right => {
            Some(ControlEvent::IncreasePressed)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') | KeyCode::Left => {
            Some(ControlEvent::DecreasePressed)
        }
        _ => None,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') => !key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(ch) => {
            key.modifiers.contains(KeyModifiers::CONTROL) && ch.eq_ignore_ascii_case(&'c')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shutdown::ShutdownCoordinator;
    use crate::store::{self, DispatchOrder};
    use crate::ui::counter::CounterReactor;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn plus_and_minus_map_to_buttons() {
        assert_eq!(
            control_for(key(KeyCode::Char('+'), KeyModifiers::NONE)),
            Some(ControlEvent::IncreasePressed)
        );
        assert_eq!(
            control_for(key(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Some(ControlEvent::IncreasePressed)
        );
        assert_eq!(
            control_for(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(ControlEvent::DecreasePressed)
        );
        assert_eq!(control_for(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(control_for(key(KeyCode::Char('k'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[tokio::test]
    async fn release_events_are_ignored() {
        let shutdown = ShutdownCoordinator::new();
        let store = store::spawn(CounterReactor::default(), DispatchOrder::Merge, shutdown.handle());
        let mut app = App::new(store);

        let mut release = key(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert!(!app.should_quit());

        handle_key(&mut app, key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit());
    }
}
