use crate::store::StoreHandle;
use crate::ui::binding::{ControlEvent, CounterSink};
use crate::ui::counter::CounterReactor;

/// Ticks a pressed button stays highlighted.
const PRESS_FLASH_TICKS: u8 = 2;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    should_quit: bool,
    store: StoreHandle<CounterReactor>,
    /// Value label text, fed by the view binding.
    value_text: String,
    /// Spinner animating flag, fed by the view binding.
    animating: bool,
    spinner_frame: usize,
    pressed: Option<(ControlEvent, u8)>,
}

impl App {
    pub fn new(store: StoreHandle<CounterReactor>) -> Self {
        Self {
            should_quit: false,
            store,
            value_text: String::new(),
            animating: false,
            spinner_frame: 0,
            pressed: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// A button was activated: dispatch its action and flash the button.
    pub fn press(&mut self, control: ControlEvent) {
        self.pressed = Some((control, PRESS_FLASH_TICKS));
        self.store.dispatch(control.action());
    }

    pub fn on_tick(&mut self) {
        if self.animating {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
        self.pressed = match self.pressed {
            Some((control, ticks)) if ticks > 1 => Some((control, ticks - 1)),
            _ => None,
        };
    }

    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current spinner glyph, or `None` when idle.
    pub fn spinner(&self) -> Option<&'static str> {
        self.animating.then(|| SPINNER_FRAMES[self.spinner_frame])
    }

    pub fn is_pressed(&self, control: ControlEvent) -> bool {
        matches!(self.pressed, Some((pressed, _)) if pressed == control)
    }
}

impl CounterSink for App {
    fn set_value_text(&mut self, text: String) {
        self.value_text = text;
    }

    fn set_animating(&mut self, animating: bool) {
        if animating && !self.animating {
            self.spinner_frame = 0;
        }
        self.animating = animating;
    }
}
