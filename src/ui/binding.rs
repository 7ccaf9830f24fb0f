//! Glue between input events, the counter store and view sinks.

use crate::store::StateStream;
use crate::ui::counter::{CounterAction, CounterState};

/// Button activations the view can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    DecreasePressed,
    IncreasePressed,
}

impl ControlEvent {
    pub fn action(self) -> CounterAction {
        match self {
            ControlEvent::DecreasePressed => CounterAction::Decrease,
            ControlEvent::IncreasePressed => CounterAction::Increase,
        }
    }
}

/// The two visual properties driven by counter state.
pub trait CounterSink {
    /// Text of the value label.
    fn set_value_text(&mut self, text: String);
    /// Whether the loading spinner animates.
    fn set_animating(&mut self, animating: bool);
}

/// Forwards state fields to a sink, skipping fields that did not change.
#[derive(Debug, Default)]
pub struct ViewBinding {
    value: Option<i64>,
    loading: Option<bool>,
}

impl ViewBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `state` into `sink`. Returns true if any sink property was touched.
    pub fn apply<S: CounterSink + ?Sized>(&mut self, state: &CounterState, sink: &mut S) -> bool {
        let mut changed = false;

        if self.value != Some(state.value) {
            self.value = Some(state.value);
            sink.set_value_text(state.value.to_string());
            changed = true;
        }

        if self.loading != Some(state.is_loading) {
            self.loading = Some(state.is_loading);
            sink.set_animating(state.is_loading);
            changed = true;
        }

        changed
    }
}

/// Drive `sink` from `states` until the store stops.
pub async fn bind<S: CounterSink + ?Sized>(states: &mut StateStream<CounterState>, sink: &mut S) {
    let mut binding = ViewBinding::new();
    while let Some(state) = states.next().await {
        binding.apply(&state, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        texts: Vec<String>,
        animating: Vec<bool>,
    }

    impl CounterSink for Recorder {
        fn set_value_text(&mut self, text: String) {
            self.texts.push(text);
        }

        fn set_animating(&mut self, animating: bool) {
            self.animating.push(animating);
        }
    }

    fn state(value: i64, is_loading: bool) -> CounterState {
        CounterState { value, is_loading }
    }

    #[test]
    fn first_state_sets_both_sinks() {
        let mut binding = ViewBinding::new();
        let mut sink = Recorder::default();
        assert!(binding.apply(&state(0, false), &mut sink));
        assert_eq!(sink.texts, vec!["0"]);
        assert_eq!(sink.animating, vec![false]);
    }

    #[test]
    fn unchanged_fields_are_suppressed() {
        let mut binding = ViewBinding::new();
        let mut sink = Recorder::default();
        binding.apply(&state(0, false), &mut sink);
        binding.apply(&state(0, true), &mut sink);
        binding.apply(&state(1, true), &mut sink);
        assert!(!binding.apply(&state(1, true), &mut sink));
        binding.apply(&state(1, false), &mut sink);

        assert_eq!(sink.texts, vec!["0", "1"]);
        assert_eq!(sink.animating, vec![false, true, false]);
    }

    #[test]
    fn negative_values_render_with_sign() {
        let mut binding = ViewBinding::new();
        let mut sink = Recorder::default();
        binding.apply(&state(-12, false), &mut sink);
        assert_eq!(sink.texts, vec!["-12"]);
    }

    #[test]
    fn control_events_map_to_one_action() {
        assert_eq!(ControlEvent::IncreasePressed.action(), CounterAction::Increase);
        assert_eq!(ControlEvent::DecreasePressed.action(), CounterAction::Decrease);
    }
}
