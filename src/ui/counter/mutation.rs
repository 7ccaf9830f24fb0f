use crate::ui::mvi::Mutation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMutation {
    IncreaseValue,
    DecreaseValue,
    SetLoading(bool),
}

impl Mutation for CounterMutation {}
