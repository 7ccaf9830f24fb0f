use serde::{Deserialize, Serialize};

/// How mutation schedules of different actions are laid on the store timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DispatchOrder {
    /// Every action starts its schedule on dispatch; schedules overlap.
    /// Steps due at the same instant run in dispatch order.
    #[default]
    Merge,
    /// One schedule at a time, FIFO. The next one starts when the previous
    /// one has emitted its last mutation.
    Serial,
}

impl std::fmt::Display for DispatchOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchOrder::Merge => f.write_str("merge"),
            DispatchOrder::Serial => f.write_str("serial"),
        }
    }
}
