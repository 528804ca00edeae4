//! Price-change outcomes and the operator console capability.

/// Operator console used when a price change needs a human decision.
///
/// Business logic never touches a terminal directly; callers pass an
/// implementation (stdin-backed in the CLI, scripted in tests).
pub trait PriceConsole {
    /// Ask a yes/no question. Returns the raw answer, or `None` once no
    /// further input can arrive.
    fn ask(&mut self, prompt: &str) -> Option<String>;

    /// Deliver a diagnostic line to the operator.
    fn notify(&mut self, message: &str);
}

/// Console that answers every markdown prompt the same way without asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NonInteractive {
    pub accept_markdowns: bool,
}

impl PriceConsole for NonInteractive {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        let answer = if self.accept_markdowns { "y" } else { "n" };
        tracing::debug!(prompt, answer, "answering price prompt non-interactively");
        Some(answer.to_string())
    }

    fn notify(&mut self, message: &str) {
        tracing::info!("{message}");
    }
}

/// What happened to a product's price after a change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceChange {
    /// The new price was higher and was applied.
    Raised,
    /// The new price equals the current one.
    Unchanged,
    /// A lower price was confirmed and applied.
    Lowered,
    /// The new price was zero, negative or not a number; nothing changed.
    RejectedNonPositive,
    /// A lower price was not confirmed; nothing changed.
    Declined,
}

impl PriceChange {
    /// Whether the stored price changed.
    pub fn applied(self) -> bool {
        matches!(self, PriceChange::Raised | PriceChange::Lowered)
    }
}

/// Interpretation of one console answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Answer {
    Yes,
    No,
    Invalid,
}

pub(crate) fn parse_answer(raw: &str) -> Answer {
    match raw.trim() {
        "y" => Answer::Yes,
        "n" => Answer::No,
        _ => Answer::Invalid,
    }
}
