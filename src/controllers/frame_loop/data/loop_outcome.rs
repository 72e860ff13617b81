use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    QuitRequested,
    FrameBudgetExhausted,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuitRequested => write!(f, "quit requested"),
            Self::FrameBudgetExhausted => write!(f, "frame budget exhausted"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOutcome {
    pub reason: TerminationReason,
    pub frames_drawn: u64,
}
