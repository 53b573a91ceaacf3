/// Lifecycle of one request cycle as seen by a screen.
///
/// Exactly one of these governs what a screen renders at any moment: the
/// loading, error and ready conditions are mutually exclusive. Within one
/// cycle the transitions are monotonic (`Idle -> Pending -> Ready | Failed`);
/// a new cycle always restarts from `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Ready(T),
    Failed(&'static str),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, RequestState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RequestState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            RequestState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
