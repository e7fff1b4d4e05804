//! Single-completion future returned by `send_ping`.

use crate::error::{PingCentreError, PingResult};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Resolves exactly once with the outcome of one ping.
///
/// Dropping the handle does not cancel delivery; the request still runs to
/// completion in the background. Polling again after the outcome was
/// returned yields [`PingCentreError::Cancelled`].
#[must_use = "a ping handle does nothing unless awaited; drop it to fire and forget"]
#[derive(Debug)]
pub struct PingHandle {
    state: State,
}

#[derive(Debug)]
enum State {
    Immediate(PingResult<()>),
    Pending(oneshot::Receiver<PingResult<()>>),
    Done,
}

impl PingHandle {
    /// A handle that is already resolved.
    pub(crate) fn ready(result: PingResult<()>) -> Self {
        Self {
            state: State::Immediate(result),
        }
    }

    /// A pending handle and the completer that fills it.
    pub(crate) fn channel() -> (PingCompleter, Self) {
        let (tx, rx) = oneshot::channel();
        (
            PingCompleter(tx),
            Self {
                state: State::Pending(rx),
            },
        )
    }

    /// Whether the outcome was decided before any I/O happened.
    pub fn is_immediate(&self) -> bool {
        matches!(self.state, State::Immediate(_))
    }
}

impl Future for PingHandle {
    type Output = PingResult<()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let result = match std::mem::replace(&mut this.state, State::Done) {
            State::Immediate(result) => result,
            State::Pending(mut rx) => match Pin::new(&mut rx).poll(cx) {
                Poll::Ready(received) => received.unwrap_or(Err(PingCentreError::Cancelled)),
                Poll::Pending => {
                    this.state = State::Pending(rx);
                    return Poll::Pending;
                }
            },
            State::Done => Err(PingCentreError::Cancelled),
        };
        Poll::Ready(result)
    }
}

/// Write side of a [`PingHandle`]. Consumed on fill, so a handle can never
/// be resolved twice.
#[derive(Debug)]
pub(crate) struct PingCompleter(oneshot::Sender<PingResult<()>>);

impl PingCompleter {
    pub(crate) fn fill(self, result: PingResult<()>) {
        // The receiver may already be gone if the caller fired and forgot.
        let _ = self.0.send(result);
    }
}
