//! Touch input: the collaborator contract and the adapter that drives the game.
//!
//! On the panel the touch controller raises an interrupt per press and the
//! registered [`TouchCallback`] runs inside the handler. The callback only
//! maps, applies, and draws; nothing in it blocks on I/O.

use crate::{Display, TicTacToe};
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tictouch_game::TouchPoint;
use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument, warn};

/// Handler invoked once per press.
pub type TouchCallback = Box<dyn FnMut(TouchPoint) + Send + 'static>;

/// A source of touch presses.
pub trait TouchSource {
    /// Error raised when the handler cannot be installed.
    type Error;

    /// Installs the press handler. Called once at startup.
    fn register(&mut self, callback: TouchCallback) -> Result<(), Self::Error>;
}

/// Errors from touch sources.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TouchSourceError {
    /// A handler is already installed.
    #[display("Touch handler already registered")]
    AlreadyRegistered,
}

/// Input adapter: routes presses into a shared game session.
///
/// Host touch sources deliver from their own thread, so the session sits
/// behind a mutex to serialize handler runs. After [`shutdown`](Self::shutdown)
/// the handler drops every press.
#[derive(Debug)]
pub struct TouchInput<D> {
    session: Arc<Mutex<TicTacToe<D>>>,
    shut_down: Arc<AtomicBool>,
}

impl<D> Clone for TouchInput<D> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            shut_down: Arc::clone(&self.shut_down),
        }
    }
}

impl<D> TouchInput<D>
where
    D: Display + Send + 'static,
{
    /// Takes ownership of the session.
    pub fn new(session: TicTacToe<D>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            shut_down: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Builds the handler to register with a [`TouchSource`].
    pub fn callback(&self) -> TouchCallback {
        let session = Arc::clone(&self.session);
        let shut_down = Arc::clone(&self.shut_down);
        Box::new(move |point| {
            let mut game = lock(&session);
            // Checked under the lock so no press lands after the panel is cleared.
            if shut_down.load(Ordering::Acquire) {
                debug!(%point, "Press after shutdown dropped");
                return;
            }
            match game.handle_touch(point) {
                Ok(outcome) => debug!(%point, ?outcome, "Press applied"),
                Err(e) => error!(%point, error = ?e, "Failed to draw press"),
            }
        })
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut TicTacToe<D>) -> R) -> R {
        f(&mut lock(&self.session))
    }

    /// Stops accepting presses and blanks the display.
    ///
    /// Presses still in flight from the source thread are dropped from here on.
    #[instrument(skip(self))]
    pub fn shutdown(&self) -> Result<(), D::Error> {
        let mut game = lock(&self.session);
        self.shut_down.store(true, Ordering::Release);
        info!(
            status = %game.state().status(),
            moves = game.state().history().len(),
            board = %game.state().board(),
            "Final state"
        );
        game.shutdown()
    }

    /// Whether [`shutdown`](Self::shutdown) has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }
}

/// Locks the session, recovering from a handler that panicked mid-press.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("Session lock poisoned, continuing with last state");
        poisoned.into_inner()
    })
}

/// Touch source reading one press per line (`x,y` or `x y`).
///
/// Lines are read on a dedicated thread, standing in for the controller's
/// interrupt line. Use [`closed`](Self::closed) to learn when input ends.
#[derive(Debug)]
pub struct LineTouchSource<R> {
    reader: Option<R>,
    closed_tx: Option<oneshot::Sender<()>>,
    closed_rx: Option<oneshot::Receiver<()>>,
}

impl<R> LineTouchSource<R>
where
    R: BufRead + Send + 'static,
{
    /// Creates a source over `reader`.
    pub fn new(reader: R) -> Self {
        let (closed_tx, closed_rx) = oneshot::channel();
        Self {
            reader: Some(reader),
            closed_tx: Some(closed_tx),
            closed_rx: Some(closed_rx),
        }
    }

    /// Takes the receiver that fires once the reader is exhausted.
    ///
    /// Returns `None` on the second call.
    pub fn closed(&mut self) -> Option<oneshot::Receiver<()>> {
        self.closed_rx.take()
    }
}

impl<R> TouchSource for LineTouchSource<R>
where
    R: BufRead + Send + 'static,
{
    type Error = TouchSourceError;

    #[instrument(skip_all)]
    fn register(&mut self, mut callback: TouchCallback) -> Result<(), Self::Error> {
        let (reader, closed_tx) = match (self.reader.take(), self.closed_tx.take()) {
            (Some(reader), Some(closed_tx)) => (reader, closed_tx),
            _ => return Err(TouchSourceError::AlreadyRegistered),
        };

        std::thread::spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        error!(error = %e, "Touch input read failed");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_touch(&line) {
                    Some(point) => callback(point),
                    None => warn!(line = %line.trim(), "Ignoring malformed touch line"),
                }
            }
            info!("Touch input closed");
            let _ = closed_tx.send(());
        });

        info!("Touch handler registered");
        Ok(())
    }
}

/// Parses `x,y` or `x y` into a touch point.
pub fn parse_touch(line: &str) -> Option<TouchPoint> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(TouchPoint::new(x, y))
}
