//! Single-threaded event loop for the quiz screens.
//!
//! Key presses and countdown ticks are multiplexed with `tokio::select!` on
//! a current-thread runtime, so the session only ever sees one event at a
//! time.

use std::future;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::app::{App, TimerKey};
use crate::error::AppError;
use crate::terminal::TerminalGuard;
use crate::ui;

const TICK: Duration = Duration::from_secs(1);

/// One-second ticker bound to the question it was armed for.
#[derive(Default)]
pub struct QuestionTimer {
    armed_for: Option<TimerKey>,
    interval: Option<Interval>,
}

impl QuestionTimer {
    /// Re-arms when the displayed question changes and drops the ticker when
    /// nothing is displayed. The first tick lands a full second after arming.
    pub fn sync(&mut self, key: Option<TimerKey>) {
        if key == self.armed_for {
            return;
        }
        debug!(?key, "question timer re-armed");
        self.armed_for = key;
        self.interval = key.map(|_| {
            let mut interval = interval_at(Instant::now() + TICK, TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Pending forever while disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

pub async fn run(guard: &mut TerminalGuard, app: &mut App) -> Result<(), AppError> {
    let mut events = EventStream::new();
    let mut timer = QuestionTimer::default();

    loop {
        timer.sync(app.timer_key());
        guard.terminal().draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = timer.tick() => app.on_tick(),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if crate::handle_input(app, key.code) {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }

    app.end_session();
    Ok(())
}

/// True for keys that leave the application from any screen.
pub fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q'))
}
