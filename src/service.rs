//! Single-owner buddy service.
//!
//! A tokio task owns the [`CareState`] and runs the periodic tick. Callers talk
//! to it through a cloneable [`BuddyHandle`]; commands are applied one at a time
//! in arrival order, so the timer and care actions never race.
//!
//! ```ignore
//! let (handle, task) = BuddyService::new(state, SystemClock, config.tick_interval())
//!     .with_autosave(save_manager, config.autosave_interval())
//!     .spawn();
//! handle.play().await?;
//! handle.shutdown().await;
//! let state = task.await?;
//! ```

use crate::buddy::care::{self, CareAction, CareOutcome};
use crate::core::clock::Clock;
use crate::core::constants::MAX_OFFLINE_DAYS;
use crate::core::game_state::CareState;
use crate::core::tick::{buddy_tick, TickEvent, TickResult};
use crate::customization::logic::{equip_item, purchase_item, unequip_accessory};
use crate::customization::types::AccessorySlot;
use crate::error::{CareError, CareResult};
use crate::save_manager::SaveManager;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

const COMMAND_BUFFER: usize = 32;

/// Requests understood by the service task.
#[derive(Debug)]
pub enum Command {
    Snapshot {
        reply: oneshot::Sender<CareState>,
    },
    Feed {
        food_id: String,
        reply: oneshot::Sender<CareResult<CareOutcome>>,
    },
    Care {
        action: CareAction,
        reply: oneshot::Sender<CareResult<CareOutcome>>,
    },
    /// Buys an accessory or outfit. Replies with its display name.
    Purchase {
        item_id: String,
        reply: oneshot::Sender<CareResult<&'static str>>,
    },
    Equip {
        item_id: String,
        reply: oneshot::Sender<CareResult<()>>,
    },
    /// Replies with the id that was removed, if the slot was occupied.
    Unequip {
        slot: AccessorySlot,
        reply: oneshot::Sender<Option<String>>,
    },
    /// Runs a tick right away instead of waiting for the timer.
    TickNow {
        reply: oneshot::Sender<TickResult>,
    },
    Shutdown,
}

/// Error returned when the service task is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("buddy service has stopped")]
pub struct ServiceStopped;

/// Cloneable sender side of the service.
#[derive(Debug, Clone)]
pub struct BuddyHandle {
    tx: mpsc::Sender<Command>,
}

impl BuddyHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, ServiceStopped> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(make(reply)).await.map_err(|_| ServiceStopped)?;
        rx.await.map_err(|_| ServiceStopped)
    }

    pub async fn snapshot(&self) -> Result<CareState, ServiceStopped> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    pub async fn feed(&self, food_id: &str) -> Result<CareResult<CareOutcome>, ServiceStopped> {
        let food_id = food_id.to_string();
        self.request(|reply| Command::Feed { food_id, reply }).await
    }

    pub async fn care(
        &self,
        action: CareAction,
    ) -> Result<CareResult<CareOutcome>, ServiceStopped> {
        self.request(|reply| Command::Care { action, reply }).await
    }

    pub async fn play(&self) -> Result<CareResult<CareOutcome>, ServiceStopped> {
        self.care(CareAction::Play).await
    }

    pub async fn purchase(
        &self,
        item_id: &str,
    ) -> Result<CareResult<&'static str>, ServiceStopped> {
        let item_id = item_id.to_string();
        self.request(|reply| Command::Purchase { item_id, reply }).await
    }

    pub async fn equip(&self, item_id: &str) -> Result<CareResult<()>, ServiceStopped> {
        let item_id = item_id.to_string();
        self.request(|reply| Command::Equip { item_id, reply }).await
    }

    pub async fn unequip(&self, slot: AccessorySlot) -> Result<Option<String>, ServiceStopped> {
        self.request(|reply| Command::Unequip { slot, reply }).await
    }

    pub async fn tick_now(&self) -> Result<TickResult, ServiceStopped> {
        self.request(|reply| Command::TickNow { reply }).await
    }

    /// Asks the task to stop. The final state comes back through its `JoinHandle`.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(Command::Shutdown).await;
    }
}

pub struct BuddyService<C> {
    state: CareState,
    clock: C,
    tick_interval: Duration,
    max_offline_days: u32,
    autosave: Option<(SaveManager, Duration)>,
    rx: mpsc::Receiver<Command>,
    tx: mpsc::Sender<Command>,
    events_tx: Option<mpsc::UnboundedSender<TickEvent>>,
}

impl<C: Clock + Send + 'static> BuddyService<C> {
    pub fn new(state: CareState, clock: C, tick_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        Self {
            state,
            clock,
            tick_interval,
            max_offline_days: MAX_OFFLINE_DAYS,
            autosave: None,
            rx,
            tx,
            events_tx: None,
        }
    }

    /// Caps how many calendar days one tick may age the buddy.
    pub fn with_max_offline_days(mut self, max_offline_days: u32) -> Self {
        self.max_offline_days = max_offline_days;
        self
    }

    /// Writes the state to `save_manager` every `interval`.
    pub fn with_autosave(mut self, save_manager: SaveManager, interval: Duration) -> Self {
        self.autosave = Some((save_manager, interval));
        self
    }

    /// Also streams every tick event to the returned receiver.
    pub fn with_events(mut self) -> (Self, mpsc::UnboundedReceiver<TickEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        self.events_tx = Some(events_tx);
        (self, events_rx)
    }

    pub fn handle(&self) -> BuddyHandle {
        BuddyHandle {
            tx: self.tx.clone(),
        }
    }

    /// Spawns the service task. The task ends, returning the final state, on
    /// `Shutdown` or once every handle has been dropped.
    pub fn spawn(self) -> (BuddyHandle, JoinHandle<CareState>) {
        let handle = self.handle();
        (handle, tokio::spawn(self.run()))
    }

    pub async fn run(self) -> CareState {
        let Self {
            mut state,
            clock,
            tick_interval,
            max_offline_days,
            autosave,
            mut rx,
            tx,
            events_tx,
        } = self;
        // Only handles keep the channel open.
        drop(tx);

        tracing::info!(
            interval_secs = tick_interval.as_secs(),
            buddy = %state.buddy.name,
            "Buddy service started"
        );

        // First tick one interval from now; callers catch up before starting the service.
        let mut interval =
            tokio::time::interval_at(Instant::now() + tick_interval, tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let (save_manager, mut autosave_timer) = match autosave {
            Some((manager, every)) => {
                let mut timer = tokio::time::interval_at(Instant::now() + every, every);
                timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
                (Some(manager), Some(timer))
            }
            None => (None, None),
        };

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let result = buddy_tick(&mut state, clock.now(), max_offline_days);
                    publish(&events_tx, &result);
                }
                _ = next_autosave(&mut autosave_timer) => {
                    if let Some(manager) = &save_manager {
                        autosave_state(manager, &mut state, clock.now());
                    }
                }
                command = rx.recv() => {
                    let Some(command) = command else { break };
                    match command {
                        Command::Snapshot { reply } => {
                            let _ = reply.send(state.clone());
                        }
                        Command::Feed { food_id, reply } => {
                            let now = clock.now();
                            let outcome = care::find_food(&food_id)
                                .ok_or(CareError::UnknownItem(food_id))
                                .and_then(|food| {
                                    care::feed(&mut state.buddy, &mut state.profile.eco_credits, food, now)
                                });
                            let _ = reply.send(outcome);
                        }
                        Command::Care { action, reply } => {
                            let _ = reply.send(apply_care(&mut state, action, clock.now()));
                        }
                        Command::Purchase { item_id, reply } => {
                            let outcome = purchase_item(
                                &mut state.buddy.wardrobe,
                                &item_id,
                                &mut state.profile.eco_credits,
                            );
                            let _ = reply.send(outcome);
                        }
                        Command::Equip { item_id, reply } => {
                            let _ = reply.send(equip_item(&mut state.buddy.wardrobe, &item_id));
                        }
                        Command::Unequip { slot, reply } => {
                            let _ = reply.send(unequip_accessory(&mut state.buddy.wardrobe, slot));
                        }
                        Command::TickNow { reply } => {
                            let result = buddy_tick(&mut state, clock.now(), max_offline_days);
                            publish(&events_tx, &result);
                            let _ = reply.send(result);
                        }
                        Command::Shutdown => break,
                    }
                }
            }
        }

        tracing::info!("Buddy service stopped");
        state
    }
}

fn publish(events_tx: &Option<mpsc::UnboundedSender<TickEvent>>, result: &TickResult) {
    if let Some(tx) = events_tx {
        for event in &result.events {
            let _ = tx.send(event.clone());
        }
    }
}

async fn next_autosave(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn autosave_state(manager: &SaveManager, state: &mut CareState, now: chrono::NaiveDateTime) {
    state.last_save_time = now;
    match manager.save(state) {
        Ok(()) => tracing::debug!(path = %manager.save_path().display(), "Autosaved"),
        Err(e) => tracing::warn!(error = %e, "Autosave failed"),
    }
}

fn apply_care(
    state: &mut CareState,
    action: CareAction,
    now: chrono::NaiveDateTime,
) -> CareResult<CareOutcome> {
    let buddy = &mut state.buddy;
    let credits = &mut state.profile.eco_credits;
    match action {
        CareAction::Play => care::play(buddy, credits, now),
        CareAction::Clean => care::clean(buddy, credits, now),
        CareAction::MedicalCare => care::medical_care(buddy, credits),
        CareAction::Rest => care::rest(buddy, credits, now),
        // Feeding goes through `Command::Feed` with a food id
        CareAction::Feed => Err(CareError::InvalidArgument(
            "feeding needs a food id".to_string(),
        )),
    }
}
