//! Per-chat single-slot timer management.
//!
//! At most one pending reminder per chat. Setting again cancels and replaces the
//! old job; a replaced job never fires. The slot map is a chat_id keyed store owned
//! by the manager, with the scheduler and sender injected.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use timerbot_core::{Bot, Chat};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use super::scheduler::{JobHandle, Scheduler};

/// Reminder text sent when a timer fires.
pub const FIRE_MESSAGE: &str = "☕ Pinggggg! Take a break";
/// Acknowledgement for a newly set timer.
pub const SET_CONFIRMATION: &str = "⏰ Timer Alert Activated!";
/// Appended to the acknowledgement when an older timer was replaced.
pub const REPLACED_SUFFIX: &str = " Old Timer was removed.";
/// Confirmation for cancelling a pending timer ("ALert" matches the deployed bot).
pub const UNSET_CONFIRMATION: &str = "⏰ Timer ALert cancelled!";
/// Reply to /unset when nothing is pending.
pub const UNSET_NO_TIMER: &str = "You have no active timer.";

struct TimerSlot {
    /// Registration token; the fire path only claims a slot whose token still matches.
    token: u64,
    handle: JobHandle,
}

type SlotMap = Arc<Mutex<HashMap<i64, TimerSlot>>>;

/// Owns the chat_id → pending-job map and formats the confirmation replies.
pub struct TimerManager {
    scheduler: Arc<dyn Scheduler>,
    bot: Arc<dyn Bot>,
    slots: SlotMap,
    next_token: AtomicU64,
}

impl TimerManager {
    pub fn new(scheduler: Arc<dyn Scheduler>, bot: Arc<dyn Bot>) -> Self {
        Self {
            scheduler,
            bot,
            slots: Arc::new(Mutex::new(HashMap::new())),
            next_token: AtomicU64::new(0),
        }
    }

    /// Cancels any pending timer for the chat and schedules a new one-shot job.
    /// Lookup, cancel and register happen under one lock, so a replaced job cannot
    /// fire afterwards. Returns the confirmation text, extended with the
    /// replacement clause when an older timer was removed.
    #[instrument(skip(self, chat), fields(chat_id = chat.id))]
    pub async fn set(&self, chat: &Chat, due: Duration) -> String {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let mut slots = self.slots.lock().await;

        let replaced = match slots.remove(&chat.id) {
            Some(old) => {
                old.handle.cancel();
                true
            }
            None => false,
        };

        let job = Box::pin(Self::fire(
            self.slots.clone(),
            self.bot.clone(),
            chat.clone(),
            token,
        ));
        let handle = self.scheduler.schedule_once(due, job);
        slots.insert(chat.id, TimerSlot { token, handle });

        info!(due_secs = due.as_secs(), replaced, "Timer set");

        let mut text = SET_CONFIRMATION.to_string();
        if replaced {
            text.push_str(REPLACED_SUFFIX);
        }
        text
    }

    /// Cancels the pending timer for the chat, if any. Always succeeds; the
    /// confirmation says whether a timer existed.
    #[instrument(skip(self))]
    pub async fn unset(&self, chat_id: i64) -> String {
        match self.slots.lock().await.remove(&chat_id) {
            Some(slot) => {
                slot.handle.cancel();
                info!(chat_id, "Timer cancelled");
                UNSET_CONFIRMATION.to_string()
            }
            None => UNSET_NO_TIMER.to_string(),
        }
    }

    /// Whether the chat currently has a pending timer.
    pub async fn is_pending(&self, chat_id: i64) -> bool {
        self.slots.lock().await.contains_key(&chat_id)
    }

    /// Runs in the scheduler's context when the delay elapses. Claims the slot
    /// under the map lock first; a job whose token no longer matches was replaced
    /// or cancelled in the meantime and must not send.
    async fn fire(slots: SlotMap, bot: Arc<dyn Bot>, chat: Chat, token: u64) {
        let claimed = {
            let mut slots = slots.lock().await;
            match slots.get(&chat.id) {
                Some(slot) if slot.token == token => {
                    slots.remove(&chat.id);
                    true
                }
                _ => false,
            }
        };
        if !claimed {
            return;
        }

        info!(chat_id = chat.id, "Timer fired");
        if let Err(e) = bot.send_message(&chat, FIRE_MESSAGE).await {
            // One-shot: a failed delivery is logged, not retried.
            error!(error = %e, chat_id = chat.id, "Failed to deliver reminder");
        }
    }
}

// Timer semantics are covered in tests/timer_manager_test.rs
