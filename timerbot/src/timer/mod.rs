//! Per-chat one-shot reminder timers: scheduling seam and slot management.

mod manager;
mod scheduler;

pub use manager::{
    TimerManager, FIRE_MESSAGE, REPLACED_SUFFIX, SET_CONFIRMATION, UNSET_CONFIRMATION,
    UNSET_NO_TIMER,
};
pub use scheduler::{Job, JobHandle, Scheduler, TokioScheduler};
