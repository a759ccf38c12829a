//! Flash Notification Dismissal
//!
//! Each flash message fades out after a delay and is then removed from the page.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::FlashConfig;
use crate::models::NotificationPhase;

/// Fade and removal offsets, relative to when the notification was scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissSchedule {
    pub delay_ms: u32,
    pub fade_ms: u32,
}

impl DismissSchedule {
    pub fn new(config: &FlashConfig) -> Self {
        Self {
            delay_ms: config.delay_ms,
            fade_ms: config.fade_ms,
        }
    }

    pub fn fade_at(&self) -> u64 {
        u64::from(self.delay_ms)
    }

    pub fn remove_at(&self) -> u64 {
        self.fade_at() + u64::from(self.fade_ms)
    }

    /// Phase of a notification `elapsed_ms` after scheduling
    pub fn phase_at(&self, elapsed_ms: u64) -> NotificationPhase {
        if elapsed_ms >= self.remove_at() {
            NotificationPhase::Removed
        } else if elapsed_ms >= self.fade_at() {
            NotificationPhase::Fading
        } else {
            NotificationPhase::Shown
        }
    }

    /// Timer waits, each paired with the phase entered when it expires.
    /// A zero-length fade goes straight to `Removed`.
    pub fn steps(&self) -> Vec<(u32, NotificationPhase)> {
        let mut steps = Vec::with_capacity(2);
        let mut phase = NotificationPhase::Shown;
        let mut elapsed = 0;
        for at in [self.fade_at(), self.remove_at()] {
            let next = self.phase_at(at);
            if next != phase {
                let wait = u32::try_from(at - elapsed).unwrap_or(u32::MAX);
                steps.push((wait, next));
                phase = next;
                elapsed = at;
            }
        }
        steps
    }
}

/// Drive one notification through its remaining phases. Not cancelable.
async fn dismiss(el: Element, schedule: DismissSchedule) {
    for (wait_ms, phase) in schedule.steps() {
        TimeoutFuture::new(wait_ms).await;
        match phase {
            NotificationPhase::Shown => {}
            NotificationPhase::Fading => {
                page_dom::set_style(&el, "transition", &format!("opacity {}ms", schedule.fade_ms));
                page_dom::set_style(&el, "opacity", "0");
            }
            NotificationPhase::Removed => el.remove(),
        }
        log::trace!("flash {:?}", phase);
    }
}

/// Schedule dismissal for every notification currently on the page.
/// Returns how many were scheduled.
pub fn dismiss_all(config: &FlashConfig) -> usize {
    let schedule = DismissSchedule::new(config);
    let notifications = page_dom::query_all(&config.selector);
    let count = notifications.len();
    for el in notifications {
        spawn_local(dismiss(el, schedule));
    }
    if count > 0 {
        log::debug!(
            "{} notifications: fade at {}ms, removed at {}ms",
            count,
            schedule.fade_at(),
            schedule.remove_at()
        );
    }
    count
}
