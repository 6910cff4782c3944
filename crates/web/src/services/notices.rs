// =============================================================================
// NexusCorp Web - Notice Service
// =============================================================================
// Owns the live notice queue and the one-shot timer behind each notice.
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nexus_common::{NoticeId, NoticeQueue, SiteConfig};

/// Reactive handle to the notice queue, shared through [`crate::AppState`].
#[derive(Clone, Copy)]
pub struct NoticeService {
    queue: RwSignal<NoticeQueue>,
    duration_ms: u32,
}

impl NoticeService {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::new(config.max_visible_notices)),
            duration_ms: config.notice_duration_ms,
        }
    }

    /// Read side for the notice host.
    pub fn queue(&self) -> ReadSignal<NoticeQueue> {
        self.queue.read_only()
    }

    /// Run `post` against the queue and schedule dismissal of what it added.
    pub fn post(&self, post: impl FnOnce(&mut NoticeQueue) -> NoticeId) -> Option<NoticeId> {
        let id = self.queue.try_update(post)?;
        self.schedule_dismiss(id);
        Some(id)
    }

    pub fn dismiss(&self, id: NoticeId) {
        self.queue.try_update(|queue| queue.dismiss(id));
    }

    fn schedule_dismiss(&self, id: NoticeId) {
        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(service.duration_ms).await;
            // No-op if the notice was evicted or the host is gone.
            service.dismiss(id);
        });
    }
}
