//! Transient toast notices.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// How long a notice stays on screen before auto-dismissal.
pub const NOTICE_TTL_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    next_id: u64,
    pub items: Vec<Notice>,
}

impl Notices {
    /// Queue a notice; returns its id for later dismissal.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
