use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a signup notice stays up.
pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(5);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// The message area under the signup form.
///
/// Every [`show`](MessageBanner::show) starts a new generation. A hide timer
/// only clears the banner when it belongs to the generation still on screen,
/// so a timer left over from an older notice never hides a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBanner {
    notice: Option<Notice>,
    generation: u64,
}

impl MessageBanner {
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation += 1;
        self.notice = Some(notice);
        self.generation
    }

    /// Returns whether the banner was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_hidden(&self) -> bool {
        self.notice.is_none()
    }

    pub fn class(&self) -> &'static str {
        match self.notice {
            None => "hidden",
            Some(Notice::Success(_)) => "success",
            Some(Notice::Error(_)) => "error",
        }
    }

    pub fn text(&self) -> &str {
        self.notice.as_ref().map(Notice::text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let banner = MessageBanner::default();
        assert!(banner.is_hidden());
        assert_eq!(banner.class(), "hidden");
        assert_eq!(banner.text(), "");
    }

    #[test]
    fn timer_hides_its_own_notice() {
        let mut banner = MessageBanner::default();
        let generation = banner.show(Notice::Success("Signed up".to_string()));
        assert_eq!(banner.class(), "success");
        assert!(banner.expire(generation));
        assert!(banner.is_hidden());
    }

    #[test]
    fn stale_timer_leaves_newer_notice_alone() {
        let mut banner = MessageBanner::default();
        let first = banner.show(Notice::Success("Signed up".to_string()));
        let second = banner.show(Notice::Error("Already signed up".to_string()));

        assert!(!banner.expire(first));
        assert_eq!(banner.text(), "Already signed up");
        assert_eq!(banner.class(), "error");

        assert!(banner.expire(second));
        assert!(banner.is_hidden());
    }
}
