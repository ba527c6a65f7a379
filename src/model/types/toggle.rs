/// Show/hide state of one card's participant section. Starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantToggle {
    expanded: bool,
    count: usize,
}

impl ParticipantToggle {
    pub fn new(count: usize) -> Self {
        Self {
            expanded: false,
            count,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_hidden(&self) -> bool {
        !self.expanded
    }

    pub fn label(&self) -> String {
        if self.expanded {
            format!("Hide participants ({})", self.count)
        } else {
            format!("Participants ({})", self.count)
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_by_default() {
        let toggle = ParticipantToggle::new(3);
        assert!(toggle.is_hidden());
        assert_eq!(toggle.label(), "Participants (3)");
        assert_eq!(toggle.aria_expanded(), "false");
    }

    #[test]
    fn toggling_twice_restores_label() {
        let mut toggle = ParticipantToggle::new(2);
        toggle.toggle();
        assert!(!toggle.is_hidden());
        assert_eq!(toggle.label(), "Hide participants (2)");
        assert_eq!(toggle.aria_expanded(), "true");

        toggle.toggle();
        assert_eq!(toggle, ParticipantToggle::new(2));
        assert_eq!(toggle.label(), "Participants (2)");
    }
}
