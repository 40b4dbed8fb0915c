//! Scroll-sync adapter
//!
//! Tracks which category section is in view and turns "go to section"
//! requests into smooth-scroll targets. The engine only sees the
//! [`ScrollSync`] trait.

/// What the engine needs from the scroll layer
pub trait ScrollSync {
    /// Category section currently considered in view
    fn active_section(&self) -> Option<&str>;

    /// Bring a category's section just below the navigation bar
    fn scroll_to_section(&mut self, category_id: &str);
}

/// Measured top offset of a category section (document coordinates)
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBound {
    pub id: String,
    pub top: f64,
}

impl SectionBound {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Pending scroll for the viewport to perform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub smooth: bool,
}

pub const DEFAULT_LOOKAHEAD: f64 = 150.0;
pub const DEFAULT_NAV_HEIGHT: f64 = 140.0;

/// Scroll spy over category sections in catalog order
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<SectionBound>,
    lookahead: f64,
    nav_height: f64,
    scroll_y: f64,
    active: Option<String>,
    pending: Option<ScrollRequest>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD, DEFAULT_NAV_HEIGHT)
    }
}

impl ScrollSpy {
    pub fn new(lookahead: f64, nav_height: f64) -> Self {
        Self {
            sections: Vec::new(),
            lookahead,
            nav_height,
            scroll_y: 0.0,
            active: None,
            pending: None,
        }
    }

    /// Replace section measurements and re-evaluate the last position
    pub fn set_sections(&mut self, sections: Vec<SectionBound>) {
        self.sections = sections;
        self.evaluate();
    }

    pub fn sections(&self) -> &[SectionBound] {
        &self.sections
    }

    /// Feed a scroll position sample
    pub fn observe(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        self.evaluate();
    }

    /// Take the pending scroll request, if any
    pub fn take_request(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }

    fn evaluate(&mut self) {
        let position = self.scroll_y + self.lookahead;
        let next = self
            .sections
            .iter()
            .rev()
            .find(|s| s.top <= position)
            .or_else(|| self.sections.first())
            .map(|s| s.id.clone());

        if next != self.active {
            tracing::trace!(from = ?self.active, to = ?next, "Active section changed");
            self.active = next;
        }
    }
}

impl ScrollSync for ScrollSpy {
    fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn scroll_to_section(&mut self, category_id: &str) {
        match self.sections.iter().find(|s| s.id == category_id) {
            Some(section) => {
                self.pending = Some(ScrollRequest {
                    top: section.top - self.nav_height,
                    smooth: true,
                });
            }
            None => tracing::debug!(category_id, "No section to scroll to"),
        }
    }
}
