//! In-memory calendar of all-day events.

use crate::event::CalendarEvent;

/// A set of events plus an optional display name (X-WR-CALNAME)
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    name: Option<String>,
    events: Vec<CalendarEvent>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Calendar {
            name: Some(name.into()),
            events: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<CalendarEvent> for Calendar {
    fn extend<T: IntoIterator<Item = CalendarEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}
