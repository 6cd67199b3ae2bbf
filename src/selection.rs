//! Selected dates for single, multiple and range pickers.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{CalendarDate, SelectionMode};

/// Current selection. The variant fixes the picker's selection mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<CalendarDate>),
    Multiple {
        dates: BTreeSet<CalendarDate>,
        max: Option<usize>,
    },
    Range {
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    },
}

impl Selection {
    /// Empty selection for `mode`. `max` only applies to multiple mode.
    pub fn new(mode: SelectionMode, max: Option<usize>) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple {
                dates: BTreeSet::new(),
                max,
            },
            SelectionMode::Range => Selection::Range {
                start: None,
                end: None,
            },
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple { .. } => SelectionMode::Multiple,
            Selection::Range { .. } => SelectionMode::Range,
        }
    }

    /// Apply a "date selected" event and return the resulting selection.
    pub fn select(self, date: CalendarDate) -> Self {
        let next = match self {
            Selection::Single(Some(current)) if current == date => Selection::Single(None),
            Selection::Single(_) => Selection::Single(Some(date)),
            Selection::Multiple { mut dates, max } => {
                if !dates.remove(&date) {
                    if max.is_some_and(|max| dates.len() >= max) {
                        debug!(%date, "selection limit reached");
                    } else {
                        dates.insert(date);
                    }
                }
                Selection::Multiple { dates, max }
            }
            Selection::Range {
                start: Some(start),
                end: None,
            } => {
                if date == start {
                    Selection::Range {
                        start: None,
                        end: None,
                    }
                } else if date < start {
                    Selection::Range {
                        start: Some(date),
                        end: Some(start),
                    }
                } else {
                    Selection::Range {
                        start: Some(start),
                        end: Some(date),
                    }
                }
            }
            Selection::Range { .. } => Selection::Range {
                start: Some(date),
                end: None,
            },
        };
        debug!(%date, selection = ?next, "selection updated");
        next
    }

    /// Whether `date` is selected, including days inside a range.
    pub fn contains(&self, date: CalendarDate) -> bool {
        match self {
            Selection::Single(selected) => *selected == Some(date),
            Selection::Multiple { dates, .. } => dates.contains(&date),
            Selection::Range {
                start: Some(start),
                end: Some(end),
            } => (*start..=*end).contains(&date),
            Selection::Range { start, .. } => *start == Some(date),
        }
    }

    pub fn is_range_start(&self, date: CalendarDate) -> bool {
        matches!(self, Selection::Range { start: Some(start), .. } if *start == date)
    }

    pub fn is_range_end(&self, date: CalendarDate) -> bool {
        matches!(self, Selection::Range { end: Some(end), .. } if *end == date)
    }

    /// Explicitly selected dates in ascending order. A range yields its
    /// endpoints only.
    pub fn dates(&self) -> Vec<CalendarDate> {
        match self {
            Selection::Single(selected) => selected.iter().copied().collect(),
            Selection::Multiple { dates, .. } => dates.iter().copied().collect(),
            Selection::Range { start, end } => start.iter().chain(end.iter()).copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates().is_empty()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(None)
    }
}
