//! A date picker: shared configuration, navigation state and selection.
//!
//! The picker owns the current snapshot and swaps it for the next one after
//! each command. Child elements receive `&PickerContext` explicitly rather
//! than looking it up.

use chrono::Datelike;
use tracing::{debug, info};

use crate::formatter::format_month_grid;
use crate::navigation::{NavCommand, NavEvent, NavState, Navigator};
use crate::selection::Selection;
use crate::types::{CalendarDate, DisplayMonth, MAX_YEAR, MIN_YEAR, MonthGrid, PickerContext};

pub struct DatePicker {
    ctx: PickerContext,
    navigator: Navigator,
    state: NavState,
    selection: Selection,
}

impl DatePicker {
    /// Mount a picker on `ctx.default_month` with nothing focused.
    pub fn new(ctx: PickerContext) -> Self {
        let navigator = Navigator::new(ctx.week_start);
        let state = NavState::new(ctx.default_month);
        let selection = Selection::new(ctx.selection_mode, ctx.max_selected);
        DatePicker {
            ctx,
            navigator,
            state,
            selection,
        }
    }

    /// Preselect dates as if each had been selected in turn.
    pub fn with_selected(mut self, dates: &[CalendarDate]) -> Self {
        for &date in dates {
            self.selection = std::mem::take(&mut self.selection).select(date);
        }
        self
    }

    pub fn context(&self) -> &PickerContext {
        &self.ctx
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn grid(&self) -> MonthGrid {
        self.navigator.grid(&self.state)
    }

    /// Focus the first visible selected date, else today if visible.
    pub fn open(&mut self) -> Vec<NavEvent> {
        let grid = self.grid();
        let preferred = self
            .selection
            .dates()
            .into_iter()
            .find(|date| grid.contains(*date))
            .or(Some(self.ctx.today).filter(|today| grid.contains(*today)));
        self.dispatch(NavCommand::Open { preferred })
    }

    /// Focus `date`, moving to its month first when necessary. Dates outside
    /// the supported year range are ignored.
    pub fn focus(&mut self, date: CalendarDate) -> Vec<NavEvent> {
        let mut events = Vec::new();
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            debug!(%date, "focus outside supported year range ignored");
            return events;
        }
        if !self.grid().contains(date) {
            let month = DisplayMonth::from_date(date);
            events.extend(self.dispatch(NavCommand::SetDisplayMonth(month)));
        }
        events.extend(self.dispatch(NavCommand::Open {
            preferred: Some(date),
        }));
        events
    }

    /// Apply `command`, fold any selection into the selection state, and
    /// return the events it produced.
    pub fn dispatch(&mut self, command: NavCommand) -> Vec<NavEvent> {
        let transition = self.navigator.apply(self.state, command);
        for event in &transition.events {
            if let NavEvent::DateSelected(date) = event {
                info!(%date, "date selected");
                self.selection = std::mem::take(&mut self.selection).select(*date);
            }
        }
        self.state = transition.state;
        transition.events
    }

    /// Rendered lines for the current snapshot.
    pub fn render(&self) -> Vec<String> {
        format_month_grid(&self.ctx, &self.grid(), &self.state, &self.selection)
    }

    /// Unmount: drop focus.
    pub fn close(&mut self) -> Vec<NavEvent> {
        self.dispatch(NavCommand::Close)
    }
}
