//! Keyboard navigation over the month grid.
//!
//! Every transition is a pure function from a state and a command to a new
//! state plus the events it produced. The previous state is never touched, so
//! the caller always holds both sides of a transition.

use tracing::debug;

use crate::types::{CalendarDate, DisplayMonth, MonthGrid, WeekStart};

/// Displayed month and focused date. Nothing else is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub display_month: DisplayMonth,
    pub focused: Option<CalendarDate>,
}

impl NavState {
    /// State at mount: the default month, nothing focused yet.
    pub fn new(display_month: DisplayMonth) -> Self {
        NavState {
            display_month,
            focused: None,
        }
    }
}

/// Abstract commands dispatched by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    JumpHome,
    JumpEnd,
    Select,
    SetDisplayMonth(DisplayMonth),
    PreviousMonth,
    NextMonth,
    /// Establish initial focus, preferring `preferred` when it is visible.
    Open { preferred: Option<CalendarDate> },
    /// Drop focus.
    Close,
}

/// Notifications produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    DateSelected(CalendarDate),
    DisplayMonthChanged(DisplayMonth),
    FocusChanged(Option<CalendarDate>),
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: NavState,
    pub events: Vec<NavEvent>,
}

impl Transition {
    fn unchanged(state: NavState) -> Self {
        Transition {
            state,
            events: Vec::new(),
        }
    }

    /// Diff `before` and `after` into change events, in month-then-focus order.
    fn between(before: NavState, after: NavState) -> Self {
        let mut events = Vec::new();
        if before.display_month != after.display_month {
            events.push(NavEvent::DisplayMonthChanged(after.display_month));
        }
        if before.focused != after.focused {
            events.push(NavEvent::FocusChanged(after.focused));
        }
        Transition {
            state: after,
            events,
        }
    }
}

/// Which grid edge a move crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Backward,
    Forward,
}

/// Applies commands for pickers sharing one week-start convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    pub week_start: WeekStart,
}

impl Navigator {
    pub fn new(week_start: WeekStart) -> Self {
        Navigator { week_start }
    }

    /// Grid rendered for `state`.
    pub fn grid(&self, state: &NavState) -> MonthGrid {
        MonthGrid::new(state.display_month, self.week_start)
    }

    /// Apply `command` to `state`, returning the next state and its events.
    pub fn apply(&self, state: NavState, command: NavCommand) -> Transition {
        let transition = match command {
            NavCommand::MoveLeft => self.step(state, -1),
            NavCommand::MoveRight => self.step(state, 1),
            NavCommand::MoveUp => self.step(state, -7),
            NavCommand::MoveDown => self.step(state, 7),
            NavCommand::JumpHome => self.jump(state, |grid| grid.first().map(|c| c.date)),
            NavCommand::JumpEnd => self.jump(state, |grid| grid.last().map(|c| c.date)),
            NavCommand::Select => match state.focused {
                Some(date) => Transition {
                    state,
                    events: vec![NavEvent::DateSelected(date)],
                },
                None => {
                    debug!("select without focus ignored");
                    Transition::unchanged(state)
                }
            },
            NavCommand::SetDisplayMonth(target) => self.set_display_month(state, target),
            NavCommand::PreviousMonth => {
                self.set_display_month(state, state.display_month.pred())
            }
            NavCommand::NextMonth => self.set_display_month(state, state.display_month.succ()),
            NavCommand::Open { preferred } => self.open(state, preferred),
            NavCommand::Close => Transition::between(
                state,
                NavState {
                    focused: None,
                    ..state
                },
            ),
        };

        debug!(
            ?command,
            month = %transition.state.display_month,
            focused = ?transition.state.focused,
            events = transition.events.len(),
            "navigation transition"
        );
        transition
    }

    /// Move focus by `offset` grid positions, crossing into the adjacent
    /// month when the target falls outside the current grid.
    fn step(&self, state: NavState, offset: isize) -> Transition {
        let Some(focused) = state.focused else {
            debug!(offset, "directional command without focus ignored");
            return Transition::unchanged(state);
        };
        let grid = self.grid(&state);
        let Some(index) = grid.index_of(focused) else {
            debug!(%focused, "focused date not in rendered grid; ignoring");
            return Transition::unchanged(state);
        };

        let target = index as isize + offset;
        if target < 0 {
            return self.cross(state, focused, Crossing::Backward);
        }
        match grid.cell(target as usize) {
            Some(cell) => Transition::between(
                state,
                NavState {
                    focused: Some(cell.date),
                    ..state
                },
            ),
            None => self.cross(state, focused, Crossing::Forward),
        }
    }

    /// Change month and focus the cell in the same column, in the row next to
    /// the edge that was crossed.
    fn cross(&self, state: NavState, leaving: CalendarDate, crossing: Crossing) -> Transition {
        let display_month = match crossing {
            Crossing::Backward => state.display_month.pred(),
            Crossing::Forward => state.display_month.succ(),
        };
        if display_month == state.display_month {
            debug!(month = %display_month, "no month beyond supported range");
            return Transition::unchanged(state);
        }
        let grid = MonthGrid::new(display_month, self.week_start);
        let cell = match crossing {
            Crossing::Backward => grid.last_row_cell_like(leaving),
            Crossing::Forward => grid.first_row_cell_like(leaving),
        };
        Transition::between(
            state,
            NavState {
                display_month,
                focused: cell.map(|c| c.date).or(state.focused),
            },
        )
    }

    fn jump(
        &self,
        state: NavState,
        pick: impl Fn(&MonthGrid) -> Option<CalendarDate>,
    ) -> Transition {
        let grid = self.grid(&state);
        Transition::between(
            state,
            NavState {
                focused: pick(&grid).or(state.focused),
                ..state
            },
        )
    }

    /// Replace the displayed month. A focused date still drawn in the new grid
    /// keeps focus; otherwise focus moves to the 1st of the new month. An
    /// unset focus stays unset.
    fn set_display_month(&self, state: NavState, target: DisplayMonth) -> Transition {
        let grid = MonthGrid::new(target, self.week_start);
        let focused = state.focused.map(|date| {
            if grid.contains(date) {
                date
            } else {
                target.first_day()
            }
        });
        Transition::between(
            state,
            NavState {
                display_month: target,
                focused,
            },
        )
    }

    /// Focus `preferred` if it is drawn in the current grid, else the current
    /// focus if any, else the 1st of the month.
    fn open(&self, state: NavState, preferred: Option<CalendarDate>) -> Transition {
        let grid = self.grid(&state);
        let focused = preferred
            .filter(|date| grid.contains(*date))
            .or(state.focused)
            .unwrap_or_else(|| state.display_month.first_day());
        Transition::between(
            state,
            NavState {
                focused: Some(focused),
                ..state
            },
        )
    }

    /// Apply a sequence of commands, collecting every event in order.
    pub fn replay<I>(&self, state: NavState, commands: I) -> Transition
    where
        I: IntoIterator<Item = NavCommand>,
    {
        commands.into_iter().fold(Transition::unchanged(state), |acc, command| {
            let mut next = self.apply(acc.state, command);
            let mut events = acc.events;
            events.append(&mut next.events);
            Transition {
                state: next.state,
                events,
            }
        })
    }
}
