//! Month grid layout: whole weeks covering a month, aligned to the week start.

use chrono::{Datelike, Days};

use crate::types::{CalendarDate, DAYS_PER_WEEK, DisplayMonth, GridCell, MonthGrid, Week, WeekStart};

/// Build the grid for `display_month` with `week_start` as the first column.
///
/// The grid runs from the start of the week containing the 1st to the end of
/// the week containing the last day, so it always holds 4 to 6 full weeks.
pub fn build_month_grid(display_month: DisplayMonth, week_start: WeekStart) -> MonthGrid {
    let first = display_month.first_day();
    let last = display_month.last_day();

    let leading = week_start.column_of(first.weekday()) as u64;
    let trailing = (DAYS_PER_WEEK - 1 - week_start.column_of(last.weekday())) as u64;

    let start = first - Days::new(leading);
    let end = last + Days::new(trailing);

    let cells: Vec<GridCell> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| GridCell {
            date,
            is_outside_month: !display_month.contains(date),
        })
        .collect();

    let weeks = cells
        .chunks_exact(DAYS_PER_WEEK)
        .filter_map(|chunk| chunk.try_into().ok())
        .collect::<Vec<Week>>();

    tracing::trace!(
        month = %display_month,
        ?week_start,
        leading,
        trailing,
        weeks = weeks.len(),
        "built month grid"
    );

    MonthGrid {
        display_month,
        week_start,
        weeks,
    }
}

impl MonthGrid {
    pub fn new(display_month: DisplayMonth, week_start: WeekStart) -> Self {
        build_month_grid(display_month, week_start)
    }

    /// Number of cells (always a multiple of 7).
    pub fn len(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Cells in calendar order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    /// Cell at grid position `index`.
    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.weeks
            .get(index / DAYS_PER_WEEK)
            .map(|week| &week[index % DAYS_PER_WEEK])
    }

    pub fn first(&self) -> Option<&GridCell> {
        self.cell(0)
    }

    pub fn last(&self) -> Option<&GridCell> {
        self.len().checked_sub(1).and_then(|index| self.cell(index))
    }

    /// Grid position of `date`, if it is drawn in this grid.
    pub fn index_of(&self, date: CalendarDate) -> Option<usize> {
        let first = self.first()?.date;
        let offset = usize::try_from(date.signed_duration_since(first).num_days()).ok()?;
        (offset < self.len()).then_some(offset)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.index_of(date).is_some()
    }

    /// Cell in the first row sharing the column of `date`.
    pub fn first_row_cell_like(&self, date: CalendarDate) -> Option<&GridCell> {
        let column = self.week_start.column_of(date.weekday());
        self.weeks.first().map(|week| &week[column])
    }

    /// Cell in the last row sharing the column of `date`.
    pub fn last_row_cell_like(&self, date: CalendarDate) -> Option<&GridCell> {
        let column = self.week_start.column_of(date.weekday());
        self.weeks.last().map(|week| &week[column])
    }
}
