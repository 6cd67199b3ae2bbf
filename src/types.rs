//! Type definitions and constants for month grids and picker configuration.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use clap::ValueEnum;

use crate::error::ConfigError;

/// A specific day. No time-of-day component.
pub type CalendarDate = NaiveDate;

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    Sunday,
    /// Default, as in ISO 8601.
    #[default]
    Monday,
    Saturday,
}

impl WeekStart {
    /// Weekday occupying the first column.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Saturday => Weekday::Sat,
        }
    }

    /// Column (0-6) of `weekday` in a grid starting on this day.
    pub fn column_of(self, weekday: Weekday) -> usize {
        let start = self.weekday().num_days_from_monday();
        ((weekday.num_days_from_monday() + 7 - start) % 7) as usize
    }
}

impl FromStr for WeekStart {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            "saturday" | "sat" => Ok(WeekStart::Saturday),
            _ => Err(ConfigError::InvalidWeekStart(s.to_string())),
        }
    }
}

/// Selection behaviour of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Zero or one selected date.
    #[default]
    Single,
    /// Any number of independently toggled dates.
    Multiple,
    /// A start date and an optional end date.
    Range,
}

/// The month currently shown, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayMonth {
    first: NaiveDate,
}

impl DisplayMonth {
    /// Create a display month, rejecting months outside 1-12 and years
    /// outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month: u32) -> Result<Self, ConfigError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ConfigError::InvalidYear(year.to_string()));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| DisplayMonth { first })
            .ok_or_else(|| ConfigError::InvalidMonth(month.to_string()))
    }

    /// The month containing `date`, clamped to the supported year range.
    pub fn from_date(date: CalendarDate) -> Self {
        let clamped = if date.year() < MIN_YEAR {
            NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
        } else if date.year() > MAX_YEAR {
            NaiveDate::from_ymd_opt(MAX_YEAR, 12, 1)
        } else {
            date.with_day(1)
        };
        DisplayMonth {
            first: clamped.unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number (1-12).
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> CalendarDate {
        self.first
    }

    pub fn last_day(&self) -> CalendarDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.first)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Shift by `delta` months, saturating at the supported year range.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year() * 12 + (self.month() as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        if year < MIN_YEAR {
            DisplayMonth::new(MIN_YEAR, 1).unwrap_or(*self)
        } else if year > MAX_YEAR {
            DisplayMonth::new(MAX_YEAR, 12).unwrap_or(*self)
        } else {
            DisplayMonth::new(year, month).unwrap_or(*self)
        }
    }

    /// Previous month.
    pub fn pred(&self) -> Self {
        self.add_months(-1)
    }

    /// Next month.
    pub fn succ(&self) -> Self {
        self.add_months(1)
    }

    /// Whether `date` belongs to this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for DisplayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// One day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: CalendarDate,
    /// True when the day belongs to the previous or next month.
    pub is_outside_month: bool,
}

/// Seven consecutive cells, first column first.
pub type Week = [GridCell; DAYS_PER_WEEK];

/// All weeks needed to show a month, including borrowed leading and
/// trailing days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub display_month: DisplayMonth,
    pub week_start: WeekStart,
    pub weeks: Vec<Week>,
}

/// Picker configuration shared by every element of one picker.
#[derive(Clone, Debug)]
pub struct PickerContext {
    /// First column of the grid.
    pub week_start: WeekStart,
    /// Whether days of adjacent months are drawn or left blank.
    pub show_outside_days: bool,
    /// Month shown when the picker is mounted.
    pub default_month: DisplayMonth,
    /// How selecting a date affects the selection.
    pub selection_mode: SelectionMode,
    /// Upper bound on selected dates in multiple mode.
    pub max_selected: Option<usize>,
    /// Highlighted independently of the selection.
    pub payment_due_date: Option<CalendarDate>,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting and initial focus.
    pub today: CalendarDate,
}

pub const DAYS_PER_WEEK: usize = 7;
pub const MIN_WEEKS_PER_MONTH: usize = 4;
pub const MAX_WEEKS_PER_MONTH: usize = 6;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

// Each cell is a marker column followed by two digits
pub const CELL_WIDTH: usize = 3;
pub const GRID_WIDTH: usize = DAYS_PER_WEEK * CELL_WIDTH;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_BOLD: &str = "\x1b[1m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_UNDERLINE: &str = "\x1b[4m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_GREEN: &str = "\x1b[92m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
