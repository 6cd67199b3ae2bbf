//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the cal convention: `[month] [year]`.

use std::io::IsTerminal;

use chrono::Datelike;
use clap::{ArgAction, Parser, ValueHint};
use tracing::debug;

use crate::error::ConfigError;
use crate::formatter::{parse_date, parse_month};
use crate::keymap::parse_key_script;
use crate::navigation::NavCommand;
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, CalendarDate, DisplayMonth, MAX_YEAR, MIN_YEAR, PickerContext,
    SelectionMode, WeekStart,
};

#[derive(Parser, Debug)]
#[command(name = "calnav")]
#[command(about = "Displays a month grid and replays date-picker key presses", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday.
    #[arg(short = 's', long, help_heading = "Grid options")]
    pub sunday: bool,

    /// Week starts on Monday (default).
    #[arg(short = 'm', long, help_heading = "Grid options")]
    pub monday: bool,

    /// Week starts on Saturday.
    #[arg(long, help_heading = "Grid options")]
    pub saturday: bool,

    /// Draw days of the previous and next month.
    #[arg(short = 'o', long = "outside-days", help_heading = "Grid options")]
    pub outside_days: bool,

    /// Selection behaviour.
    #[arg(
        long,
        default_value = "single",
        help_heading = "Selection options",
        value_name = "mode"
    )]
    pub mode: SelectionMode,

    /// Preselected date (YYYY-MM-DD), may be repeated.
    #[arg(long = "selected", help_heading = "Selection options", value_name = "date")]
    pub selected: Vec<String>,

    /// Maximum number of dates in multiple mode.
    #[arg(long = "max", help_heading = "Selection options", value_name = "num")]
    pub max_selected: Option<usize>,

    /// Payment due date to highlight (YYYY-MM-DD).
    #[arg(long = "due", help_heading = "Selection options", value_name = "date")]
    pub due: Option<String>,

    /// Date holding focus before the key script runs (YYYY-MM-DD).
    #[arg(long, help_heading = "Navigation options", value_name = "date")]
    pub focus: Option<String>,

    /// Comma-separated key presses to replay (e.g. "down,right,enter").
    #[arg(short = 'k', long, help_heading = "Navigation options", value_name = "script")]
    pub keys: Option<String>,

    /// Print navigation events as they happen.
    #[arg(short = 'e', long, help_heading = "Output options")]
    pub events: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,

    /// Month (1-12 or name), or a 4-digit year when given alone.
    #[arg(index = 1, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Keys: left right up down home end enter space escape pageup pagedown

Examples:
  calnav                          Display current month
  calnav 6 2025                   Display June 2025
  calnav -s -o 6 2025             Sunday first, with outside days
  calnav --focus 2025-06-30 -k right,enter -e
                                  Move focus past month end and select
  calnav --mode range -k home,enter,end,enter
                                  Select the whole visible grid as a range";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Week start from the mutually exclusive flags.
    pub fn week_start(&self) -> Result<WeekStart, ConfigError> {
        match (self.sunday, self.monday, self.saturday) {
            (false, false, false) | (false, true, false) => Ok(WeekStart::Monday),
            (true, false, false) => Ok(WeekStart::Sunday),
            (false, false, true) => Ok(WeekStart::Saturday),
            _ => Err(ConfigError::ConflictingWeekStart),
        }
    }

    /// Preselected dates, validated.
    pub fn selected_dates(&self) -> Result<Vec<CalendarDate>, ConfigError> {
        self.selected.iter().map(|s| require_date(s)).collect()
    }

    /// Focus date, validated.
    pub fn focus_date(&self) -> Result<Option<CalendarDate>, ConfigError> {
        self.focus.as_deref().map(require_date).transpose()
    }

    /// Key script as commands.
    pub fn commands(&self) -> Result<Vec<NavCommand>, ConfigError> {
        match self.keys.as_deref() {
            Some(script) => parse_key_script(script),
            None => Ok(Vec::new()),
        }
    }
}

fn require_date(s: &str) -> Result<CalendarDate, ConfigError> {
    parse_date(s)
        .filter(|date| (MIN_YEAR..=MAX_YEAR).contains(&date.year()))
        .ok_or_else(|| {
            debug!(value = s, "rejected date");
            ConfigError::InvalidDate(s.to_string())
        })
}

fn require_month(s: &str) -> Result<u32, ConfigError> {
    parse_month(s).ok_or_else(|| {
        debug!(value = s, "rejected month");
        ConfigError::InvalidMonth(s.to_string())
    })
}

impl PickerContext {
    pub fn new(args: &Args) -> Result<Self, ConfigError> {
        let today = get_today_date();
        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        if args.max_selected.is_some() && args.mode != SelectionMode::Multiple {
            return Err(ConfigError::InvalidArguments(
                "--max requires --mode multiple".to_string(),
            ));
        }

        let payment_due_date = args.due.as_deref().map(require_date).transpose()?;
        let default_month = get_display_month(args, today)?;

        Ok(PickerContext {
            week_start: args.week_start()?,
            show_outside_days: args.outside_days,
            default_month,
            selection_mode: args.mode,
            max_selected: args.max_selected,
            payment_due_date,
            color,
            today,
        })
    }
}

/// Get today's date, respecting CALNAV_TEST_TIME environment variable for testing.
pub fn get_today_date() -> CalendarDate {
    if let Ok(test_time) = std::env::var("CALNAV_TEST_TIME")
        && let Some(date) = parse_date(&test_time)
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Calculate the month shown at mount.
///
/// Argument patterns:
/// - none: month of the focus date, else of the first selected date, else today
/// - 1 arg: year (4 digits, January) or month of the current year
/// - 2 args: month year
pub fn get_display_month(args: &Args, today: CalendarDate) -> Result<DisplayMonth, ConfigError> {
    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, None) => {
            let anchor = args
                .focus_date()?
                .or(args.selected_dates()?.first().copied())
                .unwrap_or(today);
            Ok(DisplayMonth::from_date(anchor))
        }
        (Some(val), None) => {
            if val.len() == 4
                && let Ok(year) = val.parse::<i32>()
            {
                return DisplayMonth::new(year, 1);
            }
            let month = require_month(val)?;
            DisplayMonth::new(today.year(), month)
        }
        (Some(month_str), Some(year_str)) => {
            let month = require_month(month_str)?;
            let year: i32 = year_str
                .parse()
                .map_err(|_| ConfigError::InvalidYear(year_str.to_string()))?;
            DisplayMonth::new(year, month)
        }
        (None, Some(_)) => Err(ConfigError::InvalidArguments(
            "year given without month".to_string(),
        )),
    }
}
