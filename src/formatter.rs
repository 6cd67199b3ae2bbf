//! Text rendering of a month grid with focus, selection and highlight markers.

use chrono::{Datelike, Locale, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::navigation::{NavEvent, NavState};
use crate::selection::Selection;
use crate::types::{
    COLOR_BOLD, COLOR_DIM, COLOR_GREEN, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW,
    COLOR_TEAL, COLOR_UNDERLINE, DAYS_PER_WEEK, GRID_WIDTH, GridCell, MonthGrid, PickerContext,
    WeekStart,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Month name in nominative case for `locale`.
pub fn get_month_name(month: u32, locale: Locale) -> String {
    // chrono's %B yields the genitive form for Russian
    if locale == Locale::ru_RU {
        const RU: [&str; 12] = [
            "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
            "Октябрь", "Ноябрь", "Декабрь",
        ];
        if let Some(name) = RU.get(month.wrapping_sub(1) as usize) {
            return name.to_string();
        }
    }
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|date| date.format_localized("%B", locale).to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Parse month from string (numeric 1-12 or English name).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    const NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let s_lower = s.to_lowercase();
    if s_lower.chars().count() < 3 {
        return None;
    }
    NAMES
        .iter()
        .position(|name| name.starts_with(&s_lower))
        .map(|idx| idx as u32 + 1)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Month name and year centered over the grid.
pub fn format_month_header(grid: &MonthGrid, locale: Locale, color: bool) -> String {
    let month = grid.display_month;
    let header = format!("{} {}", get_month_name(month.month(), locale), month.year());
    let centered = center_text(&header, GRID_WIDTH);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Weekdays in column order for `week_start`.
pub fn get_weekday_order(week_start: WeekStart) -> [Weekday; DAYS_PER_WEEK] {
    let mut order = [Weekday::Mon; DAYS_PER_WEEK];
    let mut day = week_start.weekday();
    for slot in order.iter_mut() {
        *slot = day;
        day = day.succ();
    }
    order
}

/// Get 2-character weekday abbreviation for `locale`.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    // 2000-01-03 was a Monday
    let offset = weekday.num_days_from_monday() as u64;
    NaiveDate::from_ymd_opt(2000, 1, 3)
        .and_then(|monday| monday.checked_add_days(chrono::Days::new(offset)))
        .map(|date| date.format_localized("%a", locale).to_string())
        .unwrap_or_else(|| weekday.to_string())
        .chars()
        .take(2)
        .collect()
}

/// Weekday header row in column order.
pub fn format_weekday_headers(ctx: &PickerContext, locale: Locale) -> String {
    let names: String = get_weekday_order(ctx.week_start)
        .iter()
        .map(|&weekday| format!(" {:>2}", get_weekday_short_name(weekday, locale)))
        .collect();
    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, names, COLOR_RESET)
    } else {
        names
    }
}

/// Format one cell: a marker column then the day number.
///
/// Without color the marker carries the state: `>` focused, `*` selected,
/// `!` payment due. With color the marker is blank and the digits are styled.
/// Priority: focused > selected > payment due > today > outside day.
fn format_day(
    ctx: &PickerContext,
    cell: &GridCell,
    state: &NavState,
    selection: &Selection,
) -> String {
    let is_focused = state.focused == Some(cell.date);
    let is_selected = selection.contains(cell.date);
    let is_due = ctx.payment_due_date == Some(cell.date);
    let is_today = ctx.today == cell.date;
    let hidden = cell.is_outside_month && !ctx.show_outside_days;

    let digits = if hidden {
        "  ".to_string()
    } else {
        format!("{:>2}", cell.date.day())
    };

    if !ctx.color {
        let marker = if is_focused {
            '>'
        } else if hidden {
            ' '
        } else if is_selected {
            '*'
        } else if is_due {
            '!'
        } else {
            ' '
        };
        return format!("{}{}", marker, digits);
    }

    let style = if is_focused {
        COLOR_REVERSE
    } else if hidden {
        ""
    } else if is_selected {
        COLOR_GREEN
    } else if is_due {
        // Both codes apply; reset clears them together
        return format!(" {}{}{}{}", COLOR_RED, COLOR_UNDERLINE, digits, COLOR_RESET);
    } else if is_today {
        COLOR_BOLD
    } else if cell.is_outside_month {
        COLOR_DIM
    } else {
        ""
    };

    if style.is_empty() {
        format!(" {}", digits)
    } else {
        format!(" {}{}{}", style, digits, COLOR_RESET)
    }
}

/// Format a month as lines: header, weekday row, one line per week.
pub fn format_month_grid(
    ctx: &PickerContext,
    grid: &MonthGrid,
    state: &NavState,
    selection: &Selection,
) -> Vec<String> {
    let locale = get_system_locale();
    let mut lines = Vec::with_capacity(grid.week_count() + 2);

    lines.push(format_month_header(grid, locale, ctx.color));
    lines.push(format_weekday_headers(ctx, locale));

    for week in &grid.weeks {
        let line: String = week
            .iter()
            .map(|cell| format_day(ctx, cell, state, selection))
            .collect();
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// One line describing a navigation event.
pub fn format_event(event: &NavEvent) -> String {
    match event {
        NavEvent::DateSelected(date) => format!("selected {}", date),
        NavEvent::DisplayMonthChanged(month) => format!("month {}", month),
        NavEvent::FocusChanged(Some(date)) => format!("focus {}", date),
        NavEvent::FocusChanged(None) => "focus none".to_string(),
    }
}

/// Selection summary, e.g. `selection: 2025-06-03, 2025-06-10`.
pub fn format_selection(selection: &Selection) -> String {
    let dates = selection.dates();
    if dates.is_empty() {
        return "selection: none".to_string();
    }
    let joined = dates
        .iter()
        .map(|date| date.to_string())
        .collect::<Vec<_>>()
        .join(match selection {
            Selection::Range { .. } => " .. ",
            _ => ", ",
        });
    format!("selection: {}", joined)
}
