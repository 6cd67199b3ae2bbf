//! Integration tests for keyboard navigation and the picker built on it.

use chrono::{Datelike, NaiveDate};

use calnav::navigation::{NavCommand, NavEvent, NavState, Navigator};
use calnav::picker::DatePicker;
use calnav::selection::Selection;
use calnav::types::{DisplayMonth, MonthGrid, PickerContext, SelectionMode, WeekStart};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn month(year: i32, month: u32) -> DisplayMonth {
    DisplayMonth::new(year, month).unwrap()
}

fn focused_at(year: i32, m: u32, focus: NaiveDate) -> NavState {
    NavState {
        display_month: month(year, m),
        focused: Some(focus),
    }
}

fn sunday() -> Navigator {
    Navigator::new(WeekStart::Sunday)
}

fn test_context() -> PickerContext {
    PickerContext {
        week_start: WeekStart::Sunday,
        show_outside_days: true,
        default_month: month(2025, 6),
        selection_mode: SelectionMode::Single,
        max_selected: None,
        payment_due_date: None,
        color: false,
        today: date(2025, 6, 18),
    }
}

mod moves_within_grid {
    use super::*;

    #[test]
    fn test_move_right_and_left() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 10));

        let right = nav.apply(state, NavCommand::MoveRight);
        assert_eq!(right.state.focused, Some(date(2025, 6, 11)));
        assert_eq!(
            right.events,
            vec![NavEvent::FocusChanged(Some(date(2025, 6, 11)))]
        );

        let left = nav.apply(state, NavCommand::MoveLeft);
        assert_eq!(left.state.focused, Some(date(2025, 6, 9)));
        assert_eq!(left.state.display_month, month(2025, 6));
    }

    #[test]
    fn test_move_up_and_down() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 10));
        assert_eq!(
            nav.apply(state, NavCommand::MoveUp).state.focused,
            Some(date(2025, 6, 3))
        );
        assert_eq!(
            nav.apply(state, NavCommand::MoveDown).state.focused,
            Some(date(2025, 6, 17))
        );
    }

    #[test]
    fn test_row_edges_wrap_within_grid() {
        let nav = sunday();
        // June 7 is the last cell of the first row
        let state = focused_at(2025, 6, date(2025, 6, 7));
        let right = nav.apply(state, NavCommand::MoveRight);
        assert_eq!(right.state.focused, Some(date(2025, 6, 8)));
        assert_eq!(right.state.display_month, month(2025, 6));
    }

    #[test]
    fn test_outside_day_can_hold_focus() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 30));
        let right = nav.apply(state, NavCommand::MoveRight);
        assert_eq!(right.state.focused, Some(date(2025, 7, 1)));
        assert_eq!(right.state.display_month, month(2025, 6));
    }

    #[test]
    fn test_input_state_is_untouched() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 10));
        let before = state;
        let _ = nav.apply(state, NavCommand::MoveDown);
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_right_walks_whole_grid() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday, WeekStart::Saturday] {
            let nav = Navigator::new(week_start);
            let display = month(2025, 3);
            let grid = MonthGrid::new(display, week_start);
            let start = nav.apply(NavState::new(display), NavCommand::JumpHome).state;

            let end = (1..grid.len()).fold(start, |state, _| {
                nav.apply(state, NavCommand::MoveRight).state
            });
            assert_eq!(end.focused, grid.last().map(|cell| cell.date));
            assert_eq!(end.display_month, display);
        }
    }

    #[test]
    fn test_left_right_round_trip_from_interior() {
        let nav = Navigator::new(WeekStart::Monday);
        let display = month(2024, 2);
        let grid = MonthGrid::new(display, WeekStart::Monday);
        for index in 1..grid.len() - 1 {
            let focus = grid.cell(index).unwrap().date;
            let state = focused_at(2024, 2, focus);
            let back = nav.replay(state, [NavCommand::MoveLeft, NavCommand::MoveRight]);
            assert_eq!(back.state, state, "index {index}");
        }
    }
}

mod month_crossing {
    use super::*;

    #[test]
    fn test_move_left_from_first_cell() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 1));
        let left = nav.apply(state, NavCommand::MoveLeft);
        // Same column, last row of May
        assert_eq!(left.state.display_month, month(2025, 5));
        assert_eq!(left.state.focused, Some(date(2025, 5, 25)));
        assert_eq!(
            left.events,
            vec![
                NavEvent::DisplayMonthChanged(month(2025, 5)),
                NavEvent::FocusChanged(Some(date(2025, 5, 25))),
            ]
        );
    }

    #[test]
    fn test_move_up_from_first_row() {
        let nav = sunday();
        let state = focused_at(2026, 2, date(2026, 2, 4));
        let up = nav.apply(state, NavCommand::MoveUp);
        assert_eq!(up.state.display_month, month(2026, 1));
        assert_eq!(up.state.focused, Some(date(2026, 1, 28)));
    }

    #[test]
    fn test_move_down_from_last_row() {
        let nav = sunday();
        let state = focused_at(2026, 2, date(2026, 2, 25));
        let down = nav.apply(state, NavCommand::MoveDown);
        assert_eq!(down.state.display_month, month(2026, 3));
        assert_eq!(down.state.focused, Some(date(2026, 3, 4)));
    }

    #[test]
    fn test_shared_row_keeps_date_but_changes_month() {
        let nav = sunday();
        // June's last row is July's first row
        let state = focused_at(2025, 6, date(2025, 7, 3));
        let down = nav.apply(state, NavCommand::MoveDown);
        assert_eq!(down.state.display_month, month(2025, 7));
        assert_eq!(down.state.focused, Some(date(2025, 7, 3)));
        assert_eq!(
            down.events,
            vec![NavEvent::DisplayMonthChanged(month(2025, 7))]
        );
    }

    #[test]
    fn test_in_range_move_never_changes_month() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 20));
        for command in [
            NavCommand::MoveUp,
            NavCommand::MoveDown,
            NavCommand::MoveLeft,
            NavCommand::MoveRight,
        ] {
            let next = nav.apply(state, command);
            assert_eq!(next.state.display_month, month(2025, 6));
            assert!(
                !next
                    .events
                    .iter()
                    .any(|e| matches!(e, NavEvent::DisplayMonthChanged(_)))
            );
        }
    }

    #[test]
    fn test_december_to_january_keeps_weekday() {
        let nav = Navigator::new(WeekStart::Monday);
        let display = month(2025, 12);
        let grid = MonthGrid::new(display, WeekStart::Monday);
        let last = grid.last().unwrap().date;
        let state = NavState {
            display_month: display,
            focused: Some(last),
        };

        let next = nav.apply(state, NavCommand::MoveRight).state;
        assert_eq!(next.display_month, month(2026, 1));
        let focused = next.focused.unwrap();
        assert_eq!(focused.weekday(), last.weekday());
        assert!(MonthGrid::new(next.display_month, WeekStart::Monday).contains(focused));
    }

    #[test]
    fn test_focus_always_inside_rendered_grid() {
        let nav = Navigator::new(WeekStart::Saturday);
        let script = [
            NavCommand::MoveUp,
            NavCommand::MoveUp,
            NavCommand::MoveLeft,
            NavCommand::MoveUp,
            NavCommand::MoveDown,
            NavCommand::MoveDown,
            NavCommand::MoveDown,
            NavCommand::MoveDown,
            NavCommand::MoveDown,
            NavCommand::MoveDown,
            NavCommand::MoveRight,
        ];
        let mut state = focused_at(2025, 1, date(2025, 1, 8));
        for command in script {
            state = nav.apply(state, command).state;
            let focused = state.focused.unwrap();
            assert!(
                nav.grid(&state).contains(focused),
                "{focused} not in {}",
                state.display_month
            );
        }
    }

    #[test]
    fn test_no_crossing_past_supported_range() {
        let nav = sunday();
        let grid = MonthGrid::new(month(9999, 12), WeekStart::Sunday);
        let state = NavState {
            display_month: month(9999, 12),
            focused: grid.last().map(|cell| cell.date),
        };
        let next = nav.apply(state, NavCommand::MoveRight);
        assert_eq!(next.state, state);
        assert!(next.events.is_empty());
    }
}

mod jumps_and_actions {
    use super::*;

    #[test]
    fn test_jump_home_and_end() {
        let nav = Navigator::new(WeekStart::Monday);
        let state = focused_at(2025, 6, date(2025, 6, 18));
        assert_eq!(
            nav.apply(state, NavCommand::JumpHome).state.focused,
            Some(date(2025, 5, 26))
        );
        assert_eq!(
            nav.apply(state, NavCommand::JumpEnd).state.focused,
            Some(date(2025, 7, 6))
        );
    }

    #[test]
    fn test_jump_home_without_focus() {
        let nav = sunday();
        let home = nav.apply(NavState::new(month(2025, 6)), NavCommand::JumpHome);
        assert_eq!(home.state.focused, Some(date(2025, 6, 1)));
        assert_eq!(home.state.display_month, month(2025, 6));
    }

    #[test]
    fn test_directional_without_focus_is_noop() {
        let nav = sunday();
        let state = NavState::new(month(2025, 6));
        for command in [
            NavCommand::MoveLeft,
            NavCommand::MoveRight,
            NavCommand::MoveUp,
            NavCommand::MoveDown,
            NavCommand::Select,
        ] {
            let next = nav.apply(state, command);
            assert_eq!(next.state, state);
            assert!(next.events.is_empty());
        }
    }

    #[test]
    fn test_select_emits_event_without_moving_focus() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 12));
        let selected = nav.apply(state, NavCommand::Select);
        assert_eq!(selected.state, state);
        assert_eq!(
            selected.events,
            vec![NavEvent::DateSelected(date(2025, 6, 12))]
        );
    }

    #[test]
    fn test_set_display_month_without_focus() {
        let nav = sunday();
        let next = nav.apply(
            NavState::new(month(2025, 6)),
            NavCommand::SetDisplayMonth(month(2025, 9)),
        );
        assert_eq!(next.state.display_month, month(2025, 9));
        assert_eq!(next.state.focused, None);
        assert_eq!(
            next.events,
            vec![NavEvent::DisplayMonthChanged(month(2025, 9))]
        );
    }

    #[test]
    fn test_set_display_month_moves_stale_focus() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 10));
        let next = nav.apply(state, NavCommand::SetDisplayMonth(month(2025, 8)));
        assert_eq!(next.state.focused, Some(date(2025, 8, 1)));
    }

    #[test]
    fn test_set_display_month_keeps_visible_focus() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 30));
        let next = nav.apply(state, NavCommand::NextMonth);
        assert_eq!(next.state.display_month, month(2025, 7));
        assert_eq!(next.state.focused, Some(date(2025, 6, 30)));
    }

    #[test]
    fn test_previous_month() {
        let nav = sunday();
        let next = nav.apply(NavState::new(month(2025, 1)), NavCommand::PreviousMonth);
        assert_eq!(next.state.display_month, month(2024, 12));
    }

    #[test]
    fn test_open_and_close() {
        let nav = sunday();
        let state = NavState::new(month(2025, 6));

        let opened = nav.apply(state, NavCommand::Open { preferred: None });
        assert_eq!(opened.state.focused, Some(date(2025, 6, 1)));

        let preferred = nav.apply(
            state,
            NavCommand::Open {
                preferred: Some(date(2025, 6, 14)),
            },
        );
        assert_eq!(preferred.state.focused, Some(date(2025, 6, 14)));

        let not_visible = nav.apply(
            state,
            NavCommand::Open {
                preferred: Some(date(2025, 9, 14)),
            },
        );
        assert_eq!(not_visible.state.focused, Some(date(2025, 6, 1)));

        let closed = nav.apply(preferred.state, NavCommand::Close);
        assert_eq!(closed.state.focused, None);
        assert_eq!(closed.events, vec![NavEvent::FocusChanged(None)]);
    }

    #[test]
    fn test_replay_collects_events_in_order() {
        let nav = sunday();
        let state = focused_at(2025, 6, date(2025, 6, 1));
        let result = nav.replay(state, [NavCommand::MoveLeft, NavCommand::Select]);
        assert_eq!(
            result.events,
            vec![
                NavEvent::DisplayMonthChanged(month(2025, 5)),
                NavEvent::FocusChanged(Some(date(2025, 5, 25))),
                NavEvent::DateSelected(date(2025, 5, 25)),
            ]
        );
    }
}

mod picker {
    use super::*;

    #[test]
    fn test_mount_has_no_focus() {
        let picker = DatePicker::new(test_context());
        assert_eq!(picker.state(), NavState::new(month(2025, 6)));
        assert!(picker.selection().is_empty());
    }

    #[test]
    fn test_open_prefers_selected_then_today() {
        let mut picker = DatePicker::new(test_context());
        picker.open();
        assert_eq!(picker.state().focused, Some(date(2025, 6, 18)));

        let mut picker = DatePicker::new(test_context()).with_selected(&[date(2025, 6, 9)]);
        picker.open();
        assert_eq!(picker.state().focused, Some(date(2025, 6, 9)));
    }

    #[test]
    fn test_select_updates_selection() {
        let mut picker = DatePicker::new(test_context());
        picker.open();
        picker.dispatch(NavCommand::MoveRight);
        let events = picker.dispatch(NavCommand::Select);
        assert_eq!(events, vec![NavEvent::DateSelected(date(2025, 6, 19))]);
        assert_eq!(picker.selection(), &Selection::Single(Some(date(2025, 6, 19))));
    }

    #[test]
    fn test_range_selection_across_months() {
        let ctx = PickerContext {
            selection_mode: SelectionMode::Range,
            ..test_context()
        };
        let mut picker = DatePicker::new(ctx);
        picker.focus(date(2025, 6, 28));
        picker.dispatch(NavCommand::Select);
        picker.dispatch(NavCommand::NextMonth);
        picker.dispatch(NavCommand::MoveRight);
        picker.dispatch(NavCommand::MoveRight);
        picker.dispatch(NavCommand::Select);
        assert_eq!(
            picker.selection().dates(),
            vec![date(2025, 6, 28), date(2025, 7, 3)]
        );
    }

    #[test]
    fn test_focus_jumps_to_month_of_date() {
        let mut picker = DatePicker::new(test_context());
        let events = picker.focus(date(2025, 11, 5));
        assert_eq!(picker.state().display_month, month(2025, 11));
        assert_eq!(picker.state().focused, Some(date(2025, 11, 5)));
        assert_eq!(
            events,
            vec![
                NavEvent::DisplayMonthChanged(month(2025, 11)),
                NavEvent::FocusChanged(Some(date(2025, 11, 5))),
            ]
        );
    }

    #[test]
    fn test_focus_outside_supported_years_is_ignored() {
        let mut picker = DatePicker::new(test_context());
        let before = picker.state();
        assert!(picker.focus(date(0, 3, 5)).is_empty());
        assert!(picker.focus(date(10000, 1, 15)).is_empty());
        assert_eq!(picker.state(), before);

        picker.dispatch(NavCommand::PreviousMonth);
        assert_eq!(picker.state().display_month, month(2025, 5));
    }

    #[test]
    fn test_focus_at_last_supported_month_stays_put() {
        let mut picker = DatePicker::new(test_context());
        picker.focus(date(9999, 12, 31));
        assert_eq!(picker.state().display_month, month(9999, 12));
        assert!(picker.dispatch(NavCommand::NextMonth).is_empty());
        assert_eq!(picker.state().display_month, month(9999, 12));
    }

    #[test]
    fn test_close_clears_focus() {
        let mut picker = DatePicker::new(test_context());
        picker.open();
        picker.close();
        assert_eq!(picker.state().focused, None);
    }

    #[test]
    fn test_render_marks_focus() {
        let mut picker = DatePicker::new(test_context());
        picker.focus(date(2025, 6, 3));
        let lines = picker.render();
        assert_eq!(lines[2], "  1  2> 3  4  5  6  7");
    }
}
