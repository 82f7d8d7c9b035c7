//! Calendar engine for the booking flow.
//!
//! Everything here is a pure function of its arguments: the month grid
//! (leading padding for weekday alignment followed by the month's days)
//! and the rule deciding which dates a visitor may book. "Today" is always
//! passed in by the caller.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use std::fmt;

/// Column headers for the 7-column grid, Sunday first
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A calendar month, stored as its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Build from a year and a 1-based month; `None` for months outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// The month that contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Weekday index of day 1 (0 = Sunday .. 6 = Saturday)
    pub fn first_day_of_week(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            2 => {
                if is_leap_year(self.year()) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// The following month. Stays put at the end of chrono's supported range.
    pub fn next(self) -> Self {
        self.0.checked_add_months(Months::new(1)).map(Self).unwrap_or(self)
    }

    /// The preceding month. Stays put at the start of chrono's supported range.
    pub fn prev(self) -> Self {
        self.0.checked_sub_months(Months::new(1)).map(Self).unwrap_or(self)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.0.month0() as usize]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year())
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// One slot of the bare month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before day 1
    Blank,
    Day(NaiveDate),
}

impl GridCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(date) => Some(*date),
        }
    }
}

/// Leading blanks up to the weekday of day 1, then every day of the month
/// in order. There is no trailing padding, so the last row may be short.
pub fn compute_month_grid(year_month: YearMonth) -> Vec<GridCell> {
    let leading = year_month.first_day_of_week() as usize;
    let days = year_month.days_in_month();

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(GridCell::Blank).take(leading));
    cells.extend(
        (1..=days)
            .filter_map(|day| NaiveDate::from_ymd_opt(year_month.year(), year_month.month(), day))
            .map(GridCell::Day),
    );
    cells
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Past dates and weekends cannot be booked. Today is bookable on weekdays.
pub fn is_date_disabled(date: NaiveDate, today: NaiveDate) -> bool {
    date < today || is_weekend(date)
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A grid cell annotated for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Option<NaiveDate>,
    pub day_type: CalendarDayType,
    pub is_disabled: bool,
    pub is_selected: bool,
    pub is_today: bool,
}

impl CalendarDay {
    /// Day of month, `None` for padding
    pub fn day(&self) -> Option<u32> {
        self.date.map(|date| date.day())
    }
}

/// A month ready to render: padding plus annotated days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year_month: YearMonth,
    pub first_day_of_week: u32,
    pub days: Vec<CalendarDay>,
}

/// Annotate the grid of `year_month` with selectability, the current
/// selection and today's marker
pub fn generate_calendar_month(
    year_month: YearMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> CalendarMonth {
    let days: Vec<CalendarDay> = compute_month_grid(year_month)
        .into_iter()
        .map(|cell| match cell {
            GridCell::Blank => CalendarDay {
                date: None,
                day_type: CalendarDayType::PaddingBefore,
                is_disabled: true,
                is_selected: false,
                is_today: false,
            },
            GridCell::Day(date) => CalendarDay {
                date: Some(date),
                day_type: CalendarDayType::MonthDay,
                is_disabled: is_date_disabled(date, today),
                is_selected: selected == Some(date),
                is_today: date == today,
            },
        })
        .collect();

    log::debug!("calendar: generated {} cells for {}", days.len(), year_month);

    CalendarMonth {
        year_month,
        first_day_of_week: year_month.first_day_of_week(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(ym(2025, 1).days_in_month(), 31);
        assert_eq!(ym(2025, 4).days_in_month(), 30);
        assert_eq!(ym(2025, 2).days_in_month(), 28);
        assert_eq!(ym(2024, 2).days_in_month(), 29);
        assert_eq!(ym(1900, 2).days_in_month(), 28);
        assert_eq!(ym(2000, 2).days_in_month(), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_year_month_rejects_invalid_month() {
        assert!(YearMonth::new(2026, 0).is_none());
        assert!(YearMonth::new(2026, 13).is_none());
        assert_eq!(YearMonth::containing(date(2026, 10, 18)), ym(2026, 10));
    }

    #[test]
    fn test_month_name_and_display() {
        assert_eq!(ym(2026, 1).month_name(), "January");
        assert_eq!(ym(2026, 12).month_name(), "December");
        assert_eq!(ym(2026, 10).to_string(), "October 2026");
    }

    #[test]
    fn test_next_and_prev_roll_over_year() {
        assert_eq!(ym(2026, 12).next(), ym(2027, 1));
        assert_eq!(ym(2027, 1).prev(), ym(2026, 12));
        assert_eq!(ym(2026, 6).next(), ym(2026, 7));

        for month in 1..=12 {
            let start = ym(2026, month);
            assert_eq!(start.next().prev(), start);
            assert_eq!(start.prev().next(), start);
        }
    }

    #[test]
    fn test_grid_for_known_months() {
        // 1 Oct 2026 is a Thursday
        let grid = compute_month_grid(ym(2026, 10));
        assert_eq!(grid.len(), 4 + 31);
        assert!(grid[..4].iter().all(|cell| *cell == GridCell::Blank));
        assert_eq!(grid[4], GridCell::Day(date(2026, 10, 1)));
        assert_eq!(grid.last(), Some(&GridCell::Day(date(2026, 10, 31))));

        // 1 Sep 2024 is a Sunday, so no padding at all
        let grid = compute_month_grid(ym(2024, 9));
        assert_eq!(grid.len(), 30);
        assert_eq!(grid[0], GridCell::Day(date(2024, 9, 1)));
    }

    #[test]
    fn test_grid_shape_holds_for_every_month() {
        for year in 1999..=2032 {
            for month in 1..=12 {
                let year_month = ym(year, month);
                let grid = compute_month_grid(year_month);

                let leading = grid.iter().take_while(|cell| **cell == GridCell::Blank).count();
                assert_eq!(leading as u32, year_month.first_day_of_week());

                let days: Vec<NaiveDate> = grid.iter().filter_map(GridCell::date).collect();
                assert_eq!(days.len() as u32, year_month.days_in_month());
                assert_eq!(days.len() + leading, grid.len());
                assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(days.iter().all(|day| year_month.contains(*day)));
            }
        }
    }

    #[test]
    fn test_grid_is_stable_across_calls() {
        let first = compute_month_grid(ym(2026, 2));
        let _ = compute_month_grid(ym(2031, 7));
        assert_eq!(compute_month_grid(ym(2026, 2)), first);
    }

    #[test]
    fn test_past_dates_and_weekends_disabled() {
        // Wednesday
        let today = date(2026, 10, 14);

        assert!(!is_date_disabled(today, today));
        assert!(is_date_disabled(date(2026, 10, 13), today));
        assert!(is_date_disabled(date(2025, 1, 6), today));
        assert!(!is_date_disabled(date(2026, 10, 15), today));
        assert!(is_date_disabled(date(2026, 10, 17), today));
        assert!(is_date_disabled(date(2026, 10, 18), today));
        assert!(!is_date_disabled(date(2026, 10, 19), today));
    }

    #[test]
    fn test_today_disabled_only_on_weekend() {
        let saturday = date(2026, 10, 17);
        let sunday = date(2026, 10, 18);
        let monday = date(2026, 10, 19);

        assert!(is_date_disabled(saturday, saturday));
        assert!(is_date_disabled(sunday, sunday));
        assert!(!is_date_disabled(monday, monday));
    }

    #[test]
    fn test_disabled_rule_over_a_range() {
        let today = date(2026, 10, 14);
        let mut day = date(2026, 9, 1);
        while day < date(2026, 12, 31) {
            let expected = day < today || is_weekend(day);
            assert_eq!(is_date_disabled(day, today), expected, "{}", day);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_generate_calendar_month_annotations() {
        let today = date(2026, 10, 14);
        let selected = date(2026, 10, 28);
        let month = generate_calendar_month(ym(2026, 10), today, Some(selected));

        assert_eq!(month.first_day_of_week, 4);
        assert_eq!(month.days.len(), 35);

        let padding = &month.days[0];
        assert_eq!(padding.day_type, CalendarDayType::PaddingBefore);
        assert!(padding.is_disabled);
        assert_eq!(padding.day(), None);

        let today_cell = month.days.iter().find(|d| d.date == Some(today)).unwrap();
        assert!(today_cell.is_today);
        assert!(!today_cell.is_disabled);

        let selected_cells: Vec<_> = month.days.iter().filter(|d| d.is_selected).collect();
        assert_eq!(selected_cells.len(), 1);
        assert_eq!(selected_cells[0].day(), Some(28));
    }
}
