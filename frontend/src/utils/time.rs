use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Inclusive number of calendar days between two dates.
pub fn count_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().abs() + 1
}

pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// A calendar month, independent of any particular day within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::containing(today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn shift(self, delta: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.shift(1).first_day().pred_opt().unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Cells of a Sunday-first month grid; `None` pads the first week.
pub fn month_grid(cursor: MonthCursor) -> Vec<Option<NaiveDate>> {
    let first = cursor.first_day();
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = first.iter_days().take_while(|day| cursor.contains(*day));
    std::iter::repeat(None)
        .take(leading)
        .chain(days.map(Some))
        .collect()
}
