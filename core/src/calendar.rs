//! Boundary: month and day pillars (月建 / 日辰) for the interpretation payload.
//!
//! Month boundaries use a fixed table of approximate solar-term days rather
//! than astronomical solar terms. The error is at most a day or two around
//! each boundary, which is acceptable for annotating a reading.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use zengshan_types::{Branch, Stem, StemBranch};

/// Approximate first day of each solar month, indexed by calendar month - 1,
/// with the branch that month opens.
const SOLAR_MONTH_STARTS: [(u32, Branch); 12] = [
    (6, Branch::Chou), // 小寒
    (4, Branch::Yin),  // 立春
    (6, Branch::Mao),  // 惊蛰
    (5, Branch::Chen), // 清明
    (6, Branch::Si),   // 立夏
    (6, Branch::Wu),   // 芒种
    (7, Branch::Wei),  // 小暑
    (8, Branch::Shen), // 立秋
    (8, Branch::You),  // 白露
    (8, Branch::Xu),   // 寒露
    (7, Branch::Hai),  // 立冬
    (7, Branch::Zi),   // 大雪
];

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("calendar unavailable: {0}")]
    Unavailable(String),
    #[error("invalid date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Month and day pillars of one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GanZhiDate {
    date: NaiveDate,
    month: StemBranch,
    day: StemBranch,
}

impl GanZhiDate {
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            month: month_pillar(date),
            day: day_pillar(date),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn month(&self) -> StemBranch {
        self.month
    }

    #[must_use]
    pub fn day(&self) -> StemBranch {
        self.day
    }
}

impl fmt::Display for GanZhiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}月 {}日", self.month, self.day)
    }
}

/// Supplies today's pillars.
pub trait Calendar {
    fn today(&self) -> Result<GanZhiDate, CalendarError>;
}

/// Local wall-clock date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn today(&self) -> Result<GanZhiDate, CalendarError> {
        Ok(GanZhiDate::for_date(chrono::Local::now().date_naive()))
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar {
    date: NaiveDate,
}

impl FixedCalendar {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }
}

impl From<NaiveDate> for FixedCalendar {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Calendar for FixedCalendar {
    fn today(&self) -> Result<GanZhiDate, CalendarError> {
        Ok(GanZhiDate::for_date(self.date))
    }
}

/// 1949-10-01 was a 甲子 day.
fn day_cycle_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1949, 10, 1).unwrap_or(NaiveDate::MIN)
}

fn day_pillar(date: NaiveDate) -> StemBranch {
    let days = date.signed_duration_since(day_cycle_anchor()).num_days();
    StemBranch::from_cycle_index(days.rem_euclid(60) as usize)
}

fn month_branch(date: NaiveDate) -> Branch {
    let month_index = date.month0() as usize;
    let (start_day, branch) = SOLAR_MONTH_STARTS[month_index];
    if date.day() >= start_day {
        branch
    } else {
        SOLAR_MONTH_STARTS[(month_index + 11) % 12].1
    }
}

/// The solar year turns over at 立春, not on January 1.
fn solar_year(date: NaiveDate) -> i32 {
    let (lichun_day, _) = SOLAR_MONTH_STARTS[1];
    if date.month() < 2 || (date.month() == 2 && date.day() < lichun_day) {
        date.year() - 1
    } else {
        date.year()
    }
}

fn month_pillar(date: NaiveDate) -> StemBranch {
    let branch = month_branch(date);
    // 1984 was a 甲 year.
    let year_stem = (solar_year(date) - 1984).rem_euclid(10) as usize;
    // 五虎遁: the 寅 month of a 甲 or 己 year is 丙寅, and so on in steps of two.
    let yin_month_stem = (year_stem * 2 + 2) % 10;
    let months_since_yin = (branch.index() + 12 - Branch::Yin.index()) % 12;
    StemBranch::new(
        Stem::from_index(yin_month_stem + months_since_yin),
        branch,
    )
}
