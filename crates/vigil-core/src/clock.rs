//! Time and date text formatting.

use core::fmt::Write;

use heapless::String;

pub const TIME_TEXT_BYTES: usize = 8;
pub const DATE_LINE_BYTES: usize = 32;

pub type TimeText = String<TIME_TEXT_BYTES>;
pub type DateLineText = String<DATE_LINE_BYTES>;

/// Day of week as delivered by the platform tick service.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

/// Broken-down wall-clock reading carried by a tick event. The platform
/// owns all calendar arithmetic; the core only formats.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WallClock {
    pub hour: u8,
    pub minute: u8,
    pub weekday: Weekday,
    pub day_of_month: u8,
    pub is_24h: bool,
}

/// Calendar datum captured at day boundaries, kept so the date line can
/// be recomposed when the temperature changes between daily ticks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateReading {
    pub weekday: Weekday,
    pub day_of_month: u8,
}

pub fn format_time(clock: &WallClock) -> TimeText {
    let hour = if clock.is_24h {
        clock.hour
    } else {
        twelve_hour(clock.hour)
    };

    let mut out = TimeText::new();
    let _ = write!(out, "{:02}:{:02}", hour, clock.minute);
    out
}

/// AM/PM as two glyphs for side-by-side vertical stacking. Both are empty
/// in 24-hour mode.
pub fn ampm_glyphs(clock: &WallClock) -> (&'static str, &'static str) {
    if clock.is_24h {
        ("", "")
    } else if clock.hour < 12 {
        ("A", "M")
    } else {
        ("P", "M")
    }
}

fn twelve_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// English ordinal suffix. Days 11/12/13 take the "th" default like every
/// other day outside the 1/2/3 column.
pub fn ordinal_suffix(day: u8) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Composed date line: `<Weekday> the <Day><Suffix> at <Temp>`.
pub fn format_date_line(date: &DateReading, temperature: &str) -> DateLineText {
    let mut out = DateLineText::new();
    let _ = write!(
        out,
        "{} the {}{} at {}",
        date.weekday.name(),
        date.day_of_month,
        ordinal_suffix(date.day_of_month),
        temperature
    );
    out
}
