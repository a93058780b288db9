//! Locale-dependent names for months, weekdays and widget captions.
//!
//! Each supported locale is a [`LocaleNames`] provider so that every widget
//! reads its text through the same interface regardless of language.

use chrono::Weekday;

use crate::time::{CalendarDate, OrNaN};

/// Text shown in place of a localized name when the date is invalid.
pub const INVALID_DATE: &str = "Invalid Date";

/// Display locale. Only an exact `en` selects English; everything else is Chinese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    En,
    #[default]
    Cn,
}

impl Locale {
    pub fn from_param(raw: &str) -> Self {
        if raw == "en" {
            Locale::En
        } else {
            Locale::Cn
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cn => "cn",
        }
    }

    pub fn names(&self) -> &'static dyn LocaleNames {
        match self {
            Locale::En => &English,
            Locale::Cn => &Chinese,
        }
    }
}

/// Provider of every localized string a widget can display.
pub trait LocaleNames: Send + Sync {
    /// Month name for a 1-based month number.
    fn month(&self, month: u32) -> &'static str;

    fn weekday(&self, weekday: Weekday) -> &'static str;

    /// Countdown caption when the target is today.
    fn today(&self) -> &'static str;

    /// Countdown caption when the target is in the future.
    fn remaining(&self) -> &'static str;

    /// Countdown caption when the target is in the past.
    fn elapsed(&self) -> &'static str;

    /// Unit under the countdown number.
    fn days_unit(&self) -> &'static str;

    /// Suffix after the week number.
    fn week_suffix(&self) -> &'static str;
}

const EN_MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const CN_MONTHS: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

const CN_WEEKDAYS: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

fn lookup_month(table: &'static [&'static str; 12], month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(INVALID_DATE)
}

/// English names: abbreviated upper-case months, full weekdays.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl LocaleNames for English {
    fn month(&self, month: u32) -> &'static str {
        lookup_month(&EN_MONTHS, month)
    }

    fn weekday(&self, weekday: Weekday) -> &'static str {
        EN_WEEKDAYS[weekday.num_days_from_sunday() as usize]
    }

    fn today(&self) -> &'static str {
        "Today"
    }

    fn remaining(&self) -> &'static str {
        "Left"
    }

    fn elapsed(&self) -> &'static str {
        "Past"
    }

    fn days_unit(&self) -> &'static str {
        "days"
    }

    fn week_suffix(&self) -> &'static str {
        "W"
    }
}

/// Simplified Chinese names as written by zh-CN long-form formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chinese;

impl LocaleNames for Chinese {
    fn month(&self, month: u32) -> &'static str {
        lookup_month(&CN_MONTHS, month)
    }

    fn weekday(&self, weekday: Weekday) -> &'static str {
        CN_WEEKDAYS[weekday.num_days_from_sunday() as usize]
    }

    fn today(&self) -> &'static str {
        "今天"
    }

    fn remaining(&self) -> &'static str {
        "还有"
    }

    fn elapsed(&self) -> &'static str {
        "已过"
    }

    fn days_unit(&self) -> &'static str {
        "天"
    }

    fn week_suffix(&self) -> &'static str {
        "周"
    }
}

/// Localized month, day and weekday for a resolved date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInfo {
    pub month: &'static str,
    pub day: OrNaN<u32>,
    pub weekday: &'static str,
}

impl DateInfo {
    pub fn new(date: &CalendarDate, locale: Locale) -> Self {
        let names = locale.names();
        Self {
            month: date.month().map_or(INVALID_DATE, |m| names.month(m)),
            day: OrNaN(date.day()),
            weekday: date.weekday().map_or(INVALID_DATE, |w| names.weekday(w)),
        }
    }
}
