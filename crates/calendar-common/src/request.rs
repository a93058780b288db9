//! Render requests and the query-parameter resolver that builds them.

use std::fmt;

use crate::color::ColorScheme;
use crate::locale::Locale;

/// Widget layout selected by the `type` parameter.
///
/// Tag `2` is reserved and, like any other unknown tag, resolves to
/// [`WidgetType::YearTop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetType {
    /// 1: month banner with day and weekday
    #[default]
    YearTop,
    /// 3: month banner with day and year
    YearBottom,
    /// 4: year banner with month name
    MonthYear,
    /// 5: year only
    Year,
    /// 6: countdown to the date
    Countdown,
    /// 7: percentage badge
    Percentage,
    /// 8: large number badge
    Number,
    /// 9: compact number badge
    CompactNumber,
    /// 10: week-of-year badge
    WeekOfYear,
}

impl WidgetType {
    pub const ALL: [WidgetType; 9] = [
        WidgetType::YearTop,
        WidgetType::YearBottom,
        WidgetType::MonthYear,
        WidgetType::Year,
        WidgetType::Countdown,
        WidgetType::Percentage,
        WidgetType::Number,
        WidgetType::CompactNumber,
        WidgetType::WeekOfYear,
    ];

    /// Match a `type` tag exactly (`"03"` is not `"3"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        WidgetType::ALL.into_iter().find(|w| w.tag() == tag)
    }

    /// Resolve a `type` tag, falling back to type 1.
    pub fn resolve(tag: &str) -> Self {
        match WidgetType::from_tag(tag) {
            Some(widget) => widget,
            None => {
                tracing::debug!(tag = %tag, "Unknown widget type, using type 1");
                WidgetType::default()
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            WidgetType::YearTop => "1",
            WidgetType::YearBottom => "3",
            WidgetType::MonthYear => "4",
            WidgetType::Year => "5",
            WidgetType::Countdown => "6",
            WidgetType::Percentage => "7",
            WidgetType::Number => "8",
            WidgetType::CompactNumber => "9",
            WidgetType::WeekOfYear => "10",
        }
    }

    /// Whether this widget reads the free-text `content` parameter.
    pub fn uses_content(&self) -> bool {
        matches!(
            self,
            WidgetType::Percentage | WidgetType::Number | WidgetType::CompactNumber
        )
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Normalized input to the widget renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Lower-cased color key; unknown keys are resolved at lookup time
    pub color: String,
    /// Raw date string, `None` meaning "now" at render time
    pub date: Option<String>,
    pub locale: Locale,
    pub widget: WidgetType,
    /// Free text for badge widgets, interpolated unescaped
    pub content: String,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            color: "red".to_string(),
            date: None,
            locale: Locale::default(),
            widget: WidgetType::default(),
            content: String::new(),
        }
    }
}

/// First occurrence of each recognized query key.
#[derive(Debug, Default)]
struct RawParams {
    color: Option<String>,
    date: Option<String>,
    locale: Option<String>,
    widget: Option<String>,
    content: Option<String>,
}

impl RawParams {
    fn collect<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw = RawParams::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "color" => &mut raw.color,
                "date" => &mut raw.date,
                "locale" => &mut raw.locale,
                "type" => &mut raw.widget,
                "content" => &mut raw.content,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }
        raw
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RenderRequest {
    /// Build a request from decoded query pairs.
    ///
    /// Missing or empty values take their defaults: `color=red`,
    /// `locale=cn`, `type=1`, empty `content`, and no date.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let raw = RawParams::collect(pairs);

        let color = non_empty(raw.color)
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| "red".to_string());
        let locale = non_empty(raw.locale)
            .map(|l| Locale::from_param(&l))
            .unwrap_or_default();
        let widget = non_empty(raw.widget)
            .map(|t| WidgetType::resolve(&t))
            .unwrap_or_default();

        Self {
            color,
            date: non_empty(raw.date),
            locale,
            widget,
            content: non_empty(raw.content).unwrap_or_default(),
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::for_key(&self.color)
    }
}
