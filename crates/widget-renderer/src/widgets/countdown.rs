//! Countdown face (type 6).

use calendar_common::{LocaleNames, OrNaN};

use super::WidgetContext;
use crate::layout::{text_len, COUNTDOWN_FONT_SIZE};
use crate::template::{binding_rings, document, Canvas, FONT_STACK, HEADER_FONT_STACK, TEXT_COLOR};

/// Color of the `--` placeholder shown on the target day.
const TODAY_COLOR: &str = "#96a5af";

/// Relation between the target date and today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Today,
    /// Days until the target
    Remaining(u64),
    /// Days since the target
    Elapsed(u64),
    /// Target date could not be parsed
    Unknown,
}

impl CountdownState {
    pub fn from_delta(delta: Option<i64>) -> Self {
        match delta {
            Some(0) => CountdownState::Today,
            Some(d) if d > 0 => CountdownState::Remaining(d.unsigned_abs()),
            Some(d) => CountdownState::Elapsed(d.unsigned_abs()),
            None => CountdownState::Unknown,
        }
    }

    /// Caption in the header band.
    pub fn label(&self, names: &dyn LocaleNames) -> &'static str {
        match self {
            CountdownState::Today => names.today(),
            CountdownState::Remaining(_) => names.remaining(),
            CountdownState::Elapsed(_) | CountdownState::Unknown => names.elapsed(),
        }
    }

    /// The large number in the body.
    pub fn days_text(&self) -> String {
        match self {
            CountdownState::Today => "--".to_string(),
            CountdownState::Remaining(d) | CountdownState::Elapsed(d) => d.to_string(),
            CountdownState::Unknown => OrNaN::<u64>(None).to_string(),
        }
    }

    fn days_color(&self) -> &'static str {
        match self {
            CountdownState::Today => TODAY_COLOR,
            _ => TEXT_COLOR,
        }
    }
}

/// Type 6: days left until (or since) the requested date.
pub fn countdown(ctx: &WidgetContext<'_>) -> String {
    let state = CountdownState::from_delta(ctx.date.days_from(ctx.now));
    let names = ctx.names();
    let days_text = state.days_text();
    let font_size = COUNTDOWN_FONT_SIZE.lookup(text_len(&days_text));

    let month_day = match (ctx.date.month(), ctx.date.day()) {
        (Some(m), Some(d)) => format!("{:02}-{:02}", m, d),
        _ => "NaN-NaN".to_string(),
    };

    let mut body = format!(
        r##"    <path d="M512,454.847248 C512,486.933004 487,512 455,512 L57,512 C25,512 0,486.933004 0,454.847248 L0,126.970934 C0,95.8878582 25,69.8181818 57,69.8181818 L455,69.8181818 C487,69.8181818 512,95.8878582 512,126.970934 L512,454.847248 Z" fill="#EFEFEF" fill-rule="nonzero"/>
    <path d="M484,0 L437,0 L28,0 C13,0 0,13.0830467 0,28.1788698 L0,186.181818 L512,186.181818 L512,28.1788698 C512,13.0830467 499,0 484,0 Z" fill="{primary}" fill-rule="nonzero"/>
"##,
        primary = ctx.scheme.primary
    );
    body.push_str(&binding_rings(&ctx.scheme, 22.0, 10.0));
    body.push_str(&format!(
        r##"    <text id="day" x="256" y="400" fill="{days_color}" font-family="{font}" font-size="{font_size}" style="text-anchor: middle">{days_text}</text>
    <text id="weekday" x="256" y="480" fill="{text_color}" font-family="{font}" font-size="64px" style="text-anchor: middle">{unit}</text>
    <text id="year" fill="#FFFFFF" font-family="{header_font}" font-size="62" font-weight="normal">
        <tspan x="54.3" y="81.5">{year}</tspan>
    </text>
    <text id="month-day" font-family="{header_font}" font-size="77.6" font-weight="normal" fill="#FFFFFF">
        <tspan x="54.3" y="159.6">{month_day}</tspan>
    </text>
    <text id="desc" font-family="{header_font}" font-size="62" font-weight="normal" fill="#FFFFFF">
        <tspan x="333.6" y="153.1">{label}</tspan>
    </text>
"##,
        days_color = state.days_color(),
        font = FONT_STACK,
        font_size = font_size,
        days_text = days_text,
        text_color = TEXT_COLOR,
        unit = names.days_unit(),
        header_font = HEADER_FONT_STACK,
        year = OrNaN(ctx.date.year()),
        month_day = month_day,
        label = state.label(names),
    ));

    document(Canvas::Calendar, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar_common::{Chinese, English};

    #[test]
    fn test_state_from_delta() {
        assert_eq!(CountdownState::from_delta(Some(0)), CountdownState::Today);
        assert_eq!(CountdownState::from_delta(Some(5)), CountdownState::Remaining(5));
        assert_eq!(CountdownState::from_delta(Some(-12)), CountdownState::Elapsed(12));
        assert_eq!(CountdownState::from_delta(None), CountdownState::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CountdownState::Today.label(&English), "Today");
        assert_eq!(CountdownState::Today.label(&Chinese), "今天");
        assert_eq!(CountdownState::Remaining(1).label(&Chinese), "还有");
        assert_eq!(CountdownState::Elapsed(1).label(&English), "Past");
    }

    #[test]
    fn test_days_text() {
        assert_eq!(CountdownState::Today.days_text(), "--");
        assert_eq!(CountdownState::Elapsed(365).days_text(), "365");
        assert_eq!(CountdownState::Unknown.days_text(), "NaN");
    }
}
