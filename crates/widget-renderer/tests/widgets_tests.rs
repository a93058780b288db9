//! Tests for widget rendering.
//!
//! All renders use a fixed clock so that countdown and "now" dates are
//! deterministic.

use calendar_common::{ColorKey, Locale, RenderRequest, WidgetType};
use chrono::NaiveDate;
use widget_renderer::{render_with, FixedClock};

fn clock(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(15, 45, 0)
            .unwrap(),
    )
}

fn new_year() -> FixedClock {
    clock(2025, 1, 1)
}

fn request(widget: WidgetType) -> RenderRequest {
    RenderRequest {
        widget,
        date: Some("2025-01-01".to_string()),
        ..RenderRequest::default()
    }
}

fn render_query(pairs: &[(&str, &str)]) -> String {
    render_with(&RenderRequest::from_query_pairs(pairs.iter().copied()), &new_year())
}

// ============================================================================
// Cross-widget properties
// ============================================================================

#[test]
fn test_every_scheme_color_appears_in_every_widget() {
    for key in ColorKey::ALL {
        let scheme = key.scheme();
        for widget in WidgetType::ALL {
            let mut req = request(widget);
            req.color = key.as_str().to_string();
            req.content = "12".to_string();
            let svg = render_with(&req, &new_year());
            assert!(
                svg.contains(scheme.primary),
                "type {} missing primary of {}",
                widget,
                key
            );
            assert!(
                svg.contains(scheme.secondary),
                "type {} missing secondary of {}",
                widget,
                key
            );
        }
    }
}

#[test]
fn test_unknown_color_renders_as_red() {
    for widget in WidgetType::ALL {
        let mut teal = request(widget);
        teal.color = "teal".to_string();
        let red = request(widget);
        assert_eq!(
            render_with(&teal, &new_year()),
            render_with(&red, &new_year()),
            "type {}",
            widget
        );
    }
}

#[test]
fn test_unknown_type_renders_as_type_one() {
    let unknown = render_query(&[("type", "99"), ("date", "2025-03-08")]);
    let reserved = render_query(&[("type", "2"), ("date", "2025-03-08")]);
    let type_one = render_query(&[("type", "1"), ("date", "2025-03-08")]);
    assert_eq!(unknown, type_one);
    assert_eq!(reserved, type_one);
}

#[test]
fn test_explicit_date_is_idempotent() {
    for widget in WidgetType::ALL {
        let req = request(widget);
        assert_eq!(render_with(&req, &new_year()), render_with(&req, &new_year()));
    }
}

#[test]
fn test_explicit_date_ignores_clock_for_calendar_faces() {
    let req = request(WidgetType::YearTop);
    assert_eq!(
        render_with(&req, &clock(2025, 1, 1)),
        render_with(&req, &clock(2031, 7, 19))
    );
}

#[test]
fn test_canvas_sizes() {
    for widget in WidgetType::ALL {
        let svg = render_with(&request(widget), &new_year());
        let expected = match widget {
            WidgetType::Number | WidgetType::CompactNumber => "viewBox=\"0 0 508 506\"",
            _ => "viewBox=\"0 0 512 512\"",
        };
        assert!(svg.contains(expected), "type {}", widget);
        assert_eq!(svg.matches("<svg").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

// ============================================================================
// Calendar faces
// ============================================================================

#[test]
fn test_type_one_english() {
    let svg = render_query(&[("date", "2025-01-01"), ("locale", "en")]);
    assert!(svg.contains(">JAN</text>"));
    assert!(svg.contains(">1</text>"));
    assert!(svg.contains(">Wednesday</text>"));
}

#[test]
fn test_type_one_chinese() {
    let svg = render_query(&[("date", "2025-01-01")]);
    assert!(svg.contains(">一月</text>"));
    assert!(svg.contains(">星期三</text>"));
}

#[test]
fn test_locales_select_different_names() {
    let en = render_query(&[("date", "2025-08-15"), ("locale", "en")]);
    let cn = render_query(&[("date", "2025-08-15"), ("locale", "cn")]);
    assert!(en.contains(">AUG<") && en.contains(">Friday<"));
    assert!(cn.contains(">八月<") && cn.contains(">星期五<"));
    assert_ne!(en, cn);
}

#[test]
fn test_type_three_shows_year_underneath() {
    let svg = render_query(&[("type", "3"), ("date", "2024-02-29"), ("locale", "en")]);
    assert!(svg.contains(">FEB</text>"));
    assert!(svg.contains(">29</text>"));
    assert!(svg.contains(">2024</text>"));
}

#[test]
fn test_type_four_year_and_month() {
    let svg = render_query(&[("type", "4"), ("date", "2026-10-16")]);
    assert!(svg.contains("font-size=\"120px\" style=\"text-anchor: left\">2026</text>"));
    assert!(svg.contains(">十月</text>"));
}

#[test]
fn test_type_five_year_only() {
    let svg = render_query(&[("type", "5"), ("date", "1999-12-31")]);
    assert!(svg.contains("font-size=\"200px\" style=\"text-anchor: middle\">1999</text>"));
    assert!(!svg.contains(">31<"));
}

#[test]
fn test_partial_dates_render() {
    let svg = render_query(&[("type", "5"), ("date", "2025")]);
    assert!(svg.contains(">2025</text>"));
    assert!(!svg.contains("NaN"));

    let svg = render_query(&[("type", "4"), ("date", "2025-03"), ("locale", "en")]);
    assert!(svg.contains(">2025</text>"));
    assert!(svg.contains(">MAR</text>"));

    let svg = render_query(&[("type", "5"), ("date", "2025-06-15T08:00Z")]);
    assert!(svg.contains(">2025</text>"));
    assert!(!svg.contains("NaN"));
}

#[test]
fn test_missing_date_uses_clock() {
    let svg = render_with(
        &RenderRequest {
            locale: Locale::En,
            ..RenderRequest::default()
        },
        &clock(2025, 7, 4),
    );
    assert!(svg.contains(">JUL</text>"));
    assert!(svg.contains(">4</text>"));
    assert!(svg.contains(">Friday</text>"));
}

#[test]
fn test_invalid_date_degrades_without_panicking() {
    for widget in WidgetType::ALL {
        let req = RenderRequest {
            widget,
            date: Some("not-a-date".to_string()),
            ..RenderRequest::default()
        };
        let svg = render_with(&req, &new_year());
        assert!(svg.contains("</svg>"));
    }

    let svg = render_query(&[("date", "not-a-date")]);
    assert!(svg.contains(">Invalid Date</text>"));
    assert!(svg.contains(">NaN</text>"));
}

// ============================================================================
// Countdown
// ============================================================================

#[test]
fn test_countdown_today_chinese() {
    let svg = render_query(&[("type", "6"), ("date", "2025-01-01")]);
    assert!(svg.contains(">--</text>"));
    assert!(svg.contains(">今天</tspan>"));
    assert!(svg.contains("fill=\"#96a5af\""));
}

#[test]
fn test_countdown_today_english() {
    let svg = render_query(&[("type", "6"), ("date", "2025-01-01"), ("locale", "en")]);
    assert!(svg.contains(">--</text>"));
    assert!(svg.contains(">Today</tspan>"));
    assert!(svg.contains(">days</text>"));
}

#[test]
fn test_countdown_future() {
    let svg = render_query(&[("type", "6"), ("date", "2025-01-06")]);
    assert!(svg.contains("font-size=\"240\" style=\"text-anchor: middle\">5</text>"));
    assert!(svg.contains(">还有</tspan>"));
    assert!(svg.contains(">天</text>"));

    let en = render_query(&[("type", "6"), ("date", "2025-01-06"), ("locale", "en")]);
    assert!(en.contains(">Left</tspan>"));
}

#[test]
fn test_countdown_past_uses_absolute_value() {
    let svg = render_query(&[("type", "6"), ("date", "2024-12-25"), ("locale", "en")]);
    assert!(svg.contains(">7</text>"));
    assert!(!svg.contains(">-7</text>"));
    assert!(svg.contains(">Past</tspan>"));
}

#[test]
fn test_countdown_header_fields() {
    let svg = render_query(&[("type", "6"), ("date", "2025-03-09")]);
    assert!(svg.contains(">2025</tspan>"));
    assert!(svg.contains(">03-09</tspan>"));
}

#[test]
fn test_countdown_font_shrinks_with_digits() {
    // 2025-01-01 + 1000 days = 2027-09-28
    let svg = render_query(&[("type", "6"), ("date", "2027-09-28")]);
    assert!(svg.contains("font-size=\"190\" style=\"text-anchor: middle\">1000</text>"));

    // 2025-01-01 + 10000 days = 2052-05-19
    let svg = render_query(&[("type", "6"), ("date", "2052-05-19")]);
    assert!(svg.contains("font-size=\"140\" style=\"text-anchor: middle\">10000</text>"));

    // 2025-01-01 - 100000 days = 1751-03-19
    let svg = render_query(&[("type", "6"), ("date", "1751-03-19")]);
    assert!(svg.contains("font-size=\"130\" style=\"text-anchor: middle\">100000</text>"));
}

#[test]
fn test_countdown_truncates_to_midnight() {
    let req = RenderRequest {
        widget: WidgetType::Countdown,
        date: Some("2025-01-02T00:00:01".to_string()),
        locale: Locale::En,
        ..RenderRequest::default()
    };
    let late_evening = FixedClock(
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap(),
    );
    let svg = render_with(&req, &late_evening);
    assert!(svg.contains(">1</text>"));
    assert!(svg.contains(">Left</tspan>"));
}

// ============================================================================
// Badges
// ============================================================================

#[test]
fn test_percentage_long_content() {
    let svg = render_query(&[("type", "7"), ("content", "100")]);
    assert!(svg.contains("100%"));
    assert!(svg.contains("font-size=\"180\""));
}

#[test]
fn test_percentage_short_content() {
    let svg = render_query(&[("type", "7"), ("content", "42")]);
    assert!(svg.contains("42%"));
    assert!(svg.contains("font-size=\"230\""));
}

#[test]
fn test_percentage_empty_content_has_no_suffix() {
    let svg = render_query(&[("type", "7")]);
    assert!(!svg.contains("%\n"));
    assert!(svg.contains("font-size=\"230\""));
}

#[test]
fn test_percentage_uses_square_canvas() {
    let svg = render_query(&[("type", "7"), ("content", "50")]);
    assert!(svg.contains("viewBox=\"0 0 512 512\""));
    assert!(!svg.contains("viewBox=\"0 0 508 506\""));
    assert!(svg.contains("50%"));
}

#[test]
fn test_number_badge_two_chars() {
    let svg = render_query(&[("type", "8"), ("content", "42")]);
    assert!(svg.contains("font-size=\"267.857143\""));
    assert!(svg.contains("y=\"385.714286\""));
    assert!(svg.contains("\n            42\n"));
}

#[test]
fn test_number_badge_default_bucket() {
    let svg = render_query(&[("type", "8"), ("content", "123456")]);
    assert!(svg.contains("font-size=\"130\""));
    assert!(svg.contains("y=\"330.714286\""));
}

#[test]
fn test_compact_badge_buckets() {
    let one = render_query(&[("type", "9"), ("content", "7")]);
    assert!(one.contains("font-size=\"250.142857\""));
    assert!(one.contains("y=\"380.428571\""));

    let long = render_query(&[("type", "9"), ("content", "9999")]);
    assert!(long.contains("font-size=\"100.142857\""));
    assert!(long.contains("y=\"320.428571\""));
}

#[test]
fn test_content_is_not_escaped() {
    let svg = render_query(&[("type", "8"), ("content", "<b>")]);
    assert!(svg.contains("<b>"));
}

#[test]
fn test_content_ignored_by_calendar_faces() {
    let with = render_query(&[("type", "1"), ("date", "2025-01-01"), ("content", "99")]);
    let without = render_query(&[("type", "1"), ("date", "2025-01-01")]);
    assert_eq!(with, without);
}

// ============================================================================
// Week of year
// ============================================================================

#[test]
fn test_week_badge_new_year() {
    let svg = render_query(&[("type", "10"), ("date", "2025-01-01")]);
    assert!(svg.contains(">2025</text>"));
    assert!(svg.contains(">1周</text>"));
}

#[test]
fn test_week_badge_english_suffix() {
    let svg = render_query(&[("type", "10"), ("date", "2025-01-05"), ("locale", "en")]);
    assert!(svg.contains(">2W</text>"));
}

#[test]
fn test_week_badge_year_end() {
    let svg = render_query(&[("type", "10"), ("date", "2025-12-31"), ("locale", "en")]);
    assert!(svg.contains(">53W</text>"));
}
