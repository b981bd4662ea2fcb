use std::io::{self, Write};

use chrono::TimeZone;

use crate::domain::{
    suntrack,
    weather::{ExtendedForecast, WeatherReport, round_temp},
};

const HOURLY_SHOWN: usize = 6;
const DAILY_SHOWN: usize = 5;

/// Write a plain-text snapshot of one committed fetch cycle.
pub fn write_report<W: Write, Tz: TimeZone>(
    out: &mut W,
    city: &str,
    report: &WeatherReport,
    extended: &ExtendedForecast,
    tz: &Tz,
) -> io::Result<()> {
    let headline = report
        .primary_condition()
        .map(|c| c.description.as_str())
        .unwrap_or("unknown conditions");

    writeln!(
        out,
        "{city}: {headline}, {}\u{b0}C (feels like {}\u{b0}C)",
        round_temp(report.measures.temp_c),
        round_temp(report.measures.feels_like_c),
    )?;
    writeln!(
        out,
        "  range {}\u{b0}C to {}\u{b0}C, humidity {}%, pressure {} hPa, wind {} m/s from {}\u{b0}",
        round_temp(report.measures.temp_min_c),
        round_temp(report.measures.temp_max_c),
        report.measures.humidity_pct,
        report.measures.pressure_hpa,
        report.wind.speed_mps,
        report.wind.direction_deg,
    )?;

    let progress = suntrack::daylight_progress_clamped(
        report.sun.sunrise,
        suntrack::now_millis(),
        report.sun.sunset,
        tz,
    );
    writeln!(
        out,
        "  sunrise {}, sunset {}, daylight {}% elapsed",
        suntrack::clock_time(report.sun.sunrise, tz),
        suntrack::clock_time(report.sun.sunset, tz),
        (progress * 100.0).round() as i64,
    )?;

    if !extended.hourly.is_empty() {
        write!(out, "  next hours:")?;
        for entry in extended.hourly.iter().take(HOURLY_SHOWN) {
            write!(
                out,
                "  {}h {}\u{b0}",
                suntrack::clock_hour(entry.at, tz),
                round_temp(entry.temp_c),
            )?;
        }
        writeln!(out)?;
    }

    if !extended.daily.is_empty() {
        write!(out, "  daily:")?;
        for entry in extended.daily.iter().take(DAILY_SHOWN) {
            write!(
                out,
                "  {} {}\u{b0}/{}\u{b0}",
                day_label(entry.at, tz),
                round_temp(entry.temps.max_c),
                round_temp(entry.temps.min_c),
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn day_label<Tz: TimeZone>(epoch_secs: i64, tz: &Tz) -> String {
    tz.timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.date_naive().format("%a").to_string())
        .unwrap_or_else(|| "---".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::test_support::{fixture_extended, fixture_report};

    fn render(report: &WeatherReport, extended: &ExtendedForecast) -> String {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let mut buffer = Vec::new();
        write_report(&mut buffer, "Stockholm", report, extended, &tz).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn renders_headline_and_sun_times() {
        let rendered = render(&fixture_report(), &fixture_extended());
        assert!(rendered.starts_with("Stockholm: broken clouds, 7\u{b0}C"));
        assert!(rendered.contains("sunrise 05:52"));
        assert!(rendered.contains("sunset 17:58"));
        assert!(rendered.contains("daylight"));
    }

    #[test]
    fn renders_outlook_sections() {
        let rendered = render(&fixture_report(), &fixture_extended());
        assert!(rendered.contains("next hours:"));
        assert!(rendered.contains("daily:"));
    }

    #[test]
    fn empty_outlook_renders_report_only() {
        let rendered = render(&fixture_report(), &ExtendedForecast::default());
        assert!(!rendered.contains("next hours:"));
        assert!(!rendered.contains("daily:"));
        assert!(rendered.contains("Stockholm"));
    }

    #[test]
    fn missing_conditions_degrade_to_placeholder() {
        let mut report = fixture_report();
        report.conditions.clear();
        let rendered = render(&report, &ExtendedForecast::default());
        assert!(rendered.contains("unknown conditions"));
    }
}
