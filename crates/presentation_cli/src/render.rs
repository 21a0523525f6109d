//! Output rendering for workflow states

use std::fmt::Write as _;

use chrono::{Locale, NaiveDate};
use domain::{AddressRecord, WeatherSnapshot, WorkflowPhase, WorkflowState};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable card
    #[default]
    Text,
    /// Pretty-printed JSON of the whole state
    Json,
}

/// Render a state in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(state: &WorkflowState, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(state)),
        OutputFormat::Json => serde_json::to_string_pretty(state),
    }
}

/// One-line progress message for in-flight phases
pub const fn progress_line(phase: WorkflowPhase) -> Option<&'static str> {
    match phase {
        WorkflowPhase::Resolving => Some("🔎 Looking up CEP..."),
        WorkflowPhase::Enriching => Some("🌦️  Fetching weather..."),
        WorkflowPhase::Idle | WorkflowPhase::Settled | WorkflowPhase::Failed => None,
    }
}

/// Abbreviated Brazilian Portuguese weekday ("seg", "ter", ...)
pub fn weekday_label(date: NaiveDate) -> String {
    date.and_hms_opt(12, 0, 0).map_or_else(
        || date.format("%a").to_string(),
        |noon| noon.and_utc().format_localized("%a", Locale::pt_BR).to_string(),
    )
}

fn render_text(state: &WorkflowState) -> String {
    match state.phase {
        WorkflowPhase::Failed => format!(
            "❌ {}",
            state.error.as_deref().unwrap_or("Lookup failed")
        ),
        WorkflowPhase::Idle => String::new(),
        WorkflowPhase::Resolving | WorkflowPhase::Enriching => {
            progress_line(state.phase).unwrap_or_default().to_string()
        },
        WorkflowPhase::Settled => {
            let mut out = String::new();
            if let Some(address) = &state.address {
                address_card(&mut out, address);
            }
            match &state.weather {
                Some(weather) => {
                    out.push('\n');
                    weather_card(&mut out, weather);
                },
                None => out.push_str("\n⚠️  Weather unavailable\n"),
            }
            out.trim_end().to_string()
        },
    }
}

fn address_card(out: &mut String, address: &AddressRecord) {
    let _ = writeln!(out, "📍 CEP {}", address.postal_code.formatted());

    let street = [address.address.as_str(), address.district.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if !street.is_empty() {
        let _ = writeln!(out, "   {street}");
    }
    let _ = writeln!(out, "   {}/{}", address.city, address.state);
    if let Some(ddd) = &address.area_code {
        let _ = writeln!(out, "   DDD {ddd}");
    }
    if let Some(location) = &address.location {
        let _ = writeln!(out, "   {location}");
    }
}

fn weather_card(out: &mut String, weather: &WeatherSnapshot) {
    let current = &weather.current;
    let condition = current.condition();
    let _ = writeln!(
        out,
        "{} {}, {:.1}°C",
        condition.icon, condition.description, current.temperature
    );

    let mut details = format!(
        "   Wind {:.1} km/h from {:.0}°",
        current.wind_speed, current.wind_direction
    );
    if let Some(humidity) = current.humidity {
        let _ = write!(details, ", humidity {humidity}");
    }
    let _ = writeln!(out, "{details}");

    if weather.daily.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nForecast");
    for day in &weather.daily {
        let info = day.condition();
        let _ = writeln!(
            out,
            "   {:<4} {}  {}  {:>3.0}° / {:>3.0}°  {}",
            weekday_label(day.date),
            day.date.format("%d/%m"),
            info.icon,
            day.temperature_max,
            day.temperature_min,
            info.description
        );
    }
}
