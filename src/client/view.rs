use crate::domain::athlete::Athlete;
use crate::domain::country::Hosting;
use crate::domain::prediction::AthletePrediction;

/// Window size for card grids.
pub const SHORT_WINDOW: usize = 8;
/// Window size for tables.
pub const LONG_WINDOW: usize = 20;

/// Collapsed views render only the first `window` items of the fetched list.
pub fn visible<T>(items: &[T], show_all: bool, window: usize) -> &[T] {
    if show_all || items.len() <= window {
        items
    } else {
        &items[..window]
    }
}

/// How many items the toggle would reveal.
pub fn hidden_count(len: usize, show_all: bool, window: usize) -> usize {
    if show_all {
        0
    } else {
        len.saturating_sub(window)
    }
}

pub fn search_athletes<'a>(athletes: &'a [Athlete], query: &str) -> Vec<&'a Athlete> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return athletes.iter().collect();
    }
    athletes
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&needle)
                || a.country.to_lowercase().contains(&needle)
                || a.sport.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Medal-type filter over predictions; `None` keeps everything.
pub fn filter_by_medal<'a>(
    predictions: &'a [AthletePrediction],
    medal: Option<&str>,
) -> Vec<&'a AthletePrediction> {
    predictions
        .iter()
        .filter(|p| medal.is_none_or(|m| p.predicted_medal.eq_ignore_ascii_case(m)))
        .collect()
}

/// Season filter over hosting history; `None` keeps everything.
pub fn filter_by_season<'a>(hostings: &'a [Hosting], season: Option<&str>) -> Vec<&'a Hosting> {
    hostings
        .iter()
        .filter(|h| season.is_none_or(|s| h.season.eq_ignore_ascii_case(s)))
        .collect()
}
