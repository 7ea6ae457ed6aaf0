//! Form and input validation predicates
//!
//! All of these are pure: the web layer maps a `false` into an inline
//! `is-invalid` marker plus a toast, never into an exception.

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepts `H:MM` / `HH:MM` with hour 0-23 and minute 0-59.
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

/// World-bounds check on already-parsed coordinates.
pub fn coords_in_bounds(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

/// Validates a raw coordinate pair as typed into a form. Non-numeric input
/// is invalid, as is anything outside [-90,90] / [-180,180].
pub fn coordinates(lat: &str, lng: &str) -> bool {
    match (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) {
        (Ok(lat), Ok(lng)) => coords_in_bounds(lat, lng),
        _ => false,
    }
}

/// Validates an HH:MM time-of-day string.
pub fn time_format(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// Form-completeness check: returns the names of required fields whose
/// trimmed value is empty. An empty result means the form may be submitted.
pub fn missing_required<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_accept_world_bounds() {
        for (lat, lng) in [
            ("-90", "-180"),
            ("90", "180"),
            ("0", "0"),
            ("-12.0464", "-77.0428"),
            (" -12.05 ", " -77.04 "),
        ] {
            assert!(coordinates(lat, lng), "expected valid: {lat},{lng}");
        }
    }

    #[test]
    fn coordinates_reject_out_of_range_and_garbage() {
        for (lat, lng) in [
            ("-90.01", "0"),
            ("90.01", "0"),
            ("0", "-180.5"),
            ("0", "181"),
            ("abc", "0"),
            ("0", ""),
            ("NaN", "0"),
            ("inf", "0"),
        ] {
            assert!(!coordinates(lat, lng), "expected invalid: {lat},{lng}");
        }
    }

    #[test]
    fn time_format_acceptance_table() {
        for time in ["0:00", "8:30", "08:00", "12:05", "23:59", "19:45"] {
            assert!(time_format(time), "expected valid: {time}");
        }
        for time in ["24:00", "1:60", "9:5", "08:00:00", "8h30", "", "12:", ":30"] {
            assert!(!time_format(time), "expected invalid: {time}");
        }
    }

    #[test]
    fn missing_required_names_empty_fields() {
        let fields = [
            ("nombre", "Tienda A"),
            ("prioridad", ""),
            ("pedido", "   "),
            ("ventana_inicio", "08:00"),
        ];
        assert_eq!(missing_required(&fields), vec!["prioridad", "pedido"]);
        assert!(missing_required(&[("nombre", "x")]).is_empty());
    }
}
