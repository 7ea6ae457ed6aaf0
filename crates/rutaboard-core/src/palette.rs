//! Fixed color tables shared by markers, polylines and chart slices.

/// Marker color for a client priority (1 is the most urgent). Unknown or
/// missing priorities fall back to neutral grey.
pub fn priority_color(priority: u8) -> &'static str {
    match priority {
        1 => "#FF0000",
        2 => "#FF6600",
        3 => "#FFCC00",
        4 => "#00CC00",
        5 => "#0066CC",
        _ => "#999999",
    }
}

const ROUTE_COLORS: [&str; 10] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FF6600", "#6600FF",
    "#FF0066", "#66FF00",
];

/// Polyline color for the route at `index`; the table cycles so any number
/// of routes stays distinguishable from its neighbors.
pub fn route_color(index: usize) -> &'static str {
    ROUTE_COLORS[index % ROUTE_COLORS.len()]
}

/// Fallback color used for unknown priorities, also the "sin prioridad"
/// slice of the doughnut chart.
pub const NEUTRAL: &str = "#999999";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_table_is_fixed() {
        assert_eq!(priority_color(1), "#FF0000");
        assert_eq!(priority_color(3), "#FFCC00");
        assert_eq!(priority_color(5), "#0066CC");
        assert_eq!(priority_color(0), NEUTRAL);
        assert_eq!(priority_color(6), NEUTRAL);
    }

    #[test]
    fn route_colors_cycle() {
        assert_eq!(route_color(0), "#FF0000");
        assert_eq!(route_color(9), "#66FF00");
        assert_eq!(route_color(10), route_color(0));
        assert_eq!(route_color(23), route_color(3));
    }
}
