//! Pure step arithmetic: measurement fallbacks, step distance and clamping.

use super::events::Direction;
use super::host::{GapStyle, TrackElement};
use crate::settings::CarouselSettings;
use crate::text::{leading_float, leading_integer};

/// `data-count` as a step size; missing, unparseable or non-positive values
/// become 1.
pub fn parse_step_count(raw: Option<&str>) -> u32 {
    raw.and_then(leading_integer)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// Numeric prefix of a CSS length (`"16px"` is 16).
pub fn parse_css_length(raw: &str) -> Option<f64> {
    leading_float(raw)
}

/// Effective inter-item gap: `column-gap`, else `gap`, else `fallback`.
pub fn resolve_gap(style: &GapStyle, fallback: f64) -> f64 {
    [style.column_gap.as_str(), style.gap.as_str()]
        .into_iter()
        .find(|value| !value.trim().is_empty())
        .and_then(parse_css_length)
        .unwrap_or(fallback)
}

/// Item width and gap measured from a live track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMetrics {
    pub item_width: f64,
    pub gap: f64,
}

impl StepMetrics {
    pub fn measure<T>(track: &T, settings: &CarouselSettings) -> Self
    where
        T: TrackElement + ?Sized,
    {
        let item_width = track
            .first_item_width()
            .filter(|w| w.is_finite())
            .unwrap_or(settings.fallback_item_width);
        let gap = resolve_gap(&track.gap_style(), settings.fallback_gap);
        Self { item_width, gap }
    }

    pub fn step_distance(&self, step_count: u32) -> f64 {
        step_distance(self.item_width, self.gap, step_count)
    }
}

/// `(item_width + gap) * step_count`, with `step_count` at least 1.
pub fn step_distance(item_width: f64, gap: f64, step_count: u32) -> f64 {
    (item_width + gap) * f64::from(step_count.max(1))
}

/// Clamp `target` into `[0, scroll_width - client_width]`. A track narrower
/// than its viewport has a range of just `0`.
pub fn clamp_offset(target: f64, scroll_width: f64, client_width: f64) -> f64 {
    let max = (scroll_width - client_width).max(0.0);
    if target.is_nan() {
        return 0.0;
    }
    target.clamp(0.0, max)
}

/// Clamped offset one step away from `current`.
pub fn target_offset(
    current: f64,
    direction: Direction,
    distance: f64,
    scroll_width: f64,
    client_width: f64,
) -> f64 {
    clamp_offset(
        current + direction.sign() * distance,
        scroll_width,
        client_width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_parsing_is_forgiving() {
        assert_eq!(parse_step_count(Some("2")), 2);
        assert_eq!(parse_step_count(Some(" 3 ")), 3);
        assert_eq!(parse_step_count(Some("4cards")), 4);
        assert_eq!(parse_step_count(Some("0")), 1);
        assert_eq!(parse_step_count(Some("-2")), 1);
        assert_eq!(parse_step_count(Some("many")), 1);
        assert_eq!(parse_step_count(None), 1);
    }

    #[test]
    fn gap_prefers_column_gap_then_gap_then_fallback() {
        let both = GapStyle {
            column_gap: "24px".into(),
            gap: "8px".into(),
        };
        assert_eq!(resolve_gap(&both, 16.0), 24.0);

        let gap_only = GapStyle {
            column_gap: String::new(),
            gap: "8px".into(),
        };
        assert_eq!(resolve_gap(&gap_only, 16.0), 8.0);

        let normal = GapStyle {
            column_gap: "normal".into(),
            gap: "8px".into(),
        };
        assert_eq!(resolve_gap(&normal, 16.0), 16.0);

        assert_eq!(resolve_gap(&GapStyle::default(), 16.0), 16.0);
    }

    #[test]
    fn step_distance_scales_linearly_with_step_count() {
        let single = step_distance(300.0, 16.0, 1);
        assert_eq!(single, 316.0);
        assert_eq!(step_distance(300.0, 16.0, 2), 2.0 * single);
        assert_eq!(step_distance(300.0, 16.0, 4), 4.0 * single);
        assert_eq!(step_distance(300.0, 16.0, 0), single);
    }

    #[test]
    fn clamped_targets_stay_in_range() {
        let (scroll_width, client_width) = (2000.0, 800.0);
        for current in [0.0, 10.0, 600.0, 1199.0, 1200.0] {
            for direction in [Direction::Previous, Direction::Next] {
                for distance in [0.0, 316.0, 632.0, 5000.0] {
                    let target = target_offset(
                        current,
                        direction,
                        distance,
                        scroll_width,
                        client_width,
                    );
                    assert!(
                        (0.0..=1200.0).contains(&target),
                        "{current} {direction:?} {distance} -> {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn narrow_track_clamps_to_zero() {
        assert_eq!(clamp_offset(500.0, 400.0, 800.0), 0.0);
        assert_eq!(clamp_offset(-20.0, 400.0, 800.0), 0.0);
        assert_eq!(clamp_offset(f64::NAN, 4000.0, 800.0), 0.0);
    }
}
