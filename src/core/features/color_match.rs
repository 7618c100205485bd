//! Color distance matcher
//!
//! Converts a reference sRGB color to CIELAB (D65, 2 degree observer) and ranks
//! a fixed dataset of named samples by the CIE76 Euclidean distance. The
//! accuracy labels are calibrated to CIE76 magnitudes; switching to CIE94 or
//! CIEDE2000 would shift their meaning.

pub mod dataset;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;

use crate::core::features::Widget;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    ActionType, ColorMatchRequest, ColorMatchResponse, CommandItem, ExecuteActionResponse,
};

/// How many matches a query returns.
const MAX_RESULTS: usize = 4;

// D65 reference white
const REF_X: f64 = 95.047;
const REF_Y: f64 = 100.0;
const REF_Z: f64 = 108.883;

// CIE piecewise threshold (216/24389)
const LAB_EPSILON: f64 = 0.008856;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Finish {
    #[serde(rename = "C")]
    Coated,
    #[serde(rename = "U")]
    Uncoated,
}

/// One named sample of the reference dataset.
#[derive(Debug, Clone, Copy)]
pub struct ColorSample {
    pub code: &'static str,
    pub hex: &'static str,
    pub finish: Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MatchQuality {
    Direct,
    Perfect,
    Good,
    Acceptable,
    Approximate,
}

impl MatchQuality {
    /// Label thresholds are part of the contract, calibrated to CIE76.
    pub fn classify(distance: f64) -> Self {
        if distance == 0.0 {
            MatchQuality::Direct
        } else if distance < 2.3 {
            MatchQuality::Perfect
        } else if distance < 5.0 {
            MatchQuality::Good
        } else if distance < 10.0 {
            MatchQuality::Acceptable
        } else {
            MatchQuality::Approximate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchQuality::Direct => "Direct Match",
            MatchQuality::Perfect => "Perfect Match",
            MatchQuality::Good => "Good Match",
            MatchQuality::Acceptable => "Acceptable",
            MatchQuality::Approximate => "Approximate",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorMatch {
    pub code: String,
    pub hex: String,
    pub distance: f64,
    pub quality: MatchQuality,
}

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{6})$").expect("Failed to compile hex pattern"));

/// Lax hex parsing: leading '#' optional, case-insensitive. Anything else is a
/// defined no-result, not an error.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let caps = HEX_PATTERN.captures(input.trim())?;
    let digits = &caps[1];
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

// sRGB inverse companding (gamma expansion)
fn expand_channel(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

// Linear RGB -> XYZ, D65 illuminant, 2 degree observer
fn rgb_to_xyz(rgb: Rgb) -> (f64, f64, f64) {
    let r = expand_channel(rgb.r) * 100.0;
    let g = expand_channel(rgb.g) * 100.0;
    let b = expand_channel(rgb.b) * 100.0;

    let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
    let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
    let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

    (x, y, z)
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

pub fn rgb_to_lab(rgb: Rgb) -> LabColor {
    let (x, y, z) = rgb_to_xyz(rgb);

    let fx = lab_f(x / REF_X);
    let fy = lab_f(y / REF_Y);
    let fz = lab_f(z / REF_Z);

    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn hex_to_lab(hex: &str) -> Option<LabColor> {
    parse_hex(hex).map(rgb_to_lab)
}

/// CIE76: plain Euclidean distance in CIELAB.
pub fn delta_e76(a: &LabColor, b: &LabColor) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Rank `samples` by CIE76 distance to `target`, ascending. The sort is stable,
/// so equal distances keep dataset order.
fn rank_samples(samples: &[ColorSample], target: &LabColor) -> Vec<ColorMatch> {
    let mut ranked: Vec<ColorMatch> = samples
        .iter()
        .filter_map(|sample| {
            let lab = hex_to_lab(sample.hex)?;
            let distance = delta_e76(target, &lab);
            Some(ColorMatch {
                code: sample.code.to_string(),
                hex: sample.hex.to_string(),
                distance,
                quality: MatchQuality::classify(distance),
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(MAX_RESULTS);
    ranked
}

/// Default mode: the 4 closest samples of the active finish.
pub fn find_closest(hex: &str, finish: Finish) -> Vec<ColorMatch> {
    let target = match hex_to_lab(hex) {
        Some(lab) => lab,
        None => return Vec::new(),
    };
    let of_finish: Vec<ColorSample> = dataset::COLOR_SAMPLES
        .iter()
        .filter(|s| s.finish == finish)
        .copied()
        .collect();
    rank_samples(&of_finish, &target)
}

/// Search mode: case-insensitive code substring lookup within the active
/// finish. Distance is reported as 0 - this is a code lookup, not a
/// color-distance query.
pub fn search_by_code(query: &str, finish: Finish) -> Vec<ColorMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    dataset::COLOR_SAMPLES
        .iter()
        .filter(|s| s.finish == finish && s.code.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .map(|s| ColorMatch {
            code: s.code.to_string(),
            hex: s.hex.to_string(),
            distance: 0.0,
            quality: MatchQuality::Direct,
        })
        .collect()
}

/// Request handler covering both modes. An unparseable hex yields an empty
/// match list, never an error.
pub fn match_color(request: &ColorMatchRequest) -> ColorMatchResponse {
    let matches = match request.query.as_deref() {
        Some(query) if !query.trim().is_empty() => search_by_code(query, request.finish),
        _ => find_closest(&request.hex, request.finish),
    };
    ColorMatchResponse { matches }
}

#[derive(Clone)]
pub struct ColorMatcherWidget;

impl Widget for ColorMatcherWidget {
    fn id(&self) -> &'static str {
        "color_matcher"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_color_matcher".to_string(),
            label: "Color Matcher".to_string(),
            description: Some("Nearest named colors".to_string()),
            action_type: None,
            widget_type: Some("color_matcher".to_string()),
            category: None,
        }]
    }

    fn execute(
        &self,
        action: &ActionType,
        _params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        match action {
            ActionType::MatchColor(request) => {
                let response = match_color(request);
                let result = response
                    .matches
                    .first()
                    .map(|m| format!("{} ({})", m.code, m.quality.label()))
                    .unwrap_or_default();

                Ok(ExecuteActionResponse {
                    result,
                    metadata: Some(json!({
                        "matches": response.matches,
                        "widget": "color_matcher"
                    })),
                })
            }
            _ => Err(AppError::Feature(
                crate::shared::errors::ERR_UNSUPPORTED_ACTION.to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_lax_forms() {
        assert_eq!(parse_hex("#E4002B"), Some(Rgb { r: 0xE4, g: 0x00, b: 0x2B }));
        assert_eq!(parse_hex("e4002b"), Some(Rgb { r: 0xE4, g: 0x00, b: 0x2B }));
        assert_eq!(parse_hex(" #E4002B "), Some(Rgb { r: 0xE4, g: 0x00, b: 0x2B }));
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("not a color"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn lab_reference_points() {
        let white = rgb_to_lab(Rgb { r: 255, g: 255, b: 255 });
        assert!((white.l - 100.0).abs() < 0.5);
        assert!(white.a.abs() < 0.5);
        assert!(white.b.abs() < 0.5);

        let black = rgb_to_lab(Rgb { r: 0, g: 0, b: 0 });
        assert!(black.l.abs() < 0.5);

        // Pure red, classic CIELAB coordinates
        let red = rgb_to_lab(Rgb { r: 255, g: 0, b: 0 });
        assert!((red.l - 53.24).abs() < 0.2);
        assert!((red.a - 80.09).abs() < 0.2);
        assert!((red.b - 67.20).abs() < 0.2);
    }

    #[test]
    fn delta_e_identity_and_symmetry() {
        let a = hex_to_lab("#3A7D44").unwrap();
        let b = hex_to_lab("#8E44AD").unwrap();

        assert_eq!(delta_e76(&a, &a), 0.0);
        assert_eq!(MatchQuality::classify(delta_e76(&a, &a)), MatchQuality::Direct);
        assert!((delta_e76(&a, &b) - delta_e76(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(MatchQuality::classify(0.0), MatchQuality::Direct);
        assert_eq!(MatchQuality::classify(1.0), MatchQuality::Perfect);
        assert_eq!(MatchQuality::classify(2.3), MatchQuality::Good);
        assert_eq!(MatchQuality::classify(4.99), MatchQuality::Good);
        assert_eq!(MatchQuality::classify(5.0), MatchQuality::Acceptable);
        assert_eq!(MatchQuality::classify(10.0), MatchQuality::Approximate);
        assert_eq!(MatchQuality::classify(42.0), MatchQuality::Approximate);
    }

    #[test]
    fn exact_dataset_color_is_a_direct_match() {
        let sample = dataset::COLOR_SAMPLES
            .iter()
            .find(|s| s.finish == Finish::Coated)
            .unwrap();
        let matches = find_closest(sample.hex, Finish::Coated);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].hex, sample.hex);
        assert_eq!(matches[0].distance, 0.0);
        assert_eq!(matches[0].quality, MatchQuality::Direct);
    }

    #[test]
    fn returns_at_most_four_matches_sorted_ascending() {
        let matches = find_closest("#888888", Finish::Coated);
        assert_eq!(matches.len(), MAX_RESULTS);
        for pair in matches.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn ranking_is_deterministic_and_ties_keep_dataset_order() {
        let first = find_closest("#005EB8", Finish::Uncoated);
        let second = find_closest("#005EB8", Finish::Uncoated);
        assert_eq!(
            first.iter().map(|m| m.code.clone()).collect::<Vec<_>>(),
            second.iter().map(|m| m.code.clone()).collect::<Vec<_>>()
        );

        // Two samples at the same distance keep their dataset order
        let samples = [
            ColorSample { code: "twin-a", hex: "#102030", finish: Finish::Coated },
            ColorSample { code: "twin-b", hex: "#102030", finish: Finish::Coated },
        ];
        let target = hex_to_lab("#405060").unwrap();
        let ranked = rank_samples(&samples, &target);
        assert_eq!(ranked[0].code, "twin-a");
        assert_eq!(ranked[1].code, "twin-b");
    }

    #[test]
    fn code_search_is_case_insensitive_and_distance_zero() {
        let matches = search_by_code("yellow", Finish::Coated);
        assert!(!matches.is_empty());
        assert!(matches.len() <= MAX_RESULTS);
        for m in &matches {
            assert!(m.code.to_lowercase().contains("yellow"));
            assert_eq!(m.distance, 0.0);
            assert_eq!(m.quality, MatchQuality::Direct);
        }
    }

    #[test]
    fn empty_sample_set_yields_empty_result() {
        let target = hex_to_lab("#123456").unwrap();
        assert!(rank_samples(&[], &target).is_empty());
    }

    #[test]
    fn invalid_hex_yields_empty_result() {
        let response = match_color(&ColorMatchRequest {
            hex: "zzz".to_string(),
            finish: Finish::Coated,
            query: None,
        });
        assert!(response.matches.is_empty());
    }
}
