//! Gregorian <-> Hijri calendar conversion
//!
//! Forward conversion delegates to the Umm al-Qura calendrical authority
//! (icu_calendar); this module carries no month-length table of its own.
//! Backward conversion has no closed form under Umm al-Qura, so it anchors a
//! linear year approximation and searches a +/-60 day window, forward-converting
//! each probe until the requested triple matches exactly. No match means the
//! requested Hijri date does not exist; that is a defined outcome, not an error.

use chrono::{Datelike, Duration, NaiveDate};
use icu_calendar::islamic::IslamicUmmAlQura;
use icu_calendar::{Date, Gregorian, Ref};
use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;

use crate::core::features::Widget;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    ActionType, CommandItem, ExecuteActionResponse, GregorianDateRequest, GregorianDateResponse,
    HijriDateRequest, HijriDateResponse,
};

/// Search window around the approximate candidate, in days. Covers worst-case
/// drift of the linear year approximation; narrowing it risks false negatives
/// near year boundaries.
const SEARCH_WINDOW_DAYS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HijriDate {
    pub day: u8,
    pub month: u8,
    pub year: i32,
}

impl HijriDate {
    /// Structural validity only; whether the date exists in the Umm al-Qura
    /// table is decided by the search.
    pub fn is_plausible(&self) -> bool {
        (1..=30).contains(&self.day) && (1..=12).contains(&self.month) && self.year >= 1
    }
}

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qidah",
    "Dhu al-Hijjah",
];

pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

pub struct HijriConverter {
    calendar: IslamicUmmAlQura,
}

impl Default for HijriConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl HijriConverter {
    pub fn new() -> Self {
        Self {
            calendar: IslamicUmmAlQura::new_always_calculating(),
        }
    }

    /// Forward conversion: authoritative, no search involved.
    pub fn to_hijri(&self, date: NaiveDate) -> AppResult<HijriDate> {
        let gregorian: Date<Gregorian> =
            Date::try_new_gregorian_date(date.year(), date.month() as u8, date.day() as u8)?;
        let hijri = gregorian.to_calendar(Ref(&self.calendar));

        Ok(HijriDate {
            day: hijri.day_of_month().0 as u8,
            month: hijri.month().ordinal as u8,
            year: hijri.year().number,
        })
    }

    /// Backward conversion by anchored local search.
    ///
    /// Returns Ok(None) when the requested date does not exist under the
    /// Umm al-Qura table (or is structurally invalid) - callers must branch on
    /// this rather than render a wrong nearby date.
    pub fn to_gregorian(&self, hijri: &HijriDate) -> AppResult<Option<NaiveDate>> {
        if !hijri.is_plausible() {
            return Ok(None);
        }

        // ~354-day lunar year vs ~365.25-day solar year, plus the epoch offset
        let approx_year = (hijri.year as f64 * 0.97 + 622.0).floor();
        if approx_year < f64::from(i32::MIN) || approx_year > f64::from(i32::MAX) {
            return Ok(None);
        }

        // Seed the candidate with the requested month/day in the approximate
        // year; day overflow rolls into the next month.
        let candidate = match NaiveDate::from_ymd_opt(approx_year as i32, hijri.month as u32, 1) {
            Some(anchor) => anchor + Duration::days(i64::from(hijri.day) - 1),
            None => return Ok(None),
        };

        for offset in -SEARCH_WINDOW_DAYS..=SEARCH_WINDOW_DAYS {
            let probe = candidate + Duration::days(offset);
            if self.to_hijri(probe)? == *hijri {
                return Ok(Some(probe));
            }
        }

        println!(
            "[HijriConverter] no match for {}/{}/{} within +/-{} days of {}",
            hijri.day, hijri.month, hijri.year, SEARCH_WINDOW_DAYS, candidate
        );
        Ok(None)
    }

    /// Today's date under the Umm al-Qura calendar.
    pub fn today(&self) -> AppResult<HijriDate> {
        self.to_hijri(chrono::Local::now().date_naive())
    }
}

thread_local! {
    static CONVERTER: HijriConverter = HijriConverter::new();
}

fn parse_int(field: &str) -> Option<i64> {
    field.trim().parse::<i64>().ok()
}

/// Request handler for Gregorian -> Hijri. Malformed fields yield the defined
/// invalid response.
pub fn gregorian_to_hijri(request: &GregorianDateRequest) -> AppResult<HijriDateResponse> {
    let invalid = HijriDateResponse {
        valid: false,
        date: None,
        formatted: String::new(),
    };

    let (year, month, day) = match (
        parse_int(&request.year),
        parse_int(&request.month),
        parse_int(&request.day),
    ) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Ok(invalid),
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Ok(invalid);
    }
    let date = match i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month as u32, day as u32))
    {
        Some(d) => d,
        None => return Ok(invalid),
    };

    let hijri = CONVERTER.with(|c| c.to_hijri(date))?;
    let formatted = match month_name(hijri.month) {
        Some(name) => format!("{} {} {} AH", hijri.day, name, hijri.year),
        None => format!("{}/{}/{} AH", hijri.day, hijri.month, hijri.year),
    };

    Ok(HijriDateResponse {
        valid: true,
        date: Some(hijri),
        formatted,
    })
}

/// Request handler for Hijri -> Gregorian. A non-existent date is reported as
/// invalid, never approximated.
pub fn hijri_to_gregorian(request: &HijriDateRequest) -> AppResult<GregorianDateResponse> {
    let invalid = GregorianDateResponse {
        valid: false,
        date: None,
        formatted: String::new(),
    };

    let (year, month, day) = match (
        parse_int(&request.year),
        parse_int(&request.month),
        parse_int(&request.day),
    ) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Ok(invalid),
    };
    let (year, month, day) = match (
        i32::try_from(year).ok(),
        u8::try_from(month).ok(),
        u8::try_from(day).ok(),
    ) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Ok(invalid),
    };

    let hijri = HijriDate { day, month, year };
    match CONVERTER.with(|c| c.to_gregorian(&hijri))? {
        Some(date) => Ok(GregorianDateResponse {
            valid: true,
            date: Some(date.to_string()),
            formatted: date.format("%d %B %Y").to_string(),
        }),
        None => Ok(invalid),
    }
}

#[derive(Clone)]
pub struct HijriConverterWidget;

impl Widget for HijriConverterWidget {
    fn id(&self) -> &'static str {
        "hijri_converter"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_hijri_converter".to_string(),
            label: "Hijri Date Converter".to_string(),
            description: Some("Gregorian and Umm al-Qura dates".to_string()),
            action_type: None,
            widget_type: Some("hijri_converter".to_string()),
            category: None,
        }]
    }

    fn execute(
        &self,
        action: &ActionType,
        _params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        match action {
            ActionType::GregorianToHijri(request) => {
                let response = gregorian_to_hijri(request)?;
                Ok(ExecuteActionResponse {
                    result: response.formatted.clone(),
                    metadata: Some(json!({
                        "valid": response.valid,
                        "date": response.date,
                        "widget": "hijri_converter"
                    })),
                })
            }
            ActionType::HijriToGregorian(request) => {
                let response = hijri_to_gregorian(request)?;
                Ok(ExecuteActionResponse {
                    result: response.formatted.clone(),
                    metadata: Some(json!({
                        "valid": response.valid,
                        "date": response.date,
                        "widget": "hijri_converter"
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
    fn forward_conversion_known_month() {
        // 2024-01-01 fell mid Jumada al-Thani 1445 under Umm al-Qura
        let converter = HijriConverter::new();
        let hijri = converter
            .to_hijri(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();
        assert_eq!(hijri.year, 1445);
        assert_eq!(hijri.month, 6);
    }

    #[test]
    fn round_trip_today_is_fixed_point() {
        let converter = HijriConverter::new();
        let today = chrono::Local::now().date_naive();
        let hijri = converter.to_hijri(today).unwrap();

        let gregorian = converter
            .to_gregorian(&hijri)
            .unwrap()
            .expect("today's Hijri date must convert back");
        assert_eq!(converter.to_hijri(gregorian).unwrap(), hijri);
        assert_eq!(gregorian, today);
    }

    #[test]
    fn round_trip_across_sample_dates() {
        let converter = HijriConverter::new();
        let samples = [
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2015, 6, 17).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 22).unwrap(),
            NaiveDate::from_ymd_opt(2030, 11, 5).unwrap(),
        ];
        for date in samples {
            let hijri = converter.to_hijri(date).unwrap();
            let back = converter.to_gregorian(&hijri).unwrap();
            assert_eq!(back, Some(date), "round trip failed for {}", date);
        }
    }

    #[test]
    fn zero_fields_short_circuit_to_invalid() {
        let converter = HijriConverter::new();
        for hijri in [
            HijriDate { day: 0, month: 9, year: 1446 },
            HijriDate { day: 15, month: 0, year: 1446 },
            HijriDate { day: 15, month: 9, year: 0 },
            HijriDate { day: 31, month: 9, year: 1446 },
            HijriDate { day: 15, month: 13, year: 1446 },
        ] {
            assert_eq!(converter.to_gregorian(&hijri).unwrap(), None);
        }
    }

    #[test]
    fn day_thirty_of_a_29_day_month_is_invalid() {
        let converter = HijriConverter::new();

        // Derive a complete 29-day month from the authority itself: walk a
        // Gregorian span and measure the gap between successive Hijri day-1s.
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let mut month_starts: Vec<(NaiveDate, HijriDate)> = Vec::new();
        for offset in 0..400 {
            let date = start + Duration::days(offset);
            let hijri = converter.to_hijri(date).unwrap();
            if hijri.day == 1 {
                month_starts.push((date, hijri));
            }
        }
        assert!(month_starts.len() >= 3, "scan must cover several Hijri months");

        let short = month_starts
            .windows(2)
            .find(|pair| (pair[1].0 - pair[0].0).num_days() == 29)
            .expect("some month in the span has 29 days");
        let short_month = short[0].1;

        let missing = HijriDate {
            day: 30,
            month: short_month.month,
            year: short_month.year,
        };
        assert_eq!(converter.to_gregorian(&missing).unwrap(), None);
    }

    #[test]
    fn malformed_request_fields_are_invalid_not_errors() {
        let response = hijri_to_gregorian(&HijriDateRequest {
            year: "abc".to_string(),
            month: "9".to_string(),
            day: "15".to_string(),
        })
        .unwrap();
        assert!(!response.valid);

        let response = gregorian_to_hijri(&GregorianDateRequest {
            year: "2024".to_string(),
            month: "0".to_string(),
            day: "10".to_string(),
        })
        .unwrap();
        assert!(!response.valid);
    }
}
