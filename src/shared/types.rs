use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::bmr::{ActivityLevel, Sex};
use crate::core::features::color_match::{ColorMatch, Finish};
use crate::core::features::hijri::HijriDate;
use crate::core::features::unit_converter::{Unit, UnitCategory};
use crate::core::features::vat::VatMode;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsRequest {
    pub category: UnitCategory,
    pub from_unit: Unit,
    pub to_unit: Unit,
    /// Raw form field content; non-numeric input yields a placeholder response
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsResponse {
    /// None when the input could not be parsed as a number
    pub result: Option<f64>,
    pub formatted_result: String,
    pub from_unit: Unit,
    pub to_unit: Unit,
}

// Rich unit data transfer object for the frontend picker
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitOption {
    pub unit: Unit,
    pub label: String,
    pub category: UnitCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetUnitsResponse {
    pub units: Vec<UnitOption>,
    /// Defaults applied when the shell switches to this category
    pub default_from: Unit,
    pub default_to: Unit,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VatRequest {
    pub amount: String,
    pub rate: String,
    pub mode: VatMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VatResponse {
    pub net: f64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnergyRequest {
    pub sex: Sex,
    pub age: String,
    pub weight_kg: String,
    pub height_cm: String,
    pub activity: ActivityLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnergyResponse {
    pub bmr: u32,
    pub tdee: u32,
    pub lose: u32,
    pub maintain: u32,
    pub gain: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GregorianDateRequest {
    pub year: String,
    pub month: String,
    pub day: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HijriDateResponse {
    pub valid: bool,
    pub date: Option<HijriDate>,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HijriDateRequest {
    pub year: String,
    pub month: String,
    pub day: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GregorianDateResponse {
    pub valid: bool,
    /// ISO-8601 (YYYY-MM-DD) when valid
    pub date: Option<String>,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorMatchRequest {
    pub hex: String,
    pub finish: Finish,
    /// When present, switches to code-substring search instead of ΔE ranking
    pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorMatchResponse {
    pub matches: Vec<ColorMatch>,
}

// Action types for command palette and widget actions
// Adjacently tagged serialization for frontend compatibility
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export)]
pub enum ActionType {
    ConvertUnits(ConvertUnitsRequest),
    CalculateVat(VatRequest),
    CalculateEnergy(EnergyRequest),
    GregorianToHijri(GregorianDateRequest),
    HijriToGregorian(HijriDateRequest),
    MatchColor(ColorMatchRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommandItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub action_type: Option<ActionType>,
    pub widget_type: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecuteActionRequest {
    pub action_type: ActionType,
    #[ts(type = "any")]
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecuteActionResponse {
    pub result: String,
    #[ts(type = "any")]
    pub metadata: Option<serde_json::Value>,
}
