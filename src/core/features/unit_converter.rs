//! Unit conversion engine
//!
//! Every category anchors on an implicit base unit (factor = 1); linear
//! conversions always round-trip through it. Temperature is affine and handled
//! separately. Units are a closed sum type so an invalid unit id cannot reach
//! the conversion math.

use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;

use crate::core::features::{parse_decimal, Widget};
use crate::shared::error::{AppError, AppResult};
use crate::shared::errors::ERR_CATEGORY_MISMATCH;
use crate::shared::types::{
    ActionType, CommandItem, ConvertUnitsRequest, ConvertUnitsResponse, ExecuteActionResponse,
    GetUnitsResponse, UnitOption,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
    Data,
    Time,
}

/// Unit definition with the multiplicative ratio to the category's base unit.
/// Temperature units carry factor 1.0; their conversion never uses it.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub id: &'static str,
    pub label: &'static str,
    pub category: UnitCategory,
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Unit {
    // Length (base: meters)
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "yd")]
    Yard,
    #[serde(rename = "mi")]
    Mile,
    // Weight (base: grams)
    #[serde(rename = "mg")]
    Milligram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "t")]
    Tonne,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
    // Temperature
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
    #[serde(rename = "k")]
    Kelvin,
    // Area (base: square meters)
    #[serde(rename = "cm2")]
    SquareCentimeter,
    #[serde(rename = "m2")]
    SquareMeter,
    #[serde(rename = "km2")]
    SquareKilometer,
    #[serde(rename = "ft2")]
    SquareFoot,
    #[serde(rename = "yd2")]
    SquareYard,
    #[serde(rename = "acre")]
    Acre,
    #[serde(rename = "ha")]
    Hectare,
    // Volume (base: liters)
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "m3")]
    CubicMeter,
    #[serde(rename = "fl-oz")]
    FluidOunce,
    #[serde(rename = "cup")]
    Cup,
    #[serde(rename = "pint")]
    Pint,
    #[serde(rename = "quart")]
    Quart,
    #[serde(rename = "gal")]
    Gallon,
    // Speed (base: m/s)
    #[serde(rename = "m/s")]
    MeterPerSecond,
    #[serde(rename = "km/h")]
    KilometerPerHour,
    #[serde(rename = "mph")]
    MilePerHour,
    #[serde(rename = "knot")]
    Knot,
    #[serde(rename = "ft/s")]
    FootPerSecond,
    // Data (base: bytes, binary multiples)
    #[serde(rename = "bit")]
    Bit,
    #[serde(rename = "b")]
    Byte,
    #[serde(rename = "kb")]
    Kilobyte,
    #[serde(rename = "mb")]
    Megabyte,
    #[serde(rename = "gb")]
    Gigabyte,
    #[serde(rename = "tb")]
    Terabyte,
    // Time (base: seconds)
    #[serde(rename = "ms")]
    Millisecond,
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "min")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "year")]
    Year,
}

impl Unit {
    /// Explicit mapping table from unit variant to its definition.
    pub fn def(self) -> UnitDef {
        use UnitCategory::*;
        match self {
            Unit::Millimeter => UnitDef { id: "mm", label: "Millimeters", category: Length, factor: 0.001 },
            Unit::Centimeter => UnitDef { id: "cm", label: "Centimeters", category: Length, factor: 0.01 },
            Unit::Meter => UnitDef { id: "m", label: "Meters", category: Length, factor: 1.0 },
            Unit::Kilometer => UnitDef { id: "km", label: "Kilometers", category: Length, factor: 1000.0 },
            Unit::Inch => UnitDef { id: "in", label: "Inches", category: Length, factor: 0.0254 },
            Unit::Foot => UnitDef { id: "ft", label: "Feet", category: Length, factor: 0.3048 },
            Unit::Yard => UnitDef { id: "yd", label: "Yards", category: Length, factor: 0.9144 },
            Unit::Mile => UnitDef { id: "mi", label: "Miles", category: Length, factor: 1609.344 },

            Unit::Milligram => UnitDef { id: "mg", label: "Milligrams", category: Weight, factor: 0.001 },
            Unit::Gram => UnitDef { id: "g", label: "Grams", category: Weight, factor: 1.0 },
            Unit::Kilogram => UnitDef { id: "kg", label: "Kilograms", category: Weight, factor: 1000.0 },
            Unit::Tonne => UnitDef { id: "t", label: "Tonnes", category: Weight, factor: 1_000_000.0 },
            Unit::Ounce => UnitDef { id: "oz", label: "Ounces", category: Weight, factor: 28.3495 },
            Unit::Pound => UnitDef { id: "lb", label: "Pounds", category: Weight, factor: 453.592 },

            Unit::Celsius => UnitDef { id: "c", label: "Celsius", category: Temperature, factor: 1.0 },
            Unit::Fahrenheit => UnitDef { id: "f", label: "Fahrenheit", category: Temperature, factor: 1.0 },
            Unit::Kelvin => UnitDef { id: "k", label: "Kelvin", category: Temperature, factor: 1.0 },

            Unit::SquareCentimeter => UnitDef { id: "cm2", label: "Square Centimeters", category: Area, factor: 0.0001 },
            Unit::SquareMeter => UnitDef { id: "m2", label: "Square Meters", category: Area, factor: 1.0 },
            Unit::SquareKilometer => UnitDef { id: "km2", label: "Square Kilometers", category: Area, factor: 1_000_000.0 },
            Unit::SquareFoot => UnitDef { id: "ft2", label: "Square Feet", category: Area, factor: 0.09290304 },
            Unit::SquareYard => UnitDef { id: "yd2", label: "Square Yards", category: Area, factor: 0.83612736 },
            Unit::Acre => UnitDef { id: "acre", label: "Acres", category: Area, factor: 4046.8564224 },
            Unit::Hectare => UnitDef { id: "ha", label: "Hectares", category: Area, factor: 10000.0 },

            Unit::Milliliter => UnitDef { id: "ml", label: "Milliliters", category: Volume, factor: 0.001 },
            Unit::Liter => UnitDef { id: "l", label: "Liters", category: Volume, factor: 1.0 },
            Unit::CubicMeter => UnitDef { id: "m3", label: "Cubic Meters", category: Volume, factor: 1000.0 },
            Unit::FluidOunce => UnitDef { id: "fl-oz", label: "Fluid Ounces", category: Volume, factor: 0.0295735 },
            Unit::Cup => UnitDef { id: "cup", label: "Cups", category: Volume, factor: 0.236588 },
            Unit::Pint => UnitDef { id: "pint", label: "Pints", category: Volume, factor: 0.473176 },
            Unit::Quart => UnitDef { id: "quart", label: "Quarts", category: Volume, factor: 0.946353 },
            Unit::Gallon => UnitDef { id: "gal", label: "Gallons", category: Volume, factor: 3.78541 },

            Unit::MeterPerSecond => UnitDef { id: "m/s", label: "Meters/Second", category: Speed, factor: 1.0 },
            Unit::KilometerPerHour => UnitDef { id: "km/h", label: "Kilometers/Hour", category: Speed, factor: 1.0 / 3.6 },
            Unit::MilePerHour => UnitDef { id: "mph", label: "Miles/Hour", category: Speed, factor: 0.44704 },
            Unit::Knot => UnitDef { id: "knot", label: "Knots", category: Speed, factor: 0.514444 },
            Unit::FootPerSecond => UnitDef { id: "ft/s", label: "Feet/Second", category: Speed, factor: 0.3048 },

            Unit::Bit => UnitDef { id: "bit", label: "Bits", category: Data, factor: 0.125 },
            Unit::Byte => UnitDef { id: "b", label: "Bytes", category: Data, factor: 1.0 },
            Unit::Kilobyte => UnitDef { id: "kb", label: "Kilobytes", category: Data, factor: 1024.0 },
            Unit::Megabyte => UnitDef { id: "mb", label: "Megabytes", category: Data, factor: 1048576.0 },
            Unit::Gigabyte => UnitDef { id: "gb", label: "Gigabytes", category: Data, factor: 1073741824.0 },
            Unit::Terabyte => UnitDef { id: "tb", label: "Terabytes", category: Data, factor: 1099511627776.0 },

            Unit::Millisecond => UnitDef { id: "ms", label: "Milliseconds", category: Time, factor: 0.001 },
            Unit::Second => UnitDef { id: "s", label: "Seconds", category: Time, factor: 1.0 },
            Unit::Minute => UnitDef { id: "min", label: "Minutes", category: Time, factor: 60.0 },
            Unit::Hour => UnitDef { id: "h", label: "Hours", category: Time, factor: 3600.0 },
            Unit::Day => UnitDef { id: "day", label: "Days", category: Time, factor: 86400.0 },
            Unit::Week => UnitDef { id: "week", label: "Weeks", category: Time, factor: 604800.0 },
            Unit::Year => UnitDef { id: "year", label: "Years", category: Time, factor: 31557600.0 },
        }
    }

    pub fn category(self) -> UnitCategory {
        self.def().category
    }
}

/// Ordered unit list per category. The first two entries are the defaults the
/// shell selects when switching to the category.
pub fn units_for(category: UnitCategory) -> &'static [Unit] {
    match category {
        UnitCategory::Length => &[
            Unit::Meter,
            Unit::Kilometer,
            Unit::Centimeter,
            Unit::Millimeter,
            Unit::Inch,
            Unit::Foot,
            Unit::Yard,
            Unit::Mile,
        ],
        UnitCategory::Weight => &[
            Unit::Kilogram,
            Unit::Gram,
            Unit::Milligram,
            Unit::Tonne,
            Unit::Pound,
            Unit::Ounce,
        ],
        UnitCategory::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
        UnitCategory::Area => &[
            Unit::SquareMeter,
            Unit::SquareKilometer,
            Unit::SquareCentimeter,
            Unit::SquareFoot,
            Unit::SquareYard,
            Unit::Acre,
            Unit::Hectare,
        ],
        UnitCategory::Volume => &[
            Unit::Liter,
            Unit::Milliliter,
            Unit::CubicMeter,
            Unit::Gallon,
            Unit::Quart,
            Unit::Pint,
            Unit::Cup,
            Unit::FluidOunce,
        ],
        UnitCategory::Speed => &[
            Unit::KilometerPerHour,
            Unit::MilePerHour,
            Unit::MeterPerSecond,
            Unit::Knot,
            Unit::FootPerSecond,
        ],
        UnitCategory::Data => &[
            Unit::Megabyte,
            Unit::Gigabyte,
            Unit::Kilobyte,
            Unit::Byte,
            Unit::Bit,
            Unit::Terabyte,
        ],
        UnitCategory::Time => &[
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
            Unit::Millisecond,
            Unit::Day,
            Unit::Week,
            Unit::Year,
        ],
    }
}

/// Default from/to selection after a category switch: the first two units.
pub fn default_selection(category: UnitCategory) -> (Unit, Unit) {
    let units = units_for(category);
    (units[0], units[1])
}

/// Convert a value between two units of the same category.
///
/// Both units belonging to `category` is a caller contract; a mismatch is a
/// programming error surfaced as a validation failure, not a UI state.
pub fn convert(category: UnitCategory, from: Unit, to: Unit, value: f64) -> AppResult<f64> {
    let from_def = from.def();
    let to_def = to.def();

    if from_def.category != category || to_def.category != category {
        return Err(AppError::Validation(format!(
            "{}: {} -> {} in {:?}",
            ERR_CATEGORY_MISMATCH, from_def.id, to_def.id, category
        )));
    }

    if category == UnitCategory::Temperature {
        return convert_temperature(value, from, to);
    }

    // Through the base unit: (value * from.factor) / to.factor
    Ok(value * from_def.factor / to_def.factor)
}

// Temperature is affine, not linear: normalize to Celsius, then re-express.
fn convert_temperature(value: f64, from: Unit, to: Unit) -> AppResult<f64> {
    let celsius = match from {
        Unit::Celsius => value,
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Kelvin => value - 273.15,
        other => {
            return Err(AppError::Validation(format!(
                "Unknown temperature unit: {}",
                other.def().id
            )))
        }
    };

    match to {
        Unit::Celsius => Ok(celsius),
        Unit::Fahrenheit => Ok(celsius * 9.0 / 5.0 + 32.0),
        Unit::Kelvin => Ok(celsius + 273.15),
        other => Err(AppError::Validation(format!(
            "Unknown temperature unit: {}",
            other.def().id
        ))),
    }
}

/// Presentation contract: integers render without decimals, everything else is
/// rounded to 5 decimal places with trailing zeros stripped. UI snapshots
/// depend on this exact output.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == value.trunc() {
        return format!("{}", value);
    }
    let formatted = format!("{:.5}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Full request handler: parses the raw form value and converts.
/// Non-numeric input yields a placeholder response, never an error.
pub fn convert_units(request: &ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let value = match parse_decimal(&request.value) {
        Some(v) => v,
        None => {
            return Ok(ConvertUnitsResponse {
                result: None,
                formatted_result: String::new(),
                from_unit: request.from_unit,
                to_unit: request.to_unit,
            })
        }
    };

    let result = convert(request.category, request.from_unit, request.to_unit, value)?;

    Ok(ConvertUnitsResponse {
        result: Some(result),
        formatted_result: format_value(result),
        from_unit: request.from_unit,
        to_unit: request.to_unit,
    })
}

/// Unit list DTO for the frontend picker, including the post-switch defaults.
pub fn get_units(category: UnitCategory) -> GetUnitsResponse {
    let units = units_for(category)
        .iter()
        .map(|unit| {
            let def = unit.def();
            UnitOption {
                unit: *unit,
                label: def.label.to_string(),
                category: def.category,
            }
        })
        .collect();
    let (default_from, default_to) = default_selection(category);

    GetUnitsResponse {
        units,
        default_from,
        default_to,
    }
}

// ============================================================================
// Widget implementation
// ============================================================================

#[derive(Clone)]
pub struct UnitConverterWidget;

impl Widget for UnitConverterWidget {
    fn id(&self) -> &'static str {
        "unit_converter"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_unit_converter".to_string(),
            label: "Unit Converter".to_string(),
            description: Some("Convert between units".to_string()),
            action_type: None,
            widget_type: Some("unit_converter".to_string()),
            category: None,
        }]
    }

    fn execute(
        &self,
        action: &ActionType,
        _params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        match action {
            ActionType::ConvertUnits(request) => {
                let response = convert_units(request)?;
                let result = if response.result.is_some() {
                    format!("{} {}", response.formatted_result, response.to_unit.def().id)
                } else {
                    String::new()
                };

                Ok(ExecuteActionResponse {
                    result,
                    metadata: Some(json!({
                        "from_unit": response.from_unit.def().id,
                        "to_unit": response.to_unit.def().id,
                        "result": response.result,
                        "widget": "unit_converter"
                    })),
                })
            }
            _ => Err(AppError::Feature(
                crate::shared::errors::ERR_UNSUPPORTED_ACTION.to_string(),
            )),
        }
    }
}
