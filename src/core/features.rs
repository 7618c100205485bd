//! Widget plugin system with enum dispatch
//!
//! Uses enum_dispatch for static dispatch over the widget set. All widgets are
//! known at compile time; the shell discovers them through the cached command
//! index and drives them through execute_widget_action.

use std::sync::OnceLock;

use enum_dispatch::enum_dispatch;

use crate::shared::error::{AppError, AppResult};
use crate::shared::errors::ERR_UNSUPPORTED_ACTION;
use crate::shared::types::{ActionType, CommandItem, ExecuteActionRequest, ExecuteActionResponse};

pub mod bmr;
pub mod color_match;
pub mod hijri;
pub mod unit_converter;
pub mod vat;

#[enum_dispatch]
pub trait Widget: Send + Sync {
    /// Unique identifier for this widget
    fn id(&self) -> &'static str;

    /// Commands that open this widget's UI in the shell
    fn widget_commands(&self) -> Vec<CommandItem>;

    /// Execute an action for this widget
    ///
    /// A widget that does not recognize the action returns
    /// AppError::Feature(ERR_UNSUPPORTED_ACTION) so dispatch can move on.
    fn execute(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse>;
}

#[enum_dispatch(Widget)]
pub enum WidgetKind {
    UnitConverter(unit_converter::UnitConverterWidget),
    VatCalculator(vat::VatCalculatorWidget),
    BmrCalculator(bmr::BmrCalculatorWidget),
    HijriConverter(hijri::HijriConverterWidget),
    ColorMatcher(color_match::ColorMatcherWidget),
}

impl WidgetKind {
    pub fn all() -> Vec<Self> {
        vec![
            WidgetKind::UnitConverter(unit_converter::UnitConverterWidget),
            WidgetKind::VatCalculator(vat::VatCalculatorWidget),
            WidgetKind::BmrCalculator(bmr::BmrCalculatorWidget),
            WidgetKind::HijriConverter(hijri::HijriConverterWidget),
            WidgetKind::ColorMatcher(color_match::ColorMatcherWidget),
        ]
    }
}

/// Palette section for a widget type.
fn widget_category(widget_type: &str) -> Option<String> {
    match widget_type {
        "unit_converter" | "hijri_converter" => Some("Convert".to_string()),
        "vat_calculator" | "bmr_calculator" => Some("Calculate".to_string()),
        "color_matcher" => Some("Design".to_string()),
        _ => None,
    }
}

/// Cached base command items
static BASE_COMMAND_ITEMS: OnceLock<Vec<CommandItem>> = OnceLock::new();

fn base_command_items() -> &'static Vec<CommandItem> {
    BASE_COMMAND_ITEMS.get_or_init(|| {
        let mut items = vec![];

        for widget in WidgetKind::all() {
            let mut commands = widget.widget_commands();
            for command in &mut commands {
                if let Some(widget_type) = &command.widget_type {
                    command.category = widget_category(widget_type);
                }
            }
            items.extend(commands);
        }

        println!("[features] Cached {} commands", items.len());
        items
    })
}

/// All command items from all widgets, with palette categories assigned.
pub fn get_all_command_items() -> Vec<CommandItem> {
    base_command_items().clone()
}

/// Execute an action across all widgets.
///
/// Widgets that answer "unsupported action" are skipped; a widget that claims
/// the action but fails stops the dispatch with its error.
pub fn execute_widget_action(
    request: &ExecuteActionRequest,
) -> AppResult<ExecuteActionResponse> {
    for widget in WidgetKind::all() {
        match widget.execute(&request.action_type, &request.params) {
            Ok(response) => return Ok(response),
            Err(AppError::Feature(msg)) if msg == ERR_UNSUPPORTED_ACTION => continue,
            Err(e) => return Err(e),
        }
    }

    Err(AppError::Feature("Unknown action type".to_string()))
}

/// Lax numeric parsing for form fields: trims whitespace and accepts a comma
/// decimal separator. Anything unparseable (or non-finite) is None.
pub(crate) fn parse_decimal(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::unit_converter::{Unit, UnitCategory};
    use crate::shared::types::ConvertUnitsRequest;

    #[test]
    fn command_index_covers_every_widget() {
        let items = get_all_command_items();
        assert_eq!(items.len(), WidgetKind::all().len());
        for widget in WidgetKind::all() {
            assert!(
                items.iter().any(|i| i.widget_type.as_deref() == Some(widget.id())),
                "missing command for {}",
                widget.id()
            );
        }
        assert!(items.iter().all(|i| i.category.is_some()));
    }

    #[test]
    fn dispatch_routes_to_the_owning_widget() {
        let request = ExecuteActionRequest {
            action_type: ActionType::ConvertUnits(ConvertUnitsRequest {
                category: UnitCategory::Length,
                from_unit: Unit::Meter,
                to_unit: Unit::Kilometer,
                value: "1000".to_string(),
            }),
            params: serde_json::Value::Null,
        };
        let response = execute_widget_action(&request).unwrap();
        assert_eq!(response.result, "1 km");
    }

    #[test]
    fn parse_decimal_accepts_lax_numerics() {
        assert_eq!(parse_decimal("42"), Some(42.0));
        assert_eq!(parse_decimal(" 3.5 "), Some(3.5));
        assert_eq!(parse_decimal("1,25"), Some(1.25));
        assert_eq!(parse_decimal("-12"), Some(-12.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }
}
