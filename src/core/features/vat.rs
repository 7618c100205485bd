//! VAT calculator
//!
//! Two entry modes: the amount either excludes tax (net entered) or already
//! includes it (gross entered). Invariant in both: net + tax == total.

use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;

use crate::core::features::{parse_decimal, Widget};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionResponse, VatRequest, VatResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VatMode {
    /// Entered amount excludes tax
    Exclusive,
    /// Entered amount already includes tax
    Inclusive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VatBreakdown {
    pub net: f64,
    pub tax: f64,
    pub total: f64,
}

impl VatBreakdown {
    pub const ZERO: VatBreakdown = VatBreakdown {
        net: 0.0,
        tax: 0.0,
        total: 0.0,
    };
}

/// Pure VAT computation over already-parsed numbers.
pub fn vat_breakdown(amount: f64, rate: f64, mode: VatMode) -> VatBreakdown {
    match mode {
        VatMode::Exclusive => {
            let net = amount;
            let tax = amount * rate / 100.0;
            VatBreakdown {
                net,
                tax,
                total: net + tax,
            }
        }
        VatMode::Inclusive => {
            let total = amount;
            let net = total / (1.0 + rate / 100.0);
            VatBreakdown {
                net,
                tax: total - net,
                total,
            }
        }
    }
}

/// Request handler: non-numeric amount or rate yields the neutral zero result.
pub fn calculate_vat(request: &VatRequest) -> VatResponse {
    let breakdown = match (parse_decimal(&request.amount), parse_decimal(&request.rate)) {
        (Some(amount), Some(rate)) => vat_breakdown(amount, rate, request.mode),
        _ => VatBreakdown::ZERO,
    };

    VatResponse {
        net: breakdown.net,
        tax: breakdown.tax,
        total: breakdown.total,
    }
}

#[derive(Clone)]
pub struct VatCalculatorWidget;

impl Widget for VatCalculatorWidget {
    fn id(&self) -> &'static str {
        "vat_calculator"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_vat_calculator".to_string(),
            label: "VAT Calculator".to_string(),
            description: Some("Net, tax and gross amounts".to_string()),
            action_type: None,
            widget_type: Some("vat_calculator".to_string()),
            category: None,
        }]
    }

    fn execute(
        &self,
        action: &ActionType,
        _params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        match action {
            ActionType::CalculateVat(request) => {
                let response = calculate_vat(request);

                Ok(ExecuteActionResponse {
                    result: format!("{:.2}", response.total),
                    metadata: Some(json!({
                        "net": response.net,
                        "tax": response.tax,
                        "total": response.total,
                        "widget": "vat_calculator"
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

    const EPS: f64 = 1e-9;

    #[test]
    fn exclusive_literal_case() {
        let b = vat_breakdown(100.0, 15.0, VatMode::Exclusive);
        assert!((b.net - 100.0).abs() < EPS);
        assert!((b.tax - 15.0).abs() < EPS);
        assert!((b.total - 115.0).abs() < EPS);
    }

    #[test]
    fn inclusive_literal_case() {
        let b = vat_breakdown(115.0, 15.0, VatMode::Inclusive);
        assert!((b.net - 100.0).abs() < 1e-6);
        assert!((b.tax - 15.0).abs() < 1e-6);
        assert!((b.total - 115.0).abs() < EPS);
    }

    #[test]
    fn net_plus_tax_equals_total_in_both_modes() {
        let amounts = [0.01, 1.0, 99.99, 1250.0, 1_000_000.0];
        let rates = [0.0, 5.0, 7.7, 15.0, 19.0, 25.0];
        for amount in amounts {
            for rate in rates {
                for mode in [VatMode::Exclusive, VatMode::Inclusive] {
                    let b = vat_breakdown(amount, rate, mode);
                    assert!(
                        (b.net + b.tax - b.total).abs() < 1e-9 * b.total.max(1.0),
                        "invariant broken for amount={} rate={} mode={:?}",
                        amount,
                        rate,
                        mode
                    );
                }
            }
        }
    }

    #[test]
    fn non_numeric_input_is_neutral_zero() {
        let request = VatRequest {
            amount: "abc".to_string(),
            rate: "15".to_string(),
            mode: VatMode::Exclusive,
        };
        let response = calculate_vat(&request);
        assert_eq!(response.net, 0.0);
        assert_eq!(response.tax, 0.0);
        assert_eq!(response.total, 0.0);

        let request = VatRequest {
            amount: "100".to_string(),
            rate: "".to_string(),
            mode: VatMode::Inclusive,
        };
        let response = calculate_vat(&request);
        assert_eq!(response.total, 0.0);
    }
}
