//! BMR / TDEE calculator (Mifflin-St Jeor)
//!
//! TDEE scales the unrounded base by a fixed activity multiplier; goal rows
//! derive from TDEE. The 1200 kcal floor on the "lose" goal is a safety clamp.

use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;

use crate::core::features::{parse_decimal, Widget};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    ActionType, CommandItem, EnergyRequest, EnergyResponse, ExecuteActionResponse,
};

const LOSE_FLOOR_KCAL: f64 = 1200.0;
const GOAL_STEP_KCAL: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyPlan {
    pub bmr: u32,
    pub tdee: u32,
    pub lose: u32,
    pub maintain: u32,
    pub gain: u32,
}

impl EnergyPlan {
    pub const ZERO: EnergyPlan = EnergyPlan {
        bmr: 0,
        tdee: 0,
        lose: 0,
        maintain: 0,
        gain: 0,
    };
}

/// Mifflin-St Jeor basal metabolic rate, unrounded.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Full energy plan from already-parsed numbers.
pub fn energy_plan(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    activity: ActivityLevel,
) -> EnergyPlan {
    let bmr = mifflin_st_jeor(weight_kg, height_cm, age_years, sex);
    let tdee = (bmr * activity.multiplier()).round();
    let lose = (tdee - GOAL_STEP_KCAL).max(LOSE_FLOOR_KCAL);

    EnergyPlan {
        bmr: bmr.round().max(0.0) as u32,
        tdee: tdee.max(0.0) as u32,
        lose: lose as u32,
        maintain: tdee.max(0.0) as u32,
        gain: (tdee + GOAL_STEP_KCAL).max(0.0) as u32,
    }
}

/// Request handler: non-numeric fields yield the neutral zero plan.
pub fn calculate_energy(request: &EnergyRequest) -> EnergyResponse {
    let plan = match (
        parse_decimal(&request.weight_kg),
        parse_decimal(&request.height_cm),
        parse_decimal(&request.age),
    ) {
        (Some(weight), Some(height), Some(age)) => {
            energy_plan(weight, height, age, request.sex, request.activity)
        }
        _ => EnergyPlan::ZERO,
    };

    EnergyResponse {
        bmr: plan.bmr,
        tdee: plan.tdee,
        lose: plan.lose,
        maintain: plan.maintain,
        gain: plan.gain,
    }
}

#[derive(Clone)]
pub struct BmrCalculatorWidget;

impl Widget for BmrCalculatorWidget {
    fn id(&self) -> &'static str {
        "bmr_calculator"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_bmr_calculator".to_string(),
            label: "BMR Calculator".to_string(),
            description: Some("Daily calorie needs".to_string()),
            action_type: None,
            widget_type: Some("bmr_calculator".to_string()),
            category: None,
        }]
    }

    fn execute(
        &self,
        action: &ActionType,
        _params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        match action {
            ActionType::CalculateEnergy(request) => {
                let response = calculate_energy(request);

                Ok(ExecuteActionResponse {
                    result: format!("{} kcal", response.tdee),
                    metadata: Some(json!({
                        "bmr": response.bmr,
                        "tdee": response.tdee,
                        "lose": response.lose,
                        "maintain": response.maintain,
                        "gain": response.gain,
                        "widget": "bmr_calculator"
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
    fn literal_case_male_25_70_175() {
        // 10*70 + 6.25*175 - 5*25 + 5 = 1673.75
        let base = mifflin_st_jeor(70.0, 175.0, 25.0, Sex::Male);
        assert!((base - 1673.75).abs() < 1e-9);

        let plan = energy_plan(70.0, 175.0, 25.0, Sex::Male, ActivityLevel::Sedentary);
        assert_eq!(plan.bmr, 1674);
        // TDEE from the unrounded base: round(1673.75 * 1.2) = round(2008.5) = 2009
        assert_eq!(plan.tdee, 2009);
        assert_eq!(plan.lose, 1509);
        assert_eq!(plan.maintain, 2009);
        assert_eq!(plan.gain, 2509);
    }

    #[test]
    fn female_offset() {
        let male = mifflin_st_jeor(60.0, 165.0, 30.0, Sex::Male);
        let female = mifflin_st_jeor(60.0, 165.0, 30.0, Sex::Female);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn activity_multipliers_are_the_fixed_set() {
        let levels = [
            (ActivityLevel::Sedentary, 1.2),
            (ActivityLevel::Light, 1.375),
            (ActivityLevel::Moderate, 1.55),
            (ActivityLevel::Active, 1.725),
            (ActivityLevel::VeryActive, 1.9),
        ];
        for (level, expected) in levels {
            assert_eq!(level.multiplier(), expected);
        }
    }

    #[test]
    fn lose_goal_is_floored_at_1200() {
        // Small/light person whose TDEE - 500 would dip below the floor
        let plan = energy_plan(40.0, 150.0, 70.0, Sex::Female, ActivityLevel::Sedentary);
        assert!(plan.tdee < 1700);
        assert_eq!(plan.lose, 1200);
    }

    #[test]
    fn non_numeric_input_is_neutral_zero() {
        let request = EnergyRequest {
            sex: Sex::Male,
            age: "25".to_string(),
            weight_kg: "".to_string(),
            height_cm: "175".to_string(),
            activity: ActivityLevel::Moderate,
        };
        let response = calculate_energy(&request);
        assert_eq!(response.bmr, 0);
        assert_eq!(response.tdee, 0);
    }
}
