use std::fmt;
use std::ops::RangeInclusive;

/// Widget bounds for the numeric form fields.
pub const AGE_RANGE: RangeInclusive<u32> = 10..=100;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 100..=250;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=200.0;
pub const WATER_RANGE: RangeInclusive<f64> = 0.5..=5.0;

/// Snapshot of all form fields for one submission. Created fresh each
/// time the wizard completes and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: u32,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub goal: Goal,
    pub diet_preference: DietPreference,
    pub sugar_intake: SugarIntake,
    pub water_intake_l: f64,
    pub event: Option<String>,
    pub sports_interest: Option<String>,
    pub past_issues: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    LoseWeight,
    GainWeight,
    BuildMuscle,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseWeight, Goal::GainWeight, Goal::BuildMuscle];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "Lose Weight",
            Goal::GainWeight => "Gain Weight",
            Goal::BuildMuscle => "Build Muscle",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
    Keto,
    Paleo,
}

impl DietPreference {
    pub const ALL: [DietPreference; 5] = [
        DietPreference::Vegetarian,
        DietPreference::NonVegetarian,
        DietPreference::Vegan,
        DietPreference::Keto,
        DietPreference::Paleo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::NonVegetarian => "Non-Vegetarian",
            DietPreference::Vegan => "Vegan",
            DietPreference::Keto => "Keto",
            DietPreference::Paleo => "Paleo",
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SugarIntake {
    Rarely,
    Sometimes,
    Often,
    Daily,
}

impl SugarIntake {
    pub const ALL: [SugarIntake; 4] = [
        SugarIntake::Rarely,
        SugarIntake::Sometimes,
        SugarIntake::Often,
        SugarIntake::Daily,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SugarIntake::Rarely => "Rarely",
            SugarIntake::Sometimes => "Sometimes",
            SugarIntake::Often => "Often",
            SugarIntake::Daily => "Daily",
        }
    }
}

impl fmt::Display for SugarIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
