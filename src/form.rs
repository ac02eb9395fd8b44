//! Interactive wizard collecting one [`UserProfile`] per run.
//!
//! Bounds are enforced at the widget: out-of-range entry reprompts
//! immediately, so a completed wizard always yields an in-range
//! profile and nothing downstream re-validates.

use std::fmt;
use std::ops::RangeInclusive;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use thiserror::Error;

use crate::profile::{
    AGE_RANGE, DietPreference, Goal, HEIGHT_RANGE, SugarIntake, UserProfile, WATER_RANGE,
    WEIGHT_RANGE,
};

#[derive(Debug, Error)]
pub enum FormError {
    #[error("form input was interrupted")]
    Interrupted(#[from] dialoguer::Error),
}

/// Check a value against its widget bounds, producing the reprompt
/// message on failure.
fn check_range<T: PartialOrd + Copy + fmt::Display>(
    value: T,
    range: &RangeInclusive<T>,
) -> Result<(), String> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Enter a value between {} and {}",
            range.start(),
            range.end()
        ))
    }
}

fn prompt_u32(
    theme: &ColorfulTheme,
    prompt: &str,
    range: RangeInclusive<u32>,
) -> Result<u32, FormError> {
    let value = Input::<u32>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &u32| check_range(*input, &range))
        .interact_text()?;
    Ok(value)
}

fn prompt_f64(
    theme: &ColorfulTheme,
    prompt: &str,
    range: RangeInclusive<f64>,
) -> Result<f64, FormError> {
    let value = Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &f64| check_range(*input, &range))
        .interact_text()?;
    Ok(value)
}

fn prompt_choice<T: Copy + fmt::Display>(
    theme: &ColorfulTheme,
    prompt: &str,
    choices: &[T],
) -> Result<T, FormError> {
    let labels: Vec<String> = choices.iter().map(|choice| choice.to_string()).collect();
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(choices[index])
}

/// Empty input on an optional field means "no answer".
fn optional(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_optional(theme: &ColorfulTheme, prompt: &str) -> Result<Option<String>, FormError> {
    let text = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(optional(text))
}

/// Run the form and return the completed profile snapshot.
pub fn collect_profile() -> Result<UserProfile, FormError> {
    let theme = ColorfulTheme::default();

    let age = prompt_u32(&theme, "Enter your age", AGE_RANGE)?;
    let height_cm = prompt_u32(&theme, "Enter your height (cm)", HEIGHT_RANGE)?;
    let current_weight_kg = prompt_f64(&theme, "Current weight (kg)", WEIGHT_RANGE)?;
    let target_weight_kg = prompt_f64(&theme, "Target weight (kg)", WEIGHT_RANGE)?;
    let goal = prompt_choice(&theme, "Select your goal", &Goal::ALL)?;
    let diet_preference = prompt_choice(&theme, "Dietary Preference", &DietPreference::ALL)?;
    let sugar_intake = prompt_choice(
        &theme,
        "How often do you consume sugary foods?",
        &SugarIntake::ALL,
    )?;
    let water_intake_l = prompt_f64(
        &theme,
        "How much water do you drink daily? (liters)",
        WATER_RANGE,
    )?;
    let event = prompt_optional(
        &theme,
        "Do you have an important event coming up? (Optional)",
    )?;
    let sports_interest = prompt_optional(&theme, "What sports are you interested in? (Optional)")?;
    let past_issues = prompt_optional(
        &theme,
        "Have you experienced any issues in past fitness attempts? (Optional)",
    )?;

    Ok(UserProfile {
        age,
        height_cm,
        current_weight_kg,
        target_weight_kg,
        goal,
        diet_preference,
        sugar_intake,
        water_intake_l,
        event,
        sports_interest,
        past_issues,
    })
}
