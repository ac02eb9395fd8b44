//! Prompt template sent to the generative model.
//!
//! One fixed template interpolating every [`UserProfile`] field. The
//! model does all the actual plan authoring; this module only has to
//! hand it a complete, unambiguous brief.

use crate::profile::UserProfile;

/// Render an optional free-text field, substituting the literal `None`
/// when the field is absent or empty.
fn or_none(field: &Option<String>) -> &str {
    match field.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => "None",
    }
}

/// Build the plan-generation prompt for a profile.
pub fn build_plan_prompt(profile: &UserProfile) -> String {
    format!(
        "Act as a certified nutritionist. Create a detailed {diet} diet plan for:\n\
         - Age: {age} | Height: {height} cm\n\
         - Current Weight: {current} kg | Target Weight: {target} kg\n\
         - Goal: {goal}\n\
         - Sugar Intake: {sugar}\n\
         - Water Intake: {water}L per day\n\
         - Special Event: {event}\n\
         - Interested Sports: {sports}\n\
         - Past Fitness Issues: {issues}\n\
         \n\
         The plan should include:\n\
         - A **weekly meal plan** with breakfast, lunch, dinner, and snacks.\n\
         - Approximate **calorie intake** per day.\n\
         - Recommended **exercise routines**.\n\
         - Additional **hydration and recovery tips**.",
        diet = profile.diet_preference,
        age = profile.age,
        height = profile.height_cm,
        current = profile.current_weight_kg,
        target = profile.target_weight_kg,
        goal = profile.goal,
        sugar = profile.sugar_intake,
        water = profile.water_intake_l,
        event = or_none(&profile.event),
        sports = or_none(&profile.sports_interest),
        issues = or_none(&profile.past_issues),
    )
}
