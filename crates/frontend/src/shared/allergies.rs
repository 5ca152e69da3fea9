//! Allergy list handling shared by the registration wizard and the profile editor.

/// Allergens offered as checkboxes.
pub const COMMON_ALLERGENS: [&str; 10] = [
    "alcohol",
    "fragrance",
    "phenoxyethanol",
    "dimethicone",
    "limonene",
    "linalool",
    "propylene glycol",
    "salicylic acid",
    "retinol",
    "paraben",
];

/// Checked allergens plus the comma-separated free text, lowercased and
/// de-duplicated in first-seen order.
pub fn merge_allergies(checked: &[String], free_text: &str) -> Vec<String> {
    let typed = free_text
        .split(',')
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty());

    let mut merged: Vec<String> = Vec::new();
    for allergy in checked.iter().cloned().chain(typed) {
        if !merged.contains(&allergy) {
            merged.push(allergy);
        }
    }
    merged
}

/// Splits a stored allergy list back into checkbox values and free text.
pub fn split_allergies(allergies: &[String]) -> (Vec<String>, String) {
    let mut checked = Vec::new();
    let mut other = Vec::new();
    for allergy in allergies {
        let lower = allergy.trim().to_lowercase();
        if COMMON_ALLERGENS.contains(&lower.as_str()) {
            if !checked.contains(&lower) {
                checked.push(lower);
            }
        } else if !lower.is_empty() {
            other.push(allergy.trim().to_string());
        }
    }
    (checked, other.join(", "))
}

/// Short sidebar text: up to three allergies, then a "+N" counter.
pub fn summarize(allergies: &[String]) -> String {
    if allergies.is_empty() {
        return "None".to_string();
    }
    let shown = allergies
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if allergies.len() > 3 {
        format!("{}... (+{})", shown, allergies.len() - 3)
    } else {
        shown
    }
}
