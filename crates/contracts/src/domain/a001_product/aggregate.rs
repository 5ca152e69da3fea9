use serde::{Deserialize, Deserializer, Serialize};

/// Loves above this mark a product as "Popular".
pub const POPULAR_LOVES_THRESHOLD: i64 = 50_000;

// ============================================================================
// Skin type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Normal,
    Dry,
    Oily,
    Combination,
    Sensitive,
    All,
}

impl SkinType {
    /// Values offered by the catalog skin-type filter.
    pub const CATALOG_FILTERS: [SkinType; 5] = [
        SkinType::Normal,
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::All,
    ];

    /// Values a user can pick for their own profile.
    pub const PROFILE_CHOICES: [SkinType; 5] = [
        SkinType::Normal,
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Normal => "normal",
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Normal => "Normal",
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
            SkinType::All => "All skin types",
        }
    }

    /// Case-insensitive parse; the API mixes `Dry` and `dry`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "normal" => Some(SkinType::Normal),
            "dry" => Some(SkinType::Dry),
            "oily" => Some(SkinType::Oily),
            "combination" => Some(SkinType::Combination),
            "sensitive" => Some(SkinType::Sensitive),
            "all" => Some(SkinType::All),
            _ => None,
        }
    }
}

/// Display label for a raw skin-type value: known values get their label,
/// unknown ones are shown as-is, missing ones as "-".
pub fn skin_type_label(raw: Option<&str>) -> String {
    match raw {
        Some(value) => match SkinType::parse(value) {
            Some(skin_type) => skin_type.label().to_string(),
            None if !value.trim().is_empty() => value.trim().to_string(),
            None => "-".to_string(),
        },
        None => "-".to_string(),
    }
}

// ============================================================================
// Text lists (highlights, ingredients)
// ============================================================================

/// A list of short strings that the API sends either as a JSON array or as a
/// serialized list like `"['Vegan', 'Clean at Sephora']"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextList(pub Vec<String>);

impl TextList {
    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self, n: usize) -> Vec<String> {
        self.0.iter().take(n).cloned().collect()
    }
}

/// Splits a serialized list into its trimmed, non-empty items.
pub fn parse_text_list(raw: &str) -> Vec<String> {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .collect::<String>()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Text(String),
        }

        let items = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::List(items)) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            Some(Raw::Text(text)) => parse_text_list(&text),
            None => Vec::new(),
        };
        Ok(TextList(items))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Integer(n) => n.to_string(),
    })
}

// ============================================================================
// Product
// ============================================================================

/// Product snapshot as returned by the catalog and recommendation endpoints.
/// Read-only on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub product_id: String,

    #[serde(default)]
    pub brand_name: String,

    #[serde(default)]
    pub product_name: String,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub reviews: Option<i64>,

    #[serde(default)]
    pub loves_count: Option<i64>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub skin_type: Option<String>,

    #[serde(default)]
    pub primary_category: Option<String>,

    #[serde(default)]
    pub secondary_category: Option<String>,

    #[serde(default)]
    pub highlights: TextList,

    #[serde(default)]
    pub ingredients: TextList,
}

impl Product {
    pub fn loves(&self) -> i64 {
        self.loves_count.unwrap_or(0)
    }

    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn is_popular(&self) -> bool {
        self.loves() > POPULAR_LOVES_THRESHOLD
    }

    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(r) if r > 0.0 => format!("{:.1}", r),
            _ => "N/A".to_string(),
        }
    }

    pub fn price_label(&self) -> String {
        match self.price {
            Some(p) if p > 0.0 => format!("${:.2}", p),
            _ => "N/A".to_string(),
        }
    }

    pub fn skin_type_label(&self) -> String {
        skin_type_label(self.skin_type.as_deref())
    }

    /// Secondary category when present, then primary, then a generic fallback.
    pub fn category_label(&self) -> String {
        [&self.secondary_category, &self.primary_category]
            .into_iter()
            .flatten()
            .map(|c| c.trim())
            .find(|c| !c.is_empty())
            .unwrap_or("Skincare")
            .to_string()
    }

    /// First `n` ingredients, each cut to its first two words.
    pub fn key_ingredients(&self, n: usize) -> Vec<String> {
        self.ingredients
            .items()
            .iter()
            .take(n)
            .map(|i| i.split_whitespace().take(2).collect::<Vec<_>>().join(" "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_with_serialized_highlights() {
        let json = r#"{
            "product_id": "P433469",
            "brand_name": "Glow Recipe",
            "product_name": "Watermelon Toner",
            "rating": 4.31,
            "loves_count": 80123,
            "price": 35.0,
            "skin_type": "Combination",
            "primary_category": "Skincare",
            "secondary_category": "Cleansers",
            "highlights": "['Vegan', 'Clean at Sephora', 'Hydrating']",
            "ingredients": "Water, Citrullus Lanatus Fruit Extract, Glycerin"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.product_id, "P433469");
        assert_eq!(
            p.highlights.items(),
            &["Vegan", "Clean at Sephora", "Hydrating"]
        );
        assert_eq!(p.ingredients.items().len(), 3);
        assert!(p.is_popular());
        assert_eq!(p.rating_label(), "4.3");
        assert_eq!(p.price_label(), "$35.00");
        assert_eq!(p.skin_type_label(), "Combination");
        assert_eq!(p.category_label(), "Cleansers");
    }

    #[test]
    fn test_product_with_missing_fields() {
        let json = r#"{"product_id": 42, "highlights": null, "rating": null}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.product_id, "42");
        assert!(p.highlights.is_empty());
        assert!(p.ingredients.is_empty());
        assert_eq!(p.loves(), 0);
        assert_eq!(p.rating_label(), "N/A");
        assert_eq!(p.price_label(), "N/A");
        assert_eq!(p.skin_type_label(), "-");
        assert_eq!(p.category_label(), "Skincare");
    }

    #[test]
    fn test_highlights_as_array() {
        let json = r#"{"product_id": "P1", "highlights": [" Vegan ", "", "Cruelty-Free"]}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.highlights.items(), &["Vegan", "Cruelty-Free"]);
    }

    #[test]
    fn test_key_ingredients_are_truncated() {
        let json = r#"{"product_id": "P1", "ingredients": "Sodium Hyaluronate Crosspolymer, Water"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.key_ingredients(5), vec!["Sodium Hyaluronate", "Water"]);
    }

    #[test]
    fn test_skin_type_parse_and_labels() {
        assert_eq!(SkinType::parse("DRY"), Some(SkinType::Dry));
        assert_eq!(SkinType::parse(" all "), Some(SkinType::All));
        assert_eq!(SkinType::parse("mystery"), None);
        assert_eq!(skin_type_label(Some("oily")), "Oily");
        assert_eq!(skin_type_label(Some("Mature")), "Mature");
        assert_eq!(skin_type_label(Some("  ")), "-");
        assert_eq!(skin_type_label(None), "-");
    }

    #[test]
    fn test_parse_text_list() {
        assert_eq!(parse_text_list("['a', 'b' ,]"), vec!["a", "b"]);
        assert!(parse_text_list("[]").is_empty());
        assert_eq!(parse_text_list("single"), vec!["single"]);
    }
}
