//! Keyword-based calorie estimation used when a caller does not supply a
//! usable calorie value.

/// Keyword table, scanned in order. The first keyword contained in the
/// lower-cased name wins, so order here is precedence.
pub const KEYWORD_CALORIES: &[(&str, i32)] = &[
    ("banana", 105),
    ("apple", 95),
    ("orange", 80),
    ("egg", 78),
    ("rice", 200),
    ("bread", 80),
    ("sandwich", 350),
    ("chicken", 250),
    ("salad", 180),
    ("pizza", 285),
    ("pasta", 350),
    ("coffee", 5),
    ("latte", 180),
    ("burger", 500),
    ("fries", 365),
    ("yogurt", 150),
    ("smoothie", 220),
    ("oats", 150),
    ("oatmeal", 150),
    ("protein", 200),
];

/// Consulted only when no keyword matched.
pub const CATEGORY_CALORIES: &[(&str, i32)] = &[
    ("breakfast", 350),
    ("lunch", 600),
    ("dinner", 650),
    ("snack", 200),
];

pub const DEFAULT_CALORIES: i32 = 300;

/// Estimate calories for a food name with an optional meal category.
pub fn estimate(name: &str, category: Option<&str>) -> i32 {
    let name = name.to_lowercase();

    if let Some(&(_, kcal)) = KEYWORD_CALORIES
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
    {
        return kcal;
    }

    category
        .map(|c| c.trim().to_lowercase())
        .and_then(|c| {
            CATEGORY_CALORIES
                .iter()
                .find(|(known, _)| *known == c)
                .map(|&(_, kcal)| kcal)
        })
        .unwrap_or(DEFAULT_CALORIES)
}
