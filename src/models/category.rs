use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// Product grouping. The set is closed: every catalog and every weight
/// profile carries exactly these keys, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "生活用品")]
    Daily,
    #[serde(alias = "食品")]
    Food,
    #[serde(alias = "电子产品")]
    Electronics,
    Household,
}

impl Category {
    /// All categories in catalog-definition order
    pub const ALL: [Category; 4] = [
        Category::Daily,
        Category::Food,
        Category::Electronics,
        Category::Household,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Daily => "Daily",
            Category::Food => "Food",
            Category::Electronics => "Electronics",
            Category::Household => "Household",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "生活用品" => return Ok(Category::Daily),
            "食品" => return Ok(Category::Food),
            "电子产品" => return Ok(Category::Electronics),
            _ => {}
        }

        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}

/// A user interaction kind and its implicit weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Purchase,
    AddToCart,
    View,
    /// Any unrecognised action string; counts as the lowest weight
    Other(String),
}

impl ActionKind {
    pub fn weight(&self) -> f64 {
        match self {
            ActionKind::Purchase => 3.0,
            ActionKind::AddToCart => 2.0,
            ActionKind::View | ActionKind::Other(_) => 1.0,
        }
    }
}

impl From<&str> for ActionKind {
    fn from(action: &str) -> Self {
        match action.trim().to_ascii_lowercase().as_str() {
            "purchase" => ActionKind::Purchase,
            "add_to_cart" => ActionKind::AddToCart,
            "view" => ActionKind::View,
            _ => ActionKind::Other(action.to_string()),
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Purchase => f.write_str("purchase"),
            ActionKind::AddToCart => f.write_str("add_to_cart"),
            ActionKind::View => f.write_str("view"),
            ActionKind::Other(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_names() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("electronics".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!(" household ".parse::<Category>().unwrap(), Category::Household);
    }

    #[test]
    fn test_parse_legacy_category_names() {
        assert_eq!("生活用品".parse::<Category>().unwrap(), Category::Daily);
        assert_eq!("食品".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("电子产品".parse::<Category>().unwrap(), Category::Electronics);
    }

    #[test]
    fn test_parse_unknown_category_is_rejected() {
        let err = "Toys".parse::<Category>().unwrap_err();
        assert!(matches!(err, AppError::InvalidCategory(ref c) if c == "Toys"));
    }

    #[test]
    fn test_category_serializes_as_name() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"Electronics\"");
        let parsed: Category = serde_json::from_str("\"食品\"").unwrap();
        assert_eq!(parsed, Category::Food);
    }

    #[test]
    fn test_action_weights() {
        assert_eq!(ActionKind::from("purchase").weight(), 3.0);
        assert_eq!(ActionKind::from("add_to_cart").weight(), 2.0);
        assert_eq!(ActionKind::from("view").weight(), 1.0);
    }

    #[test]
    fn test_unknown_action_falls_back_to_lowest_weight() {
        let action = ActionKind::from("wishlist");
        assert_eq!(action, ActionKind::Other("wishlist".to_string()));
        assert_eq!(action.weight(), 1.0);
        assert_eq!(action.to_string(), "wishlist");
    }
}
