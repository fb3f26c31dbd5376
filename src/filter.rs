use std::fmt;

use crate::state::data::Recipe;

/// Filter value meaning "no filtering"
pub const ALL_TYPES: &str = "all";

/// Type filter selected on the recipe list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Type(String),
}

impl TypeFilter {
    /// Parse a picker value, treating the `"all"` sentinel as no filter
    pub fn parse(value: &str) -> Self {
        if value == ALL_TYPES {
            TypeFilter::All
        } else {
            TypeFilter::Type(value.to_string())
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Type(type_id) => recipe.type_id == *type_id,
        }
    }

    /// Recipes passing the filter, in their original order
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        recipes.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str(ALL_TYPES),
            TypeFilter::Type(type_id) => f.write_str(type_id),
        }
    }
}

/// Recipes whose type matches `type_id`, or all of them for `"all"`
pub fn by_type(recipes: &[Recipe], type_id: &str) -> Vec<Recipe> {
    TypeFilter::parse(type_id).apply(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, type_id: &str) -> Recipe {
        Recipe {
            id: id.into(),
            type_id: type_id.into(),
            name: format!("Recipe {}", id),
            ingredients: vec!["Salt".into()],
            steps: vec!["Cook".into()],
            image_name: "default".into(),
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("a", "t1"),
            recipe("b", "t2"),
            recipe("c", "t1"),
            recipe("d", "t3"),
            recipe("e", "t1"),
        ]
    }

    #[test]
    fn test_all_returns_input_unchanged() {
        let recipes = sample();
        assert_eq!(by_type(&recipes, "all"), recipes);
        assert!(by_type(&[], "all").is_empty());
    }

    #[test]
    fn test_type_keeps_relative_order() {
        let ids: Vec<String> = by_type(&sample(), "t1").into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_unknown_type_yields_empty() {
        assert!(by_type(&sample(), "t9").is_empty());
    }

    #[test]
    fn test_every_type_partitions_the_collection() {
        let recipes = sample();
        let total: usize = ["t1", "t2", "t3"]
            .iter()
            .map(|t| by_type(&recipes, t).len())
            .sum();
        assert_eq!(total, recipes.len());
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(TypeFilter::parse("all"), TypeFilter::All);
        assert_eq!(TypeFilter::parse("t2"), TypeFilter::Type("t2".into()));
        assert_eq!(TypeFilter::parse("t2").to_string(), "t2");
        assert_eq!(TypeFilter::default().to_string(), "all");
    }
}
