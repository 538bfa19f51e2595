use clap::ValueEnum;
use dayfacts_types::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// CLI-facing category names; `all` expands to the full table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Births,
    Deaths,
    Events,
    Holidays,
    FunFact,
    Movies,
    Anime,
    All,
}

impl CategoryArg {
    pub fn expand(args: &[CategoryArg]) -> Vec<Category> {
        if args.iter().any(|a| matches!(a, CategoryArg::All)) {
            return Category::ALL.to_vec();
        }
        args.iter()
            .filter_map(|a| match a {
                CategoryArg::Births => Some(Category::Births),
                CategoryArg::Deaths => Some(Category::Deaths),
                CategoryArg::Events => Some(Category::Events),
                CategoryArg::Holidays => Some(Category::Holidays),
                CategoryArg::FunFact => Some(Category::FunFact),
                CategoryArg::Movies => Some(Category::Movies),
                CategoryArg::Anime => Some(Category::Anime),
                CategoryArg::All => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_every_category() {
        let expanded = CategoryArg::expand(&[CategoryArg::Births, CategoryArg::All]);
        assert_eq!(expanded.len(), Category::ALL.len());
    }

    #[test]
    fn named_categories_expand_in_order() {
        let expanded = CategoryArg::expand(&[CategoryArg::Deaths, CategoryArg::Births]);
        assert_eq!(expanded, vec![Category::Deaths, Category::Births]);
    }
}
