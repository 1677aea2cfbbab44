//! Menu browsing helpers.

use std::fmt;

use crate::catalog::MenuItem;

/// Category tabs of the menu page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CategoryFilter {
    #[default]
    All,
    Entrees,
    Plats,
    Desserts,
    Boissons,
}

impl CategoryFilter {
    /// Category id as stored on menu items.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Entrees => "entrees",
            Self::Plats => "plats",
            Self::Desserts => "desserts",
            Self::Boissons => "boissons",
        }
    }

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Tous",
            Self::Entrees => "Entrées",
            Self::Plats => "Plats",
            Self::Desserts => "Desserts",
            Self::Boissons => "Boissons",
        }
    }

    #[must_use]
    pub fn matches(self, item: &MenuItem) -> bool {
        self == Self::All || item.category == self.id()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Items of `items` in the selected category, in listing order.
pub fn filter_menu(items: &[MenuItem], filter: CategoryFilter) -> Vec<&MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Dishes sharing a category.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection<'a> {
    pub category: &'a str,
    pub items: Vec<&'a MenuItem>,
}

/// Group a restaurant menu by category, sections ordered by first appearance.
pub fn group_by_category(items: &[MenuItem]) -> Vec<MenuSection<'_>> {
    let mut sections: Vec<MenuSection<'_>> = Vec::new();

    for item in items {
        match sections
            .iter_mut()
            .find(|section| section.category == item.category)
        {
            Some(section) => section.items.push(item),
            None => sections.push(MenuSection {
                category: &item.category,
                items: vec![item],
            }),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            price: 5.0,
            image: String::new(),
            category: category.to_string(),
            restaurant: None,
            available: true,
        }
    }

    fn ids(items: &[&MenuItem]) -> Vec<String> {
        items.iter().map(|item| item.id.to_string()).collect()
    }

    #[test]
    fn all_keeps_everything() {
        let menu = vec![item("a", "plats"), item("b", "desserts")];

        assert_eq!(ids(&filter_menu(&menu, CategoryFilter::All)), ["a", "b"]);
    }

    #[test]
    fn filters_on_exact_category_id() {
        let menu = vec![
            item("a", "plats"),
            item("b", "desserts"),
            item("c", "plats"),
            item("d", "Plats"),
        ];

        assert_eq!(ids(&filter_menu(&menu, CategoryFilter::Plats)), ["a", "c"]);
        assert!(filter_menu(&menu, CategoryFilter::Boissons).is_empty());
    }

    #[test]
    fn groups_in_first_appearance_order() {
        let menu = vec![
            item("a", "desserts"),
            item("b", "entrees"),
            item("c", "desserts"),
            item("d", "plats"),
        ];

        let sections = group_by_category(&menu);
        let categories: Vec<&str> = sections.iter().map(|section| section.category).collect();

        assert_eq!(categories, ["desserts", "entrees", "plats"]);
        assert_eq!(ids(&sections[0].items), ["a", "c"]);
    }

    #[test]
    fn empty_menu_has_no_sections() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(CategoryFilter::All.label(), "Tous");
        assert_eq!(CategoryFilter::Entrees.to_string(), "Entrées");
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
