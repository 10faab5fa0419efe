use crate::items::{Catalog, Item};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_category: String,
    search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
        }
    }
}

impl FilterState {
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Activating a chip replaces whatever chip was active before.
    pub fn select_category(&mut self, category: &str) {
        let category = category.trim();

        self.active_category = if category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category.to_string()
        };
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.trim().to_lowercase();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    pub fn matches_category(&self, item: &Item) -> bool {
        self.active_category == ALL_CATEGORIES || item.category == self.active_category
    }

    pub fn matches_search(&self, item: &Item) -> bool {
        self.search_query.is_empty()
            || item.name.to_lowercase().contains(&self.search_query)
            || item.description.to_lowercase().contains(&self.search_query)
    }

    pub fn is_visible(&self, item: &Item) -> bool {
        self.matches_category(item) && self.matches_search(item)
    }

    pub fn apply(&self, catalog: &Catalog) -> Visibility {
        let sections = catalog
            .sections
            .iter()
            .map(|section| {
                let items: Vec<bool> = section
                    .items
                    .iter()
                    .map(|item| self.is_visible(item))
                    .collect();

                SectionVisibility {
                    visible: items.iter().any(|&shown| shown),
                    items,
                }
            })
            .collect();

        Visibility { sections }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    pub visible: bool,
    pub items: Vec<bool>,
}

/// Display flags for every section and card, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    pub sections: Vec<SectionVisibility>,
}

impl Visibility {
    pub fn visible_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .filter(|&&shown| shown)
            .count()
    }

    /// Pairs each visible section's title with its visible items.
    pub fn visible_items<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a str, Vec<&'a Item>)> + 'a {
        catalog
            .sections
            .iter()
            .zip(self.sections.iter())
            .filter(|(_, flags)| flags.visible)
            .map(|(section, flags)| {
                let items = section
                    .items
                    .iter()
                    .zip(flags.items.iter())
                    .filter(|&(_, &shown)| shown)
                    .map(|(item, _)| item)
                    .collect();

                (section.title.as_str(), items)
            })
    }
}
