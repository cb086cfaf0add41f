//! In-memory shopping list.
//!
//! Items keep insertion order and get a random id when added. Every mutation
//! is tolerant: unknown ids are ignored rather than reported.

use log::debug;
use uuid::Uuid;

use crate::model::{IngredientEntry, ShoppingListItem};

#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item and return it
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> &ShoppingListItem {
        let item = ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        debug!("Adding {} to shopping list", item.id);
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Add one item per ingredient. Returns how many were added.
    pub fn add_ingredients(&mut self, ingredients: &[IngredientEntry]) -> usize {
        for entry in ingredients {
            self.add_item(entry.count, entry.unit.as_str(), entry.ingredient.as_str());
        }
        ingredients.len()
    }

    pub fn delete_item(&mut self, id: &str) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.items.remove(index);
        }
    }

    pub fn update_count(&mut self, id: &str, new_count: Option<f64>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.count = new_count;
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_delete_restores_list() {
        let mut list = ShoppingList::new();
        list.add_item(Some(2.0), "cup", "flour");
        let before = list.items().to_vec();

        let id = list.add_item(Some(1.0), "", "egg").id.clone();
        assert_eq!(list.len(), 2);
        list.delete_item(&id);

        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = ShoppingList::new();
        for _ in 0..50 {
            list.add_item(None, "", "salt");
        }
        let mut ids: Vec<_> = list.items().iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let mut list = ShoppingList::new();
        list.add_item(Some(1.0), "cup", "milk");
        list.add_item(Some(2.0), "cup", "milk");
        let counts: Vec<_> = list.items().iter().map(|i| i.count).collect();
        assert_eq!(counts, vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_update_count() {
        let mut list = ShoppingList::new();
        let id = list.add_item(Some(1.0), "tbsp", "butter").id.clone();
        list.update_count(&id, Some(3.5));
        assert_eq!(list.get(&id).unwrap().count, Some(3.5));
    }

    #[test]
    fn test_missing_id_is_noop() {
        let mut list = ShoppingList::new();
        list.add_item(Some(1.0), "", "lemon");
        list.update_count("does-not-exist", Some(9.0));
        list.delete_item("does-not-exist");
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].count, Some(1.0));
    }

    #[test]
    fn test_add_ingredients() {
        let mut list = ShoppingList::new();
        let added = list.add_ingredients(&[
            IngredientEntry {
                count: Some(2.0),
                unit: "cup".to_string(),
                ingredient: "flour".to_string(),
            },
            IngredientEntry {
                count: None,
                unit: String::new(),
                ingredient: "salt".to_string(),
            },
        ]);
        assert_eq!(added, 2);
        assert_eq!(list.items()[1].ingredient, "salt");
    }
}
