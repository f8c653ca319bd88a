use std::collections::HashSet;

use crate::domain::shared::value_objects::RecipeId;

/// Set of favorited recipe ids. Iteration order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet(HashSet<RecipeId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from persisted raw ids; duplicates collapse.
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().map(RecipeId::new).collect())
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.0.contains(&id)
    }

    /// Flips membership of `id` and returns whether it is now a member.
    pub fn toggle(&mut self, id: RecipeId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw ids sorted ascending, the shape written to the store.
    pub fn to_sorted_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.0.iter().map(|id| id.value()).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_empty() {
        let set = FavoriteSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn should_add_then_remove_on_toggle() {
        let mut set = FavoriteSet::new();

        assert!(set.toggle(RecipeId::new(3)));
        assert!(set.contains(RecipeId::new(3)));

        assert!(!set.toggle(RecipeId::new(3)));
        assert!(!set.contains(RecipeId::new(3)));
    }

    #[test]
    fn should_collapse_duplicate_persisted_ids() {
        let set = FavoriteSet::from_ids(vec![4, 1, 4, 9]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.to_sorted_ids(), vec![1, 4, 9]);
    }
}
