use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::RecipeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Added,
    Removed,
}

/// Recipe ids a user marked as favorite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<RecipeId>);

impl Favorites {
    pub fn contains(&self, id: RecipeId) -> bool {
        self.0.contains(&id)
    }

    /// Flips membership of `id`.
    pub fn toggle(&mut self, id: RecipeId) -> FavoriteAction {
        if self.0.remove(&id) {
            FavoriteAction::Removed
        } else {
            self.0.insert(id);
            FavoriteAction::Added
        }
    }

    pub fn ids(&self) -> Vec<RecipeId> {
        self.0.iter().copied().collect()
    }
}
