//! Lightbox viewer over a filtered item list
//!
//! The viewer is a two-state machine. While open it tracks both the selected
//! item id and its index in the filtered list; every transition keeps
//! `filtered[index].id == item_id`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CatalogError, CatalogResult};
use crate::filter::{CategoryFilter, filter_items};
use crate::types::Categorized;

/// Navigation step inside an open viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Prev => "prev",
            Direction::Next => "next",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewerState {
    #[default]
    Closed,
    Open { item_id: String, index: usize },
}

impl ViewerState {
    /// Closed → Open on `item_id`, located by id in the current filtered list
    pub fn open<T: Categorized>(filtered: &[&T], item_id: &str) -> CatalogResult<Self> {
        filtered
            .iter()
            .position(|item| item.id() == item_id)
            .map(|index| ViewerState::Open {
                item_id: item_id.to_string(),
                index,
            })
            .ok_or_else(|| CatalogError::ItemNotInView {
                item_id: item_id.to_string(),
            })
    }

    pub fn close(self) -> Self {
        ViewerState::Closed
    }

    /// Open → Open, wrapping at both ends. No-op when closed or when the
    /// filtered list is empty.
    pub fn navigate<T: Categorized>(self, filtered: &[&T], direction: Direction) -> Self {
        match self {
            ViewerState::Open { index, .. } if !filtered.is_empty() => {
                let index = step(index, filtered.len(), direction);
                ViewerState::Open {
                    item_id: filtered[index].id().to_string(),
                    index,
                }
            }
            state => state,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ViewerState::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            ViewerState::Open { index, .. } => Some(*index),
            ViewerState::Closed => None,
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            ViewerState::Open { item_id, .. } => Some(item_id),
            ViewerState::Closed => None,
        }
    }
}

/// Index reached from `index` by one step in a list of `len` (> 0) items
fn step(index: usize, len: usize, direction: Direction) -> usize {
    debug_assert!(index < len, "viewer index {index} outside a list of {len}");
    let index = index.min(len - 1);
    match direction {
        Direction::Next if index + 1 >= len => 0,
        Direction::Next => index + 1,
        Direction::Prev if index == 0 => len - 1,
        Direction::Prev => index - 1,
    }
}

/// Viewer bound to the filtered list it navigates
#[derive(Debug)]
pub struct Lightbox<'a, T> {
    items: Vec<&'a T>,
    state: ViewerState,
}

impl<'a, T: Categorized> Lightbox<'a, T> {
    pub fn new(items: Vec<&'a T>) -> Self {
        Self {
            items,
            state: ViewerState::Closed,
        }
    }

    pub fn open(&mut self, item_id: &str) -> CatalogResult<()> {
        self.state = ViewerState::open(&self.items, item_id)?;
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = std::mem::take(&mut self.state).close();
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.state = std::mem::take(&mut self.state).navigate(&self.items, direction);
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    pub fn current(&self) -> Option<&'a T> {
        self.state.index().and_then(|i| self.items.get(i).copied())
    }

    /// 1-based position and total, for "3 of 9" captions
    pub fn position(&self) -> Option<(usize, usize)> {
        self.state.index().map(|i| (i + 1, self.items.len()))
    }

    /// Item a navigation in `direction` would land on, without moving
    pub fn peek(&self, direction: Direction) -> Option<&'a T> {
        let index = self.state.index()?;
        if self.items.is_empty() {
            return None;
        }
        self.items.get(step(index, self.items.len(), direction)).copied()
    }
}

/// Filter and viewer state of the gallery page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    filter: CategoryFilter,
    viewer: ViewerState,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    /// Replace the category selection. Closes the viewer, since its index
    /// refers to the previous filtered list.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.viewer = ViewerState::Closed;
    }

    pub fn filtered<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_items(items, &self.filter)
    }

    pub fn open<T: Categorized>(&mut self, items: &[T], item_id: &str) -> CatalogResult<()> {
        self.viewer = ViewerState::open(&self.filtered(items), item_id)?;
        Ok(())
    }

    pub fn close(&mut self) {
        self.viewer = ViewerState::Closed;
    }

    pub fn navigate<T: Categorized>(&mut self, items: &[T], direction: Direction) {
        let filtered = self.filtered(items);
        self.viewer = std::mem::take(&mut self.viewer).navigate(&filtered, direction);
    }

    pub fn selected<'a, T: Categorized>(&self, items: &'a [T]) -> Option<&'a T> {
        self.viewer
            .index()
            .and_then(|i| self.filtered(items).get(i).copied())
    }

    /// Lightbox over the current filtered list carrying the current viewer state
    pub fn lightbox<'a, T: Categorized>(&self, items: &'a [T]) -> Lightbox<'a, T> {
        Lightbox {
            items: self.filtered(items),
            state: self.viewer.clone(),
        }
    }
}
