//! View state machine for the main and item list screens.

use crate::catalog::Catalog;
use crate::filter::filter_items;
use crate::model::item::{Item, ItemId};
use crate::view::labels;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Landing screen exposing one navigation action.
    Main,
    /// Filterable item list.
    ItemList,
}

impl Screen {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::ItemList => "item_list",
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigation action triggered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAction {
    OpenItemList,
    NavigateBack,
}

impl ViewAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenItemList => "open_item_list",
            Self::NavigateBack => "navigate_back",
        }
    }
}

impl Display for ViewAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View-layer error for navigation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// `action` is not available on screen `from`.
    InvalidTransition { from: Screen, action: ViewAction },
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, action } => {
                write!(f, "action `{action}` is not available on screen `{from}`")
            }
        }
    }
}

impl Error for ViewError {}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl ItemRow {
    /// Returns the labelled lines shown for this row, top to bottom.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("{}{}", labels::ROW_ID_PREFIX, self.id),
            format!("{}{}", labels::ROW_NAME_PREFIX, self.name),
            format!("{}{}", labels::ROW_DESCRIPTION_PREFIX, self.description),
        ]
    }
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }
}

/// State owned by the item list screen.
///
/// Editing the query does not refilter; only [`ItemListState::apply_filter`]
/// recomputes the displayed set.
#[derive(Debug, Clone)]
pub struct ItemListState<'c> {
    catalog: &'c Catalog,
    query: String,
    displayed: Vec<Item>,
}

impl<'c> ItemListState<'c> {
    /// Creates list state showing the whole catalog with an empty query.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            displayed: catalog.items().to_vec(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query text as typed by the user.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Recomputes the displayed set from the current query.
    pub fn apply_filter(&mut self) -> &[Item] {
        self.displayed = filter_items(self.catalog.items(), &self.query);
        debug!(
            "event=catalog_filter module=view status=ok query_chars={} hits={} total={}",
            self.query.trim().chars().count(),
            self.displayed.len(),
            self.catalog.len()
        );
        &self.displayed
    }

    pub fn displayed(&self) -> &[Item] {
        &self.displayed
    }

    /// Returns the empty-state message when a non-blank query shows nothing.
    pub fn empty_state_message(&self) -> Option<String> {
        if self.displayed.is_empty() && !self.query.trim().is_empty() {
            Some(labels::empty_state_message(&self.query))
        } else {
            None
        }
    }

    pub fn rows(&self) -> Vec<ItemRow> {
        self.displayed.iter().map(ItemRow::from).collect()
    }
}

/// Top-level view state: active screen plus per-screen state.
#[derive(Debug, Clone)]
pub struct ViewState<'c> {
    catalog: &'c Catalog,
    screen: Screen,
    item_list: Option<ItemListState<'c>>,
}

impl<'c> ViewState<'c> {
    /// Starts on [`Screen::Main`].
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::Main,
            item_list: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Applies one navigation action and returns the new screen.
    pub fn dispatch(&mut self, action: ViewAction) -> Result<Screen, ViewError> {
        let next = match (self.screen, action) {
            (Screen::Main, ViewAction::OpenItemList) => {
                self.item_list = Some(ItemListState::new(self.catalog));
                Screen::ItemList
            }
            (Screen::ItemList, ViewAction::NavigateBack) => {
                self.item_list = None;
                Screen::Main
            }
            (from, action) => return Err(ViewError::InvalidTransition { from, action }),
        };

        info!(
            "event=view_transition module=view status=ok from={} to={} action={}",
            self.screen, next, action
        );
        self.screen = next;
        Ok(next)
    }

    /// Main → item list. The list always starts unfiltered.
    pub fn open_item_list(&mut self) -> Result<&mut ItemListState<'c>, ViewError> {
        self.dispatch(ViewAction::OpenItemList)?;
        self.item_list
            .as_mut()
            .ok_or(ViewError::InvalidTransition {
                from: Screen::Main,
                action: ViewAction::OpenItemList,
            })
    }

    /// Item list → main. Drops the list state.
    pub fn navigate_back(&mut self) -> Result<(), ViewError> {
        self.dispatch(ViewAction::NavigateBack).map(|_| ())
    }

    pub fn item_list(&self) -> Option<&ItemListState<'c>> {
        self.item_list.as_ref()
    }

    pub fn item_list_mut(&mut self) -> Option<&mut ItemListState<'c>> {
        self.item_list.as_mut()
    }
}
