//! Calendar UI state and its transitions.
//!
//! State is a plain value: every user interaction is an [`Action`] and
//! [`CalendarState::apply`] returns the next state.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::grid::Granularity;
use crate::resource::ResourceSelection;

/// Resources selected when the dashboard opens
pub const DEFAULT_SELECTION: [&str; 2] = ["e-working", "e-3444802"];

/// Collapsible sections of the resource panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Resources,
    Locations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub resources_expanded: bool,
    pub locations_expanded: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        PanelState {
            resources_expanded: true,
            locations_expanded: true,
        }
    }
}

impl PanelState {
    pub fn is_expanded(&self, panel: Panel) -> bool {
        match panel {
            Panel::Resources => self.resources_expanded,
            Panel::Locations => self.locations_expanded,
        }
    }

    fn toggle(mut self, panel: Panel) -> Self {
        match panel {
            Panel::Resources => self.resources_expanded = !self.resources_expanded,
            Panel::Locations => self.locations_expanded = !self.locations_expanded,
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One day back
    Previous,
    /// One day forward
    Next,
    GoTo(NaiveDate),
    SetGranularity(Granularity),
    ToggleResource(String),
    SetSelection(ResourceSelection),
    TogglePanel(Panel),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub anchor: NaiveDate,
    pub granularity: Granularity,
    pub selection: ResourceSelection,
    pub panels: PanelState,
}

impl CalendarState {
    pub fn new(anchor: NaiveDate) -> Self {
        CalendarState {
            anchor,
            granularity: Granularity::Day,
            selection: ResourceSelection::new(DEFAULT_SELECTION),
            panels: PanelState::default(),
        }
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Previous => CalendarState {
                anchor: self.anchor.checked_sub_days(Days::new(1)).unwrap_or(self.anchor),
                ..self
            },
            Action::Next => CalendarState {
                anchor: self.anchor.checked_add_days(Days::new(1)).unwrap_or(self.anchor),
                ..self
            },
            Action::GoTo(anchor) => CalendarState { anchor, ..self },
            Action::SetGranularity(granularity) => CalendarState { granularity, ..self },
            Action::ToggleResource(id) => {
                let mut selection = self.selection;
                selection.toggle(&id);
                CalendarState { selection, ..self }
            }
            Action::SetSelection(selection) => CalendarState { selection, ..self },
            Action::TogglePanel(panel) => CalendarState {
                panels: self.panels.toggle(panel),
                ..self
            },
        }
    }

    /// Apply a sequence of actions in order
    pub fn apply_all(self, actions: impl IntoIterator<Item = Action>) -> Self {
        actions.into_iter().fold(self, CalendarState::apply)
    }
}
