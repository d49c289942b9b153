use crate::engine::criteria::{Criteria, FilterField};
use crate::engine::sort::SortKey;
use log::debug;
use serde::{Deserialize, Serialize};

/// User action on a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replaces one criterion; `None`, blank or `all` clears it.
    SetFilter {
        field: FilterField,
        value: Option<String>,
    },
    /// Clears every criterion.
    ResetFilters,
    SetSort(SortKey),
    /// Jumps to a 1-based page; 0 is treated as 1.
    SetPage(u32),
}

impl Command {
    pub fn set_filter(field: FilterField, value: Option<&str>) -> Self {
        Self::SetFilter {
            field,
            value: value.map(str::to_string),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SetFilter { .. } => "set_filter",
            Self::ResetFilters => "reset_filters",
            Self::SetSort(_) => "set_sort",
            Self::SetPage(_) => "set_page",
        }
    }
}

/// What a list page shows: criteria, optional sort and current page.
///
/// `sort == None` keeps catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub criteria: Criteria,
    pub sort: Option<SortKey>,
    pub page: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            criteria: Criteria::default(),
            sort: None,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a view on page 1 with `criteria`, for example a tag page
    /// opened from a `?tag=` link.
    pub fn with_criteria(criteria: Criteria) -> Self {
        Self {
            criteria: criteria.normalized(),
            ..Self::default()
        }
    }

    /// Applies one command and returns the next state.
    pub fn apply(&self, command: Command) -> Self {
        let name = command.name();
        let next = match command {
            Command::SetFilter { field, value } => Self {
                criteria: self.criteria.clone().with(field, value.as_deref()),
                sort: self.sort,
                page: 1,
            },
            Command::ResetFilters => Self {
                criteria: Criteria::default(),
                sort: self.sort,
                page: 1,
            },
            Command::SetSort(key) => Self {
                criteria: self.criteria.clone(),
                sort: Some(key),
                page: 1,
            },
            Command::SetPage(page) => Self {
                criteria: self.criteria.clone(),
                sort: self.sort,
                page: page.max(1),
            },
        };
        debug!(
            "event=view_command module=view command={} page={}",
            name, next.page
        );
        next
    }

    /// Applies commands in order.
    pub fn apply_all(&self, commands: impl IntoIterator<Item = Command>) -> Self {
        commands
            .into_iter()
            .fold(self.clone(), |state, command| state.apply(command))
    }
}
