use super::state::{Command, ViewState};
use crate::catalog::{Catalog, LoadError, LoadResult};
use log::{debug, warn};

/// Lifecycle of one list page.
///
/// `Loading -> Ready | LoadFailed`. Only `Ready` reacts to commands, and
/// `LoadFailed` is terminal for the page view.
#[derive(Debug)]
pub enum PageState<T> {
    Loading,
    Ready {
        catalog: Catalog<T>,
        view: ViewState,
    },
    LoadFailed(LoadError),
}

impl<T> PageState<T> {
    pub fn loading() -> Self {
        Self::Loading
    }

    /// Completes the single load of this page view.
    ///
    /// Only `Loading` accepts a load result; other states ignore it.
    pub fn on_loaded(self, result: LoadResult<Catalog<T>>) -> Self {
        self.on_loaded_with(result, ViewState::default())
    }

    /// Completes the load with a starting view, such as a tag from the URL.
    pub fn on_loaded_with(self, result: LoadResult<Catalog<T>>, view: ViewState) -> Self {
        match self {
            Self::Loading => match result {
                Ok(catalog) => Self::Ready { catalog, view },
                Err(err) => {
                    warn!("event=page_load module=view status=error error={err}");
                    Self::LoadFailed(err)
                }
            },
            other => {
                debug!("event=page_load module=view status=ignored reason=already_settled");
                other
            }
        }
    }

    /// Applies a user command; a no-op outside `Ready`.
    pub fn dispatch(self, command: Command) -> Self {
        match self {
            Self::Ready { catalog, view } => Self::Ready {
                view: view.apply(command),
                catalog,
            },
            other => other,
        }
    }

    pub fn view(&self) -> Option<&ViewState> {
        match self {
            Self::Ready { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog<T>> {
        match self {
            Self::Ready { catalog, .. } => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::LoadFailed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
