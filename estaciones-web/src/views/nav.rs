//! Client routes and the navigation capability.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::domain::StationId;

/// A client-side route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`: station list
    List,
    /// `/agregar`: create form
    Create,
    /// `/editar/{id}`: edit form for one station
    Edit(StationId),
}

impl Route {
    /// The path this route is served at.
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/agregar".to_string(),
            Route::Edit(id) => format!("/editar/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A navigation request made by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    GoTo(Route),
    Back,
}

/// Lets a view move the user to another route.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);

    /// Return to wherever the user came from.
    fn back(&self);
}

/// Navigator that remembers the last request instead of acting on it.
///
/// The web layer turns the recorded request into a redirect.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    last: Mutex<Option<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent navigation, if any.
    pub fn last(&self) -> Option<Navigation> {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, navigation: Navigation) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(navigation);
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        self.record(Navigation::GoTo(route));
    }

    fn back(&self) {
        self.record(Navigation::Back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::List.path(), "/");
        assert_eq!(Route::Create.path(), "/agregar");
        assert_eq!(Route::Edit(StationId::new(12)).path(), "/editar/12");
    }

    #[test]
    fn display_is_path() {
        assert_eq!(Route::Edit(StationId::new(5)).to_string(), "/editar/5");
    }

    #[test]
    fn recording_navigator_keeps_last() {
        let nav = RecordingNavigator::new();
        assert_eq!(nav.last(), None);

        nav.go_to(Route::Create);
        nav.back();
        assert_eq!(nav.last(), Some(Navigation::Back));

        nav.go_to(Route::List);
        assert_eq!(nav.last(), Some(Navigation::GoTo(Route::List)));
    }
}
