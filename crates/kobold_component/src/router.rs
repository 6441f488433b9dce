// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use kobold::View;
use log::{debug, warn};
use wasm_bindgen::UnwrapThrowExt;

/// Error type for [`Routes`](Routes) and [`Router`](Router).
#[derive(Debug)]
pub enum RouteError {
    /// The route pattern is malformed or conflicts with an existing route.
    Insert(matchit::InsertError),
    /// Neither the path nor the default path has a route.
    NotFound { path: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteError::Insert(err) => write!(f, "failed to insert route: {err}"),
            RouteError::NotFound { path } => write!(f, "no route for {path}"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Insert(err) => Some(err),
            RouteError::NotFound { .. } => None,
        }
    }
}

impl From<matchit::InsertError> for RouteError {
    fn from(err: matchit::InsertError) -> Self {
        RouteError::Insert(err)
    }
}

/// Path table with a default route.
///
/// Paths that don't match any route resolve to whatever is registered at the
/// default path.
pub struct Routes<T> {
    default: String,
    table: matchit::Router<T>,
}

impl<T> Routes<T> {
    pub fn new(default: &str) -> Self {
        Routes {
            default: default.into(),
            table: matchit::Router::new(),
        }
    }

    pub fn default_path(&self) -> &str {
        &self.default
    }

    pub fn insert(&mut self, path: &str, value: T) -> Result<(), RouteError> {
        self.table.insert(path, value)?;

        Ok(())
    }

    pub fn resolve(&self, path: &str) -> Result<&T, RouteError> {
        if let Ok(found) = self.table.at(path) {
            return Ok(found.value);
        }

        match self.table.at(&self.default) {
            Ok(found) => {
                warn!("no route for {path}, falling back to {}", self.default);

                Ok(found.value)
            }
            Err(_) => Err(RouteError::NotFound { path: path.into() }),
        }
    }
}

/// Mounts the view registered for the current location.
pub struct Router {
    routes: Routes<Box<dyn Fn()>>,
}

impl Router {
    /// Create a router, any unknown path renders the view at `default`.
    pub fn new(default: &str) -> Self {
        Router {
            routes: Routes::new(default),
        }
    }

    pub fn add_route<F, V>(&mut self, path: &str, render: F) -> Result<(), RouteError>
    where
        F: Fn() -> V + 'static,
        V: View,
    {
        self.routes
            .insert(path, Box::new(move || kobold::start(render())))
    }

    /// Render the view for the current location into the document.
    pub fn start(self) -> Result<(), RouteError> {
        let path = current_path();
        let render = self.routes.resolve(&path)?;

        debug!("mounting view for {path}, default {}", self.routes.default_path());

        render();

        Ok(())
    }
}

/// Get the current path from `window.location`.
pub fn current_path() -> String {
    web_sys::window()
        .expect_throw("no window")
        .location()
        .pathname()
        .expect_throw("no pathname")
}
