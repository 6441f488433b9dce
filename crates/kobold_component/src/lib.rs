// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Kobold Component
//!
//! _Namespaced state for reusable [Kobold](https://docs.rs/kobold) components._
//!
//! A component is described by a [`Model`](Model): a namespace, a default state and
//! a reducer that maps the current state and an action to a **replacement** state.
//! The application keeps one [`Store`](Store) per namespace, and every rendered instance
//! of the component owns its own slice of that store, keyed by an instance id.
//!
//! ```
//! use kobold_component::{Model, Store};
//!
//! #[derive(Debug, PartialEq)]
//! struct Count(u32);
//!
//! struct Counter;
//!
//! impl Model for Counter {
//!     const NAMESPACE: &'static str = "counter";
//!
//!     type State = Count;
//!     type Action = ();
//!
//!     fn init() -> Count {
//!         Count(0)
//!     }
//!
//!     fn reduce(state: &Count, _: ()) -> Count {
//!         Count(state.0 + 1)
//!     }
//! }
//!
//! let mut store = Store::<Counter>::new().with_initial("two", Count(10));
//!
//! store.send("one", ());
//! store.send("two", ());
//!
//! assert_eq!(store.state("one"), &Count(1));
//! assert_eq!(store.state("two"), &Count(11));
//! ```
//!
//! Inside a view the store lives behind a [`Hook`](kobold::stateful::Hook) created with
//! [`stateful`](kobold::stateful::stateful), and events are wired to it with
//! [`Hook::bind`](kobold::stateful::Hook::bind):
//!
//! ```ignore
//! let onclick = store.bind(move |store, _: MouseEvent<HtmlElement>| {
//!     store.send(id, ());
//! });
//! ```
//!
//! The [`Router`](Router) mounts the application view for the current path.

mod model;
mod router;
mod store;

pub use model::Model;
pub use router::{current_path, RouteError, Router, Routes};
pub use store::{Instances, Store};

/// The prelude module with most commonly used types.
pub mod prelude {
    pub use crate::{Model, Router, Store};
}
