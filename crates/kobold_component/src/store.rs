// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Debug};

use log::debug;

use crate::Model;

/// State of all instances of the component described by `M`.
///
/// Instances are identified by string ids. An instance that has neither been seeded
/// with [`with_initial`](Store::with_initial) nor received an action reads the
/// default state of the model.
pub struct Store<M: Model> {
    default: M::State,
    slices: BTreeMap<Box<str>, M::State>,
}

impl<M: Model> Store<M> {
    pub fn new() -> Self {
        Store {
            default: M::init(),
            slices: BTreeMap::new(),
        }
    }

    /// Seed the initial state of the instance `id`, overriding the model default.
    pub fn with_initial(mut self, id: &str, state: M::State) -> Self {
        self.slices.insert(id.into(), state);
        self
    }

    pub fn namespace(&self) -> &'static str {
        M::NAMESPACE
    }

    /// Current state of the instance `id`.
    pub fn state(&self, id: &str) -> &M::State {
        self.slices.get(id).unwrap_or(&self.default)
    }

    /// Returns `true` if the instance `id` has its own state, either seeded or
    /// produced by the reducer.
    pub fn contains(&self, id: &str) -> bool {
        self.slices.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Iterate over instances with their own state, ordered by id.
    pub fn instances(&self) -> Instances<M::State> {
        Instances(self.slices.iter())
    }

    /// Run the reducer of the model for the instance `id` and store its result.
    pub fn send(&mut self, id: &str, action: M::Action) -> &M::State {
        let prev = self.state(id);
        let next = M::reduce(prev, action);

        debug!("{}/{id}: {prev:?} -> {next:?}", M::NAMESPACE);

        match self.slices.get_mut(id) {
            Some(slot) => *slot = next,
            None => {
                self.slices.insert(id.into(), next);
            }
        }

        self.state(id)
    }
}

impl<M: Model> Default for Store<M> {
    fn default() -> Self {
        Store::new()
    }
}

impl<M: Model> Debug for Store<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Store")
            .field("namespace", &M::NAMESPACE)
            .field("default", &self.default)
            .field("slices", &self.slices)
            .finish()
    }
}

/// Iterator over the instances of a [`Store`](Store).
pub struct Instances<'a, S>(btree_map::Iter<'a, Box<str>, S>);

impl<'a, S> Iterator for Instances<'a, S> {
    type Item = (&'a str, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(id, state)| (&**id, state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named {
        name: String,
        edits: u32,
    }

    enum Edit {
        Rename(&'static str),
        Clear,
    }

    struct Editor;

    impl Model for Editor {
        const NAMESPACE: &'static str = "editor";

        type State = Named;
        type Action = Edit;

        fn init() -> Named {
            Named {
                name: "Default".into(),
                edits: 0,
            }
        }

        fn reduce(state: &Named, action: Edit) -> Named {
            let name = match action {
                Edit::Rename(name) => name.into(),
                Edit::Clear => String::new(),
            };

            Named {
                name,
                edits: state.edits + 1,
            }
        }
    }

    fn named(name: &str, edits: u32) -> Named {
        Named {
            name: name.into(),
            edits,
        }
    }

    #[test]
    fn reads_default_without_creating_slices() {
        let store = Store::<Editor>::new();

        assert_eq!(store.state("one"), &named("Default", 0));
        assert!(!store.contains("one"));
        assert!(store.is_empty());
    }

    #[test]
    fn initial_override() {
        let store = Store::<Editor>::new().with_initial("two", named("Easy!", 0));

        assert_eq!(store.state("one"), &named("Default", 0));
        assert_eq!(store.state("two"), &named("Easy!", 0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn later_seed_wins() {
        let store = Store::<Editor>::new()
            .with_initial("two", named("first", 0))
            .with_initial("two", named("second", 0));

        assert_eq!(store.state("two"), &named("second", 0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn send_replaces_state() {
        let mut store = Store::<Editor>::new().with_initial("two", named("Easy!", 5));

        assert_eq!(store.send("two", Edit::Rename("X")), &named("X", 6));
        assert_eq!(store.send("two", Edit::Clear), &named("", 7));
        assert_eq!(store.state("two"), &named("", 7));
    }

    #[test]
    fn send_to_unseeded_starts_from_default() {
        let mut store = Store::<Editor>::new();

        store.send("one", Edit::Rename("Hello"));

        assert!(store.contains("one"));
        assert_eq!(store.state("one"), &named("Hello", 1));
    }

    #[test]
    fn instances_are_independent() {
        let mut store = Store::<Editor>::new().with_initial("two", named("Easy!", 0));

        store.send("one", Edit::Rename("changed"));
        store.send("one", Edit::Rename("again"));

        assert_eq!(store.state("one"), &named("again", 2));
        assert_eq!(store.state("two"), &named("Easy!", 0));
    }

    #[test]
    fn instances_in_id_order() {
        let mut store = Store::<Editor>::new().with_initial("two", named("b", 0));

        store.send("one", Edit::Rename("a"));

        let ids: Vec<_> = store.instances().map(|(id, state)| (id, state.name.as_str())).collect();

        assert_eq!(ids, [("one", "a"), ("two", "b")]);
    }

    #[test]
    fn namespace() {
        assert_eq!(Store::<Editor>::default().namespace(), "editor");
    }
}
