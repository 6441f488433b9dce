// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kobold_component::{Model, Store};

#[derive(Debug, PartialEq)]
pub struct Title {
    pub title: String,
}

impl Title {
    pub fn new(title: impl Into<String>) -> Self {
        Title {
            title: title.into(),
        }
    }
}

pub enum TitleAction {
    UpdateTitle { title: String },
}

impl Model for Title {
    const NAMESPACE: &'static str = "title";

    type State = Title;
    type Action = TitleAction;

    fn init() -> Title {
        Title::new("Default title")
    }

    fn reduce(_: &Title, action: TitleAction) -> Title {
        match action {
            TitleAction::UpdateTitle { title } => Title { title },
        }
    }
}

/// Handle a new input value for the instance `id`: report it to `on_update`,
/// then store it as the title.
pub fn input(store: &mut Store<Title>, id: &str, value: String, on_update: fn(&str)) {
    on_update(&value);
    store.send(id, TitleAction::UpdateTitle { title: value });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    thread_local! {
        static REPORTED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    fn record(title: &str) {
        REPORTED.with(|reported| reported.borrow_mut().push(title.into()));
    }

    fn reported() -> Vec<String> {
        REPORTED.with(|reported| reported.take())
    }

    fn update(title: &str) -> TitleAction {
        TitleAction::UpdateTitle {
            title: title.into(),
        }
    }

    #[test]
    fn default_title() {
        let store = Store::<Title>::new();

        assert_eq!(store.state("one").title, "Default title");
    }

    #[test]
    fn update_replaces_title() {
        let mut store = Store::<Title>::new().with_initial("two", Title::new("Easy!"));

        store.send("two", update("X"));

        assert_eq!(store.state("two"), &Title::new("X"));
    }

    #[test]
    fn empty_title() {
        let mut store = Store::<Title>::new();

        store.send("one", update(""));

        assert_eq!(store.state("one").title, "");
    }

    #[test]
    fn instances_are_independent() {
        let mut store = Store::<Title>::new().with_initial("two", Title::new("Easy!"));

        store.send("one", update("Hello"));

        assert_eq!(store.state("one").title, "Hello");
        assert_eq!(store.state("two").title, "Easy!");
    }

    #[test]
    fn input_reports_then_updates() {
        let mut store = Store::<Title>::new().with_initial("two", Title::new("Easy!"));

        input(&mut store, "two", "X".into(), record);

        assert_eq!(store.state("two"), &Title::new("X"));
        assert_eq!(reported(), ["X"]);
    }

    #[test]
    fn input_reports_each_value_once() {
        let mut store = Store::<Title>::new();

        input(&mut store, "one", "a".into(), record);
        input(&mut store, "one", "ab".into(), record);

        assert_eq!(store.state("one").title, "ab");
        assert_eq!(store.state("two").title, "Default title");
        assert_eq!(reported(), ["a", "ab"]);
    }
}
