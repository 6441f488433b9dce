// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kobold::prelude::*;
use kobold_component::prelude::*;
use log::info;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::HtmlInputElement;

mod state;

use state::Title;

#[component]
fn title<'a>(
    store: &'a Hook<Store<Title>>,
    id: &'static str,
    on_update: fn(&str),
) -> impl View + 'a {
    let title = store.state(id).title.as_str();

    let oninput = store.bind(move |store, e: Event<HtmlInputElement>| {
        state::input(store, id, e.target().value(), on_update);
    });

    view! {
        <div>
            <input value={ ref title } {oninput}>
            { ref title }
        </div>
    }
}

fn title_one_updated(title: &str) {
    gloo_console::log!("Title one updated", title);
}

fn title_two_updated(title: &str) {
    gloo_console::log!("Title two updated", title);
}

fn app(store: &Hook<Store<Title>>) -> impl View + '_ {
    view! {
        <div>
            <h2>"Title component demo"</h2>
            <!title {store} id="one" on_update={title_one_updated}>
            <br>
            <!title {store} id="two" on_update={title_two_updated}>
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let mut router = Router::new("/");

    router
        .add_route("/", || {
            stateful(
                || Store::<Title>::new().with_initial("two", Title::new("Easy!")),
                app,
            )
        })
        .unwrap_throw();

    info!("starting title component demo");

    router.start().unwrap_throw();
}
