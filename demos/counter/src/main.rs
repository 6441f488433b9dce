// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kobold::prelude::*;
use kobold_component::prelude::*;
use log::info;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::HtmlElement;

mod state;

use state::{Counter, CounterAction};

#[component]
fn counter<'a>(
    store: &'a Hook<Store<Counter>>,
    id: &'static str,
    on_increment: fn(u32),
) -> impl View + 'a {
    let count = store.state(id).count;

    let onclick = store.bind(move |store, _: MouseEvent<HtmlElement>| {
        store.send(id, CounterAction::Increment { on_increment });
    });

    view! {
        <button {onclick}>"Increment "{ count }</button>
    }
}

fn counter_one_incremented(count: u32) {
    gloo_console::log!("Counter one incremented", count);
}

fn counter_two_incremented(count: u32) {
    gloo_console::log!("Counter two incremented", count);
}

fn app(store: &Hook<Store<Counter>>) -> impl View + '_ {
    view! {
        <div>
            <h2>"Counter component demo"</h2>
            <!counter {store} id="one" on_increment={counter_one_incremented}>
            <br>
            <!counter {store} id="two" on_increment={counter_two_incremented}>
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let mut router = Router::new("/");

    router
        .add_route("/", || {
            stateful(
                || Store::<Counter>::new().with_initial("two", Counter { count: 10 }),
                app,
            )
        })
        .unwrap_throw();

    info!("starting counter component demo");

    router.start().unwrap_throw();
}
