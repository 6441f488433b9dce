// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kobold_component::Model;

/// Count of clicks. Stops at `u32::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    pub count: u32,
}

pub enum CounterAction {
    /// Add one to the count, then report the new count to `on_increment`.
    Increment { on_increment: fn(u32) },
}

impl Model for Counter {
    const NAMESPACE: &'static str = "counter";

    type State = Counter;
    type Action = CounterAction;

    fn init() -> Counter {
        Counter { count: 0 }
    }

    fn reduce(state: &Counter, action: CounterAction) -> Counter {
        match action {
            CounterAction::Increment { on_increment } => {
                let count = state.count.saturating_add(1);

                on_increment(count);

                Counter { count }
            }
        }
    }
}
