// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Debug;

/// Describes the state of a reusable component.
///
/// Every instance of the component gets its own `State`, created from [`init`](Model::init)
/// unless the application seeds a different initial value for it. The state only ever
/// changes through [`reduce`](Model::reduce).
pub trait Model: 'static {
    /// Key under which the state of all instances is kept.
    const NAMESPACE: &'static str;

    type State: Debug + 'static;

    /// Payload for the reducer. Components with more than one reducer use an enum
    /// with one variant per reducer.
    type Action;

    /// Default state for instances without an initial override.
    fn init() -> Self::State;

    /// Produce the next state of an instance.
    ///
    /// The returned value replaces the previous state entirely, nothing is merged.
    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}
