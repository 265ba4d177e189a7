//! Order status projection for the delivery tracking view.
//!
//! Projects an [`OrderStatus`] onto the fixed four-step delivery track.
//! `Cancelled` orders fall outside the track; the view renders a dedicated
//! cancelled panel instead.

mod courier;

pub use courier::*;

use crate::models::OrderStatus;

/// Ordered step labels of the delivery track.
pub const DELIVERY_STEPS: [&str; 4] = [
    "Order Placed",
    "Processing",
    "Out for Delivery",
    "Delivered",
];

/// Render state of one step on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Step already passed
    Completed,
    /// The step the order currently sits at; exactly one per track
    Current,
    /// Step not yet reached
    Upcoming,
}

/// Zero-based index of `status` on the delivery track.
///
/// Returns `None` for `Cancelled`, which has no position on the track.
/// Unknown backend strings never reach here: [`OrderStatus::parse_lenient`]
/// already folds them to `Pending` (index 0).
pub fn step_index(status: OrderStatus) -> Option<usize> {
    match status {
        OrderStatus::Pending => Some(0),
        OrderStatus::Processing => Some(1),
        OrderStatus::OutForDelivery => Some(2),
        OrderStatus::Delivered => Some(3),
        OrderStatus::Cancelled => None,
    }
}

/// Render states for all four steps.
///
/// Every step at or before the current index is completed, the one at the
/// index is current, everything after is upcoming. `None` for `Cancelled`.
pub fn step_states(status: OrderStatus) -> Option<[StepState; 4]> {
    let current = step_index(status)?;
    let mut states = [StepState::Upcoming; 4];
    for (index, state) in states.iter_mut().enumerate() {
        *state = if index < current {
            StepState::Completed
        } else if index == current {
            StepState::Current
        } else {
            StepState::Upcoming
        };
    }
    Some(states)
}
