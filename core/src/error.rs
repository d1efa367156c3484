// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use vidmark_client::{ClientError, EventId, OptionId};

/// Errors raised by the event table view-model.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend request failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// No definition in the taxonomy has this `event_id`.
    #[error("no event definition for event_id {0}")]
    UnknownEvent(EventId),

    /// The definition of the event has no option with this id.
    #[error("event {event_id} has no option {option_id}")]
    UnknownOption {
        /// Event kind whose options were searched.
        event_id: EventId,
        /// Option code that did not resolve.
        option_id: OptionId,
    },

    /// An entry of `option_code` is not an integer.
    #[error("invalid option code: {0:?}")]
    InvalidOptionCode(String),

    /// A timestamp could not be parsed.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// The configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}
