// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use vidmark_client::TimeRange;

/// Playback state of the video the table belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackWindow {
    /// Not frozen: every event is shown and fetches are unbounded.
    #[default]
    Live,

    /// Frozen on a fixed window: fetches are bounded by it and only events inside it are shown.
    Frozen {
        /// Start of the window.
        begin: Zoned,
        /// End of the window.
        end: Zoned,
    },
}

impl PlaybackWindow {
    /// A frozen window.
    #[must_use]
    pub const fn frozen(begin: Zoned, end: Zoned) -> Self {
        Self::Frozen { begin, end }
    }

    /// Whether the window is frozen.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        matches!(self, Self::Frozen { .. })
    }

    /// Request bounds for a fetch, `None` when live.
    #[must_use]
    pub fn time_range(&self) -> Option<TimeRange> {
        match self {
            Self::Live => None,
            Self::Frozen { begin, end } => Some(TimeRange::new(begin.clone(), end.clone())),
        }
    }

    /// Whether `instant` lies strictly between the bounds of a frozen window.
    ///
    /// A live window contains every instant.
    #[must_use]
    pub fn contains(&self, instant: &Zoned) -> bool {
        match self {
            Self::Live => true,
            Self::Frozen { begin, end } => {
                let ts = instant.timestamp();
                begin.timestamp() < ts && ts < end.timestamp()
            }
        }
    }
}
