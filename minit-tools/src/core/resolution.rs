// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Standard video resolutions understood by manim.

use std::{fmt, str::FromStr};

/// A standard video resolution, named by its label (e.g. `1080p`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    P240,
    #[default]
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    /// Every known resolution, from lowest to highest.
    pub const ALL: [Resolution; 6] = [
        Self::P240,
        Self::P480,
        Self::P720,
        Self::P1080,
        Self::P1440,
        Self::P2160,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::P240 => "240p",
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
            Self::P1440 => "1440p",
            Self::P2160 => "2160p",
        }
    }

    /// Pixel dimensions as `(width, height)`.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::P240 => (427, 240),
            Self::P480 => (854, 480),
            Self::P720 => (1280, 720),
            Self::P1080 => (1920, 1080),
            Self::P1440 => (2560, 1440),
            Self::P2160 => (3840, 2160),
        }
    }

    pub const fn width(self) -> u32 {
        self.dimensions().0
    }

    pub const fn height(self) -> u32 {
        self.dimensions().1
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resolution {
    type Err = UnknownResolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|res| res.label() == s)
            .ok_or_else(|| UnknownResolution {
                label: s.to_string(),
            })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unrecognized resolution `{label}` (expected one of 240p, 480p, 720p, 1080p, 1440p, 2160p)")]
pub struct UnknownResolution {
    pub label: String,
}
