//! Interaction modes and the cursor each one shows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pointer cursor hint, as a CSS `cursor` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    Crosshair,
    Grab,
    Grabbing,
}

impl Cursor {
    pub const fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Crosshair => "crosshair",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// The editor's interaction state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    Idle,
    Cropping,
    Scaling,
    AwaitingMove,
    Moving,
}

/// Cursor for each mode, indexed by discriminant.
const MODE_CURSORS: [Cursor; 5] = [
    Cursor::Default,   // Idle
    Cursor::Crosshair, // Cropping
    Cursor::Default,   // Scaling
    Cursor::Grab,      // AwaitingMove
    Cursor::Grabbing,  // Moving
];

impl EditorMode {
    pub const ALL: [EditorMode; 5] = [
        EditorMode::Idle,
        EditorMode::Cropping,
        EditorMode::Scaling,
        EditorMode::AwaitingMove,
        EditorMode::Moving,
    ];

    pub const fn cursor(self) -> Cursor {
        MODE_CURSORS[self as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EditorMode::Idle => "idle",
            EditorMode::Cropping => "cropping",
            EditorMode::Scaling => "scaling",
            EditorMode::AwaitingMove => "awaiting_move",
            EditorMode::Moving => "moving",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
