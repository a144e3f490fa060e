//! Value types shared by the page behaviors.

use serde::{Deserialize, Serialize};

/// Two-state visibility of the scroll button or of a group of extended rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Flip to the other state. Applying it twice is the identity.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    /// Map membership of the hidden class to a visibility.
    #[must_use]
    pub const fn from_hidden_class(has_class: bool) -> Self {
        if has_class {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    #[must_use]
    pub const fn has_hidden_class(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Inline `display` value used for the floating button.
    #[must_use]
    pub const fn css_display(self) -> &'static str {
        match self {
            Self::Visible => "block",
            Self::Hidden => "none",
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Vertical scroll offsets as reported by `<body>` and `<html>`.
///
/// Engines disagree on which element carries the page scroll; the other one
/// reads 0, so the larger value is taken as the real offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffsets {
    pub body: f64,
    pub root: f64,
}

impl ScrollOffsets {
    pub const TOP: Self = Self {
        body: 0.0,
        root: 0.0,
    };

    #[must_use]
    pub const fn new(body: f64, root: f64) -> Self {
        Self { body, root }
    }

    /// The offset the page is actually scrolled by.
    #[must_use]
    pub fn effective(&self) -> f64 {
        sanitize(self.body).max(sanitize(self.root))
    }

    #[must_use]
    pub fn is_top(&self) -> bool {
        self.effective() <= 0.0
    }
}

// Overscroll on some engines reports negative values.
fn sanitize(offset: f64) -> f64 {
    if offset.is_nan() || offset < 0.0 {
        0.0
    } else {
        offset
    }
}

/// Visibility of the scroll button for the given offsets.
///
/// Visible only when the page is scrolled strictly past `threshold`.
#[must_use]
pub fn button_visibility(offsets: ScrollOffsets, threshold: f64) -> Visibility {
    if offsets.effective() > threshold {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}
