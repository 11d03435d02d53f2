//! Chart theme colors

/// Background, text and grid colors for one theme
pub(super) struct Theme {
    pub(super) background: &'static str,
    pub(super) text: &'static str,
    pub(super) grid: &'static str,
}

pub(super) const DARK: Theme = Theme {
    background: "#0A0A0C", // Near black
    text: "#FFFFFF",
    grid: "#505050",
};

pub(super) const LIGHT: Theme = Theme {
    background: "#F5F3EF", // Warm paper
    text: "#1A1A1A",
    grid: "#C8C4BC",
};

pub(super) fn theme(dark: bool) -> &'static Theme {
    if dark { &DARK } else { &LIGHT }
}
