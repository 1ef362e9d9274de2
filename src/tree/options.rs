use serde::{Deserialize, Serialize};

/// Indentation emitted per depth level.
pub const INDENT_UNIT: &str = "    ";

/// Branch glyph placed before an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// More siblings follow
    Tee,
    /// Terminal glyph
    Corner,
}

impl Branch {
    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Tee => "├── ",
            Branch::Corner => "└── ",
        }
    }

    pub fn terminal_if(last: bool) -> Self {
        if last {
            Branch::Corner
        } else {
            Branch::Tee
        }
    }
}

/// How terminal glyphs are assigned among siblings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GlyphPolicy {
    /// Last file is terminal when every remaining subdirectory is excluded;
    /// skip-contents folders are always terminal.
    #[default]
    Legacy,
    /// Only the final visible sibling is terminal.
    Precise,
}

/// Configuration options for rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub glyphs: GlyphPolicy,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyphs(mut self, glyphs: GlyphPolicy) -> Self {
        self.glyphs = glyphs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_glyphs() {
        assert_eq!(Branch::Tee.as_str(), "├── ");
        assert_eq!(Branch::Corner.as_str(), "└── ");
        assert_eq!(Branch::terminal_if(true), Branch::Corner);
        assert_eq!(Branch::terminal_if(false), Branch::Tee);
    }

    #[test]
    fn test_default_policy_is_legacy() {
        assert_eq!(RenderOptions::default().glyphs, GlyphPolicy::Legacy);
        assert_eq!(
            RenderOptions::new().with_glyphs(GlyphPolicy::Precise).glyphs,
            GlyphPolicy::Precise
        );
    }
}
