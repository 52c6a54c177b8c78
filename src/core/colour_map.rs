use serde::Deserialize;

/// Palette the shader cycles escape counts through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourMapKind {
    #[default]
    FireGradient,
    BlueWhiteGradient,
}

impl ColourMapKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    /// Index the shader switches on. Keep in sync with `mandelbrot.wgsl`.
    #[must_use]
    pub const fn shader_index(self) -> u32 {
        match self {
            Self::FireGradient => 0,
            Self::BlueWhiteGradient => 1,
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
