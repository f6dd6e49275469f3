//! Launcher palettes and spacing scale.

/// Spacing steps in terminal cells.
pub mod scale {
    pub const TINY: u16 = 0;
    pub const SMALL: u16 = 1;
    pub const MEDIUM: u16 = 2;
    pub const LARGE: u16 = 3;

    /// `(name, cells)` pairs, in the order variants are declared.
    pub const STEPS: [(&str, u16); 4] = [("tiny", TINY), ("small", SMALL), ("medium", MEDIUM), ("large", LARGE)];
}

#[derive(Debug, Clone, Copy)]
pub struct TextColors {
    pub default: &'static str,
    pub secondary: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BackgroundColors {
    pub default: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusColors {
    pub default: &'static str,
    pub info: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonColors {
    pub background: &'static str,
    pub foreground: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: TextColors,
    pub background: BackgroundColors,
    pub status: StatusColors,
    pub border: &'static str,
    pub primary: ButtonColors,
    pub tertiary: ButtonColors,
}

pub const LIGHT: Palette = Palette {
    text: TextColors {
        default: "#1b1f23",
        secondary: "#596068",
        error: "#b02e26",
        warning: "#9a6700",
        success: "#1a7f37",
    },
    background: BackgroundColors {
        default: "#ffffff",
        secondary: "#f6f8fa",
    },
    status: StatusColors {
        default: "#8c959f",
        info: "#0969da",
        success: "#2da44e",
    },
    border: "#d0d7de",
    primary: ButtonColors {
        background: "#4630eb",
        foreground: "#ffffff",
    },
    tertiary: ButtonColors {
        background: "#1b1f23",
        foreground: "#ffffff",
    },
};

pub const DARK: Palette = Palette {
    text: TextColors {
        default: "#f0f6fc",
        secondary: "#8b949e",
        error: "#f85149",
        warning: "#d29922",
        success: "#3fb950",
    },
    background: BackgroundColors {
        default: "#0d1117",
        secondary: "#161b22",
    },
    status: StatusColors {
        default: "#6e7681",
        info: "#58a6ff",
        success: "#3fb950",
    },
    border: "#30363d",
    primary: ButtonColors {
        background: "#5b4cf0",
        foreground: "#ffffff",
    },
    tertiary: ButtonColors {
        background: "#f0f6fc",
        foreground: "#0d1117",
    },
};
