use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Info,
    Dim,
}

impl SemanticColor {
    fn color(self) -> Color {
        match self {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Info => theme::colors::INFO,
            SemanticColor::Dim => theme::colors::DIM,
        }
    }
}

/// Text with an optional semantic color.
///
/// Banners are drawn as banner text over a semantic background instead, padded
/// by one space on each side. Uncolored banners are not padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    background: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    fn with_color(text: impl Into<String>, color: Option<SemanticColor>) -> Self {
        Self {
            text: text.into(),
            color,
            background: None,
            bold: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(SemanticColor::Error))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(SemanticColor::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(SemanticColor::Dim))
    }

    /// Bold banner text on a green background
    pub fn success_banner(text: impl Into<String>) -> Self {
        Self::banner(text, SemanticColor::Success)
    }

    /// Bold banner text on a red background
    pub fn failure_banner(text: impl Into<String>) -> Self {
        Self::banner(text, SemanticColor::Error)
    }

    fn banner(text: impl Into<String>, background: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: None,
            background: Some(background),
            bold: true,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = match self.background {
            Some(background) => format!(" {} ", self.text)
                .stylize()
                .with(theme::colors::BANNER_TEXT)
                .on(background.color()),
            None => match self.color {
                Some(color) => self.text.clone().with(color.color()),
                None => self.text.clone().stylize(),
            },
        };

        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
