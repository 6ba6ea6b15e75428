//! Built-in themes
//!
//! Each constructor assigns a style to every token class, so the
//! themes registered at startup always pass validation.

use super::Theme;
use crate::style::{Color, Style};
use crate::token::TokenClass;

/// GitHub dark palette
pub fn github_dark() -> Theme {
    let mut theme = Theme::new(
        "github-dark",
        Color::new(0x0d, 0x11, 0x17),
        Color::new(0xc9, 0xd1, 0xd9),
    );

    let gray = Color::new(0x8b, 0x94, 0x9e);
    let red = Color::new(0xff, 0x7b, 0x72);
    let blue = Color::new(0x79, 0xc0, 0xff);
    let light_blue = Color::new(0xa5, 0xd6, 0xff);
    let purple = Color::new(0xd2, 0xa8, 0xff);
    let orange = Color::new(0xff, 0xa6, 0x57);
    let plain = Color::new(0xc9, 0xd1, 0xd9);

    theme.set_style(TokenClass::Comment, Style::fg(gray));
    theme.set_style(TokenClass::Command, Style::fg(purple));
    theme.set_style(TokenClass::Keyword, Style::fg(red));
    theme.set_style(TokenClass::Flag, Style::fg(orange));
    theme.set_style(TokenClass::Argument, Style::fg(plain));
    theme.set_style(TokenClass::String, Style::fg(light_blue));
    theme.set_style(TokenClass::Variable, Style::fg(blue));
    theme.set_style(TokenClass::Number, Style::fg(blue));
    theme.set_style(TokenClass::Operator, Style::fg(red));
    theme.set_style(TokenClass::Property, Style::fg(blue));
    theme.set_style(TokenClass::Constant, Style::fg(blue));
    theme.set_style(TokenClass::Text, Style::fg(plain));

    theme
}

/// GitHub light palette
pub fn github_light() -> Theme {
    let mut theme = Theme::new(
        "github-light",
        Color::new(0xff, 0xff, 0xff),
        Color::new(0x24, 0x29, 0x2f),
    );

    let gray = Color::new(0x6e, 0x77, 0x81);
    let red = Color::new(0xcf, 0x22, 0x2e);
    let blue = Color::new(0x05, 0x50, 0xae);
    let dark_blue = Color::new(0x0a, 0x30, 0x69);
    let purple = Color::new(0x82, 0x50, 0xdf);
    let brown = Color::new(0x95, 0x38, 0x00);
    let plain = Color::new(0x24, 0x29, 0x2f);

    theme.set_style(TokenClass::Comment, Style::fg(gray));
    theme.set_style(TokenClass::Command, Style::fg(purple));
    theme.set_style(TokenClass::Keyword, Style::fg(red));
    theme.set_style(TokenClass::Flag, Style::fg(brown));
    theme.set_style(TokenClass::Argument, Style::fg(plain));
    theme.set_style(TokenClass::String, Style::fg(dark_blue));
    theme.set_style(TokenClass::Variable, Style::fg(blue));
    theme.set_style(TokenClass::Number, Style::fg(blue));
    theme.set_style(TokenClass::Operator, Style::fg(red));
    theme.set_style(TokenClass::Property, Style::fg(blue));
    theme.set_style(TokenClass::Constant, Style::fg(blue));
    theme.set_style(TokenClass::Text, Style::fg(plain));

    theme
}

/// Dark palette tuned for terminal embedding
pub fn terminal() -> Theme {
    let mut theme = Theme::new(
        "terminal",
        Color::new(0x1e, 0x1e, 0x1e),
        Color::new(0xd4, 0xd4, 0xd4),
    );

    let green = Color::new(0x6a, 0x99, 0x55);
    let blue = Color::new(0x56, 0x9c, 0xd6);
    let magenta = Color::new(0xc5, 0x86, 0xc0);
    let amber = Color::new(0xce, 0x91, 0x78);
    let cyan = Color::new(0x9c, 0xdc, 0xfe);
    let yellow = Color::new(0xdc, 0xdc, 0xaa);
    let pale_green = Color::new(0xb5, 0xce, 0xa8);
    let plain = Color::new(0xd4, 0xd4, 0xd4);

    theme.set_style(TokenClass::Comment, Style::fg(green).with_italic());
    theme.set_style(TokenClass::Command, Style::fg(blue).with_bold());
    theme.set_style(TokenClass::Keyword, Style::fg(magenta));
    theme.set_style(TokenClass::Flag, Style::fg(yellow));
    theme.set_style(TokenClass::Argument, Style::fg(plain));
    theme.set_style(TokenClass::String, Style::fg(amber));
    theme.set_style(TokenClass::Variable, Style::fg(cyan));
    theme.set_style(TokenClass::Number, Style::fg(pale_green));
    theme.set_style(TokenClass::Operator, Style::fg(plain));
    theme.set_style(TokenClass::Property, Style::fg(cyan));
    theme.set_style(TokenClass::Constant, Style::fg(blue));
    theme.set_style(TokenClass::Text, Style::fg(plain));

    theme
}

/// Get all built-in themes
pub fn all_themes() -> Vec<Theme> {
    vec![github_dark(), github_light(), terminal()]
}
