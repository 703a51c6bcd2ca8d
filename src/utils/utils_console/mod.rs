use colored::{ColoredString, Colorize};

/// Prints the given string with the given color.
///
/// ## Example
/// ```
/// use screwkin::utils::utils_console::{screwkin_print, PrintMode, PrintColor};
/// screwkin_print("test", PrintMode::Print, PrintColor::Blue, false);
/// ```
pub fn screwkin_print(s: &str, mode: PrintMode, color: PrintColor, bolded: bool) {
    let mut string: ColoredString = s.into();
    if bolded { string = string.bold() }
    if &color != &PrintColor::None {
        let c = color.get_color_triple();
        string = string.truecolor(c.0, c.1, c.2);
    }
    match mode {
        PrintMode::Println => { println!("{}", string); }
        PrintMode::Print => { print!("{}", string); }
    }
}


/// Enum that is used in the screwkin_print function.
/// Println will cause a new line after each line, while Print will not.
#[derive(Clone, Debug)]
pub enum PrintMode {
    Println,
    Print
}

/// Defines color for a screwkin print command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintColor {
    None,
    Blue,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta
}
impl PrintColor {
    pub fn get_color_triple(&self) -> (u8, u8, u8) {
        match self {
            PrintColor::None => { (0,0,0) }
            PrintColor::Blue => { return (0, 0, 255) }
            PrintColor::Green => { return (0, 255, 0) }
            PrintColor::Red => { return (255, 0, 0) }
            PrintColor::Yellow => { return (255, 255, 0) }
            PrintColor::Cyan => { return (0, 255, 255) }
            PrintColor::Magenta => { return (255, 0, 255) }
        }
    }
}
