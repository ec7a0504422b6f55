use colored::*;

use crate::terminal::print;

const LOGO: &str = r#"
      ___ _ __   ___ | | ___ __
     / __| '_ \ / _ \| |/ / '__|
     \__ \ |_) | (_) |   <| |
     |___/ .__/ \___/|_|\_\_|
         |_|
"#;

pub fn print() {
    print::print(&format!("{}", LOGO.bright_green()));
}
