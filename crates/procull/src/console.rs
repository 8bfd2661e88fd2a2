use colored::Colorize;
use procull_core::{Console, Emphasis};
use std::io::{self, BufRead, Write};

/// Console backed by the real terminal: colored lines out, stdin lines in
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn line(&mut self, emphasis: Emphasis, text: &str) {
        match emphasis {
            Emphasis::Normal => println!("{text}"),
            Emphasis::Warning => println!("{}", text.yellow()),
            Emphasis::Danger => println!("{}", text.red()),
        }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        if io::stdout().flush().is_err() {
            return None;
        }
        let mut buffer = String::new();
        match io::stdin().lock().read_line(&mut buffer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buffer.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
