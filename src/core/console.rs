use crate::core::Console;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Records lines in memory instead of printing them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for Transcript {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Forwards every line to two consoles.
pub struct Tee<'a> {
    first: &'a mut dyn Console,
    second: &'a mut dyn Console,
}

impl<'a> Tee<'a> {
    pub fn new(first: &'a mut dyn Console, second: &'a mut dyn Console) -> Self {
        Self { first, second }
    }
}

impl Console for Tee<'_> {
    fn line(&mut self, text: &str) {
        self.first.line(text);
        self.second.line(text);
    }
}
