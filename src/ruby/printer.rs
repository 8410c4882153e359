/// Printer accumulates indented lines into an internal buffer
#[derive(Debug, Default)]
pub struct Printer {
    /// The internal buffer used to build the signatures
    pub(super) buffer: String,

    /// The indent level
    pub(super) indent: usize,
}

/// write a line into the printer buffer at the current indent
macro_rules! emit {
    ($printer:ident, $v:expr) => {{
        $printer.push_indent();
        $printer.buffer.push_str($v);
        $printer.buffer.push('\n');
    }};
    ($printer:ident, $($arg:tt)*) => {{
        $printer.push_indent();
        $printer.buffer.push_str(&format!($($arg)*));
        $printer.buffer.push('\n');
    }};
}

/// write a line and indent the printer
macro_rules! emit_and_indent {
    ($printer:ident, $($arg:tt)*) => {{
        emit!($printer, $($arg)*);
        $printer.indent += 2;
    }};
}

/// outdent the printer and write a line
macro_rules! outdent_and_emit {
    ($printer:ident, $($arg:tt)*) => {{
        $printer.indent -= 2;
        emit!($printer, $($arg)*);
    }};
}

impl Printer {
    /// Create a new printer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new printer starting at the given indent
    pub fn with_indent(indent: usize) -> Self {
        Self {
            buffer: String::new(),
            indent,
        }
    }

    pub(super) fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.buffer.push(' ');
        }
    }

    /// Print a blank line
    pub fn add_blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Append an already rendered fragment
    pub fn append(&mut self, fragment: &str) {
        self.buffer.push_str(fragment)
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}
