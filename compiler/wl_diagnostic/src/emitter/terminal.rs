//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and,
//! when the source is attached, a one-line snippet with carets under the
//! primary span.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source text attached to an emitter for snippet rendering.
struct SourceContext {
    text: String,
    path: Option<String>,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach source text so labels render as `line:col` plus a snippet.
    #[must_use]
    pub fn with_source(mut self, text: &str) -> Self {
        let path = self.source.take().and_then(|s| s.path);
        self.source = Some(SourceContext {
            text: text.to_string(),
            path,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    /// Name the attached source in label locations (`path:line:col`).
    ///
    /// Has no effect until [`with_source`](Self::with_source) is called.
    #[must_use]
    pub fn with_file_path(mut self, path: &str) -> Self {
        if let Some(source) = self.source.as_mut() {
            source.path = Some(path.to_string());
        }
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} ");

        let location = match &self.source {
            Some(src) => {
                let (line, col) = src.lines.offset_to_line_col(&src.text, label.span.start);
                match &src.path {
                    Some(path) => format!("{path}:{line}:{col}"),
                    None => format!("{line}:{col}"),
                }
            }
            None => format!("{:?}", label.span),
        };
        let _ = write!(self.writer, "{location}: ");

        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&label.message, color);
        let _ = writeln!(self.writer);

        if label.is_primary {
            self.write_snippet(label);
        }
    }

    /// Render the primary label's line with carets under the span.
    fn write_snippet(&mut self, label: &Label) {
        let Some(src) = &self.source else {
            return;
        };
        let (line, col) = src.lines.offset_to_line_col(&src.text, label.span.start);
        let text = src.lines.line_text(&src.text, line).to_string();
        let width = label.span.len().max(1) as usize;
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());
        let indent = " ".repeat((col as usize).saturating_sub(1));
        let carets = "^".repeat(width.min(text.chars().count().saturating_sub(indent.len()).max(1)));

        let _ = writeln!(self.writer, "   {pad} |");
        let _ = writeln!(self.writer, "   {gutter} | {text}");
        let _ = write!(self.writer, "   {pad} | {indent}");
        self.write_colored(&carets, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode) -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
