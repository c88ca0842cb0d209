use crate::ast::{Command, Document, Fragment, FragmentKind, PageState};
use crate::color::normalize_color;
use crate::diagnostic::{
    Diagnostic, DiagnosticSeverity, W_BG_NO_COLOR, W_PAGE_NO_TITLE, W_UNKNOWN_COMMAND,
};
use crate::extract::{bracketed, quoted};

const DEFAULT_HEADER_TEXT: &str = "Welcome";
const DEFAULT_LINK_TEXT: &str = "Click Here";
const DEFAULT_LINK_URL: &str = "#";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x200";
const CENTER_MODIFIER: &str = "(center)";

pub struct ParseResult {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse(source: &str) -> ParseResult {
    let mut parser = Parser::new(source);
    let document = parser.parse_document();
    ParseResult {
        document,
        diagnostics: parser.diagnostics,
    }
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    state: PageState,
    diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Copy, Debug)]
struct Line<'a> {
    text: &'a str,
    number: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: split_lines(source),
            state: PageState::default(),
            diagnostics: Vec::new(),
        }
    }

    fn parse_document(&mut self) -> Document {
        let mut fragments = Vec::new();
        let lines = std::mem::take(&mut self.lines);
        for line in lines {
            if line.text.is_empty() {
                continue;
            }
            let Some(command) = classify(line.text) else {
                log::trace!(target: "shx.parser", "line {}: ignored", line.number);
                self.push_diag(
                    line.number,
                    W_UNKNOWN_COMMAND,
                    format!("unrecognized command, line ignored: {}", line.text),
                );
                continue;
            };
            log::trace!(target: "shx.parser", "line {}: {}", line.number, command.keyword());
            if let Some(kind) = self.apply(command, line) {
                fragments.push(Fragment {
                    line: line.number,
                    kind,
                });
            }
        }
        Document {
            state: std::mem::take(&mut self.state),
            fragments,
        }
    }

    /// Runs one command; page-level commands update state and emit nothing.
    fn apply(&mut self, command: Command, line: Line<'_>) -> Option<FragmentKind> {
        let text = line.text;
        match command {
            Command::Page => {
                match quoted(text) {
                    Some(title) => {
                        log::debug!(target: "shx.parser", "title -> {:?}", title);
                        self.state.title = title.to_string();
                    }
                    None => self.push_diag(
                        line.number,
                        W_PAGE_NO_TITLE,
                        "page line has no quoted title",
                    ),
                }
                None
            }
            Command::Background => {
                match bracketed(text) {
                    Some(inside) => {
                        let background = background_style(inside);
                        log::debug!(target: "shx.parser", "background -> {:?}", background);
                        self.state.background = background;
                    }
                    None => self.push_diag(
                        line.number,
                        W_BG_NO_COLOR,
                        "bg/color line has no <color> parameter",
                    ),
                }
                None
            }
            Command::Header => Some(FragmentKind::Header {
                text: quoted(text).unwrap_or(DEFAULT_HEADER_TEXT).to_string(),
                color: bracketed(text).map(normalize_color),
            }),
            Command::Text => Some(FragmentKind::Text {
                text: quoted(text).unwrap_or_default().to_string(),
                color: bracketed(text).map(normalize_color),
                centered: text.to_lowercase().contains(CENTER_MODIFIER),
            }),
            Command::List => {
                let param = bracketed(text);
                // A lone <param> is both the item text and its color.
                let item = quoted(text).or(param).unwrap_or_default();
                Some(FragmentKind::ListItem {
                    text: item.to_string(),
                    color: param.map(normalize_color),
                })
            }
            Command::Link => Some(FragmentKind::Link {
                text: quoted(text).unwrap_or(DEFAULT_LINK_TEXT).to_string(),
                url: bracketed(text).unwrap_or(DEFAULT_LINK_URL).to_string(),
            }),
            Command::Image => Some(FragmentKind::Image {
                url: bracketed(text).unwrap_or(PLACEHOLDER_IMAGE_URL).to_string(),
            }),
        }
    }

    fn push_diag(&mut self, line: usize, code: &'static str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(
            line,
            DiagnosticSeverity::Warning,
            code,
            message,
        ));
    }
}

/// Matches the line's lowercase form against each keyword prefix, in table order.
pub fn classify(line: &str) -> Option<Command> {
    let lowered = line.to_lowercase();
    Command::TABLE
        .iter()
        .find(|(keyword, _)| lowered.starts_with(keyword))
        .map(|(_, command)| *command)
}

fn background_style(inside: &str) -> String {
    let parts: Vec<String> = inside.split('/').map(normalize_color).collect();
    if parts.len() == 1 {
        format!("background-color: {};", parts[0])
    } else {
        format!("background: linear-gradient(135deg, {});", parts.join(", "))
    }
}

/// Splits on every line boundary `str::splitlines` knows, `\r\n` counting once.
fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(Line {
            text: source[start..idx].trim(),
            number: lines.len() + 1,
        });
        start = idx + ch.len_utf8();
        if ch == '\r' && chars.next_if(|(_, next)| *next == '\n').is_some() {
            start += 1;
        }
    }
    if start < source.len() {
        lines.push(Line {
            text: source[start..].trim(),
            number: lines.len() + 1,
        });
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
