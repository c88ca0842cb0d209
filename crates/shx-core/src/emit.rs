use crate::ast::{Block, Fragment, FragmentKind, Page, PageState};

const HEADER_STYLE: &str = "color: white; text-align: center; font-size: 2.5rem; margin: 20px 0;";
const TEXT_STYLE: &str = "color: white; margin: 10px 0; font-size: 1.1rem;";
const LIST_ITEM_STYLE: &str = "color: white; margin: 5px 0;";
const LIST_STYLE: &str = "color: white;";
const LINK_STYLE: &str = "color: #60a5fa; text-decoration: none; font-size: 1.1rem; display: block; margin: 10px 0;";
const IMAGE_STYLE: &str = "max-width: 100%; height: auto; margin: 20px 0; border-radius: 10px;";
const CENTER_STYLE: &str = "text-align: center;";
const PAGE_STYLE: &str = "padding: 40px 20px; min-height: 100vh; font-family: Arial, sans-serif;";
const CONTENT_STYLE: &str = "max-width: 800px; margin: 0 auto;";

/// Wraps the rendered blocks in the page container and pairs them with the title.
pub fn assemble(state: &PageState, blocks: &[Block]) -> Page {
    // Deterministic formatting: 2-space indentation and LF newlines.
    let mut writer = HtmlWriter::new();
    writer.line(&format!("<div style=\"{} {}\">", state.background, PAGE_STYLE));
    writer.indent += 1;
    writer.line(&format!("<div style=\"{}\">", CONTENT_STYLE));
    writer.indent += 1;
    writer.line(&emit_blocks(blocks));
    writer.indent -= 1;
    writer.line("</div>");
    writer.indent -= 1;
    writer.line("</div>");
    Page {
        html: writer.finish(),
        title: state.title.clone(),
    }
}

/// Renders blocks back to back with no separator.
pub fn emit_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(&mut out, block);
    }
    out
}

fn emit_block(out: &mut String, block: &Block) {
    match block {
        Block::Fragment(fragment) => emit_fragment(out, fragment),
        Block::List { items } => {
            out.push_str(&format!("<ul style='{}'>", LIST_STYLE));
            for item in items {
                emit_fragment(out, item);
            }
            out.push_str("</ul>");
        }
    }
}

fn emit_fragment(out: &mut String, fragment: &Fragment) {
    match &fragment.kind {
        FragmentKind::Header { text, color } => {
            let style = styled(HEADER_STYLE, color.as_deref(), false);
            out.push_str(&format!("<h1 style='{}'>{}</h1>", style, text));
        }
        FragmentKind::Text {
            text,
            color,
            centered,
        } => {
            let style = styled(TEXT_STYLE, color.as_deref(), *centered);
            out.push_str(&format!("<p style='{}'>{}</p>", style, text));
        }
        FragmentKind::ListItem { text, color } => {
            let style = styled(LIST_ITEM_STYLE, color.as_deref(), false);
            out.push_str(&format!("<li style='{}'>{}</li>", style, text));
        }
        FragmentKind::Link { text, url } => {
            out.push_str(&format!(
                "<a href='{}' target='_blank' style='{}'>{}</a>",
                url, LINK_STYLE, text
            ));
        }
        FragmentKind::Image { url } => {
            out.push_str(&format!("<img src='{}' style='{}'>", url, IMAGE_STYLE));
        }
    }
}

/// Base rules first, then the color override, then centering.
fn styled(base: &str, color: Option<&str>, centered: bool) -> String {
    let mut style = String::from(base);
    if let Some(color) = color {
        style.push_str(&format!("color: {};", color));
    }
    if centered {
        style.push_str(CENTER_STYLE);
    }
    style
}

struct HtmlWriter {
    out: String,
    indent: usize,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}
