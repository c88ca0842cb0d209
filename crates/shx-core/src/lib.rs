mod ast;
mod color;
mod diagnostic;
mod emit;
mod extract;
mod fallback;
mod group;
mod parser;

pub use ast::{
    Block, Command, DEFAULT_BACKGROUND, DEFAULT_TITLE, Document, Fragment, FragmentKind, Page,
    PageState,
};
pub use color::normalize_color;
pub use diagnostic::{
    Diagnostic, DiagnosticSeverity, W_BG_NO_COLOR, W_PAGE_NO_TITLE, W_UNKNOWN_COMMAND,
};
pub use emit::{assemble, emit_blocks};
pub use extract::{bracketed, quoted};
pub use fallback::{ERROR_TITLE, error_page, panic_message, translate_or_fallback};
pub use group::group_lists;
pub use parser::{PLACEHOLDER_IMAGE_URL, ParseResult, classify, parse};

/// Translates SHX source into the assembled page html and its title.
pub fn translate(source: &str) -> Page {
    let parsed = parse(source);
    let Document { state, fragments } = parsed.document;
    let blocks = group_lists(fragments);
    assemble(&state, &blocks)
}
