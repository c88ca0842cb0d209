use std::fs;
use std::io;
use std::path::Path;

use shx_core::Page;

const RESET_CSS: &str = include_str!("../assets/shx.css");

#[derive(Debug, Clone)]
pub struct Renderer {
    lang: String,
    reset_css: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            lang: "en".to_string(),
            reset_css: true,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_reset_css(mut self, enabled: bool) -> Self {
        self.reset_css = enabled;
        self
    }

    pub fn stylesheet(&self) -> &'static str {
        RESET_CSS
    }

    /// Wraps a translated page in a standalone HTML document.
    pub fn embed_page(&self, page: &Page) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!("<html lang=\"{}\">\n", escape_attr(&self.lang)));
        out.push_str("<head>\n");
        out.push_str("  <meta charset=\"utf-8\" />\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        out.push_str(&format!("  <title>{}</title>\n", escape_html(&page.title)));
        if self.reset_css {
            out.push_str("  <style>\n");
            out.push_str(self.stylesheet());
            out.push_str("  </style>\n");
        }
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        out.push_str(&page.html);
        if !page.html.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }

    pub fn write_document(&self, page: &Page, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.embed_page(page))
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}
