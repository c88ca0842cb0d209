use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
    title: String,
    diagnostics: Vec<JsDiagnostic>,
    source_map: Vec<JsLineRange>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    code: String,
    message: String,
    severity: String,
    line: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLineRange {
    start_line: usize,
    end_line: usize,
}

#[wasm_bindgen]
pub fn render_html(source: &str) -> Result<JsValue, JsValue> {
    let result = render(source);
    serde_wasm_bindgen::to_value(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn render(source: &str) -> RenderResult {
    match std::panic::catch_unwind(|| render_page(source)) {
        Ok(result) => result,
        Err(payload) => fallback_result(&shx_core::panic_message(payload.as_ref())),
    }
}

fn fallback_result(message: &str) -> RenderResult {
    let page = shx_core::error_page(message);
    RenderResult {
        html: page.html,
        title: page.title,
        diagnostics: Vec::new(),
        source_map: Vec::new(),
    }
}

fn render_page(source: &str) -> RenderResult {
    let parsed = shx_core::parse(source);
    let shx_core::Document { state, fragments } = parsed.document;
    let blocks = shx_core::group_lists(fragments);
    let page = shx_core::assemble(&state, &blocks);

    let diagnostics = parsed
        .diagnostics
        .into_iter()
        .map(|diag| JsDiagnostic {
            code: diag.code.to_string(),
            message: diag.message,
            severity: diag.severity.label().to_string(),
            line: diag.line,
        })
        .collect();

    let source_map = blocks
        .iter()
        .map(|block| {
            let (start_line, end_line) = block.line_range();
            JsLineRange {
                start_line,
                end_line,
            }
        })
        .collect();

    RenderResult {
        html: page.html,
        title: page.title,
        diagnostics,
        source_map,
    }
}

#[cfg(test)]
mod tests {
    use super::{fallback_result, render};

    #[test]
    fn source_map_covers_grouped_lists() {
        let result = render("page \"T\"\nlist \"A\"\nlist \"B\"\n\nheader \"H\"");
        assert_eq!(result.title, "T");
        let ranges: Vec<(usize, usize)> = result
            .source_map
            .iter()
            .map(|range| (range.start_line, range.end_line))
            .collect();
        assert_eq!(ranges, vec![(2, 3), (5, 5)]);
    }

    #[test]
    fn diagnostics_are_forwarded() {
        let result = render("nope");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, "W_UNKNOWN_COMMAND");
        assert_eq!(result.diagnostics[0].severity, "warning");
        assert_eq!(result.diagnostics[0].line, 1);
    }

    #[test]
    fn html_matches_core_translation() {
        let source = "bg/color <red>\ntext \"x\" (center)";
        assert_eq!(render(source).html, shx_core::translate(source).html);
    }

    #[test]
    fn fallback_carries_message_and_no_maps() {
        let result = fallback_result("boom");
        assert_eq!(result.title, "Error");
        assert_eq!(
            result.html,
            "<div style=\"color: red; padding: 20px;\">Error: boom</div>"
        );
        assert!(result.diagnostics.is_empty());
        assert!(result.source_map.is_empty());
    }
}
