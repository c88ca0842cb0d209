use std::fs;
use std::path::{Path, PathBuf};
use shx_core::{Diagnostic, parse, translate};

#[test]
fn golden_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let fixtures_dir = root.join("tests/fixtures");
    let expect_dir = root.join("tests/expect");

    let mut fixtures = collect_fixtures(&fixtures_dir)?;
    fixtures.sort_by(|a, b| file_name(a).cmp(&file_name(b)));
    assert!(!fixtures.is_empty(), "no fixtures found");

    for fixture in fixtures {
        let name = file_stem(&fixture)?;
        let source = fs::read_to_string(&fixture)?;
        let page = translate(&source);

        let html_path = expect_dir.join(format!("{}.html", name));
        if html_path.exists() {
            let expected = fs::read_to_string(&html_path)?;
            assert_eq!(
                page.html.trim_end(),
                expected.trim_end(),
                "HTML mismatch for fixture {}",
                name
            );
        }

        let title_path = expect_dir.join(format!("{}.title", name));
        if title_path.exists() {
            let expected = fs::read_to_string(&title_path)?;
            assert_eq!(
                page.title,
                expected.trim_end(),
                "title mismatch for fixture {}",
                name
            );
        }

        let diagnostics = parse(&source).diagnostics;
        let diag_path = expect_dir.join(format!("{}.diag.json", name));
        if diag_path.exists() {
            let expected = fs::read_to_string(&diag_path)?;
            let actual = diagnostics_to_json(&diagnostics);
            assert_eq!(
                actual.trim_end(),
                expected.trim_end(),
                "Diagnostics mismatch for fixture {}",
                name
            );
        } else if !diagnostics.is_empty() {
            panic!(
                "Unexpected diagnostics for fixture {}: {}",
                name,
                diagnostics_to_json(&diagnostics)
            );
        }
    }

    Ok(())
}

fn collect_fixtures(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut fixtures = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("shx") {
            fixtures.push(path);
        }
    }
    Ok(fixtures)
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
}

fn file_stem(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|value| value.to_string())
        .ok_or_else(|| "fixture name is not valid UTF-8".into())
}

fn diagnostics_to_json(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::new();
    out.push_str("[\n");
    for (idx, diag) in diagnostics.iter().enumerate() {
        out.push_str("  {\n");
        out.push_str(&format!("    \"code\": \"{}\",\n", diag.code));
        out.push_str(&format!(
            "    \"severity\": \"{}\",\n",
            diag.severity.label()
        ));
        out.push_str(&format!("    \"line\": {}\n", diag.line));
        out.push_str("  }");
        if idx + 1 < diagnostics.len() {
            out.push_str(",\n");
        } else {
            out.push('\n');
        }
    }
    out.push(']');
    out
}
