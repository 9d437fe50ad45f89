use std::{path::Path, sync::Arc, sync::LazyLock};

use anyhow::{Result, anyhow};
use regex::Regex;
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Extensions of files that can define messages or import modules that do.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "vue"];

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script\b[^>]*>(.*?)</script\s*>").expect("script block pattern is valid")
});

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Script sections of a file: the whole file for JS/TS, each `<script>` block
/// for Vue single-file components.
pub fn script_sections(code: &str, path: &Path) -> Vec<String> {
    if path.extension().and_then(|e| e.to_str()) == Some("vue") {
        SCRIPT_BLOCK
            .captures_iter(code)
            .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .collect()
    } else {
        vec![code.to_string()]
    }
}

fn syntax_for(path: &Path) -> Syntax {
    let tsx = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ts" | "vue")
    );
    Syntax::Typescript(TsSyntax {
        tsx,
        ..Default::default()
    })
}

/// Parse one script section into a module AST.
///
/// Each call gets its own `SourceMap` and swc globals so files can be parsed
/// from several threads at once.
pub fn parse_script(code: String, path: &Path) -> Result<Module> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(path.to_path_buf()).into(), code);

        let mut parser = Parser::new(syntax_for(path), StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", path.display(), e))?;

        // Recoverable errors still yield a module; treat them as failures too.
        if let Some(e) = parser.take_errors().into_iter().next() {
            return Err(anyhow!("Failed to parse {}: {:?}", path.display(), e));
        }
        Ok(module)
    })
}
