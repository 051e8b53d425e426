//! TypeScript/TSX parsing via swc.
//!
//! One parse produces one [`ParsedSource`] with its own `SourceMap`, so
//! parses are independent and safe to run on rayon workers.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse TypeScript/TSX source text into an AST.
///
/// The path is only used for diagnostics; the text is never loaded from
/// disk here.
pub fn parse_ts_source(code: String, file_path: &str) -> Result<ParsedSource> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        // Recoverable errors still mean the file is not well-formed.
        let errors = parser.take_errors();
        if !errors.is_empty() {
            return Err(anyhow!("Failed to parse {}: {:?}", file_path, errors));
        }

        Ok(ParsedSource { module, source_map })
    })
}
