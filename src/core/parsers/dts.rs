use anyhow::{Result, anyhow};
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::parsers::comments::DocComments;

pub struct ParsedDts {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// The file text, kept for slicing spans back into source.
    pub code: String,
    /// Absolute position of the first byte of `code` in `source_map`.
    pub start_pos: u32,
    pub comments: DocComments,
}

impl ParsedDts {
    /// Source text covered by `lo..hi` (absolute positions).
    pub fn snippet(&self, lo: u32, hi: u32) -> &str {
        let from = lo.saturating_sub(self.start_pos) as usize;
        let to = hi.saturating_sub(self.start_pos) as usize;
        self.code.get(from..to).unwrap_or_default()
    }
}

/// Parse a declaration file into an AST.
///
/// Several files may share one `SourceMap`; positions stay unique across
/// them.
pub fn parse_dts_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedDts> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let syntax = Syntax::Typescript(TsSyntax {
            dts: true,
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        let doc_comments = DocComments::from_swc(&comments);

        Ok(ParsedDts {
            module,
            start_pos: source_file.start_pos.0,
            source_map,
            code,
            comments: doc_comments,
        })
    })
}
