use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{
    FileName, Globals, SourceMap, Spanned,
    comments::{Comment, CommentKind as SwcCommentKind, SingleThreadedComments},
};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::data::{CommentKind, CommentNode, SourceLocation};

/// A parsed source file, reduced to what comment rules need.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    /// All comments in the file, ordered by position.
    pub comments: Vec<CommentNode>,
    lines: Vec<String>,
}

impl ParsedSource {
    /// Text of a 1-based line, without its line terminator.
    pub fn source_line(&self, line: usize) -> &str {
        line.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Pick the parser syntax from the file extension.
///
/// `.ts`/`.mts`/`.cts` are parsed as TypeScript without JSX so generic arrow
/// functions (`<T>(x: T) => x`) keep working. `.tsx` gets TSX, everything else
/// is treated as JavaScript with JSX enabled.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a JS/TS source string and extract its comments.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing; each file
/// should get its own.
pub fn parse_source(
    code: &str,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        parser.parse_module().map_err(|e| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            anyhow!(
                "Failed to parse {}:{}:{}: {}",
                file_path,
                loc.line,
                loc.col.0 + 1,
                e.kind().msg()
            )
        })?;

        let mut raw: Vec<Comment> = {
            let (leading, trailing) = comments.borrow_all();
            leading
                .values()
                .chain(trailing.values())
                .flatten()
                .cloned()
                .collect()
        };
        raw.sort_by_key(|cmt| cmt.span.lo);
        raw.dedup_by_key(|cmt| cmt.span.lo);

        let comments = raw
            .into_iter()
            .map(|cmt| {
                let loc = source_map.lookup_char_pos(cmt.span.lo);
                let kind = match cmt.kind {
                    SwcCommentKind::Line => CommentKind::Line,
                    SwcCommentKind::Block => CommentKind::Block,
                };
                // Character column, so wide characters count once
                CommentNode::new(kind, cmt.text.to_string()).with_location(SourceLocation::new(
                    file_path,
                    loc.line,
                    loc.col.0 + 1,
                ))
            })
            .collect();

        Ok(ParsedSource {
            comments,
            lines: code.lines().map(String::from).collect(),
        })
    })
}
