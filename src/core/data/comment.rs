use crate::core::data::source::SourceLocation;

/// Kind of a comment token, as recognised by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// comment`
    Line,
    /// `/* comment */`
    Block,
}

impl CommentKind {
    /// The opening sequence of this kind of comment.
    pub fn marker(self) -> &'static str {
        match self {
            CommentKind::Line => "//",
            CommentKind::Block => "/*",
        }
    }
}

impl std::fmt::Display for CommentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentKind::Line => write!(f, "line"),
            CommentKind::Block => write!(f, "block"),
        }
    }
}

/// A single comment handed to rules by the host traversal.
///
/// `body` is the raw text between the opening marker and the closing marker
/// (if any), exactly as it appears in the source. Rules must treat nodes as
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub kind: CommentKind,
    pub body: String,
    /// Where the comment starts (the position of its opening marker).
    pub location: SourceLocation,
}

impl CommentNode {
    pub fn new(kind: CommentKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
            location: SourceLocation::default(),
        }
    }

    pub fn line(body: impl Into<String>) -> Self {
        Self::new(CommentKind::Line, body)
    }

    pub fn block(body: impl Into<String>) -> Self {
        Self::new(CommentKind::Block, body)
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub fn marker(&self) -> &'static str {
        self.kind.marker()
    }
}
