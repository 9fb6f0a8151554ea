/// Pure position information in source code files (JS/TS/JSX/TSX).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position with context information in source code files.
///
/// Carries everything the reporter needs to display an issue: where it is
/// and the text of the line it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    /// The source code line content for display.
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{SourceContext, SourceLocation};

    #[test]
    fn test_source_location_new() {
        let loc = SourceLocation::new("./src/app.ts", 10, 5);
        assert_eq!(loc.file_path, "./src/app.ts");
        assert_eq!(loc.line, 10);
        assert_eq!(loc.col, 5);
    }

    #[test]
    fn test_source_context_accessors() {
        let loc = SourceLocation::new("./src/app.ts", 3, 1);
        let ctx = SourceContext::new(loc, "//todo: fix");
        assert_eq!(ctx.file_path(), "./src/app.ts");
        assert_eq!(ctx.line(), 3);
        assert_eq!(ctx.col(), 1);
        assert_eq!(ctx.source_line, "//todo: fix");
    }

    #[test]
    fn test_source_location_ordering() {
        let a = SourceLocation::new("a.ts", 2, 9);
        let b = SourceLocation::new("a.ts", 10, 1);
        let c = SourceLocation::new("b.ts", 1, 1);
        assert!(a < b);
        assert!(b < c);
    }
}
