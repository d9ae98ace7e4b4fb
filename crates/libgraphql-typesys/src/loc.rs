use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file the position refers to.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: Option<&Path>, pos: ast::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }

    pub fn into_schema_source_location(self) -> SourceLocation {
        SourceLocation::Schema(self)
    }
}

pub(crate) static GRAPHQL_BUILTIN: SourceLocation = SourceLocation::GraphQLBuiltIn;

/// Where some type-system element came from.
///
/// Anything carrying a [`SourceLocation::Schema`] location is considered
/// *SDL-provided*: its name, type, arguments and descriptive attributes are
/// owned by schema-language text and can not be overwritten by a
/// [`TypeConfigDecorator`](crate::schema::TypeConfigDecorator).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    ExecutableDocument(FilePosition),
    GraphQLBuiltIn,
    Programmatic,
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn schema(file: Option<&Path>, pos: ast::Pos) -> Self {
        Self::Schema(FilePosition::from_pos(file, pos))
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::ExecutableDocument(file_pos)
                | Self::Schema(file_pos) => Some(file_pos),
            Self::GraphQLBuiltIn
                | Self::Programmatic => None,
        }
    }

    /// Indicates whether this location points into schema-language text.
    pub fn is_sdl(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Produce a new location in the same file at a different AST position.
    pub(crate) fn with_ast_position(&self, pos: &ast::Pos) -> Self {
        match self {
            Self::ExecutableDocument(file_pos) =>
                Self::ExecutableDocument(FilePosition {
                    col: pos.column,
                    file: file_pos.file.to_owned(),
                    line: pos.line,
                }),
            Self::Schema(file_pos) =>
                Self::Schema(FilePosition {
                    col: pos.column,
                    file: file_pos.file.to_owned(),
                    line: pos.line,
                }),
            Self::GraphQLBuiltIn | Self::Programmatic => self.to_owned(),
        }
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
