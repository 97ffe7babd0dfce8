use std::fmt;
use std::path::PathBuf;

/// One struct field as it appears in the listing.
///
/// Every attribute is already text; absent ones are empty strings and
/// still take their slot in the output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared identifiers joined by a single space. Empty for embedded fields.
    pub names: String,
    pub type_text: String,
    /// Raw tag literal, quotes included.
    pub tag: String,
    /// Trailing comment wrapped as `/* ... */`.
    pub comment: String,
}

/// A struct type declaration found in a Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    /// Absolute path of the declaring file.
    pub path: PathBuf,
    /// 1-based line of the declaration.
    pub line: usize,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.names, self.type_text, self.tag, self.comment
        )
    }
}

/// Renders the full block, without a trailing newline after `}`.
impl fmt::Display for StructDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// {} - line: {}", self.path.display(), self.line)?;
        writeln!(f, "type {} struct {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "\t{field}")?;
        }
        write!(f, "}}")
    }
}
