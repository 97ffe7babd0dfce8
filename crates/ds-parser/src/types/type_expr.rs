/// A Go type at a use site, reduced to the shapes the renderer knows.
///
/// Each recursive variant owns a strictly smaller subtree, so rendering
/// always terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `func(params) results`. `results` is `None` when the function
    /// declares no result at all.
    Function {
        params: Vec<TypeExpr>,
        results: Option<Vec<TypeExpr>>,
    },
    /// `map[K]V`. The key keeps its source text.
    Map { key: String, value: Box<TypeExpr> },
    /// Arrays and slices alike.
    Array(Box<TypeExpr>),
    Interface,
    Pointer(Box<TypeExpr>),
    /// `pkg.Member`.
    Qualified { package: String, member: String },
    /// Any other type, kept as whitespace-collapsed source text.
    Plain(String),
}

impl TypeExpr {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn pointer(pointee: Self) -> Self {
        Self::Pointer(Box::new(pointee))
    }

    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn map(key: impl Into<String>, value: Self) -> Self {
        Self::Map {
            key: key.into(),
            value: Box::new(value),
        }
    }
}
