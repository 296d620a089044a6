//! Errors raised while resolving or building skin elements. All of them
//! are absorbed at the `get_element` boundary and degrade to a
//! placeholder node; none reach the rendering layer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkinError {
    #[error("no element mapping for {column}/{element}")]
    MissingMapping { column: String, element: String },
    #[error("redirect cycle through {column}/{element}")]
    RedirectCycle { column: String, element: String },
    #[error("element generator failed: {0}")]
    Generator(String),
}
