// Style option parser module

pub mod lexer;
pub mod style;

// Public API re-exports
pub use style::parse_style_spec;
