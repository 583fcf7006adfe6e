//! tex2mml
//!
//! Converts math equations written in a restricted LaTeX dialect to
//! presentational MathML. The crate is pure Rust with no runtime
//! dependencies beyond a handful of compile-time tables, so it works on
//! all platforms including WebAssembly.
//!
//! # Supported LaTeX commands
//!
//! - Single-digit numbers and ASCII/Unicode letters, e.g. `2`, `x`
//! - Greek letters, e.g. `\alpha`, `\Omega`, `\varphi`
//! - Symbols, e.g. `\infty`, `\partial`, `\angle`, `\aleph`, ...
//! - Binary relations and operations, e.g. `=`, `<`, `\leq`, `\otimes`, ...
//! - Arrows, e.g. `\rightarrow`, `\Longleftrightarrow`, `\mapsto`, ...
//! - Basic layout commands: `\sqrt`, `\frac`, `\text`, `\mathbf`
//! - Function names, e.g. `\sin`, `\lim`, `\det`, ...
//! - Accents, e.g. `\hat`, `\vec`, `\tilde`, ...
//! - Letter faces: `\mathbb`, `\mathscr`, `\mathcal`
//! - Sub- and superscripts in either order, with stacked limits on big
//!   operators like `\sum` and `\int`
//! - Stretchy delimiters via `\left` and `\right`
//! - Negation via `\not` (for `=`, `\in` and `\equiv`)
//! - The `matrix` environment with `&` and `\\`
//!
//! # Usage
//!
//! The sole entry point is [`latex_to_mathml`]:
//!
//! ```rust
//! use tex2mml::{latex_to_mathml, Display};
//!
//! let mathml = latex_to_mathml(r"\frac{1}{2}", Display::Inline).unwrap();
//! assert!(mathml.starts_with(r#"<math xmlns="http://www.w3.org/1998/Math/MathML">"#));
//! ```
//!
//! Translation never panics on any input; malformed LaTeX is reported
//! through [`LatexError`].

pub mod arena;
pub mod ast;
pub(crate) mod commands;
mod error;
pub(crate) mod parse;

pub use error::{LatexError, SyntaxErrorKind};

/// Whether the equation is rendered in the flow of text or on its own
/// line. Block equations get a `mode="display"` marker on the root
/// element and a table for their rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Inline,
}

/// Convert LaTeX text to MathML.
///
/// The second argument specifies whether it is an inline equation or a
/// block equation.
///
/// ```rust
/// use tex2mml::{latex_to_mathml, Display};
///
/// let latex = r"x = \frac{-b \pm \sqrt{b^2-4ac}}{2a}";
/// let mathml = latex_to_mathml(latex, Display::Block).unwrap();
/// println!("{mathml}");
/// ```
pub fn latex_to_mathml(latex: &str, display: Display) -> Result<String, LatexError> {
    let (arena, root) = parse::parse(latex, display)?;
    let mut output = String::new();
    ast::emit(&arena, root, &mut output);
    Ok(output)
}
