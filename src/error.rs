use std::fmt;

use strum_macros::IntoStaticStr;

/// Represents an error that occurred during LaTeX translation.
///
/// Every error aborts the whole translation; there is no partial output
/// and no recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatexError {
    /// The macro name is not present in any symbol category.
    UnknownCommand(Box<str>),
    /// A structural expectation was violated.
    Syntax(SyntaxErrorKind),
    /// A character outside the recognized classes.
    IllegalCharacter(char),
    /// An internal invariant was breached. This indicates a grammar bug in
    /// the translator, not bad user input.
    Structural(&'static str),
}

/// What the parser expected when it raised [`LatexError::Syntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum SyntaxErrorKind {
    #[strum(serialize = r#"expected "\begin{matrix}""#)]
    BeginMatrix,
    #[strum(serialize = r#"expected "\end{matrix}""#)]
    EndMatrix,
    #[strum(serialize = r#"expected "\text{...}""#)]
    TextGroup,
    #[strum(serialize = r#"missing delimiter after "\left""#)]
    LeftDelimiter,
    #[strum(serialize = r#"missing delimiter after "\right""#)]
    RightDelimiter,
    #[strum(serialize = r#""\right" without matching "\left""#)]
    UnmatchedRight,
    #[strum(serialize = r#"expected a negatable relation after "\not""#)]
    Negatable,
    #[strum(serialize = r#"expected an upper-case letter, as in "\mathbb{R}""#)]
    DoubleStruckLetter,
    #[strum(serialize = r#"expected a letter, as in "\mathscr{L}""#)]
    ScriptLetter,
    #[strum(serialize = r"illegal escape sequence")]
    Escape,
    #[strum(serialize = r"unmatched closing token")]
    ExtraClose,
    #[strum(serialize = r#"missing base expression before "_" or "^""#)]
    ScriptBase,
}

impl fmt::Display for LatexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatexError::UnknownCommand(name) => {
                write!(f, "Unknown LaTeX command \"\\{}\".", name)
            }
            LatexError::Syntax(kind) => write!(f, "Syntax error: {}.", <&str>::from(kind)),
            LatexError::IllegalCharacter(ch) => write!(f, "Illegal character: {:?}.", ch),
            LatexError::Structural(msg) => write!(f, "Internal structural error: {}.", msg),
        }
    }
}

impl std::error::Error for LatexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let problems: [(LatexError, &str); 4] = [
            (
                LatexError::UnknownCommand("bogus".into()),
                "Unknown LaTeX command \"\\bogus\".",
            ),
            (
                LatexError::Syntax(SyntaxErrorKind::BeginMatrix),
                r#"Syntax error: expected "\begin{matrix}"."#,
            ),
            (
                LatexError::IllegalCharacter('@'),
                "Illegal character: '@'.",
            ),
            (
                LatexError::Structural("root element has overflowed"),
                "Internal structural error: root element has overflowed.",
            ),
        ];
        for (err, msg) in problems {
            assert_eq!(err.to_string(), msg);
        }
    }
}
