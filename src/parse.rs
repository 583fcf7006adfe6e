//! Character-level parser for the restricted LaTeX math dialect.
//!
//! The parser keeps a cursor into the growing [`Arena`] tree. Leaf appends
//! move the cursor to the nearest element that still has room, so a full
//! two-slot element like `msup` is left behind automatically once its second
//! child arrives. Group and environment tokens move the cursor explicitly.

use memchr::memchr;

use crate::Display;
use crate::arena::{Arena, NodeRef};
use crate::ast::{MathKind, Op, StyleAttr};
use crate::commands::{
    ACCENTS, CLOSE_DELIMITERS, FUNCTIONS, GREEK_UPPER, LETTERS, MATHBB, MATHSCR, NEGATABLES,
    OPEN_DELIMITERS, SPECIAL, is_big_op,
};
use crate::error::{LatexError, SyntaxErrorKind};

/// Parse `latex` into a tree, returning the arena and the root node.
pub(crate) fn parse(latex: &str, display: Display) -> Result<(Arena, NodeRef), LatexError> {
    // Collapse every whitespace run to a single space so the dispatch loop
    // only ever sees ' '.
    let normalized = latex.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut arena = Arena::new();
    let root = arena.push(MathKind::Math(display));
    let cursor = match display {
        Display::Inline => {
            let row = arena.push(MathKind::Row);
            arena.append(root, row)?;
            row
        }
        // Block equations live in a one-cell table from the start, so `&`
        // and `\\` can grow it without any special casing.
        Display::Block => {
            let table = arena.push(MathKind::Table);
            let row = arena.push(MathKind::TableRow);
            let cell = arena.push(MathKind::TableCell);
            arena.append(row, cell)?;
            arena.append(table, row)?;
            arena.append(root, table)?;
            cell
        }
    };

    let mut parser = Parser {
        arena,
        cursor,
        group_depth: 0,
    };
    parser.run(&normalized)?;
    Ok((parser.arena, root))
}

struct Parser {
    arena: Arena,
    cursor: NodeRef,
    /// Number of `{` groups the cursor is nested in. A `}` at depth zero is
    /// rejected instead of closing structure it never opened.
    group_depth: usize,
}

impl Parser {
    fn run(&mut self, mut rest: &str) -> Result<(), LatexError> {
        while let Some(c) = rest.chars().next() {
            let mut skip = c.len_utf8();
            match c {
                ' ' => {}
                '\\' => skip += self.escape(&rest[1..])?,
                '_' => self.subscript()?,
                '^' => self.superscript()?,
                '{' => {
                    self.open_scope(MathKind::Row)?;
                    self.group_depth += 1;
                }
                '}' => {
                    self.group_depth = self
                        .group_depth
                        .checked_sub(1)
                        .ok_or(LatexError::Syntax(SyntaxErrorKind::ExtraClose))?;
                    self.cursor = self.close_cursor()?;
                }
                '&' => {
                    let row = self.close_cursor()?;
                    let cell = self.arena.push(MathKind::TableCell);
                    self.arena.append(row, cell)?;
                    self.cursor = cell;
                }
                '+' | '-' | '/' | '(' | ')' | '[' | ']' | '|' | '=' | '<' | '>' | ',' | '.'
                | '!' | '\'' | ':' => self.push_leaf(MathKind::Operator(Op::Char(c)))?,
                c if c.is_ascii_digit() => self.push_leaf(MathKind::Number(c))?,
                c if c.is_alphabetic() => self.push_leaf(MathKind::Identifier(c))?,
                c => return Err(LatexError::IllegalCharacter(c)),
            }
            rest = &rest[skip..];
        }
        Ok(())
    }

    /// Handle the character after a backslash. Returns the number of bytes
    /// consumed beyond the backslash itself.
    fn escape(&mut self, after: &str) -> Result<usize, LatexError> {
        match after.chars().next() {
            Some(c @ ('{' | '}')) => {
                self.push_leaf(MathKind::Operator(Op::Char(c)))?;
                Ok(1)
            }
            Some(' ') => {
                self.push_leaf(MathKind::Space)?;
                Ok(1)
            }
            Some('\\') => {
                self.row_break()?;
                Ok(1)
            }
            Some(c) if c.is_alphabetic() => {
                let name_end = after
                    .find(|ch: char| !ch.is_alphabetic())
                    .unwrap_or(after.len());
                let consumed = self.keyword(&after[..name_end], &after[name_end..])?;
                Ok(name_end + consumed)
            }
            _ => Err(LatexError::Syntax(SyntaxErrorKind::Escape)),
        }
    }

    /// Handle a named command. `rest` is the input after the name; the
    /// return value is how many of its bytes the argument scan consumed.
    fn keyword(&mut self, name: &str, mut rest: &str) -> Result<usize, LatexError> {
        let mut skip = 0;
        // A single space may separate a command from its argument.
        if let Some(stripped) = rest.strip_prefix(' ') {
            rest = stripped;
            skip = 1;
        }
        match name {
            "begin" => {
                if !rest.starts_with("{matrix}") {
                    return Err(LatexError::Syntax(SyntaxErrorKind::BeginMatrix));
                }
                skip += 8;
                let table = self.arena.push(MathKind::Table);
                let row = self.arena.push(MathKind::TableRow);
                let cell = self.arena.push(MathKind::TableCell);
                self.arena.append(row, cell)?;
                self.arena.append(table, row)?;
                self.arena.append(self.cursor, table)?;
                self.cursor = cell;
            }
            "end" => {
                if !rest.starts_with("{matrix}") {
                    return Err(LatexError::Syntax(SyntaxErrorKind::EndMatrix));
                }
                skip += 8;
                // Cell, row, table.
                let row = self.close_cursor()?;
                let table = self.close_node(row)?;
                self.cursor = self.close_node(table)?;
            }
            "text" => {
                let Some(body) = rest.strip_prefix('{') else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::TextGroup));
                };
                // '}' is ASCII, so the byte offset is a char boundary.
                let Some(end) = memchr(b'}', body.as_bytes()) else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::TextGroup));
                };
                skip += end + 2;
                self.push_leaf(MathKind::Text(body[..end].into()))?;
            }
            "sqrt" => self.open_scope(MathKind::Sqrt)?,
            "frac" => self.open_scope(MathKind::Frac)?,
            "mathbf" => self.open_scope(MathKind::Style(StyleAttr::BoldWeight))?,
            "left" => {
                let Some(delim) = OPEN_DELIMITERS.iter().copied().find(|&d| rest.starts_with(d))
                else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::LeftDelimiter));
                };
                skip += delim.len();
                let fenced = self.arena.push(MathKind::Fenced {
                    open: delim,
                    close: None,
                });
                self.arena.append(self.cursor, fenced)?;
                let row = self.arena.push(MathKind::Row);
                self.arena.append(fenced, row)?;
                self.cursor = row;
            }
            "right" => {
                let Some(delim) = CLOSE_DELIMITERS.iter().copied().find(|&d| rest.starts_with(d))
                else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::RightDelimiter));
                };
                skip += delim.len();
                let fenced = self.close_cursor()?;
                let MathKind::Fenced { close, .. } = self.arena.kind_mut(fenced) else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::UnmatchedRight));
                };
                *close = Some(delim);
                self.cursor = self.close_node(fenced)?;
            }
            "not" => {
                let Some(&(key, glyph)) =
                    NEGATABLES.iter().find(|(key, _)| rest.starts_with(*key))
                else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::Negatable));
                };
                skip += key.len();
                self.push_leaf(MathKind::Operator(Op::Char(glyph)))?;
            }
            "mathbb" => {
                let mut chars = rest.chars();
                let (Some('{'), Some(letter), Some('}')) =
                    (chars.next(), chars.next(), chars.next())
                else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::DoubleStruckLetter));
                };
                let Some(&glyph) = MATHBB.get(&letter) else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::DoubleStruckLetter));
                };
                skip += 2 + letter.len_utf8();
                self.push_leaf(MathKind::Identifier(glyph))?;
            }
            "mathscr" | "mathcal" => {
                let mut chars = rest.chars();
                let (Some('{'), Some(letter), Some('}')) =
                    (chars.next(), chars.next(), chars.next())
                else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::ScriptLetter));
                };
                let Some(&glyph) = MATHSCR.get(&letter) else {
                    return Err(LatexError::Syntax(SyntaxErrorKind::ScriptLetter));
                };
                skip += 2 + letter.len_utf8();
                self.push_leaf(MathKind::Identifier(glyph))?;
            }
            _ => {
                if let Some(&glyph) = LETTERS.get(name) {
                    self.push_leaf(MathKind::Identifier(glyph))?;
                } else if let Some(&glyph) = GREEK_UPPER.get(name) {
                    self.push_leaf(MathKind::Operator(Op::Char(glyph)))?;
                } else if let Some(&glyph) = SPECIAL.get(name) {
                    self.push_leaf(MathKind::Operator(Op::Char(glyph)))?;
                } else if let Some(&func) = FUNCTIONS.get_key(name) {
                    self.push_leaf(MathKind::Operator(Op::Name(func)))?;
                } else if let Some(&glyph) = ACCENTS.get(name) {
                    // The accent glyph goes in first; the base is whatever
                    // gets parsed next. Emitted base-first.
                    let over = self.arena.push(MathKind::Over { reversed: true });
                    self.arena.append(self.cursor, over)?;
                    let accent = self.arena.push(MathKind::Operator(Op::Char(glyph)));
                    self.arena.append(over, accent)?;
                    self.cursor = over;
                } else {
                    return Err(LatexError::UnknownCommand(name.into()));
                }
            }
        }
        Ok(skip)
    }

    /// `_`: pop the preceding element and re-wrap it according to what it
    /// is. A superscript already in place merges into a combined sub/sup
    /// element; a big operator takes its limit underneath.
    fn subscript(&mut self) -> Result<(), LatexError> {
        let child = self.pop_script_base()?;
        let script = if matches!(self.arena.kind(child), MathKind::Superscript) {
            self.adopt(child, MathKind::SubSup { reversed: true })?
        } else if self.is_big_operator(child) {
            self.wrap(child, MathKind::Under)?
        } else {
            self.wrap(child, MathKind::Subscript)?
        };
        self.arena.append(self.cursor, script)?;
        self.cursor = script;
        Ok(())
    }

    /// `^`: mirror image of [`Parser::subscript`], plus the third case
    /// where a big operator already has its lower limit attached.
    fn superscript(&mut self) -> Result<(), LatexError> {
        let child = self.pop_script_base()?;
        let script = if matches!(self.arena.kind(child), MathKind::Subscript) {
            self.adopt(child, MathKind::SubSup { reversed: false })?
        } else if self.is_big_operator(child) {
            self.wrap(child, MathKind::Over { reversed: false })?
        } else if matches!(self.arena.kind(child), MathKind::Under)
            && self
                .arena
                .children(child)
                .first()
                .is_some_and(|&first| self.is_big_operator(first))
        {
            self.adopt(child, MathKind::UnderOver)?
        } else {
            self.wrap(child, MathKind::Superscript)?
        };
        self.arena.append(self.cursor, script)?;
        self.cursor = script;
        Ok(())
    }

    /// `\\`: start a new table row.
    fn row_break(&mut self) -> Result<(), LatexError> {
        let row = self.close_cursor()?;
        let table = self.close_node(row)?;
        let cell = self.arena.push(MathKind::TableCell);
        let new_row = self.arena.push(MathKind::TableRow);
        self.arena.append(new_row, cell)?;
        self.arena.append(table, new_row)?;
        self.cursor = cell;
        Ok(())
    }

    fn push_leaf(&mut self, kind: MathKind) -> Result<(), LatexError> {
        let leaf = self.arena.push(kind);
        self.cursor = self.arena.append(self.cursor, leaf)?;
        Ok(())
    }

    /// Append a fresh container and descend into it.
    fn open_scope(&mut self, kind: MathKind) -> Result<(), LatexError> {
        let node = self.arena.push(kind);
        self.arena.append(self.cursor, node)?;
        self.cursor = node;
        Ok(())
    }

    fn pop_script_base(&mut self) -> Result<NodeRef, LatexError> {
        self.arena
            .pop_last_child(self.cursor)
            .ok_or(LatexError::Syntax(SyntaxErrorKind::ScriptBase))
    }

    /// Replace `shell` with a new element of `kind` that adopts all of its
    /// children.
    fn adopt(&mut self, shell: NodeRef, kind: MathKind) -> Result<NodeRef, LatexError> {
        let node = self.arena.push(kind);
        for child in self.arena.take_children(shell) {
            self.arena.append(node, child)?;
        }
        Ok(node)
    }

    fn wrap(&mut self, child: NodeRef, kind: MathKind) -> Result<NodeRef, LatexError> {
        let node = self.arena.push(kind);
        self.arena.append(node, child)?;
        Ok(node)
    }

    fn is_big_operator(&self, node: NodeRef) -> bool {
        matches!(self.arena.kind(node), MathKind::Operator(Op::Char(c)) if is_big_op(*c))
    }

    fn close_cursor(&self) -> Result<NodeRef, LatexError> {
        self.close_node(self.cursor)
    }

    fn close_node(&self, node: NodeRef) -> Result<NodeRef, LatexError> {
        self.arena
            .close(node)
            .ok_or(LatexError::Syntax(SyntaxErrorKind::ExtraClose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_in_row(arena: &Arena, root: NodeRef) -> NodeRef {
        let row = arena.children(root)[0];
        arena.children(row)[0]
    }

    #[test]
    fn script_order_does_not_matter() {
        let (arena, root) = parse("x_a^b", Display::Inline).unwrap();
        let script = first_in_row(&arena, root);
        assert!(matches!(
            arena.kind(script),
            MathKind::SubSup { reversed: false }
        ));
        assert_eq!(arena.children(script).len(), 3);

        let (arena, root) = parse("x^b_a", Display::Inline).unwrap();
        let script = first_in_row(&arena, root);
        assert!(matches!(
            arena.kind(script),
            MathKind::SubSup { reversed: true }
        ));
        assert_eq!(arena.children(script).len(), 3);
    }

    #[test]
    fn big_operator_takes_stacked_limits() {
        let (arena, root) = parse(r"\sum_0^n", Display::Inline).unwrap();
        let script = first_in_row(&arena, root);
        assert!(matches!(arena.kind(script), MathKind::UnderOver));

        // A plain identifier gets corner scripts instead.
        let (arena, root) = parse("x_0", Display::Inline).unwrap();
        let script = first_in_row(&arena, root);
        assert!(matches!(arena.kind(script), MathKind::Subscript));
    }

    #[test]
    fn superscript_before_subscript_on_big_operator() {
        // The upper limit attaches first, so the lower one wraps around the
        // whole over element rather than merging into munderover.
        let (arena, root) = parse(r"\int^1_0", Display::Inline).unwrap();
        let script = first_in_row(&arena, root);
        assert!(matches!(arena.kind(script), MathKind::Subscript));
        let inner = arena.children(script)[0];
        assert!(matches!(
            arena.kind(inner),
            MathKind::Over { reversed: false }
        ));
    }

    #[test]
    fn script_without_base_is_rejected() {
        assert!(matches!(
            parse("_2", Display::Inline),
            Err(LatexError::Syntax(SyntaxErrorKind::ScriptBase))
        ));
        // An empty group is still a usable base.
        assert!(parse(r"{}^2", Display::Inline).is_ok());
    }

    #[test]
    fn unbalanced_group_close_is_rejected() {
        assert!(matches!(
            parse("x}", Display::Inline),
            Err(LatexError::Syntax(SyntaxErrorKind::ExtraClose))
        ));
    }

    #[test]
    fn row_break_outside_matrix_is_rejected() {
        assert!(matches!(
            parse(r"a \\ b", Display::Inline),
            Err(LatexError::Syntax(SyntaxErrorKind::ExtraClose))
        ));
    }

    #[test]
    fn unterminated_left_keeps_open_fence() {
        let (arena, root) = parse(r"\left( x", Display::Inline).unwrap();
        let fenced = first_in_row(&arena, root);
        assert!(matches!(
            arena.kind(fenced),
            MathKind::Fenced {
                open: "(",
                close: None,
            }
        ));
    }
}
