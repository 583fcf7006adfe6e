use crate::Display;
use crate::arena::{Arena, NodeRef};

/// Content of an operator leaf: a single glyph, or a function name spelled
/// out verbatim (like `sin` or `lim`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Char(char),
    Name(&'static str),
}

/// Style attribute carried by a styled group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttr {
    BoldWeight,
}

impl StyleAttr {
    fn as_attribute(self) -> &'static str {
        match self {
            StyleAttr::BoldWeight => r#" fontweight="bold""#,
        }
    }
}

/// The closed set of element kinds in the output tree.
///
/// Each kind has a fixed maximum child count (its arity, see
/// [`MathKind::arity`]) and a fixed rendering rule (see [`emit`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathKind {
    /// Document root, `<math>`. Carries the namespace declaration and, in
    /// block mode, the display marker.
    Math(Display),
    Row,
    Table,
    TableRow,
    TableCell,
    Identifier(char),
    Number(char),
    Operator(Op),
    Text(Box<str>),
    Space,
    Subscript,
    Superscript,
    /// `reversed` marks that the slots were filled in input order
    /// `[base, sup, sub]` and must be swapped to `[base, sub, sup]` when
    /// emitted.
    SubSup { reversed: bool },
    Sqrt,
    Root,
    Frac,
    /// `reversed` marks an accent: built `[accent, base]`, emitted base
    /// first per MathML convention.
    Over { reversed: bool },
    Under,
    UnderOver,
    /// Delimiters are recorded with their LaTeX spelling and substituted at
    /// serialization time. `close` stays `None` until `\right` is seen.
    Fenced {
        open: &'static str,
        close: Option<&'static str>,
    },
    Style(StyleAttr),
}

impl MathKind {
    /// Maximum number of children before the element counts as full.
    pub fn arity(&self) -> usize {
        match self {
            MathKind::Identifier(_)
            | MathKind::Number(_)
            | MathKind::Operator(_)
            | MathKind::Text(_)
            | MathKind::Space => 0,
            MathKind::Sqrt | MathKind::Style(_) => 1,
            MathKind::Subscript
            | MathKind::Superscript
            | MathKind::Root
            | MathKind::Frac
            | MathKind::Over { .. }
            | MathKind::Under => 2,
            MathKind::SubSup { .. } | MathKind::UnderOver => 3,
            MathKind::Math(_)
            | MathKind::Row
            | MathKind::Table
            | MathKind::TableRow
            | MathKind::TableCell
            | MathKind::Fenced { .. } => usize::MAX,
        }
    }
}

/// Substitute a recorded delimiter spelling with the glyph that goes into
/// the `open`/`close` attribute. The invisible delimiter `.` becomes the
/// empty string.
fn fence_glyph(delimiter: &'static str) -> &'static str {
    match delimiter {
        r"\{" => "{",
        r"\}" => "}",
        r"\langle" => "\u{2329}",
        r"\rangle" => "\u{232A}",
        "." => "",
        other => other,
    }
}

/// Render the tree rooted at `node` as MathML text.
///
/// Row-like elements (`mrow`, `mtable`, `mtr`, `mtd`) get a newline before
/// their opening tag; everything else is emitted inline.
pub fn emit(arena: &Arena, node: NodeRef, out: &mut String) {
    match arena.kind(node) {
        MathKind::Math(display) => {
            out.push_str(r#"<math xmlns="http://www.w3.org/1998/Math/MathML""#);
            if matches!(display, Display::Block) {
                out.push_str(r#" mode="display""#);
            }
            out.push('>');
            emit_children(arena, node, out);
            out.push_str("</math>");
        }
        MathKind::Row => emit_element(arena, node, out, "\n<mrow>", "</mrow>"),
        MathKind::Table => emit_element(arena, node, out, "\n<mtable>", "</mtable>"),
        MathKind::TableRow => emit_element(arena, node, out, "\n<mtr>", "</mtr>"),
        MathKind::TableCell => emit_element(arena, node, out, "\n<mtd>", "</mtd>"),
        MathKind::Identifier(ch) => {
            out.push_str("<mi>");
            out.push(*ch);
            out.push_str("</mi>");
        }
        MathKind::Number(ch) => {
            out.push_str("<mn>");
            out.push(*ch);
            out.push_str("</mn>");
        }
        MathKind::Operator(op) => {
            out.push_str("<mo>");
            match op {
                // Only these two glyphs need escaping in XML content.
                Op::Char('<') => out.push_str("&lt;"),
                Op::Char('>') => out.push_str("&gt;"),
                Op::Char(ch) => out.push(*ch),
                Op::Name(name) => out.push_str(name),
            }
            out.push_str("</mo>");
        }
        MathKind::Text(text) => {
            out.push_str("<mtext>");
            out.push_str(text);
            out.push_str("</mtext>");
        }
        MathKind::Space => out.push_str("<mspace></mspace>"),
        MathKind::Subscript => emit_element(arena, node, out, "<msub>", "</msub>"),
        MathKind::Superscript => emit_element(arena, node, out, "<msup>", "</msup>"),
        MathKind::SubSup { reversed } => {
            out.push_str("<msubsup>");
            match (*reversed, arena.children(node)) {
                (true, &[base, sup, sub]) => {
                    emit(arena, base, out);
                    emit(arena, sub, out);
                    emit(arena, sup, out);
                }
                _ => emit_children(arena, node, out),
            }
            out.push_str("</msubsup>");
        }
        MathKind::Sqrt => emit_element(arena, node, out, "<msqrt>", "</msqrt>"),
        MathKind::Root => emit_element(arena, node, out, "<mroot>", "</mroot>"),
        MathKind::Frac => emit_element(arena, node, out, "<mfrac>", "</mfrac>"),
        MathKind::Over { reversed } => {
            out.push_str("<mover>");
            match (*reversed, arena.children(node)) {
                (true, &[accent, base]) => {
                    emit(arena, base, out);
                    emit(arena, accent, out);
                }
                _ => emit_children(arena, node, out),
            }
            out.push_str("</mover>");
        }
        MathKind::Under => emit_element(arena, node, out, "<munder>", "</munder>"),
        MathKind::UnderOver => emit_element(arena, node, out, "<munderover>", "</munderover>"),
        MathKind::Fenced { open, close } => {
            out.push_str("<mfenced open=\"");
            out.push_str(fence_glyph(open));
            out.push_str("\" close=\"");
            out.push_str(fence_glyph(close.unwrap_or(".")));
            out.push_str("\">");
            emit_children(arena, node, out);
            out.push_str("</mfenced>");
        }
        MathKind::Style(attr) => {
            out.push_str("<mstyle");
            out.push_str(attr.as_attribute());
            out.push('>');
            emit_children(arena, node, out);
            out.push_str("</mstyle>");
        }
    }
}

fn emit_element(arena: &Arena, node: NodeRef, out: &mut String, open: &str, close: &str) {
    out.push_str(open);
    emit_children(arena, node, out);
    out.push_str(close);
}

fn emit_children(arena: &Arena, node: NodeRef, out: &mut String) {
    for &child in arena.children(node) {
        emit(arena, child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(arena: &Arena, node: NodeRef) -> String {
        let mut out = String::new();
        emit(arena, node, &mut out);
        out
    }

    #[test]
    fn leaf_rendering() {
        let mut arena = Arena::new();
        let problems = [
            (MathKind::Identifier('x'), "<mi>x</mi>"),
            (MathKind::Identifier('\u{3b1}'), "<mi>\u{3b1}</mi>"),
            (MathKind::Number('7'), "<mn>7</mn>"),
            (MathKind::Operator(Op::Char('+')), "<mo>+</mo>"),
            (MathKind::Operator(Op::Name("sin")), "<mo>sin</mo>"),
            (MathKind::Text("if and only if".into()), "<mtext>if and only if</mtext>"),
            (MathKind::Space, "<mspace></mspace>"),
        ];
        for (kind, expected) in problems {
            let node = arena.push(kind);
            assert_eq!(render(&arena, node), expected);
        }
    }

    #[test]
    fn operator_escaping() {
        let mut arena = Arena::new();
        let lt = arena.push(MathKind::Operator(Op::Char('<')));
        let gt = arena.push(MathKind::Operator(Op::Char('>')));
        assert_eq!(render(&arena, lt), "<mo>&lt;</mo>");
        assert_eq!(render(&arena, gt), "<mo>&gt;</mo>");
    }

    #[test]
    fn fence_delimiter_substitution() {
        let mut arena = Arena::new();
        let curly = arena.push(MathKind::Fenced {
            open: r"\{",
            close: Some(r"\}"),
        });
        assert_eq!(
            render(&arena, curly),
            "<mfenced open=\"{\" close=\"}\"></mfenced>"
        );
        let invisible = arena.push(MathKind::Fenced {
            open: ".",
            close: Some("|"),
        });
        assert_eq!(
            render(&arena, invisible),
            "<mfenced open=\"\" close=\"|\"></mfenced>"
        );
        let angle = arena.push(MathKind::Fenced {
            open: r"\langle",
            close: Some(r"\rangle"),
        });
        assert_eq!(
            render(&arena, angle),
            "<mfenced open=\"\u{2329}\" close=\"\u{232A}\"></mfenced>"
        );
    }

    #[test]
    fn reversed_subsup_swaps_scripts() {
        let mut arena = Arena::new();
        let row = arena.push(MathKind::Row);
        let subsup = arena.push(MathKind::SubSup { reversed: true });
        arena.append(row, subsup).unwrap();
        let base = arena.push(MathKind::Identifier('x'));
        let sup = arena.push(MathKind::Identifier('b'));
        let sub = arena.push(MathKind::Identifier('a'));
        arena.append(subsup, base).unwrap();
        arena.append(subsup, sup).unwrap();
        arena.append(subsup, sub).unwrap();
        assert_eq!(
            render(&arena, subsup),
            "<msubsup><mi>x</mi><mi>a</mi><mi>b</mi></msubsup>"
        );
    }

    #[test]
    fn reversed_over_puts_base_first() {
        let mut arena = Arena::new();
        let row = arena.push(MathKind::Row);
        let over = arena.push(MathKind::Over { reversed: true });
        arena.append(row, over).unwrap();
        let accent = arena.push(MathKind::Operator(Op::Char('^')));
        let base = arena.push(MathKind::Identifier('x'));
        arena.append(over, accent).unwrap();
        arena.append(over, base).unwrap();
        assert_eq!(render(&arena, over), "<mover><mi>x</mi><mo>^</mo></mover>");
    }

    #[test]
    fn root_namespace_and_display_marker() {
        let mut arena = Arena::new();
        let inline = arena.push(MathKind::Math(Display::Inline));
        assert_eq!(
            render(&arena, inline),
            "<math xmlns=\"http://www.w3.org/1998/Math/MathML\"></math>"
        );
        let block = arena.push(MathKind::Math(Display::Block));
        assert_eq!(
            render(&arena, block),
            "<math xmlns=\"http://www.w3.org/1998/Math/MathML\" mode=\"display\"></math>"
        );
    }
}
