//! Static symbol tables.
//!
//! All tables are compile-time perfect hash maps (or plain prefix lists
//! where the parser scans for a match rather than hashing). They are
//! read-only and shared freely across concurrent translations.

/// Spacing accent glyphs, used to build an over-accent node whose base is
/// parsed afterwards.
pub static ACCENTS: phf::Map<&'static str, char> = phf::phf_map! {
    "acute" => '\u{B4}',
    "bar" => '\u{AF}',
    "breve" => '\u{2D8}',
    "check" => '\u{2C7}',
    "dot" => '\u{2D9}',
    "ddot" => '\u{A8}',
    "dddot" => '\u{20DB}',
    "grave" => '`',
    "hat" => '^',
    "tilde" => '\u{2DC}',
    "vec" => '\u{20D7}',
};

/// Upper case Greek letters. Rendered as operator leaves.
pub static GREEK_UPPER: phf::Map<&'static str, char> = phf::phf_map! {
    "Gamma" => '\u{393}',
    "Delta" => '\u{394}',
    "Theta" => '\u{398}',
    "Lambda" => '\u{39B}',
    "Xi" => '\u{39E}',
    "Pi" => '\u{3A0}',
    "Sigma" => '\u{3A3}',
    "Upsilon" => '\u{3D2}',
    "Phi" => '\u{3A6}',
    "Psi" => '\u{3A8}',
    "Omega" => '\u{3A9}',
};

/// Lower case Greek letters and the dotless i and j. Rendered as
/// identifier leaves.
pub static LETTERS: phf::Map<&'static str, char> = phf::phf_map! {
    "imath" => '\u{131}',
    "jmath" => '\u{237}',
    "alpha" => '\u{3B1}',
    "beta" => '\u{3B2}',
    "gamma" => '\u{3B3}',
    "delta" => '\u{3B4}',
    "epsilon" => '\u{3F5}',
    "varepsilon" => '\u{3B5}',
    "zeta" => '\u{3B6}',
    "eta" => '\u{3B7}',
    "theta" => '\u{3B8}',
    "vartheta" => '\u{3D1}',
    "iota" => '\u{3B9}',
    "kappa" => '\u{3BA}',
    "varkappa" => '\u{3F0}',
    "lambda" => '\u{3BB}',
    "mu" => '\u{3BC}',
    "nu" => '\u{3BD}',
    "xi" => '\u{3BE}',
    "pi" => '\u{3C0}',
    "varpi" => '\u{3D6}',
    "rho" => '\u{3C1}',
    "varrho" => '\u{3F1}',
    "sigma" => '\u{3C3}',
    "varsigma" => '\u{3C2}',
    "tau" => '\u{3C4}',
    "upsilon" => '\u{3C5}',
    "phi" => '\u{3D5}',
    "varphi" => '\u{3C6}',
    "chi" => '\u{3C7}',
    "psi" => '\u{3C8}',
    "omega" => '\u{3C9}',
};

/// Special symbols: binary operations, relations, arrows, miscellanea and
/// the variable-sized operators. All rendered as operator leaves.
pub static SPECIAL: phf::Map<&'static str, char> = phf::phf_map! {
    // Binary operation symbols:
    "pm" => '\u{B1}',
    "mp" => '\u{2213}',
    "times" => '\u{D7}',
    "div" => '\u{F7}',
    "ast" => '\u{2217}',
    "star" => '\u{22C6}',
    "circ" => '\u{2218}',
    "bullet" => '\u{2219}',
    "cdot" => '\u{22C5}',
    "cap" => '\u{2229}',
    "cup" => '\u{222A}',
    "uplus" => '\u{228E}',
    "sqcap" => '\u{2293}',
    "sqcup" => '\u{2294}',
    "vee" => '\u{2228}',
    "wedge" => '\u{2227}',
    "setminus" => '\u{2216}',
    "wr" => '\u{2240}',
    "diamond" => '\u{22C4}',
    "bigtriangleup" => '\u{25B3}',
    "bigtriangledown" => '\u{25BD}',
    "triangleleft" => '\u{25C1}',
    "triangleright" => '\u{25B7}',
    "bigcirc" => '\u{25CB}',
    "odot" => '\u{2299}',
    "ominus" => '\u{2296}',
    "oplus" => '\u{2295}',
    "oslash" => '\u{2298}',
    "otimes" => '\u{2297}',
    "dagger" => '\u{2020}',
    "ddagger" => '\u{2021}',
    "amalg" => '\u{2A3F}',
    // Relation symbols:
    "leq" => '\u{2264}',
    "le" => '\u{2264}',
    "geq" => '\u{2265}',
    "ge" => '\u{2265}',
    "ll" => '\u{226A}',
    "gg" => '\u{226B}',
    "prec" => '\u{227A}',
    "succ" => '\u{227B}',
    "precsim" => '\u{227E}',
    "succsim" => '\u{227F}',
    "subset" => '\u{2282}',
    "supset" => '\u{2283}',
    "subseteq" => '\u{2286}',
    "supseteq" => '\u{2287}',
    "sqsubset" => '\u{228F}',
    "sqsupset" => '\u{2290}',
    "sqsubseteq" => '\u{2291}',
    "sqsupseteq" => '\u{2292}',
    "in" => '\u{2208}',
    "ni" => '\u{220B}',
    "vdash" => '\u{22A2}',
    "dashv" => '\u{22A3}',
    "models" => '\u{22A7}',
    "mid" => '\u{2223}',
    "parallel" => '\u{2225}',
    "perp" => '\u{27C2}',
    "equiv" => '\u{2261}',
    "sim" => '\u{223C}',
    "simeq" => '\u{2243}',
    "asymp" => '\u{224D}',
    "approx" => '\u{2248}',
    "cong" => '\u{2245}',
    "neq" => '\u{2260}',
    "doteq" => '\u{2250}',
    "propto" => '\u{221D}',
    "bowtie" => '\u{22C8}',
    "Join" => '\u{2A1D}',
    "smile" => '\u{2323}',
    "frown" => '\u{2322}',
    // Arrow symbols:
    "leftarrow" => '\u{2190}',
    "Leftarrow" => '\u{21D0}',
    "rightarrow" => '\u{2192}',
    "Rightarrow" => '\u{21D2}',
    "leftrightarrow" => '\u{2194}',
    "Leftrightarrow" => '\u{21D4}',
    "mapsto" => '\u{21A6}',
    "hookleftarrow" => '\u{21A9}',
    "hookrightarrow" => '\u{21AA}',
    "leftharpoonup" => '\u{21BC}',
    "leftharpoondown" => '\u{21BD}',
    "rightharpoonup" => '\u{21C0}',
    "rightharpoondown" => '\u{21C1}',
    "longleftarrow" => '\u{27F5}',
    "Longleftarrow" => '\u{27F8}',
    "longrightarrow" => '\u{27F6}',
    "Longrightarrow" => '\u{27F9}',
    "longleftrightarrow" => '\u{27F7}',
    "Longleftrightarrow" => '\u{27FA}',
    "longmapsto" => '\u{27FC}',
    "uparrow" => '\u{2191}',
    "Uparrow" => '\u{21D1}',
    "downarrow" => '\u{2193}',
    "Downarrow" => '\u{21D3}',
    "updownarrow" => '\u{2195}',
    "Updownarrow" => '\u{21D5}',
    "nearrow" => '\u{2197}',
    "searrow" => '\u{2198}',
    "swarrow" => '\u{2199}',
    "nwarrow" => '\u{2196}',
    // Miscellaneous symbols:
    "aleph" => '\u{2135}',
    "hbar" => '\u{210F}',
    "ell" => '\u{2113}',
    "wp" => '\u{2118}',
    "Re" => '\u{211C}',
    "Im" => '\u{2111}',
    "partial" => '\u{2202}',
    "infty" => '\u{221E}',
    "prime" => '\u{2032}',
    "emptyset" => '\u{2205}',
    "nabla" => '\u{2207}',
    "surd" => '\u{221A}',
    "top" => '\u{22A4}',
    "bot" => '\u{22A5}',
    "angle" => '\u{2220}',
    "forall" => '\u{2200}',
    "exists" => '\u{2203}',
    "neg" => '\u{AC}',
    "flat" => '\u{266D}',
    "natural" => '\u{266E}',
    "sharp" => '\u{266F}',
    "clubsuit" => '\u{2663}',
    "diamondsuit" => '\u{2662}',
    "heartsuit" => '\u{2661}',
    "spadesuit" => '\u{2660}',
    "cdots" => '\u{22EF}',
    "vdots" => '\u{22EE}',
    "ddots" => '\u{22F1}',
    // Variable-sized symbols:
    "sum" => '\u{2211}',
    "prod" => '\u{220F}',
    "coprod" => '\u{2210}',
    "int" => '\u{222B}',
    "oint" => '\u{222E}',
    "bigcap" => '\u{22C2}',
    "bigcup" => '\u{22C3}',
    "bigvee" => '\u{22C1}',
    "bigwedge" => '\u{22C0}',
    "bigodot" => '\u{2A00}',
    "bigotimes" => '\u{2A02}',
    "bigoplus" => '\u{2A01}',
    "biguplus" => '\u{2A04}',
    // Braces:
    "langle" => '\u{2329}',
    "rangle" => '\u{232A}',
};

/// Function names, rendered verbatim as operator leaves.
pub static FUNCTIONS: phf::Set<&'static str> = phf::phf_set! {
    "arccos", "arcsin", "arctan", "arg", "cos", "cosh",
    "cot", "coth", "csc", "deg", "det", "dim",
    "exp", "gcd", "hom", "inf", "ker", "lg",
    "lim", "liminf", "limsup", "ln", "log", "max",
    "min", "Pr", "sec", "sin", "sinh", "sup",
    "tan", "tanh",
    "injlim", "varinjlim", "varlimsup",
    "projlim", "varliminf", "varprojlim",
};

/// Double-struck capitals for `\mathbb`.
pub static MATHBB: phf::Map<char, char> = phf::phf_map! {
    'A' => '\u{1D538}',
    'B' => '\u{1D539}',
    'C' => '\u{2102}',
    'D' => '\u{1D53B}',
    'E' => '\u{1D53C}',
    'F' => '\u{1D53D}',
    'G' => '\u{1D53E}',
    'H' => '\u{210D}',
    'I' => '\u{1D540}',
    'J' => '\u{1D541}',
    'K' => '\u{1D542}',
    'L' => '\u{1D543}',
    'M' => '\u{1D544}',
    'N' => '\u{2115}',
    'O' => '\u{1D546}',
    'P' => '\u{2119}',
    'Q' => '\u{211A}',
    'R' => '\u{211D}',
    'S' => '\u{1D54A}',
    'T' => '\u{1D54B}',
    'U' => '\u{1D54C}',
    'V' => '\u{1D54D}',
    'W' => '\u{1D54E}',
    'X' => '\u{1D54F}',
    'Y' => '\u{1D550}',
    'Z' => '\u{2124}',
};

/// Script letters for `\mathscr` and `\mathcal`.
pub static MATHSCR: phf::Map<char, char> = phf::phf_map! {
    'A' => '\u{1D49C}',
    'B' => '\u{212C}',
    'C' => '\u{1D49E}',
    'D' => '\u{1D49F}',
    'E' => '\u{2130}',
    'F' => '\u{2131}',
    'G' => '\u{1D4A2}',
    'H' => '\u{210B}',
    'I' => '\u{2110}',
    'J' => '\u{1D4A5}',
    'K' => '\u{1D4A6}',
    'L' => '\u{2112}',
    'M' => '\u{2133}',
    'N' => '\u{1D4A9}',
    'O' => '\u{1D4AA}',
    'P' => '\u{1D4AB}',
    'Q' => '\u{1D4AC}',
    'R' => '\u{211B}',
    'S' => '\u{1D4AE}',
    'T' => '\u{1D4AF}',
    'U' => '\u{1D4B0}',
    'V' => '\u{1D4B1}',
    'W' => '\u{1D4B2}',
    'X' => '\u{1D4B3}',
    'Y' => '\u{1D4B4}',
    'Z' => '\u{1D4B5}',
    'a' => '\u{1D4B6}',
    'b' => '\u{1D4B7}',
    'c' => '\u{1D4B8}',
    'd' => '\u{1D4B9}',
    'e' => '\u{212F}',
    'f' => '\u{1D4BB}',
    'g' => '\u{210A}',
    'h' => '\u{1D4BD}',
    'i' => '\u{1D4BE}',
    'j' => '\u{1D4BF}',
    'k' => '\u{1D4C0}',
    'l' => '\u{1D4C1}',
    'm' => '\u{1D4C2}',
    'n' => '\u{1D4C3}',
    'o' => '\u{2134}',
    'p' => '\u{1D4C5}',
    'q' => '\u{1D4C6}',
    'r' => '\u{1D4C7}',
    's' => '\u{1D4C8}',
    't' => '\u{1D4C9}',
    'u' => '\u{1D4CA}',
    'v' => '\u{1D4CB}',
    'w' => '\u{1D4CC}',
    'x' => '\u{1D4CD}',
    'y' => '\u{1D4CE}',
    'z' => '\u{1D4CF}',
};

/// Relations that `\not` can negate, with the pre-struck glyph.
/// Scanned by prefix, not hashed.
pub static NEGATABLES: [(&str, char); 3] = [
    ("=", '\u{2260}'),
    (r"\in", '\u{2209}'),
    (r"\equiv", '\u{2262}'),
];

/// Delimiters accepted after `\left`, in their LaTeX spelling.
pub static OPEN_DELIMITERS: [&str; 6] = ["(", "[", "|", r"\{", r"\langle", "."];

/// Delimiters accepted after `\right`.
pub static CLOSE_DELIMITERS: [&str; 6] = [")", "]", "|", r"\}", r"\rangle", "."];

/// Big operators: `\sum`, `\int`, `\oint` and `\prod`. Scripts attached to
/// these render as stacked limits rather than corner scripts.
pub fn is_big_op(glyph: char) -> bool {
    matches!(glyph, '\u{2211}' | '\u{222B}' | '\u{222E}' | '\u{220F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup() {
        assert_eq!(LETTERS.get("alpha"), Some(&'\u{3B1}'));
        assert_eq!(GREEK_UPPER.get("Omega"), Some(&'\u{3A9}'));
        assert_eq!(SPECIAL.get("sum"), Some(&'\u{2211}'));
        assert!(FUNCTIONS.contains("lim"));
        assert_eq!(MATHBB.get(&'R'), Some(&'\u{211D}'));
        assert_eq!(MATHSCR.get(&'L'), Some(&'\u{2112}'));
        assert!(LETTERS.get("bogus").is_none());
    }

    #[test]
    fn big_op_set() {
        for name in ["sum", "int", "oint", "prod"] {
            let glyph = SPECIAL.get(name).copied().unwrap();
            assert!(is_big_op(glyph), "{name} should be a big operator");
        }
        // Other variable-sized symbols do not get the limits treatment.
        assert!(!is_big_op(SPECIAL.get("bigcup").copied().unwrap()));
    }
}
