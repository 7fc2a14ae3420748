//! The Cooklang token grammar.
//!
//! Each markup construct is its own lazily-compiled matcher. [`TokenStream`]
//! walks a paragraph left to right, always taking the earliest match; when two
//! rules match at the same position the one listed first in [`RULES`] wins, so
//! the table order below is the grammar's priority order.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `>> key: value` metadata line.
static METADATA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^>>\s*(?P<key>.+?):\s*(?P<value>.+)").unwrap());

/// `@prose phrase[name](descriptor){measurements}` with optional `:group:`.
static MULTIWORD_INGREDIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"@(?P<prose>[^@#~$\[]+?)(?:\[(?P<name>.*?)\])?(?:\((?P<descriptor>.*?)\))?\{(?P<measurements>\|?[^}]*)\}(?::(?P<group>[^@#~$\[]+):)?",
    )
    .unwrap()
});

/// `@word` with no braces, one token of non-space non-punctuation characters.
static SINGLE_WORD_INGREDIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(?P<name>[^\s\t\p{Zs}\p{P}]+)").unwrap());

/// `#prose phrase{quantity}`.
static MULTIWORD_COOKWARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(?P<name>[^@#~$\[]+?)\{(?P<quantity>.*?)\}").unwrap());

/// `#word`.
static SINGLE_WORD_COOKWARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(?P<name>[^\s\t\p{Zs}\p{P}]+)").unwrap());

/// `$prose phrase[class]{..}`; the braces only delimit the construct.
static HIGHLIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?P<prose>[^@#~$\[]+?)(?:\[(?P<class>.+?)\])?\{(?P<measurements>\|?[^}]*)\}")
        .unwrap()
});

/// `~name{quantity%units}`; name may be empty, braces are mandatory.
static TIMER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"~(?P<name>.*?)(?:\{(?P<quantity>.*?)(?:%(?P<units>.+?))?\})").unwrap()
});

/// `# text` line, trailing `#` characters and whitespace dropped.
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)# (?P<title>.*?)\s*#*$").unwrap());

/// `-- ...` to end of line.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"--.*").unwrap());

/// `[- ... -]` with surrounding whitespace; replaced by one space so tokens
/// separated only by a block comment do not fuse.
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\[-.*?-\]\s*").unwrap());

/// A line break followed by two blank lines ends a paragraph.
pub(crate) static PARAGRAPH_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n\n\n").unwrap());

/// One recognized markup construct, borrowing its captures from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'src> {
    Metadata {
        key: &'src str,
        value: &'src str,
    },
    MultiwordIngredient {
        prose: &'src str,
        name: Option<&'src str>,
        descriptor: Option<&'src str>,
        measurements: &'src str,
        group: Option<&'src str>,
    },
    SingleWordIngredient {
        name: &'src str,
    },
    MultiwordCookware {
        name: &'src str,
        quantity: &'src str,
    },
    SingleWordCookware {
        name: &'src str,
    },
    Highlight {
        prose: &'src str,
        class: Option<&'src str>,
    },
    Timer {
        name: &'src str,
        quantity: &'src str,
        units: Option<&'src str>,
    },
    Title {
        text: &'src str,
    },
}

/// A token together with the byte span it was matched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub start: usize,
    pub end: usize,
}

struct Rule {
    pattern: &'static Lazy<Regex>,
    build: for<'t> fn(&Captures<'t>) -> TokenKind<'t>,
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn opt_group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

fn build_metadata<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::Metadata {
        key: group(caps, "key"),
        value: group(caps, "value"),
    }
}

fn build_multiword_ingredient<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::MultiwordIngredient {
        prose: group(caps, "prose"),
        name: opt_group(caps, "name"),
        descriptor: opt_group(caps, "descriptor"),
        measurements: group(caps, "measurements"),
        group: opt_group(caps, "group"),
    }
}

fn build_single_word_ingredient<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::SingleWordIngredient {
        name: group(caps, "name"),
    }
}

fn build_multiword_cookware<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::MultiwordCookware {
        name: group(caps, "name"),
        quantity: group(caps, "quantity"),
    }
}

fn build_single_word_cookware<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::SingleWordCookware {
        name: group(caps, "name"),
    }
}

fn build_highlight<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::Highlight {
        prose: group(caps, "prose"),
        class: opt_group(caps, "class"),
    }
}

fn build_timer<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::Timer {
        name: group(caps, "name"),
        quantity: group(caps, "quantity"),
        units: opt_group(caps, "units"),
    }
}

fn build_title<'t>(caps: &Captures<'t>) -> TokenKind<'t> {
    TokenKind::Title {
        text: group(caps, "title"),
    }
}

/// Grammar rules in priority order. Order matters: the multiword forms must
/// come before their single-word fallbacks, and metadata before everything,
/// for correct disambiguation at a shared position.
static RULES: &[Rule] = &[
    Rule {
        pattern: &METADATA,
        build: build_metadata,
    },
    Rule {
        pattern: &MULTIWORD_INGREDIENT,
        build: build_multiword_ingredient,
    },
    Rule {
        pattern: &SINGLE_WORD_INGREDIENT,
        build: build_single_word_ingredient,
    },
    Rule {
        pattern: &MULTIWORD_COOKWARE,
        build: build_multiword_cookware,
    },
    Rule {
        pattern: &SINGLE_WORD_COOKWARE,
        build: build_single_word_cookware,
    },
    Rule {
        pattern: &HIGHLIGHT,
        build: build_highlight,
    },
    Rule {
        pattern: &TIMER,
        build: build_timer,
    },
    Rule {
        pattern: &TITLE,
        build: build_title,
    },
];

/// Remove line comments, then collapse block comments to a single space.
/// Runs before segmentation, so a comment can never hide a paragraph break.
pub fn strip_comments(source: &str) -> String {
    let without_line_comments = COMMENT.replace_all(source, "");
    BLOCK_COMMENT
        .replace_all(&without_line_comments, " ")
        .into_owned()
}

/// Reentrant iterator over the non-overlapping grammar matches of one
/// paragraph, in source order. All scan state lives in the iterator.
pub struct TokenStream<'src> {
    text: &'src str,
    pos: usize,
}

impl<'src> TokenStream<'src> {
    pub fn new(text: &'src str) -> Self {
        TokenStream { text, pos: 0 }
    }
}

impl<'src> Iterator for TokenStream<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.text.len() {
            return None;
        }

        let mut best: Option<(usize, usize, &Rule, Captures<'src>)> = None;
        for rule in RULES {
            let Some(caps) = rule.pattern.captures_at(self.text, self.pos) else {
                continue;
            };
            let Some(whole) = caps.get(0) else { continue };
            // Strictly-earlier only: at equal positions the first rule wins.
            let earlier = match &best {
                Some((start, _, _, _)) => whole.start() < *start,
                None => true,
            };
            if earlier {
                best = Some((whole.start(), whole.end(), rule, caps));
            }
        }

        let (start, end, rule, caps) = best?;
        self.pos = end;
        Some(Token {
            kind: (rule.build)(&caps),
            start,
            end,
        })
    }
}
