use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.` or `2.25`. Always a float.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `if`
    #[token("if")]
    If,
    /// `while`
    #[token("while")]
    While,
    /// `mosho`, the function definition keyword.
    #[token("mosho")]
    Mosho,
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Variable(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Insignificant to the grammar but kept for line tracking.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Terminates every token stream. Never matched by the lexer itself; only
    /// appended by [`tokenize`].
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Number(n) => return write!(f, "number {n:?}"),
            Self::Variable(name) => return write!(f, "identifier '{name}'"),
            Self::If => "'if'",
            Self::While => "'while'",
            Self::Mosho => "'mosho'",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Colon => "':'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::EqualEqual => "'=='",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
            Self::EndOfInput => "end of input",
        };
        f.write_str(symbol)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line
/// starts, so errors can report a line and column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Trailing-dot forms like `3.` are accepted.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts source text into a sequence of tokens tagged with their line.
///
/// The whole input is consumed. The returned sequence always ends with
/// exactly one [`Token::EndOfInput`].
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] for the first character that does
/// not start any token.
///
/// # Example
/// ```
/// use mosho::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x >= 2.5").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Variable("x".into()),
///                 Token::GreaterEqual,
///                 Token::Number(2.5),
///                 Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line:       1,
                                                                   line_start: 0, });

    loop {
        // A token always starts on the line the lexer is on before it is read.
        let line = lexer.extras.line;
        let Some(token) = lexer.next() else {
            break;
        };

        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let start = lexer.span().start;
                let character = lexer.slice().chars().next().unwrap_or_default();
                let column = source[lexer.extras.line_start..start].chars().count() + 1;
                return Err(LexError::InvalidCharacter { character,
                                                        line,
                                                        column });
            },
        }
    }

    tokens.push((Token::EndOfInput, lexer.extras.line));
    Ok(tokens)
}
