use super::token::CSSToken;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// CSS tokenizer over a stylesheet, an inline `style` attribute, or a single
/// declaration value.
pub struct CSSTokenizer {
    /// The input as code points
    input: Vec<char>,
    /// Index of the next code point to consume
    position: usize,
    /// Collected tokens
    tokens: Vec<CSSToken>,
}

/// Tokenize `input` in one call, including the trailing `EOF` token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<CSSToken> {
    let mut tokenizer = CSSTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

impl CSSTokenizer {
    /// Create a new CSS tokenizer with the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Consume tokens until the end of input. The last collected token is `EOF`.
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let done = token.is_eof();
            self.tokens.push(token);
            if done {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<CSSToken> {
        self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CSSToken {
        // "Consume comments."
        self.skip_comments();

        let Some(c) = self.bump() else {
            return CSSToken::EOF;
        };

        match c {
            c if is_whitespace(c) => {
                while self.peek(0).is_some_and(is_whitespace) {
                    self.position += 1;
                }
                CSSToken::Whitespace
            }
            '"' | '\'' => self.consume_string(c),
            '#' => {
                // "If the next input code point is an ident code point or the next
                // two input code points are a valid escape..."
                if self.peek(0).is_some_and(is_ident_code_point) || self.starts_escape(0) {
                    CSSToken::Hash(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('#')
                }
            }
            '(' => CSSToken::LeftParen,
            ')' => CSSToken::RightParen,
            '[' => CSSToken::LeftBracket,
            ']' => CSSToken::RightBracket,
            '{' => CSSToken::LeftBrace,
            '}' => CSSToken::RightBrace,
            ',' => CSSToken::Comma,
            ':' => CSSToken::Colon,
            ';' => CSSToken::Semicolon,
            '+' | '.' => {
                self.position -= 1;
                if self.starts_number() {
                    self.consume_numeric()
                } else {
                    self.position += 1;
                    CSSToken::Delim(c)
                }
            }
            '-' => {
                self.position -= 1;
                if self.starts_number() {
                    self.consume_numeric()
                } else if self.starts_ident_sequence() {
                    self.consume_ident_like()
                } else {
                    self.position += 1;
                    CSSToken::Delim('-')
                }
            }
            '@' => {
                if self.starts_ident_sequence() {
                    CSSToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('@')
                }
            }
            '\\' => {
                self.position -= 1;
                if self.starts_escape(0) {
                    self.consume_ident_like()
                } else {
                    // "This is a parse error."
                    self.position += 1;
                    CSSToken::Delim('\\')
                }
            }
            c if c.is_ascii_digit() => {
                self.position -= 1;
                self.consume_numeric()
            }
            c if is_ident_start_code_point(c) => {
                self.position -= 1;
                self.consume_ident_like()
            }
            c => CSSToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn skip_comments(&mut self) {
        while self.peek(0) == Some('/') && self.peek(1) == Some('*') {
            self.position += 2;
            loop {
                match self.bump() {
                    Some('*') if self.peek(0) == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    // Unterminated comment runs to EOF.
                    None => break,
                }
            }
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string(&mut self, ending: char) -> CSSToken {
        let mut value = String::new();
        loop {
            match self.bump() {
                Some(c) if c == ending => return CSSToken::String(value),
                None => return CSSToken::String(value),
                Some('\n') => {
                    // "Reconsume the current input code point, create a
                    // <bad-string-token>, and return it."
                    self.position -= 1;
                    return CSSToken::BadString;
                }
                Some('\\') => match self.peek(0) {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escape()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric(&mut self) -> CSSToken {
        let (value, is_integer) = self.consume_number();

        if self.starts_ident_sequence() {
            let unit = self.consume_ident_sequence();
            CSSToken::Dimension { value, unit }
        } else if self.peek(0) == Some('%') {
            self.position += 1;
            CSSToken::Percentage(value)
        } else {
            CSSToken::Number { value, is_integer }
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> (f64, bool) {
        let mut repr = String::new();
        let mut is_integer = true;

        if let Some(sign @ ('+' | '-')) = self.peek(0) {
            repr.push(sign);
            self.position += 1;
        }
        self.push_digits(&mut repr);

        if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            self.position += 1;
            self.push_digits(&mut repr);
            is_integer = false;
        }

        if matches!(self.peek(0), Some('e' | 'E')) {
            let signed = matches!(self.peek(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                repr.push('e');
                if signed && let Some(sign) = self.peek(1) {
                    repr.push(sign);
                }
                self.position += digit_at;
                self.push_digits(&mut repr);
                is_integer = false;
            }
        }

        (repr.parse().unwrap_or(0.0), is_integer)
    }

    fn push_digits(&mut self, repr: &mut String) {
        while let Some(c) = self.peek(0).filter(char::is_ascii_digit) {
            repr.push(c);
            self.position += 1;
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like(&mut self) -> CSSToken {
        let name = self.consume_ident_sequence();
        if self.peek(0) == Some('(') {
            self.position += 1;
            CSSToken::Function(name)
        } else {
            CSSToken::Ident(name)
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        loop {
            match self.peek(0) {
                Some(c) if is_ident_code_point(c) => {
                    result.push(c);
                    self.position += 1;
                }
                Some('\\') if self.starts_escape(0) => {
                    self.position += 1;
                    result.push(self.consume_escape());
                }
                _ => return result,
            }
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Called with the reverse solidus already consumed.
    fn consume_escape(&mut self) -> char {
        let Some(first) = self.bump() else {
            return '\u{FFFD}';
        };
        if !first.is_ascii_hexdigit() {
            return first;
        }

        // "Consume as many hex digits as possible, but no more than 5."
        let mut hex = String::from(first);
        while hex.len() < 6 {
            match self.peek(0) {
                Some(c) if c.is_ascii_hexdigit() => {
                    hex.push(c);
                    self.position += 1;
                }
                _ => break,
            }
        }
        // "If the next input code point is whitespace, consume it as well."
        if self.peek(0).is_some_and(is_whitespace) {
            self.position += 1;
        }

        u32::from_str_radix(&hex, 16)
            .ok()
            .filter(|&cp| cp != 0)
            .and_then(char::from_u32)
            .unwrap_or('\u{FFFD}')
    }

    /// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
    fn starts_escape(&self, offset: usize) -> bool {
        self.peek(offset) == Some('\\') && self.peek(offset + 1) != Some('\n')
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn starts_ident_sequence(&self) -> bool {
        match self.peek(0) {
            Some('-') => {
                self.peek(1)
                    .is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                    || self.starts_escape(1)
            }
            Some('\\') => self.starts_escape(0),
            Some(c) => is_ident_start_code_point(c),
            None => false,
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn starts_number(&self) -> bool {
        let digit_at = |offset: usize| self.peek(offset).is_some_and(|c| c.is_ascii_digit());
        match self.peek(0) {
            Some('+' | '-') => digit_at(1) || (self.peek(1) == Some('.') && digit_at(2)),
            Some('.') => digit_at(1),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    /// Consume and return the next code point.
    fn bump(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Look at a code point ahead of the current position without consuming it.
    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
