/**
 * A recursive-descent parser turning a pattern string into a regex AST.
 */

use rgx_charclass::CharClass;
use crate::ast::{Node, Quantifier};
use crate::error::{ParseError, ParseResult};

/*
 * Reference grammar for the parser:
 *
 * regex        ::= alternation ;
 *
 * alternation  ::=
 *                | expr '|' regex
 *                | expr
 *                ;
 *
 * expr         ::= element* ;
 *
 * element      ::= atom quantifier* ;
 *
 * quantifier   ::= '*' | '+' | '?' ;
 *
 * atom         ::=
 *                | '(' regex ')'
 *                | '\' escape
 *                | '.' | '^' | '$'
 *                | '[' class_body ']'
 *                | ANY_CHAR
 *                ;
 *
 * class_body   ::= '^'? (single_class ('&&' intersect | '-' class_body)*)* ;
 *
 * intersect    ::= single_class* ;
 *
 * single_class ::=
 *                | '[' class_body ']'
 *                | class_char '-' class_char
 *                | class_char
 *                | '\' escape
 *                ;
 *
 * class_char   ::= ANY_CHAR | '\u{' HEX+ '}' ;
 *
 * escape       ::= 'd' | 'D' | 'w' | 'W' | 's' | 'S' | 'u{' HEX+ '}' | SYNTAX_CHAR ;
 */

/**
 * Actual parsing.
 */

/// Parses a whole pattern. An empty pattern yields `Node::Blank`.
pub fn parse(source: &str) -> ParseResult<Node> {
    let mut parser = Parser::new(source);
    let node = parser.parse_regex()?.unwrap_or(Node::Blank);

    // Only an unbalanced ')' can stop the top-level alternation early
    if parser.more() {
        return Err(parser.unexpected());
    }

    log::debug!("parsed `{}` into {} nodes", source, node.size());
    Ok(node)
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    position: usize,
}

/**
 * Parser machinery: single character lookahead over an explicit cursor.
 */

impl <'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self{ source, chars: source.chars().collect(), position: 0 }
    }

    fn more(&self) -> bool {
        self.position < self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek_is_any(&self, options: &str) -> bool {
        match self.peek() {
            Some(c) => options.contains(c),
            None => false,
        }
    }

    fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedCharacter{ pattern: self.source.into(), offset: self.position }
    }

    fn consume(&mut self, expected: char) -> ParseResult<()> {
        if self.peek() == Some(expected) {
            self.position += 1;
            Ok(())
        }
        else {
            Err(self.unexpected())
        }
    }

    fn advance(&mut self) -> ParseResult<char> {
        let c = self.peek().ok_or_else(|| self.unexpected())?;
        self.position += 1;
        Ok(c)
    }
}

/**
 * Productions. `None` stands for an empty sub-expression, like the inside of
 * `()` or the right side of `a|`.
 */

impl <'a> Parser<'a> {
    fn parse_regex(&mut self) -> ParseResult<Option<Node>> {
        self.parse_alternation()
    }

    fn parse_alternation(&mut self) -> ParseResult<Option<Node>> {
        let left = self.parse_expr()?;
        if self.peek() == Some('|') {
            self.consume('|')?;
            let right = self.parse_regex()?;
            Ok(Some(Node::choice(left.unwrap_or(Node::Blank), right.unwrap_or(Node::Blank))))
        }
        else {
            Ok(left)
        }
    }

    fn parse_expr(&mut self) -> ParseResult<Option<Node>> {
        let mut current = None;
        while self.more() && !self.peek_is_any("|)") {
            let element = self.parse_element()?;
            current = match (current, element) {
                (Some(first), Some(second)) => Some(Node::sequence(first, second)),
                (first, second) => first.or(second),
            };
        }
        Ok(current)
    }

    fn parse_element(&mut self) -> ParseResult<Option<Node>> {
        let mut atom = self.parse_atom()?;
        while let Some(quantifier) = self.peek().and_then(Quantifier::from_char) {
            self.advance()?;
            atom = atom.map(|subnode| Node::quantified(subnode, quantifier));
        }
        Ok(atom)
    }

    fn parse_atom(&mut self) -> ParseResult<Option<Node>> {
        match self.advance()? {
            '(' => {
                let node = self.parse_regex()?;
                self.consume(')')?;
                Ok(node)
            },

            '\\' => {
                let c = self.advance()?;
                Ok(Some(Node::CharacterClass(self.parse_escape(c)?)))
            },

            '.' => Ok(Some(Node::AnyChar)),
            '^' => Ok(Some(Node::StartOfInput)),
            '$' => Ok(Some(Node::EndOfInput)),

            '[' => {
                let class = self.parse_class_body()?;
                self.consume(']')?;
                Ok(Some(Node::CharacterClass(class)))
            },

            c => Ok(Some(Node::Primitive(c))),
        }
    }

    /// The class an escape letter (already consumed) stands for.
    fn parse_escape(&mut self, c: char) -> ParseResult<CharClass> {
        if c == 'u' {
            return Ok(CharClass::single(self.parse_unicode_escape()?));
        }
        if is_syntax_char(c) {
            return Ok(CharClass::single(c));
        }
        CharClass::shortcut(c)
            .ok_or_else(|| ParseError::InvalidEscape(format!("unexpected escape sequence \\{}", c)))
    }

    /// The `{H..H}` part of a `\u` escape.
    fn parse_unicode_escape(&mut self) -> ParseResult<char> {
        self.consume('{')?;

        let start = self.position;
        while self.peek().map_or(false, |c| c.is_ascii_hexdigit()) {
            self.position += 1;
        }
        let digits: String = self.chars[start..self.position].iter().collect();

        if digits.len() > 4 {
            return Err(ParseError::InvalidEscape("Unicode escape sequence too long".into()));
        }

        self.consume('}')?;

        if digits.is_empty() {
            return Err(ParseError::InvalidEscape("empty Unicode escape sequence".into()));
        }
        u32::from_str_radix(&digits, 16)
            .ok()
            .and_then(std::char::from_u32)
            .ok_or_else(|| ParseError::InvalidEscape(
                format!("\\u{{{}}} is not a valid code point", digits)))
    }

    fn parse_class_body(&mut self) -> ParseResult<CharClass> {
        let negated = self.peek() == Some('^');
        if negated {
            self.consume('^')?;
        }

        let mut output = CharClass::new();
        while self.more() && self.peek() != Some(']') {
            let single = self.parse_single_class()?;
            output = CharClass::union(&output, &single);

            while self.more() && self.peek_is_any("&-") {
                if self.peek() == Some('&') {
                    self.consume('&')?;
                    self.consume('&')?;
                    let intersectand = self.parse_intersect_body()?;
                    output = CharClass::intersect(&output, &intersectand);
                }
                else {
                    self.consume('-')?;
                    let subtrahend = self.parse_class_body()?;
                    output = CharClass::subtract(&output, &subtrahend);
                }
            }
        }

        if negated {
            output = CharClass::negate(&output);
        }
        Ok(output)
    }

    fn parse_single_class(&mut self) -> ParseResult<CharClass> {
        if self.peek() == Some('[') {
            self.consume('[')?;
            let nested = self.parse_class_body()?;
            self.consume(']')?;
            return Ok(nested);
        }

        let mut start = self.advance()?;
        if start == '\\' {
            let c = self.advance()?;
            // Only a code point can begin a range
            if c != 'u' {
                return self.parse_escape(c);
            }
            start = self.parse_unicode_escape()?;
        }

        if self.peek() != Some('-') {
            return Ok(CharClass::single(start));
        }
        self.consume('-')?;

        let mut end = self.advance()?;
        if end == '\\' {
            end = match self.advance()? {
                'u' => self.parse_unicode_escape()?,
                '\\' => '\\',
                _ => return Err(ParseError::InvalidEscape(
                    "unexpected ending escape sequence for character class".into())),
            };
        }
        Ok(CharClass::range(start, end))
    }

    fn parse_intersect_body(&mut self) -> ParseResult<CharClass> {
        let mut output = CharClass::new();
        while self.more() && !self.peek_is_any("]&") {
            let single = self.parse_single_class()?;
            output = CharClass::union(&output, &single);
        }
        Ok(output)
    }
}

fn is_syntax_char(c: char) -> bool {
    "\\.^$|()[]*+?-&{}".contains(c)
}

// Tests ///////////////////////////////////////////////////////////////////////
