use crate::value::Value;
use anyhow::{Context, bail};
use regex::Regex;

/// Deepest sequence nesting accepted; parsing recurses once per level.
const MAX_NESTING: usize = 256;

/// Parse a literal expression into a [`Value`].
///
/// Accepted forms:
///   true | false
///   -42                  (signed 64-bit decimal)
///   "text\n"             (escapes: \\ \" \n \t)
///   'text'               (escapes: \\ \'; other backslashes are literal)
///   [1, "a", [true]]     (nesting up to 256 levels, no trailing comma)
pub fn parse_literal(input: &str) -> anyhow::Result<Value> {
    let mut parser = Parser::new(input)?;
    let value = parser
        .value()
        .with_context(|| format!("cannot parse literal {:?}", input))?;
    parser.skip_ws();
    if let Some(c) = parser.peek() {
        bail!(
            "cannot parse literal {:?}: unexpected {:?} at column {}",
            input,
            c,
            parser.pos + 1
        );
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
    int_re: Regex,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> anyhow::Result<Self> {
        Ok(Self {
            src,
            pos: 0,
            depth: 0,
            int_re: Regex::new(r"^[+-]?[0-9]+$")?,
        })
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn value(&mut self) -> anyhow::Result<Value> {
        self.skip_ws();
        match self.peek() {
            None => bail!("expected a value at column {}", self.pos + 1),
            Some('"') => self.double_quoted(),
            Some('\'') => self.single_quoted(),
            Some('[') => self.sequence(),
            Some(_) => self.scalar(),
        }
    }

    fn scalar(&mut self) -> anyhow::Result<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| !c.is_whitespace() && c != ',' && c != ']')
        {
            self.bump();
        }
        let token = &self.src[start..self.pos];

        match token {
            "true" => return Ok(Value::Boolean(true)),
            "false" => return Ok(Value::Boolean(false)),
            _ => {}
        }

        if self.int_re.is_match(token) {
            let n = token
                .parse::<i64>()
                .with_context(|| format!("integer literal out of range: {}", token))?;
            return Ok(Value::Integer(n));
        }

        bail!(
            "unrecognized token {:?} at column {}",
            token,
            start + 1
        )
    }

    fn double_quoted(&mut self) -> anyhow::Result<Value> {
        let open = self.pos;
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => bail!("unterminated string starting at column {}", open + 1),
                Some('"') => return Ok(Value::Text(out)),
                Some('\\') => match self.bump() {
                    Some('\\') => out.push('\\'),
                    Some('"') => out.push('"'),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c) => bail!("unknown escape \\{} at column {}", c, self.pos),
                    None => bail!("unterminated string starting at column {}", open + 1),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn single_quoted(&mut self) -> anyhow::Result<Value> {
        let open = self.pos;
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => bail!("unterminated string starting at column {}", open + 1),
                Some('\'') => return Ok(Value::Text(out)),
                Some('\\') => match self.peek() {
                    Some(c @ ('\\' | '\'')) => {
                        self.bump();
                        out.push(c);
                    }
                    _ => out.push('\\'),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn sequence(&mut self) -> anyhow::Result<Value> {
        let open = self.pos;
        if self.depth == MAX_NESTING {
            bail!(
                "sequence at column {} nests deeper than {} levels",
                open + 1,
                MAX_NESTING
            );
        }
        self.depth += 1;
        self.bump();
        let mut items = Vec::new();

        self.skip_ws();
        if self.peek() == Some(']') {
            self.bump();
            self.depth -= 1;
            return Ok(Value::Sequence(items));
        }

        loop {
            items.push(self.value()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => {
                    self.skip_ws();
                    if self.peek() == Some(']') {
                        bail!("trailing comma before column {}", self.pos + 1);
                    }
                }
                Some(']') => {
                    self.depth -= 1;
                    return Ok(Value::Sequence(items));
                }
                Some(c) => bail!("expected ',' or ']' but found {:?} at column {}", c, self.pos),
                None => bail!("unterminated sequence starting at column {}", open + 1),
            }
        }
    }
}
