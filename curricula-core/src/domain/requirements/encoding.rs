// curricula-core/src/domain/requirements/encoding.rs
//
// Text form of a group list as stored in the output table, e.g.
// [['credits_3', 'ENGL 101', 'ENGL 102'], 'PHIL 201']

use crate::domain::error::DomainError;
use crate::domain::requirements::credit::CreditLabel;
use crate::domain::requirements::group::CourseGroup;
use crate::domain::requirements::normalizer::normalize;

// --- ENCODING ---

pub fn encode_groups(groups: &[CourseGroup]) -> String {
    let items: Vec<String> = groups.iter().map(encode_group).collect();
    format!("[{}]", items.join(", "))
}

/// Absent lists are stored as an empty cell.
pub fn encode_optional(groups: Option<&[CourseGroup]>) -> String {
    groups.map(encode_groups).unwrap_or_default()
}

fn encode_group(group: &CourseGroup) -> String {
    match group {
        CourseGroup::Merged { label, courses } => {
            let mut items = Vec::with_capacity(courses.len() + 1);
            items.push(quote(&label.to_string()));
            items.extend(courses.iter().map(|c| quote(c)));
            format!("[{}]", items.join(", "))
        }
        CourseGroup::Standalone { course } => quote(course),
    }
}

fn quote(value: &str) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

// --- DECODING ---

/// Decodes a group list, failing on the first malformed element.
pub fn decode_groups(text: &str) -> Result<Vec<CourseGroup>, DomainError> {
    decode_entries(text)?.into_iter().collect()
}

/// Empty cells decode to `None`.
pub fn decode_optional(text: &str) -> Result<Option<Vec<CourseGroup>>, DomainError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    decode_groups(text).map(Some)
}

/// Decodes the outer list and converts each element independently, so one malformed
/// element does not hide the others.
pub fn decode_entries(text: &str) -> Result<Vec<Result<CourseGroup, DomainError>>, DomainError> {
    match parse_literal(text)? {
        Literal::List(items) => Ok(items.into_iter().map(into_group).collect()),
        Literal::Str(_) => Err(DomainError::encoding("expected a list at top level")),
    }
}

/// Lenient decode followed by [`normalize`]; malformed elements are returned alongside
/// instead of aborting.
pub fn normalize_encoded(text: &str) -> Result<(Vec<CourseGroup>, Vec<DomainError>), DomainError> {
    let mut groups = Vec::new();
    let mut skipped = Vec::new();

    for entry in decode_entries(text)? {
        match entry {
            Ok(group) => groups.push(group),
            Err(e) => skipped.push(e),
        }
    }

    Ok((normalize(&groups), skipped))
}

fn into_group(literal: Literal) -> Result<CourseGroup, DomainError> {
    match literal {
        // A group that was itself stored as text.
        Literal::Str(s) if s.trim_start().starts_with('[') => match parse_literal(&s)? {
            Literal::List(items) => group_from_items(items),
            Literal::Str(_) => Err(DomainError::encoding("expected a list inside string")),
        },
        Literal::Str(course) => Ok(CourseGroup::Standalone { course }),
        Literal::List(items) => group_from_items(items),
    }
}

fn group_from_items(items: Vec<Literal>) -> Result<CourseGroup, DomainError> {
    let mut items = items.into_iter();

    let label = match items.next() {
        Some(Literal::Str(token)) => token.parse::<CreditLabel>()?,
        Some(Literal::List(_)) => return Err(DomainError::encoding("group anchor is a list")),
        None => return Err(DomainError::encoding("empty group")),
    };

    let courses = items
        .map(|item| match item {
            Literal::Str(course) => Ok(course),
            Literal::List(_) => Err(DomainError::encoding("nested list inside a group")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CourseGroup::Merged { label, courses })
}

#[derive(Debug, Clone, PartialEq)]
enum Literal {
    Str(String),
    List(Vec<Literal>),
}

fn parse_literal(text: &str) -> Result<Literal, DomainError> {
    let mut parser = LiteralParser {
        chars: text.chars().collect(),
        pos: 0,
    };
    let value = parser.value()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(parser.error("trailing characters"));
    }
    Ok(value)
}

struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
}

impl LiteralParser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn error(&self, what: &str) -> DomainError {
        DomainError::encoding(format!("{} at position {}", what, self.pos))
    }

    fn value(&mut self) -> Result<Literal, DomainError> {
        self.skip_whitespace();
        match self.peek() {
            Some('[') => self.list(),
            Some(q @ ('\'' | '"')) => self.string(q).map(Literal::Str),
            Some(c) => Err(self.error(&format!("unexpected character '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn list(&mut self) -> Result<Literal, DomainError> {
        self.bump(); // '['
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.bump();
                return Ok(Literal::List(items));
            }

            items.push(self.value()?);
            self.skip_whitespace();

            match self.bump() {
                Some(',') => continue,
                Some(']') => return Ok(Literal::List(items)),
                Some(c) => return Err(self.error(&format!("expected ',' or ']' but found '{}'", c))),
                None => return Err(self.error("unterminated list")),
            }
        }
    }

    fn string(&mut self, delimiter: char) -> Result<String, DomainError> {
        self.bump(); // opening quote
        let mut out = String::new();

        loop {
            match self.bump() {
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => return Err(self.error("unterminated escape")),
                },
                Some(c) if c == delimiter => return Ok(out),
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }
}
