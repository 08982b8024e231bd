//! Line classification for node files.
//!
//! A node file is one directive per line. Each line is trimmed and split into
//! a keyword (the first whitespace-delimited token) and the trimmed rest of
//! the line. Only the keyword is used for dispatch:
//!
//! ```text
//! begin node
//!   id 1904
//!   name moose
//!   address 192.168.1.1
//!   ...
//! end node
//! ```

/// Per-record fields the checker cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Address,
}

impl Field {
    pub fn keyword(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Address => "address",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What a single line of a node file means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// `begin node`
    BeginNode,
    /// `end node`
    EndNode,
    /// `id`, `name` or `address` followed by a value
    Field(Field, &'a str),
    /// Any other content, including single-token lines
    Other,
}

/// Classify one raw line.
///
/// The value of a field is everything after the keyword, trimmed, so a name
/// containing spaces is kept whole.
pub fn classify(line: &str) -> Directive<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Directive::Blank;
    }

    let Some((keyword, rest)) = line.split_once(char::is_whitespace) else {
        return Directive::Other;
    };
    let rest = rest.trim();

    match keyword {
        "begin" if first_token(rest) == Some("node") => Directive::BeginNode,
        "end" if first_token(rest) == Some("node") => Directive::EndNode,
        "id" => Directive::Field(Field::Id, rest),
        "name" => Directive::Field(Field::Name, rest),
        "address" => Directive::Field(Field::Address, rest),
        _ => Directive::Other,
    }
}

fn first_token(rest: &str) -> Option<&str> {
    rest.split_whitespace().next()
}
