//! PropertyPath parsing and formatting.
//!
//! Grammar (simple, renderer-agnostic):
//!   segment(.segment)*   where segment = name | name[index]
//! - '.' separates segments
//! - a segment may carry one bracketed index selecting into a list property
//!   Examples:
//!   "alpha"            -> segments=["alpha"]
//!   "scale.x"          -> segments=["scale", "x"]
//!   "children[2].rot"  -> segments=["children" at 2, "rot"]
//!
//! PropertyPath is intentionally simple and string-based; authored keyframe
//! maps are keyed by it and hosts resolve it against their property trees.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step of a path: a property name plus an optional list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub name: String,
    pub index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    /// Ordered segments from the tree root to the animated leaf.
    pub segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Construct a PropertyPath from components.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Parse a path string according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("empty property path".to_string());
        }
        let mut segments = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err("invalid property path: empty segment".to_string());
            }
            if part.chars().any(char::is_whitespace) {
                return Err("invalid property path: segment contains whitespace".to_string());
            }
            segments.push(parse_segment(part)?);
        }
        Ok(PropertyPath { segments })
    }

    /// Iterate over all segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Return the final segment (the animated leaf).
    pub fn leaf(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

fn parse_segment(part: &str) -> Result<PathSegment, String> {
    match part.find('[') {
        None => {
            if part.contains(']') {
                return Err(format!("invalid property path: stray ']' in '{part}'"));
            }
            Ok(PathSegment {
                name: part.to_string(),
                index: None,
            })
        }
        Some(open) => {
            let name = &part[..open];
            if name.is_empty() {
                return Err("invalid property path: empty segment name".to_string());
            }
            let rest = &part[open + 1..];
            let close = rest
                .find(']')
                .ok_or_else(|| format!("invalid property path: unterminated index in '{part}'"))?;
            if close + 1 != rest.len() {
                return Err(format!(
                    "invalid property path: trailing characters after index in '{part}'"
                ));
            }
            let body = &rest[..close];
            let index: usize = body
                .parse()
                .map_err(|_| format!("invalid property path: bad index '{body}'"))?;
            Ok(PathSegment {
                name: name.to_string(),
                index: Some(index),
            })
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.name, i),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

impl FromStr for PropertyPath {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyPath::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for PropertyPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PropertyPath {
    fn deserialize<D>(deserializer: D) -> Result<PropertyPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PropertyPath::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let p = PropertyPath::parse("alpha").unwrap();
        assert_eq!(p.segments.len(), 1);
        assert_eq!(p.segments[0].name, "alpha");
        assert_eq!(p.segments[0].index, None);
        assert_eq!(p.to_string(), "alpha");
    }

    #[test]
    fn parse_nested() {
        let p = PropertyPath::parse("scale.x").unwrap();
        assert_eq!(p.segments.len(), 2);
        assert_eq!(p.segments[0].name, "scale");
        assert_eq!(p.segments[1].name, "x");
        assert_eq!(p.to_string(), "scale.x");
    }

    #[test]
    fn parse_indexed() {
        let p = PropertyPath::parse("children[2].alpha").unwrap();
        assert_eq!(p.segments.len(), 2);
        assert_eq!(p.segments[0].name, "children");
        assert_eq!(p.segments[0].index, Some(2));
        assert_eq!(p.segments[1].index, None);
        assert_eq!(p.to_string(), "children[2].alpha");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(PropertyPath::parse("").is_err());
        assert!(PropertyPath::parse(".alpha").is_err());
        assert!(PropertyPath::parse("alpha.").is_err());
        assert!(PropertyPath::parse("a..b").is_err());
        assert!(PropertyPath::parse("with space").is_err());
        assert!(PropertyPath::parse("x[").is_err());
        assert!(PropertyPath::parse("x[]").is_err());
        assert!(PropertyPath::parse("x[1.5]").is_err());
        assert!(PropertyPath::parse("x[2]y").is_err());
        assert!(PropertyPath::parse("x[2][3]").is_err());
        assert!(PropertyPath::parse("[2]").is_err());
        assert!(PropertyPath::parse("x]").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let p = PropertyPath::parse("glow.children[0].alpha").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"glow.children[0].alpha\"");
        let back: PropertyPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
