//! Parsing of the `(pulses,steps[,rotation])` Euclidean notation.

use super::core::Pattern;
use super::euclidean::generate;
use anyhow::{anyhow, bail, Result};
use std::fmt;
use std::iter::Peekable;

/// Generation parameters written as `(3,8)` or `(3,8,2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuclidParams {
    pub pulses: i64,
    pub steps: i64,
    pub rotation: i64,
}

impl EuclidParams {
    pub fn new(pulses: i64, steps: i64, rotation: i64) -> Self {
        Self {
            pulses,
            steps,
            rotation,
        }
    }

    /// Parse `(k,n)`, `(k,n,r)` or the same without parentheses.
    /// Whitespace is ignored and the rotation may be negative.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let inner = match input.strip_prefix('(') {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or_else(|| anyhow!("Expected ')' to close Euclidean parameters"))?,
            None => input,
        };
        let mut chars = inner.chars().filter(|c| !c.is_whitespace()).peekable();

        let pulses_str = take_number(&mut chars, false);
        if pulses_str.is_empty() {
            bail!("Expected number for Euclidean pulses");
        }

        if chars.next() != Some(',') {
            bail!("Expected ',' in Euclidean parameters (k,n)");
        }

        let steps_str = take_number(&mut chars, false);
        if steps_str.is_empty() {
            bail!("Expected number for Euclidean steps");
        }

        let rotation = match chars.next() {
            None => 0,
            Some(',') => {
                let rotation_str = take_number(&mut chars, true);
                if rotation_str.is_empty() || rotation_str == "-" {
                    bail!("Expected number for Euclidean rotation");
                }
                rotation_str.parse()?
            }
            Some(c) => bail!("Unexpected '{}' in Euclidean parameters", c),
        };

        if let Some(c) = chars.next() {
            bail!("Unexpected '{}' after Euclidean rotation", c);
        }

        let pulses: i64 = pulses_str.parse()?;
        let steps: i64 = steps_str.parse()?;

        if steps == 0 {
            bail!("Euclidean steps must be > 0");
        }

        Ok(Self::new(pulses, steps, rotation))
    }

    pub fn pattern(&self) -> Pattern {
        generate(self.pulses, self.steps, self.rotation)
    }
}

impl fmt::Display for EuclidParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rotation == 0 {
            write!(f, "({},{})", self.pulses, self.steps)
        } else {
            write!(f, "({},{},{})", self.pulses, self.steps, self.rotation)
        }
    }
}

fn take_number<I: Iterator<Item = char>>(chars: &mut Peekable<I>, signed: bool) -> String {
    let mut number = String::new();
    if signed && chars.peek() == Some(&'-') {
        number.push('-');
        chars.next();
    }
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        number.push(c);
    }
    number
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(EuclidParams::parse("(3,8)").unwrap(), EuclidParams::new(3, 8, 0));
        assert_eq!(EuclidParams::parse("5,8").unwrap(), EuclidParams::new(5, 8, 0));
    }

    #[test]
    fn test_parse_with_rotation() {
        assert_eq!(
            EuclidParams::parse("( 3, 8, 2 )").unwrap(),
            EuclidParams::new(3, 8, 2)
        );
        assert_eq!(
            EuclidParams::parse("(2,5,-1)").unwrap(),
            EuclidParams::new(2, 5, -1)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(EuclidParams::parse("(3,8").is_err());
        assert!(EuclidParams::parse("3,8)").is_err());
        assert!(EuclidParams::parse("(38)").is_err());
        assert!(EuclidParams::parse("(,8)").is_err());
        assert!(EuclidParams::parse("(3,)").is_err());
        assert!(EuclidParams::parse("(3,8,)").is_err());
        assert!(EuclidParams::parse("(3,8,-)").is_err());
        assert!(EuclidParams::parse("(3,8,1,2)").is_err());

        let err = EuclidParams::parse("(3,0)").unwrap_err();
        assert!(err.to_string().contains("steps must be > 0"));
    }

    #[test]
    fn test_display() {
        assert_eq!(EuclidParams::new(3, 8, 0).to_string(), "(3,8)");
        assert_eq!(EuclidParams::new(3, 8, -2).to_string(), "(3,8,-2)");
    }

    #[test]
    fn test_pattern() {
        let params = EuclidParams::parse("(3,8)").unwrap();
        assert_eq!(params.pattern().to_string(), "x..x..x.");
    }
}
