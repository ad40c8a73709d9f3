//! Jeepney route code type.

use std::fmt;

/// A validated short jeepney route code.
///
/// Route codes are one to three ASCII digits with an optional trailing
/// letter (e.g., "4", "12C", "62B"). The letter distinguishes variants
/// of a numbered line and is stored uppercase.
///
/// Plenty of line labels seen in the wild are not route codes ("MRT-3",
/// "Line 1"). `RouteCode::parse` returns `None` for these rather than an
/// error, since they aren't invalid, just not jeepney-shaped.
///
/// # Examples
///
/// ```
/// use jeepney_planner::domain::RouteCode;
///
/// let code = RouteCode::parse("12c").unwrap();
/// assert_eq!(code.as_str(), "12C");
///
/// assert!(RouteCode::parse("MRT-3").is_none());
/// assert!(RouteCode::parse("1234").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteCode {
    bytes: [u8; 4],
    len: u8,
}

impl RouteCode {
    /// Parse a route code, ignoring surrounding whitespace and letter case.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if !(1..=3).contains(&digits) {
            return None;
        }

        let rest = &bytes[digits..];
        match rest {
            [] => {}
            [letter] if letter.is_ascii_alphabetic() => {}
            _ => return None,
        }

        let mut out = [0u8; 4];
        for (slot, b) in out.iter_mut().zip(bytes) {
            *slot = b.to_ascii_uppercase();
        }

        Some(RouteCode {
            bytes: out,
            len: bytes.len() as u8,
        })
    }

    /// Returns the route code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits and uppercase letters
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }

    /// Returns the variant letter, if any.
    pub fn variant(&self) -> Option<char> {
        let last = self.bytes[self.len as usize - 1];
        last.is_ascii_alphabetic().then_some(last as char)
    }
}

impl fmt::Debug for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteCode({})", self.as_str())
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
