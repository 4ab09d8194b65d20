//! RPM version ordering (`rpmvercmp`)
//!
//! Versions are compared segment by segment. A segment is a maximal run of
//! ASCII digits or ASCII letters; every other character except `~` and `^`
//! only separates segments and never takes part in the ordering.
//!
//! - numeric segments compare by magnitude, leading zeros ignored
//! - a numeric segment is always newer than an alphabetic one
//! - `~` sorts before anything, including the end of the version (`1.0~rc1 < 1.0`)
//! - `^` sorts before anything except the end of the version (`1.0 < 1.0^git1 < 1.0.1`)
//! - when all segments match, the version with content left over is newer

use std::cmp::Ordering;

/// Read position inside one of the two versions being compared.
///
/// Only ASCII bytes are significant, so scanning UTF-8 bytes gives the same
/// result as scanning characters: every byte of a multi-byte character is a
/// separator.
struct Cursor<'a> {
    rest: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(version: &'a str) -> Self {
        Self {
            rest: version.as_bytes(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.rest.first().copied()
    }

    fn bump(&mut self) {
        self.rest = &self.rest[1..];
    }

    fn skip_separators(&mut self) {
        let skip = self
            .rest
            .iter()
            .take_while(|&&c| !is_significant(c))
            .count();
        self.rest = &self.rest[skip..];
    }

    /// Consume the digit run (`numeric`) or letter run at the cursor.
    /// The run is empty when the cursor sits on the other kind.
    fn take_segment(&mut self, numeric: bool) -> &'a [u8] {
        let len = self
            .rest
            .iter()
            .take_while(|c| {
                if numeric {
                    c.is_ascii_digit()
                } else {
                    c.is_ascii_alphabetic()
                }
            })
            .count();
        let (segment, rest) = self.rest.split_at(len);
        self.rest = rest;
        segment
    }
}

fn is_significant(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'~' || c == b'^'
}

fn strip_leading_zeros(segment: &[u8]) -> &[u8] {
    let zeros = segment.iter().take_while(|&&c| c == b'0').count();
    &segment[zeros..]
}

/// Compare two version strings the way `rpmvercmp` does.
///
/// `Greater` means `a` is newer than `b`. The function is total: every pair
/// of strings, including empty ones, yields an ordering.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use pkg_versions::version::compare;
///
/// assert_eq!(compare("1.9", "1.10"), Ordering::Less);
/// assert_eq!(compare("1.0~rc1", "1.0"), Ordering::Less);
/// assert_eq!(compare("1.0", "1.00"), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut one = Cursor::new(a);
    let mut two = Cursor::new(b);

    loop {
        one.skip_separators();
        two.skip_separators();

        let (left, right) = (one.peek(), two.peek());

        if left == Some(b'~') || right == Some(b'~') {
            if left != Some(b'~') {
                return Ordering::Greater;
            }
            if right != Some(b'~') {
                return Ordering::Less;
            }
            one.bump();
            two.bump();
            continue;
        }

        // Like `~`, except that a version which already ended is older.
        if left == Some(b'^') || right == Some(b'^') {
            if left.is_none() {
                return Ordering::Less;
            }
            if right.is_none() {
                return Ordering::Greater;
            }
            if left != Some(b'^') {
                return Ordering::Greater;
            }
            if right != Some(b'^') {
                return Ordering::Less;
            }
            one.bump();
            two.bump();
            continue;
        }

        let (Some(first), Some(_)) = (left, right) else {
            break;
        };

        let numeric = first.is_ascii_digit();
        let mut segment_a = one.take_segment(numeric);
        let mut segment_b = two.take_segment(numeric);

        // Different kinds at the same position: digits beat letters.
        if segment_b.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        if numeric {
            segment_a = strip_leading_zeros(segment_a);
            segment_b = strip_leading_zeros(segment_b);

            match segment_a.len().cmp(&segment_b.len()) {
                Ordering::Equal => {}
                longer_wins => return longer_wins,
            }
        }

        match segment_a.cmp(segment_b) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
    }

    match (one.peek(), two.peek()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), _) => Ordering::Greater,
    }
}

/// `compare` mapped onto the conventional `-1`, `0`, `1` verdicts.
pub fn vercmp(a: &str, b: &str) -> i32 {
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
