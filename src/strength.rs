// Match-strength classification for a single CSV record.
//
// Mirrors the original pfb_dnsbl_prune MatchStrength_t enum: total order
// NOTSET < WEAK < FULL, plus REGEX (bypasses the trie) and BOGUS (malformed,
// never inserted).

/// Per-record classification controlling trie dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum MatchStrength {
    Bogus = -2,
    NotSet = -1,
    Weak = 0,
    Full = 1,
    Regex = 2,
}

impl MatchStrength {
    /// Decode the single ASCII digit found in field index 6 of a CSV line.
    /// A missing field means `Weak` by default; any other length or digit is
    /// `Bogus`.
    pub fn from_field(field: Option<&[u8]>) -> MatchStrength {
        match field {
            None => MatchStrength::Weak,
            Some(bytes) if bytes.is_empty() => MatchStrength::Weak,
            Some(bytes) if bytes.len() == 1 => match bytes[0] {
                b'0' => MatchStrength::Weak,
                b'1' => MatchStrength::Full,
                b'2' => MatchStrength::Regex,
                _ => MatchStrength::Bogus,
            },
            Some(_) => MatchStrength::Bogus,
        }
    }

    /// Whether this strength is one the trie accepts as a terminal record.
    pub fn is_insertable(self) -> bool {
        matches!(self, MatchStrength::Weak | MatchStrength::Full)
    }
}
