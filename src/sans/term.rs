//! Term buffering, sentence classification and field extraction.

use tinyvec::ArrayVec;

use super::{
    convert::{parse_decimal, parse_degrees, parse_integer},
    fix::{FixKind, FixSet},
};

/// Capacity of the term buffer, counting one byte reserved for a terminator.
pub const TERM_CAPACITY: usize = 20;

/// A fixed-capacity buffer holding the term under construction.
///
/// Bytes pushed beyond capacity are dropped. An over-long term is most likely
/// corrupt, and will fail its checksum regardless.
#[derive(Debug, Default, Clone)]
pub struct Term(ArrayVec<[u8; TERM_CAPACITY - 1]>);

impl Term {
    /// Append a byte, if space remains.
    pub fn push(&mut self, byte: u8) {
        let _ = self.0.try_push(byte);
    }

    /// Shorten the term, keeping the first `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

/// The type of a sentence, decided by its first term.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// `GPGGA`: time, position, fix quality and altitude.
    Gga,
    /// `GPVTG`: course and speed.
    Vtg,
    /// `GPXTE`: cross-track error.
    Xte,
    /// `ROXTE`: cross-track error in a Trimble binary frame.
    TrimbleXte,
    /// `GPRMC`: time, date, position, speed and course.
    Rmc,
    /// Any unrecognised sentence, consumed without effect.
    #[default]
    Other,
}

impl SentenceType {
    /// Classify a sentence by its first term.
    ///
    /// Terms must equal a known sentence identifier exactly; a term merely
    /// starting with one is not a match.
    pub fn classify(term: &[u8]) -> Self {
        match term {
            #[cfg(feature = "gga")]
            b"GPGGA" => Self::Gga,
            #[cfg(feature = "vtg")]
            b"GPVTG" => Self::Vtg,
            #[cfg(feature = "xte")]
            b"GPXTE" => Self::Xte,
            #[cfg(feature = "trimble")]
            b"ROXTE" => Self::TrimbleXte,
            #[cfg(feature = "rmc")]
            b"GPRMC" => Self::Rmc,
            _ => Self::Other,
        }
    }

    /// The group of fields this sentence type publishes.
    pub fn kind(self) -> Option<FixKind> {
        match self {
            Self::Gga => Some(FixKind::Position),
            Self::Vtg => Some(FixKind::Velocity),
            Self::Xte | Self::TrimbleXte => Some(FixKind::CrossTrack),
            Self::Rmc => Some(FixKind::Recommended),
            Self::Other => None,
        }
    }

    /// Extract a non-empty payload term into the shadow copy of this type's
    /// fields.
    ///
    /// Terms at positions without a field of interest are ignored.
    pub(super) fn extract(self, number: u8, term: &[u8], pending: &mut FixSet) {
        let south = || term.first() == Some(&b'S');
        let west = || term.first() == Some(&b'W');

        match self {
            Self::Gga => {
                let p = &mut pending.position;
                match number {
                    1 => p.time = Some(parse_decimal(term)),
                    2 => p.latitude = Some(parse_degrees(term)),
                    3 if south() => p.latitude = p.latitude.map(|v| -v),
                    4 => p.longitude = Some(parse_degrees(term)),
                    5 if west() => p.longitude = p.longitude.map(|v| -v),
                    6 => p.quality = Some(u8::try_from(parse_integer(term)).unwrap_or(0)),
                    9 => p.altitude = Some(parse_decimal(term) as f32),
                    _ => {}
                }
            }
            Self::Vtg => {
                let v = &mut pending.velocity;
                match number {
                    1 => v.course = Some(parse_decimal(term) as f32),
                    5 => v.speed = Some(parse_decimal(term) as f32),
                    _ => {}
                }
            }
            Self::Xte => {
                if number == 3 {
                    pending.cross_track.xte = Some(parse_decimal(term) as f32);
                }
            }
            Self::TrimbleXte => {
                if number == 1 {
                    pending.cross_track.xte = Some(parse_decimal(term) as f32);
                }
            }
            Self::Rmc => {
                let r = &mut pending.recommended;
                match number {
                    1 => r.time = Some(parse_decimal(term)),
                    2 => r.valid = Some(term.first() == Some(&b'A')),
                    3 => r.latitude = Some(parse_degrees(term)),
                    4 if south() => r.latitude = r.latitude.map(|v| -v),
                    5 => r.longitude = Some(parse_degrees(term)),
                    6 if west() => r.longitude = r.longitude.map(|v| -v),
                    7 => r.speed = Some(parse_decimal(term) as f32),
                    8 => r.course = Some(parse_decimal(term) as f32),
                    9 => r.date = Some(u32::try_from(parse_integer(term)).unwrap_or(0)),
                    _ => {}
                }
            }
            Self::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(all(
        feature = "gga",
        feature = "vtg",
        feature = "xte",
        feature = "trimble",
        feature = "rmc"
    ))]
    fn classify_by_exact_match() {
        assert_eq!(SentenceType::classify(b"GPGGA"), SentenceType::Gga);
        assert_eq!(SentenceType::classify(b"GPVTG"), SentenceType::Vtg);
        assert_eq!(SentenceType::classify(b"GPXTE"), SentenceType::Xte);
        assert_eq!(SentenceType::classify(b"ROXTE"), SentenceType::TrimbleXte);
        assert_eq!(SentenceType::classify(b"GPRMC"), SentenceType::Rmc);

        assert_eq!(SentenceType::classify(b"GPGGAX"), SentenceType::Other);
        assert_eq!(SentenceType::classify(b"GPGG"), SentenceType::Other);
        assert_eq!(SentenceType::classify(b"gpgga"), SentenceType::Other);
        assert_eq!(SentenceType::classify(b"GPGSV"), SentenceType::Other);
        assert_eq!(SentenceType::classify(b""), SentenceType::Other);
    }

    #[test]
    fn term_drops_overflow() {
        let mut term = Term::default();
        for b in b"0123456789012345678901234" {
            term.push(*b);
        }
        assert_eq!(term.as_slice(), b"0123456789012345678");
        assert_eq!(term.as_slice().len(), TERM_CAPACITY - 1);

        term.truncate(4);
        assert_eq!(term.as_slice(), b"0123");
    }

    #[test]
    fn hemisphere_negates_coordinate() {
        let mut pending = FixSet::default();
        SentenceType::Gga.extract(2, b"4807.038", &mut pending);
        SentenceType::Gga.extract(3, b"S", &mut pending);
        SentenceType::Gga.extract(4, b"01131.000", &mut pending);
        SentenceType::Gga.extract(5, b"E", &mut pending);

        let latitude = pending.position.latitude.unwrap();
        let longitude = pending.position.longitude.unwrap();
        assert!((latitude + 48.1173).abs() < 1e-4);
        assert!((longitude - 11.5167).abs() < 1e-4);
    }

    #[test]
    fn unlisted_terms_are_ignored() {
        let mut pending = FixSet::default();
        SentenceType::Gga.extract(7, b"08", &mut pending);
        SentenceType::Gga.extract(8, b"0.9", &mut pending);
        SentenceType::Vtg.extract(3, b"034.4", &mut pending);
        SentenceType::Other.extract(1, b"123", &mut pending);

        assert_eq!(pending.position, Default::default());
        assert_eq!(pending.velocity, Default::default());
    }
}
