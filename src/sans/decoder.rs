//! The sentence decoder.

use tartan_bitfield::bitfield;

#[cfg(feature = "stats")]
use super::fix::Stats;
use super::{
    check::{self, ChecksumError, FRAME_END, FRAME_START},
    clock::{Clock, NoClock},
    fix::{CrossTrack, DateTime, FixKind, FixSet, Position, Recommended, Velocity},
    term::{SentenceType, Term},
};

bitfield! {
    struct Freshness(u8) {
        [0] position,
        [1] velocity,
        [2] cross_track,
        [3] recommended,
    }
}

impl Freshness {
    fn is_fresh(&self, kind: FixKind) -> bool {
        match kind {
            FixKind::Position => self.position(),
            FixKind::Velocity => self.velocity(),
            FixKind::CrossTrack => self.cross_track(),
            FixKind::Recommended => self.recommended(),
        }
    }

    fn mark(&mut self, kind: FixKind, value: bool) {
        match kind {
            FixKind::Position => self.set_position(value),
            FixKind::Velocity => self.set_velocity(value),
            FixKind::CrossTrack => self.set_cross_track(value),
            FixKind::Recommended => self.set_recommended(value),
        }
    }
}

/// A byte-at-a-time decoder for NMEA-0183 sentences and Trimble frames.
///
/// Feed bytes with [`feed`](Self::feed) or [`advance`](Self::advance), then
/// read the published groups at any time. Each call does a bounded amount of
/// work and never allocates.
///
/// A decoder must not be fed from two execution contexts at once.
#[derive(Debug)]
pub struct Decoder<C = NoClock> {
    term: Term,
    term_number: u8,
    parity: u8,
    sum: u16,
    is_checksum_term: bool,
    // Set once the checksum term has been evaluated, until the next start marker.
    is_closed: bool,
    sentence_type: SentenceType,

    pending: FixSet,
    published: FixSet,
    stamps: [Option<u32>; FixKind::COUNT],
    fresh: Freshness,

    #[cfg(feature = "stats")]
    stats: Stats,
    clock: C,
}

impl Decoder {
    /// Create a decoder without a time source.
    pub fn new() -> Self {
        Self::with_clock(NoClock)
    }
}

impl<C: Clock + Default> Default for Decoder<C> {
    fn default() -> Self {
        Self::with_clock(C::default())
    }
}

impl<C: Clock> Decoder<C> {
    /// Create a decoder stamping commits with a clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            term: Term::default(),
            term_number: 0,
            parity: 0,
            sum: 0,
            is_checksum_term: false,
            is_closed: true,
            sentence_type: SentenceType::Other,
            pending: FixSet::default(),
            published: FixSet::default(),
            stamps: [None; FixKind::COUNT],
            fresh: Freshness(0),
            #[cfg(feature = "stats")]
            stats: Stats::default(),
            clock,
        }
    }

    /// Process a single byte.
    ///
    /// Returns `true` if this byte completed a sentence that passed its
    /// checksum.
    pub fn feed(&mut self, byte: u8) -> bool {
        self.advance(byte).is_some()
    }

    /// Process a single byte.
    ///
    /// Returns the type of the sentence this byte completed, if it passed its
    /// checksum.
    pub fn advance(&mut self, byte: u8) -> Option<SentenceType> {
        #[cfg(feature = "stats")]
        {
            self.stats.characters = self.stats.characters.wrapping_add(1);
        }

        match byte {
            FRAME_START => {
                self.begin();
                self.sum = 0;
                None
            }
            b'$' | b'@' => {
                self.begin();
                self.add_to_sum(byte);
                None
            }
            0 | 20 | b' ' => {
                self.add_to_sum(byte);
                None
            }
            b',' | b':' | b'*' | b'\r' | b'\n' => {
                if byte == b',' {
                    self.parity ^= byte;
                }
                self.add_to_sum(byte);

                let verified = self.complete_term();
                self.next_term(byte == b'*');
                verified
            }
            FRAME_END if !self.is_checksum_term => {
                match check::split_trailer(self.term.as_slice()) {
                    Some((len, found)) => self.complete_frame(len, found),
                    None => {
                        self.push(byte);
                        None
                    }
                }
            }
            _ => {
                self.push(byte);
                None
            }
        }
    }

    /// The last published `GGA` group.
    pub fn position(&self) -> &Position {
        &self.published.position
    }

    /// The last published `VTG` group.
    pub fn velocity(&self) -> &Velocity {
        &self.published.velocity
    }

    /// The last published cross-track error group.
    pub fn cross_track(&self) -> &CrossTrack {
        &self.published.cross_track
    }

    /// The last published `RMC` group.
    pub fn recommended(&self) -> &Recommended {
        &self.published.recommended
    }

    /// UTC time of the last `GGA` group, as `hhmmss.ss`.
    pub fn time(&self) -> Option<f64> {
        self.published.position.time
    }

    /// UTC date of the last `RMC` group, as `ddmmyy`.
    pub fn date(&self) -> Option<u32> {
        self.published.recommended.date
    }

    /// Latitude of the last `GGA` group in decimal degrees.
    pub fn latitude(&self) -> Option<f64> {
        self.published.position.latitude
    }

    /// Longitude of the last `GGA` group in decimal degrees.
    pub fn longitude(&self) -> Option<f64> {
        self.published.position.longitude
    }

    /// Altitude of the last `GGA` group in metres.
    pub fn altitude(&self) -> Option<f32> {
        self.published.position.altitude
    }

    /// Fix quality code of the last `GGA` group.
    pub fn quality(&self) -> Option<u8> {
        self.published.position.quality
    }

    /// Course of the last `VTG` group in degrees.
    pub fn course(&self) -> Option<f32> {
        self.published.velocity.course
    }

    /// Speed of the last `VTG` group in knots.
    pub fn speed(&self) -> Option<f32> {
        self.published.velocity.speed
    }

    /// Cross-track error of the last published group in metres.
    pub fn xte(&self) -> Option<f32> {
        self.published.cross_track.xte
    }

    /// Date and time of the last published `RMC` group, split into parts.
    pub fn datetime(&self) -> Option<DateTime> {
        let r = &self.published.recommended;
        Some(DateTime::from_parts(r.date?, r.time?))
    }

    /// Clock reading at the last commit of a group.
    pub fn last_fix(&self, kind: FixKind) -> Option<u32> {
        self.stamps[kind.index()]
    }

    /// Milliseconds elapsed since the last commit of a group.
    pub fn fix_age(&self, kind: FixKind) -> Option<u32> {
        let stamp = self.last_fix(kind)?;
        Some(self.clock.millis().wrapping_sub(stamp))
    }

    /// Check whether a group was committed since the last check.
    ///
    /// The flag is cleared by reading it. Two commits between reads are
    /// reported once.
    pub fn take_new(&mut self, kind: FixKind) -> bool {
        let fresh = self.fresh.is_fresh(kind);
        self.fresh.mark(kind, false);
        fresh
    }

    /// Counters of decoder activity.
    ///
    /// _Requires Cargo feature `stats`._
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Reset term state at a sentence start marker or frame start, abandoning
    /// any sentence in progress. The type is decided again by the next term.
    fn begin(&mut self) {
        self.term_number = 0;
        self.term.clear();
        self.parity = 0;
        self.sentence_type = SentenceType::Other;
        self.is_checksum_term = false;
        self.is_closed = false;
        self.pending = FixSet::default();
    }

    fn next_term(&mut self, is_checksum_term: bool) {
        self.term_number = self.term_number.saturating_add(1);
        self.term.clear();
        self.is_checksum_term = is_checksum_term;
    }

    fn push(&mut self, byte: u8) {
        self.term.push(byte);
        if !self.is_checksum_term {
            self.parity ^= byte;
        }
        self.add_to_sum(byte);
    }

    fn add_to_sum(&mut self, byte: u8) {
        self.sum = self.sum.wrapping_add(byte.into());
    }

    /// Process a completed term.
    fn complete_term(&mut self) -> Option<SentenceType> {
        if self.is_closed {
            return None;
        }

        let term = self.term.as_slice();

        if self.is_checksum_term {
            let result = check::verify_parity(term, self.parity);
            return self.settle(result);
        }

        if self.term_number == 0 {
            self.sentence_type = SentenceType::classify(term);

            #[cfg(feature = "log")]
            if self.sentence_type == SentenceType::Other {
                log::trace!("skipping sentence {:?}", core::str::from_utf8(term));
            }

            return None;
        }

        if !term.is_empty() {
            self.sentence_type
                .extract(self.term_number, term, &mut self.pending);
        }

        None
    }

    /// Process a frame terminator following a trailer. The term holds `len`
    /// payload bytes ahead of the trailer.
    fn complete_frame(&mut self, len: usize, found: u16) -> Option<SentenceType> {
        let verified = match check::verify_frame(self.sum, found) {
            Ok(()) => {
                self.term.truncate(len);
                self.complete_term();

                // The frame sum stands in for the checksum term.
                self.is_checksum_term = true;
                self.settle(Ok(()))
            }
            Err(err) => self.settle(Err(err)),
        };

        self.next_term(false);
        verified
    }

    /// Close the current sentence, committing its fields if the checksum
    /// passed.
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    fn settle(&mut self, result: Result<(), ChecksumError>) -> Option<SentenceType> {
        if self.is_closed {
            return None;
        }
        self.is_closed = true;

        match result {
            Ok(()) => {
                #[cfg(feature = "stats")]
                {
                    self.stats.passed = self.stats.passed.wrapping_add(1);
                }

                if let Some(kind) = self.sentence_type.kind() {
                    self.commit(kind);
                }

                Some(self.sentence_type)
            }
            Err(err) => {
                #[cfg(feature = "stats")]
                {
                    self.stats.failed = self.stats.failed.wrapping_add(1);
                }

                #[cfg(feature = "log")]
                log::debug!("rejected {:?} sentence: {err}", self.sentence_type);

                None
            }
        }
    }

    fn commit(&mut self, kind: FixKind) {
        self.published.commit(kind, &self.pending);
        self.stamps[kind.index()] = Some(self.clock.millis());

        self.fresh.mark(kind, true);

        #[cfg(feature = "log")]
        log::trace!("committed {kind:?}");
    }
}
