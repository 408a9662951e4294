//! Published field groups.
//!
//! Each sentence family publishes one group. A group is replaced as a whole
//! when a sentence of its family passes the checksum; fields absent from that
//! sentence read as `None`.

/// Miles per hour in one knot.
pub const MPH_PER_KNOT: f32 = 1.150_779_5;
/// Metres per second in one knot.
pub const MS_PER_KNOT: f32 = 0.514_444_4;
/// Kilometres per hour in one knot.
pub const KMH_PER_KNOT: f32 = 1.852;

/// A group of published fields, one per recognised sentence family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixKind {
    /// Position, altitude and quality (`GGA`).
    Position,
    /// Course and speed (`VTG`).
    Velocity,
    /// Cross-track error (`XTE` or a Trimble frame).
    CrossTrack,
    /// Recommended minimum data (`RMC`).
    Recommended,
}

impl FixKind {
    pub(super) const COUNT: usize = 4;

    pub(super) fn index(self) -> usize {
        match self {
            Self::Position => 0,
            Self::Velocity => 1,
            Self::CrossTrack => 2,
            Self::Recommended => 3,
        }
    }
}

/// Position fix from a `GGA` sentence.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    /// UTC time as `hhmmss.ss`.
    pub time: Option<f64>,
    /// Latitude in decimal degrees, negative to the south.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, negative to the west.
    pub longitude: Option<f64>,
    /// Altitude above mean sea level in metres.
    pub altitude: Option<f32>,
    /// Fix quality code (0 = invalid, 1 = GPS, 2 = DGPS, ...).
    pub quality: Option<u8>,
}

impl Position {
    /// Altitude in centimetres.
    pub fn altitude_cm(&self) -> Option<i32> {
        self.altitude.map(|m| (m * 100.0) as i32)
    }
}

/// Course and speed from a `VTG` sentence.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// True course over ground in degrees.
    pub course: Option<f32>,
    /// Speed over ground in knots.
    pub speed: Option<f32>,
}

impl Velocity {
    /// Speed in miles per hour.
    pub fn speed_mph(&self) -> Option<f32> {
        self.speed.map(|k| k * MPH_PER_KNOT)
    }

    /// Speed in metres per second.
    pub fn speed_ms(&self) -> Option<f32> {
        self.speed.map(|k| k * MS_PER_KNOT)
    }

    /// Speed in kilometres per hour.
    pub fn speed_kmh(&self) -> Option<f32> {
        self.speed.map(|k| k * KMH_PER_KNOT)
    }
}

/// Cross-track error from an `XTE` sentence or a Trimble frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CrossTrack {
    /// Cross-track error in metres.
    pub xte: Option<f32>,
}

impl CrossTrack {
    /// Cross-track error in centimetres.
    pub fn xte_cm(&self) -> Option<i32> {
        self.xte.map(|m| (m * 100.0) as i32)
    }
}

/// Recommended minimum data from an `RMC` sentence.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Recommended {
    /// UTC time as `hhmmss.ss`.
    pub time: Option<f64>,
    /// Receiver status, `true` when the receiver reports valid data.
    pub valid: Option<bool>,
    /// Latitude in decimal degrees, negative to the south.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, negative to the west.
    pub longitude: Option<f64>,
    /// Speed over ground in knots.
    pub speed: Option<f32>,
    /// True course over ground in degrees.
    pub course: Option<f32>,
    /// UTC date as `ddmmyy`.
    pub date: Option<u32>,
}

/// Shadow or published copies of every group.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct FixSet {
    pub position: Position,
    pub velocity: Velocity,
    pub cross_track: CrossTrack,
    pub recommended: Recommended,
}

impl FixSet {
    /// Replace one group with that of another set.
    pub fn commit(&mut self, kind: FixKind, pending: &FixSet) {
        match kind {
            FixKind::Position => self.position = pending.position,
            FixKind::Velocity => self.velocity = pending.velocity,
            FixKind::CrossTrack => self.cross_track = pending.cross_track,
            FixKind::Recommended => self.recommended = pending.recommended,
        }
    }
}

/// A calendar date and time of day, split into parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    /// Four-digit year.
    pub year: u16,
    /// Month, 1 to 12.
    pub month: u8,
    /// Day of the month.
    pub day: u8,
    /// Hour of the day, 0 to 23.
    pub hour: u8,
    /// Minute, 0 to 59.
    pub minute: u8,
    /// Second, 0 to 59.
    pub second: u8,
    /// Hundredths of a second.
    pub hundredths: u8,
}

impl DateTime {
    /// Split a `ddmmyy` date and a `hhmmss.ss` time.
    ///
    /// Two-digit years after 80 fall in the 1900s.
    pub fn from_parts(date: u32, time: f64) -> Self {
        let year = (date % 100) as u16;
        let year = year + if year > 80 { 1900 } else { 2000 };

        let t = libm::round(time * 100.0) as u32;

        Self {
            year,
            month: (date / 100 % 100) as u8,
            day: (date / 10000 % 100) as u8,
            hour: (t / 1_000_000 % 100) as u8,
            minute: (t / 10_000 % 100) as u8,
            second: (t / 100 % 100) as u8,
            hundredths: (t % 100) as u8,
        }
    }
}

/// Counters of decoder activity.
///
/// _Requires Cargo feature `stats`._
#[cfg(feature = "stats")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Bytes fed to the decoder.
    pub characters: u32,
    /// Sentences that passed their checksum.
    pub passed: u32,
    /// Sentences that failed their checksum.
    pub failed: u32,
}
