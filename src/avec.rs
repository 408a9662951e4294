//! Convenience drivers for common decoding patterns.
//!
//! The functions in this module feed a [`Decoder`] from a slice or reader,
//! publishing every committed group to a [`FromFixes`] receiver.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use crate::sans::{Clock, CrossTrack, Decoder, Position, Recommended, SentenceType, Velocity};

/// Receive groups as their sentences pass the checksum.
///
/// The default implementation of each method ignores received groups.
///
/// # Example
///
/// ```
/// #[derive(Default)]
/// struct Track {
///     points: Vec<(f64, f64)>,
/// }
///
/// impl FromFixes for Track {
///     fn add_position(&mut self, position: &Position) {
///         if let (Some(lat), Some(lon)) = (position.latitude, position.longitude) {
///             self.points.push((lat, lon));
///         }
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait FromFixes {
    /// Add a position group from a `GGA` sentence.
    fn add_position(&mut self, position: &Position) {}
    /// Add a velocity group from a `VTG` sentence.
    fn add_velocity(&mut self, velocity: &Velocity) {}
    /// Add a cross-track error group from an `XTE` sentence or Trimble frame.
    fn add_cross_track(&mut self, cross_track: &CrossTrack) {}
    /// Add a recommended minimum group from an `RMC` sentence.
    fn add_recommended(&mut self, recommended: &Recommended) {}
    /// Note a valid sentence of an unrecognised type.
    fn add_other(&mut self) {}
}

/// Feed one byte, publishing the group it completed, if any.
fn publish<C: Clock>(decoder: &mut Decoder<C>, byte: u8, o: &mut impl FromFixes) -> bool {
    let Some(sentence_type) = decoder.advance(byte) else {
        return false;
    };

    match sentence_type {
        SentenceType::Gga => o.add_position(decoder.position()),
        SentenceType::Vtg => o.add_velocity(decoder.velocity()),
        SentenceType::Xte | SentenceType::TrimbleXte => o.add_cross_track(decoder.cross_track()),
        SentenceType::Rmc => o.add_recommended(decoder.recommended()),
        SentenceType::Other => o.add_other(),
    }

    true
}
