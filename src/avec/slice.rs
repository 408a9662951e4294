//! Slice-based decoder implementation.

use crate::sans::{Clock, Decoder};

use super::{FromFixes, publish};

/// Decode sentences from a slice of a byte stream, publishing to a receiver.
///
/// The decoder keeps any partial sentence at the end of the slice, so a stream
/// may be decoded in pieces. Returns the number of sentences that passed their
/// checksum.
///
/// This method is also re-exported as `furrow::avec::decode_slice`.
pub fn decode<C: Clock>(r: &[u8], decoder: &mut Decoder<C>, o: &mut impl FromFixes) -> usize {
    r.iter().filter(|&&b| publish(decoder, b, o)).count()
}
