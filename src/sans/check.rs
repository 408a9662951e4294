//! Helpers for verifying sentence checksums.

use thiserror::Error;
use zerocopy::FromBytes;

use super::convert::hex_nibble;

/// Byte opening a Trimble binary frame.
pub const FRAME_START: u8 = 191;
/// Byte preceding the frame terminator.
pub const FRAME_ESCAPE: u8 = 16;
/// Byte terminating a Trimble binary frame.
pub const FRAME_END: u8 = 3;

/// Number of trailer bytes held in the last term of a frame.
pub const TRAILER_LEN: usize = 3;

/// An error verifying a sentence checksum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecksumError {
    /// Calculated and found XOR parity values do not match.
    #[error("Calculated ({calculated:#04X}) and found ({found:#04X}) parity values do not match.")]
    Parity { found: u8, calculated: u8 },
    /// Calculated and found frame sums do not match.
    #[error("Calculated ({calculated:#06X}) and found ({found:#06X}) frame sums do not match.")]
    FrameSum { found: u16, calculated: u16 },
    /// The checksum term does not hold two hex digits.
    #[error("Malformed checksum term.")]
    Malformed,
}

/// Verify the hex pair of an NMEA checksum term against the XOR parity
/// accumulated over the sentence.
pub fn verify_parity(term: &[u8], calculated: u8) -> Result<(), ChecksumError> {
    let [hi, lo, ..] = *term else {
        return Err(ChecksumError::Malformed);
    };

    let found = match (hex_nibble(hi), hex_nibble(lo)) {
        (Some(hi), Some(lo)) => hi << 4 | lo,
        _ => Err(ChecksumError::Malformed)?,
    };

    if found != calculated {
        Err(ChecksumError::Parity { found, calculated })?;
    }

    Ok(())
}

/// The bytes closing a Trimble frame, ahead of the terminator.
#[repr(C, packed)]
#[derive(FromBytes)]
struct FrameTrailer {
    sum: [u8; 2],
    escape: u8,
}

/// Find a frame trailer at the end of a term.
///
/// Returns the length of the term without its trailer, and the frame sum the
/// trailer holds, if the term ends in the escape byte.
pub fn split_trailer(term: &[u8]) -> Option<(usize, u16)> {
    let len = term.len().checked_sub(TRAILER_LEN)?;
    let bytes: [u8; TRAILER_LEN] = term[len..].try_into().ok()?;

    let FrameTrailer { sum, escape } = zerocopy::transmute!(bytes);

    (escape == FRAME_ESCAPE).then_some((len, u16::from_be_bytes(sum)))
}

/// Verify a frame sum against the running sum of the frame.
///
/// The running sum includes the trailer bytes themselves, which are removed
/// before comparing.
pub fn verify_frame(running: u16, found: u16) -> Result<(), ChecksumError> {
    let [hi, lo] = found.to_be_bytes();
    let calculated = running
        .wrapping_sub(hi.into())
        .wrapping_sub(lo.into())
        .wrapping_sub(FRAME_ESCAPE.into());

    if found != calculated {
        Err(ChecksumError::FrameSum { found, calculated })?;
    }

    Ok(())
}
