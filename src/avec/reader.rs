//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::sans::{Clock, Decoder};

use super::{FromFixes, publish};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Decode sentences from a reader until it is exhausted, publishing to a
/// receiver.
///
/// Suited to serial ports and recorded logs alike. Returns the number of
/// sentences that passed their checksum.
///
/// This method is also re-exported as `furrow::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode<C: Clock>(
    r: &mut impl Read,
    decoder: &mut Decoder<C>,
    o: &mut impl FromFixes,
) -> Result<usize, Error> {
    let mut buf = [0; 64];
    let mut count = 0;

    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => return Ok(count),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => Err(e)?,
        };

        count += buf[..n].iter().filter(|&&b| publish(decoder, b, o)).count();
    }
}
