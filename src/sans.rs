//! Internal state machine for decoding sentences byte by byte.
//!
//! This module is intended for applications feeding bytes themselves, for
//! example from a UART interrupt. See [`crate::avec`] for drivers covering
//! slices and readers.
//!
//! # Architecture
//!
//! A [`Decoder`] splits the incoming byte stream into terms at delimiters
//! (`,`, `:`, `*`, CR, LF) and hands each completed term to the classifier in
//! [`term`]. The first term of a sentence selects its [`SentenceType`]; later
//! terms are routed by position to a shadow copy of the fields of that
//! sentence. The shadow copy is published only when the checksum term
//! validates, so a corrupted sentence never disturbs the published values.
//!
//! Two checksum schemes share the same tokenizer:
//!
//! - NMEA-0183 sentences start at `$` or `@` and end in `*` followed by a hex
//!   pair holding the XOR of every byte between the start marker and the `*`.
//!
//! - Trimble binary frames start at byte 191 and end in a two-byte big-endian
//!   sum, an escape byte (16) and a terminator (3). The sum covers every byte
//!   after the frame start.
//!
//! Both accumulators are updated as bytes arrive, since the value to compare
//! against is only known at the end of the sentence.
//!
//! Some aspects of decoding are left to the application:
//!
//! - Reading bytes from the link. The decoder never performs I/O.
//!
//! - Supplying a time source. Commit stamps and ages are taken from a
//!   [`Clock`]; the default [`NoClock`] stamps every commit with zero.
//!
//! - Deciding when a fix is stale. Only the age since the last commit is
//!   reported.

pub mod check;
pub mod clock;
pub mod convert;
pub mod decoder;
pub mod fix;
pub mod term;

pub use clock::{Clock, NoClock};
#[cfg(feature = "std")]
pub use clock::Uptime;
pub use decoder::Decoder;
pub use fix::{CrossTrack, DateTime, FixKind, Position, Recommended, Velocity};
pub use term::SentenceType;

#[cfg(feature = "stats")]
pub use fix::Stats;
