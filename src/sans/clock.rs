//! Time sources for commit stamps.

/// A source of millisecond timestamps.
///
/// Stamps are compared with wrapping arithmetic, so a counter that rolls over
/// (such as a 32-bit tick counter on a microcontroller) is fine.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed epoch.
    fn millis(&self) -> u32;
}

/// A clock that always reads zero.
///
/// Commits are still stamped, but every age reads as zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClock;

impl Clock for NoClock {
    fn millis(&self) -> u32 {
        0
    }
}

/// A clock counting milliseconds since its creation.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct Uptime(std::time::Instant);

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl Default for Uptime {
    fn default() -> Self {
        Self(std::time::Instant::now())
    }
}

#[cfg(feature = "std")]
impl Clock for Uptime {
    fn millis(&self) -> u32 {
        self.0.elapsed().as_millis() as u32
    }
}
