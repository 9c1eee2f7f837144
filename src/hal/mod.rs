//! Hardware capability consumed by the sensor and actuators.
//!
//! Outputs, inputs and blocking delays come straight from embedded-hal 1.0. The two
//! things embedded-hal does not define for blocking code, a monotonic clock and an
//! edge wait with a timeout, are small traits here so any platform HAL can supply them.

mod clock;
mod echo;
#[cfg(feature = "std")]
mod host;
mod pin;

pub use clock::{sleep_ns, Clock};
pub use echo::{Edge, EdgeEvent, EchoInput, PolledEcho};
#[cfg(feature = "std")]
pub use host::{StdClock, StdDelay};
pub use pin::{PinGuard, PinNumbering, PinRole};
