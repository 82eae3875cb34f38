//! # chronos-calendar
//!
//! Era-aware date arithmetic on the proleptic Gregorian calendar.
//!
//! Years are counted from 1 within each era (AD or BC); there is no
//! year 0, so BC 1 is immediately followed by AD 1. Leap years follow
//! the Gregorian rule applied to the signed astronomical year, which
//! makes BC 1, BC 5 and BC 401 leap years.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(Era, year)"] -->|"is_leap_year()"| B["bool"]
//!     A -->|"days_in_month()"| C["month length"]
//!     D["CalendarDate"] -->|"shift_days()"| D
//!     D -->|"weekday_of()"| E["Weekday"]
//!     E -->|".kanji()"| F["日 .. 土"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chronos_calendar::{CalendarDate, Era, Weekday, shift_days, weekday_of};
//!
//! // Validated construction
//! let date = CalendarDate::new(Era::Ad, 2024, 2, 29).unwrap(); // leap day, ok
//!
//! // Offset arithmetic
//! let next = shift_days(date, 306);
//! assert_eq!((next.year(), next.month(), next.day()), (2024, 12, 31));
//!
//! // Era crossing: the day after BC 1-12-31 is AD 1-01-01
//! let eve = CalendarDate::new(Era::Bc, 1, 12, 31).unwrap();
//! assert_eq!(shift_days(eve, 1), CalendarDate::new(Era::Ad, 1, 1, 1).unwrap());
//!
//! // Day of week
//! assert_eq!(weekday_of(date), Weekday::Thursday);
//! assert_eq!(weekday_of(date).kanji(), "木");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `era` | AD/BC marker and the signed astronomical year mapping |
//! | `leap` | Gregorian leap-year rule |
//! | `month` | Month-length table |
//! | `date` | Validated era-aware date |
//! | `shift` | Day-offset arithmetic |
//! | `weekday` | Day-of-week computation and kanji names |
//! | `error` | Error types |

mod date;
mod era;
mod error;
mod leap;
mod month;
mod shift;
mod weekday;

pub use date::CalendarDate;
pub use era::Era;
pub use error::CalendarError;
pub use leap::is_leap_year;
pub use month::days_in_month;
pub use shift::shift_days;
pub use weekday::{weekday_of, Weekday};
