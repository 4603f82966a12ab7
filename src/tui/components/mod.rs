//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: application name and status message
//! - `Display`: the two-line readout
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Keypad`: button grid; remembers the last pressed button and turns
//!   key presses into core actions
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into the calculator state themselves:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! Display::new(&state.readout(separator)).render(frame, area);
//! ```

pub mod display;
pub mod keypad;
mod title_bar;

pub use display::Display;
pub use keypad::Keypad;
pub use title_bar::TitleBar;
