//! # Core Application Logic
//!
//! This module contains the calculator itself.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (operands)     │
//!                    │  • Action (key presses) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌────────────┐
//!              │    TUI     │        │   Batch    │
//!              │  Adapter   │        │  (--keys)  │
//!              │ (ratatui)  │        │            │
//!              └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `CalculatorState` and its formatted `Readout`
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`evaluate`]: operand arithmetic and result rendering
//! - [`format`]: thousands-separator formatting for display
//! - [`keys`]: button labels and compact key sequences
//! - [`config`]: settings file and override resolution

pub mod action;
pub mod config;
pub mod evaluate;
pub mod format;
pub mod keys;
pub mod operation;
pub mod state;

pub use action::{Action, Digit, update};
pub use operation::Operation;
pub use state::{CalculatorState, Readout};
