//! # piboard core
//!
//! Raspberry Pi hardware identification.
//!
//! This crate decodes the firmware revision code and scans the kernel's
//! processor information file to describe the board a process runs on:
//!
//! - **Model**: which board (Model B Rev 1, 3 Model B, Zero W, ...)
//! - **Revision**: PCB revision such as 1.2
//! - **Memory**: installed RAM in MB
//! - **Processor**: Broadcom SoC family
//! - **Connector**: GPIO header layout, for pin map selection
//! - **Cores**: per-core model name, BogoMIPS, features and CPU id fields
//!
//! ## Quick Start
//!
//! ```rust
//! use piboard_core::board::{decode, Model, Processor};
//!
//! let rev = decode(0xa22082);
//! assert_eq!(rev.model, Model::B3);
//! assert_eq!(rev.memory_mb, 1024);
//! assert_eq!(rev.processor, Processor::Bcm2837);
//! ```

pub mod board;
pub mod config;
pub mod error;

pub use board::{BoardContext, HardwareDescription};
pub use error::{BoardError, BoardResult};
