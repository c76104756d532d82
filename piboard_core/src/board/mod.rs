//! # Board identification
//!
//! Works out which Raspberry Pi the process is running on.
//!
//! - **Revision decoding**: turn the firmware revision code into model,
//!   board revision, memory size and processor
//! - **Connector layout**: map the model to its GPIO header generation
//! - **System info scanning**: read board-level facts and per-core details
//!   from `/proc/cpuinfo`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use piboard_core::board::BoardContext;
//!
//! let board = BoardContext::detect();
//! if board.is_supported() {
//!     println!("{} with {} MB", board.model().name(), board.memory_mb());
//!     for core in board.cores() {
//!         println!("core {}: {}", core.index(), core.model_name);
//!     }
//! }
//! ```

mod connector;
mod context;
mod core_info;
mod cpuinfo;
mod description;
mod model;
mod revision;
mod source;

pub use connector::resolve as resolve_connector;
pub use context::{current, BoardContext};
pub use core_info::{CoreInfo, CoreKey};
pub use cpuinfo::scan;
pub use description::HardwareDescription;
pub use model::{ConnectorLayout, Model, Processor, SiliconVersion};
pub use revision::{
    decode, parse_cpuinfo_revision, parse_revision_code, DecodedRevision, RevisionScheme,
    STRUCTURED_FLAG,
};
pub use source::read_lines;
