//! The decoded hardware description of a board.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use super::connector;
use super::core_info::CoreInfo;
use super::cpuinfo;
use super::model::{ConnectorLayout, Model, Processor, SiliconVersion};
use super::revision::{self, DecodedRevision};
use super::source;

/// Everything known about the board, built by one scan of the system info file.
///
/// Fields are read-only once construction returns. The revision code is the
/// single write path for model, version, memory, processor and connector
/// layout, so those always agree with each other. Serialize only: a
/// description can not be assembled from arbitrary field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HardwareDescription {
    supported: bool,
    revision_code: u32,
    model: Model,
    version: SiliconVersion,
    memory_mb: u32,
    processor: Processor,
    connector: ConnectorLayout,
    serial_number: String,
    hardware: String,
    model_string: String,
    cores: Vec<CoreInfo>,
}

impl HardwareDescription {
    /// An empty description for a readable source, ready to be filled by a scan
    pub(crate) fn empty() -> Self {
        Self {
            supported: true,
            ..Default::default()
        }
    }

    /// Description of a system whose info source could not be read.
    /// Every field keeps its zero value.
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// Scan already-materialized system info lines
    pub fn scan<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        cpuinfo::scan(lines)
    }

    /// Read and scan the system info file at `path`
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        log::info!("Loading board information from '{}'", path.display());

        match source::read_lines(path) {
            Ok(lines) => {
                let description = cpuinfo::scan(lines);
                log::info!("Board information loading complete");
                description
            }
            Err(e) => {
                log::error!(
                    "Unable to read cpuinfo from '{}' - are you sure this is a Pi? {}",
                    path.display(),
                    e
                );
                Self::unsupported()
            }
        }
    }

    /// Read and scan the configured system info file
    pub fn detect() -> Self {
        Self::load_from(crate::config::cpuinfo_path())
    }

    pub(crate) fn set_revision_code(&mut self, code: u32) {
        let DecodedRevision {
            model,
            version,
            memory_mb,
            processor,
        } = revision::decode(code);

        self.revision_code = code;
        self.model = model;
        self.version = version;
        self.memory_mb = memory_mb;
        self.processor = processor;
        self.connector = connector::resolve(model);
    }

    pub(crate) fn set_serial_number(&mut self, serial: &str) {
        self.serial_number = serial.to_string();
    }

    pub(crate) fn set_hardware(&mut self, hardware: &str) {
        self.hardware = hardware.to_string();
    }

    pub(crate) fn set_model_string(&mut self, model: &str) {
        self.model_string = model.to_string();
    }

    /// Open a new core block and return it for filling
    pub(crate) fn push_core(&mut self, index: i32) -> usize {
        self.cores.push(CoreInfo::new(index));
        self.cores.len() - 1
    }

    pub(crate) fn core_mut(&mut self, slot: usize) -> Option<&mut CoreInfo> {
        self.cores.get_mut(slot)
    }

    /// Whether the system info source could be read at all
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn revision_code(&self) -> u32 {
        self.revision_code
    }

    pub fn model(&self) -> Model {
        self.model
    }

    /// Board (PCB) revision, e.g. 1.2
    pub fn version(&self) -> SiliconVersion {
        self.version
    }

    pub fn memory_mb(&self) -> u32 {
        self.memory_mb
    }

    pub fn processor(&self) -> Processor {
        self.processor
    }

    pub fn connector(&self) -> ConnectorLayout {
        self.connector
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// SoC name as reported by the kernel (`Hardware` line)
    pub fn hardware(&self) -> &str {
        &self.hardware
    }

    /// Board model string as reported by the kernel (`Model` line)
    pub fn model_string(&self) -> &str {
        &self.model_string
    }

    /// Cores in the order they were listed
    pub fn cores(&self) -> &[CoreInfo] {
        &self.cores
    }

    pub fn core(&self, index: i32) -> Option<&CoreInfo> {
        self.cores.iter().find(|c| c.index() == index)
    }
}

impl fmt::Display for HardwareDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:\t\t{}", self.model.name())?;
        writeln!(f, "Revision code:\t0x{:X}", self.revision_code)?;
        writeln!(f, "Model:\t\t{}", self.model)?;
        writeln!(f, "Revision:\t{}", self.version)?;
        writeln!(f, "Processor:\t{}", self.processor)?;
        writeln!(f, "Memory size:\t{} MB", self.memory_mb)?;
        writeln!(f, "Connector:\t{}", self.connector)?;
        writeln!(f, "Serial#:\t{}", self.serial_number)?;

        for core in &self.cores {
            write!(f, "\n{}", core)?;
        }
        Ok(())
    }
}
