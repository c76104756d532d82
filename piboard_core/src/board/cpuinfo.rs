//! Scanner for the kernel's processor information file.
//!
//! Lines look like `key<ws>:<ws>value`. Board-level keys (`Revision`,
//! `Serial`, `Hardware`, `Model`) may appear anywhere. A `processor` line
//! opens a core block, and per-core keys go to the most recently opened
//! block until the next `processor` line.
//!
//! ```text
//! processor       : 0
//! model name      : ARMv7 Processor rev 4 (v7l)
//! BogoMIPS        : 38.40
//! ...
//! Hardware        : BCM2835
//! Revision        : a02082
//! Serial          : 00000000c0ffee42
//! ```
//!
//! Scanning is a single forward pass and never fails: malformed values are
//! logged or defaulted and the scan carries on.

use super::core_info::CoreKey;
use super::description::HardwareDescription;
use super::revision;

/// Classification of a normalised key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKey {
    Revision,
    Serial,
    Processor,
    Hardware,
    Model,
    Core(CoreKey),
    Ignored,
}

impl LineKey {
    fn classify(key: &str) -> Self {
        match key {
            "revision" => LineKey::Revision,
            "serial" => LineKey::Serial,
            "processor" => LineKey::Processor,
            "hardware" => LineKey::Hardware,
            "model" => LineKey::Model,
            other => CoreKey::from_key(other).map_or(LineKey::Ignored, LineKey::Core),
        }
    }
}

/// Split a line into a normalised key and a trimmed value.
///
/// Returns `None` for blank lines, lines without `:`, and lines whose `:`
/// is the first character.
pub(crate) fn split_line(line: &str) -> Option<(String, &str)> {
    if line.trim().is_empty() {
        return None;
    }
    let separator = line.find(':')?;
    if separator == 0 {
        return None;
    }
    let key = line[..separator].trim().to_lowercase();
    let value = line[separator + 1..].trim();
    Some((key, value))
}

/// Scan system info lines into a hardware description
pub fn scan<I, S>(lines: I) -> HardwareDescription
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut description = HardwareDescription::empty();
    // Slot of the core block currently being filled
    let mut current: Option<usize> = None;

    for line in lines {
        let Some((key, value)) = split_line(line.as_ref()) else {
            continue;
        };

        match LineKey::classify(&key) {
            LineKey::Revision => match revision::parse_cpuinfo_revision(value) {
                Some(code) => description.set_revision_code(code),
                None => log::warn!("Unable to parse revision number string - {}", value),
            },
            LineKey::Serial => description.set_serial_number(value),
            LineKey::Hardware => description.set_hardware(value),
            LineKey::Model => description.set_model_string(value),
            LineKey::Processor => {
                current = match value.parse::<i32>() {
                    Ok(index) => {
                        log::debug!("Found processor core {}", index);
                        Some(description.push_core(index))
                    }
                    Err(_) => {
                        log::debug!("Ignoring processor block with index '{}'", value);
                        None
                    }
                };
            }
            LineKey::Core(core_key) => match current.and_then(|slot| description.core_mut(slot)) {
                Some(core) => core.apply(core_key, value),
                None => log::debug!("Dropping '{}' outside of a processor block", key),
            },
            LineKey::Ignored => {}
        }
    }

    description
}
