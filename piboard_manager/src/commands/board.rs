//! Board identification commands
//!
//! Prints what the revision code and system info file say about the board.

use colored::*;
use piboard_core::board::{
    decode, parse_revision_code, resolve_connector, BoardContext, RevisionScheme,
};
use piboard_core::error::BoardResult;

use crate::cli_output;

/// Run board info report
pub fn run_info(board: &BoardContext, json: bool) -> BoardResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(board.description())?);
        return Ok(());
    }

    if !board.is_supported() {
        cli_output::warn("System is not a Raspberry Pi");
        return Ok(());
    }

    println!(
        "{}",
        format!("Raspberry Pi running on {} processor.", board.processor())
            .green()
            .bold()
    );
    println!();

    cli_output::header("Board");
    cli_output::field("Name", board.model().name());
    cli_output::field("Revision code", format!("0x{:X}", board.revision_code()).yellow());
    cli_output::field("Model", board.model());
    cli_output::field("Revision", board.version());
    cli_output::field("Processor", board.processor());
    cli_output::field("Memory size", format!("{} MB", board.memory_mb()));
    cli_output::field(
        "Connector",
        format!("{} ({})", board.connector(), board.connector().name()),
    );
    if board.connector().pin_count() > 0 {
        cli_output::field("Header pins", board.connector().pin_count());
    }
    cli_output::field("Serial#", board.serial_number());
    if !board.hardware().is_empty() {
        cli_output::field("Hardware", board.hardware());
    }
    if !board.model_string().is_empty() {
        cli_output::field("Kernel model", board.model_string());
    }
    println!();

    for core in board.cores() {
        cli_output::header(&format!("Core {}", core.index()));
        cli_output::field("Model name", &core.model_name);
        cli_output::field("BogoMIPS", core.bogo_mips);
        cli_output::field(
            "Features",
            format!("{} ({} flags)", core.features, core.feature_list().count()),
        );
        cli_output::field("NEON", if core.has_feature("neon") { "yes" } else { "no" });
        log::debug!(
            "core {} id: implementer {:#x} part {:#x}",
            core.index(),
            core.implementer,
            core.part
        );
        println!();
    }

    if !board.model().is_known() {
        cli_output::warn(&format!(
            "Revision code 0x{:X} is not a known board",
            board.revision_code()
        ));
    }

    let expected = board.processor().core_count();
    if expected != 0 && board.cores().len() as u32 != expected {
        cli_output::warn(&format!(
            "{} cores listed, {} expected for {}",
            board.cores().len(),
            expected,
            board.processor().name()
        ));
    }

    Ok(())
}

/// Decode revision codes given on the command line
pub fn run_decode(codes: &[String]) -> BoardResult<()> {
    for text in codes {
        let code = parse_revision_code(text)?;
        let rev = decode(code);
        let scheme = match RevisionScheme::of(code) {
            RevisionScheme::Legacy => "legacy",
            RevisionScheme::Structured => "structured",
        };

        cli_output::header(&format!("0x{:X} ({})", code, scheme));
        cli_output::field("Board", rev.model.name());
        cli_output::field("Model", rev.model);
        cli_output::field("Revision", rev.version);
        cli_output::field("Memory size", format!("{} MB", rev.memory_mb));
        cli_output::field("Processor", rev.processor);
        let connector = resolve_connector(rev.model);
        cli_output::field(
            "Connector",
            format!("{} ({} pins)", connector, connector.pin_count()),
        );
        if !rev.model.is_known() {
            cli_output::warn("Not a known board");
        }
        println!();
    }
    Ok(())
}

/// List discovered cores, one per line
pub fn run_cores(board: &BoardContext) -> BoardResult<()> {
    if !board.is_supported() {
        cli_output::warn("System is not a Raspberry Pi");
        return Ok(());
    }
    if board.cores().is_empty() {
        println!("{}", "No processor cores listed.".yellow());
        return Ok(());
    }

    for core in board.cores() {
        println!(
            "  {} {} [{} BogoMIPS, {} features]",
            format!("cpu{}", core.index()).yellow(),
            core.model_name,
            core.bogo_mips,
            core.feature_list().count()
        );
    }
    Ok(())
}
