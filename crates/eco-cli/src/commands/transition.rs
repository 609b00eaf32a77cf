use eco_core::enums::ReportStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TransitionArgs;
use crate::commands::shared::parse::parse_camel_enum;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TransitionResponse {
    pub from: ReportStatus,
    pub to: ReportStatus,
    pub allowed: bool,
    pub allowed_next: Vec<ReportStatus>,
}

/// Handle `eco transition <from> <to>`.
pub fn handle(args: &TransitionArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let from: ReportStatus = parse_camel_enum(&args.from, "status")?;
    let to: ReportStatus = parse_camel_enum(&args.to, "status")?;
    output(&evaluate(from, to), flags.format)
}

pub fn evaluate(from: ReportStatus, to: ReportStatus) -> TransitionResponse {
    TransitionResponse {
        from,
        to,
        allowed: from.can_transition_to(to),
        allowed_next: from.allowed_next_states().to_vec(),
    }
}
