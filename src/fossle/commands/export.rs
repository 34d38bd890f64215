use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};

/// Exports the record as it stands on the day of `now`.
pub fn run<S: DataStore, Tz: TimeZone>(
    session: &mut Session<S>,
    now: &DateTime<Tz>,
) -> Result<CmdResult> {
    session.sync(now)?;
    let token = codec::export(session.stats().record())?;
    let mut result = CmdResult::default().with_output(token);
    result.add_message(CmdMessage::info(
        "Keep this token somewhere safe; `fossle import <token>` restores it.",
    ));
    Ok(result)
}
