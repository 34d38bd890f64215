use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};
use log::info;

/// Replaces the player's statistics with the ones in `token`.
///
/// Decode and schema failures are returned as errors before anything is
/// written, so a bad token leaves the current record untouched.
pub fn run<S: DataStore, Tz: TimeZone>(
    session: &mut Session<S>,
    token: &str,
    now: &DateTime<Tz>,
) -> Result<CmdResult> {
    let record = codec::import(token)?;
    let reconciliation = session.replace(record, now)?;
    info!("imported statistics ({:?})", reconciliation);

    let record = session.stats().record().clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Statistics imported: {} played, streak {}.",
        record.stats.games_played(),
        record.streak
    )));
    if reconciliation.streak_reset {
        result.add_message(CmdMessage::warning(
            "The imported streak was broken by missed days.",
        ));
    }
    Ok(result.with_record(record))
}
