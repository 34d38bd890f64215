use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::share::share_text;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};

pub fn run<S: DataStore, Tz: TimeZone>(
    session: &mut Session<S>,
    now: &DateTime<Tz>,
) -> Result<CmdResult> {
    session.sync(now)?;
    let mut result = CmdResult::default();
    match share_text(session.day_number(), session.stats().record()) {
        Some(card) => Ok(result.with_output(card)),
        None => {
            result.add_message(CmdMessage::warning(
                "Finish today's puzzle to get a share card.",
            ));
            Ok(result)
        }
    }
}
