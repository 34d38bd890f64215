use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};

pub fn run<S: DataStore, Tz: TimeZone>(
    session: &mut Session<S>,
    now: &DateTime<Tz>,
) -> Result<CmdResult> {
    session.sync(now)?;
    Ok(CmdResult::default().with_record(session.stats().record().clone()))
}
