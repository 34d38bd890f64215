//! # API Facade
//!
//! The single entry point for playing fossle from any UI. It owns today's
//! [`Session`], the snippet [`ContentSource`] and a [`Clock`], and dispatches
//! every operation to `commands/*.rs`.
//!
//! ## What the API Does NOT Do
//!
//! - **Game rules**: those live in the engine, the stats store and the commands
//! - **Terminal I/O**: no stdout, stderr or exit codes
//! - **Presentation**: it returns [`CmdResult`] data, not strings to print
//!
//! ## Generic Over DataStore and Clock
//!
//! - Production: `FossleApi<FileStore, SystemClock>`
//! - Testing: `FossleApi<InMemoryStore, FixedClock>`
//!
//! Reading the time through [`Clock`] lets tests walk a player across
//! midnight without sleeping.

use crate::catalog::Catalog;
use crate::commands;
use crate::config::FossleConfig;
use crate::content::ContentSource;
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use std::cell::Cell;

/// Where "now" comes from. Its time zone decides where days begin.
pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

/// The wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to. Days begin at midnight UTC.
#[derive(Debug, Clone)]
pub struct FixedClock(Cell<DateTime<Utc>>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Cell::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.0.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for FixedClock {
    type Tz = Utc;

    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

pub struct FossleApi<S: DataStore, C: Clock = SystemClock> {
    session: Session<S>,
    content: Box<dyn ContentSource>,
    clock: C,
    paths: commands::FosslePaths,
}

impl<S: DataStore, C: Clock> FossleApi<S, C> {
    /// Loads the record from `store`, reconciles it with the clock and sets up
    /// today's puzzle from the builtin catalog and the saved config.
    pub fn open(
        store: S,
        paths: commands::FosslePaths,
        content: Box<dyn ContentSource>,
        clock: C,
    ) -> Result<Self> {
        let config = FossleConfig::load(&paths.data)?;
        Self::with_catalog(
            store,
            Catalog::builtin().clone(),
            config,
            paths,
            content,
            clock,
        )
    }

    pub fn with_catalog(
        store: S,
        catalog: Catalog,
        config: FossleConfig,
        paths: commands::FosslePaths,
        content: Box<dyn ContentSource>,
        clock: C,
    ) -> Result<Self> {
        let session = Session::open(store, catalog, config.epoch, &clock.now())?;
        Ok(Self {
            session,
            content,
            clock,
            paths,
        })
    }

    pub fn status(&mut self) -> Result<commands::CmdResult> {
        let now = self.clock.now();
        commands::status::run(&mut self.session, self.content.as_ref(), &now)
    }

    pub fn guess(&mut self, name: &str) -> Result<commands::CmdResult> {
        let now = self.clock.now();
        commands::guess::run(&mut self.session, self.content.as_ref(), name, &now)
    }

    pub fn stats(&mut self) -> Result<commands::CmdResult> {
        let now = self.clock.now();
        commands::stats::run(&mut self.session, &now)
    }

    pub fn share(&mut self) -> Result<commands::CmdResult> {
        let now = self.clock.now();
        commands::share::run(&mut self.session, &now)
    }

    pub fn export(&mut self) -> Result<commands::CmdResult> {
        let now = self.clock.now();
        commands::export::run(&mut self.session, &now)
    }

    pub fn import(&mut self, token: &str) -> Result<commands::CmdResult> {
        let now = self.clock.now();
        commands::import::run(&mut self.session, token, &now)
    }

    pub fn catalog(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::catalog::run(&self.session, filter)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn paths(&self) -> &commands::FosslePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, FosslePaths, MessageLevel, PuzzleView, SnippetView};
