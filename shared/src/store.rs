use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::rc::{Rc, Weak};

use crate::constants::DEFAULT_TITLE;
use crate::error::{GuardRejected, SpinError};
use crate::persistence::PersistedSelection;
use crate::segments::{resolve_segments, Segment, SelectionMode, SelectionSource};
use crate::spin::{SpinConfig, SpinEngine, SpinPlan};
use crate::spin_request::SpinRequestChannel;
use crate::teams::{Team, TeamRoster};
use crate::theme::Theme;

/// What presentation code needs to know about the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSnapshot {
    pub is_spinning: bool,
    pub winner: Option<String>,
    pub current_rotation: f64,
    pub in_flight: Option<SpinPlan>,
}

/// All application state the wheel depends on, behind a narrow command API.
///
/// Every command bumps `revision` when it actually changed something, which is
/// what `StoreHandle` uses to decide whether subscribers hear about it.
#[derive(Debug, Clone, Default)]
pub struct WheelStore {
    mode: SelectionMode,
    active_team_id: Option<String>,
    roster: TeamRoster,
    exclusions: HashMap<String, HashSet<String>>,
    ad_hoc_names: Vec<String>,
    ad_hoc_title: Option<String>,
    theme: Theme,
    verbose_logging: bool,
    overlay_open: bool,
    engine: SpinEngine,
    spin_request: SpinRequestChannel,
    revision: u64,
}

impl WheelStore {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            engine: SpinEngine::new(config),
            ..Default::default()
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) -> bool {
        self.revision += 1;
        true
    }

    // === Queries ===

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn active_team_id(&self) -> Option<&str> {
        self.active_team_id.as_deref()
    }

    pub fn active_team(&self) -> Option<&Team> {
        match self.mode {
            SelectionMode::Team => self.active_team_id.as_deref().and_then(|id| self.roster.get(id)),
            SelectionMode::AdHoc => None,
        }
    }

    pub fn teams(&self) -> &[Team] {
        self.roster.teams()
    }

    pub fn excluded_members(&self, team_id: &str) -> Option<&HashSet<String>> {
        self.exclusions.get(team_id)
    }

    pub fn is_member_excluded(&self, team_id: &str, member_id: &str) -> bool {
        self.exclusions
            .get(team_id)
            .map_or(false, |set| set.contains(member_id))
    }

    pub fn ad_hoc_names(&self) -> &[String] {
        &self.ad_hoc_names
    }

    pub fn ad_hoc_title(&self) -> Option<&str> {
        self.ad_hoc_title.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn verbose_logging(&self) -> bool {
        self.verbose_logging
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn spin_request_token(&self) -> u64 {
        self.spin_request.token()
    }

    /// Segments for whatever source is active, derived fresh on every call.
    pub fn segments(&self) -> Vec<Segment> {
        let source = match self.mode {
            SelectionMode::Team => match self.active_team() {
                Some(team) => SelectionSource::Team {
                    team,
                    excluded: self.exclusions.get(&team.id),
                },
                None => return Vec::new(),
            },
            SelectionMode::AdHoc => SelectionSource::AdHoc { names: &self.ad_hoc_names },
        };
        resolve_segments(&source)
    }

    pub fn title(&self) -> String {
        if let Some(team) = self.active_team() {
            return team.name.clone();
        }
        self.ad_hoc_title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn spin_snapshot(&self) -> SpinSnapshot {
        let state = self.engine.state();
        SpinSnapshot {
            is_spinning: state.is_spinning,
            winner: state.winner.clone(),
            current_rotation: state.current_rotation,
            in_flight: self.engine.in_flight().cloned(),
        }
    }

    pub fn spin_config(&self) -> &SpinConfig {
        self.engine.config()
    }

    pub fn can_spin(&self) -> bool {
        self.engine
            .check_guards(self.segments().len(), self.overlay_open)
            .is_ok()
    }

    // === Selection commands ===

    pub fn set_mode(&mut self, mode: SelectionMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.touch()
    }

    pub fn select_team(&mut self, team_id: &str) -> bool {
        if self.mode == SelectionMode::Team && self.active_team_id.as_deref() == Some(team_id) {
            return false;
        }
        self.mode = SelectionMode::Team;
        self.active_team_id = Some(team_id.to_string());
        self.touch()
    }

    pub fn select_adhoc(&mut self) -> bool {
        if self.mode == SelectionMode::AdHoc && self.active_team_id.is_none() {
            return false;
        }
        self.mode = SelectionMode::AdHoc;
        self.active_team_id = None;
        self.touch()
    }

    pub fn set_adhoc_names(&mut self, names: Vec<String>) -> bool {
        if self.ad_hoc_names == names {
            return false;
        }
        self.ad_hoc_names = names;
        self.touch()
    }

    pub fn set_adhoc_title(&mut self, title: Option<String>) -> bool {
        if self.ad_hoc_title == title {
            return false;
        }
        self.ad_hoc_title = title;
        self.touch()
    }

    /// Replaces the team snapshot. Returns the ids of records that failed
    /// validation.
    pub fn set_teams(&mut self, teams: Vec<Team>) -> Vec<String> {
        let (roster, rejected) = TeamRoster::from_teams(teams);
        if roster != self.roster {
            self.roster = roster;
            self.touch();
        }
        rejected
    }

    pub fn toggle_member_exclusion(&mut self, team_id: &str, member_id: &str) -> bool {
        let excluded = self.exclusions.entry(team_id.to_string()).or_default();
        if !excluded.remove(member_id) {
            excluded.insert(member_id.to_string());
        }
        self.touch()
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        self.touch()
    }

    pub fn set_verbose_logging(&mut self, verbose: bool) -> bool {
        if self.verbose_logging == verbose {
            return false;
        }
        self.verbose_logging = verbose;
        self.touch()
    }

    pub fn set_overlay_open(&mut self, open: bool) -> bool {
        if self.overlay_open == open {
            return false;
        }
        self.overlay_open = open;
        self.touch()
    }

    // === Spin commands ===

    pub fn request_spin(&mut self, now_ms: u64) -> u64 {
        let token = self.spin_request.request(now_ms);
        self.touch();
        token
    }

    pub fn consume_spin_request(&mut self) -> Option<u64> {
        let token = self.spin_request.consume()?;
        self.touch();
        Some(token)
    }

    pub fn begin_spin(&mut self, spins: f64, now_ms: f64) -> Result<SpinPlan, GuardRejected> {
        let segment_count = self.segments().len();
        let plan = self.engine.begin(spins, segment_count, self.overlay_open, now_ms)?;
        self.touch();
        Ok(plan)
    }

    pub fn settle_spin(&mut self, plan_id: u64) -> Result<String, SpinError> {
        let segments = self.segments();
        let result = self.engine.settle(plan_id, &segments);
        if !matches!(result, Err(SpinError::StalePlan { .. })) {
            self.touch();
        }
        result
    }

    pub fn acknowledge_winner(&mut self) -> bool {
        if self.engine.acknowledge_winner() {
            self.touch()
        } else {
            false
        }
    }

    // === Persistence ===

    pub fn persisted(&self) -> PersistedSelection {
        PersistedSelection {
            theme: self.theme,
            mode: self.mode,
            active_team_id: self.active_team_id.clone(),
            ad_hoc_names: self.ad_hoc_names.clone(),
            ad_hoc_title: self.ad_hoc_title.clone(),
            verbose_logging: self.verbose_logging,
        }
    }

    pub fn restore(&mut self, saved: PersistedSelection) {
        self.theme = saved.theme;
        self.mode = saved.mode;
        self.active_team_id = saved.active_team_id;
        self.ad_hoc_names = saved.ad_hoc_names;
        self.ad_hoc_title = saved.ad_hoc_title;
        self.verbose_logging = saved.verbose_logging;
        self.touch();
    }
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener)>>,
}

/// Unsubscribes when dropped.
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Shared, single-threaded handle to a `WheelStore`.
#[derive(Clone)]
pub struct StoreHandle {
    store: Rc<RefCell<WheelStore>>,
    listeners: Rc<Listeners>,
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl StoreHandle {
    pub fn new(store: WheelStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            listeners: Rc::new(Listeners::default()),
        }
    }

    /// Runs a read-only closure against the store.
    pub fn read<T>(&self, f: impl FnOnce(&WheelStore) -> T) -> T {
        f(&*self.store.borrow())
    }

    /// Runs a command and notifies subscribers if it changed anything. The
    /// store is released before any subscriber runs.
    pub fn update<T>(&self, f: impl FnOnce(&mut WheelStore) -> T) -> T {
        let (result, changed) = {
            let mut store = self.store.borrow_mut();
            let before = store.revision();
            let result = f(&mut *store);
            (result, store.revision() != before)
        };
        if changed {
            self.notify();
        }
        result
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = self.listeners.next_id.get();
        self.listeners.next_id.set(id + 1);
        self.listeners
            .entries
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn notify(&self) {
        // Snapshot so listeners may subscribe or unsubscribe while running
        let listeners: Vec<Listener> = self
            .listeners
            .entries
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Runs one full spin: guards, a single wait for the animation, then the
    /// winner is resolved against the segments current at that moment.
    /// `now_ms` is the clock reading the wait starts from.
    pub async fn spin<W, F>(&self, spins: f64, now_ms: f64, wait: W) -> Result<String, SpinError>
    where
        W: FnOnce(u32) -> F,
        F: Future<Output = ()>,
    {
        let plan = match self.update(|store| store.begin_spin(spins, now_ms)) {
            Ok(plan) => plan,
            Err(reason) => {
                log::debug!("Spin ignored: {}", reason);
                return Err(reason.into());
            }
        };

        wait(plan.duration_ms).await;

        self.update(|store| store.settle_spin(plan.id))
    }
}
