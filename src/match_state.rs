//! Main MatchState struct tying all components together.

use crate::clock::{Clock, SystemClock};
use crate::countdown::ActiveTimeout;
use crate::error::Result;
use crate::history::{Action, ActionHistory};
use crate::records::{EventKind, EventLog};
use crate::report::MatchReport;
use crate::types::{Sequence, Team, TeamId, ROSTER_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace};

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Length of a timeout countdown in seconds.
    pub timeout_duration_secs: u32,

    /// Timeouts each team starts with.
    pub timeouts_per_set: u32,

    /// Team names used on creation and reset.
    pub team_names: [String; 2],

    /// Set label used on creation and reset.
    pub set_label: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            timeout_duration_secs: 15,
            timeouts_per_set: 2,
            team_names: ["Team 1".to_string(), "Team 2".to_string()],
            set_label: "Set 1".to_string(),
        }
    }
}

impl MatchConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serializable view of the live state, for a presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub teams: [Team; 2],
    pub set_label: String,
    pub started: bool,
    pub serving_team: Option<TeamId>,
    pub active_timeout: Option<ActiveTimeout>,
    pub timeout_duration_secs: u32,
    pub event_count: usize,
    pub undo_depth: usize,
}

/// The match state manager.
///
/// Owns every piece of mutable match state:
/// - Both teams (name, roster, score, timeouts left)
/// - The event logs and the undo history, kept in lockstep (the two
///   starting lineup events have no undo record)
/// - The serving indicator and the active timeout countdown
///
/// Mutating operations never fail. Each returns `true` if it was applied
/// and `false` if it was ignored (empty name, no timeouts left, ...).
pub struct MatchState {
    config: MatchConfig,

    /// Source of event timestamps.
    clock: Box<dyn Clock>,

    teams: [Team; 2],
    set_label: String,
    started: bool,

    /// Team that served most recently. Not restored by undo.
    serving: Option<TeamId>,

    active_timeout: Option<ActiveTimeout>,

    /// Bumped each time a countdown starts.
    timeout_generation: u64,

    log: EventLog,
    history: ActionHistory,
}

impl MatchState {
    /// Create a match with the default config and the system clock.
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a match stamping events with `clock`.
    pub fn with_clock(config: MatchConfig, clock: impl Clock + 'static) -> Self {
        let teams = Self::default_teams(&config);
        let set_label = config.set_label.clone();

        Self {
            config,
            clock: Box::new(clock),
            teams,
            set_label,
            started: false,
            serving: None,
            active_timeout: None,
            timeout_generation: 0,
            log: EventLog::new(),
            history: ActionHistory::new(),
        }
    }

    fn default_teams(config: &MatchConfig) -> [Team; 2] {
        let [home, away] = config.team_names.clone();
        [
            Team::new(home, config.timeouts_per_set),
            Team::new(away, config.timeouts_per_set),
        ]
    }

    fn team_mut(&mut self, team: TeamId) -> &mut Team {
        &mut self.teams[team.index()]
    }

    /// Append an event stamped with the current time and set label.
    fn append_event(&mut self, kind: EventKind) -> Sequence {
        let now = self.clock.now();
        let sequence = self.log.append(now, self.set_label.clone(), kind);
        trace!(?sequence, "event recorded");
        sequence
    }

    /// Append an event and push its undo record.
    fn record(&mut self, kind: EventKind, action: Action) {
        self.append_event(kind);
        self.history.push(action);
    }

    // --- Match Operations ---

    /// Add one point to `team`.
    pub fn record_point(&mut self, team: TeamId) -> bool {
        let score = {
            let t = self.team_mut(team);
            t.score += 1;
            t.score
        };
        self.record(EventKind::Score { team, score }, Action::Score { team });
        true
    }

    /// Rotate `team` one position anti-clockwise.
    pub fn rotate(&mut self, team: TeamId) -> bool {
        let previous = self.teams[team.index()].roster.clone();
        let roster = previous.rotated();
        self.team_mut(team).roster = roster.clone();
        let sequence = self.append_event(EventKind::Rotation { team, roster });
        self.history.push(Action::Rotation {
            team,
            previous,
            sequence,
        });
        true
    }

    /// Put `new_player` into `slot` (0-based) of `team`'s roster.
    pub fn substitute(&mut self, team: TeamId, slot: usize, new_player: &str) -> bool {
        if new_player.is_empty() {
            debug!(%team, slot, "substitution ignored: empty player name");
            return false;
        }
        let Some(old_player) = self.team_mut(team).roster.replace(slot, new_player) else {
            debug!(%team, slot, "substitution ignored: slot out of range");
            return false;
        };
        self.record(
            EventKind::Substitution {
                team,
                old_player: old_player.clone(),
                new_player: new_player.to_string(),
                position: slot + 1,
            },
            Action::Substitution {
                team,
                slot,
                old_player,
            },
        );
        true
    }

    /// Record that `player` of `team` served.
    pub fn serve(&mut self, team: TeamId, player: &str) -> bool {
        if player.is_empty() {
            debug!(%team, "serve ignored: empty player name");
            return false;
        }
        self.serving = Some(team);
        self.record(
            EventKind::Serve {
                team,
                player: player.to_string(),
            },
            Action::Serve { team },
        );
        true
    }

    /// Log both starting lineups. Only the first call has any effect, and
    /// it cannot be undone.
    pub fn start_match(&mut self) -> bool {
        if self.started {
            debug!("start ignored: match already started");
            return false;
        }

        for team in TeamId::ALL {
            let roster = self.teams[team.index()].roster.clone();
            self.append_event(EventKind::Rotation { team, roster });
        }
        self.started = true;

        info!(set = %self.set_label, "match started");
        true
    }

    /// Spend one of `team`'s timeouts and start the countdown, replacing any
    /// countdown already running.
    pub fn request_timeout(&mut self, team: TeamId) -> bool {
        let duration_secs = self.config.timeout_duration_secs;
        {
            let t = self.team_mut(team);
            if t.timeouts_remaining == 0 {
                debug!(%team, "timeout ignored: none remaining");
                return false;
            }
            t.timeouts_remaining -= 1;
        }
        self.record(
            EventKind::Timeout {
                team,
                duration_secs,
            },
            Action::Timeout { team },
        );

        self.timeout_generation += 1;
        self.active_timeout = ActiveTimeout::start(team, duration_secs, self.timeout_generation);
        debug!(%team, duration_secs, generation = self.timeout_generation, "timeout started");
        true
    }

    /// Reverse the most recent logged operation.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop() else {
            debug!("undo ignored: history empty");
            return false;
        };
        debug!(action = action.kind(), "undo");

        match action {
            Action::Score { team } => {
                let t = self.team_mut(team);
                t.score = t.score.saturating_sub(1);
                self.log.pop_score();
            }
            Action::Rotation {
                team,
                previous,
                sequence,
            } => {
                self.team_mut(team).roster = previous;
                self.log.remove_rotation(team, sequence);
            }
            Action::Substitution {
                team,
                slot,
                old_player,
            } => {
                self.team_mut(team).roster.replace(slot, old_player);
                self.log.pop_substitution();
            }
            Action::Serve { .. } => {
                self.log.pop_serve();
            }
            Action::Timeout { team } => {
                self.team_mut(team).timeouts_remaining += 1;
                self.log.pop_timeout();
            }
        }
        true
    }

    /// Back to a fresh match: default teams, empty logs and history.
    /// The configured timeout duration is kept.
    pub fn reset(&mut self) {
        self.teams = Self::default_teams(&self.config);
        self.set_label = self.config.set_label.clone();
        self.started = false;
        self.serving = None;
        self.active_timeout = None;
        self.log = EventLog::new();
        self.history.clear();
        info!("match reset");
    }

    // --- Cosmetic Edits (not logged, not undoable) ---

    pub fn rename_team(&mut self, team: TeamId, name: impl Into<String>) {
        self.team_mut(team).name = name.into();
    }

    /// Edit a roster slot directly. Out-of-range slots are ignored.
    pub fn set_player_name(&mut self, team: TeamId, slot: usize, name: impl Into<String>) -> bool {
        if slot >= ROSTER_SIZE {
            debug!(%team, slot, "player edit ignored: slot out of range");
            return false;
        }
        self.team_mut(team).roster.replace(slot, name);
        true
    }

    /// Change the label stamped on future events.
    pub fn set_set_label(&mut self, label: impl Into<String>) {
        self.set_label = label.into();
    }

    /// Change the length of future timeouts. A running countdown keeps its
    /// remaining time.
    pub fn set_timeout_duration(&mut self, secs: u32) {
        self.config.timeout_duration_secs = secs;
    }

    // --- Countdown ---

    /// Advance the active countdown by one second. Returns `false` if no
    /// countdown was running.
    pub fn tick_timeout(&mut self) -> bool {
        let Some(active) = self.active_timeout else {
            return false;
        };
        self.active_timeout = active.tick();
        trace!(remaining = ?self.active_timeout.map(|a| a.remaining_secs), "timeout tick");
        if self.active_timeout.is_none() {
            debug!(team = %active.team, "timeout finished");
        }
        true
    }

    /// Like [`tick_timeout`](Self::tick_timeout), but only if the running
    /// countdown was started by `generation`.
    pub fn tick_timeout_generation(&mut self, generation: u64) -> bool {
        match self.active_timeout {
            Some(active) if active.generation == generation => self.tick_timeout(),
            _ => {
                trace!(generation, "stale timeout tick ignored");
                false
            }
        }
    }

    // --- Reads ---

    pub fn team(&self, team: TeamId) -> &Team {
        &self.teams[team.index()]
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn set_label(&self) -> &str {
        &self.set_label
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn serving_team(&self) -> Option<TeamId> {
        self.serving
    }

    pub fn active_timeout(&self) -> Option<ActiveTimeout> {
        self.active_timeout
    }

    pub fn logs(&self) -> &EventLog {
        &self.log
    }

    /// Number of undoable operations.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            teams: self.teams.clone(),
            set_label: self.set_label.clone(),
            started: self.started,
            serving_team: self.serving,
            active_timeout: self.active_timeout,
            timeout_duration_secs: self.config.timeout_duration_secs,
            event_count: self.log.len(),
            undo_depth: self.history.len(),
        }
    }

    /// Merge all logs into a chronological report.
    pub fn report(&self) -> MatchReport {
        MatchReport::build(&self.log, &self.teams, &self.set_label)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchState")
            .field("teams", &self.teams)
            .field("set_label", &self.set_label)
            .field("started", &self.started)
            .field("serving", &self.serving)
            .field("active_timeout", &self.active_timeout)
            .field("events", &self.log.len())
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}
