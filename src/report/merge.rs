//! Merging the event logs into one chronological report.

use crate::records::{Event, EventCategory, EventKind, EventLog};
use crate::types::{Sequence, Team, TeamId, Timestamp};
use serde::{Deserialize, Serialize};

/// One row of the exported match report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub time: Timestamp,
    pub category: EventCategory,
    pub set: String,
    pub team: TeamId,

    /// Full description, naming the team.
    pub details: String,

    /// Description relative to the team, for the two-column history view.
    pub summary: String,

    /// Append position, breaks ties between equal timestamps.
    pub sequence: Sequence,
}

/// One row of the on-screen match history: the summary goes in the
/// column of `team`, the time in the middle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub team: TeamId,
    pub time: Timestamp,
    pub details: String,
}

/// All logged events, merged and sorted ascending by time.
#[derive(Clone, Debug)]
pub struct MatchReport {
    rows: Vec<ReportRow>,
    set_label: String,
    team_names: [String; 2],
}

impl MatchReport {
    /// Build a report from the logs. Team names are taken as they are now,
    /// not as they were when each event was recorded.
    pub fn build(log: &EventLog, teams: &[Team; 2], set_label: &str) -> Self {
        let team_names = [teams[0].name.clone(), teams[1].name.clone()];

        let mut rows: Vec<ReportRow> = log
            .iter()
            .map(|event| Self::row_for(event, &team_names))
            .collect();
        // Stable, and ties fall back to append order.
        rows.sort_by_key(|row| (row.time, row.sequence));

        Self {
            rows,
            set_label: set_label.to_string(),
            team_names,
        }
    }

    fn row_for(event: &Event, team_names: &[String; 2]) -> ReportRow {
        let team = event.team();
        let name = &team_names[team.index()];

        let (details, summary) = match &event.kind {
            EventKind::Score { score, .. } => (
                format!("{name} scored 1 point to {score} points"),
                format!("Scored 1 point to {score} points"),
            ),
            EventKind::Rotation { roster, .. } => {
                (format!("{name} rotated to {roster}"), roster.to_string())
            }
            EventKind::Substitution {
                old_player,
                new_player,
                position,
                ..
            } => {
                let change = format!("{old_player} ➔ {new_player} Position {position}");
                (format!("{name}: {change}"), change)
            }
            EventKind::Serve { player, .. } => (
                format!("{name} — {player} served"),
                format!("{player} served"),
            ),
            EventKind::Timeout { duration_secs, .. } => (
                format!("{name} took a timeout for {duration_secs} seconds"),
                format!("Timeout for {duration_secs} seconds"),
            ),
        };

        ReportRow {
            time: event.timestamp,
            category: event.category(),
            set: event.set.clone(),
            team,
            details,
            summary,
            sequence: event.sequence,
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows for the two-column history table.
    pub fn history(&self) -> Vec<HistoryRow> {
        self.rows
            .iter()
            .map(|row| HistoryRow {
                team: row.team,
                time: row.time,
                details: row.summary.clone(),
            })
            .collect()
    }

    pub fn set_label(&self) -> &str {
        &self.set_label
    }

    pub fn team_names(&self) -> &[String; 2] {
        &self.team_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Roster;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn teams() -> [Team; 2] {
        [Team::new("Sharks", 2), Team::new("Eagles", 2)]
    }

    #[test]
    fn test_detail_strings() {
        let mut log = EventLog::new();
        let at = ts("2024-05-01 10:00:00");
        log.append(at, "Set 1", EventKind::Score { team: TeamId::Home, score: 3 });
        log.append(
            at,
            "Set 1",
            EventKind::Rotation {
                team: TeamId::Away,
                roster: Roster::from(["A", "B", "C", "D", "E", "F"]),
            },
        );
        log.append(
            at,
            "Set 1",
            EventKind::Substitution {
                team: TeamId::Home,
                old_player: "Ana".into(),
                new_player: "Bea".into(),
                position: 4,
            },
        );
        log.append(
            at,
            "Set 1",
            EventKind::Serve {
                team: TeamId::Away,
                player: "Kim".into(),
            },
        );
        log.append(
            at,
            "Set 1",
            EventKind::Timeout {
                team: TeamId::Home,
                duration_secs: 15,
            },
        );

        let report = MatchReport::build(&log, &teams(), "Set 1");
        let details: Vec<_> = report.rows().iter().map(|r| r.details.as_str()).collect();
        assert_eq!(
            details,
            vec![
                "Sharks scored 1 point to 3 points",
                "Eagles rotated to [A; B; C; D; E; F]",
                "Sharks: Ana ➔ Bea Position 4",
                "Eagles — Kim served",
                "Sharks took a timeout for 15 seconds",
            ]
        );

        let history = report.history();
        assert_eq!(history[0].details, "Scored 1 point to 3 points");
        assert_eq!(history[1].details, "[A; B; C; D; E; F]");
        assert_eq!(history[1].team, TeamId::Away);
        assert_eq!(history[2].details, "Ana ➔ Bea Position 4");
        assert_eq!(history[3].details, "Kim served");
        assert_eq!(history[4].details, "Timeout for 15 seconds");
    }

    #[test]
    fn test_sorted_by_time_across_logs() {
        let mut log = EventLog::new();
        log.append(
            ts("2024-05-01 10:00:05"),
            "Set 1",
            EventKind::Score { team: TeamId::Home, score: 1 },
        );
        log.append(
            ts("2024-05-01 10:00:01"),
            "Set 1",
            EventKind::Serve {
                team: TeamId::Home,
                player: "Ana".into(),
            },
        );

        let report = MatchReport::build(&log, &teams(), "Set 1");
        let categories: Vec<_> = report.rows().iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![EventCategory::Serving, EventCategory::Score]);
    }

    #[test]
    fn test_equal_times_keep_append_order() {
        let mut log = EventLog::new();
        let at = ts("2024-05-01 10:00:00");
        // Appended timeout-first; log-by-log iteration would put the score first.
        log.append(
            at,
            "Set 1",
            EventKind::Timeout {
                team: TeamId::Away,
                duration_secs: 15,
            },
        );
        log.append(at, "Set 1", EventKind::Score { team: TeamId::Home, score: 1 });

        let report = MatchReport::build(&log, &teams(), "Set 1");
        let categories: Vec<_> = report.rows().iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![EventCategory::Timeout, EventCategory::Score]);
    }
}
