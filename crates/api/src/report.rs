// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tabular attendance report for export.
//!
//! One row per participant, two cells per session instance (start and
//! end), plus the per-participant session rate and the activity-wide
//! rollups for the footer. The report is a pure projection of the same
//! snapshot the live table renders; building it twice from the same
//! inputs yields the same rows.

use chrono::{DateTime, Utc};
use rollcall::{
    ActivityRollups, ParticipantAttendance, Scope, SessionRate, SessionRule,
    compute_activity_rollups, compute_session_rate, resolve_slot_status, session_instances,
};
use rollcall_domain::{Activity, ActivityKind, ApprovalStatus, CheckInType, TimeStatus};
use serde::Serialize;

/// One start or end cell of the report grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCell {
    /// Whether the participant is registered for this session instance.
    pub registered: bool,
    /// Whether a matching check-in record exists.
    pub has_checked_in: bool,
    /// Verification status of the matching record, if any.
    pub approval: Option<ApprovalStatus>,
    /// Window or timeliness classification.
    pub time_status: TimeStatus,
}

impl ReportCell {
    /// Renders this cell as a short export string.
    #[must_use]
    pub fn text(&self) -> String {
        if !self.registered {
            return String::from("unregistered");
        }
        if self.has_checked_in {
            let approval: &str = self.approval.unwrap_or(ApprovalStatus::Pending).as_str();
            return format!("{}/{}", approval, self.time_status.as_str());
        }
        String::from(self.time_status.as_str())
    }
}

/// One participant row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Canonical user id.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Two cells per column, start before end, in column order.
    pub cells: Vec<ReportCell>,
    /// Either-approved session completion for this participant.
    pub session_rate: SessionRate,
}

/// The assembled report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// One label per session instance, in schedule order.
    pub columns: Vec<String>,
    /// One row per roster participant, in roster order.
    pub rows: Vec<ReportRow>,
    /// Activity-wide rollups for the footer.
    pub rollups: ActivityRollups,
}

/// Builds the export report for an activity and roster.
///
/// # Arguments
///
/// * `activity` - The activity definition
/// * `roster` - Participants paired with their raw records
/// * `now` - The current instant, used for window classification
#[must_use]
pub fn build_report(
    activity: &Activity,
    roster: &[ParticipantAttendance<'_>],
    now: DateTime<Utc>,
) -> Report {
    let instances = session_instances(activity);

    let columns: Vec<String> = instances
        .iter()
        .map(|instance| match (activity.kind, instance.day) {
            (ActivityKind::MultipleDays, Some(day)) => {
                format!("Ngày {day} - {}", instance.slot.name())
            }
            _ => instance.slot.name().to_string(),
        })
        .collect();

    let rows: Vec<ReportRow> = roster
        .iter()
        .map(|attendance| {
            let mut cells: Vec<ReportCell> = Vec::with_capacity(instances.len() * 2);
            for instance in &instances {
                let registered: bool = attendance.participant.registration.covers(
                    activity.kind,
                    instance.day,
                    instance.slot.name(),
                );
                for check_in_type in [CheckInType::Start, CheckInType::End] {
                    let status = resolve_slot_status(
                        activity,
                        attendance.records,
                        instance.slot,
                        check_in_type,
                        instance.day,
                        now,
                    );
                    cells.push(ReportCell {
                        registered,
                        has_checked_in: status.has_checked_in,
                        approval: status.approval,
                        time_status: status.time_status,
                    });
                }
            }

            let session_rate: SessionRate = compute_session_rate(
                activity,
                roster,
                Scope::Participant(&attendance.participant.user_id),
                SessionRule::EitherApproved,
            );

            ReportRow {
                user_id: attendance.participant.user_id.clone(),
                name: attendance.participant.name.clone(),
                email: attendance.participant.email.clone(),
                cells,
                session_rate,
            }
        })
        .collect();

    Report {
        columns,
        rows,
        rollups: compute_activity_rollups(activity, roster, now),
    }
}

/// Header labels matching the cell layout of [`ReportRow`].
#[must_use]
pub fn report_headers(report: &Report) -> Vec<String> {
    let mut headers: Vec<String> =
        vec![String::from("User ID"), String::from("Name"), String::from("Email")];
    for column in &report.columns {
        headers.push(format!("{column} (start)"));
        headers.push(format!("{column} (end)"));
    }
    headers.push(String::from("Sessions (%)"));
    headers
}
