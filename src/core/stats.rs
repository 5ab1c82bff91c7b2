//! Derived plan statistics
//!
//! One pass over the flattened course list. The `regular` count in the
//! result is cumulative (`regular + aprobada`), matching what callers
//! display as "at least regular"; the completion percentage uses the
//! exclusive figure internally.

use super::grades::GradeBook;
use super::models::{EffectiveStatus, StudyPlan};
use super::statuses::StatusOverrides;
use std::fmt;

/// Hour totals assume a 16-week term
pub const WEEKS_PER_TERM: u32 = 16;

/// Placeholder shown when no course has a grade
pub const NO_AVERAGE: &str = "—";

/// Aggregated view of plan progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStats {
    /// Total number of courses
    pub total: usize,
    /// Courses reading pendiente
    pub pendiente: usize,
    /// Courses reading cursar (available)
    pub cursar: usize,
    /// Courses reading at least regular (cumulative with aprobada)
    pub regular: usize,
    /// Courses reading aprobada
    pub aprobada: usize,
    /// Sum of `weeklyHours * 16` over all courses
    pub total_hours: u32,
    /// Same sum over courses reading aprobada or regular
    pub completed_hours: u32,
    /// Number of courses contributing to the average
    pub graded_count: usize,
    /// Mean grade formatted to two decimals, or `NO_AVERAGE` when nothing is graded
    pub average: String,
    /// Rounded percentage of aprobada + exclusive-regular courses
    pub pct_complete: u32,
}

/// Compute stats for a plan given its overrides and grades
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn plan_stats(plan: &StudyPlan, statuses: &StatusOverrides, grades: &GradeBook) -> PlanStats {
    let mut pendiente = 0usize;
    let mut cursar = 0usize;
    let mut regular = 0usize;
    let mut aprobada = 0usize;
    let mut total_hours = 0u32;
    let mut completed_hours = 0u32;
    let mut grade_sum = 0u32;
    let mut graded_count = 0usize;

    let courses = plan.all_courses();
    for course in &courses {
        let effective = statuses.effective(plan, &course.id);
        match effective {
            EffectiveStatus::Pendiente => pendiente += 1,
            EffectiveStatus::Cursar => cursar += 1,
            EffectiveStatus::Regular => regular += 1,
            EffectiveStatus::Aprobada => aprobada += 1,
        }

        let hours = course.weekly_hours * WEEKS_PER_TERM;
        total_hours += hours;
        if effective.counts_completed() {
            completed_hours += hours;
        }

        if let Some(grade) = grades.get(&course.id) {
            grade_sum += u32::from(grade);
            graded_count += 1;
        }
    }

    let total = courses.len();
    let regular_exclusive = regular;

    let average = if graded_count == 0 {
        NO_AVERAGE.to_string()
    } else {
        format!("{:.2}", f64::from(grade_sum) / graded_count as f64)
    };

    let pct_complete = if total == 0 {
        0
    } else {
        (((aprobada + regular_exclusive) as f64 / total as f64) * 100.0).round() as u32
    };

    PlanStats {
        total,
        pendiente,
        cursar,
        regular: regular_exclusive + aprobada,
        aprobada,
        total_hours,
        completed_hours,
        graded_count,
        average,
        pct_complete,
    }
}

impl fmt::Display for PlanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Materias:    {}", self.total)?;
        writeln!(f, "  aprobada:  {}", self.aprobada)?;
        writeln!(f, "  regular:   {}", self.regular)?;
        writeln!(f, "  cursar:    {}", self.cursar)?;
        writeln!(f, "  pendiente: {}", self.pendiente)?;
        writeln!(f, "Horas:       {} / {}", self.completed_hours, self.total_hours)?;
        writeln!(f, "Promedio:    {} ({} notas)", self.average, self.graded_count)?;
        writeln!(f, "Completado:  {}%", self.pct_complete)
    }
}
