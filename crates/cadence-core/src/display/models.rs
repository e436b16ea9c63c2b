//! Display implementations for domain models.
//!
//! Everything renders as markdown, shared by the terminal renderer and the
//! MCP server.

use std::fmt;

use super::datetime::{LongDate, RelativeWeek};
use crate::models::{
    Category, DayStats, DayView, PlanDay, Priority, Session, StudyPlan, Task, TaskView, WeekView,
};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

impl Task {
    /// "09:00-10:00", or just "09:00" for point events.
    pub fn time_range(&self) -> String {
        if self.is_point_event() {
            self.start_time.clone()
        } else {
            format!("{}-{}", self.start_time, self.end_time)
        }
    }

    fn fmt_metadata(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- ID: {}", self.id)?;
        if let Some(category) = self.category {
            writeln!(f, "- Category: {category}")?;
        }
        match (self.is_recurring, self.week_offset) {
            (true, _) => writeln!(f, "- Repeats weekly")?,
            (false, Some(offset)) => writeln!(
                f,
                "- One-off ({} when added)",
                RelativeWeek(offset)
            )?,
            (false, None) => writeln!(f, "- One-off")?,
        }
        if self.is_urgent {
            writeln!(f, "- **Urgent**")?;
        }
        Ok(())
    }

    fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.details.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.details)?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {}", self.time_range(), self.title)?;
        writeln!(f)?;
        self.fmt_metadata(f)?;
        self.fmt_details(f)?;
        writeln!(f)
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.task;
        writeln!(
            f,
            "### {} {} ({})",
            task.time_range(),
            task.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if self.is_active {
            writeln!(f, "- **Now**")?;
        } else if let Some(countdown) = &self.countdown {
            writeln!(f, "- **Starts {countdown}**")?;
        } else if self.is_past {
            writeln!(f, "- Ended")?;
        }
        task.fmt_metadata(f)?;
        if let Some(note) = self.failure_note.as_deref().filter(|n| !n.is_empty()) {
            writeln!(f, "- Failure note: {note}")?;
        }
        task.fmt_details(f)?;
        writeln!(f)
    }
}

impl fmt::Display for DayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total, {} completed, {} failed, {} pending",
            self.total, self.completed, self.failed, self.pending
        )
    }
}

impl fmt::Display for DayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let today = if self.is_today { " (today)" } else { "" };
        writeln!(f, "# {}{today}", LongDate(self.date))?;
        writeln!(f)?;
        writeln!(
            f,
            "Week of {} ({})",
            self.week_label,
            RelativeWeek(self.week_offset)
        )?;
        writeln!(f)?;

        if let Some(task) = &self.happening_now {
            writeln!(
                f,
                "**Happening now**: {} ({})",
                task.title,
                task.time_range()
            )?;
            writeln!(f)?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "No tasks scheduled for this day.")?;
            return Ok(());
        }

        writeln!(f, "- {}", self.stats)?;
        writeln!(f)?;
        writeln!(f, "## Tasks")?;
        writeln!(f)?;
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WeekView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Week of {} ({})", self.label, RelativeWeek(self.week_offset))?;
        writeln!(f)?;
        for day in &self.days {
            let today = if day.is_today { " (today)" } else { "" };
            if day.stats.total == 0 {
                writeln!(f, "- **{}**{today}: no tasks", LongDate(day.date))?;
            } else {
                writeln!(f, "- **{}**{today}: {}", LongDate(day.date), day.stats)?;
            }
        }
        Ok(())
    }
}

impl Priority {
    fn icon(&self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} **{}** [{}]",
            self.time,
            self.icon,
            self.title,
            self.kind.as_str()
        )?;
        if !self.focus.is_empty() {
            write!(f, ": {}", self.focus)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.day, self.date)?;
        writeln!(f)?;
        if self.sessions.is_empty() {
            writeln!(f, "No sessions.")?;
        }
        for (index, session) in self.sessions.iter().enumerate() {
            writeln!(f, "{}. {session}", index + 1)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study Plan")?;
        writeln!(f)?;

        if !self.urgent.is_empty() {
            writeln!(f, "## Urgent")?;
            writeln!(f)?;
            for task in &self.urgent {
                writeln!(
                    f,
                    "- {} **{}** (due {}, {} priority)",
                    task.priority.icon(),
                    task.title,
                    task.due,
                    task.priority.as_str()
                )?;
            }
            writeln!(f)?;
        }

        for day in &self.days {
            write!(f, "{day}")?;
        }

        writeln!(f, "## Stats")?;
        writeln!(f)?;
        writeln!(f, "- Total study hours: {}", self.stats.total_hours)?;
        for subject in &self.stats.subjects {
            writeln!(f, "- {}: {}h ({})", subject.name, subject.hours, subject.color)?;
        }

        if !self.tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Tips")?;
            writeln!(f)?;
            for tip in &self.tips {
                writeln!(f, "- {tip}")?;
            }
        }
        Ok(())
    }
}
