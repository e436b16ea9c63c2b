//! Command argument wrappers and their handlers.
//!
//! Each subcommand's clap arguments live here next to a `From` conversion
//! into the matching core parameter type, so clap attributes never leak into
//! `cadence-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] executes the parsed commands against a [`Planner`] and renders the
//! markdown the core display wrappers produce.

use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use cadence_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    generator::{OpenAiClient, StudyPlanGenerator, DEFAULT_MODEL},
    models::{Category, SessionKind, Weekday},
    params::{
        AddTask, Occurrence, SessionRef, StatusChange, TaskRef, UpdateSession, UpdateTaskStatus,
        ViewDay, ViewWeek,
    },
    Planner,
};
use clap::{Args, Subcommand};
use log::info;
use tokio::time;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Views
// ============================================================================

/// Show the week overview
#[derive(Args)]
pub struct WeekArgs {
    /// Week offset from the current week (0 = this week, -1 = last week)
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

impl From<WeekArgs> for ViewWeek {
    fn from(val: WeekArgs) -> Self {
        ViewWeek {
            week_offset: val.offset,
        }
    }
}

/// Show one day's tasks
#[derive(Args)]
pub struct DayArgs {
    /// Weekday to show, e.g. "monday" or "mon". Defaults to today
    pub weekday: Option<Weekday>,
    /// Week offset from the current week (0 = this week, -1 = last week)
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

impl From<DayArgs> for ViewDay {
    fn from(val: DayArgs) -> Self {
        ViewDay {
            weekday: val.weekday,
            week_offset: val.offset,
        }
    }
}

/// Keep a day view on screen
#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub day: DayArgs,
    /// Seconds between refreshes
    #[arg(long, short, default_value_t = 60)]
    pub interval: u64,
}

// ============================================================================
// Tasks
// ============================================================================

/// Add a task to the weekly schedule
#[derive(Args)]
pub struct AddTaskArgs {
    /// Weekday the task belongs to
    pub weekday: Weekday,
    /// Title of the task
    pub title: String,
    /// Start time, HH:MM (24-hour)
    #[arg(long, short)]
    pub start: Option<String>,
    /// End time, HH:MM (24-hour)
    #[arg(long, short)]
    pub end: Option<String>,
    /// Make this a point event that ends when it starts
    #[arg(long, conflicts_with_all = ["end", "chain"])]
    pub same_as_start: bool,
    /// Start 5 minutes after the last task of the day
    #[arg(long, conflicts_with = "start")]
    pub chain: bool,
    /// Free text notes
    #[arg(long, short)]
    pub details: Option<String>,
    /// Category id, e.g. study, workout, eat
    #[arg(long, short)]
    pub category: Option<Category>,
    /// Flag the task as urgent
    #[arg(long, short)]
    pub urgent: bool,
    /// Repeat every week instead of only in the week given by --offset
    #[arg(long, short)]
    pub recurring: bool,
    /// Week the one-off task is for (0 = this week)
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            weekday: val.weekday,
            title: val.title,
            start_time: val.start.unwrap_or_default(),
            end_time: val.end.unwrap_or_default(),
            details: val.details.unwrap_or_default(),
            category: val.category,
            is_urgent: val.urgent,
            is_recurring: val.recurring,
            same_as_start: val.same_as_start,
            chain_to_previous: val.chain,
            week_offset: val.offset,
        }
    }
}

/// Delete a task from the weekly schedule
#[derive(Args)]
pub struct TaskRefArgs {
    /// Weekday the task belongs to
    pub weekday: Weekday,
    /// ID of the task
    pub id: String,
}

impl From<TaskRefArgs> for TaskRef {
    fn from(val: TaskRefArgs) -> Self {
        TaskRef {
            weekday: val.weekday,
            task_id: val.id,
        }
    }
}

/// One occurrence of a task
#[derive(Args)]
pub struct OccurrenceArgs {
    /// Weekday of the occurrence
    pub weekday: Weekday,
    /// ID of the task
    pub id: String,
    /// Week offset of the occurrence (0 = this week)
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

impl From<OccurrenceArgs> for Occurrence {
    fn from(val: OccurrenceArgs) -> Self {
        Occurrence {
            weekday: val.weekday,
            task_id: val.id,
            week_offset: val.offset,
        }
    }
}

/// Mark an occurrence failed
#[derive(Args)]
pub struct FailArgs {
    #[command(flatten)]
    pub occurrence: OccurrenceArgs,
    /// What got in the way
    #[arg(long, short)]
    pub note: Option<String>,
}

/// Replace the failure note of a failed occurrence
#[derive(Args)]
pub struct NoteArgs {
    #[command(flatten)]
    pub occurrence: OccurrenceArgs,
    /// The new note
    #[arg(long, short)]
    pub note: String,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(TaskRefArgs),
    /// Mark an occurrence completed
    Done(OccurrenceArgs),
    /// Mark an occurrence failed
    Fail(FailArgs),
    /// Return a completed or failed occurrence to pending
    Undo(OccurrenceArgs),
    /// Edit the failure note of a failed occurrence
    Note(NoteArgs),
}

impl TaskCommands {
    fn into_status_update(self) -> Option<UpdateTaskStatus> {
        let (occurrence, change, note) = match self {
            TaskCommands::Done(occurrence) => (occurrence, StatusChange::Done, None),
            TaskCommands::Fail(FailArgs { occurrence, note }) => {
                (occurrence, StatusChange::Fail, note)
            }
            TaskCommands::Undo(occurrence) => (occurrence, StatusChange::Undo, None),
            TaskCommands::Note(NoteArgs { occurrence, note }) => {
                (occurrence, StatusChange::Note, Some(note))
            }
            TaskCommands::Add(_) | TaskCommands::Delete(_) => return None,
        };
        Some(UpdateTaskStatus {
            occurrence: occurrence.into(),
            change,
            note,
        })
    }
}

// ============================================================================
// Study plan
// ============================================================================

/// Generate a study plan from a description of your week
#[derive(Args)]
pub struct GenerateArgs {
    /// Free-text description of classes, deadlines and commitments
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,
    /// Read the description from a file instead
    #[arg(long, short)]
    pub file: Option<PathBuf>,
    /// OpenAI API key. Falls back to the stored key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
    /// Chat completions endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// A study plan session by weekday and position (starting at 1)
#[derive(Args)]
pub struct SessionRefArgs {
    pub day: Weekday,
    pub number: usize,
}

impl From<SessionRefArgs> for SessionRef {
    fn from(val: SessionRefArgs) -> Self {
        SessionRef {
            day: val.day,
            number: val.number,
        }
    }
}

/// Edit a study plan session. Only the given fields change
#[derive(Args)]
pub struct EditSessionArgs {
    #[command(flatten)]
    pub session: SessionRefArgs,
    /// Time range, e.g. "14:00-16:00"
    #[arg(long)]
    pub time: Option<String>,
    /// Session type: class, study, work, rest, commute or free
    #[arg(long = "type")]
    pub kind: Option<SessionKind>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub focus: Option<String>,
}

impl From<EditSessionArgs> for UpdateSession {
    fn from(val: EditSessionArgs) -> Self {
        UpdateSession {
            session: val.session.into(),
            time: val.time,
            kind: val.kind,
            title: val.title,
            icon: val.icon,
            focus: val.focus,
        }
    }
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Append a placeholder session to a day
    #[command(alias = "a")]
    Add {
        day: Weekday,
    },
    /// Edit a session
    #[command(alias = "e")]
    Edit(EditSessionArgs),
    /// Delete a session
    #[command(aliases = ["d", "rm"])]
    Delete(SessionRefArgs),
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the study plan
    #[command(alias = "s")]
    Show,
    /// Delete the study plan
    Clear,
    /// Generate a new study plan, replacing the current one
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Edit sessions of the study plan
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Store an OpenAI API key
    Set {
        /// Key starting with "sk-"
        key: String,
    },
    /// Show the stored key, masked
    Show,
}

/// Masks all but the prefix and the last four characters of a key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

// ============================================================================
// Handlers
// ============================================================================

/// Executes commands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn show_week(&self, params: &ViewWeek) -> Result<()> {
        let week = self
            .planner
            .week(params)
            .await
            .context("Failed to load week")?;
        self.renderer.render(&week.to_string())
    }

    pub async fn show_day(&self, params: &ViewDay) -> Result<()> {
        let day = self
            .planner
            .day(params)
            .await
            .context("Failed to load day")?;
        self.renderer.render(&day.to_string())
    }

    /// Redraws the day view every `interval` until interrupted.
    pub async fn watch(&self, args: WatchArgs) -> Result<()> {
        let params = ViewDay::from(args.day);
        let mut ticker = time::interval(Duration::from_secs(args.interval.max(1)));
        info!("Watching day view every {}s", args.interval.max(1));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.renderer.clear();
                    self.show_day(&params).await?;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopped watching");
                    return Ok(());
                }
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self
                    .planner
                    .add_task(&args.into())
                    .await
                    .context("Failed to add task")?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::Delete(args) => {
                let params = TaskRef::from(args);
                let deleted = self
                    .planner
                    .delete_task(&params)
                    .await
                    .context("Failed to delete task")?;
                match deleted {
                    Some(task) => self.renderer.render(&DeleteResult::new(task).to_string()),
                    None => bail!(
                        "Task with ID {} not found on {}",
                        params.task_id,
                        params.weekday
                    ),
                }
            }
            status_command => {
                let Some(params) = status_command.into_status_update() else {
                    return Ok(());
                };
                let view = self
                    .planner
                    .update_task_status(&params)
                    .await
                    .context("Failed to update task status")?;
                let change = format!("Status: {}", view.status.with_icon());
                self.renderer
                    .render(&UpdateResult::with_changes(view, vec![change]).to_string())
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Show => {
                let plan = self
                    .planner
                    .study_plan()
                    .await
                    .context("Failed to load study plan")?;
                match plan {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.renderer.render(
                        "No study plan yet. Generate one with `cadence plan generate`.\n",
                    ),
                }
            }
            PlanCommands::Clear => {
                let cleared = self
                    .planner
                    .clear_study_plan()
                    .await
                    .context("Failed to clear study plan")?;
                let status = if cleared {
                    OperationStatus::success("Cleared the study plan")
                } else {
                    OperationStatus::success("No study plan to clear")
                };
                self.renderer.render(&status.to_string())
            }
            PlanCommands::Generate(args) => self.generate_plan(args).await,
            PlanCommands::Session { command } => self.handle_session_command(command).await,
        }
    }

    async fn generate_plan(&self, args: GenerateArgs) -> Result<()> {
        let input = match (args.text, args.file) {
            (Some(text), _) => text,
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, None) => bail!("Describe your week as text or pass --file"),
        };

        let api_key = match args.api_key {
            Some(key) => key,
            None => self
                .planner
                .api_key()
                .await
                .context("Failed to load API key")?
                .context("No API key. Store one with `cadence key set` or set OPENAI_API_KEY")?,
        };

        let client = OpenAiClient::new(args.endpoint).context("Failed to create HTTP client")?;
        let generator = StudyPlanGenerator::new(client).with_model(args.model);

        info!("Generating study plan");
        let plan = self
            .planner
            .generate_study_plan(&generator, &input, &api_key)
            .await
            .context("Failed to generate study plan")?;
        self.renderer.render(&plan.to_string())
    }

    async fn handle_session_command(&self, command: SessionCommands) -> Result<()> {
        match command {
            SessionCommands::Add { day } => {
                let plan_day = self
                    .planner
                    .add_session(day)
                    .await
                    .context("Failed to add session")?;
                self.renderer
                    .render(&CreateResult::new(plan_day).to_string())
            }
            SessionCommands::Edit(args) => {
                let result = self
                    .planner
                    .update_session(args.into())
                    .await
                    .context("Failed to update session")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::Delete(args) => {
                let session = self
                    .planner
                    .delete_session(&args.into())
                    .await
                    .context("Failed to delete session")?;
                self.renderer
                    .render(&DeleteResult::new(session).to_string())
            }
        }
    }

    pub async fn handle_key_command(&self, command: KeyCommands) -> Result<()> {
        match command {
            KeyCommands::Set { key } => {
                self.planner
                    .set_api_key(&key)
                    .await
                    .context("Failed to store API key")?;
                self.renderer
                    .render(&OperationStatus::success("Stored API key").to_string())
            }
            KeyCommands::Show => {
                let key = self
                    .planner
                    .api_key()
                    .await
                    .context("Failed to load API key")?;
                let message = match key {
                    Some(key) => format!("API key: {}\n", mask_key(&key)),
                    None => "No API key stored.\n".to_string(),
                };
                self.renderer.render(&message)
            }
        }
    }
}
