//! Command handlers. These play the part of the presentation layer: they
//! run the caller-side validation, invoke store operations and print views.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::json;

use waypoint_core::models::{CareerPathPatch, GoalPatch, NewCareerPath, NewGoal, NewWeeklyReview};
use waypoint_core::progress;
use waypoint_core::validate::{validate_new_career_path, validate_new_goal, validate_new_review};

use crate::cli::{ConfigCommands, GoalCommands, PathCommands, ReviewCommands, TrackerCommands};
use crate::config::{self, WaypointConfig};
use crate::render;
use crate::state::{resolve_slot, AppState, Output};
use crate::views::{self, GoalFilter};

fn emit<T: Serialize>(output: Output, value: &T, human: impl FnOnce() -> String) -> eyre::Result<()> {
    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(value)?),
        Output::Human => print!("{}", human()),
    }
    Ok(())
}

pub fn run(app: &mut AppState, command: TrackerCommands) -> eyre::Result<()> {
    match command {
        TrackerCommands::Dashboard => dashboard(app),
        TrackerCommands::Path { command } => path(app, command),
        TrackerCommands::Goal { command } => goal(app, command),
        TrackerCommands::Review { command } => review(app, command),
    }
}

fn dashboard(app: &AppState) -> eyre::Result<()> {
    let view = views::dashboard(app.store.state());
    emit(app.output, &view, || render::dashboard(&view))
}

fn path(app: &mut AppState, command: PathCommands) -> eyre::Result<()> {
    match command {
        PathCommands::List => {
            let cards = views::path_cards(app.store.state());
            emit(app.output, &cards, || render::path_list(&cards))
        }
        PathCommands::Show { id } => match views::path_detail(app.store.state(), &id) {
            Some(view) => emit(app.output, &view, || render::path_detail(&view)),
            None => Err(eyre::eyre!("no career path with id {id}")),
        },
        PathCommands::Add {
            title,
            description,
            motivation,
            color,
            image,
        } => {
            let new = NewCareerPath {
                title,
                description,
                motivation: motivation.filter(|m| !m.trim().is_empty()),
                color,
                image,
            };
            validate_new_career_path(&new)?;
            let added = app.store.add_career_path(new);
            emit(app.output, &added, || {
                format!("Vision added: {}", render::career_path(&added))
            })
        }
        PathCommands::Update {
            id,
            title,
            description,
            motivation,
            clear_motivation,
            color,
            image,
        } => {
            let patch = CareerPathPatch {
                title,
                description,
                motivation: if clear_motivation { Some(None) } else { motivation.map(Some) },
                color,
                image,
            };
            if patch.is_empty() {
                return Err(eyre::eyre!("nothing to update: pass at least one field"));
            }
            app.store.update_career_path(&id, patch);
            match app.store.career_path(&id) {
                Some(updated) => emit(app.output, updated, || {
                    format!("Updated {}", render::career_path(updated))
                }),
                None => emit(app.output, &serde_json::Value::Null, || {
                    format!("No career path with id {id}; nothing changed.\n")
                }),
            }
        }
        PathCommands::Delete { id } => {
            let removed_goals = progress::goals_for_path(app.store.goals(), &id).len();
            let deleted = app.store.delete_career_path(&id);
            let result = json!({ "id": id, "deleted": deleted, "removedGoals": removed_goals });
            emit(app.output, &result, || {
                if deleted {
                    format!("Deleted career path {id} and {removed_goals} goal(s).\n")
                } else {
                    format!("No career path with id {id}; nothing changed.\n")
                }
            })
        }
    }
}

fn goal(app: &mut AppState, command: GoalCommands) -> eyre::Result<()> {
    match command {
        GoalCommands::List {
            path,
            timeframe,
            completed,
            pending,
        } => {
            let filter = GoalFilter {
                path,
                timeframe,
                completed: match (completed, pending) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
            };
            let goals = filter.apply(app.store.goals());
            emit(app.output, &goals, || render::goal_list(&goals))
        }
        GoalCommands::Add {
            path,
            title,
            timeframe,
            parent,
            due,
        } => {
            let new = NewGoal {
                career_path_id: path,
                title,
                timeframe,
                parent_goal_id: parent,
                due_date: due,
            };
            validate_new_goal(&new, app.store.career_paths())?;
            let added = app.store.add_goal(new);
            emit(app.output, &added, || {
                format!("Goal added: {}\n", render::goal_line(&added))
            })
        }
        GoalCommands::Toggle { id } => {
            app.store.toggle_goal(&id);
            match app.store.goal(&id) {
                Some(goal) => emit(app.output, goal, || format!("{}\n", render::goal_line(goal))),
                None => emit(app.output, &serde_json::Value::Null, || {
                    format!("No goal with id {id}; nothing changed.\n")
                }),
            }
        }
        GoalCommands::Update {
            id,
            path,
            title,
            timeframe,
            parent,
            clear_parent,
            due,
            clear_due,
            completed,
        } => {
            let patch = GoalPatch {
                career_path_id: path,
                title,
                timeframe,
                parent_goal_id: if clear_parent { Some(None) } else { parent.map(Some) },
                is_completed: completed,
                due_date: if clear_due { Some(None) } else { due.map(Some) },
            };
            if patch.is_empty() {
                return Err(eyre::eyre!("nothing to update: pass at least one field"));
            }
            app.store.update_goal(&id, patch);
            match app.store.goal(&id) {
                Some(goal) => emit(app.output, goal, || {
                    format!("Updated {}\n", render::goal_line(goal))
                }),
                None => emit(app.output, &serde_json::Value::Null, || {
                    format!("No goal with id {id}; nothing changed.\n")
                }),
            }
        }
        GoalCommands::Delete { id } => {
            let deleted = app.store.delete_goal(&id);
            let result = json!({ "id": id, "deleted": deleted });
            emit(app.output, &result, || {
                if deleted {
                    format!("Deleted goal {id}.\n")
                } else {
                    format!("No goal with id {id}; nothing changed.\n")
                }
            })
        }
    }
}

fn review(app: &mut AppState, command: ReviewCommands) -> eyre::Result<()> {
    match command {
        ReviewCommands::List => {
            let reviews = app.store.reviews();
            emit(app.output, &reviews, || render::review_list(reviews))
        }
        ReviewCommands::Add {
            summary,
            priorities,
            week_start,
        } => {
            let new = NewWeeklyReview {
                week_start_date: week_start.unwrap_or_else(jiff::Timestamp::now),
                summary,
                priorities: priorities
                    .into_iter()
                    .filter(|p| !p.trim().is_empty())
                    .collect(),
                completed_goal_ids: progress::completed_goal_ids(app.store.goals()),
            };
            validate_new_review(&new)?;
            let added = app.store.add_review(new);
            emit(app.output, &added, || {
                format!("Strategy session logged.\n{}", render::review(&added))
            })
        }
    }
}

/// Config commands do not need the tracker; `main` runs them before the
/// store is opened.
pub fn run_config(
    config_dir: &Path,
    mut config: WaypointConfig,
    data_file: Option<&Path>,
    output: Output,
    command: ConfigCommands,
) -> eyre::Result<()> {
    match command {
        ConfigCommands::Show => {
            let slot = resolve_slot(data_file, &config)?;
            let info = config::config_info(config_dir, &config, slot.path());
            emit(output, &info, || {
                format!(
                    "config:     {}{}\ndata file:  {}\nlog filter: {}\nlog format: {}\n",
                    info.config_path,
                    if info.exists { "" } else { " (not saved yet)" },
                    info.data_file,
                    info.log_filter,
                    info.log_format.as_str(),
                )
            })
        }
        ConfigCommands::SetDataFile { path } => {
            let path = absolute(path)?;
            config.data_file = Some(path.clone());
            config::save_config(config_dir, &config)?;
            emit(output, &json!({ "dataFile": path }), || {
                format!("Data file set to {}\n", path.display())
            })
        }
        ConfigCommands::SetLogFilter { filter } => {
            config.log_filter = Some(filter.clone());
            config::save_config(config_dir, &config)?;
            emit(output, &json!({ "logFilter": filter }), || {
                format!("Log filter set to {filter}\n")
            })
        }
    }
}

fn absolute(path: PathBuf) -> eyre::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
