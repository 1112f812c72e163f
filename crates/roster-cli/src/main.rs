use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use roster_core::config::StoreBackend;
use roster_core::domain::{CreateStudentPayload, UpdateGradePayload, UpdateStudentPayload};
use roster_core::logging::{LogLevel, init_logging_with_config};
use roster_core::{
    RegistryConfig, RegistryError, Student, StudentId, StudentRegistry, open_registry,
};

#[derive(Parser, Debug)]
#[command(name = "roster", author, version, about = "Student registry")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data file (forces the file backend)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Principal recorded as lecturerId on created records
    #[arg(long = "as")]
    principal: Option<String>,

    /// trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a student
    Create {
        name: String,
        course: String,
        level: u64,
        cgpa: u64,
    },
    /// List every student
    List,
    /// Show one student
    Get { id: String },
    /// Replace name, course, level and cgpa
    Update {
        id: String,
        #[arg(long)]
        name: String,
        /// Omit to keep the current course
        #[arg(long, default_value = "")]
        course: String,
        #[arg(long)]
        level: u64,
        #[arg(long)]
        cgpa: u64,
    },
    /// Change only the cgpa
    Grade { id: String, cgpa: u64 },
    /// Delete a student and print its last state
    Delete { id: String },
    /// Highest cgpa first
    Top { count: u64 },
}

/// Error shape printed on stdout when an operation fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    kind: &'static str,
    message: String,
}

fn load_config(args: &Args) -> Result<RegistryConfig> {
    let mut config = match &args.config {
        Some(path) => RegistryConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RegistryConfig::default(),
    };

    if let Some(data) = &args.data {
        config.store.backend = StoreBackend::File;
        config.store.path = data.clone();
    }
    if let Some(principal) = &args.principal {
        config.identity.principal = principal.clone();
    }
    if let Some(level) = &args.log_level {
        if LogLevel::parse(level).is_none() {
            eprintln!("Invalid log level '{level}', using 'info'");
        }
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.json_format = true;
    }

    if LogLevel::parse(&config.logging.level).is_none() {
        config.logging.level = LogLevel::Info.as_str().to_string();
    }
    config.validate()?;
    Ok(config)
}

/// What a successful command prints.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    One(Student),
    Many(Vec<Student>),
}

async fn dispatch(registry: &StudentRegistry, command: Command) -> Result<Output, RegistryError> {
    let output = match command {
        Command::Create {
            name,
            course,
            level,
            cgpa,
        } => Output::One(
            registry
                .create_student(CreateStudentPayload {
                    name,
                    course,
                    level,
                    cgpa,
                })
                .await?,
        ),
        Command::List => Output::Many(registry.get_all_students().await?),
        Command::Get { id } => Output::One(registry.get_student_by_id(&StudentId::new(id)).await?),
        Command::Update {
            id,
            name,
            course,
            level,
            cgpa,
        } => Output::One(
            registry
                .update_student(
                    &StudentId::new(id),
                    UpdateStudentPayload {
                        name,
                        course,
                        level,
                        cgpa,
                    },
                )
                .await?,
        ),
        Command::Grade { id, cgpa } => Output::One(
            registry
                .update_grade(&StudentId::new(id), UpdateGradePayload { cgpa })
                .await?,
        ),
        Command::Delete { id } => {
            Output::One(registry.delete_student_record(&StudentId::new(id)).await?)
        }
        Command::Top { count } => Output::Many(registry.get_top_students(count).await?),
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_logging_with_config(&config.logging.to_log_config())?;
    debug!(?config, "configuration loaded");

    let registry = open_registry(&config).await?;

    match dispatch(&registry, args.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            info!(kind = err.kind().as_str(), "operation failed");
            let body = ErrorBody {
                error: ErrorDetail {
                    kind: err.kind().as_str(),
                    message: err.message(),
                },
            };
            println!("{}", serde_json::to_string(&body)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_config() {
        let args = parse(&[
            "roster",
            "--data",
            "/tmp/x.json",
            "--as",
            "lecturer-3",
            "--log-level",
            "debug",
            "list",
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.path, PathBuf::from("/tmp/x.json"));
        assert_eq!(config.identity.principal, "lecturer-3");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn invalid_log_level_falls_back_to_info() {
        let args = parse(&["roster", "--log-level", "loud", "list"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn update_course_defaults_to_empty() {
        let args = parse(&[
            "roster", "update", "student-1", "--name", "Jo", "--level", "2", "--cgpa", "5",
        ]);
        match args.command {
            Command::Update { course, .. } => assert!(course.is_empty()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[tokio::test]
    async fn dispatch_surfaces_error_kind_and_message() {
        let mut config = RegistryConfig::default();
        config.store.backend = StoreBackend::Memory;
        let registry = open_registry(&config).await.unwrap();

        let err = dispatch(
            &registry,
            Command::Delete {
                id: "nonexistent".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind().as_str(), "UserDoesNotExist");
        assert_eq!(err.message(), "nonexistent");
    }

    #[tokio::test]
    async fn dispatch_prints_created_record_as_json() {
        let mut config = RegistryConfig::default();
        config.store.backend = StoreBackend::Memory;
        let registry = open_registry(&config).await.unwrap();

        let output = dispatch(
            &registry,
            Command::Create {
                name: "Jo".to_string(),
                course: "farming".to_string(),
                level: 1,
                cgpa: 4,
            },
        )
        .await
        .unwrap();
        let v = serde_json::to_value(&output).unwrap();
        assert_eq!(v["name"], "Jo");
        assert_eq!(v["lecturerId"], "anonymous");
        assert!(v.get("updatedAt").is_none());
    }
}
