use std::{
    fmt::Write as _,
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use example_questionnaires::SAMPLE_NAMES;
use questionnaire::{QuestionKind, RatingStyle, SurveyDefinition};
use questionnaire_doc_html::{HtmlOptions, is_class_char, question_page, welcome_page};
use questionnaire_wizard_ratatui::{RatatuiError, RatatuiWizard};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "questionnaire=info";

#[derive(Parser, Debug)]
#[command(name = "questionnaire", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a survey definition and list its questions.
    Check {
        #[command(flatten)]
        source: Source,
    },

    /// Print a survey page as HTML.
    Html {
        #[command(flatten)]
        source: Source,

        /// Show the question at this position (0-based) instead of the welcome screen.
        #[arg(short, long)]
        question: Option<usize>,

        /// CSS class prefix for the generated elements.
        #[arg(long, default_value = "survey", value_parser = parse_prefix)]
        prefix: String,

        /// Leave out the default stylesheet.
        #[arg(long)]
        no_styles: bool,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Take the survey in the terminal and print the answers.
    Run {
        #[command(flatten)]
        source: Source,

        /// Write logs to this file (the terminal is busy with the wizard).
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

/// Where the survey definition comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Source {
    /// A survey definition file (.toml or .json).
    file: Option<PathBuf>,

    /// One of the bundled surveys.
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(SAMPLE_NAMES))]
    sample: Option<String>,
}

impl Source {
    fn load(&self) -> anyhow::Result<SurveyDefinition> {
        if let Some(path) = &self.file {
            return questionnaire::config::load(path)
                .with_context(|| format!("Could not load survey from '{}'", path.display()));
        }
        let name = self.sample.as_deref().unwrap_or(SAMPLE_NAMES[0]);
        example_questionnaires::sample(name).ok_or_else(|| anyhow!("Unknown sample '{name}'"))
    }
}

fn parse_prefix(prefix: &str) -> Result<String, String> {
    if !prefix.is_empty() && prefix.chars().all(is_class_char) {
        Ok(prefix.to_string())
    } else {
        Err("use only ASCII letters, digits, '-' and '_'".to_string())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { source } => {
            init_tracing(None)?;
            let definition = source.load()?;
            print!("{}", describe(&definition));
        }
        Command::Html {
            source,
            question,
            prefix,
            no_styles,
            output,
        } => {
            init_tracing(None)?;
            let definition = source.load()?;
            let options = HtmlOptions::new()
                .with_class_prefix(prefix)
                .with_styles(!no_styles);
            let html = match question {
                Some(index) => question_page(&definition, index, options)?,
                None => welcome_page(&definition, options),
            };
            match output {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("Could not write '{}'", path.display()))?,
                None => print!("{html}"),
            }
        }
        Command::Run { source, log_file } => {
            if let Some(path) = &log_file {
                init_tracing(Some(path))?;
            }
            let definition = source.load()?;
            tracing::info!(title = %definition.title, "starting terminal wizard");

            match RatatuiWizard::new().run(definition) {
                Ok(results) => {
                    for line in results {
                        println!("{}: {}", line.prompt, line.answer);
                    }
                }
                Err(RatatuiError::Cancelled) => {
                    tracing::info!("survey cancelled");
                    eprintln!("Survey cancelled.");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}

/// Log to stderr, or to `log_file` when given. Filtered by `RUST_LOG`.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// A listing of the survey and its questions.
fn describe(definition: &SurveyDefinition) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} questions)",
        definition.title,
        definition.len()
    );

    for (index, question) in definition.questions().iter().enumerate() {
        let required = if question.required { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:>3}. [{}] {}{required}",
            index + 1,
            kind_summary(&question.kind),
            question.prompt
        );

        if let Some(follow_ups) = &question.follow_up {
            for (option, prompt) in follow_ups {
                let _ = writeln!(out, "       if \"{option}\": {prompt}");
            }
        }
        if question.kind == QuestionKind::Unknown {
            tracing::warn!(question_id = question.id, "unknown question type");
        }
    }
    out
}

fn kind_summary(kind: &QuestionKind) -> String {
    match kind {
        QuestionKind::MultipleChoice(choice) | QuestionKind::Checkbox(choice) => {
            format!("{}: {}", kind.type_name(), choice.options.join(" / "))
        }
        QuestionKind::Rating(rating) if rating.style == RatingStyle::Emoji => {
            "rating: emoji".to_string()
        }
        QuestionKind::Rating(rating) => format!("rating: {}-{}", rating.min, rating.max),
        QuestionKind::Text(_) | QuestionKind::Unknown => kind.type_name().to_string(),
    }
}
