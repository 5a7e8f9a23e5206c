// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use mimir_core::ErrorKind;
use mimir_core::ErrorReport;
use mimir_core::Fallible;
use mimir_core::fail;

use crate::config::Config;
use crate::config::default_config_path;
use crate::loader::DEFAULT_CONCURRENCY;
use crate::loader::load_course;
use crate::source::DEFAULT_BASE_URL;
use crate::source::HttpSource;
use crate::source::Session;
use crate::source::course_id_from_url;
use crate::write::directory::write_code_directory;
use crate::write::multi::write_multi_file;
use crate::write::output::OutputContext;
use crate::write::single::write_single_file;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    /// An index page plus one page per assignment.
    MultiFile,
    /// One self-contained HTML document.
    SingleFile,
    /// The code files of each assignment, one directory per assignment.
    CodeDirectory,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::MultiFile => write!(f, "multi-file"),
            OutputFormat::SingleFile => write!(f, "single-file"),
            OutputFormat::CodeDirectory => write!(f, "code-directory"),
        }
    }
}

/// Download a course and save it locally.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Command {
    /// Course URL copied from the browser.
    course_url: String,
    /// Output target: a directory for multi-file and code-directory, a file for single-file.
    target: PathBuf,
    /// Which output format to use.
    #[arg(short, long, default_value_t = OutputFormat::MultiFile)]
    format: OutputFormat,
    /// Replace existing files in the target.
    #[arg(short, long)]
    overwrite: bool,
    /// Session token. Stored in the config file for later runs.
    #[arg(long)]
    token: Option<String>,
    /// Platform base URL. Defaults to the value in the config file, then to the public instance.
    #[arg(long)]
    base_url: Option<String>,
    /// Maximum number of assignments fetched at once.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();

    let config_path = default_config_path()?;
    let mut config = Config::load(&config_path)?;
    if let Some(token) = cli.token {
        config.session_token = Some(token);
        config.save(&config_path)?;
        log::info!("Saved session token to {}", config_path.display());
    }
    let base_url = cli
        .base_url
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let Some(token) = config.session_token else {
        return fail(
            ErrorKind::Config,
            "No session token in storage. Pass one with --token.",
        );
    };
    let course_id = course_id_from_url(&cli.course_url, &base_url).ok_or_else(|| {
        ErrorReport::new(
            ErrorKind::Config,
            format!("Incorrect course URL. Course URLs start with '{base_url}/courses/'."),
        )
    })?;

    let source = HttpSource::new(&base_url)?;
    let session = Session::new(token);
    let course = load_course(&source, &course_id, &session, cli.concurrency).await?;

    match cli.format {
        OutputFormat::MultiFile => {
            write_multi_file(&course, &OutputContext::new(cli.target, cli.overwrite))?;
        }
        OutputFormat::SingleFile => {
            write_single_file(&course, &cli.target, cli.overwrite)?;
        }
        OutputFormat::CodeDirectory => {
            write_code_directory(&course, &OutputContext::new(cli.target, cli.overwrite))?;
        }
    }
    Ok(())
}
