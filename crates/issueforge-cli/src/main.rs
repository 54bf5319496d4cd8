//! Issueforge CLI - Template generation and management
//!
//! Drives the three-step generation flow (collect → review → generate)
//! against the Issueforge API, with deterministic local fallback templates
//! so a generation attempt always ends in a displayable result.

mod api;
mod config;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use issueforge::domain::{GenerationRequest, ProjectType};
use issueforge::generation::{fallback_templates, TemplateSource};

use api::{GeneratedTemplates, IssueforgeClient};
use config::Config;

#[derive(Parser)]
#[command(name = "issueforge")]
#[command(about = "Issueforge CLI - AI-generated GitHub issue templates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,

        /// Owner identity used when saving templates
        #[arg(long)]
        owner_id: Option<Uuid>,
    },

    /// Generate issue templates for a project
    Generate {
        /// Project name (prompts if not provided)
        #[arg(short, long)]
        name: Option<String>,

        /// Project description (prompts if not provided)
        #[arg(short, long)]
        description: Option<String>,

        /// Project type: library, web-app, cli-tool, api, mobile-app, desktop-app
        #[arg(short = 't', long = "type")]
        project_type: Option<String>,

        /// Write the templates as YAML files into this directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the review step and save without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// List saved template sets
    List,

    /// Show one saved template set
    Show {
        /// Template set ID
        id: Uuid,

        /// Write the templates as YAML files into this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a saved template set
    Delete {
        /// Template set ID
        id: Uuid,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, owner_id } => cmd_login(key, owner_id).await,
        Commands::Generate {
            name,
            description,
            project_type,
            output,
            yes,
        } => cmd_generate(name, description, project_type, output, yes).await,
        Commands::List => cmd_list().await,
        Commands::Show { id, output } => cmd_show(id, output).await,
        Commands::Delete { id } => cmd_delete(id).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>, owner_id: Option<Uuid>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = IssueforgeClient::new(&config.base_url, &api_key);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to the Issueforge API. Check your API key.");
        }
    }

    config.set_api_key(api_key);
    if let Some(id) = owner_id {
        config.set_owner_id(id);
    }
    config.save()?;

    println!(
        "{} API key saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );

    if config.owner_id.is_none() {
        println!(
            "\n{}",
            "Tip: set an owner identity to enable saving templates:".yellow()
        );
        println!("  issueforge login --owner-id <UUID>");
    }

    Ok(())
}

async fn cmd_generate(
    name: Option<String>,
    description: Option<String>,
    project_type: Option<String>,
    output: Option<PathBuf>,
    yes: bool,
) -> Result<()> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'issueforge login' first.")?;

    let client = IssueforgeClient::new(&config.base_url, api_key);

    // Step 1: collect project details (gated until all three are present)
    let request = collect_request(name, description, project_type)?;

    // Step 2: review
    println!("\n{}", "Project details:".bold());
    println!("  Name:        {}", request.project_name.cyan());
    println!("  Description: {}", request.project_description);
    println!("  Type:        {}", request.project_type.label());

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Generate templates?")
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    // Step 3: generate, falling back to local placeholders on any failure
    println!(
        "Generating templates for {}...",
        request.project_name.cyan()
    );

    let (templates, source) = match client.generate(&request).await {
        Ok(templates) => (templates, TemplateSource::Generated),
        Err(e) => {
            eprintln!("{} Generation failed: {}", "⚠".yellow(), e);
            eprintln!("  Showing locally synthesized placeholder templates instead.");
            (
                fallback_templates(&request.project_name).into(),
                TemplateSource::Fallback,
            )
        }
    };

    display_templates(&templates);

    if source == TemplateSource::Fallback {
        println!(
            "\n{}",
            "Note: these are placeholder templates, not AI-generated ones. Re-run 'issueforge generate' to try again."
                .yellow()
        );
    }

    if let Some(dir) = output {
        write_templates(&dir, &templates)?;
    }

    // Save is only offered for a signed-in identity
    if let Some(owner_id) = config.owner_id {
        let save = yes
            || Confirm::new()
                .with_prompt("Save templates to your account?")
                .default(false)
                .interact()
                .context("Failed to read confirmation")?;

        if save {
            save_with_retry(&client, owner_id, &request, &templates, yes).await?;
        }
    }

    Ok(())
}

async fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'issueforge login' first.")?;
    let owner_id = config
        .owner_id
        .context("No owner identity set. Run 'issueforge login --owner-id <UUID>' first.")?;

    let client = IssueforgeClient::new(&config.base_url, api_key);
    let templates = client.list_templates(owner_id).await?;

    if templates.is_empty() {
        println!("No saved templates.");
        println!("\n{}", "Generate and save some with:".dimmed());
        println!("  issueforge generate");
        return Ok(());
    }

    println!("{}", "Saved templates:".bold());
    for t in templates {
        println!(
            "  {} {} ({}) {}",
            t.id.to_string().dimmed(),
            t.project_name.cyan().bold(),
            t.project_type,
            t.created_at.format("%Y-%m-%d").to_string().dimmed()
        );
        println!("    {}", truncate_string(&t.project_description, 70).dimmed());
    }

    Ok(())
}

async fn cmd_show(id: Uuid, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'issueforge login' first.")?;

    let client = IssueforgeClient::new(&config.base_url, api_key);

    let Some(saved) = client.get_template(id).await? else {
        println!("{} Templates not found.", "✗".red());
        println!("\n{}", "See your saved templates with:".dimmed());
        println!("  issueforge list");
        return Ok(());
    };

    println!("{} ({})", saved.project_name.cyan().bold(), saved.project_type);
    println!("{}", saved.project_description.dimmed());

    let templates = GeneratedTemplates {
        bug_template: saved.bug_template,
        feature_template: saved.feature_template,
        performance_template: saved.performance_template,
    };

    display_templates(&templates);

    if let Some(dir) = output {
        write_templates(&dir, &templates)?;
    }

    Ok(())
}

async fn cmd_delete(id: Uuid) -> Result<()> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'issueforge login' first.")?;

    let client = IssueforgeClient::new(&config.base_url, api_key);

    if client.delete_template(id).await? {
        println!("{} Templates deleted ({})", "✓".green(), id);
    } else {
        println!("{} Templates not found.", "✗".red());
        println!("\n{}", "See your saved templates with:".dimmed());
        println!("  issueforge list");
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!(
        "  Owner ID: {}",
        config
            .owner_id
            .map(|id| id.to_string().cyan())
            .unwrap_or_else(|| "None".dimmed())
    );

    Ok(())
}

// ============================================
// Generation Flow Helpers
// ============================================

/// Collect the three request fields, prompting for whatever was not passed
/// as a flag. Empty-after-trim values never pass.
fn collect_request(
    name: Option<String>,
    description: Option<String>,
    project_type: Option<String>,
) -> Result<GenerationRequest> {
    let project_name = match name {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => prompt_non_empty("Project name")?,
    };

    let project_description = match description {
        Some(d) if !d.trim().is_empty() => d.trim().to_string(),
        _ => prompt_non_empty("Project description")?,
    };

    let project_type = match project_type {
        Some(t) => t.parse::<ProjectType>().map_err(|e| anyhow!(e))?,
        None => {
            let labels: Vec<&str> = ProjectType::ALL.iter().map(|t| t.label()).collect();
            let selection = Select::new()
                .with_prompt("Project type")
                .items(&labels)
                .default(0)
                .interact()
                .context("Failed to read selection")?;
            ProjectType::ALL[selection]
        }
    };

    Ok(GenerationRequest {
        project_name,
        project_description,
        project_type,
    })
}

fn prompt_non_empty(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Value cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read input")?;

    Ok(value.trim().to_string())
}

fn display_templates(templates: &GeneratedTemplates) {
    let sections = [
        ("🐛 Bug Report", &templates.bug_template),
        ("✨ Feature Request", &templates.feature_template),
        ("⚡ Performance Issue", &templates.performance_template),
    ];

    for (title, content) in sections {
        println!("\n{}", format!("── {} ", title).cyan().bold());
        println!("{}", content);
    }
}

/// Write the three documents into a directory as GitHub template files
fn write_templates(dir: &Path, templates: &GeneratedTemplates) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    let files = [
        ("bug_report.yml", &templates.bug_template),
        ("feature_request.yml", &templates.feature_template),
        ("performance_issue.yml", &templates.performance_template),
    ];

    for (filename, content) in files {
        let path = dir.join(filename);
        fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
        println!("{} Wrote {:?}", "✓".green(), path);
    }

    Ok(())
}

/// Save a template set; failures keep the in-memory set and offer a retry
async fn save_with_retry(
    client: &IssueforgeClient,
    owner_id: Uuid,
    request: &GenerationRequest,
    templates: &GeneratedTemplates,
    non_interactive: bool,
) -> Result<()> {
    loop {
        match client.save_templates(owner_id, request, templates).await {
            Ok(saved) => {
                println!("{} Templates saved ({})", "✓".green(), saved.id);
                return Ok(());
            }
            Err(e) => {
                eprintln!("{} Failed to save templates: {}", "✗".red(), e);
                if non_interactive {
                    return Ok(());
                }
                let retry = Confirm::new()
                    .with_prompt("Retry save?")
                    .default(true)
                    .interact()
                    .context("Failed to read confirmation")?;
                if !retry {
                    return Ok(());
                }
            }
        }
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_short_input() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_long_input() {
        assert_eq!(truncate_string("a long description", 6), "a long...");
    }

    #[test]
    fn test_fallback_conversion_keeps_all_documents() {
        let templates: GeneratedTemplates = fallback_templates("Acme CLI").into();
        assert!(templates.bug_template.contains("Acme CLI"));
        assert!(templates.feature_template.contains("Acme CLI"));
        assert!(templates.performance_template.contains("Acme CLI"));
    }
}
