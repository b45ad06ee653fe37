use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use project_screen_core::{
    render_markup, HttpSimilarityBackend, SearchQuery, SearchSession, SessionState, Severity,
    SimilarityBackend,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "project-screen", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Similarity service base URL
    #[arg(long, env = "SIMILARITY_SERVICE_URL", default_value = "http://localhost:5001")]
    service_url: String,
}

#[derive(Subcommand)]
enum Command {
    /// Screen a candidate proposal against the indexed projects.
    Search {
        /// Candidate project title
        #[arg(long)]
        title: String,
        /// Candidate project abstract
        #[arg(long, default_value = "")]
        r#abstract: String,
    },
    /// Reload the service's source dataset.
    LoadData,
    /// Recompute embeddings for every loaded project.
    GenerateEmbeddings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let backend = HttpSimilarityBackend::new(&cli.service_url)
        .with_context(|| format!("invalid service url {}", cli.service_url))?;
    info!(
        version = app_version,
        service_url = %cli.service_url,
        started_at = %Utc::now().to_rfc3339(),
        "project-screen boot"
    );

    match cli.command {
        Command::Search { title, r#abstract } => {
            let session = SearchSession::new(backend);
            session.submit(SearchQuery::new(title, r#abstract)).await;

            match session.current_state() {
                SessionState::Succeeded {
                    results,
                    recommendation,
                } => {
                    if let Some(recommendation) = &recommendation {
                        println!(
                            "{} {}",
                            severity_mark(recommendation.severity),
                            recommendation.message
                        );
                    }

                    if results.is_empty() {
                        println!("No similar projects found. Please try a different search.");
                    } else {
                        println!("Top similar projects:");
                        for result in results {
                            println!(
                                "[{}] score={:.0}% title={}",
                                result.id, result.matching_score, result.title
                            );
                            if !result.abstract_text.is_empty() {
                                println!("  abstract: {}", result.abstract_text);
                            }
                            let comments = render_markup(&result.matching_comments);
                            if !comments.is_empty() {
                                println!("  comments:\n{comments}");
                            }
                        }
                    }
                }
                SessionState::Failed { message } => {
                    warn!(%message, "search failed");
                    println!("Search failed: {message}");
                }
                SessionState::Idle | SessionState::Loading => {
                    // submit() always settles before returning.
                    unreachable!("session left unsettled after submit")
                }
            }
        }
        Command::LoadData => match backend.load_data().await {
            Ok(outcome) => println!(
                "{}",
                outcome
                    .message
                    .unwrap_or_else(|| "Data loaded successfully.".to_string())
            ),
            Err(error) => {
                warn!(%error, "load_data failed");
                println!("Failed to load data.");
            }
        },
        Command::GenerateEmbeddings => match backend.generate_embeddings().await {
            Ok(outcome) => println!(
                "{}",
                outcome
                    .message
                    .unwrap_or_else(|| "Embeddings generated successfully.".to_string())
            ),
            Err(error) => {
                warn!(%error, "generate_embeddings failed");
                println!("Failed to generate embeddings.");
            }
        },
    }

    Ok(())
}

fn severity_mark(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "[ok]",
        Severity::Warning => "[review]",
        Severity::Danger => "[stop]",
    }
}
