use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diagramdex::catalog::Catalog;
use diagramdex::data;
use diagramdex::models::{Category, DiagramType, LearningMode};

#[derive(Parser)]
#[command(name = "ddx")]
#[command(about = "Browse the diagram notation catalog")]
struct Cli {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List diagram types, optionally filtered by category
    List {
        /// One of: flow, structure, timeline, other
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one diagram type with its examples and syntax table
    Show {
        id: String,

        /// Learning mode controlling how many examples to print
        #[arg(short, long, default_value = "all")]
        mode: String,
    },
    /// Search diagram types by name, description, or id
    Search { query: String },
    /// Pick a random diagram type, or a random example of one type
    Random { id: Option<String> },
    /// Print catalog statistics
    Stats,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "diagramdex=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_summary(diagram: &DiagramType) {
    println!(
        "{:<14} {:<22} [{}] {}",
        diagram.id,
        diagram.name,
        diagram.category.as_str(),
        diagram.description
    );
}

fn list(catalog: &Catalog, category: Option<String>, json: bool) -> anyhow::Result<()> {
    let diagrams: Vec<&DiagramType> = match category {
        Some(raw) => {
            let category = Category::from_str(&raw).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown category `{raw}` (expected flow, structure, timeline, or other)"
                )
            })?;
            catalog.by_category(category)
        }
        None => catalog.all().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&diagrams)?);
    } else {
        for diagram in diagrams {
            print_summary(diagram);
        }
    }
    Ok(())
}

fn show(catalog: &Catalog, id: &str, mode: &str, json: bool) -> anyhow::Result<()> {
    let mode = LearningMode::from_str(mode)
        .ok_or_else(|| anyhow::anyhow!("unknown learning mode `{mode}`"))?;
    let Some(diagram) = catalog.get(id) else {
        anyhow::bail!("no diagram type with id `{id}`");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(diagram)?);
        return Ok(());
    }

    print_summary(diagram);
    if let Some(detail) = &diagram.detailed_description {
        println!("\n{detail}");
    }
    if let Some(docs_url) = &diagram.docs_url {
        println!("\nDocs: {docs_url}");
    }

    println!("\nExamples ({}):", mode.info().name);
    for example in diagram.examples_for(mode) {
        let level = example.level.map(|l| l.as_str()).unwrap_or("unrated");
        println!("\n  {} ({}) - {}", example.title, level, example.description);
        for line in example.code.lines() {
            println!("    {line}");
        }
    }

    println!("\nSyntax reference:");
    for entry in &diagram.syntax {
        println!("  {:<18} {}", entry.syntax, entry.description);
    }
    Ok(())
}

fn random(catalog: &Catalog, id: Option<String>, json: bool) -> anyhow::Result<()> {
    let mut rng = rand::rng();
    match id {
        Some(id) => {
            let Some(example) = catalog.random_example(&id, &mut rng) else {
                anyhow::bail!("no examples for diagram type `{id}`");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(example)?);
            } else {
                println!("{} - {}\n\n{}", example.title, example.description, example.code);
            }
        }
        None => {
            let Some(diagram) = catalog.random_diagram(&mut rng) else {
                anyhow::bail!("the catalog is empty");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(diagram)?);
            } else {
                print_summary(diagram);
            }
        }
    }
    Ok(())
}

fn stats(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let grouped = catalog.grouped_by_category();

    if json {
        let per_category: serde_json::Map<String, serde_json::Value> = grouped
            .iter()
            .map(|(category, diagrams)| {
                (category.as_str().to_string(), diagrams.len().into())
            })
            .collect();
        let stats = serde_json::json!({
            "diagram_types": catalog.len(),
            "examples": catalog.total_example_count(),
            "by_category": per_category,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("diagram types: {}", catalog.len());
        println!("examples:      {}", catalog.total_example_count());
        for (category, diagrams) in &grouped {
            println!("  {:<12} {}", category.info().name, diagrams.len());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let catalog = data::builtin();
    tracing::debug!(diagram_types = catalog.len(), "catalog loaded");

    match cli.command {
        Commands::List { category } => list(&catalog, category, cli.json),
        Commands::Show { id, mode } => show(&catalog, &id, &mode, cli.json),
        Commands::Search { query } => {
            let results = catalog.search(&query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("no matches for `{query}`");
            } else {
                for diagram in results {
                    print_summary(diagram);
                }
            }
            Ok(())
        }
        Commands::Random { id } => random(&catalog, id, cli.json),
        Commands::Stats => stats(&catalog, cli.json),
    }
}
