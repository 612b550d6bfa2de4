//! Authoring console over the article collection.
//!
//! Thin interface consumer of `folio-core` and `folio-store`: lists the
//! committed collection, authors drafts through an `EditSession`, and
//! deletes entries. Everything runs synchronously on one thread.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_core::{BlockKind, EditSession, Field};
use folio_store::{ArticleRepository, JsonFileStore, default_store_path};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Insight article console - manage the durable article collection")]
struct Args {
    /// Path of the collection file
    #[arg(long, env = "FOLIO_STORE", value_name = "PATH", global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the collection in display order
    List,

    /// Print one article with its content blocks
    Show {
        /// Article id
        id: String,
    },

    /// Author a new draft and commit it to the collection
    New {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        author: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, default_value = "")]
        excerpt: String,

        /// Body paragraphs, one block each
        #[arg(long = "paragraph", value_name = "TEXT")]
        paragraphs: Vec<String>,
    },

    /// Remove an article from the collection
    Delete {
        /// Article id
        id: String,
    },

    /// Print the collection file path
    Path,
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.store.unwrap_or_else(default_store_path);
    debug!(path = %path.display(), "using collection file");

    if let Command::Path = args.command {
        println!("{}", path.display());
        return Ok(());
    }

    let mut repo = ArticleRepository::load(JsonFileStore::new(path));

    match args.command {
        Command::List => run_list(&repo),
        Command::Show { id } => run_show(&repo, &id),
        Command::New {
            title,
            author,
            category,
            excerpt,
            paragraphs,
        } => run_new(&mut repo, title, author, category, excerpt, paragraphs)?,
        Command::Delete { id } => {
            repo.delete(&id.as_str().into())?;
            println!("deleted {id} (if present)");
        }
        Command::Path => unreachable!("handled above"),
    }

    Ok(())
}

fn run_list(repo: &ArticleRepository<JsonFileStore>) {
    for article in repo.articles() {
        let title = if article.title.is_empty() {
            "(draft)"
        } else {
            &article.title
        };
        println!(
            "{:>16}  {:<12}  {:<10}  {}",
            article.id, article.category, article.date, title
        );
    }
}

fn run_show(repo: &ArticleRepository<JsonFileStore>, id: &str) {
    let Some(article) = repo.get(&id.into()) else {
        println!("no article with id {id}");
        return;
    };
    println!("{}", article.title);
    println!("{} | {} | {}", article.category, article.date, article.author);
    if !article.excerpt.is_empty() {
        println!("\n{}", article.excerpt);
    }
    for block in &article.blocks {
        println!();
        match block.kind {
            BlockKind::Heading | BlockKind::Subheading => {
                println!("## {}", folio_core::surface::strip_markup(&block.value));
            }
            BlockKind::Paragraph | BlockKind::List => {
                println!("{}", folio_core::surface::strip_markup(&block.value));
            }
            BlockKind::Quote => {
                println!("> {}", block.value);
                if !block.caption_str().is_empty() {
                    println!("> -- {}", block.caption_str());
                }
            }
            BlockKind::Image => {
                println!("[image] {}", block.value);
                if !block.caption_str().is_empty() {
                    println!("        {}", block.caption_str());
                }
            }
        }
    }
}

fn run_new(
    repo: &mut ArticleRepository<JsonFileStore>,
    title: String,
    author: String,
    category: Option<String>,
    excerpt: String,
    paragraphs: Vec<String>,
) -> miette::Result<()> {
    let mut session = EditSession::new_draft();
    session.set_field(Field::Title, title);
    session.set_field(Field::Author, author);
    session.set_field(Field::Excerpt, excerpt);
    if let Some(category) = category {
        session.set_field(Field::Category, category);
    }

    // The draft seeds one empty paragraph; type the first body paragraph
    // into its surface and append the rest as fresh blocks.
    let mut last = 0;
    for (i, text) in paragraphs.into_iter().enumerate() {
        if i > 0 {
            session.insert_block(Some(last), BlockKind::Paragraph);
            last += 1;
        }
        session.edit_surface(last, text);
    }

    let article = session.commit();
    let id = article.id.clone();
    repo.upsert(article)?;
    println!("committed {id}");
    Ok(())
}
