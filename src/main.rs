use clap::{Parser, Subcommand};
use emberlog::{config, contact, filter, output, site, store};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emberlog")]
#[command(about = "Static site generator for a personal blog and homepage")]
#[command(long_about = "\
Static site generator for a personal blog and homepage

Your content directory is the data source: posts live in a single JSON file,
homepage sections are markdown files, and one optional config.toml covers
the rest.

Content structure:

  content/
  ├── config.toml              # Site config (optional)
  ├── blog-posts.json          # Post collection: [{id, title, date,
  │                            #   excerpt, content}, ...], newest first
  └── pages/                   # Homepage sections (all optional)
      ├── about.md
      ├── resume.md
      ├── portfolio.md
      └── contact.md           # Text shown above the contact form

Tags are not stored: they are derived from post text by keyword matching.
Run 'emberlog gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site: homepage, blog listing, post pages
    Build,
    /// Validate content and report posts without building
    Check,
    /// Run the search/tag filter over the post collection
    Search {
        /// Free-text query (case-insensitive substring)
        #[arg(long, default_value = "")]
        query: String,
        /// Tag to filter by, or "all"
        #[arg(long, default_value = filter::TAG_ALL)]
        tag: String,
    },
    /// Send a message through the configured contact endpoint
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        /// Override the endpoint from config.toml
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let summary = site::build(&cli.source, &cli.output)?;
            output::print_build_output(&summary);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            let config = config::load(&cli.source)?;
            let posts = store::load(&cli.source.join(&config.posts_file))?;
            output::print_check_output(&posts);
            println!("==> Content is valid");
        }
        Command::Search { query, tag } => {
            let config = config::load(&cli.source)?;
            let posts = store::load(&cli.source.join(&config.posts_file))?;
            let state = filter::FilterState::new(query, tag);
            let results = filter::apply(&posts, &state);
            output::print_search_output(&results, posts.len(), &state);
        }
        Command::Send {
            name,
            email,
            subject,
            message,
            endpoint,
        } => {
            let config = config::load(&cli.source)?;
            let endpoint = endpoint.unwrap_or(config.contact_endpoint);
            if endpoint.is_empty() {
                return Err("no contact endpoint configured (set contact_endpoint \
                            in config.toml or pass --endpoint)"
                    .into());
            }
            let msg = contact::Message {
                name,
                email,
                subject,
                message,
            };
            contact::submit(&endpoint, &msg)?;
            println!("Thank you for your message! I'll get back to you as soon as possible.");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
