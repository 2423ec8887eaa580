//! postdeck - manage your social media posts locally
//!
//! Command-line surface over the post store: dashboard, listing with
//! filters, create, edit, and delete.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use libpostdeck::{
    config, logging, Config, DashboardStats, FileSlot, NewPost, Post, PostPatch, PostStatus,
    PostStore, PostdeckError, Result, SocialNetwork,
};

#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(version)]
#[command(about = "Manage your social media posts locally")]
#[command(long_about = "\
postdeck - Manage your social media posts locally

DESCRIPTION:
    postdeck keeps a collection of social media posts (content, status,
    target networks, schedule) in a local file and shows dashboard
    statistics and filtered views over it. Networks and statuses are
    descriptive labels; nothing is published anywhere.

COMMANDS:
    dashboard   Show aggregate statistics
    list        List posts, optionally filtered by status or network
    create      Create a new post
    edit        Edit an existing post
    delete      Delete a post

USAGE EXAMPLES:
    # Show the dashboard
    postdeck dashboard

    # List scheduled posts targeting Instagram
    postdeck list --status scheduled --network instagram

    # Create a draft
    postdeck create --title \"Launch week\" --content \"We are live.\" \\
        --network instagram --network twitter --hashtag \"#launch\"

    # Reschedule an existing post
    postdeck edit <POST_ID> --status scheduled --schedule 2026-09-01T09:00:00Z

    # Delete a post
    postdeck delete <POST_ID>

CONFIGURATION:
    Configuration file: ~/.config/postdeck/config.toml
    Post collection:    ~/.local/share/postdeck/posts.json

    Override with environment variables:
        POSTDECK_CONFIG  - Path to config file
        POSTDECK_SLOT    - Path to the post collection file

EXIT CODES:
    0 - Success
    1 - Operation failed
    2 - Stored post collection is corrupt
    3 - Invalid input (bad post ID, status, date format, etc.)
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show aggregate statistics
    Dashboard {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List posts
    List {
        /// Only posts with this status
        #[arg(short, long)]
        status: Option<PostStatus>,

        /// Only posts targeting this network
        #[arg(short, long)]
        network: Option<SocialNetwork>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Create a new post
    Create {
        #[command(flatten)]
        args: CreateArgs,
    },

    /// Edit an existing post
    Edit {
        /// Post ID to edit
        post_id: String,

        #[command(flatten)]
        args: EditArgs,
    },

    /// Delete a post
    Delete {
        /// Post ID to delete
        post_id: String,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Post title
    #[arg(short, long)]
    title: String,

    /// Post body
    #[arg(short, long)]
    content: String,

    /// Status: published, scheduled, or draft (default from config)
    #[arg(short, long)]
    status: Option<PostStatus>,

    /// Target network; repeat for several (default from config)
    #[arg(short = 'n', long = "network")]
    networks: Vec<SocialNetwork>,

    /// Schedule date, RFC 3339 (e.g. 2026-09-01T09:00:00Z)
    #[arg(long)]
    schedule: Option<String>,

    /// Image URL
    #[arg(long)]
    image: Option<String>,

    /// Hashtag; repeat for several
    #[arg(long = "hashtag")]
    hashtags: Vec<String>,
}

#[derive(Args, Debug)]
struct EditArgs {
    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New body
    #[arg(short, long)]
    content: Option<String>,

    /// New status
    #[arg(short, long)]
    status: Option<PostStatus>,

    /// Replace the target networks; repeat for several
    #[arg(short = 'n', long = "network")]
    networks: Vec<SocialNetwork>,

    /// New schedule date, RFC 3339
    #[arg(long, conflicts_with = "clear_schedule")]
    schedule: Option<String>,

    /// Remove the schedule date
    #[arg(long)]
    clear_schedule: bool,

    /// New image URL
    #[arg(long, conflicts_with = "clear_image")]
    image: Option<String>,

    /// Remove the image URL
    #[arg(long)]
    clear_image: bool,

    /// Replace the hashtags; repeat for several
    #[arg(long = "hashtag")]
    hashtags: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging::LoggingConfig::new(logging::LogFormat::Text, "debug".to_string(), true).init();
    } else {
        logging::init_default();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let slot_path = config::resolve_slot_path(&config.storage.path);
    let mut store = PostStore::open(Box::new(FileSlot::new(&slot_path)))?;

    match cli.command {
        Commands::Dashboard { format } => cmd_dashboard(&store, &format),
        Commands::List {
            status,
            network,
            format,
        } => cmd_list(&store, status, network, &format),
        Commands::Create { args } => cmd_create(&mut store, &config, args),
        Commands::Edit { post_id, args } => cmd_edit(&mut store, &post_id, args),
        Commands::Delete { post_id } => cmd_delete(&mut store, &post_id),
    }
}

fn validate_format(format: &str) -> Result<()> {
    if format != "text" && format != "json" {
        return Err(PostdeckError::InvalidInput(format!(
            "Invalid format '{}'. Must be 'text' or 'json'",
            format
        )));
    }
    Ok(())
}

/// Show aggregate statistics
fn cmd_dashboard(store: &PostStore, format: &str) -> Result<()> {
    validate_format(format)?;

    let stats = store.dashboard_stats();
    if format == "json" {
        output_stats_json(&stats);
    } else {
        output_stats_text(&stats);
    }
    Ok(())
}

fn output_stats_json(stats: &DashboardStats) {
    println!(
        "{}",
        serde_json::to_string_pretty(stats).unwrap()
    );
}

fn output_stats_text(stats: &DashboardStats) {
    println!("Total posts:        {}", stats.total_posts);
    println!("Published:          {}", stats.published_posts);
    println!("Scheduled:          {}", stats.scheduled_posts);
    println!("Drafts:             {}", stats.draft_posts);
    println!("Created this month: {}", stats.this_month_posts);
}

/// List posts, optionally filtered
fn cmd_list(
    store: &PostStore,
    status: Option<PostStatus>,
    network: Option<SocialNetwork>,
    format: &str,
) -> Result<()> {
    validate_format(format)?;

    let mut posts: Vec<&Post> = match status {
        Some(s) => store.posts_by_status(s),
        None => store.posts().iter().collect(),
    };
    if let Some(n) = network {
        posts.retain(|p| p.social_networks.contains(&n));
    }

    if format == "json" {
        output_list_json(&posts);
    } else {
        output_list_text(&posts);
    }
    Ok(())
}

fn output_list_json(posts: &[&Post]) {
    println!(
        "{}",
        serde_json::to_string_pretty(posts).unwrap()
    );
}

fn output_list_text(posts: &[&Post]) {
    for post in posts {
        let networks = post
            .social_networks
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>()
            .join(",");

        println!(
            "{} | {} | {} | {}",
            post.id,
            post.status,
            truncate(&post.title, 40),
            networks
        );
    }
}

/// Truncate text to max length with ellipsis
fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}

/// Parse an RFC 3339 datetime argument
fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            PostdeckError::InvalidInput(format!(
                "Could not parse date '{}': {} (expected RFC 3339, e.g. 2026-09-01T09:00:00Z)",
                input, e
            ))
        })
}

/// Create a new post; prints the new post's ID on stdout
fn cmd_create(store: &mut PostStore, config: &Config, args: CreateArgs) -> Result<()> {
    let networks = if args.networks.is_empty() {
        config.defaults.networks.clone()
    } else {
        args.networks
    };
    if networks.is_empty() {
        return Err(PostdeckError::InvalidInput(
            "At least one --network is required (or set [defaults] networks in the config)"
                .to_string(),
        ));
    }

    let status = args.status.unwrap_or(config.defaults.status);
    let scheduled_date = args.schedule.as_deref().map(parse_datetime).transpose()?;
    let published_date = (status == PostStatus::Published).then(Utc::now);

    let post = store.add(NewPost {
        title: args.title,
        content: args.content,
        status,
        social_networks: networks,
        scheduled_date,
        published_date,
        image_url: args.image,
        hashtags: args.hashtags,
    })?;

    println!("{}", post.id);
    Ok(())
}

/// Edit an existing post
fn cmd_edit(store: &mut PostStore, post_id: &str, args: EditArgs) -> Result<()> {
    let scheduled_date = if args.clear_schedule {
        Some(None)
    } else {
        args.schedule
            .as_deref()
            .map(parse_datetime)
            .transpose()?
            .map(Some)
    };
    let image_url = if args.clear_image {
        Some(None)
    } else {
        args.image.map(Some)
    };

    let patch = PostPatch {
        title: args.title,
        content: args.content,
        status: args.status,
        social_networks: (!args.networks.is_empty()).then_some(args.networks),
        scheduled_date,
        published_date: None,
        image_url,
        hashtags: (!args.hashtags.is_empty()).then_some(args.hashtags),
    };

    if !store.update(post_id, &patch)? {
        return Err(PostdeckError::InvalidInput(format!(
            "No such post: {}",
            post_id
        )));
    }
    Ok(())
}

/// Delete a post
fn cmd_delete(store: &mut PostStore, post_id: &str) -> Result<()> {
    if !store.delete(post_id)? {
        return Err(PostdeckError::InvalidInput(format!(
            "No such post: {}",
            post_id
        )));
    }
    Ok(())
}
