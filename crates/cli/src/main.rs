mod config;

use anyhow::{Context, Result};
use auth::{AuthService, MockAuthService};
use catalog::{Personality, Trending, Venue, VenueCatalog, VenueId};
use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};
use config::Config;
use engine::{
    composite_score, personality_style_tag, price_label, BadgeStyle, FilterSpec,
    RecommendationSpec,
};
use explorer::{ExploreState, Explorer};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Venue Scout - Find trending places that suit you
#[derive(Parser)]
#[command(name = "venue-scout")]
#[command(about = "Venue discovery: filter, search, and get recommendations", long_about = None)]
struct Cli {
    /// Path to a JSON venue catalog (defaults to the built-in Jakarta catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List venues matching the filters, most viral first
    List {
        #[command(flatten)]
        filters: ListFilters,

        /// Free-text search over name, location and description
        #[arg(long)]
        search: Option<String>,
    },

    /// Get ranked venue recommendations
    Recommend {
        #[command(flatten)]
        filters: RecommendFilters,

        /// Number of recommendations to return
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show a venue's detail card
    Show {
        /// Venue ID to display
        #[arg(long)]
        id: VenueId,
    },

    /// List the categories and facilities in the catalog
    Categories,

    /// Sign in against the mock auth service
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

#[derive(Args)]
struct ListFilters {
    /// Category to include (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Facility the venue must offer (repeatable)
    #[arg(long = "facility")]
    facilities: Vec<String>,

    /// Personality the venue should suit (repeatable)
    #[arg(long = "personality")]
    personalities: Vec<Personality>,

    #[arg(long, default_value_t = 0.0)]
    min_virality: f64,

    #[arg(long, default_value_t = 100.0)]
    max_virality: f64,

    #[arg(long, default_value_t = catalog::MIN_PRICE_TIER)]
    min_price: u8,

    #[arg(long, default_value_t = catalog::MAX_PRICE_TIER)]
    max_price: u8,
}

impl From<ListFilters> for FilterSpec {
    fn from(filters: ListFilters) -> Self {
        FilterSpec::new()
            .with_categories(filters.categories)
            .with_facilities(filters.facilities)
            .with_personality_types(filters.personalities)
            .with_virality_range(filters.min_virality, filters.max_virality)
            .with_price_range(filters.min_price, filters.max_price)
    }
}

#[derive(Args)]
struct RecommendFilters {
    #[arg(long)]
    category: Option<String>,

    /// Facility the venue must offer (repeatable)
    #[arg(long = "facility")]
    facilities: Vec<String>,

    #[arg(long)]
    personality: Option<Personality>,

    #[arg(long)]
    min_virality: Option<f64>,

    #[arg(long)]
    max_virality: Option<f64>,

    #[arg(long)]
    min_price: Option<u8>,

    #[arg(long)]
    max_price: Option<u8>,

    /// Substring of the venue location
    #[arg(long)]
    location: Option<String>,
}

impl From<RecommendFilters> for RecommendationSpec {
    fn from(filters: RecommendFilters) -> Self {
        RecommendationSpec {
            category: filters.category,
            facilities: filters.facilities.into_iter().collect(),
            min_virality: filters.min_virality,
            max_virality: filters.max_virality,
            min_price: filters.min_price,
            max_price: filters.max_price,
            personality: filters.personality,
            location: filters.location,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let catalog = Arc::new(load_catalog(cli.catalog.as_ref().or(config.catalog.as_ref()))?);
    let explorer = Explorer::new(catalog).with_recommendation_limit(config.recommendation_limit);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { filters, search } => handle_list(&explorer, filters, search),
        Commands::Recommend { filters, limit } => handle_recommend(&explorer, filters, limit),
        Commands::Show { id } => handle_show(&explorer, id),
        Commands::Categories => handle_categories(explorer.catalog()),
        Commands::Login { email, password } => handle_login(&config, &email, &password).await,
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<VenueCatalog> {
    let start = Instant::now();
    let catalog = match path {
        Some(path) => {
            println!("Loading venues from {}...", path.display());
            VenueCatalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?
        }
        None => VenueCatalog::seed().context("Failed to load built-in catalog")?,
    };
    println!(
        "{} Loaded {} venues in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    Ok(catalog)
}

/// Handle the 'list' command
fn handle_list(explorer: &Explorer, filters: ListFilters, search: Option<String>) -> Result<()> {
    let state = ExploreState {
        filters: filters.into(),
        search_query: search.unwrap_or_default(),
        selected: None,
    };

    let places = explorer.trending(&state);
    let header = if state.filters.is_unconstrained() {
        format!("Trending venues ({}):", places.len())
    } else {
        format!("Trending venues, filtered ({}):", places.len())
    };
    println!("{}", header.bold().blue());

    if places.is_empty() {
        println!("  No venues match. Try clearing some filters.");
    }
    for (rank, venue) in places.iter().enumerate() {
        print_venue_line(rank + 1, venue);
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    explorer: &Explorer,
    filters: RecommendFilters,
    limit: Option<usize>,
) -> Result<()> {
    let spec = RecommendationSpec::from(filters);
    let limit = limit.unwrap_or(explorer.recommendation_limit());
    let picks = explorer.recommend(&spec, limit);

    println!("{}", "Recommended for you:".bold().blue());
    if picks.is_empty() {
        println!("  Nothing matches those preferences.");
    }
    for (rank, venue) in picks.iter().enumerate() {
        print_venue_line(rank + 1, venue);
        println!("   Score: {:.2}", composite_score(venue));
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(explorer: &Explorer, id: VenueId) -> Result<()> {
    let venue = explorer.select(id)?;

    println!("{}", venue.name.bold().blue());
    println!(
        "{}{} · {} · {:.1}★ ({} reviews)",
        "• ".green(),
        venue.category,
        price_label(i32::from(venue.price_range)),
        venue.rating,
        venue.reviews
    );
    println!(
        "{}Virality: {:.0}{}",
        "• ".green(),
        venue.virality_score,
        venue.trending.map(trend_arrow).unwrap_or_default()
    );
    if !venue.location.is_empty() {
        println!("{}Location: {}", "• ".green(), venue.location);
    }
    if !venue.description.is_empty() {
        println!("\n{}\n", venue.description);
    }

    if !venue.facilities.is_empty() {
        let facilities: Vec<&str> = venue.facilities.iter().map(String::as_str).collect();
        println!("{}Facilities: {}", "• ".cyan(), facilities.join(", "));
    }
    if !venue.personality_match.is_empty() {
        let badges: Vec<String> = venue
            .personality_match
            .iter()
            .map(|p| badge(p.label()).to_string())
            .collect();
        println!("{}Suits: {}", "• ".cyan(), badges.join(" "));
    }
    if let Some(hours) = &venue.open_hours {
        println!("{}Open: {}", "• ".cyan(), hours);
    }
    if let Some(phone) = &venue.phone_number {
        println!("{}Phone: {}", "• ".cyan(), phone);
    }
    if let Some(website) = &venue.website {
        println!("{}Website: {}", "• ".cyan(), website);
    }
    if let Some(stats) = venue.social_stats {
        println!(
            "{}Instagram {} · TikTok {} · {} likes",
            "• ".cyan(),
            stats.instagram,
            stats.tiktok,
            stats.likes
        );
    }
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &VenueCatalog) -> Result<()> {
    println!("{}", "Categories:".bold().blue());
    for category in catalog.categories() {
        let count = catalog.venues_in_category(category).count();
        println!("  - {} ({} venues)", category, count);
    }

    println!("{}", "Facilities:".bold().blue());
    for facility in catalog.facilities() {
        println!("  - {}", facility);
    }
    Ok(())
}

/// Handle the 'login' command
async fn handle_login(config: &Config, email: &str, password: &str) -> Result<()> {
    let auth = MockAuthService::with_latency(Duration::from_millis(config.auth_latency_ms));

    let user = auth.login(email, password).await.context("Login failed")?;
    println!("{} Signed in as {} <{}>", "✓".green(), user.full_name.bold(), user.email);
    println!(
        "  Member since {} · {}",
        user.created_at.format("%B %Y"),
        if user.is_verified { "verified" } else { "unverified" }
    );

    auth.logout().await;
    Ok(())
}

fn print_venue_line(rank: usize, venue: &Venue) {
    let badges: Vec<String> = venue
        .personality_match
        .iter()
        .map(|p| badge(p.label()).to_string())
        .collect();
    println!(
        "{}. {} [{}] {} {:.1}★ virality {:.0} {}",
        rank.to_string().green(),
        venue.name,
        venue.category,
        price_label(i32::from(venue.price_range)),
        venue.rating,
        venue.virality_score,
        badges.join(" ")
    );
}

fn badge(label: &str) -> ColoredString {
    match personality_style_tag(label) {
        BadgeStyle::Blue => label.blue(),
        BadgeStyle::Red => label.red(),
        BadgeStyle::Green => label.green(),
        BadgeStyle::Neutral => label.normal(),
    }
}

fn trend_arrow(trending: Trending) -> String {
    match trending {
        Trending::Up => " ↑".green().to_string(),
        Trending::Stable => " →".yellow().to_string(),
        Trending::Down => " ↓".red().to_string(),
    }
}
