//! Database seed tool.
//!
//! Bootstraps the admin account (idempotently — re-running rotates the
//! password) and can optionally load the sample projects and blog posts
//! used for local development.
//!
//! The admin password is taken from `PORTFOLIO_ADMIN_PASSWORD`; it is
//! never stored anywhere in plaintext.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use portfolio_auth::password::PasswordHasher;
use portfolio_core::config::AppConfig;
use portfolio_core::error::AppError;
use portfolio_database::repositories::{PostRepository, ProjectRepository, UserRepository};
use portfolio_entity::post::CreatePost;
use portfolio_entity::project::{CreateProject, ProjectLinks};

#[derive(Debug, Parser)]
#[command(name = "portfolio-seed", about = "Bootstrap the admin account and sample content")]
struct Args {
    /// Also insert sample projects and blog posts.
    #[arg(long)]
    with_samples: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("Seed failed: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let env = std::env::var("PORTFOLIO_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;

    let admin_password = std::env::var("PORTFOLIO_ADMIN_PASSWORD").map_err(|_| {
        AppError::configuration("PORTFOLIO_ADMIN_PASSWORD must be set to seed the admin account")
    })?;

    let pool = portfolio_database::connection::create_pool(&config.database).await?;
    portfolio_database::migration::run_migrations(&pool).await?;

    let hasher = PasswordHasher::new();
    let hash = hasher.hash(&admin_password)?;

    let users = Arc::new(UserRepository::new(pool.clone()));
    let admin = users.upsert(&config.auth.admin_username, &hash).await?;
    tracing::info!(username = %admin.username, "Admin account ready");

    if args.with_samples {
        insert_samples(&pool).await?;
    }

    Ok(())
}

async fn insert_samples(pool: &sqlx::PgPool) -> Result<(), AppError> {
    let projects = ProjectRepository::new(pool.clone());
    let posts = PostRepository::new(pool.clone());

    for data in sample_projects() {
        let project = projects.create(&data).await?;
        tracing::info!(title = %project.title, "Inserted sample project");
    }

    for data in sample_posts() {
        let post = posts.create(&data).await?;
        tracing::info!(title = %post.title, "Inserted sample post");
    }

    Ok(())
}

fn sample_projects() -> Vec<CreateProject> {
    vec![
        CreateProject {
            title: "Portfolio Website".to_string(),
            description: "A full-stack portfolio site with blog functionality, admin \
                          dashboard, and project showcase."
                .to_string(),
            tech_stack: vec![
                "React".to_string(),
                "Rust".to_string(),
                "Axum".to_string(),
                "PostgreSQL".to_string(),
            ],
            links: ProjectLinks {
                github: Some("https://github.com/mkmcgrath/portfolio".to_string()),
                live: Some("https://mkmcgrath.dev".to_string()),
            },
            tags: vec!["web".to_string(), "full-stack".to_string()],
        },
        CreateProject {
            title: "Weather App".to_string(),
            description: "Real-time weather application with geolocation support, hourly \
                          forecasts, and weekly predictions."
                .to_string(),
            tech_stack: vec![
                "React".to_string(),
                "OpenWeather API".to_string(),
                "CSS3".to_string(),
            ],
            links: ProjectLinks {
                github: Some("https://github.com/mkmcgrath/weather-app".to_string()),
                live: Some("https://weather.mkmcgrath.dev".to_string()),
            },
            tags: vec!["web".to_string(), "api".to_string(), "react".to_string()],
        },
        CreateProject {
            title: "Task Manager CLI".to_string(),
            description: "Command-line task management tool with priority sorting, due \
                          dates, and project organization."
                .to_string(),
            tech_stack: vec!["Python".to_string(), "SQLite".to_string(), "Click".to_string()],
            links: ProjectLinks {
                github: Some("https://github.com/mkmcgrath/task-cli".to_string()),
                live: None,
            },
            tags: vec!["cli".to_string(), "productivity".to_string()],
        },
    ]
}

fn sample_posts() -> Vec<CreatePost> {
    vec![
        CreatePost {
            title: "Building a Full-Stack Portfolio".to_string(),
            content: "# Building a Full-Stack Portfolio\n\nCreating a portfolio website is \
                      a great way to showcase your projects and skills. In this post I walk \
                      through the architecture and stack behind my personal site.\n\n## The \
                      stack\n\nA React frontend talks to a small REST backend over two \
                      resources: projects and blog posts. Writes go through a single admin \
                      login that issues a signed session token.\n"
                .to_string(),
            excerpt: "How I built my portfolio site, and the architecture decisions behind it."
                .to_string(),
            tags: vec!["web-development".to_string(), "tutorial".to_string()],
        },
        CreatePost {
            title: "Getting Started with PostgreSQL".to_string(),
            content: "# Getting Started with PostgreSQL\n\nPostgreSQL is a powerful \
                      open-source relational database. This post covers connection pools \
                      and why parameterized queries are non-negotiable.\n"
                .to_string(),
            excerpt: "A beginner-friendly guide to connection pools and parameterized queries."
                .to_string(),
            tags: vec!["postgresql".to_string(), "database".to_string()],
        },
        CreatePost {
            title: "Dark Mode Design: Tips and Tricks".to_string(),
            content: "# Dark Mode Design\n\nDark mode has become table stakes. You cannot \
                      just invert your light theme colors; contrast ratios still have to \
                      meet WCAG standards, and saturated accents glow uncomfortably on \
                      dark backgrounds.\n"
                .to_string(),
            excerpt: "Essential tips for creating beautiful and accessible dark mode interfaces."
                .to_string(),
            tags: vec!["design".to_string(), "css".to_string(), "accessibility".to_string()],
        },
    ]
}
