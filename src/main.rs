//! CLI entry point for course-site

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_site::commands::theme::ThemeAction;
use course_site::navigation::Theme;
use course_site::CourseSite;

#[derive(Parser)]
#[command(name = "course-site")]
#[command(version)]
#[command(about = "Render and serve a single-page course website", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new course site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render one section fragment
    Render {
        /// Section id, or an address-bar fragment with --fragment
        #[arg(default_value = "")]
        section: String,

        /// Read the argument as an address-bar fragment (`#labs`)
        #[arg(short, long)]
        fragment: bool,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List sections and their data files
    List,

    /// Show or change the theme preference
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },

    /// Display version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

impl ThemeArg {
    fn action(arg: Option<Self>) -> ThemeAction {
        match arg {
            None => ThemeAction::Show,
            Some(ThemeArg::Light) => ThemeAction::Set(Theme::Light),
            Some(ThemeArg::Dark) => ThemeAction::Set(Theme::Dark),
            Some(ThemeArg::Toggle) => ThemeAction::Toggle,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "course_site=debug,info"
    } else {
        "course_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing course site in {:?}", target_dir);
            course_site::commands::init::init_site(&target_dir)?;
            println!("Initialized course site in {:?}", target_dir);
        }

        Commands::Render {
            section,
            fragment,
            output,
        } => {
            let site = CourseSite::new(&base_dir)?;
            course_site::commands::render::run(&site, &section, fragment, output.as_deref())
                .await?;
        }

        Commands::Generate { watch } => {
            let site = CourseSite::new(&base_dir)?;
            tracing::info!("Generating static files...");

            site.generate().await?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                course_site::commands::generate::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = CourseSite::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            site.generate().await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            course_site::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = CourseSite::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = CourseSite::new(&base_dir)?;
            course_site::commands::list::run(&site)?;
        }

        Commands::Theme { action } => {
            let site = CourseSite::new(&base_dir)?;
            course_site::commands::theme::run(&site, ThemeArg::action(action)).await?;
        }

        Commands::Version => {
            println!("course-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
