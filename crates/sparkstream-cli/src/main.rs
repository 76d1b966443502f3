mod generate;

use clap::{builder::PossibleValuesParser, Parser, Subcommand};
use sparkstream_core::PLATFORMS;
use sparkstream_genai::{GeminiClient, GenAi};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sparkstream")]
#[command(about = "SparkStream AI tools for student creators")]
struct Cli {
    /// Fail with the model error instead of printing an empty list
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate post ideas for a topic
    Ideas {
        /// What the posts should be about
        #[arg(long)]
        topic: String,
        /// Audience niche
        #[arg(long, default_value = "Student Life")]
        niche: String,
    },
    /// Rewrite a draft in three creator personas
    VibeCheck {
        /// Target platform
        #[arg(
            long,
            default_value = "Instagram",
            value_parser = PossibleValuesParser::new(PLATFORMS)
        )]
        platform: String,
        /// Draft text to analyse
        draft: String,
    },
    /// Suggest creators to collaborate with
    Collab {
        /// Niche to search in
        #[arg(long, default_value = "StudyTok")]
        niche: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = sparkstream_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let genai = GenAi::new(GeminiClient::from_config(&config)?);

    let output = match cli.command {
        Commands::Ideas { topic, niche } => {
            generate::ideas(&genai, &topic, &niche, cli.strict).await?
        }
        Commands::VibeCheck { platform, draft } => {
            generate::vibe_check(&genai, &draft, &platform, cli.strict).await?
        }
        Commands::Collab { niche } => generate::collaborators(&genai, &niche, cli.strict).await?,
    };

    println!("{output}");
    Ok(())
}
