use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "emodetect-server")]
#[command(
    author,
    version,
    about = "Web front end for remote emotion detection",
    long_about = None
)]
pub struct Cli {
    /// Configuration file path (missing file means defaults)
    #[arg(short, long, default_value = "emodetect.yaml")]
    pub config: String,

    /// Listen address [default: 0.0.0.0]
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Listen port [default: 5000]
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// EmotionPredict endpoint URL
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Model identifier sent to the endpoint
    #[arg(short, long)]
    pub model_id: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
