use clap::Parser;

#[derive(Parser)]
#[command(name = "ytsum", about = "YouTube transcript summarization service", version)]
pub struct Cli {
    /// Address to bind
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Gemini model for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Log request handling detail
    #[arg(short, long)]
    pub verbose: bool,
}
