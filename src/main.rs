use clap::Parser;
use nms_version::{Resolution, extract};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nms-version")]
#[command(version, about = "Resolve a server version banner to an NMS generation")]
struct Cli {
    /// Full server version banner, e.g. "git-Paper-550 (MC: 1.16.5)"
    banner: String,

    /// Treat the argument as an already-extracted version string
    #[arg(long)]
    raw: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let raw = if cli.raw {
        Some(cli.banner.as_str())
    } else {
        extract::version_substring(&cli.banner)
    };

    let resolution = Resolution::resolve(raw);

    println!("version:  {}", resolution.version());
    match resolution.strict() {
        Some(generation) => println!(
            "strict:   {} (protocol {}, data version {})",
            generation,
            generation.protocol_version,
            if generation.has_data_version() {
                generation.data_version.to_string()
            } else {
                "unknown".to_string()
            }
        ),
        None => println!("strict:   unknown"),
    }
    println!("possible: {}", resolution.possible());

    Ok(())
}
