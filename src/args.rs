use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Scans a TeamSpeak 3 server for insecure HTTP links"
)]
pub struct Args {
    #[arg(long, help = "Query account login name")]
    pub user: Option<String>,

    #[arg(long, help = "Query account password")]
    pub password: Option<String>,

    #[arg(long, help = "Host name")]
    pub host: Option<String>,

    #[arg(long, value_name = "PORT", help = "Query port (default: 10011)")]
    pub queryport: Option<u16>,

    #[arg(long, value_name = "PORT", help = "Voice port (default: 9987)")]
    pub serverport: Option<u16>,

    #[arg(
        long,
        value_name = "SECS",
        help = "Connect and read timeout in seconds (default: 10)"
    )]
    pub timeout: Option<u64>,

    #[arg(
        long,
        value_name = "PATH",
        conflicts_with = "no_config",
        help = "Read defaults from this config file instead of searching for ts3scan.toml"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Do not read any config file")]
    pub no_config: bool,
}
