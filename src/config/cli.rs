use clap::Parser;

/// Only logging can be tuned from the command line; services and ports are fixed.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "multi-service-host")]
#[command(about = "Serves three static service pages on ports 8000, 8001 and 8002")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
