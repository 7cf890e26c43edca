//! Startup banner and endpoint listing.

use colored::Colorize;

use crate::config::Config;

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║                                                           ║".cyan());
    println!("║     {}                                      ║", "roomtoken v0.1.0".bold().white());
    println!("║     {}                        ║", "LiveKit room-join token issuer".dimmed());
    println!("{}", "║                                                           ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(config: &Config) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", config.bind_addr()).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}        {}", "POST".yellow(), "/".white(), "Issue room-join token".dimmed());
    println!("  {} {} {}", "GET ".green(), "/metrics".white(), "Telemetry".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!();
    match &config.credentials {
        Some(creds) => println!(
            "{} {}",
            "Signing key:".white().bold(),
            creds.api_key.cyan()
        ),
        None => println!(
            "{} {}",
            "Signing key:".white().bold(),
            "not configured, POST / will return 500".red()
        ),
    }
    println!();
}
