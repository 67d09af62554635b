use clap::Parser;
use handyhub::utils::{logger, validation::Validate};
use handyhub::{
    CliConfig, ConfigProvider, DirectorySession, HttpCatalogSource, SignupModal, TerminalSurface,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting handyhub CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = HttpCatalogSource::new(config.catalog_endpoint());
    let (modal, mut ack_events) = SignupModal::new(config.ack_delay());
    let surface = TerminalSurface::stdout();

    let mut session = DirectorySession::start(&source, surface, modal).await;

    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_line(&mut session, line.trim()).await {
                    break;
                }
            }
            Some(message) = ack_events.recv() => {
                session.announce(&message);
            }
        }
    }

    Ok(())
}

/// Dispatches one input line. Plain text is a search; commands start with
/// a colon. Returns false when the session should end.
async fn handle_line(
    session: &mut DirectorySession<TerminalSurface<std::io::Stdout>>,
    line: &str,
) -> bool {
    match line {
        ":quit" | ":q" => return false,
        ":help" => print_help(),
        ":menu" => {
            let expanded = session.toggle_menu();
            session.announce(if expanded {
                "navigation menu expanded"
            } else {
                "navigation menu collapsed"
            });
        }
        ":signup" => {
            session.open_signup().await;
            session.announce("Signup open: ':join <email>' to submit, ':close' to dismiss");
        }
        ":close" => session.close_signup().await,
        _ => {
            if let Some(email) = line.strip_prefix(":join") {
                session.submit_signup(email.trim()).await;
            } else if let Some(index) = line.strip_prefix(":select") {
                match index.trim().parse::<usize>() {
                    Ok(n) => {
                        if session.select(n).is_none() {
                            session.announce("no card at that position");
                        }
                    }
                    Err(_) => session.announce("usage: :select <number>"),
                }
            } else {
                session.search(line);
            }
        }
    }
    true
}

fn print_help() {
    println!();
    println!("Type to search services by title or category (empty line shows all).");
    println!("Commands: :select <n>  :menu  :signup  :join <email>  :close  :help  :quit");
}
