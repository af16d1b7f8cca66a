// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Castbot CLI - Community API Bot Client
//!
//! Example usage and demonstration of the castbot library.

use std::env;
use std::process::ExitCode;

use castbot::{ApiClient, ApiClientConfig, ApiResponse, Credentials, UserListQuery};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("castbot=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "auth" => {
            if args.len() < 4 {
                eprintln!("Usage: castbot auth <email> <password>");
                return ExitCode::from(1);
            }
            run(|client| client.authenticate(&args[2], &args[3]))
        }
        "users" => {
            let mut query = UserListQuery::default();
            if let Some(state) = args.get(2) {
                query = query.state(state.clone());
            }
            if let Some(page) = args.get(3) {
                match page.parse() {
                    Ok(page) => query = query.page(page),
                    Err(_) => {
                        eprintln!("Invalid page number: {}", page);
                        return ExitCode::from(1);
                    }
                }
            }
            if let Some(per_page) = args.get(4) {
                match per_page.parse() {
                    Ok(per_page) => query = query.per_page(per_page),
                    Err(_) => {
                        eprintln!("Invalid page size: {}", per_page);
                        return ExitCode::from(1);
                    }
                }
            }
            run(|client| client.list_users(&query))
        }
        "user" => {
            if args.len() < 3 {
                eprintln!("Usage: castbot user <id>");
                return ExitCode::from(1);
            }
            run(|client| client.get_user(&args[2]))
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("castbot {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Castbot - Community API Bot Client

USAGE:
    castbot <COMMAND> [OPTIONS]

COMMANDS:
    auth <email> <password>          Check a login against the community
    users [state] [page] [per_page]  List community users
    user <id>                        Show a single user
    help                             Show this help message
    version                          Show version information

ENVIRONMENT:
    CASTBOT_COMMUNITY   Community location, e.g. https://demo.example.com
    CASTBOT_USER        Bot login (username or email)
    CASTBOT_PASSWORD    Bot password
    CASTBOT_PROXY       Optional outbound HTTP proxy URL

EXAMPLES:
    castbot auth emily@demo.test hunter2
    castbot users active 2 50
    castbot user 42
"#
    );
}

/// Build a client from the environment and print the outcome of one
/// operation
fn run(operation: impl FnOnce(&ApiClient) -> ApiResponse) -> ExitCode {
    let client = match client_from_env() {
        Ok(client) => client,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(1);
        }
    };

    let response = operation(&client);
    print!("{}", response);

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn client_from_env() -> Result<ApiClient, String> {
    let community = env::var("CASTBOT_COMMUNITY")
        .map_err(|_| "CASTBOT_COMMUNITY is not set (e.g. https://demo.example.com)".to_string())?;
    let user = env::var("CASTBOT_USER").map_err(|_| "CASTBOT_USER is not set".to_string())?;
    let password =
        env::var("CASTBOT_PASSWORD").map_err(|_| "CASTBOT_PASSWORD is not set".to_string())?;

    let mut config = ApiClientConfig::new(community);
    if let Ok(proxy) = env::var("CASTBOT_PROXY") {
        config = config.proxy(proxy);
    }

    ApiClient::new(config, Credentials::new(user, password))
        .map_err(|e| format!("Failed to create client: {}", e))
}
