//! KinGraph terminal front-end
//!
//! A minimal rendering surface over the home feature: each Enter press
//! triggers a fetch of the backend info payload, and the resulting state is
//! rendered as text.
//!
//! ## Usage
//!
//! Point the client at a backend (defaults to `http://localhost:8080`):
//!
//! ```bash
//! export KINGRAPH_API_URL="http://localhost:8080"
//! cargo run -p kingraph-home
//! ```

use kingraph_home::{HomeAction, HomeReducer, HomeState, ProductionHomeEnvironment, render};
use kingraph_runtime::Store;
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kingraph_home=info,kingraph_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== KinGraph ===");
    println!("Press Enter to call the backend. Type 'quit' to exit.\n");

    let environment = ProductionHomeEnvironment::from_env();
    let store = Store::new(HomeState::default(), HomeReducer::new(), environment);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        // Trigger and wait for this cycle's completion before rendering.
        let outcome = store
            .send_and_wait_for(
                HomeAction::Load,
                |a| {
                    matches!(
                        a,
                        HomeAction::LoadSucceeded { .. } | HomeAction::LoadFailed { .. }
                    )
                },
                Duration::from_secs(10),
            )
            .await;

        if let Err(error) = outcome {
            eprintln!("load did not complete: {error}");
        }

        let rendered = store.state(|s| render(s)).await;
        print!("{rendered}");
    }

    store.shutdown(Duration::from_secs(5)).await?;
    println!("\nGoodbye!");
    Ok(())
}
