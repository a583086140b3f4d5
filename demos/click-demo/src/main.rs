//! Terminal walkthrough of the Clickrank client.
//!
//! Runs the whole core against the in-memory backends: registers two
//! players, signs them in, clicks for each, and prints the leaderboard.
//! Every line of output is a [`ClientEvent`] rendered the way a real
//! presentation layer would render it.

use std::sync::Arc;

use clickrank::prelude::*;

fn credentials(email: &str) -> Credentials {
    Credentials {
        email: email.into(),
        password: "secret1".into(),
    }
}

fn registration(email: &str, name: &str) -> Registration {
    Registration {
        email: email.into(),
        password: "secret1".into(),
        password_confirmation: "secret1".into(),
        display_name: name.into(),
    }
}

/// Renders one event the way a UI would: warnings into the warning slot,
/// successes clearing it.
fn render(event: &ClientEvent) {
    match event {
        ClientEvent::SignedIn(identity) => {
            println!("signed in as {}", identity.display_name);
        }
        ClientEvent::RegistrationComplete => {
            println!("registered, back to the login screen");
        }
        ClientEvent::SignedOut => println!("signed out"),
        ClientEvent::ScoreChanged(clicks) => {
            println!("clicks: {clicks}");
        }
        ClientEvent::Leaderboard(entries) => {
            println!("--- leaderboard ---");
            for (rank, entry) in entries.iter().enumerate() {
                println!(
                    "{:>2}. {:<12} {}",
                    rank + 1,
                    entry.username,
                    entry.clicks
                );
            }
        }
        ClientEvent::LoginFailed(_)
        | ClientEvent::RegisterFailed(_)
        | ClientEvent::ScoreWarning(_)
        | ClientEvent::LeaderboardFailed(_) => {
            if let Some(warning) = event.warning() {
                println!("warning: {warning}");
            }
        }
    }
}

/// Plays one player's session: sign in, click `clicks` times, sign out.
async fn play(
    handle: &ClientHandle,
    email: &str,
    clicks: usize,
) -> Result<(), ClientError> {
    handle.login(credentials(email)).await?;
    for _ in 0..clicks {
        handle.save_score().await?;
    }
    handle.sign_out().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("clickrank=info")
                }),
        )
        .init();

    let provider = Arc::new(MemoryIdentity::new());
    let store = Arc::new(MemoryStore::new());
    let (handle, mut events) =
        spawn_client(provider, store, ClientConfig::default());

    // Print every event as it arrives, concurrently with the scenario.
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            render(&event);
        }
    });

    // Two players register, then trade clicks.
    handle.register(registration("kim@example.com", "Kim")).await?;
    handle.register(registration("ana@example.com", "Ana")).await?;

    play(&handle, "kim@example.com", 3).await?;
    play(&handle, "ana@example.com", 5).await?;
    play(&handle, "kim@example.com", 1).await?;

    // A bad login to show the warning slot in action.
    handle.login(credentials("nobody@example.com")).await?;

    handle.load_leaderboard().await?;
    handle.shutdown().await?;

    printer.await?;
    Ok(())
}
