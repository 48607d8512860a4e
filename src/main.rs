//! Resolves one course identifier from the command line.
//!
//! Prints every displayed-state transition observed while the cycle runs
//! (provisional static record, final record or not-found), then the final
//! record as JSON.

use course_resolver::infra::logging;
use course_resolver::{fingerprint, CourseService, DisplayState, Resolution};

fn usage_and_exit() -> ! {
    eprintln!("Usage: cargo run --bin course-resolver -- <identifier>");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init()?;

    let identifier = match std::env::args().nth(1) {
        Some(a) if a != "-h" && a != "--help" => a,
        _ => usage_and_exit(),
    };

    let service = CourseService::from_env()?;
    let coordinator = service.coordinator();
    let mut states = coordinator.subscribe();

    let printer = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let slot = states.borrow_and_update().clone();
            let shown = match &slot.state {
                DisplayState::Idle => "idle".to_string(),
                DisplayState::Loading { provisional: None } => "loading".to_string(),
                DisplayState::Loading {
                    provisional: Some(record),
                } => format!("loading (provisional: {:?})", record.title),
                DisplayState::Resolved { record, source } => {
                    format!("resolved from {} ({:?})", source, record.title)
                }
                DisplayState::NotFound => "not found".to_string(),
            };
            println!("> [{:?}] {}", slot.phase, shown);
        }
    });

    let resolution = coordinator.resolve(&identifier).await;
    drop(coordinator);
    printer.await?;

    match resolution {
        Resolution::Found { record, source } => {
            println!("> Source: {}", source);
            println!("> Fingerprint: {}", fingerprint(&record)?);
            println!("{}", serde_json::to_string_pretty(record.as_ref())?);
        }
        Resolution::NotFound | Resolution::Superseded => {
            println!("> Course {:?} not found. Browse all courses at /api/courses.", identifier);
            std::process::exit(1);
        }
    }
    Ok(())
}
