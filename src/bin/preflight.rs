use course_resolver::infra::{config, logging};
use course_resolver::{CourseService, CourseSource, RemoteCourseClient, StoreHealth};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--seed] [--probe <identifier>]\n\
         \n\
         Reads env vars (all optional):\n\
           REMOTE_API_BASE_URL, REMOTE_API_TIMEOUT_SECS, DATABASE_URL, BIND_ADDR\n\
         \n\
         --seed     create the course_documents table and upsert the bundled catalog\n\
         --probe    identifier to look up against the remote API (default: first bundled course)\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let seed = args.iter().any(|a| a == "--seed");
    let probe_arg = match args.iter().position(|a| a == "--probe") {
        Some(i) => match args.get(i + 1) {
            Some(v) => Some(v.clone()),
            None => usage_and_exit(),
        },
        None => None,
    };

    println!("> Preflight:");
    println!(
        "  REMOTE_API_BASE_URL={}",
        config::remote_api_base_url().unwrap_or_else(|| "(unset)".to_string())
    );
    println!(
        "  REMOTE_API_TIMEOUT_SECS={:?}",
        config::remote_api_timeout()?.map(|d| d.as_secs())
    );
    println!(
        "  DATABASE_URL={}",
        if config::database_url().is_some() { "(set)" } else { "(unset)" }
    );
    println!("  BIND_ADDR={}", config::bind_addr());

    let service = CourseService::from_env()?;
    println!("  Bundled courses: {}", service.catalog().len());

    // Document store connectivity
    match service.store_health().await {
        StoreHealth::NotConfigured => {
            println!("  Document store: not configured (secondary lookups will fall through).");
            if seed {
                return Err(anyhow::anyhow!("--seed requires DATABASE_URL"));
            }
        }
        StoreHealth::Reachable => {
            println!("  Document store: reachable.");
            if seed {
                let report = service.seed_store().await?;
                println!(
                    "  Seeded {} course(s); {} failed {:?}",
                    report.written,
                    report.failed.len(),
                    report.failed
                );
            } else if let Some(store) = service.store() {
                store.ensure_schema().await?;
                println!("  course_documents table present.");
            }
        }
        StoreHealth::Unreachable(e) => {
            return Err(anyhow::anyhow!("Document store is unreachable: {}", e));
        }
    }

    // Remote API reachability
    let probe = probe_arg.or_else(|| {
        service
            .catalog()
            .list()
            .first()
            .and_then(|r| r.key().map(str::to_string))
    });
    match (RemoteCourseClient::from_env()?, probe) {
        (None, _) => println!("  Remote API: not configured (remote lookups will fall through)."),
        (Some(_), None) => println!("  Remote API: configured, no probe identifier available."),
        (Some(client), Some(probe)) => match client.fetch(&probe).await {
            Ok(Some(record)) => println!("  Remote API: ok ({:?} -> {:?}).", probe, record.title),
            Ok(None) => println!("  Remote API: reachable; {:?} not found remotely.", probe),
            Err(e) => eprintln!("  Warning: remote API probe for {:?} failed: {}", probe, e),
        },
    }

    println!("> Preflight OK.");
    Ok(())
}
