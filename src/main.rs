use astra::Server;
use listing_ranker::config::AppConfig;
use listing_ranker::dataset::Dataset;
use listing_ranker::responses::error_to_response;
use listing_ranker::router::handle;
use listing_ranker::telemetry::init_tracing;
use tracing::{error, info, warn};

fn main() {
    init_tracing();

    // 1️⃣ Resolve configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the dataset once; every worker reads the same copy
    let dataset = match Dataset::from_csv_path(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("❌ Dataset load failed: {e}");
            std::process::exit(1);
        }
    };
    if dataset.is_empty() {
        warn!(path = %config.dataset_path.display(), "dataset has no usable listings");
    }

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    info!(%addr, workers = config.max_workers, "Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &dataset) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "request failed");
            }
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
