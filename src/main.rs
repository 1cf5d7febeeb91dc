use lnkscan::{logging, Config, WriteOutcome};
use tracing::info;

fn main() {
    logging::init_tracing();

    let config = Config::from_env();
    info!(roots = config.roots().len(), workers = config.workers(), "starting scan");

    let report = lnkscan::run(&config);

    // Every failure was already logged and suppressed; exit status stays 0.
    if let WriteOutcome::Failed(e) = &report.write {
        info!(error = %e, "finished without output");
    } else {
        info!(
            matches = report.match_count(),
            errors  = report.error_count(),
            "finished"
        );
    }
}
