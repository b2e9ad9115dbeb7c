//! extracts occupied taxi trips from raw GPS files and prepares them as
//! fixed-length token sequences. see `cabtrace --help`.
use cabtrace_prep::app::PrepApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = PrepApp::parse();
    if let Some(parallelism) = args.parallelism {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .build_global()
        {
            log::error!("failed configuring thread pool: {e}");
            std::process::exit(1);
        }
    }
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
