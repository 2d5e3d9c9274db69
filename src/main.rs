use chain_mrf::marginal_x2;
use log::{error, info};

fn main() {
    env_logger::init();

    info!("Computing the x2 marginal of the 5-chain by enumeration.");

    match marginal_x2() {
        Ok(p) => {
            println!("{:?}", p);
            info!("Done.");
        }
        Err(e) => {
            error!("Failed to compute the x2 marginal: {e}");
            std::process::exit(1);
        }
    }
}
