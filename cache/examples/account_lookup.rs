//! Look up one account and print its consolidated snapshot.
//!
//! ```sh
//! cargo run --example account_lookup -- rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh mainnet
//! ```

use riptide_cache::Riptide;
use riptide_core::FacetSet;

#[tokio::main]
async fn main() {
    env_logger::init();

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh".to_string());
    let network = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "mainnet".to_string());

    let riptide = Riptide::new();
    match riptide
        .get_or_fetch(&address, &network, &FacetSet::default())
        .await
    {
        Ok(snapshot) => {
            println!("network:      {}", snapshot.network.display_name());
            println!("activation:   {:?}", snapshot.activation);
            if let Some(balance) = snapshot.balance_xrp() {
                println!("balance:      {balance} XRP");
            }
            println!(
                "transactions: {}",
                snapshot.transactions.as_deref().map_or(0, <[_]>::len)
            );
            println!(
                "trust lines:  {}",
                snapshot.trust_lines.as_deref().map_or(0, <[_]>::len)
            );
            println!(
                "nfts:         {}",
                snapshot.nfts.as_deref().map_or(0, <[_]>::len)
            );
            for (facet, error) in &snapshot.errors {
                eprintln!("facet {facet} unavailable: {error}");
            }
        }
        Err(err) => eprintln!("aggregation failed: {err}"),
    }
}
