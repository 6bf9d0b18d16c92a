use exchangehub::{Exchange, ExchangeFactory, Operation};

/// Prints which operations each exchange serves, optionally for a single
/// exchange given as the first argument
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let exchanges = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Exchange>()?],
        None => Exchange::all(),
    };

    for exchange in exchanges {
        println!("{}", exchange);
        let gaps = match ExchangeFactory::unsupported_operations(exchange) {
            Ok(gaps) => gaps,
            Err(e) => {
                println!("  {}", e);
                continue;
            }
        };

        for operation in Operation::all() {
            match gaps.iter().find(|(listed, _)| *listed == operation) {
                Some((_, reason)) => println!("  {:<22} unsupported ({})", operation, reason),
                None => println!("  {:<22} ok", operation),
            }
        }
    }

    Ok(())
}
