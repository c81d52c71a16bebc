//! Load the distribution functions into a function table and call a few
//!
//! Run with `RUST_LOG=debug` to see catalogue construction and registration.

use probdist_registry::describe::{pdf_signature, summaries};
use probdist_registry::{find, load_distribution_extensions, DistributionKind, NativeFunctionTable, RegistryConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RegistryConfig::from_json_str(r#"{ "seed": 2024 }"#)?;
    let mut engine = NativeFunctionTable::new();
    load_distribution_extensions(&mut engine, &config)?;
    println!("Loaded {} functions\n", engine.functions().len());

    let calls: [(&str, &[f64]); 5] = [
        ("poisson_pdf", &[3.0, 4.0]),
        ("poisson_cdf", &[3.0, 4.0]),
        ("normal_cdf", &[1.96, 0.0, 1.0]),
        ("binomial_pdf", &[2.0, 5.0, 1.5]),
        ("normal_pdf", &[0.0]),
    ];
    for (name, args) in calls {
        match engine.evaluate(name, args) {
            Ok(value) => println!("{name}{args:?} = {value:.6}"),
            Err(err) => println!("{name}{args:?} failed: {err}"),
        }
    }

    println!("\nFive draws from gamma(2, 1.5):");
    for _ in 0..5 {
        println!("  {:.4}", engine.evaluate("gamma_random", &[2.0, 1.5])?);
    }

    println!("\nDiscrete distributions:");
    for summary in summaries(DistributionKind::Discrete) {
        let domains: Vec<_> = summary.parameters.iter().map(|p| p.domain.as_str()).collect();
        println!("  {:<40} {:<40} {}", summary.display_name, summary.pdf, domains.join(", "));
    }

    if let Some(weibull) = find("weibull") {
        println!("\nUsage: {}", pdf_signature(weibull));
    }

    Ok(())
}
