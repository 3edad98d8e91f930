//! Tour of the binning strategies on one simulated sample

use discretize_bins::{
    catalog, custom_binning, equal_frequency_binning, equal_width_binning, jenks_natural_breaks,
    kmeans_binning, quantile_binning, standard_deviation_binning, Discretized,
};
use discretize_core::SampleSummary;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn print_distribution(title: &str, result: &Discretized) {
    println!("{}", title);
    if let Some(edges) = result.edges() {
        let formatted: Vec<String> = edges.iter().map(|e| format!("{:.1}", e)).collect();
        println!("  edges: [{}]", formatted.join(", "));
    }
    for (label, count) in result.labels().iter().zip(result.counts()) {
        println!("  {:8} {:4} values", label.to_string(), count);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Binning Strategy Tour ===\n");

    // Simulated exam scores around 100 with spread 15
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let normal = Normal::new(100.0, 15.0)?;
    let sample: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();
    println!("Sample: {} scores drawn from Normal(100, 15)", sample.len());
    println!("{}\n", SampleSummary::describe(&sample)?);

    print_distribution(
        "1. Equal Width Binning (5 bins)",
        &equal_width_binning(&sample, 5)?,
    );

    print_distribution(
        "2. Equal Frequency Binning (5 bins)",
        &equal_frequency_binning(&sample, 5)?,
    );

    print_distribution("3. KMeans Binning (4 bins)", &kmeans_binning(&sample, 4)?);

    print_distribution(
        "4. Quantile Binning (4 bins)",
        &quantile_binning(&sample, 4)?,
    );

    print_distribution(
        "5. Jenks Natural Breaks (4 bins)",
        &jenks_natural_breaks(&sample, 4)?,
    );

    print_distribution(
        "6. Standard Deviation Binning (1 deviation each side)",
        &standard_deviation_binning(&sample, 1)?,
    );

    print_distribution(
        "7. Custom Binning (grade cut-offs)",
        &custom_binning(&sample, vec![40.0, 70.0, 85.0, 100.0, 115.0, 130.0, 160.0])?,
    );

    println!("8. Catalog");
    for info in catalog::entries() {
        println!("  {}", info);
        for spec in &info.params {
            println!("    {} - {}", spec, spec.description);
        }
    }
    println!();

    let result = catalog::apply("Equal Width Binning", &sample, &[("n_bins", 3)])?;
    println!(
        "Dispatched \"Equal Width Binning\" with n_bins=3: counts {:?}",
        result.counts()
    );

    Ok(())
}
