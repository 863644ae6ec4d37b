use crate::stochastic::{DistributionError, StochasticSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Tests that malformed distribution parameters are rejected:
/// - Empty or reversed uniform support
/// - Non-finite uniform bounds
/// - Zero, negative, or non-finite exponential rate
#[test]
fn test_parameter_validation() {
    println!("\n=== Starting test_parameter_validation ===");

    assert!(matches!(
        StochasticSource::uniform(1.0, 1.0),
        Err(DistributionError::InvalidSupport { .. })
    ));
    assert!(matches!(
        StochasticSource::uniform(2.0, 1.0),
        Err(DistributionError::InvalidSupport { .. })
    ));
    assert!(matches!(
        StochasticSource::uniform(f64::NAN, 1.0),
        Err(DistributionError::InvalidSupport { .. })
    ));
    assert!(matches!(
        StochasticSource::uniform(0.0, f64::INFINITY),
        Err(DistributionError::InvalidSupport { .. })
    ));
    assert!(matches!(
        StochasticSource::exponential(0.0),
        Err(DistributionError::InvalidRate(_))
    ));
    assert!(matches!(
        StochasticSource::exponential(-1.0),
        Err(DistributionError::InvalidRate(_))
    ));
    assert!(matches!(
        StochasticSource::exponential(f64::NAN),
        Err(DistributionError::InvalidRate(_))
    ));

    println!("[TEST]   All malformed parameters rejected");

    assert!(StochasticSource::uniform(0.0, 1.0).is_ok());
    assert!(StochasticSource::exponential(1.0).is_ok());
    assert!(StochasticSource::unit_uniform().validate().is_ok());
    assert!(StochasticSource::unit_exponential().validate().is_ok());
}

/// Tests that samples always land inside the distribution support:
/// - Uniform samples stay within [low, high)
/// - Exponential samples are non-negative
#[test]
fn test_samples_within_support() {
    println!("\n=== Starting test_samples_within_support ===");
    let mut rng = StdRng::seed_from_u64(7);

    let uniform = StochasticSource::uniform(2.0, 5.0).unwrap();
    for _ in 0..1000 {
        let x = uniform.sample(&mut rng);
        assert!(x >= 2.0 && x < 5.0, "Uniform sample {} outside [2, 5)", x);
    }

    let exp = StochasticSource::exponential(3.0).unwrap();
    for _ in 0..1000 {
        let x = exp.sample(&mut rng);
        assert!(x >= 0.0, "Exponential sample {} is negative", x);
    }

    println!("[TEST]   2000 samples all within support");
}

/// Tests batch sampling:
/// - sample_many returns exactly n draws
/// - Draws are not all identical for a non-degenerate source
#[test]
fn test_sample_many() {
    println!("\n=== Starting test_sample_many ===");
    let mut rng = StdRng::seed_from_u64(11);

    let source = StochasticSource::unit_uniform();
    let samples = source.sample_many(&mut rng, 50);
    assert_eq!(samples.len(), 50, "Should produce exactly 50 samples");
    assert!(
        samples.iter().any(|&x| (x - samples[0]).abs() > 1e-12),
        "Independent uniform draws should not all coincide"
    );
    assert!(source.sample_many(&mut rng, 0).is_empty(), "Zero draws should yield an empty batch");
}

/// Tests the uniform cdf and pdf closed forms:
/// - cdf clamps to 0 below the support and 1 above it
/// - cdf is linear inside the support
/// - pdf is flat inside the support and zero outside
#[test]
fn test_uniform_cdf_pdf() {
    println!("\n=== Starting test_uniform_cdf_pdf ===");
    let source = StochasticSource::uniform(1.0, 3.0).unwrap();

    assert_eq!(source.cdf(0.5), 0.0, "cdf below support should be 0");
    assert_eq!(source.cdf(1.0), 0.0, "cdf at the lower edge should be 0");
    assert!((source.cdf(2.0) - 0.5).abs() < 1e-12, "cdf at the midpoint should be 0.5");
    assert_eq!(source.cdf(3.0), 1.0, "cdf at the upper edge should be 1");
    assert_eq!(source.cdf(10.0), 1.0, "cdf above support should be 1");

    assert_eq!(source.pdf(0.5), 0.0, "pdf below support should be 0");
    assert!((source.pdf(2.0) - 0.5).abs() < 1e-12, "pdf inside support should be 1/(high-low)");
    assert_eq!(source.pdf(10.0), 0.0, "pdf above support should be 0");

    println!("[TEST]   Uniform cdf/pdf verified");
}

/// Tests the exponential cdf and pdf closed forms:
/// - cdf is 0 at and below the origin and approaches 1
/// - pdf equals rate at the origin and is zero for negative x
#[test]
fn test_exponential_cdf_pdf() {
    println!("\n=== Starting test_exponential_cdf_pdf ===");
    let source = StochasticSource::exponential(2.0).unwrap();

    assert_eq!(source.cdf(-1.0), 0.0, "cdf of negative x should be 0");
    assert_eq!(source.cdf(0.0), 0.0, "cdf at the origin should be 0");
    let expected = 1.0 - (-2.0f64).exp();
    assert!((source.cdf(1.0) - expected).abs() < 1e-12, "cdf(1) should be 1 - e^(-2)");
    assert!(source.cdf(100.0) > 0.999999, "cdf should approach 1 for large x");

    assert_eq!(source.pdf(-1.0), 0.0, "pdf of negative x should be 0");
    assert!((source.pdf(0.0) - 2.0).abs() < 1e-12, "pdf at the origin should equal the rate");
    assert!(
        (source.pdf(1.0) - 2.0 * (-2.0f64).exp()).abs() < 1e-12,
        "pdf(1) should be rate * e^(-rate)"
    );

    println!("[TEST]   Exponential cdf/pdf verified");
}
