use std::sync::Arc;

use harvestmac::network::NetworkConfig;
use harvestmac::protocols::{
    OneToManyMatching, OneToOneMatching, OptimalMechanism, Protocol, RandomAccess,
};
use harvestmac::stochastic::StochasticSource;
use harvestmac::sweep::{run_sweep, run_sweep_parallel};
use harvestmac::types::{ProposerMode, ValueMode};

/// A network whose per-slot outcomes are forced: energies in [2, 3) against
/// vanishing gains clamp every success probability to 1, and at
/// rate = population every node generates a message every slot.
fn saturated_config(population: usize, num_channels: usize) -> NetworkConfig {
    NetworkConfig {
        population,
        num_channels,
        energy_source: StochasticSource::Uniform { low: 2.0, high: 3.0 },
        gain_source: StochasticSource::Uniform { low: 0.0, high: 1e-9 },
        ..NetworkConfig::default()
    }
}

fn all_protocols() -> Vec<Box<dyn Protocol>> {
    vec![
        Box::new(RandomAccess),
        Box::new(OneToOneMatching::new(ProposerMode::Node)),
        Box::new(OneToManyMatching::new(2).expect("Capacity 2 is valid")),
        Box::new(OptimalMechanism::new(ValueMode::Energy)),
    ]
}

#[test]
fn test_zero_rate_is_silent_for_every_protocol() {
    let config = saturated_config(4, 3);
    for protocol in all_protocols() {
        let results = run_sweep(protocol.as_ref(), &config, &[0.0], 40, Some(5))
            .expect("Sweep should succeed");
        assert_eq!(
            results.throughput_at(0.0),
            Some(0.0),
            "No messages arrive at rate 0, so {} must deliver nothing",
            protocol.name()
        );
    }
}

#[test]
fn test_saturated_rate_hits_each_protocols_cap() {
    // Six always-saturated contenders against two channels: random access is
    // unblocked by collisions, the matchings cap at their capacity, and the
    // auction (whose Uniform(2, 3) markup 2v - 3 is always positive) serves
    // one node per channel
    let config = saturated_config(6, 2);
    let cases: Vec<(Box<dyn Protocol>, f64)> = vec![
        (Box::new(RandomAccess), 6.0),
        (Box::new(OneToOneMatching::new(ProposerMode::Node)), 2.0),
        (Box::new(OneToManyMatching::new(2).expect("Capacity 2 is valid")), 4.0),
        (Box::new(OptimalMechanism::new(ValueMode::Energy)), 2.0),
    ];

    for (protocol, expected) in cases {
        let results = run_sweep(protocol.as_ref(), &config, &[6.0], 30, Some(9))
            .expect("Sweep should succeed");
        assert_eq!(
            results.throughput_at(6.0),
            Some(expected),
            "{} should deliver exactly {} per slot when saturated",
            protocol.name(),
            expected
        );
    }
}

#[test]
fn test_single_node_single_channel_certain_slot() {
    // One node, one channel, one slot, rate equal to the population: the
    // arrival is certain and the clamped success probability is 1, so the
    // single attempt must succeed
    let config = saturated_config(1, 1);
    let results =
        run_sweep(&RandomAccess, &config, &[1.0], 1, Some(2)).expect("Sweep should succeed");
    assert_eq!(results.throughput_at(1.0), Some(1.0));
}

#[tokio::test]
async fn test_parallel_driver_agrees_on_forced_rates() {
    let config = saturated_config(6, 2);
    let protocol = OneToManyMatching::new(2).expect("Capacity 2 is valid");

    let sequential = run_sweep(&protocol, &config, &[0.0, 6.0], 30, Some(13))
        .expect("Sequential sweep should succeed");
    let parallel = run_sweep_parallel(Arc::new(protocol), &config, &[0.0, 6.0], 30, Some(13))
        .await
        .expect("Parallel sweep should succeed");

    assert_eq!(sequential.rates(), parallel.rates(), "Both drivers keep request order");
    for results in [&sequential, &parallel] {
        assert_eq!(results.throughput_at(0.0), Some(0.0));
        assert_eq!(results.throughput_at(6.0), Some(4.0));
    }
}

#[test]
fn test_default_sources_respect_protocol_caps() {
    // Under the default Uniform(0, 1) energies and Exp(1) gains nothing is
    // forced, but per-slot successes are still bounded by what each protocol
    // can allocate
    let config = NetworkConfig {
        population: 5,
        num_channels: 3,
        ..NetworkConfig::default()
    };
    let cases: Vec<(Box<dyn Protocol>, f64)> = vec![
        (Box::new(RandomAccess), 5.0),
        (Box::new(OneToOneMatching::new(ProposerMode::Node)), 3.0),
        (Box::new(OneToManyMatching::new(2).expect("Capacity 2 is valid")), 5.0),
        (Box::new(OptimalMechanism::new(ValueMode::Energy)), 3.0),
    ];

    for (protocol, cap) in cases {
        let results = run_sweep(protocol.as_ref(), &config, &[1.0, 2.5, 5.0], 60, Some(21))
            .expect("Sweep should succeed");
        for point in &results.points {
            assert!(
                point.throughput.is_finite() && point.throughput >= 0.0 && point.throughput <= cap,
                "{} at rate {} delivered {} outside [0, {}]",
                protocol.name(),
                point.rate,
                point.throughput,
                cap
            );
        }
    }
}
