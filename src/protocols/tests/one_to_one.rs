use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::protocols::tests::common::{contenders, setup_channels, setup_nodes};
use crate::protocols::{OneToOneMatching, Protocol};
use crate::types::ProposerMode;

/// Tests the two-node scenario with energies [10, 1]: every channel prefers
/// the high-energy node, so deferred acceptance must hand it its own
/// most-preferred (lowest-gain) channel even when both nodes want the same
/// one, pushing the low-energy node to its second choice.
#[test]
fn test_high_energy_node_wins_contested_channel() {
    println!("\n=== Starting test_high_energy_node_wins_contested_channel ===");

    let mut nodes = setup_nodes(&[10.0, 1.0]);
    // Both nodes prefer channel 1 (smaller gain)
    let channels = setup_channels(&[&[0.5, 0.6], &[0.2, 0.3]]);

    let protocol = OneToOneMatching::new(ProposerMode::Node);
    let pairs = protocol.stable_matching(&contenders(&mut nodes), &channels);
    assert_eq!(
        pairs,
        vec![(0, 1), (1, 0)],
        "The energy-10 node should take the contested channel"
    );

    println!("[TEST]   Contested channel resolved by energy rank");
}

/// Tests that both proposer modes produce the same matching. Channels all
/// share one ranking (by energy), which makes the stable matching unique, so
/// node-proposing and channel-proposing runs must agree.
#[test]
fn test_proposer_modes_agree() {
    println!("\n=== Starting test_proposer_modes_agree ===");

    let energies = [0.9, 0.1, 0.5, 0.7];
    let gain_tables: Vec<&[f64]> = vec![
        &[0.8, 0.1, 0.6, 0.3],
        &[0.2, 0.9, 0.4, 0.7],
        &[0.5, 0.5, 0.1, 0.9],
        &[0.3, 0.2, 0.8, 0.1],
    ];
    let channels = setup_channels(&gain_tables);

    let mut nodes_a = setup_nodes(&energies);
    let by_nodes =
        OneToOneMatching::new(ProposerMode::Node).stable_matching(&contenders(&mut nodes_a), &channels);

    let mut nodes_b = setup_nodes(&energies);
    let by_channels = OneToOneMatching::new(ProposerMode::Channel)
        .stable_matching(&contenders(&mut nodes_b), &channels);

    assert_eq!(by_nodes, by_channels, "Both proposer roles should find the unique matching");
    assert_eq!(by_nodes.len(), 4, "Equal-sized sides should match everyone");

    println!("[TEST]   Matchings agree: {:?}", by_nodes);
}

/// Tests termination with more proposers than receivers: exactly
/// (population - channels) nodes stay unmatched, and they are the
/// lowest-energy ones.
#[test]
fn test_surplus_proposers_stay_unmatched() {
    println!("\n=== Starting test_surplus_proposers_stay_unmatched ===");

    let mut nodes = setup_nodes(&[0.4, 0.9, 0.2, 0.7]);
    let channels = setup_channels(&[&[0.1, 0.2, 0.3, 0.4], &[0.4, 0.3, 0.2, 0.1]]);

    let protocol = OneToOneMatching::new(ProposerMode::Node);
    let pairs = protocol.stable_matching(&contenders(&mut nodes), &channels);

    assert_eq!(pairs.len(), 2, "Two channels can hold exactly two matches");
    let matched: Vec<usize> = pairs.iter().map(|&(node_pos, _)| node_pos).collect();
    assert!(
        matched.contains(&1) && matched.contains(&3),
        "The two highest-energy nodes should win the scarce channels, got {:?}",
        matched
    );

    println!("[TEST]   Surplus proposers parked: matched {:?}", matched);
}

/// Tests the opposite imbalance: with more channels than nodes every node is
/// matched and the spare channels stay empty.
#[test]
fn test_surplus_receivers_all_nodes_match() {
    println!("\n=== Starting test_surplus_receivers_all_nodes_match ===");

    let mut nodes = setup_nodes(&[0.3, 0.8]);
    let channels = setup_channels(&[&[0.9, 0.8], &[0.1, 0.2], &[0.5, 0.4], &[0.7, 0.6]]);

    for proposer in [ProposerMode::Node, ProposerMode::Channel] {
        let pairs = OneToOneMatching::new(proposer).stable_matching(&contenders(&mut nodes), &channels);
        assert_eq!(pairs.len(), 2, "Every node should be matched under {:?}", proposer);
        let channels_used: Vec<usize> = pairs.iter().map(|&(_, c)| c).collect();
        assert_ne!(channels_used[0], channels_used[1], "Channels hold at most one node");
    }

    println!("[TEST]   All nodes matched with spare channels");
}

/// Tests empty slot states: no contenders or no channels must terminate
/// immediately with an empty matching and zero successes.
#[test]
fn test_empty_sides() {
    println!("\n=== Starting test_empty_sides ===");
    let mut rng = StdRng::seed_from_u64(31);
    let protocol = OneToOneMatching::new(ProposerMode::Node);

    let channels = setup_channels(&[&[0.5], &[0.1]]);
    assert!(protocol.stable_matching(&[], &channels).is_empty());
    assert_eq!(protocol.execute(Vec::new(), &channels, &mut rng), 0);

    let mut nodes = setup_nodes(&[1.0]);
    assert!(protocol.stable_matching(&contenders(&mut nodes), &[]).is_empty());
    assert_eq!(protocol.execute(contenders(&mut nodes), &[], &mut rng), 0);

    println!("[TEST]   Empty sides verified");
}

/// Tests that execute attempts exactly the matched pairs: with saturated
/// success probabilities the success count equals the matching size.
#[test]
fn test_execute_counts_matched_transmissions() {
    println!("\n=== Starting test_execute_counts_matched_transmissions ===");
    let mut rng = StdRng::seed_from_u64(32);

    let mut nodes = setup_nodes(&[5.0, 6.0, 7.0]);
    let channels = setup_channels(&[&[0.0; 3], &[0.0; 3]]);

    let protocol = OneToOneMatching::new(ProposerMode::Node);
    let successes = protocol.execute(contenders(&mut nodes), &channels, &mut rng);
    assert_eq!(successes, 2, "Two matched pairs should yield two certain successes");
    assert_eq!(
        nodes.iter().filter(|node| node.has_message).count(),
        1,
        "The unmatched node should keep its message"
    );

    println!("[TEST]   Execute counted {} successes", successes);
}
