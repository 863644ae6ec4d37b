//! Uncoordinated random access.
//!
//! Every contender independently picks one channel uniformly at random and
//! attempts a transmission on it. There is no coordination: several nodes may
//! pick the same channel without blocking each other, so success depends only
//! on each node's own energy/gain draw. This is the baseline with no
//! allocation intelligence.

use rand::{Rng, RngCore};

use crate::network::{Channel, Node};
use crate::protocols::Protocol;

/// The no-coordination baseline protocol
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccess;

impl Protocol for RandomAccess {
    fn execute(&self, mut nodes: Vec<&mut Node>, channels: &[Channel], rng: &mut dyn RngCore) -> usize {
        if channels.is_empty() {
            return 0;
        }
        let mut successes = 0;
        for node in nodes.iter_mut() {
            let channel = &channels[rng.gen_range(0..channels.len())];
            let gain = channel.gain_for(node.id);
            if node.send_data(gain, &mut *rng) {
                successes += 1;
            }
        }
        successes
    }

    fn name(&self) -> &'static str {
        "random_access"
    }
}
