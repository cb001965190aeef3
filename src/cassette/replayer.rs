//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Hands out a cassette's interactions one at a time, keeping an
/// independent queue for every port/method pair.
#[derive(Debug, Default)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Indexes the interactions of `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Takes the next interaction recorded for `port`/`method`.
    ///
    /// # Panics
    ///
    /// Panics when the cassette holds no further interaction for the pair,
    /// listing the pairs that were recorded.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut recorded: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            recorded.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Recorded pairs: [{}]",
                recorded.join(", ")
            );
        };
        queue.pop_front().unwrap_or_else(|| {
            panic!("Cassette exhausted: every recorded {port}::{method} interaction was consumed")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.0.0".into(),
            interactions,
        }
    }

    #[test]
    fn pairs_are_served_independently_in_order() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![
            interaction(0, "clipboard", "write_text", json!({"Ok": null})),
            interaction(1, "notifier", "notify", json!(null)),
            interaction(2, "clipboard", "write_text", json!({"Err": "denied"})),
        ]));
        assert_eq!(replayer.remaining(), 3);

        assert_eq!(replayer.next_interaction("notifier", "notify").seq, 1);
        assert_eq!(replayer.next_interaction("clipboard", "write_text").seq, 0);
        let second = replayer.next_interaction("clipboard", "write_text");
        assert_eq!(second.output, json!({"Err": "denied"}));
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "every recorded clipboard::write_text interaction was consumed")]
    fn exhausted_pair_panics() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![interaction(
            0,
            "clipboard",
            "write_text",
            json!({"Ok": null}),
        )]));
        let _ = replayer.next_interaction("clipboard", "write_text");
        let _ = replayer.next_interaction("clipboard", "write_text");
    }

    #[test]
    #[should_panic(expected = "no interactions recorded for fs::write")]
    fn unknown_pair_panics() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![]));
        let _ = replayer.next_interaction("fs", "write");
    }
}
