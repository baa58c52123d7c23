//! Kuhn's augmenting-path bipartite matching.
//!
//! Left vertices are givers, right vertices receivers, both indexed like the
//! constraint graph. Each search walks alternating paths with an explicit
//! stack, so depth is bounded by memory rather than the call stack.

use super::statistics::MatchStatistics;

/// One giver on the current alternating path.
struct Frame {
    giver: usize,
    // Next position in `candidates[giver]` to try; the receiver at
    // `cursor - 1` is the one the path currently goes through.
    cursor: usize,
}

pub(crate) struct BipartiteMatcher {
    candidates: Vec<Vec<usize>>,
    owner: Vec<Option<usize>>,
    receiver_of: Vec<Option<usize>>,
    // Receiver visit marks, compared against `epoch` to avoid clearing.
    visited: Vec<u32>,
    epoch: u32,
    stack: Vec<Frame>,
}

impl BipartiteMatcher {
    /// Creates a matcher over per-giver candidate receiver lists. The order of
    /// each list is the order receivers are tried in.
    pub(crate) fn new(candidates: Vec<Vec<usize>>) -> Self {
        let n = candidates.len();
        Self {
            candidates,
            owner: vec![None; n],
            receiver_of: vec![None; n],
            visited: vec![0; n],
            epoch: 0,
            stack: Vec::new(),
        }
    }

    /// Tries to match `root` by finding an augmenting path from it.
    ///
    /// On success every giver on the path shifts to its next receiver and the
    /// matching grows by one. A giver left unmatched here stays unmatched in
    /// every maximum matching reachable from the current one.
    pub(crate) fn augment_from(&mut self, root: usize, stats: &mut MatchStatistics) -> bool {
        if self.receiver_of[root].is_some() {
            return true;
        }
        stats.augmenting_searches += 1;
        self.epoch += 1;
        self.stack.clear();
        self.stack.push(Frame {
            giver: root,
            cursor: 0,
        });

        while let Some(frame) = self.stack.last_mut() {
            let giver = frame.giver;
            let Some(&receiver) = self.candidates[giver].get(frame.cursor) else {
                self.stack.pop();
                continue;
            };
            frame.cursor += 1;

            if self.visited[receiver] == self.epoch {
                continue;
            }
            self.visited[receiver] = self.epoch;
            stats.receivers_probed += 1;

            match self.owner[receiver] {
                None => {
                    self.flip_path(stats);
                    return true;
                }
                Some(current) => self.stack.push(Frame {
                    giver: current,
                    cursor: 0,
                }),
            }
        }
        false
    }

    /// Applies the augmenting path held on the stack.
    fn flip_path(&mut self, stats: &mut MatchStatistics) {
        for frame in self.stack.drain(..) {
            let receiver = self.candidates[frame.giver][frame.cursor - 1];
            if self.receiver_of[frame.giver].is_some() {
                stats.reassignments += 1;
            }
            self.owner[receiver] = Some(frame.giver);
            self.receiver_of[frame.giver] = Some(receiver);
        }
        stats.matched_count += 1;
    }

    /// Returns the receiver matched to each giver.
    pub(crate) fn receivers(&self) -> &[Option<usize>] {
        &self.receiver_of
    }

    /// Givers without a receiver, in index order.
    pub(crate) fn unmatched(&self) -> Vec<usize> {
        (0..self.receiver_of.len())
            .filter(|&g| self.receiver_of[g].is_none())
            .collect()
    }

    /// Computes a Hall witness for a maximum matching that is not perfect.
    ///
    /// Starting from the unmatched givers, follows candidate edges to
    /// receivers and matched edges back to givers. Every receiver reached is
    /// matched (otherwise an augmenting path would exist), so the reached
    /// receivers number exactly `givers - unmatched`. Both lists are sorted.
    pub(crate) fn hall_witness(&self) -> (Vec<usize>, Vec<usize>) {
        let n = self.receiver_of.len();
        let mut giver_seen = vec![false; n];
        let mut receiver_seen = vec![false; n];
        let mut queue = self.unmatched();
        for &g in &queue {
            giver_seen[g] = true;
        }

        let mut head = 0;
        while head < queue.len() {
            let giver = queue[head];
            head += 1;
            for &receiver in &self.candidates[giver] {
                if receiver_seen[receiver] {
                    continue;
                }
                receiver_seen[receiver] = true;
                if let Some(next) = self.owner[receiver] {
                    if !giver_seen[next] {
                        giver_seen[next] = true;
                        queue.push(next);
                    }
                }
            }
        }

        let givers = (0..n).filter(|&g| giver_seen[g]).collect();
        let receivers = (0..n).filter(|&r| receiver_seen[r]).collect();
        (givers, receivers)
    }
}
