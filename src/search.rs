//! A variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! with a fully deterministic expansion order, so that identical input always yields an
//! identical path.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::iter;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest estimated cost first, then the node furthest along, then the node
        // discovered first.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = iter::successors(Some(start), |&i| {
        parents.get_index(i).map(|(_, &(parent, _))| parent)
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Best-first search from `start` until `success` holds for a popped node. Returns the path
/// including both endpoints and its cost. The working set is local to the call.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents.get_index(index)?;
            if success(node) {
                let path = reverse_path(&parents, index);
                return Some((path, cost));
            }
            // A node may sit in the heap several times if a cheaper way to it was found
            // later; only the entry matching the recorded cost is expanded.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - 2 - ... - 9 with an optional shortcut.
    fn line_successors(shortcut: bool) -> impl FnMut(&u32) -> Vec<(u32, u32)> {
        move |&n| {
            let mut succ = vec![];
            if n > 0 {
                succ.push((n - 1, 1));
            }
            if n < 9 {
                succ.push((n + 1, 1));
            }
            if shortcut && n == 2 {
                succ.push((8, 2));
            }
            succ
        }
    }

    #[test]
    fn finds_cheapest_path() {
        let (path, cost) = astar(&0, line_successors(true), |_| 0, |&n| n == 9).unwrap();
        assert_eq!(path, vec![0, 1, 2, 8, 9]);
        assert_eq!(cost, 5);
    }

    #[test]
    fn start_is_goal() {
        let (path, cost) = astar(&4, line_successors(false), |_| 0, |&n| n == 4).unwrap();
        assert_eq!(path, vec![4]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhausted_frontier() {
        assert!(astar(&0, line_successors(false), |_| 0, |&n| n == 42).is_none());
    }
}
