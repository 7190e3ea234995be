use std::collections::HashMap;
use std::hash::Hash;

/// Map that remembers where each key was first inserted. Overwriting a key
/// keeps its position.
pub(crate) struct OrderedMap<K, V> {
    slots: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Clone + Eq + Hash, V> OrderedMap<K, V> {
    pub(crate) fn new() -> Self {
        OrderedMap {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, key: K, value: V) -> usize {
        let slot = self.entries.len();
        self.slots.insert(key.clone(), slot);
        self.entries.push((key, value));
        slot
    }

    // value for `key`, created with `default` on first sight
    fn entry_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => self.push(key, default()),
        };
        &mut self.entries[slot].1
    }

    pub(crate) fn insert(&mut self, key: K, value: V) {
        match self.slots.get(&key) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.push(key, value);
            }
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.slots.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &(K, V)> {
        self.entries.iter()
    }

    pub(crate) fn into_values(self) -> impl Iterator<Item = V> {
        self.entries.into_iter().map(|(_, v)| v)
    }
}

impl<K: Clone + Eq + Hash> OrderedMap<K, u64> {
    pub(crate) fn add(&mut self, key: K, amount: u64) {
        *self.entry_or_insert_with(key, || 0) += amount;
    }

    // stable, so equal scores stay in insertion order
    pub(crate) fn into_ranked(self) -> Vec<(K, u64)> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 3);
        assert_eq!(map.get(&"a"), Some(&3));
        assert_eq!(map.into_values().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let mut tally = OrderedMap::new();
        tally.add('x', 1);
        tally.add('y', 2);
        tally.add('z', 1);
        tally.add('x', 0);
        assert_eq!(tally.into_ranked(), vec![('y', 2), ('x', 1), ('z', 1)]);
    }
}
