use std::collections::HashMap;
use std::hash::Hash;

/// Keyed groups that remember the order in which each key first appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Groups<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(candidate, _)| <K as std::borrow::Borrow<Q>>::borrow(candidate) == key)
            .map(|(_, value)| value)
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

pub fn group_by<'a, T, K, F>(items: &'a [T], key_fn: F) -> Groups<K, Vec<&'a T>>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut entries: Vec<(K, Vec<&'a T>)> = Vec::new();

    for item in items {
        let key = key_fn(item);
        match index.get(&key) {
            Some(&position) => entries[position].1.push(item),
            None => {
                index.insert(key.clone(), entries.len());
                entries.push((key, vec![item]));
            }
        }
    }

    Groups { entries }
}

pub fn count_by<T, K, F>(items: &[T], key_fn: F) -> Groups<K, usize>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut entries: Vec<(K, usize)> = Vec::new();

    for item in items {
        let key = key_fn(item);
        match index.get(&key) {
            Some(&position) => entries[position].1 += 1,
            None => {
                index.insert(key.clone(), entries.len());
                entries.push((key, 1));
            }
        }
    }

    Groups { entries }
}
