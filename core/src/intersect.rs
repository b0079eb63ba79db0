use std::collections::HashSet;
use std::hash::Hash;

/// Elements present in both `a` and `b`, each once, in the order they first appear in `a`.
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let right: HashSet<&T> = b.iter().collect();
    let mut emitted: HashSet<&T> = HashSet::with_capacity(a.len().min(b.len()));
    let mut out = Vec::new();
    for item in a {
        if right.contains(item) && emitted.insert(item) {
            out.push(item.clone());
        }
    }
    out
}
