use ahash::AHashSet;

/// Set of shingle hashes for one document.
///
/// Duplicate windows collapse into a single entry, and two different windows
/// that collide under the hash modulus are indistinguishable. Only the
/// generator inserts; callers get read-only access.
#[derive(Debug, Clone, Default)]
pub struct Fingerprint {
    hashes: AHashSet<u64>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hashes: AHashSet::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.hashes.contains(&hash)
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.hashes.iter().copied()
    }

    /// Number of hashes present in both sets; walks the smaller one.
    pub fn intersection_count(&self, other: &Fingerprint) -> usize {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small.hashes.iter().filter(|h| large.hashes.contains(h)).count()
    }

    pub(crate) fn insert(&mut self, hash: u64) {
        self.hashes.insert(hash);
    }

    pub(crate) fn clear(&mut self) {
        self.hashes.clear();
    }
}

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.hashes == other.hashes
    }
}

impl Eq for Fingerprint {}

impl FromIterator<u64> for Fingerprint {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            hashes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let fp: Fingerprint = [1, 2, 2, 3, 3, 3].into_iter().collect();
        assert_eq!(fp.len(), 3);
        assert!(fp.contains(2));
        assert!(!fp.contains(4));
    }

    #[test]
    fn intersection_is_symmetric() {
        let a: Fingerprint = [1, 2, 3, 4].into_iter().collect();
        let b: Fingerprint = [3, 4, 5].into_iter().collect();
        assert_eq!(a.intersection_count(&b), 2);
        assert_eq!(b.intersection_count(&a), 2);
        assert_eq!(a.intersection_count(&Fingerprint::new()), 0);
    }
}
