use std::collections::HashMap;

/// Compteur de postes attribués par employé pendant une génération.
#[derive(Debug, Clone, Default)]
pub(crate) struct WorkloadTracker {
    counts: HashMap<String, u32>,
}

impl WorkloadTracker {
    /// Remet à zéro tous les employés connus ; oublie les autres.
    pub(crate) fn reset<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.counts = names.into_iter().map(|n| (n.to_owned(), 0)).collect();
    }

    pub(crate) fn set_zero(&mut self, name: &str) {
        self.counts.insert(name.to_owned(), 0);
    }

    pub(crate) fn increment(&mut self, name: &str) {
        *self.counts.entry(name.to_owned()).or_insert(0) += 1;
    }

    pub(crate) fn get(&self, name: &str) -> Option<u32> {
        self.counts.get(name).copied()
    }
}
