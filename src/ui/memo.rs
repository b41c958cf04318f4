//! Derived values cached against a dependency.

/// Caches `compute(dep)` and only re-evaluates when `dep` changes.
#[derive(Debug, Clone)]
pub struct Memo<D, T> {
    dep: D,
    value: T,
    compute: fn(&D) -> T,
    evaluations: u64,
}

impl<D: PartialEq + Clone, T> Memo<D, T> {
    pub fn new(dep: D, compute: fn(&D) -> T) -> Self {
        let value = compute(&dep);
        Self {
            dep,
            value,
            compute,
            evaluations: 1,
        }
    }

    /// Feed the current dependency; recomputes only if it differs from the
    /// last one seen.
    pub fn update(&mut self, dep: &D) -> &T {
        if *dep != self.dep {
            self.dep = dep.clone();
            self.value = (self.compute)(&self.dep);
            self.evaluations += 1;
        }
        &self.value
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// How many times `compute` has run, including the initial evaluation.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
