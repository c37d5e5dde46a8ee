/// Accumulator slots in first-occurrence order.
///
/// A slot is `None` only while its representative is inside `combine`. If
/// `combine` fails the whole run is abandoned, so callers never observe an
/// empty slot.
pub(crate) struct Slots<T> {
    slots: Vec<Option<T>>,
}

impl<T> Slots<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Open a new slot at the end. Returns its index.
    pub(crate) fn push(&mut self, item: T) -> usize {
        self.slots.push(Some(item));
        self.slots.len() - 1
    }

    /// Lowest-index slot whose representative satisfies `matches`.
    pub(crate) fn try_position<E>(
        &self,
        mut matches: impl FnMut(&T) -> Result<bool, E>,
    ) -> Result<Option<usize>, E> {
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(representative) = slot {
                if matches(representative)? {
                    return Ok(Some(index));
                }
            }
        }
        Ok(None)
    }

    /// Replace slot `index` with `combine(representative, incoming)`.
    /// Returns the new representative.
    ///
    /// `index` must come from `push` or `try_position` on this run.
    pub(crate) fn try_merge<E>(
        &mut self,
        index: usize,
        incoming: T,
        combine: &mut impl FnMut(T, T) -> Result<T, E>,
    ) -> Result<&T, E> {
        let slot = &mut self.slots[index];
        let Some(representative) = slot.take() else {
            unreachable!("slot {index} is only empty while its combine runs");
        };
        Ok(&*slot.insert(combine(representative, incoming)?))
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }
}
