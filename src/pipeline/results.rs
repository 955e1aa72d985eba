use crate::model::{ClassificationResult, MergeError};
use std::sync::OnceLock;

/// Which stage produced a row's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    Rule,
    Inference,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub result: ClassificationResult,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn rule(result: ClassificationResult) -> Self {
        Self {
            result,
            source: ResolutionSource::Rule,
        }
    }

    pub fn inferred(result: ClassificationResult) -> Self {
        Self {
            result,
            source: ResolutionSource::Inference,
        }
    }

    pub fn fallback() -> Self {
        Self {
            result: ClassificationResult::safe_default(),
            source: ResolutionSource::Fallback,
        }
    }
}

/// Fixed-length table of per-row outcomes indexed by original position.
///
/// Every slot is write-once, so workers holding disjoint index sets can merge
/// concurrently through a shared reference without any lock.
#[derive(Debug)]
pub struct ResultTable {
    slots: Vec<OnceLock<Resolution>>,
}

impl ResultTable {
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| OnceLock::new()).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Resolution> {
        self.slots.get(index).and_then(OnceLock::get)
    }

    pub fn set(&self, index: usize, resolution: Resolution) -> Result<(), MergeError> {
        let slot = self.slots.get(index).ok_or(MergeError::OutOfRange {
            index,
            len: self.slots.len(),
        })?;
        slot.set(resolution)
            .map_err(|_| MergeError::AlreadyResolved(index))
    }

    /// Writes `resolutions[k]` into slot `indices[k]`. The whole call is
    /// rejected up front if the lengths differ or any index is out of range.
    pub fn merge_batch_result(
        &self,
        indices: &[usize],
        resolutions: Vec<Resolution>,
    ) -> Result<(), MergeError> {
        if indices.len() != resolutions.len() {
            return Err(MergeError::LengthMismatch {
                indices: indices.len(),
                results: resolutions.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= self.slots.len()) {
            return Err(MergeError::OutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        for (&index, resolution) in indices.iter().zip(resolutions) {
            self.set(index, resolution)?;
        }
        Ok(())
    }

    pub fn missing(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    pub fn into_vec(self) -> Vec<Option<Resolution>> {
        self.slots.into_iter().map(OnceLock::into_inner).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagCode;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn merge_writes_by_original_index() {
        let table = ResultTable::new(4);
        let spice = ClassificationResult::ingredient([TagCode::Spice]);
        table
            .merge_batch_result(
                &[3, 1],
                vec![Resolution::inferred(spice.clone()), Resolution::fallback()],
            )
            .unwrap();

        assert_eq!(table.get(3).map(|r| &r.result), Some(&spice));
        assert_eq!(table.get(1).map(|r| r.source), Some(ResolutionSource::Fallback));
        assert_eq!(table.get(0), None);
        assert_eq!(table.missing(), 2);
        assert!(!table.is_complete());
    }

    #[test]
    fn slots_are_write_once() {
        let table = ResultTable::new(2);
        table.set(0, Resolution::fallback()).unwrap();
        assert_eq!(
            table.set(0, Resolution::fallback()),
            Err(MergeError::AlreadyResolved(0))
        );
    }

    #[test]
    fn bad_merges_are_rejected_before_writing() {
        let table = ResultTable::new(2);
        assert_eq!(
            table.merge_batch_result(&[0, 1], vec![Resolution::fallback()]),
            Err(MergeError::LengthMismatch {
                indices: 2,
                results: 1
            })
        );
        assert_eq!(
            table.merge_batch_result(&[0, 5], vec![Resolution::fallback(), Resolution::fallback()]),
            Err(MergeError::OutOfRange { index: 5, len: 2 })
        );
        assert_eq!(table.missing(), 2);
    }

    #[test]
    fn disjoint_merges_from_many_threads() {
        let table = Arc::new(ResultTable::new(1000));
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let table = Arc::clone(&table);
                thread::spawn(move || {
                    let indices: Vec<usize> = (worker..1000).step_by(8).collect();
                    let resolutions = indices
                        .iter()
                        .map(|&i| {
                            Resolution::inferred(ClassificationResult {
                                is_ingredient: i % 2 == 0,
                                tags: if i % 2 == 0 { vec![TagCode::Grain] } else { vec![] },
                            })
                        })
                        .collect();
                    table.merge_batch_result(&indices, resolutions).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(table.is_complete());
        let table = Arc::try_unwrap(table).unwrap();
        for (i, slot) in table.into_vec().into_iter().enumerate() {
            assert_eq!(slot.unwrap().result.is_ingredient, i % 2 == 0);
        }
    }
}
