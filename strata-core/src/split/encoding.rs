//! Dense encodings of class and group labels.

use std::collections::BTreeMap;

use crate::error::{Result, StrataError};

/// Samples owned by one group and its per-class histogram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GroupProfile {
    samples: Vec<usize>,
    class_counts: Vec<usize>,
}

impl GroupProfile {
    fn new(class_count: usize) -> Self {
        Self {
            samples: Vec::new(),
            class_counts: vec![0; class_count],
        }
    }

    pub(crate) fn samples(&self) -> &[usize] {
        &self.samples
    }

    pub(crate) fn class_counts(&self) -> &[usize] {
        &self.class_counts
    }
}

/// Classes encoded in sorted label order and groups in sorted group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EncodedLabels {
    class_totals: Vec<usize>,
    groups: Vec<GroupProfile>,
}

impl EncodedLabels {
    /// Encodes per-sample labels.
    ///
    /// # Errors
    /// Returns [`StrataError::LabelLengthMismatch`] when the sequences differ
    /// in length.
    pub(crate) fn encode<C, G>(class_labels: &[C], group_labels: &[G]) -> Result<Self>
    where
        C: Ord,
        G: Ord,
    {
        if class_labels.len() != group_labels.len() {
            return Err(StrataError::LabelLengthMismatch {
                classes: class_labels.len(),
                groups: group_labels.len(),
            });
        }

        let mut totals: BTreeMap<&C, usize> = BTreeMap::new();
        for label in class_labels {
            *totals.entry(label).or_default() += 1;
        }
        let codes: BTreeMap<&C, usize> = totals
            .keys()
            .enumerate()
            .map(|(code, label)| (*label, code))
            .collect();

        let mut groups: BTreeMap<&G, GroupProfile> = BTreeMap::new();
        for (sample, (group, class)) in group_labels.iter().zip(class_labels).enumerate() {
            let profile = groups
                .entry(group)
                .or_insert_with(|| GroupProfile::new(codes.len()));
            profile.samples.push(sample);
            if let Some(&code) = codes.get(class)
                && let Some(count) = profile.class_counts.get_mut(code)
            {
                *count += 1;
            }
        }

        Ok(Self {
            class_totals: totals.into_values().collect(),
            groups: groups.into_values().collect(),
        })
    }

    pub(crate) fn class_totals(&self) -> &[usize] {
        &self.class_totals
    }

    pub(crate) fn groups(&self) -> &[GroupProfile] {
        &self.groups
    }
}
