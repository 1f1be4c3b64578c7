//! Contract configuration.

/// Sample records written by `InitLedger`, in write order.
pub const DEFAULT_SAMPLE_RECORDS: [(&str, &str); 3] = [
    ("asset1", "value1"),
    ("asset2", "value2"),
    ("asset3", "value3"),
];

/// Configuration for a [`crate::RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// Records seeded by `InitLedger`, written in this order.
    pub sample_records: Vec<(String, String)>,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            sample_records: DEFAULT_SAMPLE_RECORDS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl ContractConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sample records seeded by `InitLedger`.
    #[must_use]
    pub fn sample_records<I, K, V>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.sample_records = records
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }
}
