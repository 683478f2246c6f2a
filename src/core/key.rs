use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClusteringOrder {
    Asc,
    Desc,
}

impl ClusteringOrder {
    #[must_use]
    pub fn as_cql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeyRole {
    Partition,
    Clustering { order: ClusteringOrder },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyColumn {
    pub name: String,
    pub role: KeyRole,
}

impl KeyColumn {
    #[must_use]
    pub fn partition(name: String) -> Self {
        Self {
            name,
            role: KeyRole::Partition,
        }
    }

    #[must_use]
    pub fn clustering(name: String, order: ClusteringOrder) -> Self {
        Self {
            name,
            role: KeyRole::Clustering { order },
        }
    }

    /// `<name> ASC|DESC` fragment for CLUSTERING ORDER BY. None for
    /// partition keys, which carry no order.
    #[must_use]
    pub fn clustering_order_cql(&self) -> Option<String> {
        match &self.role {
            KeyRole::Partition => None,
            KeyRole::Clustering { order } => Some(format!("{} {}", self.name, order.as_cql())),
        }
    }
}
