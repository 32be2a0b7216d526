/// Lifecycle states for the remotely fetched boundary resource.
///
/// Happy path: Requested → Fetching → Decoding → Resident.
/// `Failed` is reachable from `Fetching` and `Decoding`; it is terminal and
/// must surface visibly (placeholder banner) rather than as an empty map.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FetchState {
    Requested,
    Fetching,
    Decoding,
    Resident,
    Failed,
}

impl FetchState {
    /// A settled resource needs no further driving.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Resident | FetchState::Failed)
    }
}
