use crate::residency::FetchState;
use crate::source::GeometrySource;

/// Fetch/decode orchestration for the single boundary resource.
///
/// The pipeline owns the state transitions while the caller performs the
/// actual I/O and decoding, so it works identically under a blocking file
/// read, an async HTTP fetch, or a test feeding canned payloads.
#[derive(Debug)]
pub struct BoundaryPipeline<T> {
    state: FetchState,
    resident: Option<T>,
    failure: Option<String>,
}

impl<T> Default for BoundaryPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundaryPipeline<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Requested,
            resident: None,
            failure: None,
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    /// Decoded boundaries, once resident.
    pub fn resident(&self) -> Option<&T> {
        self.resident.as_ref()
    }

    /// Failure reason, once failed.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn begin_fetch(&mut self) {
        self.state = FetchState::Fetching;
    }

    pub fn fetch_succeeded(&mut self) {
        self.state = FetchState::Decoding;
    }

    pub fn fetch_failed(&mut self, reason: impl Into<String>) {
        self.state = FetchState::Failed;
        self.failure = Some(reason.into());
    }

    pub fn decode_succeeded(&mut self, value: T) {
        self.state = FetchState::Resident;
        self.resident = Some(value);
    }

    pub fn decode_failed(&mut self, reason: impl Into<String>) {
        self.state = FetchState::Failed;
        self.failure = Some(reason.into());
    }

    /// Drives the whole lifecycle against a synchronous source.
    pub fn run<S, D, E>(&mut self, source: &S, decode: D)
    where
        S: GeometrySource + ?Sized,
        D: FnOnce(&str) -> Result<T, E>,
        E: std::fmt::Display,
    {
        self.begin_fetch();
        let payload = match source.fetch() {
            Ok(payload) => payload,
            Err(err) => {
                self.fetch_failed(err.to_string());
                return;
            }
        };

        self.fetch_succeeded();
        match decode(&payload) {
            Ok(value) => self.decode_succeeded(value),
            Err(err) => self.decode_failed(err.to_string()),
        }
    }
}
