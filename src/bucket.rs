use rand::Rng;
use tracing::{info, span, warn, Level};

use crate::{
    adapters,
    model::bucket::{BucketError, BucketState, ObjectSummary},
};

/// One remote bucket and a snapshot of its listing.
///
/// Construction does no I/O; call [`BucketFacade::connect`] to check the bucket
/// and take the first snapshot. `objects` and `keys` are replaced wholesale on
/// every fetch.
pub struct BucketFacade {
    client: Box<dyn adapters::ObjectAdapter>,
    name: String,
    prefix: String,
    verbose: bool,
    state: BucketState,
    objects: Vec<ObjectSummary>,
    keys: Vec<String>,
}

impl BucketFacade {
    pub fn new(client: Box<dyn adapters::ObjectAdapter>, name: &str, verbose: bool) -> Self {
        Self {
            client,
            name: name.to_string(),
            prefix: String::new(),
            verbose,
            state: BucketState::Unconnected,
            objects: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Limits listings to keys starting with `prefix`.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> BucketState {
        self.state
    }

    pub fn objects(&self) -> &[ObjectSummary] {
        &self.objects
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Checks the bucket exists and, if it does, refreshes the snapshot.
    ///
    /// A missing bucket is not an error: the facade ends up `Absent` with an
    /// empty snapshot. Every other storage failure is returned.
    pub fn connect(&mut self) -> Result<BucketState, BucketError> {
        let span = span!(Level::INFO, "connect", bucket = %self.name);
        let _e = span.enter();

        if !self.client.bucket_exists(&self.name)? {
            if self.verbose {
                warn!(bucket = %self.name, "bucket does not exist");
            }

            self.state = BucketState::Absent;
            self.objects.clear();
            self.keys.clear();
            return Ok(self.state);
        }

        self.state = BucketState::Present;
        self.objects.clear();
        self.keys.clear();
        self.get_objects()?;

        if self.verbose {
            info!(
                bucket = %self.name,
                objects = self.objects.len(),
                keys = self.keys.len(),
                "connected"
            );
        }

        Ok(self.state)
    }

    /// Fetches the full listing and stores it, with its keys, as the current
    /// snapshot.
    ///
    /// Fails fast on a bucket already found absent, without a round trip.
    pub fn get_objects(&mut self) -> Result<&[ObjectSummary], BucketError> {
        if self.state == BucketState::Absent {
            return Err(BucketError::NotFound(self.name.clone()));
        }

        self.objects = self.client.list_bucket_objects(&self.name, &self.prefix)?;
        self.get_keys();
        Ok(&self.objects)
    }

    /// Keys of the current snapshot, minus directory markers, in listing order.
    pub fn get_keys(&mut self) -> &[String] {
        self.keys = self
            .objects
            .iter()
            .filter(|object| !object.is_directory_marker())
            .map(|object| object.key.clone())
            .collect();

        &self.keys
    }

    /// `n` keys drawn uniformly with replacement, so repeats are possible and
    /// `n` may exceed the number of keys. Empty when there are no keys.
    pub fn sample(&self, n: usize) -> Vec<String> {
        self.sample_with(&mut rand::rng(), n)
    }

    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<String> {
        if self.keys.is_empty() {
            return Vec::new();
        }

        (0..n)
            .map(|_| self.keys[rng.random_range(0..self.keys.len())].clone())
            .collect()
    }

    /// Up to `n` distinct keys; at most every key once.
    pub fn sample_distinct(&self, n: usize) -> Vec<String> {
        let amount = n.min(self.keys.len());

        rand::seq::index::sample(&mut rand::rng(), self.keys.len(), amount)
            .into_iter()
            .map(|i| self.keys[i].clone())
            .collect()
    }
}
